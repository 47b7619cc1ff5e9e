use shared::{error::RouteError, routes::Route};

use super::{EntryId, Navigator};

#[test]
fn starts_with_single_list_entry() {
    let nav = Navigator::new();
    assert_eq!(nav.depth(), 1);
    assert!(nav.is_at_root());
    assert_eq!(nav.current_route(), &Route::List);
    assert_eq!(nav.current().id, EntryId(0));
}

#[test]
fn row_click_pushes_details_with_name_parameter() {
    let mut nav = Navigator::new();
    let entry = nav.open_details("Pandablue");
    assert_eq!(entry.route, Route::details("Pandablue"));
    assert_eq!(entry.route.user_name(), Some("Pandablue"));
    assert_eq!(nav.depth(), 2);
}

#[test]
fn navigate_by_path_resolves_registered_routes() {
    let mut nav = Navigator::new();
    let entry = nav.navigate("details/OtterTeal").expect("registered");
    assert_eq!(entry.route.user_name(), Some("OtterTeal"));
}

#[test]
fn navigate_to_unknown_path_leaves_stack_untouched() {
    let mut nav = Navigator::new();
    let err = nav.navigate("profile/42").expect_err("unregistered");
    assert_eq!(err, RouteError::unknown("profile/42"));
    assert_eq!(nav.depth(), 1);
    assert_eq!(nav.current_route(), &Route::List);
}

#[test]
fn back_from_details_returns_to_list() {
    let mut nav = Navigator::new();
    nav.open_details("LynxRed");
    assert!(nav.back());
    assert_eq!(nav.current_route(), &Route::List);
    assert_eq!(nav.current().id, EntryId(0));
}

#[test]
fn back_at_root_is_a_no_op() {
    let mut nav = Navigator::new();
    assert!(!nav.back());
    assert!(!nav.back());
    assert_eq!(nav.depth(), 1);
    assert_eq!(nav.current_route(), &Route::List);
}

#[test]
fn entry_ids_are_never_reused() {
    let mut nav = Navigator::new();
    let first = nav.open_details("A").id;
    nav.back();
    let second = nav.open_details("A").id;
    assert_ne!(first, second);
    assert!(second > first);
}

#[test]
fn stacked_details_pop_in_reverse_order() {
    let mut nav = Navigator::new();
    nav.open_details("First");
    nav.open_details("Second");
    assert_eq!(nav.depth(), 3);

    assert!(nav.back());
    assert_eq!(nav.current_route().user_name(), Some("First"));
    assert!(nav.back());
    assert_eq!(nav.current_route(), &Route::List);
}
