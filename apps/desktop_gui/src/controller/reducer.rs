//! Applies UI events to the navigator.

use demo_core::Navigator;

use crate::controller::events::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Pushed,
    Popped,
    IgnoredAtRoot,
}

pub fn reduce(navigator: &mut Navigator, event: UiEvent) -> Transition {
    match event {
        UiEvent::RowClicked { name } => {
            navigator.open_details(&name);
            Transition::Pushed
        }
        UiEvent::BackRequested { source } => {
            if navigator.back() {
                Transition::Popped
            } else {
                tracing::debug!(source = source.label(), "back requested on root route");
                Transition::IgnoredAtRoot
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use demo_core::Navigator;
    use shared::routes::Route;

    use super::{reduce, Transition};
    use crate::controller::events::{BackSource, UiEvent};

    fn click(name: &str) -> UiEvent {
        UiEvent::RowClicked { name: name.into() }
    }

    fn back(source: BackSource) -> UiEvent {
        UiEvent::BackRequested { source }
    }

    #[test]
    fn row_click_opens_details_for_that_name() {
        let mut nav = Navigator::new();
        assert_eq!(reduce(&mut nav, click("Pandablue")), Transition::Pushed);
        assert_eq!(nav.current_route(), &Route::details("Pandablue"));
    }

    #[test]
    fn every_back_source_pops_the_same_way() {
        for source in [
            BackSource::TopBarButton,
            BackSource::Keyboard,
            BackSource::PointerButton,
        ] {
            let mut nav = Navigator::new();
            reduce(&mut nav, click("LynxRed"));
            assert_eq!(reduce(&mut nav, back(source)), Transition::Popped);
            assert_eq!(nav.current_route(), &Route::List);
        }
    }

    #[test]
    fn back_on_list_is_ignored() {
        let mut nav = Navigator::new();
        assert_eq!(
            reduce(&mut nav, back(BackSource::Keyboard)),
            Transition::IgnoredAtRoot
        );
        assert_eq!(nav.depth(), 1);
    }
}
