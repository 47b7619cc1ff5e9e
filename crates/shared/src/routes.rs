//! Route table shared by the navigator and every front end.
//!
//! Only two destinations exist: the user list and the per-user details
//! screen. Paths follow the `details/{name}` pattern, with the name segment
//! form-urlencoded so arbitrary display names survive the round trip.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::RouteError;

pub const LIST_ROUTE: &str = "list";
pub const DETAILS_ROUTE_PREFIX: &str = "details";
pub const DETAILS_ROUTE_PATTERN: &str = "details/{name}";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    List,
    Details {
        /// `None` when the path carried no name segment.
        user_name: Option<String>,
    },
}

impl Route {
    pub fn details(user_name: impl Into<String>) -> Self {
        Route::Details {
            user_name: Some(user_name.into()),
        }
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            Route::List => LIST_ROUTE,
            Route::Details { .. } => DETAILS_ROUTE_PATTERN,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => LIST_ROUTE.to_string(),
            Route::Details { user_name: None } => DETAILS_ROUTE_PREFIX.to_string(),
            Route::Details {
                user_name: Some(name),
            } => {
                let encoded: String = form_urlencoded::byte_serialize(name.as_bytes()).collect();
                format!("{DETAILS_ROUTE_PREFIX}/{encoded}")
            }
        }
    }

    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.strip_prefix('/').unwrap_or(path);

        if trimmed == LIST_ROUTE {
            return Ok(Route::List);
        }

        let Some(rest) = trimmed.strip_prefix(DETAILS_ROUTE_PREFIX) else {
            return Err(RouteError::unknown(path));
        };

        match rest {
            "" | "/" => Ok(Route::Details { user_name: None }),
            _ => {
                let Some(segment) = rest.strip_prefix('/') else {
                    return Err(RouteError::unknown(path));
                };
                if segment.contains('/') {
                    return Err(RouteError::unknown(path));
                }
                Ok(Route::Details {
                    user_name: Some(decode_segment(segment)),
                })
            }
        }
    }

    /// Name argument of a details route; `None` for the list route too.
    pub fn user_name(&self) -> Option<&str> {
        match self {
            Route::Details { user_name } => user_name.as_deref(),
            Route::List => None,
        }
    }
}

/// Inverse of `form_urlencoded::byte_serialize` over a whole segment; raw
/// `&` and `=` are kept as literal characters.
fn decode_segment(segment: &str) -> String {
    let spaced = segment.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

impl std::str::FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_route() {
        assert_eq!(Route::parse("list"), Ok(Route::List));
        assert_eq!(Route::parse("/list"), Ok(Route::List));
    }

    #[test]
    fn parses_details_route_with_name() {
        assert_eq!(
            Route::parse("details/Pandablue"),
            Ok(Route::details("Pandablue"))
        );
    }

    #[test]
    fn details_without_segment_has_absent_argument() {
        assert_eq!(
            Route::parse("details"),
            Ok(Route::Details { user_name: None })
        );
        assert_eq!(
            Route::parse("details/"),
            Ok(Route::Details { user_name: None })
        );
    }

    #[test]
    fn rejects_unregistered_paths() {
        for path in ["", "settings", "listing", "detailsX", "details/a/b"] {
            assert_eq!(Route::parse(path), Err(RouteError::unknown(path)), "{path}");
        }
    }

    #[test]
    fn encodes_reserved_characters_in_name_segment() {
        let route = Route::details("Snow leopard/Blue & Co");
        let path = route.path();
        assert!(!path["details/".len()..].contains('/'));
        assert_eq!(Route::parse(&path), Ok(route));
    }

    #[test]
    fn empty_and_absent_names_build_different_paths() {
        assert_eq!(Route::details("").path(), "details/");
        assert_eq!(Route::Details { user_name: None }.path(), "details");
    }

    #[test]
    fn reports_pattern_for_each_route() {
        assert_eq!(Route::List.pattern(), "list");
        assert_eq!(Route::details("x").pattern(), "details/{name}");
    }

    #[test]
    fn raw_reserved_characters_stay_in_decoded_name() {
        assert_eq!(
            Route::parse("details/Tom&Jerry"),
            Ok(Route::details("Tom&Jerry"))
        );
        assert_eq!(
            Route::parse("details/a=b&c=d"),
            Ok(Route::details("a=b&c=d"))
        );
        assert_eq!(
            Route::parse("details/Tom%26Jerry"),
            Ok(Route::details("Tom&Jerry"))
        );
    }

    #[test]
    fn plus_and_percent_escapes_decode_like_form_encoding() {
        assert_eq!(
            Route::parse("details/Snow+leopard%2B1"),
            Ok(Route::details("Snow leopard+1"))
        );
        let name = "100% Otter & Co = fine";
        assert_eq!(Route::parse(&Route::details(name).path()), Ok(Route::details(name)));
    }
}
