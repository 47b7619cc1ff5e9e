//! Back-stack navigation between the list and details routes.

use shared::{error::RouteError, routes::Route};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub id: EntryId,
    pub route: Route,
}

/// Route stack. Never empty: the bottom entry is always the list route.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<RouteEntry>,
    next_id: u64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![RouteEntry {
                id: EntryId(0),
                route: Route::List,
            }],
            next_id: 1,
        }
    }

    pub fn current(&self) -> &RouteEntry {
        // `stack` always holds the root entry.
        &self.stack[self.stack.len() - 1]
    }

    pub fn current_route(&self) -> &Route {
        &self.current().route
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.stack.len() == 1
    }

    /// Resolves `path` against the registered routes and pushes it.
    pub fn navigate(&mut self, path: &str) -> Result<&RouteEntry, RouteError> {
        let route = Route::parse(path).inspect_err(|err| {
            tracing::warn!(path, "navigation rejected: {err}");
        })?;
        Ok(self.navigate_to(route))
    }

    pub fn navigate_to(&mut self, route: Route) -> &RouteEntry {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        tracing::debug!(
            route = %route,
            pattern = route.pattern(),
            entry = id.0,
            depth = self.stack.len() + 1,
            "navigate"
        );
        self.stack.push(RouteEntry { id, route });
        self.current()
    }

    /// Shortcut for a list row click.
    pub fn open_details(&mut self, user_name: &str) -> &RouteEntry {
        self.navigate_to(Route::details(user_name))
    }

    /// Pops the top entry. Returns `false` and leaves the stack untouched when
    /// only the root entry remains.
    pub fn back(&mut self) -> bool {
        if self.is_at_root() {
            tracing::debug!("back ignored at root route");
            return false;
        }
        if let Some(popped) = self.stack.pop() {
            tracing::debug!(
                route = %popped.route,
                entry = popped.id.0,
                depth = self.stack.len(),
                "back"
            );
        }
        true
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
