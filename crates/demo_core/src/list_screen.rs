//! State behind the user list screen.

use std::ops::Range;

use shared::domain::User;

use crate::generator::UserGenerator;

pub const LIST_TITLE: &str = "Compose Demo Home Page";

/// Side length of the circular avatar in each row.
pub const AVATAR_SIZE: f32 = 48.0;
pub const AVATAR_SPACING: f32 = 16.0;
pub const ROW_PADDING: f32 = 8.0;
pub const NAME_FONT_SIZE: f32 = 18.0;

/// Owns the injected generator and the users it produced. Users are created
/// on first access and kept for as long as the screen lives.
pub struct ListScreen {
    generator: Box<dyn UserGenerator>,
    user_count: usize,
    users: Option<Vec<User>>,
}

impl ListScreen {
    pub fn new(generator: Box<dyn UserGenerator>, user_count: usize) -> Self {
        Self {
            generator,
            user_count,
            users: None,
        }
    }

    pub fn title(&self) -> &'static str {
        LIST_TITLE
    }

    pub fn users(&mut self) -> &[User] {
        let generator = &mut self.generator;
        let user_count = self.user_count;
        self.users
            .get_or_insert_with(|| {
                tracing::debug!(count = user_count, "generating list users");
                generator.generate_many(user_count)
            })
            .as_slice()
    }

    pub fn is_populated(&self) -> bool {
        self.users.is_some()
    }

    /// Name carried to the details route when row `index` is clicked.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.users
            .as_ref()
            .and_then(|users| users.get(index))
            .map(|user| user.name.as_str())
    }
}

/// Computes which rows of a fixed-height list intersect the viewport so only
/// those are materialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LazyListWindow {
    row_height: f32,
    overscan: usize,
}

impl LazyListWindow {
    pub const MIN_ROW_HEIGHT: f32 = 1.0;

    pub fn new(row_height: f32, overscan: usize) -> Self {
        let row_height = if row_height.is_finite() {
            row_height.max(Self::MIN_ROW_HEIGHT)
        } else {
            Self::MIN_ROW_HEIGHT
        };
        Self {
            row_height,
            overscan,
        }
    }

    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    pub fn content_height(&self, total: usize) -> f32 {
        total as f32 * self.row_height
    }

    pub fn row_top(&self, index: usize) -> f32 {
        index as f32 * self.row_height
    }

    /// Upper bound on `visible_range(..).len()` for a viewport of this height,
    /// independent of the total row count.
    pub fn max_materialized_rows(&self, viewport_height: f32) -> usize {
        if viewport_height <= 0.0 {
            return 0;
        }
        (viewport_height / self.row_height).ceil() as usize + 1 + 2 * self.overscan
    }

    pub fn visible_range(
        &self,
        scroll_offset: f32,
        viewport_height: f32,
        total: usize,
    ) -> Range<usize> {
        if total == 0 || !(viewport_height > 0.0) {
            return 0..0;
        }
        let offset = scroll_offset.max(0.0);
        let first = (offset / self.row_height).floor() as usize;
        let last = ((offset + viewport_height) / self.row_height).ceil() as usize;

        let start = first.saturating_sub(self.overscan).min(total);
        let end = last.saturating_add(self.overscan).min(total);
        start..end.max(start)
    }
}

#[cfg(test)]
#[path = "tests/list_screen_tests.rs"]
mod tests;
