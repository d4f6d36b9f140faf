//! Notification value object

use crate::quote::entities::Quote;
use crate::util::truncate_with_ellipsis;

/// Maximum body length, in characters, handed to a notification backend.
pub const MAX_BODY_CHARS: usize = 200;

/// A title/body pair ready for dispatch.
///
/// The body is always at most [`MAX_BODY_CHARS`] characters; longer input is
/// cut and terminated with `…` at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    title: String,
    body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: &str) -> Self {
        Self {
            title: title.into(),
            body: truncate_with_ellipsis(body, MAX_BODY_CHARS),
        }
    }

    pub fn for_quote(title: impl Into<String>, quote: &Quote) -> Self {
        Self::new(title, &quote.to_string())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
