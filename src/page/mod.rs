//! Minimal document surface consumed by the enhancement layer.
//!
//! The markup is owned by the site templates; this trait is the query/update
//! contract against it, narrow enough to run against a fake document in
//! tests. The wasm build binds it to the live page ([`browser::BrowserDom`]);
//! nothing in the crate reaches for the document any other way.

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(test)]
pub mod fake;

use crate::api::Direction;

/// Visual tone of a subscription form's message area. The display class is
/// derived from the wire form (`message-success` / `message-error`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MessageTone {
    Success,
    Error,
}

/// One page's vote widgets and subscription forms.
///
/// Widgets are addressed by slug, forms by document-order index. Every update
/// method is a no-op when the addressed node is missing or was removed; the
/// page must never fault over a stale handle.
pub trait Dom {
    /// Slug attribute values of every vote widget, in document order.
    /// Values are returned verbatim, empty attributes included.
    fn widget_slugs(&self) -> Vec<String>;

    /// Replace the widget's score display text.
    fn set_score(&self, slug: &str, text: &str);

    /// Set or clear the active mark on one of the widget's vote controls.
    fn set_vote_mark(&self, slug: &str, direction: Direction, active: bool);

    /// Number of subscription forms in the document.
    fn form_count(&self) -> usize;

    /// Current value of the form's email input, or `None` for a missing form.
    fn email_value(&self, form: usize) -> Option<String>;

    /// Replace the email input's value.
    fn set_email_value(&self, form: usize, value: &str);

    /// Replace the form's message area text and tone styling. Exactly one
    /// message is visible at a time.
    fn show_message(&self, form: usize, tone: MessageTone, text: &str);
}
