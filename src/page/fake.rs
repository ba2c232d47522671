//! In-memory stand-in for the live document, used by unit tests.

use std::cell::RefCell;

use crate::api::Direction;
use crate::page::{Dom, MessageTone};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeWidget {
    pub slug: String,
    pub score_text: String,
    pub up_active: bool,
    pub down_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FakeForm {
    pub email: String,
    pub message: Option<(MessageTone, String)>,
}

/// A fake page. Mutation goes through `&self` like the real document, so the
/// state lives behind a `RefCell`.
#[derive(Debug, Default)]
pub struct FakeDom {
    widgets: RefCell<Vec<FakeWidget>>,
    forms: RefCell<Vec<FakeForm>>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_widget(self, slug: &str) -> Self {
        self.widgets.borrow_mut().push(FakeWidget {
            slug: slug.to_string(),
            ..FakeWidget::default()
        });
        self
    }

    pub fn with_form(self, email: &str) -> Self {
        self.forms.borrow_mut().push(FakeForm {
            email: email.to_string(),
            message: None,
        });
        self
    }

    pub fn widget(&self, slug: &str) -> Option<FakeWidget> {
        self.widgets
            .borrow()
            .iter()
            .find(|w| w.slug == slug)
            .cloned()
    }

    pub fn form(&self, form: usize) -> Option<FakeForm> {
        self.forms.borrow().get(form).cloned()
    }
}

impl Dom for FakeDom {
    fn widget_slugs(&self) -> Vec<String> {
        self.widgets.borrow().iter().map(|w| w.slug.clone()).collect()
    }

    fn set_score(&self, slug: &str, text: &str) {
        if let Some(w) = self.widgets.borrow_mut().iter_mut().find(|w| w.slug == slug) {
            w.score_text = text.to_string();
        }
    }

    fn set_vote_mark(&self, slug: &str, direction: Direction, active: bool) {
        if let Some(w) = self.widgets.borrow_mut().iter_mut().find(|w| w.slug == slug) {
            match direction {
                Direction::Up => w.up_active = active,
                Direction::Down => w.down_active = active,
            }
        }
    }

    fn form_count(&self) -> usize {
        self.forms.borrow().len()
    }

    fn email_value(&self, form: usize) -> Option<String> {
        self.forms.borrow().get(form).map(|f| f.email.clone())
    }

    fn set_email_value(&self, form: usize, value: &str) {
        if let Some(f) = self.forms.borrow_mut().get_mut(form) {
            f.email = value.to_string();
        }
    }

    fn show_message(&self, form: usize, tone: MessageTone, text: &str) {
        if let Some(f) = self.forms.borrow_mut().get_mut(form) {
            f.message = Some((tone, text.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_updates_address_widgets_by_slug() {
        let dom = FakeDom::new().with_widget("a").with_widget("b");
        dom.set_score("b", "7");
        dom.set_vote_mark("b", Direction::Up, true);

        assert_eq!(dom.widget("a").unwrap().score_text, "");
        let b = dom.widget("b").unwrap();
        assert_eq!(b.score_text, "7");
        assert!(b.up_active);
        assert!(!b.down_active);
    }

    #[test]
    fn test_updates_to_missing_nodes_are_no_ops() {
        let dom = FakeDom::new().with_form("a@b.c");
        dom.set_score("gone", "1");
        dom.set_email_value(5, "x");
        dom.show_message(5, MessageTone::Error, "x");

        assert_eq!(dom.form(0).unwrap().email, "a@b.c");
        assert_eq!(dom.form(0).unwrap().message, None);
        assert_eq!(dom.form(5), None);
    }
}
