//! Live-document implementation of [`Dom`] on top of `web-sys`.
//!
//! Holds no element references: every call re-queries the document, so nodes
//! removed since page load degrade to no-ops instead of stale handles.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::api::Direction;
use crate::consts::client_consts;
use crate::page::{Dom, MessageTone};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDom;

impl BrowserDom {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    pub(crate) fn widget(slug: &str) -> Option<Element> {
        let selector = format!("[{}=\"{}\"]", client_consts::SLUG_ATTR, slug);
        Self::document()?.query_selector(&selector).ok()?
    }

    pub(crate) fn form(index: usize) -> Option<Element> {
        let forms = Self::document()?
            .query_selector_all(client_consts::FORM_SELECTOR)
            .ok()?;
        forms.item(index as u32)?.dyn_into::<Element>().ok()
    }

    fn email_input(form: &Element) -> Option<web_sys::HtmlInputElement> {
        form.query_selector(client_consts::EMAIL_SELECTOR)
            .ok()??
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()
    }

    pub(crate) fn control_selector(direction: Direction) -> &'static str {
        match direction {
            Direction::Up => client_consts::UP_SELECTOR,
            Direction::Down => client_consts::DOWN_SELECTOR,
        }
    }
}

impl Dom for BrowserDom {
    fn widget_slugs(&self) -> Vec<String> {
        let Some(doc) = Self::document() else {
            return Vec::new();
        };
        let Ok(widgets) = doc.query_selector_all(client_consts::WIDGET_SELECTOR) else {
            return Vec::new();
        };

        let mut slugs = Vec::with_capacity(widgets.length() as usize);
        for i in 0..widgets.length() {
            let Some(node) = widgets.item(i) else { continue };
            let Ok(element) = node.dyn_into::<Element>() else {
                continue;
            };
            if let Some(slug) = element.get_attribute(client_consts::SLUG_ATTR) {
                slugs.push(slug);
            }
        }
        slugs
    }

    fn set_score(&self, slug: &str, text: &str) {
        let Some(widget) = Self::widget(slug) else {
            return;
        };
        if let Ok(Some(score)) = widget.query_selector(client_consts::SCORE_SELECTOR) {
            score.set_text_content(Some(text));
        }
    }

    fn set_vote_mark(&self, slug: &str, direction: Direction, active: bool) {
        let Some(widget) = Self::widget(slug) else {
            return;
        };
        let Ok(Some(control)) = widget.query_selector(Self::control_selector(direction)) else {
            return;
        };
        let class_list = control.class_list();
        let _ = if active {
            class_list.add_1(client_consts::ACTIVE_CLASS)
        } else {
            class_list.remove_1(client_consts::ACTIVE_CLASS)
        };
    }

    fn form_count(&self) -> usize {
        Self::document()
            .and_then(|doc| doc.query_selector_all(client_consts::FORM_SELECTOR).ok())
            .map(|forms| forms.length() as usize)
            .unwrap_or(0)
    }

    fn email_value(&self, form: usize) -> Option<String> {
        let input = Self::email_input(&Self::form(form)?)?;
        Some(input.value())
    }

    fn set_email_value(&self, form: usize, value: &str) {
        let Some(input) = Self::form(form).as_ref().and_then(Self::email_input) else {
            return;
        };
        input.set_value(value);
    }

    fn show_message(&self, form: usize, tone: MessageTone, text: &str) {
        let Some(form) = Self::form(form) else {
            return;
        };
        let Ok(Some(area)) = form.query_selector(client_consts::MESSAGE_SELECTOR) else {
            return;
        };
        area.set_text_content(Some(text));

        let class_list = area.class_list();
        let _ = class_list.remove_2("message-success", "message-error");
        let _ = class_list.add_1(&format!("message-{}", tone));
    }
}
