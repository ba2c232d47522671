//! Wasm entry point: runs once the document is parsed, wires the event
//! handlers, and kicks off the initial vote-state load.
//!
//! Each handler spawns an independent future; two in-flight requests for the
//! same widget may complete out of order and the last response wins.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::api::{ApiClient, Direction};
use crate::environment::Environment;
use crate::init::{self, Binding};
use crate::page::browser::BrowserDom;
use crate::{logging, subscribe, vote};

#[wasm_bindgen(start)]
pub fn start() {
    logging::init_console_logging();

    let Some(document) = BrowserDom::document() else {
        return;
    };
    // The module may be instantiated while the document is still parsing;
    // enhancement waits for the full structure either way.
    if document.ready_state() == "loading" {
        let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            enhance();
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", handler.as_ref().unchecked_ref());
        handler.forget();
    } else {
        enhance();
    }
}

fn enhance() {
    let api = ApiClient::new(Environment::default());
    let dom = BrowserDom::new();
    let bindings = init::discover_bindings(&dom);

    for binding in &bindings {
        match binding {
            Binding::VoteWidget { slug } => wire_widget(&api, slug),
            Binding::SubscribeForm { form } => wire_form(&api, *form),
        }
    }

    spawn_local(async move {
        init::run_initial_load(&api, &BrowserDom, &bindings).await;
    });
}

fn wire_widget(api: &ApiClient, slug: &str) {
    let Some(widget) = BrowserDom::widget(slug) else {
        return;
    };
    for direction in [Direction::Up, Direction::Down] {
        let Ok(Some(control)) = widget.query_selector(BrowserDom::control_selector(direction))
        else {
            continue;
        };
        let api = api.clone();
        let slug = slug.to_string();
        let handler = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let api = api.clone();
            let slug = slug.clone();
            spawn_local(async move {
                vote::cast_vote(&api, &BrowserDom, &slug, direction).await;
            });
        }) as Box<dyn FnMut(web_sys::Event)>);
        attach(&control, "click", &handler);
        handler.forget();
    }
}

fn wire_form(api: &ApiClient, form: usize) {
    let Some(element) = BrowserDom::form(form) else {
        return;
    };
    let api = api.clone();
    let handler = Closure::wrap(Box::new(move |event: web_sys::Event| {
        // Keep the browser from performing a full-page submission.
        event.prevent_default();
        let api = api.clone();
        spawn_local(async move {
            subscribe::submit_subscription(&api, &BrowserDom, form).await;
        });
    }) as Box<dyn FnMut(web_sys::Event)>);
    attach(&element, "submit", &handler);
    handler.forget();
}

fn attach(target: &Element, event: &str, handler: &Closure<dyn FnMut(web_sys::Event)>) {
    let _ = target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
}
