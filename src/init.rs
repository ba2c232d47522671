//! Page initialization: one pass over the parsed document.
//!
//! Discovery is a pure function from a document snapshot to bindings, so the
//! wiring can be exercised without a rendering engine. Nothing re-scans the
//! page afterwards; widgets or forms inserted later are not picked up.

use crate::api::Api;
use crate::page::Dom;
use crate::vote;

/// One enhancement target found in the document.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Binding {
    VoteWidget { slug: String },
    SubscribeForm { form: usize },
}

/// Enumerate the vote widgets and subscription forms present in the
/// document. Widgets with an empty slug attribute are skipped silently.
pub fn discover_bindings(dom: &dyn Dom) -> Vec<Binding> {
    let mut bindings = Vec::new();
    for slug in dom.widget_slugs() {
        if slug.is_empty() {
            continue;
        }
        bindings.push(Binding::VoteWidget { slug });
    }
    for form in 0..dom.form_count() {
        bindings.push(Binding::SubscribeForm { form });
    }
    bindings
}

/// Fetch the initial vote state of every widget binding. Requests run
/// concurrently and each failure stays local to its widget.
pub async fn run_initial_load(api: &dyn Api, dom: &dyn Dom, bindings: &[Binding]) {
    let loads = bindings.iter().filter_map(|binding| match binding {
        Binding::VoteWidget { slug } => Some(vote::load_votes(api, dom, slug)),
        Binding::SubscribeForm { .. } => None,
    });
    futures::future::join_all(loads).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Direction, MockApi, VoteState};
    use crate::page::fake::FakeDom;
    use mockall::predicate::eq;

    #[test]
    fn test_discovery_lists_widgets_then_forms() {
        let dom = FakeDom::new()
            .with_widget("first-post")
            .with_widget("second-post")
            .with_form("");

        assert_eq!(
            discover_bindings(&dom),
            vec![
                Binding::VoteWidget {
                    slug: "first-post".to_string()
                },
                Binding::VoteWidget {
                    slug: "second-post".to_string()
                },
                Binding::SubscribeForm { form: 0 },
            ]
        );
    }

    #[test]
    // A widget carrying the attribute with no value is not a binding.
    fn test_discovery_skips_empty_slugs() {
        let dom = FakeDom::new().with_widget("").with_widget("real");

        assert_eq!(
            discover_bindings(&dom),
            vec![Binding::VoteWidget {
                slug: "real".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_initial_load_syncs_every_widget() {
        let mut api = MockApi::new();
        api.expect_get_votes().with(eq("a")).returning(|_| {
            Ok(VoteState {
                up: 1,
                down: 0,
                score: 1,
                user_vote: Some(Direction::Up),
            })
        });
        api.expect_get_votes().with(eq("b")).returning(|_| {
            Ok(VoteState {
                up: 0,
                down: 4,
                score: -4,
                user_vote: None,
            })
        });

        let dom = FakeDom::new().with_widget("a").with_widget("b").with_form("");
        let bindings = discover_bindings(&dom);
        run_initial_load(&api, &dom, &bindings).await;

        assert_eq!(dom.widget("a").unwrap().score_text, "1");
        assert!(dom.widget("a").unwrap().up_active);
        assert_eq!(dom.widget("b").unwrap().score_text, "-4");
        assert!(!dom.widget("b").unwrap().down_active);
    }
}
