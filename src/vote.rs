//! Vote casting and widget synchronization.
//!
//! Voting is non-critical page furniture, so every failure stays local: a
//! server rejection leaves the widget untouched with no diagnostic, and a
//! transport fault on a cast produces exactly one warn line. Nothing here
//! returns an error to the caller.

use crate::api::{Api, Direction, VoteState};
use crate::page::Dom;

/// Cast a vote on `slug` and reflect the server's updated state into the
/// matching widget.
pub async fn cast_vote(api: &dyn Api, dom: &dyn Dom, slug: &str, direction: Direction) {
    match api.cast_vote(slug, direction).await {
        Ok(state) => sync_widget(dom, slug, &state),
        Err(e) if e.is_rejection() => {}
        Err(e) => log::warn!("vote on {} failed: {}", slug, e),
    }
}

/// Read `slug`'s vote state and reflect it into the matching widget. Issued
/// once per widget at page load; failures leave the widget showing its
/// server-rendered content, with no diagnostic.
pub async fn load_votes(api: &dyn Api, dom: &dyn Dom, slug: &str) {
    if let Ok(state) = api.get_votes(slug).await {
        sync_widget(dom, slug, &state);
    }
}

/// Replace the widget's displayed state wholesale: score text verbatim, and
/// the active mark on exactly the control matching `user_vote` (neither when
/// null). A missing widget is a no-op.
pub fn sync_widget(dom: &dyn Dom, slug: &str, state: &VoteState) {
    dom.set_score(slug, &state.score.to_string());
    dom.set_vote_mark(slug, Direction::Up, state.user_vote == Some(Direction::Up));
    dom.set_vote_mark(
        slug,
        Direction::Down,
        state.user_vote == Some(Direction::Down),
    );
}
