//! Subscription form handling.
//!
//! Unlike voting, the user is owed feedback here: success clears the input
//! and says so, a server rejection shows the server's own wording (or a
//! fallback), and a transport failure shows a distinct network message. An
//! empty input is a non-event and produces neither a request nor a message.

use crate::api::Api;
use crate::consts::client_consts;
use crate::page::{Dom, MessageTone};

/// Submit the form's email to the subscription list and reflect the outcome
/// into its message area.
pub async fn submit_subscription(api: &dyn Api, dom: &dyn Dom, form: usize) {
    let Some(raw) = dom.email_value(form) else {
        return;
    };
    let email = raw.trim();
    if email.is_empty() {
        return;
    }

    match api.subscribe(email).await {
        Ok(result) if result.ok => {
            dom.set_email_value(form, "");
            dom.show_message(
                form,
                MessageTone::Success,
                client_consts::SUBSCRIBED_MESSAGE,
            );
        }
        // The input stays populated so the user can correct and resubmit.
        Ok(result) => {
            let text = result
                .error
                .as_deref()
                .unwrap_or(client_consts::SUBSCRIBE_FAILED_MESSAGE);
            dom.show_message(form, MessageTone::Error, text);
        }
        Err(_) => {
            dom.show_message(
                form,
                MessageTone::Error,
                client_consts::SUBSCRIBE_NETWORK_MESSAGE,
            );
        }
    }
}
