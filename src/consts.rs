pub mod client_consts {
    //! Client Configuration Constants
    //!
    //! This module contains all fixed strings shared between the page layer,
    //! the API client, and the tests, organized by functional area.

    // =============================================================================
    // API ENDPOINTS
    // =============================================================================

    /// Endpoint accepting a vote write, POST with a JSON body.
    pub const VOTE_ENDPOINT: &str = "/api/vote";

    /// Endpoint prefix for reading a slug's vote state; the slug is appended
    /// as a path segment.
    pub const VOTES_ENDPOINT: &str = "/api/votes";

    /// Endpoint accepting a subscription write, POST with a JSON body.
    pub const SUBSCRIBE_ENDPOINT: &str = "/api/subscribe";

    /// Operator endpoint listing the subscription roster. Only served to
    /// localhost callers; consumed by `laz-admin`, never from the page.
    pub const SUBSCRIBERS_ENDPOINT: &str = "/api/subscribers";

    // =============================================================================
    // DOM CONTRACT
    // =============================================================================
    // The markup is owned by the site templates; these names are the contract
    // the enhancement layer consumes.

    /// Attribute naming the slug of a vote widget.
    pub const SLUG_ATTR: &str = "data-vote-slug";

    /// Selector matching every vote widget.
    pub const WIDGET_SELECTOR: &str = "[data-vote-slug]";

    /// Score display inside a widget.
    pub const SCORE_SELECTOR: &str = ".vote-score";

    /// Up control inside a widget.
    pub const UP_SELECTOR: &str = ".vote-up";

    /// Down control inside a widget.
    pub const DOWN_SELECTOR: &str = ".vote-down";

    /// Class marking a control as the caller's current vote.
    pub const ACTIVE_CLASS: &str = "voted";

    /// Selector matching every subscription form.
    pub const FORM_SELECTOR: &str = "form.subscribe-form";

    /// Email input inside a subscription form.
    pub const EMAIL_SELECTOR: &str = "input[type=email]";

    /// Message area inside a subscription form.
    pub const MESSAGE_SELECTOR: &str = ".subscribe-message";

    // =============================================================================
    // USER-FACING MESSAGES
    // =============================================================================

    /// Shown after the server accepts a subscription.
    pub const SUBSCRIBED_MESSAGE: &str = "Thanks! You're on the list.";

    /// Shown when the server rejects a subscription without supplying text.
    pub const SUBSCRIBE_FAILED_MESSAGE: &str = "Subscription failed. Please try again.";

    /// Shown when the subscription request never completes. Wording is kept
    /// distinct from the rejection fallback above.
    pub const SUBSCRIBE_NETWORK_MESSAGE: &str = "Network error. Please try again later.";
}
