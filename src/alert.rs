//! Alert fragments for displaying success and error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the page's
//! alert container, either as the response body (via `hx-target-error`) or
//! as an out-of-band swap alongside other content.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

const SUCCESS_ALERT_STYLE: &str = "p-4 mb-4 text-sm rounded-lg shadow \
    text-green-800 bg-green-50 dark:bg-gray-800 dark:text-green-400";

const ERROR_ALERT_STYLE: &str = "p-4 mb-4 text-sm rounded-lg shadow \
    text-red-800 bg-red-50 dark:bg-gray-800 dark:text-red-400";

/// A message to surface to the user after an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The operation succeeded.
    Success {
        message: String,
        details: String,
    },
    /// The operation failed.
    Error {
        message: String,
        details: String,
    },
}

impl Alert {
    /// Create a new success alert.
    pub fn success(message: &str, details: &str) -> Self {
        Self::Success {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create a new error alert without details.
    pub fn error_simple(message: &str) -> Self {
        Self::error(message, "")
    }

    /// Render the alert as a markup fragment.
    pub fn into_markup(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Success { message, details } => (SUCCESS_ALERT_STYLE, message, details),
            Alert::Error { message, details } => (ERROR_ALERT_STYLE, message, details),
        };

        html! {
            div class=(style) role="alert"
            {
                p class="font-medium" { (message) }

                @if !details.is_empty() {
                    p { (details) }
                }
            }
        }
    }

    /// Render the alert wrapped for an out-of-band swap into the page's
    /// alert container, for responses whose body targets another element.
    pub fn into_oob_markup(self) -> Markup {
        html! {
            div id="alert-container" hx-swap-oob="innerHTML"
            {
                (self.into_markup())
            }
        }
    }
}

/// Render `alert` as an HTML response with the given `status` code.
pub fn render_alert(status: StatusCode, alert: Alert) -> Response {
    (status, alert.into_markup()).into_response()
}
