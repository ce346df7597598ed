//! Inline alerts for showing that part of the dashboard could not be loaded.

use maud::{Markup, html};

/// Renders an error alert with a short `message` and the underlying `details`.
pub fn error_alert(message: &str, details: &str) -> Markup {
    html! {
        div
            role="alert"
            data-alert="error"
            class="p-4 text-sm text-red-800 rounded-lg bg-red-50 dark:bg-gray-800 dark:text-red-400"
        {
            span class="font-medium" { (message) }

            @if !details.is_empty() {
                " " (details)
            }
        }
    }
}
