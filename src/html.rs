//! The page layout, shared Tailwind class lists and formatting helpers used by the views.

use maud::{DOCTYPE, Markup, html};

pub const BUTTON_SECONDARY_STYLE: &str = "py-2 px-4 text-sm font-medium text-gray-900 \
    bg-white rounded border border-gray-200 hover:enabled:bg-gray-100 \
    hover:enabled:text-blue-700 disabled:opacity-50 disabled:cursor-not-allowed \
    dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 \
    dark:hover:enabled:bg-gray-700 dark:hover:enabled:text-white";

pub const FORM_LABEL_STYLE: &str = "block mb-1 text-sm font-medium text-gray-900 dark:text-white";

pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2 rounded text-sm text-gray-900 \
    bg-gray-50 border border-gray-300 focus:ring-blue-600 focus:border-blue-600 \
    dark:text-white dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400";

pub const TABLE_HEADER_STYLE: &str =
    "text-xs uppercase text-gray-700 bg-gray-100 dark:bg-gray-700 dark:text-gray-300";

pub const TABLE_ROW_STYLE: &str = "border-b bg-white dark:bg-gray-800 dark:border-gray-700";

pub const TABLE_CELL_STYLE: &str = "px-4 py-3";

/// A card holding one region of the dashboard.
pub const PANEL_STYLE: &str = "w-full p-4 mb-4 rounded-lg shadow bg-white dark:bg-gray-800";

pub const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col items-center mx-auto px-4 py-6 text-gray-900 dark:text-white";

const HTMX_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";
const TAILWIND_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Extra elements for the page head.
pub enum HeadElement {
    /// The URL of a script to load before the body.
    ScriptLink(&'static str),
}

/// Wrap `content` in the HTML document shared by every page.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Salesboard" }

                script src=(TAILWIND_SCRIPT) {}
                script src=(HTMX_SCRIPT) {}

                @for element in head_elements {
                    @match element {
                        HeadElement::ScriptLink(url) => script src=(url) {}
                    }
                }
            }

            body class="min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

/// A full page explaining that something went wrong, with a link back to the dashboard.
pub fn error_view(title: &str, status: &str, description: &str, fix: &str) -> Markup {
    let content = html! {
        main class={(PAGE_CONTAINER_STYLE) " max-w-screen-sm text-center"}
        {
            h1 class="mb-4 text-7xl font-extrabold text-blue-600 dark:text-blue-500"
            {
                (status)
            }

            p class="mb-2 text-3xl font-bold" { (description) }
            p class="mb-6 text-lg" { (fix) }

            a
                href="/"
                class="px-5 py-2.5 text-sm font-medium text-white rounded
                    bg-blue-600 hover:bg-blue-800"
            {
                "Back to Dashboard"
            }
        }
    };

    base(title, &[], &content)
}

/// Format a number the way the sales API sends it, e.g. "100" or "44.99".
pub fn format_number(number: f64) -> String {
    number.to_string()
}
