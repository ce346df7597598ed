#![allow(missing_docs)]

pub(crate) mod fake_api;
pub(crate) mod html;

pub(crate) use fake_api::{FakeSalesApi, book, transactions};
pub(crate) use html::{assert_valid_html, must_select, parse_html_document, table_rows, text_of};
