#![allow(missing_docs)]

pub(crate) mod alert;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod state;

pub(crate) use alert::{assert_alert_error, assert_alert_success};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment, response_text};
pub(crate) use http::{assert_content_type, assert_status_ok, get_header};
pub(crate) use state::{record, test_state};
