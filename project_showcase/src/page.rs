//! Full showcase page

use crate::error::Result;
use crate::templates::{self, PAGE_TEMPLATE};
use serde::Serialize;

/// Id of the button bound to the local loader
pub const LOAD_LOCAL_BUTTON_ID: &str = "load-local-btn";
/// Id of the button bound to the remote loader
pub const LOAD_REMOTE_BUTTON_ID: &str = "load-remote-btn";

#[derive(Serialize)]
struct PageContext<'a> {
    projects: &'a str,
}

/// Render the page around already-rendered container markup
pub fn render_page(container_html: &str) -> Result<String> {
    templates::render(
        PAGE_TEMPLATE,
        &PageContext {
            projects: container_html,
        },
    )
}
