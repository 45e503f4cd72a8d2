//! Handlebars templates for cards, the container and the page
//!
//! Templates are compiled once into a shared registry. `{{value}}` output is
//! HTML-escaped by Handlebars; only already-rendered markup is emitted with
//! triple braces.

use crate::error::{Result, ShowcaseError};
use handlebars::Handlebars;
use lazy_static::lazy_static;
use serde::Serialize;

pub const CARD_TEMPLATE: &str = "card";
pub const PROJECT_CARD_TEMPLATE: &str = "project_card";
pub const CONTAINER_TEMPLATE: &str = "container";
pub const PAGE_TEMPLATE: &str = "page";

const TEMPLATE_SOURCES: &[(&str, &str)] = &[
    (CARD_TEMPLATE, include_str!("../templates/card.hbs")),
    (
        PROJECT_CARD_TEMPLATE,
        include_str!("../templates/project_card.hbs"),
    ),
    (CONTAINER_TEMPLATE, include_str!("../templates/container.hbs")),
    (PAGE_TEMPLATE, include_str!("../templates/page.hbs")),
];

lazy_static! {
    static ref REGISTRY: std::result::Result<Handlebars<'static>, String> = build_registry();
}

fn build_registry() -> std::result::Result<Handlebars<'static>, String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);

    for (name, source) in TEMPLATE_SOURCES {
        handlebars
            .register_template_string(name, source.trim_end())
            .map_err(|e| format!("Failed to register template {}: {}", name, e))?;
    }

    log::debug!("Registered {} templates", TEMPLATE_SOURCES.len());
    Ok(handlebars)
}

/// Render the template `name` with `data`
pub fn render<T: Serialize>(name: &str, data: &T) -> Result<String> {
    let registry = REGISTRY
        .as_ref()
        .map_err(|e| ShowcaseError::Template(e.clone()))?;
    Ok(registry.render(name, data)?)
}
