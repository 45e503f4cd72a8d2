//! `<project-card>` display element
//!
//! A card is created empty, populated through [`ProjectCard::set_project`]
//! and re-rendered when connected to a container. Its content lives in a
//! declarative open shadow root so host-page styles cannot leak in or out.

use crate::error::Result;
use crate::templates::{self, CARD_TEMPLATE, PROJECT_CARD_TEMPLATE};
use serde::Serialize;
use showcase_common::ProjectRecord;

/// Tag name the element is registered under
pub const CARD_TAG: &str = "project-card";

/// Label of the card's link
pub const LINK_LABEL: &str = "View Project";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardContext<'a> {
    #[serde(flatten)]
    project: &'a ProjectRecord,
    link_label: &'a str,
}

#[derive(Serialize)]
struct HostContext<'a> {
    content: Option<&'a str>,
}

/// Render the shadow root markup for one project.
///
/// Pure: the same record always yields the same markup.
pub fn render_card(project: &ProjectRecord) -> Result<String> {
    templates::render(
        CARD_TEMPLATE,
        &CardContext {
            project,
            link_label: LINK_LABEL,
        },
    )
}

/// One project card
#[derive(Debug, Clone, Default)]
pub struct ProjectCard {
    project: Option<ProjectRecord>,
    shadow_root: Option<String>,
}

impl ProjectCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the card's data and re-render
    pub fn set_project(&mut self, project: ProjectRecord) {
        self.project = Some(project);
        self.render();
    }

    pub fn project(&self) -> Option<&ProjectRecord> {
        self.project.as_ref()
    }

    /// Called when the card is attached to a container
    pub fn connected(&mut self) {
        self.render();
    }

    /// Rendered shadow root markup, `None` until data is set
    pub fn content(&self) -> Option<&str> {
        self.shadow_root.as_deref()
    }

    fn render(&mut self) {
        let Some(project) = &self.project else {
            return;
        };
        match render_card(project) {
            Ok(markup) => self.shadow_root = Some(markup),
            Err(e) => log::error!("Failed to render card {:?}: {}", project.title, e),
        }
    }

    /// The host element including its shadow root
    pub fn to_html(&self) -> Result<String> {
        templates::render(
            PROJECT_CARD_TEMPLATE,
            &HostContext {
                content: self.content(),
            },
        )
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
