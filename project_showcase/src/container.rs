//! Display container the loaders write into

use crate::card::ProjectCard;
use crate::error::Result;
use crate::templates::{self, CONTAINER_TEMPLATE};
use serde::Serialize;

/// Id of the container element on the page
pub const CONTAINER_ID: &str = "projects-container";

/// Placeholder shown while a remote load is in flight
pub const LOADING_MESSAGE: &str = "Loading projects...";

#[derive(Serialize)]
struct ContainerContext<'a> {
    id: &'a str,
    message: Option<&'a str>,
    cards: Vec<String>,
}

/// What the container currently shows
#[derive(Debug, Clone, Default)]
pub enum DisplayState {
    #[default]
    Empty,
    Loading,
    Populated(Vec<ProjectCard>),
    /// Informational or error text
    Message(String),
}

/// The projects container
#[derive(Debug, Default)]
pub struct ProjectsContainer {
    state: DisplayState,
}

impl ProjectsContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Remove everything currently displayed
    pub fn clear(&mut self) {
        self.state = DisplayState::Empty;
    }

    pub fn show_loading(&mut self) {
        self.state = DisplayState::Loading;
    }

    /// Replace the content with a text message
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.state = DisplayState::Message(message.into());
    }

    /// Append a card, connecting it to the container.
    ///
    /// Any placeholder or message is replaced by the card list.
    pub fn append(&mut self, mut card: ProjectCard) {
        card.connected();
        match &mut self.state {
            DisplayState::Populated(cards) => cards.push(card),
            _ => self.state = DisplayState::Populated(vec![card]),
        }
    }

    /// Cards currently displayed, in order
    pub fn cards(&self) -> &[ProjectCard] {
        match &self.state {
            DisplayState::Populated(cards) => cards,
            _ => &[],
        }
    }

    /// Text currently displayed instead of cards, if any
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            DisplayState::Loading => Some(LOADING_MESSAGE),
            DisplayState::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Render the container with its cards or message
    pub fn to_html(&self) -> Result<String> {
        let cards = self
            .cards()
            .iter()
            .map(ProjectCard::to_html)
            .collect::<Result<Vec<_>>>()?;

        templates::render(
            CONTAINER_TEMPLATE,
            &ContainerContext {
                id: CONTAINER_ID,
                message: self.message(),
                cards,
            },
        )
    }
}
