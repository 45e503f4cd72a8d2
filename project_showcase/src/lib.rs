//! Project Showcase
//!
//! Renders `<project-card>` elements from a locally cached project list or
//! from a remote JSON endpoint, refreshing the cache on every remote load.

pub mod bootstrap;
pub mod card;
pub mod container;
pub mod error;
pub mod loader;
pub mod page;
pub mod remote;
pub mod repository;
pub mod storage;
pub mod templates;
pub mod web;

pub use bootstrap::{sample_projects, seed_sample_projects};
pub use card::{render_card, ProjectCard};
pub use container::{DisplayState, ProjectsContainer};
pub use error::{Result, ShowcaseError};
pub use loader::{LoadOutcome, ProjectLoader};
pub use remote::RemoteSource;
pub use repository::ProjectRepository;
pub use showcase_common::{ProjectRecord, RecordError};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
