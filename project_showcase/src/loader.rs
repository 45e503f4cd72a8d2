//! Project loaders
//!
//! Both loaders clear the container, obtain records and render one card per
//! record. Neither returns an error: every failure ends as a message in the
//! container and is summarized in the returned [`LoadOutcome`].
//!
//! Each load takes a request token. A remote response is applied only if no
//! newer load started while it was in flight, so the newest request always
//! decides the final container and cache contents.

use crate::card::ProjectCard;
use crate::container::ProjectsContainer;
use crate::error::Result;
use crate::remote::RemoteSource;
use crate::repository::ProjectRepository;
use showcase_common::ProjectRecord;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub const NO_LOCAL_PROJECTS: &str = "No projects found in local storage.";
pub const LOCAL_LOAD_ERROR: &str = "Error loading projects from local storage.";
pub const NO_REMOTE_PROJECTS: &str = "No projects found on remote server.";
pub const REMOTE_LOAD_ERROR: &str = "Error loading projects from remote server";

/// Result of one loader invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This many cards were rendered
    Rendered(usize),
    /// Source had no projects
    Empty,
    /// Load failed; the reason is also shown in the container
    Failed(String),
    /// A newer load started before this one finished; nothing was applied
    Superseded,
}

struct LoaderState {
    container: ProjectsContainer,
    latest_request: u64,
}

impl LoaderState {
    fn begin_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.container.clear();
        self.latest_request
    }

    fn render_projects(&mut self, projects: Vec<ProjectRecord>) -> usize {
        self.container.clear();
        let count = projects.len();
        for project in projects {
            let mut card = ProjectCard::new();
            card.set_project(project);
            self.container.append(card);
        }
        count
    }
}

/// Drives the projects container from the cache or the remote endpoint
pub struct ProjectLoader {
    repository: ProjectRepository,
    remote: RemoteSource,
    state: Mutex<LoaderState>,
}

impl ProjectLoader {
    pub fn new(repository: ProjectRepository, remote: RemoteSource) -> Self {
        Self {
            repository,
            remote,
            state: Mutex::new(LoaderState {
                container: ProjectsContainer::new(),
                latest_request: 0,
            }),
        }
    }

    pub fn repository(&self) -> &ProjectRepository {
        &self.repository
    }

    pub fn remote(&self) -> &RemoteSource {
        &self.remote
    }

    fn lock(&self) -> MutexGuard<'_, LoaderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the current container
    pub fn with_container<R>(&self, f: impl FnOnce(&ProjectsContainer) -> R) -> R {
        f(&self.lock().container)
    }

    pub fn container_html(&self) -> Result<String> {
        self.with_container(|container| container.to_html())
    }

    /// Populate the container from the local cache
    pub fn load_local(&self) -> LoadOutcome {
        let mut state = self.lock();
        state.begin_request();

        match self.repository.load() {
            Ok(Some(projects)) if !projects.is_empty() => {
                let count = state.render_projects(projects);
                log::info!("Loaded {} projects from local storage", count);
                LoadOutcome::Rendered(count)
            }
            Ok(_) => {
                log::info!("No projects in local storage");
                state.container.show_message(NO_LOCAL_PROJECTS);
                LoadOutcome::Empty
            }
            Err(e) => {
                log::warn!("Error loading local projects: {}", e);
                state.container.show_message(LOCAL_LOAD_ERROR);
                LoadOutcome::Failed(e.to_string())
            }
        }
    }

    /// Populate the container from the remote endpoint and refresh the cache
    pub async fn load_remote(&self) -> LoadOutcome {
        let token = {
            let mut state = self.lock();
            let token = state.begin_request();
            state.container.show_loading();
            token
        };

        let result = self.remote.fetch_projects().await;

        let mut state = self.lock();
        if state.latest_request != token {
            log::debug!(
                "Discarding stale remote response (request {}, latest {})",
                token,
                state.latest_request
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(projects) if projects.is_empty() => {
                log::info!("Remote server returned no projects");
                state.container.show_message(NO_REMOTE_PROJECTS);
                LoadOutcome::Empty
            }
            Ok(projects) => {
                if let Err(e) = self.repository.save(&projects) {
                    log::warn!("Failed to cache remote projects: {}", e);
                }
                let count = state.render_projects(projects);
                log::info!("Loaded {} projects from remote server", count);
                LoadOutcome::Rendered(count)
            }
            Err(e) => {
                log::error!("Error loading remote projects: {}", e);
                state
                    .container
                    .show_message(format!("{}: {}", REMOTE_LOAD_ERROR, e));
                LoadOutcome::Failed(e.to_string())
            }
        }
    }
}
