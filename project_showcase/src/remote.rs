//! Remote project endpoint client
//!
//! Uses async reqwest; the endpoint is expected to return a JSON array of
//! project records.

use crate::error::{Result, ShowcaseError};
use showcase_common::{parse_records, ProjectRecord};

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str =
    "https://my-json-server.typicode.com/liuziyue141/CSE134_HW5/projects";

const USER_AGENT: &str = "project_showcase/1.0";

/// Client for the remote project list
#[derive(Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the project list. Any non-success status is an error.
    pub async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>> {
        log::info!("Fetching projects from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ShowcaseError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let projects = parse_records(&body)?;

        log::info!("Fetched {} projects", projects.len());
        Ok(projects)
    }
}

impl Default for RemoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
