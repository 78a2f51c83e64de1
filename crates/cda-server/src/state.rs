//! Shared handler state

use std::sync::Arc;

use cda_application::use_cases::{ProjectService, SubmissionService};

/// Shared service references handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// Upload and pipeline execution
    pub submission: Arc<SubmissionService>,
    /// Project queries, exports, and deletion
    pub projects: Arc<ProjectService>,
}

impl AppState {
    /// Bundle the services into handler state
    pub fn new(submission: Arc<SubmissionService>, projects: Arc<ProjectService>) -> Self {
        Self {
            submission,
            projects,
        }
    }
}
