use crate::client::ProjectSource;
use crate::error::CliError;
use crate::notice::{Notice, Notices};
use shared_types::{GenerateProjectRequest, GeneratedProject, ProjectCategory};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error};

pub const KEYWORD_MISSING: &str = "Please enter a keyword or field of study";
pub const GENERATION_FAILED: &str = "Failed to generate project. Try again.";
pub const GENERATION_SUCCEEDED: &str = "Generated project successfully!";
pub const BUSY_LABEL: &str = "Generating...";

/// What the user typed into the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub keyword: String,
    pub category: Option<ProjectCategory>,
}

impl FormInput {
    pub fn new(keyword: impl Into<String>, category: Option<ProjectCategory>) -> Self {
        Self {
            keyword: keyword.into(),
            category,
        }
    }

    fn to_request(&self) -> Option<GenerateProjectRequest> {
        let keyword = self.keyword.trim();
        if keyword.is_empty() {
            return None;
        }
        Some(GenerateProjectRequest::new(
            keyword,
            self.category.map(|c| c.as_str().to_string()),
        ))
    }
}

/// Validates input, issues one request at a time and reports through notices.
pub struct GenerationForm {
    source: Arc<dyn ProjectSource>,
    notices: Arc<Notices>,
    busy: AtomicBool,
}

impl GenerationForm {
    pub fn new(source: Arc<dyn ProjectSource>, notices: Arc<Notices>) -> Self {
        Self {
            source,
            notices,
            busy: AtomicBool::new(false),
        }
    }

    /// Controls are disabled while this is set
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub async fn submit(&self, input: &FormInput) -> Result<GeneratedProject, CliError> {
        let request = match input.to_request() {
            Some(request) => request,
            None => {
                self.notices.push(Notice::error(KEYWORD_MISSING));
                return Err(CliError::Validation(KEYWORD_MISSING.to_string()));
            }
        };

        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Ignoring submit while a generation is outstanding");
            return Err(CliError::Command(
                "A generation is already in progress".to_string(),
            ));
        }
        self.notices.push(Notice::info(BUSY_LABEL));

        let result = self.source.generate(&request).await;
        self.busy.store(false, Ordering::SeqCst);

        match result {
            Ok(project) => {
                self.notices.push(Notice::success(GENERATION_SUCCEEDED));
                Ok(project)
            }
            Err(e) => {
                error!(error = %e, "Project generation failed");
                self.notices.push(Notice::error(GENERATION_FAILED));
                Err(e)
            }
        }
    }
}
