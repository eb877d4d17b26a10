use std::process::ExitCode;

use crate::config::ConfigError;
use crate::document::docx::DocxError;
use crate::pipeline::{PipelineError, ValidationError};
use crate::serper::SerperError;
use crate::together::TogetherError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Document(#[from] DocxError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

impl AppError {
    /// 2 for input the user can fix, 1 for everything else.
    pub fn exit_status(&self) -> u8 {
        match self {
            AppError::Validation(_) => 2,
            _ => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Message shown on stderr, with a hint where one helps.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => format!("Advertencia: {e}"),
            AppError::Pipeline(e) if is_retriable_failure(e) => format!("Error: {e} (retriable)"),
            AppError::Pipeline(
                e @ PipelineError::Search {
                    source: SerperError::Unauthorized(_),
                    ..
                },
            ) => format!("Error: {e} Get a key at https://serper.dev"),
            AppError::Pipeline(
                e @ PipelineError::Generate {
                    source: TogetherError::Unauthorized(_),
                    ..
                },
            ) => format!("Error: {e} Get a key at https://api.together.ai"),
            _ => format!("Error: {self}"),
        }
    }
}

fn is_retriable_failure(e: &PipelineError) -> bool {
    matches!(
        e,
        PipelineError::Search {
            source: SerperError::RateLimited,
            ..
        } | PipelineError::Generate {
            source: TogetherError::RateLimited,
            ..
        }
    )
}
