use crate::ast;
use crate::file_reader;
use std::sync::Arc;
use thiserror::Error;

/// Every way a normalization call can fail. None of these are recovered
/// from internally: the whole call is aborted and no partial output is
/// produced.
#[derive(Clone, Debug, Error)]
pub enum NormalizeError {
    #[error("Failure while trying to read a document file from disk: {0}")]
    FileReadError(Arc<file_reader::ReadContentError>),

    #[error("Fragment cycle detected: {}", format_cycle_path(.cycle_path))]
    FragmentCycleDetected { cycle_path: Vec<String> },

    #[error("{0}")]
    ParseError(Arc<ast::query::ParseError>),

    #[error("Found usage of unknown fragment {fragment_name}")]
    UnknownFragment { fragment_name: String },
}
impl std::convert::From<ast::query::ParseError> for NormalizeError {
    fn from(value: ast::query::ParseError) -> Self {
        Self::ParseError(Arc::new(value))
    }
}
impl std::convert::From<file_reader::ReadContentError> for NormalizeError {
    fn from(value: file_reader::ReadContentError) -> Self {
        Self::FileReadError(Arc::new(value))
    }
}

fn format_cycle_path(cycle: &[String]) -> String {
    cycle.join(" → ")
}
