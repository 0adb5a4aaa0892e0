use std::path::PathBuf;

use crate::{category::Category, Error};

/// Fatal startup failures, nothing gets dispatched after one of these.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("error walking components directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("component source {0} has no registered module")]
    NotRegistered(String),
    #[error("error loading component module {path}: {source}")]
    Module { path: String, source: Error },
    #[error("path {} is outside of the components directory", .0.display())]
    OutsideRoot(PathBuf),
    #[error("component scan aborted: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Outcome of a single dispatch that didn't end in a successful handler run.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no {} component with custom_id '{custom_id}'", .category.singular())]
    NotFound { category: Category, custom_id: String },
    #[error("error running {} component {name}: {source}", .category.singular())]
    Handler {
        category: Category,
        name: String,
        source: Error,
    },
    #[error("{} component {name} panicked: {message}", .category.singular())]
    Panicked {
        category: Category,
        name: String,
        message: String,
    },
}
