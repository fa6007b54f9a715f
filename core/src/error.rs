//! Errors raised while ingesting props

use thiserror::Error;

/// Resolution itself never fails; these only arise when building props from
/// external data.
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON parsing error: {0}")]
    Json(#[from] json::Error),

    #[error("Props must be a JSON object")]
    NotAnObject,
}
