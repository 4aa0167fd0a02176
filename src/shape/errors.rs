//! Shape selection errors.

use thiserror::Error;

use crate::clients::GraphqlError;
use crate::prompt::PromptError;

/// Error type for [`select_shape`](crate::shape::select_shape).
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Fetching the tenant info failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// The selection prompt failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// No shape matched the query.
    #[error("No shapes found. Create one at {url}")]
    NoShapes {
        /// Where the user can create a shape.
        url: String,
    },
}
