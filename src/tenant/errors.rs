//! Tenant resolution errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::clients::GraphqlError;
use crate::error::ConfigError;
use crate::prompt::PromptError;

/// Error type for [`resolve_tenant`](crate::tenant::resolve_tenant).
#[derive(Debug, Error)]
pub enum TenantError {
    /// A prompted value was blank.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Prompting failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The lookup query failed.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// No tenant returned by the lookup has exactly this identifier.
    #[error("Could not find a tenant with identifier '{identifier}'. Check the identifier and that the access token can reach it.")]
    NotFound {
        /// The identifier that was looked up.
        identifier: String,
    },

    /// The tenant has no languages to work in.
    #[error("Tenant '{identifier}' has no available languages")]
    NoLanguages {
        /// The tenant identifier.
        identifier: String,
    },

    /// The env file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// The env file path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_identifier() {
        let error = TenantError::NotFound {
            identifier: "acme-store".to_string(),
        };
        assert!(error.to_string().contains("'acme-store'"));
    }

    #[test]
    fn test_io_error_names_path() {
        let error = TenantError::Io {
            path: PathBuf::from("/read-only/.env"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("/read-only/.env"));
        assert!(message.contains("denied"));
    }
}
