//! Flat `KEY=value` env file handling.
//!
//! The onboarding flow persists the resolved tenant identifier and access
//! token pair so that later scripts can pick them up from the environment.
//! Writing always replaces the whole file.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::config::{AccessTokenId, AccessTokenSecret, TenantIdentifier};

/// Environment variable holding the tenant identifier.
pub const TENANT_IDENTIFIER_VAR: &str = "CRYSTALLIZE_TENANT_IDENTIFIER";

/// Environment variable holding the access token id.
pub const ACCESS_TOKEN_ID_VAR: &str = "CRYSTALLIZE_ACCESS_TOKEN_ID";

/// Environment variable holding the access token secret.
pub const ACCESS_TOKEN_SECRET_VAR: &str = "CRYSTALLIZE_ACCESS_TOKEN_SECRET";

/// Environment variable overriding the GraphQL endpoint.
pub const API_URL_VAR: &str = "CRYSTALLIZE_API_URL";

/// Default location of the env file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Parsed contents of an env file.
///
/// # Example
///
/// ```rust
/// use crystallize_onboard::config::EnvFile;
///
/// let env = EnvFile::parse("# comment\nCRYSTALLIZE_TENANT_IDENTIFIER=demo\n");
/// assert_eq!(env.get("CRYSTALLIZE_TENANT_IDENTIFIER"), Some("demo"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Parses `KEY=value` lines. Blank lines, `#` comments and lines
    /// without `=` are skipped; matching surrounding quotes are stripped.
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        let values = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_string(), unquote(value.trim()).to_string()))
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self { values }
    }

    /// Reads and parses the file at `path`.
    ///
    /// A missing file yields an empty [`EnvFile`].
    ///
    /// # Errors
    ///
    /// Returns any I/O error other than [`io::ErrorKind::NotFound`].
    pub fn read(path: impl AsRef<Path>) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(Self::parse(&contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Renders the three credential lines in their fixed order.
    #[must_use]
    pub fn render_credentials(
        identifier: &TenantIdentifier,
        token_id: &AccessTokenId,
        token_secret: &AccessTokenSecret,
    ) -> String {
        format!(
            "{TENANT_IDENTIFIER_VAR}={}\n{ACCESS_TOKEN_ID_VAR}={}\n{ACCESS_TOKEN_SECRET_VAR}={}\n",
            identifier.as_ref(),
            token_id.as_ref(),
            token_secret.as_ref(),
        )
    }

    /// Overwrites `path` with exactly the three credential lines.
    ///
    /// Any other keys previously in the file are discarded.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be written.
    pub fn write_credentials(
        path: impl AsRef<Path>,
        identifier: &TenantIdentifier,
        token_id: &AccessTokenId,
        token_secret: &AccessTokenSecret,
    ) -> io::Result<()> {
        let path = path.as_ref();
        fs::write(
            path,
            Self::render_credentials(identifier, token_id, token_secret),
        )?;
        tracing::debug!("Wrote credentials to {}", path.display());
        Ok(())
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let env = EnvFile::parse("\n# heading\nA=1\n\nnot a pair\nB = two \n");
        assert_eq!(env.get("A"), Some("1"));
        assert_eq!(env.get("B"), Some("two"));
        assert_eq!(env.get("not a pair"), None);
    }

    #[test]
    fn test_parse_strips_matching_quotes() {
        let env = EnvFile::parse("A=\"quoted\"\nB='single'\nC=\"unbalanced'\n");
        assert_eq!(env.get("A"), Some("quoted"));
        assert_eq!(env.get("B"), Some("single"));
        assert_eq!(env.get("C"), Some("\"unbalanced'"));
    }

    #[test]
    fn test_parse_keeps_equals_in_value() {
        let env = EnvFile::parse("SECRET=abc=def==");
        assert_eq!(env.get("SECRET"), Some("abc=def=="));
    }

    #[test]
    fn test_render_credentials_has_fixed_order() {
        let rendered = EnvFile::render_credentials(
            &TenantIdentifier::new("demo").unwrap(),
            &AccessTokenId::new("id").unwrap(),
            &AccessTokenSecret::new("secret").unwrap(),
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "CRYSTALLIZE_TENANT_IDENTIFIER=demo",
                "CRYSTALLIZE_ACCESS_TOKEN_ID=id",
                "CRYSTALLIZE_ACCESS_TOKEN_SECRET=secret",
            ]
        );
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let env = EnvFile::read(dir.path().join("absent.env")).unwrap();
        assert_eq!(env, EnvFile::default());
    }

    #[test]
    fn test_write_credentials_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "OTHER_KEY=keep-me?\nCRYSTALLIZE_TENANT_IDENTIFIER=old\n").unwrap();

        EnvFile::write_credentials(
            &path,
            &TenantIdentifier::new("new-tenant").unwrap(),
            &AccessTokenId::new("id").unwrap(),
            &AccessTokenSecret::new("secret").unwrap(),
        )
        .unwrap();

        let env = EnvFile::read(&path).unwrap();
        assert_eq!(env.get("OTHER_KEY"), None);
        assert_eq!(env.get(TENANT_IDENTIFIER_VAR), Some("new-tenant"));
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
    }
}
