//! Resolving the tenant, credentials and language for a run.

use serde::Deserialize;
use serde_json::json;

use crate::auth::Credentials;
use crate::clients::GraphqlClient;
use crate::config::{AccessTokenId, AccessTokenSecret, EnvFile, OnboardConfig, TenantIdentifier};
use crate::prompt::{choose, Choice, Prompter};
use crate::tenant::{Tenant, TenantContext, TenantError};

/// Looks up every tenant matching an identifier.
pub const GET_TENANTS_QUERY: &str = r"query GetTenantsByIdentifier($identifier: String!) {
  tenant {
    getMany(identifier: $identifier) {
      id
      identifier
      availableLanguages {
        code
        name
      }
    }
  }
}";

/// Options for [`resolve_tenant`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Leave the language unset instead of selecting or prompting for one.
    pub skip_language: bool,
}

#[derive(Deserialize)]
struct TenantLookup {
    tenant: TenantGetMany,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TenantGetMany {
    get_many: Option<Vec<Tenant>>,
}

/// Resolves the tenant, credentials and language, prompting for anything the
/// configuration lacks, and persists the credentials to the env file.
///
/// Steps, in order:
///
/// 1. Tenant identifier, token id and token secret are each taken from
///    `config` or prompted for, independently of one another.
/// 2. Tenants matching the identifier are fetched; the one whose identifier
///    is exactly equal is selected.
/// 3. Unless skipped, a sole language is picked automatically and several
///    languages are offered as a choice.
/// 4. The env file is overwritten with the three credential lines.
///
/// # Errors
///
/// - [`TenantError::Prompt`] / [`TenantError::Config`] for failed or blank answers
/// - [`TenantError::Graphql`] if the lookup fails
/// - [`TenantError::NotFound`] if no tenant matches the identifier exactly
/// - [`TenantError::NoLanguages`] if the tenant has no language to pick
/// - [`TenantError::Io`] if the env file cannot be written
pub async fn resolve_tenant<P>(
    config: &OnboardConfig,
    prompter: &P,
    options: ResolveOptions,
) -> Result<TenantContext, TenantError>
where
    P: Prompter + ?Sized,
{
    let identifier = match config.tenant_identifier() {
        Some(identifier) => {
            prompter.info(&format!("Tenant identifier: {identifier} (using .env value)"));
            identifier.clone()
        }
        None => TenantIdentifier::new(prompter.text("Tenant identifier")?)?,
    };

    let token_id = match config.access_token_id() {
        Some(token_id) => {
            prompter.info("Access token id: using .env value");
            token_id.clone()
        }
        None => AccessTokenId::new(prompter.text("Access token id")?)?,
    };

    let token_secret = match config.access_token_secret() {
        Some(token_secret) => {
            prompter.info("Access token secret: using .env value");
            token_secret.clone()
        }
        None => AccessTokenSecret::new(prompter.secret("Access token secret")?)?,
    };

    let credentials = Credentials::from_parts(&token_id, &token_secret);
    let client = GraphqlClient::new(&credentials, Some(config))?;

    let tenant = find_tenant(&client, &identifier).await?;
    tracing::info!("Resolved tenant '{}' to id {}", identifier, tenant.id);

    let language = if options.skip_language {
        None
    } else {
        Some(select_language(prompter, &tenant)?)
    };

    let env_file = config.env_file();
    EnvFile::write_credentials(env_file, &identifier, &token_id, &token_secret).map_err(
        |source| TenantError::Io {
            path: env_file.to_path_buf(),
            source,
        },
    )?;

    Ok(TenantContext::new(tenant.id, identifier, language, client))
}

/// Fetches the tenants matching `identifier` and returns the exact match.
///
/// # Errors
///
/// Returns [`TenantError::Graphql`] if the query fails and
/// [`TenantError::NotFound`] if no returned tenant has exactly this identifier.
pub async fn find_tenant(
    client: &GraphqlClient,
    identifier: &TenantIdentifier,
) -> Result<Tenant, TenantError> {
    let lookup: TenantLookup = client
        .query(
            GET_TENANTS_QUERY,
            json!({ "identifier": identifier.as_ref() }),
        )
        .await?;

    let candidates = lookup.tenant.get_many.unwrap_or_default();
    tracing::debug!(
        "Tenant lookup for '{}' returned {} candidate(s)",
        identifier,
        candidates.len()
    );

    candidates
        .into_iter()
        .find(|tenant| tenant.identifier == identifier.as_ref())
        .ok_or_else(|| TenantError::NotFound {
            identifier: identifier.to_string(),
        })
}

fn select_language<P>(prompter: &P, tenant: &Tenant) -> Result<String, TenantError>
where
    P: Prompter + ?Sized,
{
    match tenant.available_languages.as_slice() {
        [] => Err(TenantError::NoLanguages {
            identifier: tenant.identifier.clone(),
        }),
        [only] => {
            prompter.info(&format!("Using language {} ({})", only.name, only.code));
            Ok(only.code.clone())
        }
        languages => {
            let choices: Vec<Choice> = languages
                .iter()
                .map(|language| Choice::new(&language.name, &language.code))
                .collect();
            let picked = choose(prompter, "Select a language", &choices)?;
            Ok(picked.value.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{PromptRecord, ScriptedPrompter};
    use crate::tenant::Language;

    fn tenant_with(languages: &[(&str, &str)]) -> Tenant {
        Tenant {
            id: "t-1".to_string(),
            identifier: "demo".to_string(),
            available_languages: languages
                .iter()
                .map(|(code, name)| Language {
                    code: (*code).to_string(),
                    name: (*name).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_single_language_is_selected_without_prompt() {
        let prompter = ScriptedPrompter::new();
        let language = select_language(&prompter, &tenant_with(&[("en", "English")])).unwrap();
        assert_eq!(language, "en");
        assert!(prompter.select_prompts().is_empty());
    }

    #[test]
    fn test_multiple_languages_prompt_with_names() {
        let prompter = ScriptedPrompter::new().with_choice(1);
        let language = select_language(
            &prompter,
            &tenant_with(&[("en", "English"), ("no", "Norsk")]),
        )
        .unwrap();

        assert_eq!(language, "no");
        assert_eq!(
            prompter.select_prompts(),
            vec![PromptRecord::Select {
                message: "Select a language".to_string(),
                labels: vec!["English".to_string(), "Norsk".to_string()],
            }]
        );
    }

    #[test]
    fn test_no_languages_is_an_error() {
        let prompter = ScriptedPrompter::new();
        let result = select_language(&prompter, &tenant_with(&[]));
        assert!(matches!(result, Err(TenantError::NoLanguages { .. })));
    }
}
