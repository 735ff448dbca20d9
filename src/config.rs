use crate::error::{Error, Result};
use crate::models::OriginIssue;
use std::env;
use std::path::PathBuf;

/// Mirror-platform (Codeberg) identifiers and credential.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    pub repo: String,
    pub token: String,
}

impl MirrorConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            repo: required("CODEBERG_REPO")?,
            token: required("CODEBERG_TOKEN")?,
        })
    }
}

/// Origin-platform (GitHub) identifiers and credential.
#[derive(Debug, Clone)]
pub struct OriginConfig {
    pub repo: String,
    pub token: String,
    pub issue_number: u64,
}

impl OriginConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            repo: required("GITHUB_REPO")?,
            token: required("GITHUB_TOKEN")?,
            issue_number: required_u64("GITHUB_ISSUE_NUMBER")?,
        })
    }
}

impl OriginIssue {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            number: required_u64("GITHUB_ISSUE_NUMBER")?,
            title: required("GITHUB_ISSUE_TITLE")?,
            body: required("GITHUB_ISSUE_BODY")?,
            author: required("GITHUB_ISSUE_AUTHOR")?,
            url: required("GITHUB_ISSUE_URL")?,
        })
    }
}

pub fn dry_run_from_env() -> bool {
    env::var("DRY_RUN")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
}

/// Path of the workflow output file, when the runner provides one.
pub fn output_path_from_env() -> Option<PathBuf> {
    env::var("GITHUB_OUTPUT").ok().map(PathBuf::from)
}

pub fn mirror_issue_number_from_env() -> Result<u64> {
    required_u64("CODEBERG_ISSUE_NUMBER")
}

pub fn mirror_issue_url_from_env() -> Result<String> {
    required("CODEBERG_ISSUE_URL")
}

fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("{} environment variable not set", name)))
}

fn required_u64(name: &str) -> Result<u64> {
    required(name)?
        .parse()
        .map_err(|_| Error::Config(format!("{} is not a valid issue number", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_config_from_env() {
        temp_env::with_vars(
            [
                ("CODEBERG_REPO", Some("owner/mirror")),
                ("CODEBERG_TOKEN", Some("secret")),
            ],
            || {
                let config = MirrorConfig::from_env().unwrap();
                assert_eq!(config.repo, "owner/mirror");
                assert_eq!(config.token, "secret");
            },
        );
    }

    #[test]
    fn test_missing_variable_fails_fast() {
        temp_env::with_vars(
            [
                ("CODEBERG_REPO", Some("owner/mirror")),
                ("CODEBERG_TOKEN", None::<&str>),
            ],
            || {
                let err = MirrorConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("CODEBERG_TOKEN"));
            },
        );
    }

    #[test]
    fn test_dry_run_parsing() {
        temp_env::with_var("DRY_RUN", Some("true"), || {
            assert!(dry_run_from_env());
        });
        temp_env::with_var("DRY_RUN", Some("false"), || {
            assert!(!dry_run_from_env());
        });
        temp_env::with_var("DRY_RUN", None::<&str>, || {
            assert!(!dry_run_from_env());
        });
    }

    #[test]
    fn test_invalid_issue_number() {
        temp_env::with_var("CODEBERG_ISSUE_NUMBER", Some("seven"), || {
            let err = mirror_issue_number_from_env().unwrap_err();
            assert!(err.to_string().contains("CODEBERG_ISSUE_NUMBER"));
        });
    }
}
