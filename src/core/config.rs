//! `template.json` loading.
//!
//! Every section and field is optional. A missing field means "keep the
//! template default" for that field.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::defaults::CONFIG_FILE;
use crate::error::{Error, Result};
use crate::utils::io;

/// New plugin identity, as written in `template.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateConfig {
    #[serde(default)]
    pub plugin: PluginConfig,
    #[serde(default)]
    pub author: AuthorConfig,
    #[serde(default)]
    pub php: PhpConfig,
    #[serde(default)]
    pub composer: ComposerConfig,
    #[serde(default)]
    pub github: GithubConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhpConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComposerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GithubConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

impl TemplateConfig {
    /// Parse a config document. `origin` is used in error details only.
    pub fn from_json(content: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::config_invalid_json(origin, e))
    }

    /// The slug the main plugin file should end up named after.
    pub fn effective_slug<'a>(&'a self, default: &'a str) -> &'a str {
        non_empty(self.plugin.slug.as_deref()).unwrap_or(default)
    }
}

/// Treat empty strings like absent values.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub fn config_path(root: &Path) -> std::path::PathBuf {
    root.join(CONFIG_FILE)
}

/// Load `template.json` from the repository root.
///
/// A missing file is fatal: nothing has been touched yet and there is no
/// sensible identity to rebrand to.
pub fn load(root: &Path) -> Result<TemplateConfig> {
    let path = config_path(root);

    if !path.exists() {
        return Err(Error::config_not_found(path.display().to_string()));
    }

    let content = io::read_file(&path, &format!("read {}", path.display()))?;
    TemplateConfig::from_json(&content, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_document_leaves_missing_fields_empty() {
        let config = TemplateConfig::from_json(
            r#"{ "plugin": { "slug": "acme-plugin" }, "github": { "owner": "acme" } }"#,
            "inline",
        )
        .unwrap();

        assert_eq!(config.plugin.slug.as_deref(), Some("acme-plugin"));
        assert_eq!(config.plugin.name, None);
        assert_eq!(config.author, AuthorConfig::default());
        assert_eq!(config.github.owner.as_deref(), Some("acme"));
        assert_eq!(config.github.repo, None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config =
            TemplateConfig::from_json(r#"{ "extra": true, "plugin": { "tags": [] } }"#, "inline")
                .unwrap();
        assert_eq!(config, TemplateConfig::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = TemplateConfig::from_json("{ not json", "template.json").unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
        assert_eq!(err.details["path"], "template.json");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "config.not_found");
    }

    #[test]
    fn load_reads_root_template_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("template.json"),
            r#"{ "plugin": { "name": "Acme" } }"#,
        )
        .unwrap();

        let config = load(dir.path()).unwrap();
        assert_eq!(config.plugin.name.as_deref(), Some("Acme"));
    }

    #[test]
    fn effective_slug_falls_back_on_missing_or_empty() {
        let mut config = TemplateConfig::default();
        assert_eq!(config.effective_slug("template-wp-plugin"), "template-wp-plugin");

        config.plugin.slug = Some(String::new());
        assert_eq!(config.effective_slug("template-wp-plugin"), "template-wp-plugin");

        config.plugin.slug = Some("acme-plugin".to_string());
        assert_eq!(config.effective_slug("template-wp-plugin"), "acme-plugin");
    }
}
