use chrono::Local;
use std::path::{Path, PathBuf};

use crate::config::{non_empty, TemplateConfig};
use crate::defaults::{CHANGELOG_FALLBACK_NAME, CHANGELOG_FALLBACK_VERSION, CHANGELOG_FILE};
use crate::error::Result;
use crate::utils::io;
use crate::utils::template::{self, TemplateVars};

const CHANGELOG_TEMPLATE: &str = "# Changelog

All notable changes to this project will be documented in this file.

The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/),
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).

## [{{version}}] - {{date}}

### Initial Release

First release of {{pluginName}}.

#### Features

- Initial plugin setup
";

pub fn changelog_path(root: &Path) -> PathBuf {
    root.join(CHANGELOG_FILE)
}

/// Render a fresh changelog for `config`, dated `date` (`YYYY-MM-DD`).
pub fn generate_changelog(config: &TemplateConfig, date: &str) -> String {
    let plugin_name = non_empty(config.plugin.name.as_deref()).unwrap_or(CHANGELOG_FALLBACK_NAME);
    let version =
        non_empty(config.plugin.version.as_deref()).unwrap_or(CHANGELOG_FALLBACK_VERSION);

    template::render(
        CHANGELOG_TEMPLATE,
        &[
            (TemplateVars::VERSION, version),
            (TemplateVars::DATE, date),
            (TemplateVars::PLUGIN_NAME, plugin_name),
        ],
    )
}

/// Overwrite `CHANGELOG.md` with a fresh initial-release entry dated today.
///
/// The previous content is discarded. Nothing is written under `dry_run`.
pub fn reset_changelog(root: &Path, config: &TemplateConfig, dry_run: bool) -> Result<()> {
    let today = Local::now().format("%Y-%m-%d").to_string();
    let content = generate_changelog(config, &today);

    if !dry_run {
        io::write_file(&changelog_path(root), &content, "write changelog")?;
    }

    Ok(())
}
