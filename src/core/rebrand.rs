//! Rebrand orchestration.
//!
//! load config → build replacements → walk files → rewrite each →
//! rename/patch on slug change → reset changelog → report.

use serde::Serialize;
use std::path::Path;

use crate::changelog;
use crate::config::{self, TemplateConfig};
use crate::defaults::{CHANGELOG_FILE, TEMPLATE_DEFAULTS, VERSION_SCRIPT};
use crate::error::Result;
use crate::mutator;
use crate::replacements::{build_replacements, ReplacementPair, ReplacementSet};
use crate::scaffold::{self, FileRename};
use crate::walker::{self, CandidateFiles};

#[derive(Debug, Clone, Copy, Default)]
pub struct RebrandOptions {
    /// Compute and report, write nothing.
    pub dry_run: bool,
    /// Leave `CHANGELOG.md` as it is.
    pub keep_changelog: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RebrandStatus {
    /// Config matches the template defaults; nothing was touched.
    NoChanges,
    Previewed,
    Applied,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSummary {
    pub plugin_name: Option<String>,
    pub plugin_slug: Option<String>,
    pub author: Option<String>,
}

impl From<&TemplateConfig> for ConfigSummary {
    fn from(config: &TemplateConfig) -> Self {
        Self {
            plugin_name: config.plugin.name.clone(),
            plugin_slug: config.plugin.slug.clone(),
            author: config.author.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileChange {
    /// File path relative to root.
    pub file: String,
    pub replacements: usize,
}

/// A warning about something the run chose not to do.
#[derive(Debug, Clone, Serialize)]
pub struct RebrandWarning {
    pub kind: String,
    pub file: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RebrandReport {
    pub root: String,
    pub dry_run: bool,
    pub status: RebrandStatus,
    pub config: ConfigSummary,
    pub replacements: Vec<ReplacementPair>,
    pub files: Vec<FileChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_file_rename: Option<FileRename>,
    pub version_script_updated: bool,
    pub changelog_reset: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<RebrandWarning>,
    pub files_modified: usize,
    pub total_replacements: usize,
}

impl RebrandReport {
    fn new(root: &Path, config: &TemplateConfig, options: &RebrandOptions) -> Self {
        Self {
            root: root.display().to_string(),
            dry_run: options.dry_run,
            status: RebrandStatus::NoChanges,
            config: ConfigSummary::from(config),
            replacements: Vec::new(),
            files: Vec::new(),
            plugin_file_rename: None,
            version_script_updated: false,
            changelog_reset: false,
            warnings: Vec::new(),
            files_modified: 0,
            total_replacements: 0,
        }
    }
}

/// Rebrand the template checked out at `root` using its `template.json`.
pub fn run(root: &Path, options: &RebrandOptions) -> Result<RebrandReport> {
    let config = config::load(root)?;
    log_status!("rebrand", "Configuration loaded from {}", config::config_path(root).display());

    run_with_config(root, &config, options)
}

/// Same as [`run`], with the configuration already loaded.
pub fn run_with_config(
    root: &Path,
    config: &TemplateConfig,
    options: &RebrandOptions,
) -> Result<RebrandReport> {
    let mut report = RebrandReport::new(root, config, options);

    let replacements = ReplacementSet::new(build_replacements(config));
    if replacements.is_empty() {
        log_status!("rebrand", "No changes detected - template.json matches defaults");
        return Ok(report);
    }
    report.replacements = replacements.pairs().to_vec();
    log_status!("rebrand", "Found {} replacement(s) to make", replacements.len());

    for path in CandidateFiles::new(root) {
        let count = mutator::process_file(&path, &replacements, options.dry_run)?;
        if count > 0 {
            let file = walker::relative_path(&path, root);
            log_status!("files", "{} ({} replacement(s))", file, count);
            report.total_replacements += count;
            report.files.push(FileChange {
                file,
                replacements: count,
            });
        }
    }
    report.files_modified = report.files.len();

    let old_slug = TEMPLATE_DEFAULTS.plugin.slug;
    let new_slug = config.effective_slug(old_slug);

    if old_slug != new_slug {
        let rename = FileRename {
            from: scaffold::plugin_filename(old_slug),
            to: scaffold::plugin_filename(new_slug),
        };

        if scaffold::rename_main_plugin_file(root, old_slug, new_slug, options.dry_run)? {
            log_status!("files", "Renamed {} → {}", rename.from, rename.to);
            report.plugin_file_rename = Some(rename);
        } else if root.join(&rename.from).is_file() && root.join(&rename.to).exists() {
            report.warnings.push(RebrandWarning {
                kind: "file_collision".to_string(),
                file: rename.to.clone(),
                message: format!(
                    "Rename target '{}' already exists; '{}' was left in place",
                    rename.to, rename.from
                ),
            });
        }

        if scaffold::update_version_script(root, old_slug, new_slug, options.dry_run)? {
            log_status!("files", "Updated {} with new filename", VERSION_SCRIPT);
            report.version_script_updated = true;
        }
    }

    if !options.keep_changelog {
        changelog::reset_changelog(root, config, options.dry_run)?;
        log_status!("files", "Reset {} for fresh start", CHANGELOG_FILE);
        report.changelog_reset = true;
    }

    report.status = if options.dry_run {
        RebrandStatus::Previewed
    } else {
        RebrandStatus::Applied
    };

    Ok(report)
}
