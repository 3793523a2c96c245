use clap::Args;
use std::path::PathBuf;

use wp_rebrand::defaults::{CHANGELOG_FILE, CONFIG_FILE, VERSION_SCRIPT};
use wp_rebrand::rebrand::{self, RebrandOptions, RebrandReport, RebrandStatus};
use wp_rebrand::Error;

use crate::commands::CmdResult;

const DISPLAY_LIMIT: usize = 40;
const RULE_WIDTH: usize = 50;

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct RebrandArgs {
    /// Preview changes without modifying any file
    #[arg(long)]
    pub dry_run: bool,
    /// Keep the existing CHANGELOG.md instead of resetting it
    #[arg(long)]
    pub keep_changelog: bool,
    /// Print the result as a JSON envelope
    #[arg(long)]
    pub json: bool,
}

impl RebrandArgs {
    /// Presence-based flag detection, used when the argument list is not
    /// something clap accepts. Anything unrecognized is ignored.
    pub fn from_flags<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::default();
        for arg in args {
            match arg.as_ref() {
                "--dry-run" => parsed.dry_run = true,
                "--keep-changelog" => parsed.keep_changelog = true,
                "--json" => parsed.json = true,
                _ => {}
            }
        }
        parsed
    }

    fn options(&self) -> RebrandOptions {
        RebrandOptions {
            dry_run: self.dry_run,
            keep_changelog: self.keep_changelog,
        }
    }
}

fn repo_root() -> wp_rebrand::Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| Error::internal_io(e.to_string(), Some("resolve current directory".to_string())))
}

pub fn run(args: RebrandArgs) -> CmdResult<RebrandReport> {
    crate::tty::status("wp-rebrand is working...");

    let root = repo_root()?;
    let report = rebrand::run(&root, &args.options())?;
    Ok((report, 0))
}

pub fn run_markdown(args: RebrandArgs) -> wp_rebrand::Result<(String, i32)> {
    let (report, exit_code) = run(args)?;
    Ok((render_text(&report), exit_code))
}

fn truncate(value: &str) -> String {
    if value.chars().count() > DISPLAY_LIMIT {
        format!("{}...", value.chars().take(DISPLAY_LIMIT).collect::<String>())
    } else {
        value.to_string()
    }
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

pub fn render_text(report: &RebrandReport) -> String {
    let mut out = String::new();

    if report.dry_run {
        out.push_str("DRY RUN MODE - No files will be modified\n\n");
    }

    out.push_str(&format!("Repository root: {}\n\n", report.root));

    out.push_str(&format!("Configuration loaded from {}\n", CONFIG_FILE));
    out.push_str(&format!("   Plugin Name: {}\n", or_na(&report.config.plugin_name)));
    out.push_str(&format!("   Plugin Slug: {}\n", or_na(&report.config.plugin_slug)));
    out.push_str(&format!("   Author: {}\n\n", or_na(&report.config.author)));

    if report.status == RebrandStatus::NoChanges {
        out.push_str(&format!(
            "No changes detected - {} matches defaults.\n",
            CONFIG_FILE
        ));
        out.push_str(&format!(
            "   Edit {} with your plugin details and run again.\n",
            CONFIG_FILE
        ));
        return out;
    }

    out.push_str(&format!(
        "Found {} replacement(s) to make:\n",
        report.replacements.len()
    ));
    for pair in &report.replacements {
        out.push_str(&format!(
            "   '{}' → '{}'\n",
            truncate(&pair.from),
            truncate(&pair.to)
        ));
    }
    out.push('\n');

    out.push_str("Processing files...\n");
    for change in &report.files {
        out.push_str(&format!(
            "   ✓ {} ({} replacement(s))\n",
            change.file, change.replacements
        ));
    }
    if let Some(rename) = &report.plugin_file_rename {
        out.push_str(&format!("   ✓ Renamed {} → {}\n", rename.from, rename.to));
    }
    if report.version_script_updated {
        out.push_str(&format!("   ✓ Updated {} with new filename\n", VERSION_SCRIPT));
    }
    if report.changelog_reset {
        out.push_str(&format!("   ✓ Reset {} for fresh start\n", CHANGELOG_FILE));
    }
    for warning in &report.warnings {
        out.push_str(&format!("   ! {}\n", warning.message));
    }

    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str("Initialization complete!\n");
    out.push_str(&format!("   Files modified: {}\n", report.files_modified));
    out.push_str(&format!("   Total replacements: {}\n", report.total_replacements));
    out.push('\n');

    if report.dry_run {
        out.push_str("This was a dry run. Run without --dry-run to apply changes.\n");
    } else {
        out.push_str("Next steps:\n");
        out.push_str("   1. Review the changes: git diff\n");
        out.push_str("   2. Install dependencies: composer install\n");
        out.push_str("   3. Run linter: composer run lint\n");
        out.push_str(
            "   4. Commit your changes: git add -A && git commit -m 'chore: initialize plugin from template'\n",
        );
        if report.changelog_reset {
            out.push_str(&format!(
                "   5. Consider updating {} with your initial features\n",
                CHANGELOG_FILE
            ));
        }
    }

    out
}
