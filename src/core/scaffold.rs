//! Structural follow-ups to a slug change: the main plugin file's name and
//! the one script that refers to it.

use serde::Serialize;
use std::path::Path;

use crate::defaults::VERSION_SCRIPT;
use crate::error::Result;
use crate::utils::io;

/// A file or directory rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRename {
    /// Original path relative to root.
    pub from: String,
    /// New path relative to root.
    pub to: String,
}

pub fn plugin_filename(slug: &str) -> String {
    format!("{}.php", slug)
}

/// Move `<old_slug>.php` to `<new_slug>.php` at the repository root.
///
/// Returns false when the slug is unchanged, the old file is absent, or the
/// new file already exists. Under `dry_run` the move is reported but not made.
pub fn rename_main_plugin_file(
    root: &Path,
    old_slug: &str,
    new_slug: &str,
    dry_run: bool,
) -> Result<bool> {
    if old_slug == new_slug {
        return Ok(false);
    }

    let old_file = root.join(plugin_filename(old_slug));
    let new_file = root.join(plugin_filename(new_slug));

    if !old_file.is_file() || new_file.exists() {
        return Ok(false);
    }

    if !dry_run {
        io::rename_file(
            &old_file,
            &new_file,
            &format!("rename {} → {}", old_file.display(), new_file.display()),
        )?;
    }

    Ok(true)
}

/// Point `scripts/validate-versions.sh` at the renamed plugin file.
///
/// Returns true when the old filename was found in the script.
pub fn update_version_script(
    root: &Path,
    old_slug: &str,
    new_slug: &str,
    dry_run: bool,
) -> Result<bool> {
    let script_path = root.join(VERSION_SCRIPT);

    let Some(content) = io::read_text(&script_path, &format!("read {}", VERSION_SCRIPT))? else {
        return Ok(false);
    };

    let old_filename = plugin_filename(old_slug);
    if !content.contains(&old_filename) {
        return Ok(false);
    }

    let updated = content.replace(&old_filename, &plugin_filename(new_slug));
    if !dry_run {
        io::write_file(&script_path, &updated, &format!("write {}", VERSION_SCRIPT))?;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn renames_plugin_file_when_slug_changes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("template-wp-plugin.php"), "<?php\n").unwrap();

        let renamed =
            rename_main_plugin_file(dir.path(), "template-wp-plugin", "acme-plugin", false)
                .unwrap();

        assert!(renamed);
        assert!(!dir.path().join("template-wp-plugin.php").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("acme-plugin.php")).unwrap(),
            "<?php\n"
        );
    }

    #[test]
    fn rename_dry_run_reports_but_keeps_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("template-wp-plugin.php"), "<?php\n").unwrap();

        let renamed =
            rename_main_plugin_file(dir.path(), "template-wp-plugin", "acme-plugin", true).unwrap();

        assert!(renamed);
        assert!(dir.path().join("template-wp-plugin.php").exists());
        assert!(!dir.path().join("acme-plugin.php").exists());
    }

    #[test]
    fn rename_is_noop_without_old_file_or_slug_change() {
        let dir = TempDir::new().unwrap();
        assert!(
            !rename_main_plugin_file(dir.path(), "template-wp-plugin", "acme-plugin", false)
                .unwrap()
        );

        fs::write(dir.path().join("template-wp-plugin.php"), "<?php\n").unwrap();
        assert!(!rename_main_plugin_file(
            dir.path(),
            "template-wp-plugin",
            "template-wp-plugin",
            false
        )
        .unwrap());
    }

    #[test]
    fn rename_refuses_to_overwrite_existing_target() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("template-wp-plugin.php"), "old").unwrap();
        fs::write(dir.path().join("acme-plugin.php"), "existing").unwrap();

        let renamed =
            rename_main_plugin_file(dir.path(), "template-wp-plugin", "acme-plugin", false)
                .unwrap();

        assert!(!renamed);
        assert_eq!(
            fs::read_to_string(dir.path().join("acme-plugin.php")).unwrap(),
            "existing"
        );
    }

    #[test]
    fn patches_version_script_reference() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("scripts")).unwrap();
        let script = dir.path().join("scripts/validate-versions.sh");
        fs::write(&script, "PLUGIN_FILE=\"template-wp-plugin.php\"\n").unwrap();

        assert!(update_version_script(dir.path(), "template-wp-plugin", "acme-plugin", false)
            .unwrap());
        assert_eq!(
            fs::read_to_string(&script).unwrap(),
            "PLUGIN_FILE=\"acme-plugin.php\"\n"
        );

        // Already patched
        assert!(!update_version_script(dir.path(), "template-wp-plugin", "acme-plugin", false)
            .unwrap());
    }

    #[test]
    fn version_script_dry_run_leaves_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("scripts")).unwrap();
        let script = dir.path().join("scripts/validate-versions.sh");
        fs::write(&script, "template-wp-plugin.php\n").unwrap();

        assert!(update_version_script(dir.path(), "template-wp-plugin", "acme-plugin", true)
            .unwrap());
        assert_eq!(fs::read_to_string(&script).unwrap(), "template-wp-plugin.php\n");
    }

    #[test]
    fn missing_version_script_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(!update_version_script(dir.path(), "template-wp-plugin", "acme-plugin", false)
            .unwrap());
    }
}
