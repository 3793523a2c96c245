//! Candidate file discovery.
//!
//! Yields every text-like file under the repository root that is not on the
//! deny-list. The walk is lazy; `find_candidate_files` collects it.
//! Symlinks are not followed, so the walk stays inside the root and visits
//! each file once.

use std::path::{Path, PathBuf};

/// Relative-path fragments that are never rewritten. A path is skipped if it
/// starts with or contains any of these.
pub const SKIP_PATTERNS: &[&str] = &[
    "template.json",
    "scripts/init-repo.py",
    "vendor/",
    ".git/",
    "node_modules/",
];

pub const TEXT_EXTENSIONS: &[&str] = &[
    "php", "md", "json", "xml", "yml", "yaml", "sh", "txt", "css", "js",
];

/// `path` relative to `root`, with `/` separators.
pub fn relative_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn should_skip(relative: &str) -> bool {
    SKIP_PATTERNS
        .iter()
        .any(|pattern| relative.starts_with(pattern) || relative.contains(pattern))
}

pub fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext))
}

/// Lazy depth-first walk over candidate files.
pub struct CandidateFiles {
    root: PathBuf,
    /// Directories not yet read.
    dirs: Vec<PathBuf>,
    /// Files from the most recently read directory, reversed for `pop`.
    files: Vec<PathBuf>,
}

impl CandidateFiles {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            dirs: vec![root.to_path_buf()],
            files: Vec::new(),
        }
    }

    fn read_dir(&mut self, dir: &Path) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };

        // file_type() does not follow symlinks; linked entries are never walked
        let mut entries: Vec<(PathBuf, std::fs::FileType)> = entries
            .flatten()
            .filter_map(|e| e.file_type().ok().map(|t| (e.path(), t)))
            .filter(|(_, t)| !t.is_symlink())
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut subdirs = Vec::new();
        for (path, file_type) in entries {
            let relative = relative_path(&path, &self.root);
            if file_type.is_dir() {
                if !should_skip(&format!("{}/", relative)) {
                    subdirs.push(path);
                }
            } else if file_type.is_file() && !should_skip(&relative) && has_text_extension(&path) {
                self.files.push(path);
            }
        }

        self.files.reverse();
        self.dirs.extend(subdirs.into_iter().rev());
    }
}

impl Iterator for CandidateFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            if let Some(file) = self.files.pop() {
                return Some(file);
            }
            let dir = self.dirs.pop()?;
            self.read_dir(&dir);
        }
    }
}

/// Collect every candidate file under `root`.
pub fn find_candidate_files(root: &Path) -> Vec<PathBuf> {
    CandidateFiles::new(root).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "template-wp-plugin\n").unwrap();
    }

    fn relatives(root: &Path) -> Vec<String> {
        let mut files: Vec<String> = find_candidate_files(root)
            .iter()
            .map(|p| relative_path(p, root))
            .collect();
        files.sort();
        files
    }

    #[test]
    fn skip_matches_prefix_or_substring() {
        assert!(should_skip("template.json"));
        assert!(should_skip("scripts/init-repo.py"));
        assert!(should_skip("vendor/autoload.php"));
        assert!(should_skip("tools/vendor/lib.php"));
        assert!(should_skip(".git/config"));
        assert!(should_skip("sub/.git/HEAD"));
        assert!(should_skip("assets/node_modules/x/index.js"));
        assert!(should_skip("docs/template.json.md"));
        assert!(!should_skip("README.md"));
        assert!(!should_skip("includes/vendors.php"));
    }

    #[test]
    fn extension_whitelist() {
        assert!(has_text_extension(Path::new("a/b.php")));
        assert!(has_text_extension(Path::new("ci.yml")));
        assert!(!has_text_extension(Path::new("logo.png")));
        assert!(!has_text_extension(Path::new("Makefile")));
        assert!(!has_text_extension(Path::new("lib.rs")));
    }

    #[test]
    fn walk_finds_nested_text_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "template-wp-plugin.php");
        touch(root, "README.md");
        touch(root, "scripts/validate-versions.sh");
        touch(root, ".github/workflows/ci.yml");
        touch(root, "assets/logo.png");

        assert_eq!(
            relatives(root),
            vec![
                ".github/workflows/ci.yml",
                "README.md",
                "scripts/validate-versions.sh",
                "template-wp-plugin.php",
            ]
        );
    }

    #[test]
    fn walk_never_yields_denied_paths() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "template.json");
        touch(root, "scripts/init-repo.py");
        touch(root, "vendor/composer/installed.json");
        touch(root, ".git/description.txt");
        touch(root, "node_modules/pkg/index.js");
        touch(root, "assets/node_modules/pkg/index.js");
        touch(root, "composer.json");

        assert_eq!(relatives(root), vec!["composer.json"]);
    }

    #[test]
    fn walk_is_lazy_iterator() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "a.md");
        touch(root, "b.md");

        let mut walk = CandidateFiles::new(root);
        assert!(walk.next().is_some());
        assert!(walk.next().is_some());
        assert!(walk.next().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn walk_does_not_follow_directory_link_loops() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "README.md");
        std::os::unix::fs::symlink(root, root.join("loop")).unwrap();

        assert_eq!(relatives(root), vec!["README.md"]);
    }

    #[cfg(unix)]
    #[test]
    fn walk_stays_inside_root() {
        let outside = TempDir::new().unwrap();
        touch(outside.path(), "shared.md");

        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "README.md");
        std::os::unix::fs::symlink(outside.path(), root.join("ext")).unwrap();
        std::os::unix::fs::symlink(outside.path().join("shared.md"), root.join("linked.md")).unwrap();

        assert_eq!(relatives(root), vec!["README.md"]);
    }

    #[test]
    fn walk_of_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(find_candidate_files(&dir.path().join("missing")).is_empty());
    }
}
