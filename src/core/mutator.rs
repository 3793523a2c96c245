//! In-place rewriting of a single file.

use std::path::Path;

use crate::error::Result;
use crate::replacements::ReplacementSet;
use crate::utils::io;

/// Apply `replacements` to the file at `path` and return how many
/// occurrences were replaced.
///
/// Missing and binary files count as zero and are left untouched. The file is
/// rewritten only when its content changed and `dry_run` is false; the count
/// is the same either way.
pub fn process_file(path: &Path, replacements: &ReplacementSet, dry_run: bool) -> Result<usize> {
    let Some(content) = io::read_text(path, &format!("read {}", path.display()))? else {
        return Ok(0);
    };

    let applied = replacements.apply(&content);
    if applied.content == content {
        return Ok(0);
    }

    if !dry_run {
        io::write_file(path, &applied.content, &format!("write {}", path.display()))?;
    }

    Ok(applied.replacements)
}
