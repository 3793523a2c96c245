//! Replacement pairs: what to rewrite, derived from config vs. defaults.
//!
//! Given a `TemplateConfig`, this module:
//! 1. Compares each tracked field against `TEMPLATE_DEFAULTS`
//! 2. Emits a literal (from → to) pair for every field that changed
//! 3. Applies the pairs to a piece of text, in order

use serde::Serialize;

use crate::config::{non_empty, TemplateConfig};
use crate::defaults::{TemplateDefaults, TEMPLATE_DEFAULTS};

// ============================================================================
// Types
// ============================================================================

/// A literal substitution produced by one config field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacementPair {
    /// Dotted config field that produced this pair (e.g. `plugin.slug`).
    pub field: String,
    pub from: String,
    pub to: String,
}

impl ReplacementPair {
    fn new(field: &str, from: &str, to: &str) -> Self {
        Self {
            field: field.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// An ordered set of pairs, applied one after another.
#[derive(Debug, Clone, Default)]
pub struct ReplacementSet {
    pairs: Vec<ReplacementPair>,
}

/// Result of applying a `ReplacementSet` to some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub content: String,
    pub replacements: usize,
}

// ============================================================================
// Building
// ============================================================================

/// Build the replacement pairs for `config`, in field order.
///
/// A field contributes a pair only when it is set, non-empty, and differs
/// from the default. GitHub owner and repo are combined into one
/// `owner/repo` pair, each side falling back to its default.
pub fn build_replacements(config: &TemplateConfig) -> Vec<ReplacementPair> {
    build_replacements_from(&TEMPLATE_DEFAULTS, config)
}

pub fn build_replacements_from(
    defaults: &TemplateDefaults,
    config: &TemplateConfig,
) -> Vec<ReplacementPair> {
    let tracked: [(&str, &str, Option<&str>); 10] = [
        ("plugin.name", defaults.plugin.name, config.plugin.name.as_deref()),
        ("plugin.slug", defaults.plugin.slug, config.plugin.slug.as_deref()),
        (
            "plugin.description",
            defaults.plugin.description,
            config.plugin.description.as_deref(),
        ),
        ("plugin.uri", defaults.plugin.uri, config.plugin.uri.as_deref()),
        ("author.name", defaults.author.name, config.author.name.as_deref()),
        ("author.uri", defaults.author.uri, config.author.uri.as_deref()),
        ("php.namespace", defaults.php.namespace, config.php.namespace.as_deref()),
        (
            "php.function_prefix",
            defaults.php.function_prefix,
            config.php.function_prefix.as_deref(),
        ),
        (
            "php.constant_prefix",
            defaults.php.constant_prefix,
            config.php.constant_prefix.as_deref(),
        ),
        ("composer.name", defaults.composer.name, config.composer.name.as_deref()),
    ];

    let mut pairs: Vec<ReplacementPair> = tracked
        .iter()
        .filter_map(|&(field, default, configured)| {
            let configured = non_empty(configured)?;
            (configured != default).then(|| ReplacementPair::new(field, default, configured))
        })
        .collect();

    let github_old = defaults.github.combined();
    let github_new = format!(
        "{}/{}",
        non_empty(config.github.owner.as_deref()).unwrap_or(defaults.github.owner),
        non_empty(config.github.repo.as_deref()).unwrap_or(defaults.github.repo),
    );
    if github_old != github_new {
        pairs.push(ReplacementPair::new("github", &github_old, &github_new));
    }

    pairs
}

// ============================================================================
// Applying
// ============================================================================

impl ReplacementSet {
    pub fn new(pairs: Vec<ReplacementPair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[ReplacementPair] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Apply each pair in field order to the output of the previous one.
    ///
    /// Each pair counts its occurrences in the content as it stands when the
    /// pair runs, so an earlier pair can consume text a later pair would
    /// have matched.
    pub fn apply(&self, content: &str) -> Applied {
        let mut current = content.to_string();
        let mut replacements = 0;

        for pair in &self.pairs {
            if pair.from.is_empty() {
                continue;
            }
            let count = current.matches(pair.from.as_str()).count();
            if count == 0 {
                continue;
            }
            current = current.replace(pair.from.as_str(), &pair.to);
            replacements += count;
        }

        Applied {
            content: current,
            replacements,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
