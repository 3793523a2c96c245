//! Template identity baked into the unconfigured plugin template.
//!
//! These are the literals the rebrand replaces *from*. They never change at
//! runtime.

/// Root of the template defaults, mirroring the `template.json` layout.
#[derive(Debug, Clone, Copy)]
pub struct TemplateDefaults {
    pub plugin: PluginDefaults,
    pub author: AuthorDefaults,
    pub php: PhpDefaults,
    pub composer: ComposerDefaults,
    pub github: GithubDefaults,
}

#[derive(Debug, Clone, Copy)]
pub struct PluginDefaults {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub uri: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AuthorDefaults {
    pub name: &'static str,
    pub uri: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PhpDefaults {
    pub namespace: &'static str,
    pub function_prefix: &'static str,
    pub constant_prefix: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ComposerDefaults {
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct GithubDefaults {
    pub owner: &'static str,
    pub repo: &'static str,
}

impl GithubDefaults {
    /// `owner/repo` as it appears in URLs and workflow files.
    pub fn combined(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

pub const TEMPLATE_DEFAULTS: TemplateDefaults = TemplateDefaults {
    plugin: PluginDefaults {
        name: "Template WordPress Plugin",
        slug: "template-wp-plugin",
        description: "A minimal boilerplate for WordPress plugins.",
        version: "1.0.3",
        uri: "https://github.com/liasoft/template-wp-plugin",
    },
    author: AuthorDefaults {
        name: "Liasoft GmbH",
        uri: "https://github.com/liasoft/template-wp-plugin",
    },
    php: PhpDefaults {
        namespace: "TemplateWPPlugin",
        function_prefix: "template_wp_plugin",
        constant_prefix: "TEMPLATE_PLUGIN",
    },
    composer: ComposerDefaults {
        name: "liasoft/template-wp-plugin",
    },
    github: GithubDefaults {
        owner: "liasoft",
        repo: "template-wp-plugin",
    },
};

/// Config file read from the repository root.
pub const CONFIG_FILE: &str = "template.json";

/// Script that references the main plugin file by name.
pub const VERSION_SCRIPT: &str = "scripts/validate-versions.sh";

pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Fallbacks used when regenerating the changelog.
pub const CHANGELOG_FALLBACK_NAME: &str = "My Plugin";
pub const CHANGELOG_FALLBACK_VERSION: &str = "1.0.0";
