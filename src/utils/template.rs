//! String template rendering utilities.

pub struct TemplateVars;

impl TemplateVars {
    pub const PLUGIN_NAME: &'static str = "pluginName";
    pub const VERSION: &'static str = "version";
    pub const DATE: &'static str = "date";
}

/// Replace every `{{key}}` placeholder with its value.
pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}
