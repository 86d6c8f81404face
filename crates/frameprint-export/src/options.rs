//! Options for a generation run.

use serde::{Deserialize, Serialize};

/// Naming convention used to detect template directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DirectiveConvention {
    /// `loop-<items>`, `if-<flag>`, `var-<name>` prefixes.
    #[default]
    Prefix,
    /// Exact sentinel names: `{{ project_name }}`, `{{ project_description }}`, `{{#images}}`.
    Sentinel,
}

/// Scaffolding placed around the generated markup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DocumentShell {
    /// Markup fragment only.
    #[default]
    Fragment,
    /// Complete HTML document titled `{{ project_name }}` and linking `style.css`.
    FullPage { lang: String },
}

impl DocumentShell {
    /// Wrap the body markup.
    pub fn wrap(&self, body: &str) -> String {
        match self {
            DocumentShell::Fragment => body.to_string(),
            DocumentShell::FullPage { lang } => format!(
                r#"<!DOCTYPE html>
<html lang="{}">
<head>
    <meta charset="UTF-8">
    <title>{{{{ project_name }}}}</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    {}
</body>
</html>"#,
                lang, body
            ),
        }
    }
}

/// Options for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Directive naming convention.
    pub convention: DirectiveConvention,
    /// Document scaffolding.
    pub shell: DocumentShell,
    /// Raster export scale factor.
    pub export_scale: f64,
    /// Path prefix for image references.
    pub image_dir: String,
    /// Path prefix for `@font-face` sources.
    pub font_dir: String,
    /// Prefix of generated class names.
    pub class_prefix: String,
    /// Frame name used when the root name has no alphanumeric characters.
    pub fallback_frame_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            convention: DirectiveConvention::Prefix,
            shell: DocumentShell::Fragment,
            export_scale: 2.0,
            image_dir: "images/".to_string(),
            font_dir: "fonts/".to_string(),
            class_prefix: "el-".to_string(),
            fallback_frame_name: "export".to_string(),
        }
    }
}

impl ExportOptions {
    pub fn with_convention(mut self, convention: DirectiveConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_shell(mut self, shell: DocumentShell) -> Self {
        self.shell = shell;
        self
    }
}
