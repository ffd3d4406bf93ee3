//! Extension to syntax-mode lookup.

use crate::shared::file_kind::extension_of;

/// Syntax modes known to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SyntaxMode {
    #[default]
    JavaScript,
    Python,
    HtmlMixed,
    Css,
    Json,
    Xml,
    Ruby,
    Php,
    Go,
    Java,
    CSource,
    CppSource,
    Markdown,
}

impl SyntaxMode {
    /// Resolve a mode from a file name; unknown extensions fall back to
    /// JavaScript.
    pub(crate) fn from_file_name(file_name: &str) -> Self {
        match extension_of(file_name).as_str() {
            "js" | "jsx" | "ts" | "tsx" => Self::JavaScript,
            "py" => Self::Python,
            "html" => Self::HtmlMixed,
            "css" => Self::Css,
            "json" => Self::Json,
            "xml" => Self::Xml,
            "rb" => Self::Ruby,
            "php" => Self::Php,
            "go" => Self::Go,
            "java" => Self::Java,
            "c" => Self::CSource,
            "cpp" => Self::CppSource,
            "md" => Self::Markdown,
            _ => Self::default(),
        }
    }

    /// Mode identifier as shown in the status bar.
    pub(crate) fn mode_name(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::HtmlMixed => "htmlmixed",
            Self::Css => "css",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Ruby => "ruby",
            Self::Php => "php",
            Self::Go => "go",
            Self::Java => "text/x-java",
            Self::CSource => "text/x-csrc",
            Self::CppSource => "text/x-c++src",
            Self::Markdown => "text/x-markdown",
        }
    }

    /// Token understood by the text widget's highlighter.
    pub(crate) fn highlight_token(self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::Python => "py",
            Self::HtmlMixed => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Ruby => "rb",
            Self::Php => "php",
            Self::Go => "go",
            Self::Java => "java",
            Self::CSource => "c",
            Self::CppSource => "cpp",
            Self::Markdown => "md",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SyntaxMode;
    use crate::shared::ui::icons::file_icon;

    #[test]
    fn given_uppercase_extension_when_resolved_then_lookup_ignores_case() {
        assert_eq!(SyntaxMode::from_file_name("SCRIPT.PY"), SyntaxMode::Python);
        assert_eq!(SyntaxMode::from_file_name("App.Tsx"), SyntaxMode::JavaScript);
    }

    #[test]
    fn given_unknown_or_missing_extension_when_resolved_then_javascript_is_used()
    {
        assert_eq!(SyntaxMode::from_file_name("notes.xyz"), SyntaxMode::JavaScript);
        assert_eq!(SyntaxMode::from_file_name("Makefile"), SyntaxMode::JavaScript);
    }

    #[test]
    fn given_c_family_files_when_resolved_then_mime_style_modes_are_reported() {
        assert_eq!(SyntaxMode::from_file_name("main.c").mode_name(), "text/x-csrc");
        assert_eq!(
            SyntaxMode::from_file_name("main.cpp").mode_name(),
            "text/x-c++src"
        );
        assert_eq!(SyntaxMode::from_file_name("README.md").highlight_token(), "md");
    }

    #[test]
    fn given_dotless_name_when_resolved_then_mode_agrees_with_tree_icon() {
        assert_eq!(SyntaxMode::from_file_name("py"), SyntaxMode::Python);
        assert_eq!(file_icon("py"), "🐍");
        assert_eq!(SyntaxMode::from_file_name("md"), SyntaxMode::Markdown);
        assert_eq!(file_icon("md"), "📋");
    }
}
