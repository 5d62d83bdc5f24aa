//! Code highlighting via the external `highlight` tool.
//!
//! See <http://www.andre-simon.de/doku/highlight/en/highlight.php>.
//! When the tool is missing or fails, the (trimmed) code is returned as-is.

use super::exec::Cmd;
use crate::log;
use serde::{Deserialize, Serialize};

/// Executable name looked up in `PATH`.
pub const HIGHLIGHT_BIN: &str = "highlight";

/// Highlighting options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightOptions {
    /// Source language passed as `--syntax`.
    pub lexer: String,
    /// Color theme passed as `--style`.
    pub style: String,
    /// Prefix lines with numbers.
    pub line_numbers: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            lexer: "txt".to_owned(),
            style: "edit-eclipse".to_owned(),
            line_numbers: false,
        }
    }
}

impl HighlightOptions {
    /// Command-line arguments for the highlight tool.
    fn to_args(&self) -> Vec<String> {
        let line_numbers = if self.line_numbers { "-l" } else { "" };
        [
            "--enclose-pre",
            "-O xhtml",
            line_numbers,
            "-K=14",
            "--fragment",
            "--include-style",
            "--inline-css",
        ]
        .into_iter()
        .map(str::to_owned)
        .chain([
            format!("--syntax={}", self.lexer),
            format!("--style={}", self.style),
        ])
        .collect()
    }
}

/// Check whether the highlight tool is installed and in `PATH`.
pub fn has_highlight() -> bool {
    which::which(HIGHLIGHT_BIN).is_ok()
}

/// Highlight `code` as an HTML fragment.
///
/// Leading and trailing whitespace is trimmed first so line numbering starts
/// at the first real line.
pub fn highlight(code: &str, options: &HighlightOptions) -> String {
    if !has_highlight() {
        log!("warning"; "highlighting requires `{HIGHLIGHT_BIN}` to be installed and in PATH");
        return code.to_owned();
    }

    let code = code.trim();
    match Cmd::new(HIGHLIGHT_BIN)
        .args(options.to_args())
        .stdin(code)
        .run()
    {
        Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
        Err(err) => {
            log!("error"; "lexer: {}\ncode:\n{}\n{:#}", options.lexer, code, err);
            code.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = HighlightOptions::default().to_args();
        assert!(args.contains(&"--fragment".to_owned()));
        assert!(args.contains(&"--syntax=txt".to_owned()));
        assert!(args.contains(&"--style=edit-eclipse".to_owned()));
        assert!(!args.contains(&"-l".to_owned()));
    }

    #[test]
    fn test_args_line_numbers() {
        let options = HighlightOptions {
            lexer: "rust".to_owned(),
            line_numbers: true,
            ..Default::default()
        };
        let args = options.to_args();
        assert!(args.contains(&"-l".to_owned()));
        assert!(args.contains(&"--syntax=rust".to_owned()));
    }

    #[test]
    fn test_highlight_fallback() {
        // Either the tool is absent and the code comes back verbatim, or it
        // produces markup that still contains the source text.
        let code = "fn main() {}";
        let out = highlight(code, &HighlightOptions::default());
        assert!(out.contains("main"));
    }
}
