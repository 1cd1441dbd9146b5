//! Response files
//!
//! A response file holds a single `bundle` invocation. `create-rsp` writes
//! one; on startup every `@path` argument is replaced by the tokens of that
//! file, so `fib @command.rsp` replays it.
//!
//! Tokens are separated by whitespace. Double quotes group a token and inside
//! them `\"` and `\\` are escapes; any other backslash is literal so unquoted
//! Windows paths survive.

use std::ffi::OsString;
use std::path::Path;

use crate::error::{Result, fs};
use crate::selection::SortMode;

/// A `bundle` invocation collected for a response file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleInvocation {
    pub source: String,
    pub output: String,
    pub languages: Vec<String>,
    pub sort: SortMode,
    pub remove_empty_lines: bool,
    pub author: Option<String>,
    pub note: bool,
}

impl BundleInvocation {
    /// Render as a single command line, quoting every free-text value.
    ///
    /// Values are attached with `=` so one starting with `-` is never read
    /// back as a flag.
    pub fn to_command_line(&self) -> String {
        let mut line = format!(
            "bundle --source={} --output={} --language={} --sort={}",
            quote(&self.source),
            quote(&self.output),
            quote(&self.languages.join(",")),
            self.sort.as_str()
        );
        if self.remove_empty_lines {
            line.push_str(" --remove-empty-lines");
        }
        if let Some(author) = self.author.as_deref().filter(|a| !a.trim().is_empty()) {
            line.push_str(" --author=");
            line.push_str(&quote(author));
        }
        if self.note {
            line.push_str(" --note");
        }
        line
    }
}

/// Wrap `value` in double quotes, escaping `"` and `\`
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Split response file content into arguments
pub fn tokenize(content: &str) -> std::result::Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            '\\' if in_quotes && matches!(chars.peek(), Some('"' | '\\')) => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err("unterminated quote".to_string());
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Write `line` as the whole content of the response file
pub fn write(path: &Path, line: &str) -> Result<()> {
    std::fs::write(path, format!("{line}\n")).map_err(|e| fs::write_failed(path, e))
}

/// Read and tokenize a response file
pub fn read(path: &Path) -> Result<Vec<String>> {
    let display = path.display().to_string();
    let content =
        std::fs::read_to_string(path).map_err(|e| fs::response_file_failed(display.clone(), e))?;
    tokenize(&content).map_err(|e| fs::response_file_failed(display, e))
}

/// Replace every `@path` argument after the program name with the tokens of
/// that file. `@@x` stands for a literal `@x`.
pub fn expand_args<I>(args: I) -> Result<Vec<OsString>>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut expanded: Vec<OsString> = args.next().into_iter().collect();

    for arg in args {
        let Some(text) = arg.to_str() else {
            expanded.push(arg);
            continue;
        };
        if let Some(literal) = text.strip_prefix("@@") {
            expanded.push(format!("@{literal}").into());
        } else if let Some(path) = text.strip_prefix('@').filter(|p| !p.is_empty()) {
            expanded.extend(read(Path::new(path))?.into_iter().map(OsString::from));
        } else {
            expanded.push(arg);
        }
    }

    Ok(expanded)
}
