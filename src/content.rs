//! Content items and the serializers that write them into open files.
//! The producer chooses the variant explicitly; the handler bound at
//! file-open time decides how each variant is laid out on disk.

use std::io::Write;

use serde::Serialize;

use crate::error::{Error, Result};

/// A unit of content emitted into the currently open file.
#[derive(Debug, Clone)]
pub enum Content {
    /// A line-oriented string; multi-line values are dedented as a block
    Text(String),
    /// A sequence of lines written as one newline-joined unit
    Block(Vec<String>),
    /// Structured data serialized as pretty JSON
    Data(serde_json::Value),
}

impl Content {
    /// Short description of the variant, used in `WriteError` messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Text(_) => "text",
            Content::Block(_) => "block of lines",
            Content::Data(_) => "structured data",
        }
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<Vec<String>> for Content {
    fn from(value: Vec<String>) -> Self {
        Content::Block(value)
    }
}

impl From<Vec<&str>> for Content {
    fn from(value: Vec<&str>) -> Self {
        Content::Block(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Content {
    fn from(value: &[&str]) -> Self {
        Content::Block(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<serde_json::Value> for Content {
    fn from(value: serde_json::Value) -> Self {
        Content::Data(value)
    }
}

/// Serializer bound to a file scope when it is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentHandler {
    /// Line-oriented command text (`.mcfunction` files)
    Line,
    /// Structured JSON data (tag files and similar)
    Structured,
}

impl ContentHandler {
    /// Serializes `item` into `out`.
    ///
    /// # Errors
    /// * `Error::WriteError` if the handler cannot serialize the variant
    pub fn handle(&self, out: &mut dyn Write, item: &Content) -> Result<()> {
        match self {
            ContentHandler::Line => match item {
                Content::Text(text) => write_line_unit(out, text),
                Content::Block(lines) => write_line_unit(out, &lines.join("\n")),
                Content::Data(_) => Err(Error::WriteError(format!(
                    "line handler cannot serialize {}",
                    item.kind()
                ))),
            },
            ContentHandler::Structured => match item {
                Content::Data(value) => {
                    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                    let mut serializer = serde_json::Serializer::with_formatter(&mut *out, formatter);
                    value.serialize(&mut serializer)?;
                    out.write_all(b"\n")?;
                    Ok(())
                }
                Content::Text(text) => {
                    out.write_all(text.as_bytes())?;
                    if !text.ends_with('\n') {
                        out.write_all(b"\n")?;
                    }
                    Ok(())
                }
                Content::Block(_) => Err(Error::WriteError(format!(
                    "structured handler cannot serialize {}",
                    item.kind()
                ))),
            },
        }
    }
}

/// Writes one line-oriented unit: dedent multi-line values so indented
/// literal blocks in the caller's source read naturally, and guarantee
/// exactly one trailing newline.
fn write_line_unit(out: &mut dyn Write, content: &str) -> Result<()> {
    let mut newline_count = content.matches('\n').count();
    if content.ends_with('\n') {
        newline_count = newline_count.saturating_sub(1);
    }

    let mut content =
        if newline_count > 0 { dedent(content) } else { content.to_string() };

    if !content.ends_with('\n') {
        content.push('\n');
    }
    out.write_all(content.as_bytes())?;
    Ok(())
}

/// Strips the longest common leading whitespace from all non-blank lines.
/// Whitespace-only lines do not count toward the margin and come out empty.
pub(crate) fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        let indent = &line[..line.len() - trimmed.len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }

    let margin = margin.unwrap_or("");
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                line.strip_prefix(margin).unwrap_or(line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedent_strips_common_margin() {
        let text = "    say one\n    say two";
        assert_eq!(dedent(text), "say one\nsay two");
    }

    #[test]
    fn dedent_keeps_relative_indent() {
        let text = "    say one\n        say nested";
        assert_eq!(dedent(text), "say one\n    say nested");
    }

    #[test]
    fn dedent_ignores_blank_lines_for_margin() {
        let text = "    say one\n\n    say two";
        assert_eq!(dedent(text), "say one\n\nsay two");
    }
}
