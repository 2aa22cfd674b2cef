use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::{Result, TsvGuardError};

/// Field separator for TSV content.
pub const COLUMN_SEPARATOR: char = '\t';

/// A single physical line of the input file.
///
/// Holds the raw text including any line terminator. Lines are numbered from 1
/// and never mutated after reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    number: usize,
    raw: String,
}

impl Line {
    #[must_use]
    pub fn new(number: usize, raw: impl Into<String>) -> Self {
        Self {
            number,
            raw: raw.into(),
        }
    }

    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Raw line text, terminator included.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Line text with the terminator stripped.
    #[must_use]
    pub fn content(&self) -> &str {
        self.raw
            .strip_suffix("\r\n")
            .or_else(|| self.raw.strip_suffix('\n'))
            .or_else(|| self.raw.strip_suffix('\r'))
            .unwrap_or(&self.raw)
    }

    /// The terminator bytes of this line (empty for an unterminated last line).
    #[must_use]
    pub fn terminator(&self) -> &str {
        &self.raw[self.content().len()..]
    }

    /// True when the content (terminator excluded) is zero-length.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }

    /// Tab-separated cells of this line.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.content().split(COLUMN_SEPARATOR)
    }

    /// Number of tab characters in the content.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.content()
            .chars()
            .filter(|&c| c == COLUMN_SEPARATOR)
            .count()
    }

    /// True when the content starts with the given comment prefix.
    #[must_use]
    pub fn is_comment(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.content().starts_with(prefix)
    }
}

/// Reads a file and decodes it under the named encoding.
///
/// The encoding name is resolved as a WHATWG label (`utf-8`, `latin1`,
/// `windows-1252`, ...). A leading BOM matching the encoding is stripped;
/// bytes that cannot be decoded abort with a decode error before any line is
/// produced.
///
/// # Errors
/// Returns an error when the encoding label is unknown, the file cannot be
/// read, or its bytes are invalid under the encoding.
pub fn read_lines(path: &Path, encoding_name: &str) -> Result<Vec<Line>> {
    let encoding = Encoding::for_label(encoding_name.as_bytes())
        .ok_or_else(|| TsvGuardError::UnknownEncoding(encoding_name.to_string()))?;

    let bytes = fs::read(path).map_err(|source| TsvGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let (text, had_errors) = encoding.decode_with_bom_removal(&bytes);
    if had_errors {
        return Err(TsvGuardError::Decode {
            path: path.to_path_buf(),
            encoding: encoding_name.to_string(),
        });
    }

    Ok(split_lines(&text))
}

/// Splits text into physical lines, preserving raw terminator bytes.
///
/// Recognized terminators: `\n`, `\r\n`, and bare `\r`. The split never
/// produces a trailing empty line for terminated input, so the last `Line` is
/// unterminated exactly when the file does not end with a line break.
#[must_use]
pub fn split_lines(text: &str) -> Vec<Line> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(Line::new(lines.len() + 1, &text[start..=i]));
                i += 1;
                start = i;
            }
            b'\r' => {
                let end = if bytes.get(i + 1) == Some(&b'\n') {
                    i + 2
                } else {
                    i + 1
                };
                lines.push(Line::new(lines.len() + 1, &text[start..end]));
                i = end;
                start = end;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(Line::new(lines.len() + 1, &text[start..]));
    }

    lines
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
