use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{ParseError, Record};

/// Maximum characters of an offending line kept in a [`ParseError`]
pub const ERROR_PREVIEW_CHARS: usize = 200;

/// Result of parsing one non-blank line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Record(Box<Record>),
    Error(ParseError),
}

/// Records and per-line errors of one input, each in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFile {
    pub records: Vec<Record>,
    pub errors: Vec<ParseError>,
}

impl ParsedFile {
    /// Non-blank lines seen: parsed records plus parse errors
    pub fn line_count(&self) -> usize {
        self.records.len() + self.errors.len()
    }
}

/// Lazy line-by-line JSONL parser
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Blank lines are skipped but still
/// advance the line counter, so error line numbers match what an editor shows.
/// Only read failures of the underlying stream are reported as `Err`; malformed
/// lines become [`LineOutcome::Error`].
pub struct JsonlReader<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    line_number: usize,
}

impl<R: BufRead> JsonlReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: Vec::new(), pending: VecDeque::new(), line_number: 0 }
    }

    fn next_line(&mut self) -> Option<io::Result<String>> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }

            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }

            let chunk = self.buf.strip_suffix(b"\n").unwrap_or(&self.buf[..]);
            let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
            match std::str::from_utf8(chunk) {
                // JSON strings cannot hold a raw CR, so splitting never cuts a record
                Ok(text) => self.pending.extend(text.split('\r').map(str::to_owned)),
                Err(e) => return Some(Err(io::Error::new(io::ErrorKind::InvalidData, e))),
            }
        }
    }
}

impl<R: BufRead> Iterator for JsonlReader<R> {
    type Item = Result<LineOutcome>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.next_line()?;
            self.line_number += 1;

            let line_number = self.line_number;
            let line = match line
                .with_context(|| format!("Failed to read line {line_number} from JSONL input"))
            {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            return Some(Ok(parse_line(line_number, trimmed)));
        }
    }
}

/// Parse a single trimmed, non-blank line
pub fn parse_line(line_number: usize, line: &str) -> LineOutcome {
    let parsed = parse_value(line).map_err(|e| e.to_string()).and_then(
        |value| {
            if !value.is_object() {
                return Err(format!("expected a JSON object, found {}", json_kind(&value)));
            }
            serde_json::from_value::<Record>(value).map_err(|e| e.to_string())
        },
    );

    match parsed {
        Ok(record) => LineOutcome::Record(Box::new(record)),
        Err(error) => LineOutcome::Error(ParseError {
            line: line_number,
            error,
            preview: line.chars().take(ERROR_PREVIEW_CHARS).collect(),
        }),
    }
}

/// Parse one JSON document with no nesting limit
///
/// The stack grows on demand while parsing, so deeply nested payloads parse
/// instead of tripping serde_json's default depth limit of 128.
fn parse_value(line: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(line);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read every line of `reader`, splitting records from parse errors
pub fn read_jsonl<R: BufRead>(reader: R) -> Result<ParsedFile> {
    let mut parsed = ParsedFile::default();

    for outcome in JsonlReader::new(reader) {
        match outcome? {
            LineOutcome::Record(record) => parsed.records.push(*record),
            LineOutcome::Error(error) => parsed.errors.push(error),
        }
    }

    Ok(parsed)
}

/// Parse a JSONL chat history file
///
/// Malformed lines are logged and collected in [`ParsedFile::errors`]; they never
/// abort the run. Failing to open or read the file is an error.
pub fn parse_jsonl_file(path: &Path) -> Result<ParsedFile> {
    let file =
        File::open(path).with_context(|| format!("Failed to open JSONL file: {}", path.display()))?;

    let parsed = read_jsonl(BufReader::new(file))
        .with_context(|| format!("Failed to read JSONL file: {}", path.display()))?;

    for error in &parsed.errors {
        warn!("Failed to parse line {} in {}: {}", error.line, path.display(), error.error);
    }

    if parsed.errors.is_empty() {
        debug!("Parsed {}: {} entries", path.display(), parsed.records.len());
    } else {
        warn!(
            "Parsed {}: {} entries ({} skipped)",
            path.display(),
            parsed.records.len(),
            parsed.errors.len()
        );
    }

    Ok(parsed)
}
