//! Line-oriented parser for Postfix lookup-table files.
//!
//! Each logical line is classified against an ordered list of
//! alternatives, first match wins:
//!
//! 1. `ENTRY`       — `KEY VALUE`, or a bare key whose value follows on an
//!    indented continuation line
//! 2. `DELETED`     — `#-- KEY VALUE`, a retained soft-deleted record
//! 3. `SYS_COMMENT` — `#==...`, a generated section header (discarded,
//!    the serializer always regenerates them)
//! 4. `COMMENT`     — any other `#` line, buffered for the next entry
//! 5. `EMPTY`       — blank line, flushes the buffer into the file header
//!    while no real entry has been seen yet
//! 6. anything else is a syntax error and aborts the whole parse
//!
//! Comments accumulate in a pending buffer and attach to the entry that
//! ends the run; a buffer still pending at end of input becomes the
//! trailing comment block.

use crate::error::{PfError, Result};
use crate::model::{TableEntry, HEADER_KEY, TRAILING_KEY};
use crate::table::Table;

#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Entry { key: &'a str, value: &'a str },
    /// A key with no value on the same line; the value may still follow
    /// on a whitespace-indented continuation line.
    KeyOnly { key: &'a str },
    Deleted { key: &'a str, value: &'a str },
    SysComment,
    Comment { text: &'a str },
    Empty,
    Error,
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    // ENTRY / KeyOnly: the key run must start the line itself.
    if line
        .chars()
        .next()
        .is_some_and(|c| !c.is_whitespace() && c != '#')
    {
        let mut tokens = line.split_whitespace();
        let key = tokens.next().unwrap_or_default();
        return match (tokens.next(), tokens.next()) {
            (Some(value), None) => LineKind::Entry { key, value },
            (None, _) => LineKind::KeyOnly { key },
            (Some(_), Some(_)) => LineKind::Error,
        };
    }

    if let Some(rest) = trimmed.strip_prefix("#--") {
        if rest.starts_with(|c: char| c.is_whitespace()) {
            let mut tokens = rest.split_whitespace();
            if let (Some(key), Some(value), None) = (tokens.next(), tokens.next(), tokens.next()) {
                return LineKind::Deleted { key, value };
            }
        }
        // Malformed #-- lines fall through to the comment alternative.
    }

    if trimmed.starts_with("#==") {
        return LineKind::SysComment;
    }

    if let Some(rest) = trimmed.strip_prefix('#') {
        return LineKind::Comment { text: rest.trim() };
    }

    if trimmed.is_empty() {
        return LineKind::Empty;
    }

    LineKind::Error
}

/// Parses table text into a fresh mapping. All-or-nothing: the first
/// unclassifiable line aborts with [`PfError::Syntax`].
pub fn parse(data: &str) -> Result<Table> {
    let mut table = Table::new();
    parse_into(data, &mut table)?;
    Ok(table)
}

/// Parses table text into an existing mapping, overwriting entries whose
/// keys reappear.
pub fn parse_into(data: &str, table: &mut Table) -> Result<()> {
    let mut comment: Vec<String> = Vec::new();
    let mut line_no = 0usize;
    let mut seen_entry = table.has_real_entry();
    let mut lines = data.lines();

    while let Some(raw) = lines.next() {
        line_no += 1;
        match classify(raw) {
            LineKind::Entry { key, value } => {
                // A leading comment block was already flushed to the
                // header, so the very first entry starts clean.
                let attached = if table.is_empty() {
                    Vec::new()
                } else {
                    std::mem::take(&mut comment)
                };
                comment.clear();
                table.insert(key, TableEntry::new(value, attached, line_no));
                seen_entry = true;
            }
            LineKind::KeyOnly { key } => {
                // Whitespace-only continuation lines may separate the key
                // from its value; each one still counts a line.
                let value = loop {
                    match lines.next() {
                        Some(next) => {
                            line_no += 1;
                            let candidate = next.trim();
                            if candidate.is_empty() {
                                continue;
                            }
                            let indented =
                                next.starts_with(|c: char| c.is_whitespace());
                            if indented && candidate.split_whitespace().count() == 1 {
                                break candidate;
                            }
                            return Err(PfError::Syntax(raw.to_string()));
                        }
                        None => return Err(PfError::Syntax(raw.to_string())),
                    }
                };
                let attached = if table.is_empty() {
                    Vec::new()
                } else {
                    std::mem::take(&mut comment)
                };
                comment.clear();
                table.insert(key, TableEntry::new(value, attached, line_no));
                seen_entry = true;
            }
            LineKind::Deleted { key, value } => {
                // Only meaningful once real entries exist; decorative
                // `#--` text inside a leading comment block is dropped.
                if seen_entry {
                    let mut entry =
                        TableEntry::new(value, std::mem::take(&mut comment), line_no);
                    entry.deleted = true;
                    table.insert(key, entry);
                }
            }
            LineKind::SysComment => {}
            LineKind::Comment { text } => comment.push(text.to_string()),
            LineKind::Empty => {
                if !seen_entry {
                    if !table.contains(HEADER_KEY) {
                        table.insert(HEADER_KEY, TableEntry::comment_only(Vec::new(), 0));
                    }
                    if !comment.is_empty() {
                        if let Some(header) = table.lookup_mut(HEADER_KEY) {
                            header.comment.append(&mut comment);
                        }
                    }
                }
            }
            LineKind::Error => return Err(PfError::Syntax(raw.to_string())),
        }
    }

    if !comment.is_empty() {
        table.insert(TRAILING_KEY, TableEntry::comment_only(comment, line_no));
    }
    Ok(())
}
