//! Canonical text output for lookup tables.
//!
//! Keys are padded so every value starts at the same column: the longest
//! rendered key is rounded up to the next 8-column tab stop plus one full
//! stop, shorter keys are padded to match. In canonical order entries are
//! grouped by value and each group gets a generated `#==` section header.

use crate::model::{is_pseudo_key, TableEntry, HEADER_KEY, TRAILING_KEY};
use crate::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Keep the original file order instead of grouping by value.
    pub original_order: bool,
    /// Emit `#== Entries for value '...'` group headers (canonical order
    /// only).
    pub print_section_headers: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            original_order: false,
            print_section_headers: true,
        }
    }
}

impl SerializeOptions {
    pub fn original_order() -> Self {
        Self {
            original_order: true,
            print_section_headers: false,
        }
    }
}

/// The key as written to the file: soft-deleted entries carry the `#-- `
/// marker so the line reads as a comment to Postfix itself.
fn rendered_key(key: &str, entry: &TableEntry) -> String {
    if entry.deleted {
        format!("#-- {}", key)
    } else {
        key.to_string()
    }
}

pub fn serialize(table: &Table, opts: SerializeOptions) -> String {
    let mut out: Vec<String> = Vec::new();

    if let Some(header) = table.lookup(HEADER_KEY) {
        for c in &header.comment {
            out.push(format!("# {}", c));
        }
        if !header.comment.is_empty() {
            out.push(String::new());
        }
    }

    let mut entries: Vec<(&str, &TableEntry)> =
        table.iter().filter(|(k, _)| !is_pseudo_key(k)).collect();
    entries.sort_by_key(|(_, e)| e.line_no);
    if !opts.original_order {
        // Stable: groups by value, original position breaks ties.
        entries.sort_by_key(|(_, e)| e.value.as_deref().unwrap_or(""));
    }

    let max_len = entries
        .iter()
        .map(|(k, e)| rendered_key(k, e).len())
        .max()
        .unwrap_or(0);
    // Distance from the tab stop the longest key crosses to the value
    // column, one full stop further.
    let pad = 16 - max_len % 8;

    let mut current_value: Option<&str> = None;
    for (key, entry) in &entries {
        if opts.print_section_headers && !opts.original_order {
            let value = entry.value.as_deref().unwrap_or("");
            if current_value != Some(value) {
                current_value = Some(value);
                if out.last().is_some_and(|l| !l.is_empty()) {
                    out.push(String::new());
                }
                out.push(format!("#== Entries for value '{}'", value));
            }
        }
        for c in &entry.comment {
            out.push(format!("# {}", c));
        }
        if let Some(value) = &entry.value {
            let rkey = rendered_key(key, entry);
            let gap = pad + max_len - rkey.len();
            out.push(format!("{}{}{}", rkey, " ".repeat(gap), value));
        }
    }

    if let Some(trailing) = table.lookup(TRAILING_KEY) {
        for c in &trailing.comment {
            out.push(format!("# {}", c));
        }
    }

    out.push(String::new());
    out.join("\n")
}
