/// Pseudo-key holding the comment block at the top of a table file.
/// Real keys can never start with `#`, so this cannot collide.
pub const HEADER_KEY: &str = "#";

/// Pseudo-key holding a comment block that trails the last real entry.
pub const TRAILING_KEY: &str = "#end";

/// One row of a lookup table plus its metadata.
///
/// `line_no` records the position in parse order and is only used as a
/// stable sort tiebreak. A soft-deleted entry keeps its last known value
/// so it can be restored or audited later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableEntry {
    pub value: Option<String>,
    pub comment: Vec<String>,
    pub line_no: usize,
    pub deleted: bool,
}

impl TableEntry {
    pub fn new(value: impl Into<String>, comment: Vec<String>, line_no: usize) -> Self {
        Self {
            value: Some(value.into()),
            comment,
            line_no,
            deleted: false,
        }
    }

    /// An entry carrying only comments, used for the header and trailing
    /// pseudo-keys.
    pub fn comment_only(comment: Vec<String>, line_no: usize) -> Self {
        Self {
            value: None,
            comment,
            line_no,
            deleted: false,
        }
    }

    /// The value as shown in listings: soft-deleted entries are rendered
    /// with a `# ` prefix. Raw table serialization uses the `#-- ` key
    /// prefix instead, see [`crate::table::serialize`].
    pub fn display_value(&self) -> Option<String> {
        self.value.as_ref().map(|v| {
            if self.deleted {
                format!("# {}", v)
            } else {
                v.clone()
            }
        })
    }
}

/// Whether a key is one of the reserved comment pseudo-keys.
pub fn is_pseudo_key(key: &str) -> bool {
    key == HEADER_KEY || key == TRAILING_KEY
}
