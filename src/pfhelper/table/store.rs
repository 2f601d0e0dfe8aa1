//! Per-path table cache.
//!
//! Tables are addressed by their logical name and resolved to a file
//! through [`FileConfig`]. The file is read and parsed on first access;
//! afterwards every open of the same resolved path hands out the one
//! cached [`Table`], so edits made through one name are visible through
//! any other name mapping to the same file.
//!
//! There is no locking: concurrent processes editing the same file can
//! race. The tool is meant for interactive, human-supervised use.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FileConfig;
use crate::error::{PfError, Result};
use crate::table::{parser, Table};

pub struct TableStore {
    files: FileConfig,
    tables: HashMap<PathBuf, Table>,
}

impl TableStore {
    pub fn new(files: FileConfig) -> Self {
        Self {
            files,
            tables: HashMap::new(),
        }
    }

    /// Resolved file path for a logical table name. A name the config
    /// does not map is a fatal configuration error.
    pub fn path(&self, name: &str) -> Result<&Path> {
        self.files.get(name).ok_or_else(|| {
            PfError::Config(format!("No configuration entry for table '{}'", name))
        })
    }

    /// The live mapping for a table, parsing its file on first access.
    pub fn open(&mut self, name: &str) -> Result<&mut Table> {
        let path = self.path(name)?.to_path_buf();
        match self.tables.entry(path) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => {
                let text = fs::read_to_string(slot.key())?;
                let table = parser::parse(&text)?;
                Ok(slot.insert(table))
            }
        }
    }
}
