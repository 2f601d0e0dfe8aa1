//! Thin facade over the command layer.
//!
//! The single entry point for every operation, regardless of the UI in
//! front of it. It dispatches to `commands/*`, returns structured
//! [`CmdResult`] values and never prints or exits.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::table::store::TableStore;

pub struct PfApi {
    store: TableStore,
    postmap: String,
}

impl PfApi {
    pub fn new(store: TableStore, postmap: String) -> Self {
        Self { store, postmap }
    }

    pub fn add_alias(&mut self, alias: &str, user: &str, comment: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, alias, user, comment)
    }

    pub fn delete_alias(&mut self, alias: &str, comment_out: bool) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, alias, comment_out)
    }

    pub fn delete_user_aliases(&mut self, user: &str, comment_out: bool) -> Result<CmdResult> {
        commands::delete::run_user(&mut self.store, user, comment_out)
    }

    pub fn list_aliases(&mut self, as_saved: bool) -> Result<CmdResult> {
        if as_saved {
            commands::list::as_saved(&mut self.store)
        } else {
            commands::list::run(&mut self.store)
        }
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&mut self.store, &self.postmap)
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
