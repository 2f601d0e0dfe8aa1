//! Business logic for alias management.
//!
//! Commands operate on the [`TableStore`](crate::table::store::TableStore)
//! and return structured [`CmdResult`] values. They never print and never
//! touch stdout/stderr; rendering is the CLI's job.

pub mod add;
pub mod delete;
pub mod list;
pub mod save;

/// Logical names of the tables the alias commands work on. The config
/// file maps them to actual files.
pub const VIRTUAL_ALIAS: &str = "virtual-alias";
pub const SENDER_LOGIN_MAPS: &str = "sender-login-maps";
pub const MAILBOX_USERS: &str = "virtual-mailbox-users";

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Preformatted table or raw serialization to print verbatim.
    pub listing: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listing(mut self, listing: String) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use crate::config::{Config, FileConfig};
    use crate::table::store::TableStore;
    use std::fs;
    use std::path::Path;

    /// Builds a store over `dir` with empty alias tables and the given
    /// users present in `virtual-mailbox-users`.
    pub(crate) fn store_with_users(dir: &Path, users: &[&str]) -> TableStore {
        fs::write(dir.join("virtual-alias"), "\n").unwrap();
        fs::write(dir.join("sender-login-maps"), "\n").unwrap();
        let user_lines: String = users
            .iter()
            .map(|u| format!("{}\t{}\n", u, u))
            .collect();
        let content = if user_lines.is_empty() {
            "\n".to_string()
        } else {
            user_lines
        };
        fs::write(dir.join("virtual-mailbox-users"), content).unwrap();

        let config_text = format!(
            "filesystem:\n    files:\n        {}: virtual-alias\n        {}: sender-login-maps\n        {}: virtual-mailbox-users\n    pathes:\n        default: {}\n",
            VIRTUAL_ALIAS,
            SENDER_LOGIN_MAPS,
            MAILBOX_USERS,
            dir.display()
        );
        let config = Config::from_yaml_str(&config_text).unwrap();
        TableStore::new(FileConfig::new(&config).unwrap())
    }
}
