use crate::commands::{CmdMessage, CmdResult, MAILBOX_USERS, SENDER_LOGIN_MAPS, VIRTUAL_ALIAS};
use crate::error::{PfError, Result};
use crate::model::TableEntry;
use crate::table::store::TableStore;

/// Adds an alias for an existing mailbox user to both alias tables.
///
/// New entries get `line_no = usize::MAX` so they sort after everything
/// the file already contained.
pub fn run(store: &mut TableStore, alias: &str, user: &str, comment: &str) -> Result<CmdResult> {
    if store.open(VIRTUAL_ALIAS)?.contains(alias) {
        return Err(PfError::Api(format!(
            "An alias for {} already exists in '{}'.",
            alias, VIRTUAL_ALIAS
        )));
    }
    if store.open(SENDER_LOGIN_MAPS)?.contains(alias) {
        return Err(PfError::Api(format!(
            "An alias for {} already exists in '{}'.",
            alias, SENDER_LOGIN_MAPS
        )));
    }
    let user_exists = store
        .open(MAILBOX_USERS)?
        .lookup(user)
        .is_some_and(|entry| !entry.deleted);
    if !user_exists {
        return Err(PfError::Api(format!("User '{}' does not exist.", user)));
    }

    let comment_lines: Vec<String> = if comment.is_empty() {
        Vec::new()
    } else {
        comment.split('\n').map(str::to_string).collect()
    };

    let entry = TableEntry::new(user, comment_lines, usize::MAX);
    store.open(VIRTUAL_ALIAS)?.insert(alias, entry.clone());
    store.open(SENDER_LOGIN_MAPS)?.insert(alias, entry);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Added alias {} for {}.",
        alias, user
    ))))
}
