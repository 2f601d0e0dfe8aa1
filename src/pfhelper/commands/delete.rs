use crate::commands::{CmdMessage, CmdResult, SENDER_LOGIN_MAPS, VIRTUAL_ALIAS};
use crate::error::Result;
use crate::table::store::TableStore;

/// Deletes an alias from both alias tables. With `comment_out` the
/// entries are soft-deleted and stay in the files as `#-- ` records.
pub fn run(store: &mut TableStore, alias: &str, comment_out: bool) -> Result<CmdResult> {
    let mut found = false;
    for table in [VIRTUAL_ALIAS, SENDER_LOGIN_MAPS] {
        let table = store.open(table)?;
        if table.contains(alias) {
            table.del_entry(alias, comment_out);
            found = true;
        }
    }

    let message = if !found {
        CmdMessage::warning(format!("No alias {} found.", alias))
    } else if comment_out {
        CmdMessage::success(format!("Commented out alias {}.", alias))
    } else {
        CmdMessage::success(format!("Deleted alias {}.", alias))
    };
    Ok(CmdResult::default().with_message(message))
}

/// Deletes every alias pointing at the given user, in both tables.
pub fn run_user(store: &mut TableStore, user: &str, comment_out: bool) -> Result<CmdResult> {
    let mut removed = 0usize;
    for table in [VIRTUAL_ALIAS, SENDER_LOGIN_MAPS] {
        let table = store.open(table)?;
        let aliases: Vec<String> = table
            .real_entries()
            .filter(|(_, e)| e.value.as_deref() == Some(user))
            .map(|(k, _)| k.to_string())
            .collect();
        removed += aliases.len();
        for alias in aliases {
            table.del_entry(&alias, comment_out);
        }
    }

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Removed {} alias entries for {}.",
        removed, user
    ))))
}
