use crate::commands::{CmdResult, SENDER_LOGIN_MAPS, VIRTUAL_ALIAS};
use crate::error::Result;
use crate::model::TableEntry;
use crate::table::store::TableStore;
use crate::table::SerializeOptions;

/// One alias as seen across both tables: `inbox` is its entry in
/// `virtual-alias`, `sender` its entry in `sender-login-maps`. Either can
/// be missing when the tables disagree.
#[derive(Debug, Clone)]
pub struct AliasInfo {
    pub alias: String,
    pub inbox: Option<TableEntry>,
    pub sender: Option<TableEntry>,
}

/// All aliases from both tables, grouped by inbox then sender value.
pub fn alias_list(store: &mut TableStore) -> Result<Vec<AliasInfo>> {
    let mut names: Vec<String> = store
        .open(VIRTUAL_ALIAS)?
        .real_entries()
        .map(|(k, _)| k.to_string())
        .collect();
    let extra: Vec<String> = store
        .open(SENDER_LOGIN_MAPS)?
        .real_entries()
        .map(|(k, _)| k.to_string())
        .collect();
    for name in extra {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    let mut aliases = Vec::with_capacity(names.len());
    for name in names {
        let inbox = store.open(VIRTUAL_ALIAS)?.lookup(&name).cloned();
        let sender = store.open(SENDER_LOGIN_MAPS)?.lookup(&name).cloned();
        aliases.push(AliasInfo {
            alias: name,
            inbox,
            sender,
        });
    }

    let value_of = |e: &Option<TableEntry>| {
        e.as_ref()
            .and_then(|e| e.value.clone())
            .unwrap_or_default()
    };
    aliases.sort_by_key(|a| value_of(&a.sender));
    aliases.sort_by_key(|a| value_of(&a.inbox));
    Ok(aliases)
}

const ALIAS_HEADING: &str = "Alias:";
const INBOX_HEADING: &str = "Inbox:";
const SENDER_HEADING: &str = "Sender:";

/// Tab-stop rounding for the listing columns, stop width 4.
fn column_gap(max_len: usize) -> usize {
    8 - max_len % 4
}

/// Renders the aligned three-column alias listing.
pub fn run(store: &mut TableStore) -> Result<CmdResult> {
    let aliases = alias_list(store)?;

    let mut max_alias = ALIAS_HEADING.len();
    let mut max_inbox = INBOX_HEADING.len();
    let mut max_sender = SENDER_HEADING.len();
    for a in &aliases {
        max_alias = max_alias.max(a.alias.len());
        if let Some(v) = a.inbox.as_ref().and_then(TableEntry::display_value) {
            max_inbox = max_inbox.max(v.len());
        }
        if let Some(v) = a.sender.as_ref().and_then(TableEntry::display_value) {
            max_sender = max_sender.max(v.len());
        }
    }
    let alias_gap = column_gap(max_alias);
    let inbox_gap = column_gap(max_inbox);

    let mut out = Vec::new();
    out.push(format!(
        "{}{}{}{}{}",
        ALIAS_HEADING,
        " ".repeat(alias_gap + max_alias - ALIAS_HEADING.len()),
        INBOX_HEADING,
        " ".repeat(inbox_gap + max_inbox - INBOX_HEADING.len()),
        SENDER_HEADING
    ));
    out.push("-".repeat(max_alias + alias_gap + max_inbox + inbox_gap + max_sender));

    for a in &aliases {
        let inbox = a
            .inbox
            .as_ref()
            .and_then(TableEntry::display_value)
            .unwrap_or_default();
        let sender = a
            .sender
            .as_ref()
            .and_then(TableEntry::display_value)
            .unwrap_or_default();
        let row = format!(
            "{}{}{}{}{}",
            a.alias,
            " ".repeat(alias_gap + max_alias - a.alias.len()),
            inbox,
            " ".repeat(inbox_gap + max_inbox - inbox.len()),
            sender
        );
        out.push(row.trim_end().to_string());
    }
    out.push(String::new());

    Ok(CmdResult::default().with_listing(out.join("\n")))
}

/// The raw canonical serialization of both alias tables, exactly as
/// `--save` would write them.
pub fn as_saved(store: &mut TableStore) -> Result<CmdResult> {
    let opts = SerializeOptions::default();
    let mut out = store.open(VIRTUAL_ALIAS)?.serialize(opts);
    out.push_str(&store.open(SENDER_LOGIN_MAPS)?.serialize(opts));
    Ok(CmdResult::default().with_listing(out))
}
