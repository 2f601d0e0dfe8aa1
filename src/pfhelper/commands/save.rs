use std::fs;

use crate::commands::{CmdMessage, CmdResult, SENDER_LOGIN_MAPS, VIRTUAL_ALIAS};
use crate::error::Result;
use crate::postmap;
use crate::table::store::TableStore;
use crate::table::SerializeOptions;

/// Writes both alias tables back to disk and recompiles their maps.
///
/// The postmap command is checked up front: if it cannot be found,
/// nothing is written.
pub fn run(store: &mut TableStore, postmap_cmd: &str) -> Result<CmdResult> {
    postmap::check_command(postmap_cmd)?;

    let opts = SerializeOptions::default();
    for name in [VIRTUAL_ALIAS, SENDER_LOGIN_MAPS] {
        let text = store.open(name)?.serialize(opts);
        let path = store.path(name)?.to_path_buf();
        fs::write(&path, text)?;
        postmap::run_postmap(postmap_cmd, &path)?;
    }

    Ok(CmdResult::default().with_message(CmdMessage::success("Successfully saved.")))
}
