//! Invocation of the external Postfix map compiler.

use std::env;
use std::path::Path;
use std::process::Command;
use tracing::info;

use crate::error::{PfError, Result};

/// Verifies the command can be found before any file is written, so a
/// missing `postmap` never leaves half-saved tables behind.
pub fn check_command(cmd: &str) -> Result<()> {
    if find_command(cmd) {
        Ok(())
    } else {
        Err(PfError::Command(format!(
            "Command '{}' couldn't be found. No changes have been written.",
            cmd
        )))
    }
}

/// `PATH` lookup without shelling out. A command given with a directory
/// component is checked as-is.
fn find_command(cmd: &str) -> bool {
    let direct = Path::new(cmd);
    if direct.components().count() > 1 {
        return direct.is_file();
    }
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(cmd).is_file()))
        .unwrap_or(false)
}

/// Runs `postmap <file>` to regenerate the compiled `.db` map.
pub fn run_postmap(postmap: &str, file: &Path) -> Result<()> {
    let output = Command::new(postmap)
        .arg(file)
        .output()
        .map_err(|e| PfError::Command(format!("Failed to run '{}': {}", postmap, e)))?;
    info!("executed: {} {}", postmap, file.display());

    if !output.status.success() {
        let code = output
            .status
            .code()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        return Err(PfError::Command(format!(
            "Return code from {} was {}. Unable to generate {}.db.",
            postmap,
            code,
            file.display()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_command_is_detected() {
        assert!(matches!(
            check_command("definitely-not-a-real-command-xyz"),
            Err(PfError::Command(_))
        ));
    }

    #[test]
    fn present_command_passes() {
        check_command("ls").unwrap();
    }

    #[test]
    fn explicit_path_is_checked_directly() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("postmap");
        std::fs::write(&file, "").unwrap();

        check_command(file.to_str().unwrap()).unwrap();
        assert!(check_command(dir.path().join("missing").to_str().unwrap()).is_err());
    }

    #[test]
    fn failing_command_reports_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("map");
        // `false` ignores its arguments and exits 1.
        let err = run_postmap("false", &file).unwrap_err();
        match err {
            PfError::Command(msg) => assert!(msg.contains("Return code")),
            other => panic!("expected command error, got {other:?}"),
        }
    }

    #[test]
    fn succeeding_command_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("map");
        run_postmap("true", &file).unwrap();
    }
}
