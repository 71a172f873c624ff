//! Shared test utilities for jama-field-sync integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory that logs into a temp directory.
//! - Write config files pointing at a mock server.
//!
//! Invariants / Assumptions:
//! - Config paths passed to the binary are absolute, so the executable's own
//!   directory is never consulted.

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Returns a `jama-field-sync` command that writes its log files under `log_dir`.
pub fn sync_cmd(log_dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("jama-field-sync");

    cmd.arg("--log-dir").arg(log_dir);
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("JAMA_FIELD_SYNC_LOG_DIR");

    cmd
}

/// Write `contents` to `config.ini` inside `dir` and return its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.ini");
    std::fs::write(&path, contents).expect("write config");
    path
}

/// A complete config using basic auth against `url`.
#[allow(dead_code)]
pub fn basic_config(url: &str) -> String {
    format!(
        "[CLIENT_SETTINGS]\n\
         jama_connect_url = {url}/\n\
         oauth = false\n\
         user_id = sync-bot\n\
         user_secret = hunter2\n\
         \n\
         [SCRIPT_SETTINGS]\n\
         filter_id = 97\n\
         item_type = 142\n\
         read_field = doors_id\n\
         write_field = sys_doors_id\n"
    )
}
