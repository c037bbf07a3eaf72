use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_LOG");
    cmd
}

/// Initialize a journal at `root` and replace its entries with `entries_json`
#[allow(dead_code)]
pub fn init_with_entries(root: &Path, entries_json: &str) {
    moodlog_cmd().arg("init").arg(root).assert().success();
    fs::write(root.join("journal.json"), entries_json).unwrap();
}
