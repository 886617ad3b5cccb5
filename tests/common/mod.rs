use assert_cmd::Command;
use std::path::Path;

pub fn moodjour_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodjour").unwrap();
    cmd.env_remove("MOODJOUR_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized journal at `root`
#[allow(dead_code)]
pub fn journal_cmd(root: &Path) -> Command {
    let mut cmd = moodjour_cmd();
    cmd.current_dir(root);
    cmd
}

#[allow(dead_code)]
pub fn init_journal(root: &Path) {
    moodjour_cmd().arg("init").arg(root).assert().success();
}
