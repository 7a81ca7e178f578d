use assert_cmd::Command;

pub fn sheetcast_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sheetcast").unwrap();
    cmd.env_remove("SHEETCAST_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
