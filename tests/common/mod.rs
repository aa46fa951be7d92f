use assert_cmd::Command;

pub fn jtimeline_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jtimeline").unwrap();
    cmd.env_remove("JTIMELINE_DIR");
    cmd.env_remove("JTIMELINE_CONFIG");
    cmd.env_remove("JTIMELINE_LOG");
    cmd
}
