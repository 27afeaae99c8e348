use assert_cmd::Command;

pub fn tally_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env_remove("TALLY_FILE");
    cmd.env_remove("TALLY_LOG");
    cmd
}
