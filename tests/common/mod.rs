use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

pub fn range_sums() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_range_sums"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Writes `contents` to a temp file ending in `suffix`; removed on drop.
pub fn batch_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}
