use std::process::Command;
use vergen::EmitBuilder;

fn main() {
    let is_git_available = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    // Outside a checkout only the timestamp is emitted; the version handler
    // renders the missing commit as "unknown".
    let mut builder = EmitBuilder::builder();
    builder.build_timestamp();
    if is_git_available {
        builder.git_sha(true);
    }

    builder.emit().expect("Unable to generate build metadata");
}
