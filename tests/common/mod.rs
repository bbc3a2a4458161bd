//! Common test utilities for dropladder integration tests
//!
//! Writes word lists to temporary files and runs the compiled binary.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// A newline-delimited word list on disk
pub fn word_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp dictionary");
    for line in lines {
        writeln!(file, "{}", line).expect("failed to write temp dictionary");
    }
    file.flush().expect("failed to flush temp dictionary");
    file
}

/// Run `dropladder` with the given arguments
pub fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dropladder"))
        .args(args)
        .output()
        .expect("failed to run dropladder")
}

/// Run `dropladder --dict <path>` plus extra arguments
pub fn run_with_dict(path: &Path, extra: &[&str]) -> Output {
    let path = path.to_str().expect("temp path is UTF-8");
    let mut args = vec!["--dict", path];
    args.extend_from_slice(extra);
    run(&args)
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
