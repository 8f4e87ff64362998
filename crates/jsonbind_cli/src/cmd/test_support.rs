use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

use jsonbind_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static JSONBIND_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_jsonbind(args: &[&str]) -> Output {
	Command::new(jsonbind_bin()).args(args).output().expect("jsonbind command executes")
}

pub(crate) fn run_jsonbind_stdin(args: &[&str], input: &str) -> Output {
	let mut child = Command::new(jsonbind_bin())
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("jsonbind command spawns");
	child
		.stdin
		.take()
		.expect("stdin is piped")
		.write_all(input.as_bytes())
		.expect("stdin accepts input");
	child.wait_with_output().expect("jsonbind command completes")
}

pub(crate) fn run_jsonbind_ok(args: &[&str]) -> String {
	let output = run_jsonbind(args);
	assert!(
		output.status.success(),
		"jsonbind command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

pub(crate) fn run_jsonbind_json(args: &[&str]) -> serde_json::Value {
	let stdout = run_jsonbind_ok(args);
	serde_json::from_str(&stdout).expect("stdout should be valid json")
}

fn jsonbind_bin() -> &'static PathBuf {
	JSONBIND_BIN.get_or_init(resolve_jsonbind_bin)
}

fn resolve_jsonbind_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_jsonbind") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "jsonbind.exe" } else { "jsonbind" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "jsonbind"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build jsonbind binary at {}", bin.display());

	bin
}
