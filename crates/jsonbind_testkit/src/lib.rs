//! Shared test helpers and the sample model for workspace crates.

use std::path::{Path, PathBuf};

/// Sample Product/Order/Customer model with registered descriptors.
pub mod model;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Read a fixture document as text.
pub fn read_fixture(name: &str) -> std::io::Result<String> {
	std::fs::read_to_string(fixture_path(name))
}

/// Parse `text` with a strict JSON parser, panicking with the text on failure.
pub fn assert_strict_json(text: &str) -> serde_json::Value {
	match serde_json::from_str(text) {
		Ok(value) => value,
		Err(err) => panic!("not valid JSON ({err}):\n{text}"),
	}
}
