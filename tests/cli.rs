//! Tests for the `wasm-gen` CLI itself.
//!
//! Each test writes a JSON node list into a temporary directory, runs the
//! built binary on it and inspects what it wrote.

use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn wasm_gen(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wasm-gen"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to spawn wasm-gen")
}

fn write_input(dir: &TempDir, json: &str) {
    std::fs::write(dir.path().join("nodes.json"), json).unwrap();
}

#[test]
fn encode_to_hex() {
    let dir = TempDir::new().unwrap();
    write_input(
        &dir,
        r#"[
            {"type": "CallInstruction", "index": 5},
            {"type": "ModuleExport", "name": "f", "descr": {"type": "Func", "id": 0}}
        ]"#,
    );

    let output = wasm_gen(&["encode", "nodes.json", "--hex"], dir.path());
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "100501660000\n");
}

#[test]
fn encode_module_to_file() {
    let dir = TempDir::new().unwrap();
    write_input(
        &dir,
        r#"[
            {"type": "SectionMetadata", "section": "import", "size": 13, "vectorOfSize": 1},
            {"type": "ModuleImport", "module": "env", "name": "mem",
             "descr": {"type": "Memory", "limits": {"min": 1, "max": 2}}}
        ]"#,
    );

    let output = wasm_gen(
        &["encode", "nodes.json", "--module-header", "-o", "out.wasm"],
        dir.path(),
    );
    assert!(output.status.success(), "{output:?}");

    let bytes = std::fs::read(dir.path().join("out.wasm")).unwrap();
    assert_eq!(
        bytes,
        [
            0x00, 0x61, 0x73, 0x6d, 0x01, 0x00, 0x00, 0x00, // preamble
            0x02, 0x0d, 0x01, // import section header
            0x03, b'e', b'n', b'v', 0x03, b'm', b'e', b'm', 0x02, 0x01, 0x01, 0x02,
        ]
    );
}

#[test]
fn failed_node_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    write_input(
        &dir,
        r#"[
            {"type": "CallInstruction", "index": 0},
            {"type": "SectionMetadata", "section": "start", "size": 1, "vectorOfSize": 0}
        ]"#,
    );

    let output = wasm_gen(&["encode", "nodes.json", "-o", "out.bin"], dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to encode node 1"), "{stderr}");
    assert!(
        stderr.contains("unsupported section encoding of type start"),
        "{stderr}"
    );
    assert!(!dir.path().join("out.bin").exists());
}

#[test]
fn unresolved_identifier_is_reported() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, r#"[{"type": "CallInstruction", "index": "$main"}]"#);

    let output = wasm_gen(&["encode", "nodes.json"], dir.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unresolved index in emission: $main"), "{stderr}");
}

#[test]
fn header_subcommand() {
    let dir = TempDir::new().unwrap();
    let output = wasm_gen(&["header", "--hex", "--version-byte", "13"], dir.path());
    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "0061736d0d000000\n");
}
