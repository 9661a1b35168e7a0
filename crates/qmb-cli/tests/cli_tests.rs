//! End-to-end CLI tests: build a tiny `.qmb` binary on disk, then drive the
//! compiled `qmb` binary against it the way a user would.

use std::process::Command;

use qmb_container::{self, Container};
use qmb_ir::{Circuit, Object, PrimitiveTag};
use qmb_value::Value;

fn qubit() -> Object {
    Object::new(vec![2]).unwrap()
}

/// Write a minimal `.qmb` binary (a single `Id` entrypoint on a qubit) to a
/// temp file and return its path.
fn write_identity_binary() -> tempfile::NamedTempFile {
    let circuit = Circuit::new(qubit(), qubit(), PrimitiveTag::Id, Value::unit(), vec![]);
    let value = circuit.to_value();
    let entrypoint = qmb_value::qgid(&value).unwrap();
    let payload = qmb_value::encode(&value).unwrap();
    let container = Container::new(entrypoint, "identity-demo", "0.1.0", payload);
    let bytes = qmb_container::encode(&container);

    let file = tempfile::Builder::new().suffix(".qmb").tempfile().unwrap();
    std::fs::write(file.path(), &bytes).unwrap();
    file
}

fn qmb_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_qmb"))
}

#[test]
fn info_subcommand_exits_successfully() {
    let output = qmb_cmd().arg("info").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Compose"));
    assert!(stdout.contains("Witness"));
}

#[test]
fn version_subcommand_prints_the_crate_version() {
    let output = qmb_cmd().arg("version").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn inspect_prints_header_fields_for_a_valid_binary() {
    let file = write_identity_binary();
    let output = qmb_cmd().arg("inspect").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("identity-demo"));
    assert!(stdout.contains("0.1.0"));
}

#[test]
fn run_executes_the_entrypoint_with_default_identity_input() {
    let file = write_identity_binary();
    let output = qmb_cmd().arg("run").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // Id on the 4x4 identity: the diagonal entries round-trip as [1, 1, 0, 1].
    assert!(stdout.contains("[1, 1, 0, 1]"));
}

#[test]
fn run_on_a_missing_file_exits_with_failure_and_no_panic() {
    let output = qmb_cmd().arg("run").arg("/nonexistent/path.qmb").output().unwrap();
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error:"));
}

#[test]
fn inspect_on_bad_magic_reports_a_structured_error() {
    let file = tempfile::Builder::new().suffix(".qmb").tempfile().unwrap();
    std::fs::write(file.path(), b"not a qmb file").unwrap();
    let output = qmb_cmd().arg("inspect").arg(file.path()).output().unwrap();
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
}
