//! Running the `dicom-dump` binary.
use std::path::PathBuf;
use std::process::{Command, Output};

fn dump(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dicom-dump"))
        .args(args)
        .output()
        .unwrap()
}

fn write_temp(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn print_single_tag() {
    let path = write_temp("modality.dcm", b"\x08\x00\x60\x00CS\x02\x00CT");
    let out = dump(&["--tag", "Modality", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "Modality: CT\n");
}

#[test]
fn errors_are_logged_to_stderr() {
    let out = dump(&["this-file-does-not-exist.dcm"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ERROR"), "{}", stderr);
    assert!(stderr.contains("Could not read file"), "{}", stderr);

    // truncated value
    let path = write_temp("truncated.dcm", b"\x08\x00\x60\x00CS\x04\x00CT");
    let out = dump(&["--tag", "Modality", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("ERROR"));
}
