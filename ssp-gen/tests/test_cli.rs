use std::{
    fs,
    path::{Path, PathBuf},
    process::Output,
};

use assert_cmd::Command;
use tempfile::TempDir;

const GENERATION_TIME: &str = "2024-05-17T08:30:00Z";

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/aircraft.json")
}

fn ssp_gen(dir: &Path, args: &[&str]) -> Output {
    Command::cargo_bin("ssp-gen")
        .expect("ssp-gen binary")
        .current_dir(dir)
        .env("RUST_LOG", "warn")
        .arg("generate")
        .args(args)
        .arg("--architecture")
        .arg(fixture())
        .arg("--generation-time")
        .arg(GENERATION_TIME)
        .output()
        .expect("run ssp-gen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn generate_ssd_default_path() {
    let temp = TempDir::new().expect("temp dir");
    let output = ssp_gen(temp.path(), &["ssd", "--composition", "AircraftComposition"]);
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));

    let path = Path::new("generated").join("SystemStructure.ssd");
    assert_eq!(stdout(&output).trim(), format!("SSD written to {}", path.display()));

    let xml = fs::read_to_string(temp.path().join(&path)).expect("read ssd");
    assert!(xml.contains(r#"name="AircraftComposition""#));
    assert!(xml.contains(r#"generationDateAndTime="2024-05-17T08:30:00Z""#));
    assert!(xml.contains(r#"source="resources/Autopilot.fmu""#));
}

#[test]
fn generate_ssv_and_fmi() {
    let temp = TempDir::new().expect("temp dir");

    let output = ssp_gen(
        temp.path(),
        &["ssv", "--composition", "AircraftComposition", "--output", "out/defaults.ssv"],
    );
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).starts_with("Wrote "));
    let xml = fs::read_to_string(temp.path().join("out/defaults.ssv")).expect("read ssv");
    assert!(xml.contains(r#"name="nav.waypointX_km[1]""#));
    assert!(!xml.contains("autopilot.trim"));

    let output = ssp_gen(
        temp.path(),
        &["fmi", "--composition", "AircraftComposition", "--output-dir", "mds"],
    );
    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(stdout(&output).lines().count(), 3);
    for definition in ["NavigationComputer", "Autopilot", "Engine"] {
        let path = temp
            .path()
            .join("mds")
            .join(definition)
            .join("modelDescription.xml");
        assert!(path.exists(), "missing {}", path.display());
    }
}

#[test]
fn generate_all_is_reproducible() {
    let first = TempDir::new().expect("temp dir");
    let second = TempDir::new().expect("temp dir");
    for dir in [&first, &second] {
        let output = ssp_gen(dir.path(), &["all", "--composition", "AircraftComposition"]);
        assert!(output.status.success(), "stderr:\n{}", stderr(&output));
        assert_eq!(stdout(&output).lines().count(), 5);
    }

    for relative in [
        "generated/SystemStructure.ssd",
        "generated/parameters.ssv",
        "generated/model_descriptions/Engine/modelDescription.xml",
    ] {
        assert_eq!(
            fs::read(first.path().join(relative)).expect("first"),
            fs::read(second.path().join(relative)).expect("second"),
            "{relative} differs between runs"
        );
    }
}

#[test]
fn composition_must_be_selected() {
    let temp = TempDir::new().expect("temp dir");
    let output = ssp_gen(temp.path(), &["ssd"]);
    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("[error] "));
    assert!(stderr(&output).contains("--composition"));
}

#[test]
fn mismatched_ports_write_nothing() {
    let temp = TempDir::new().expect("temp dir");
    let output = ssp_gen(temp.path(), &["ssd", "--composition", "Bench"]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains(
            "Port definitions of autopilot.nav_in (NavBus) and engine.thrust_in (ThrustCommand) differ"
        ),
        "stderr:\n{}",
        stderr(&output)
    );
    assert!(!temp.path().join("generated").exists());
}

#[test]
fn empty_composition_has_no_components() {
    let temp = TempDir::new().expect("temp dir");
    let output = ssp_gen(temp.path(), &["fmi", "--composition", "Empty"]);
    assert!(!output.status.success());
    assert_eq!(
        stderr(&output).trim(),
        "[error] No components matched the provided criteria."
    );
}
