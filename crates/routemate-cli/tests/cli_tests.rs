use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

fn fixture_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/airports_sample.csv")
        .canonicalize()
        .expect("fixture dataset present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("routemate");
    cmd.env_remove("ROUTEMATE_AIRPORTS_PATH")
        .env("RUST_LOG", "error");
    cmd
}

fn with_fixture() -> Command {
    let mut cmd = cli();
    cmd.arg("--dataset").arg(fixture_csv());
    cmd
}

#[test]
fn nearest_from_times_square_is_laguardia() {
    with_fixture()
        .args(["nearest", "--lat", "40.7580", "--lon", "-73.9855"])
        .assert()
        .success()
        .stdout(contains("Nearest airport: La Guardia Airport (KLGA)"))
        .stdout(contains("Distance: 9.75 km"));
}

#[test]
fn nearest_json_output() {
    let output = with_fixture()
        .args(["nearest", "--lat", "51.5074", "--lng", "-0.1278", "--format", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["airport"]["short_code"], "EGLL");
    assert_eq!(value["airport"]["distance_km"], 23.49);
}

#[test]
fn nearest_reads_dataset_from_environment() {
    cli()
        .env("ROUTEMATE_AIRPORTS_PATH", fixture_csv())
        .args(["nearest", "--lat", "41.07", "--lon", "-73.70"])
        .assert()
        .success()
        .stdout(contains("(KHPN)"));
}

#[test]
fn nearest_rejects_bad_coordinates() {
    with_fixture()
        .args(["nearest", "--lat", "north", "--lon", "-73.9"])
        .assert()
        .failure()
        .stderr(contains("invalid lat: 'north' is not a number"));
}

#[test]
fn nearest_reports_missing_dataset() {
    let temp = tempdir().expect("create temp dir");
    cli()
        .arg("--dataset")
        .arg(temp.path().join("absent.csv"))
        .args(["nearest", "--lat", "0", "--lon", "0"])
        .assert()
        .failure()
        .stderr(contains("failed to load airport dataset"))
        .stderr(contains("absent.csv"));
}

#[test]
fn nearest_on_filtered_out_dataset_is_not_found() {
    let temp = tempdir().expect("create temp dir");
    let path = temp.path().join("heliports.csv");
    fs::write(
        &path,
        "id,ident,type,name,latitude_deg,longitude_deg,iso_country\n\
         1,H1,heliport,Pad,40.0,-73.0,US\n",
    )
    .expect("write dataset");

    cli()
        .arg("--dataset")
        .arg(&path)
        .args(["nearest", "--lat", "40.0", "--lon", "-73.0"])
        .assert()
        .failure()
        .stderr(contains("no facility found"));
}

#[test]
fn itinerary_manhattan_to_london() {
    with_fixture()
        .args(["itinerary", "--from", "40.7580,-73.9855", "--to", "51.5074,-0.1278"])
        .assert()
        .success()
        .stdout(contains("1. ground"))
        .stdout(contains("2. air"))
        .stdout(contains("3. ground"))
        .stdout(contains(
            "Fly from La Guardia Airport (KLGA) to London Heathrow Airport (EGLL)",
        ));
}

#[test]
fn itinerary_southern_hemisphere_json() {
    let output = with_fixture()
        .args([
            "itinerary",
            "--from",
            "-33.87,151.21",
            "--to",
            "19.07,72.88",
            "--format",
            "json",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["departure"]["short_code"], "YSSY");
    assert_eq!(value["arrival"]["short_code"], "VABB");
    assert_eq!(value["legs"][1]["mode"], "air");
}

#[test]
fn itinerary_rejects_malformed_point() {
    with_fixture()
        .args(["itinerary", "--from", "40.7580", "--to", "51.5074,-0.1278"])
        .assert()
        .failure()
        .stderr(contains("not a lat,lon pair"))
        .stdout(predicate::str::is_empty());
}
