mod common;

use std::fs;

use routemate_lib::{Catalog, CatalogSchema, CatalogSlot, CatalogStatus, Error, FacilityCategory};
use tempfile::tempdir;

use common::{fixture_catalog, fixture_path};

const HEADER: &str = "id,ident,type,name,latitude_deg,longitude_deg,iso_country,iata_code\n";

#[test]
fn fixture_keeps_only_large_and_medium_airports_with_coordinates() {
    let catalog = fixture_catalog();

    let ids: Vec<&str> = catalog.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "3622", "3697", "3631", "3643", "2434", "2429", "26434", "26555", "27145", "990003"
        ]
    );

    let report = catalog.report();
    assert_eq!(report.accepted, 10);
    assert_eq!(report.skipped_category, 4);
    assert_eq!(report.skipped_coordinates, 2);
    assert_eq!(report.rows_seen(), 16);
    assert_eq!(catalog.source_path(), Some(fixture_path().as_path()));
}

#[test]
fn every_record_satisfies_the_inclusion_policy() {
    let catalog = fixture_catalog();
    for facility in catalog.iter() {
        assert!(matches!(
            facility.category,
            FacilityCategory::LargeAirport | FacilityCategory::MediumAirport
        ));
        assert!(facility.latitude.is_finite());
        assert!(facility.longitude.is_finite());
    }
}

#[test]
fn records_carry_descriptive_fields() {
    let catalog = fixture_catalog();
    let jfk = catalog.get(0).expect("first record");

    assert_eq!(jfk.name, "John F Kennedy International Airport");
    assert_eq!(jfk.short_code.as_deref(), Some("KJFK"));
    assert_eq!(jfk.country_code, "US");
    assert_eq!(jfk.category, FacilityCategory::LargeAirport);
    assert!((jfk.latitude - 40.639447).abs() < 1e-9);

    let fallback = catalog.iter().find(|f| f.id == "990003").expect("fallback row");
    assert_eq!(fallback.short_code.as_deref(), Some("ZZF"));
}

#[test]
fn heliport_row_does_not_change_catalog_size() {
    let base = format!("{HEADER}1,KAAA,large_airport,Alpha,10.0,10.0,US,AAA\n");
    let with_heliport = format!("{base}2,HHHH,heliport,Pad,10.5,10.5,US,\n");

    let without = Catalog::from_reader(CatalogSchema::airports(), base.as_bytes()).unwrap();
    let with = Catalog::from_reader(CatalogSchema::airports(), with_heliport.as_bytes()).unwrap();

    assert_eq!(without.len(), 1);
    assert_eq!(with.len(), 1);
    assert_eq!(with.report().skipped_category, 1);
}

#[test]
fn non_numeric_latitude_is_excluded() {
    let csv = format!("{HEADER}1,KAAA,large_airport,Alpha,N/A,10.0,US,AAA\n");
    let catalog = Catalog::from_reader(CatalogSchema::airports(), csv.as_bytes()).unwrap();

    assert!(catalog.is_empty());
    assert_eq!(catalog.report().skipped_coordinates, 1);
}

#[test]
fn short_rows_are_tolerated() {
    let csv = format!("{HEADER}1,KAAA,medium_airport,Alpha,1.5,2.5\n");
    let catalog = Catalog::from_reader(CatalogSchema::airports(), csv.as_bytes()).unwrap();

    let record = catalog.get(0).expect("row kept");
    assert_eq!(record.country_code, "");
    assert_eq!(record.short_code.as_deref(), Some("KAAA"));
}

#[test]
fn missing_file_is_reported_as_dataset_not_found() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("airports.csv");

    let err = Catalog::from_path(CatalogSchema::airports(), &path).unwrap_err();
    match err {
        Error::DatasetNotFound { path: missing } => assert_eq!(missing, path),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn missing_file_leaves_slot_failed() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("airports.csv");

    let slot = CatalogSlot::new();
    let status = slot.load_with(|| Catalog::from_path(CatalogSchema::airports(), &path));

    assert!(matches!(status, CatalogStatus::Failed { .. }));
    assert!(slot.catalog().is_none());
}

#[test]
fn dataset_written_to_disk_loads_into_ready_slot() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("airports.csv");
    fs::write(
        &path,
        format!("{HEADER}1,KAAA,large_airport,Alpha,10.0,10.0,US,AAA\n"),
    )
    .expect("write dataset");

    let slot = CatalogSlot::new();
    let status = slot.load_with(|| Catalog::from_path(CatalogSchema::airports(), &path));

    assert_eq!(status, CatalogStatus::Ready { facilities: 1 });
}
