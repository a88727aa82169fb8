//! Facility catalog ingestion.
//!
//! A catalog is built once from a row-oriented dataset and never changes
//! afterwards. Rows outside the schema's category policy, or whose
//! coordinates do not parse as finite numbers, are skipped and counted; only
//! a failure of the row source itself aborts the load.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::facility::{CatalogSchema, FacilityKind, FacilityRecord};
use crate::geo::GeoPoint;

/// One dataset row: column name to raw cell text.
pub type RawRow = HashMap<String, String>;

/// Row counts gathered while building a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub accepted: usize,
    pub skipped_category: usize,
    pub skipped_coordinates: usize,
}

impl LoadReport {
    /// Total number of rows read from the source.
    pub fn rows_seen(&self) -> usize {
        self.accepted + self.skipped_category + self.skipped_coordinates
    }
}

enum RowVerdict {
    Accepted(FacilityRecord),
    WrongCategory,
    BadCoordinates,
}

/// Ordered, validated, read-only collection of facilities.
#[derive(Debug, Clone)]
pub struct Catalog {
    schema: CatalogSchema,
    facilities: Vec<FacilityRecord>,
    report: LoadReport,
    source: Option<PathBuf>,
}

impl Catalog {
    /// Build a catalog from a stream of rows.
    ///
    /// Rows are appended in source order, which is also the tie-break order
    /// used by nearest-facility queries. The first `Err` from `rows` aborts
    /// the load and is returned unchanged.
    pub fn from_rows<I>(schema: CatalogSchema, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<RawRow>>,
    {
        let mut facilities = Vec::new();
        let mut report = LoadReport::default();

        for row in rows {
            let row = row?;
            match classify_row(&schema, &row) {
                RowVerdict::Accepted(record) => {
                    report.accepted += 1;
                    facilities.push(record);
                }
                RowVerdict::WrongCategory => report.skipped_category += 1,
                RowVerdict::BadCoordinates => {
                    debug!(
                        id = row.get(schema.id_column).map(String::as_str).unwrap_or(""),
                        "skipping row with unusable coordinates"
                    );
                    report.skipped_coordinates += 1;
                }
            }
        }

        info!(
            kind = %schema.kind,
            accepted = report.accepted,
            skipped_category = report.skipped_category,
            skipped_coordinates = report.skipped_coordinates,
            "facility catalog built"
        );

        Ok(Self {
            schema,
            facilities,
            report,
            source: None,
        })
    }

    /// Build a catalog from CSV text with a header row.
    ///
    /// Records may be shorter or longer than the header; missing cells are
    /// treated as absent columns. Invalid UTF-8 inside a cell is replaced
    /// rather than failing the load.
    pub fn from_reader<R: Read>(schema: CatalogSchema, reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .byte_headers()?
            .iter()
            .map(|h| String::from_utf8_lossy(h).into_owned())
            .collect();

        let rows = csv_reader
            .into_byte_records()
            .map(move |result| -> Result<RawRow> {
                let record = result?;
                Ok(headers
                    .iter()
                    .cloned()
                    .zip(record.iter().map(|f| String::from_utf8_lossy(f).into_owned()))
                    .collect())
            });

        Self::from_rows(schema, rows)
    }

    /// Build a catalog from a CSV file on disk.
    pub fn from_path(schema: CatalogSchema, path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }

        info!(path = %path.display(), kind = %schema.kind, "loading facility dataset");
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(schema, file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Facility kind held by this catalog.
    pub fn kind(&self) -> FacilityKind {
        self.schema.kind
    }

    pub fn schema(&self) -> &CatalogSchema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// Facilities in load order.
    pub fn iter(&self) -> impl Iterator<Item = &FacilityRecord> {
        self.facilities.iter()
    }

    pub fn get(&self, index: usize) -> Option<&FacilityRecord> {
        self.facilities.get(index)
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Closest facility to `point` and its unrounded distance in kilometres.
    ///
    /// Linear scan; on equal distances the facility loaded first wins.
    /// Returns `None` only for an empty catalog.
    pub fn nearest(&self, point: GeoPoint) -> Option<(&FacilityRecord, f64)> {
        let mut best: Option<(&FacilityRecord, f64)> = None;

        for facility in &self.facilities {
            let distance = point.distance_km(facility.position());
            match best {
                Some((_, min)) if distance >= min => {}
                _ => best = Some((facility, distance)),
            }
        }

        best
    }
}

fn classify_row(schema: &CatalogSchema, row: &RawRow) -> RowVerdict {
    let Some(category) = schema.accepts(cell(row, schema.category_column)) else {
        return RowVerdict::WrongCategory;
    };

    let (Some(latitude), Some(longitude)) = (
        parse_finite(cell(row, schema.latitude_column)),
        parse_finite(cell(row, schema.longitude_column)),
    ) else {
        return RowVerdict::BadCoordinates;
    };

    let short_code = schema
        .short_code_columns
        .iter()
        .map(|column| cell(row, column))
        .find(|value| !value.is_empty())
        .map(str::to_string);

    RowVerdict::Accepted(FacilityRecord {
        id: cell(row, schema.id_column).to_string(),
        name: cell(row, schema.name_column).to_string(),
        short_code,
        category,
        country_code: cell(row, schema.country_column).to_string(),
        latitude,
        longitude,
    })
}

fn cell<'a>(row: &'a RawRow, column: &str) -> &'a str {
    row.get(column).map(|v| v.trim()).unwrap_or("")
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
