use crate::types::Catalog;
use eyre::{Result, WrapErr};
use std::io::Write;

/// Serialize a catalog to its JSON transport form, a list of objects with
/// camelCase field names.
pub fn to_json(catalog: &Catalog) -> Result<String> {
    serde_json::to_string_pretty(catalog).wrap_err("cannot serialize catalog to JSON")
}

/// Parse a catalog back from its JSON transport form. A record missing any
/// of the four fields is an error.
pub fn from_json(json: &str) -> Result<Catalog> {
    serde_json::from_str(json).wrap_err("cannot parse catalog from JSON")
}

/// Write a catalog as CSV, a header row followed by one row per record.
pub fn to_csv<W: Write>(catalog: &Catalog, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for project in catalog.iter() {
        writer
            .serialize(project)
            .wrap_err("cannot write catalog record as CSV")?;
    }
    writer.flush().wrap_err("cannot flush CSV output")
}

#[test]
fn test_json_round_trip() {
    let catalog = crate::data::catalog();
    let json = to_json(catalog).unwrap();
    let parsed = from_json(&json).unwrap();
    assert_eq!(&parsed, catalog);
}

#[test]
fn test_json_rejects_missing_field() {
    let json = r#"[{"title": "dummy", "description": "d", "imgSrc": "/static/images/dummy.png"}]"#;
    assert!(from_json(json).is_err());
}

#[test]
fn test_csv_shape() {
    let catalog = crate::data::catalog();
    let mut output = Vec::new();
    to_csv(catalog, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("title,description,imgSrc,href"));
    assert_eq!(lines.count(), catalog.len());
}
