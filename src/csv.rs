// src/csv.rs
use std::io::Write;

use indexmap::IndexSet;

use crate::record::{Record, Value};

/* ---------------- Header set ---------------- */

/// Every label across `records`, first-seen order.
pub fn header_set(records: &[Record]) -> Vec<String> {
    let mut headers: IndexSet<&str> = IndexSet::new();
    for record in records {
        headers.extend(record.labels());
    }
    headers.into_iter().map(str::to_string).collect()
}

/* ---------------- Cells ---------------- */

/// Cell encoding:
/// - lists become a JSON array of strings, e.g. `["/a","/b"]`, so the items
///   survive commas, quotes and newlines;
/// - scalars starting with `[` or `"` are written as a JSON string literal
///   (`"[\"/a\"]"`), so they can never be mistaken for a list;
/// - every other scalar is written verbatim.
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Scalar(s) if s.starts_with(['[', '"']) => {
            serde_json::to_string(s).unwrap_or_else(|_| s.clone())
        }
        Value::Scalar(s) => s.clone(),
        Value::Multi(items) => serde_json::to_string(items).unwrap_or_default(),
    }
}

/// Inverse of [`render_cell`]. A JSON string literal reads back as that scalar.
/// Only a JSON array of two or more strings reads back as a list; a list always
/// has at least two items. Anything else is a verbatim scalar.
pub fn parse_cell(cell: &str) -> Value {
    if cell.starts_with('"') {
        if let Ok(text) = serde_json::from_str::<String>(cell) {
            return Value::Scalar(text);
        }
    }
    if cell.starts_with('[') {
        if let Ok(items) = serde_json::from_str::<Vec<String>>(cell) {
            if items.len() >= 2 {
                return Value::Multi(items);
            }
        }
    }
    Value::Scalar(s!(cell))
}

/// One output row for `record`, aligned to `headers`. Missing labels → empty cell.
pub fn build_row(record: &Record, headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|h| record.get(h).map(render_cell).unwrap_or_default())
        .collect()
}

/* ---------------- Writing ---------------- */

/// Header row, then one row per record. Quoting is left to the `csv` crate.
pub fn write_records<W: Write>(w: W, records: &[Record], delimiter: u8) -> Result<(), csv::Error> {
    let headers = header_set(records);
    let mut out = csv::WriterBuilder::new().delimiter(delimiter).from_writer(w);

    // Nothing scraped: no columns, so no header row either.
    if headers.is_empty() {
        out.flush()?;
        return Ok(());
    }
    out.write_record(&headers)?;
    for record in records {
        out.write_record(build_row(record, &headers))?;
    }
    out.flush()?;
    Ok(())
}

pub fn records_to_string(records: &[Record], delimiter: u8) -> Result<String, csv::Error> {
    let mut buf: Vec<u8> = Vec::new();
    write_records(&mut buf, records, delimiter)?;

    match String::from_utf8(buf) {
        Ok(s) => Ok(s),
        Err(e) => Ok(String::from_utf8_lossy(&e.into_bytes()).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, fields: &[(&str, &str)]) -> Record {
        let mut r = Record::new(name);
        for (k, v) in fields {
            r.insert(k, s!(*v));
        }
        r
    }

    #[test]
    fn header_set_is_ordered_union() {
        let records = vec![
            record("A", &[("City", "Berlin"), ("Phone", "1")]),
            record("B", &[("Country", "NL"), ("City", "Leiden")]),
            record("C", &[("Phone", "2"), ("Email", "c@x")]),
        ];
        assert_eq!(header_set(&records), ["Institution", "City", "Phone", "Country", "Email"]);
        assert!(header_set(&[]).is_empty());
    }

    #[test]
    fn missing_labels_render_empty() {
        let records = vec![
            record("A", &[("City", "Berlin")]),
            record("B", &[("Country", "NL")]),
        ];
        let out = records_to_string(&records, b',').unwrap();
        assert_eq!(out, "Institution,City,Country\nA,Berlin,\nB,,NL\n");
    }

    #[test]
    fn list_cells_are_json_and_quoted() {
        let records = vec![record("A", &[("Collection", "/a"), ("Collection", "/b")])];
        let out = records_to_string(&records, b',').unwrap();
        assert_eq!(out, "Institution,Collection\nA,\"[\"\"/a\"\",\"\"/b\"\"]\"\n");

        let mut rdr = ::csv::Reader::from_reader(out.as_bytes());
        let row = rdr.records().next().unwrap().unwrap();
        assert_eq!(parse_cell(&row[1]), Value::Multi(vec![s!("/a"), s!("/b")]));
    }

    #[test]
    fn parse_cell_keeps_scalars() {
        assert_eq!(parse_cell("Berlin"), Value::Scalar(s!("Berlin")));
        assert_eq!(parse_cell("[1, 2]"), Value::Scalar(s!("[1, 2]")));
        assert_eq!(parse_cell(r#"["only"]"#), Value::Scalar(s!(r#"["only"]"#)));
        let tricky = Value::Multi(vec![s!("a, \"b\""), s!("line\nbreak")]);
        assert_eq!(parse_cell(&render_cell(&tricky)), tricky);
        let lookalike = Value::Scalar(s!(r#"["/a","/b"]"#));
        assert_ne!(render_cell(&lookalike), render_cell(&Value::Multi(vec![s!("/a"), s!("/b")])));
        assert_eq!(parse_cell(&render_cell(&lookalike)), lookalike);
    }

    #[test]
    fn scalar_that_looks_like_a_list_stays_scalar() {
        let note = Value::Scalar(s!(r#"["/a","/b"]"#));
        let cell = render_cell(&note);
        assert_eq!(cell, r#""[\"/a\",\"/b\"]""#);
        assert_eq!(parse_cell(&cell), note);

        let quoted = Value::Scalar(s!(r#""Naturalis" (Leiden)"#));
        assert_eq!(parse_cell(&render_cell(&quoted)), quoted);

        let plain = Value::Scalar(s!("Berlin [Mitte]"));
        assert_eq!(render_cell(&plain), "Berlin [Mitte]");
        assert_eq!(parse_cell(&render_cell(&plain)), plain);
    }

    #[test]
    fn scalar_that_looks_like_a_list_survives_the_file() {
        let records = vec![record("A", &[("Note", r#"["/a","/b"]"#)])];
        let out = records_to_string(&records, b',').unwrap();
        let mut rdr = ::csv::Reader::from_reader(out.as_bytes());
        let row = rdr.records().next().unwrap().unwrap();
        assert_eq!(parse_cell(&row[1]), Value::Scalar(s!(r#"["/a","/b"]"#)));
    }

    #[test]
    fn empty_run_writes_nothing() {
        assert_eq!(records_to_string(&[], b',').unwrap(), "");
    }

    #[test]
    fn tab_delimiter() {
        let records = vec![record("A", &[("City", "Berlin, Mitte")])];
        let out = records_to_string(&records, b'\t').unwrap();
        assert_eq!(out, "Institution\tCity\nA\tBerlin, Mitte\n");
    }
}
