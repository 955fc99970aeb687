//! Rendering of directory rows for the command-line tool

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::counties;
use crate::error::DirectoryError;
use crate::models::MunicipalityRecord;
use crate::muni_names;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// A record ready for display, optionally carrying its county name
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub code: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<&'static str>,
}

impl Row {
    pub fn new(record: MunicipalityRecord, with_county: bool) -> Self {
        let county = if with_county {
            counties::county_name(record.county_code()).ok()
        } else {
            None
        };
        Self {
            code: record.code(),
            name: record.name(),
            county,
        }
    }
}

/// Look up every code in order. Hits become rows; misses are collected
/// rather than stopping the run.
pub fn resolve<S: AsRef<str>>(codes: &[S], with_county: bool) -> (Vec<Row>, Vec<DirectoryError>) {
    let mut rows = Vec::with_capacity(codes.len());
    let mut misses = Vec::new();
    for code in codes {
        match muni_names::get_record(code.as_ref()) {
            Ok(record) => rows.push(Row::new(record, with_county)),
            Err(e) => misses.push(e),
        }
    }
    (rows, misses)
}

pub fn write_rows<W: Write>(out: W, rows: &[Row], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, rows),
        OutputFormat::Json => write_json(out, rows),
        OutputFormat::Csv => write_csv(out, rows),
    }
}

fn write_text<W: Write>(mut out: W, rows: &[Row]) -> Result<()> {
    for row in rows {
        match row.county {
            Some(county) => writeln!(out, "{}\t{}\t{}", row.code, row.name, county)?,
            None => writeln!(out, "{}\t{}", row.code, row.name)?,
        }
    }
    Ok(())
}

fn write_json<W: Write>(mut out: W, rows: &[Row]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(out: W, rows: &[Row]) -> Result<()> {
    let with_county = rows.iter().any(|r| r.county.is_some());
    let mut writer = csv::Writer::from_writer(out);

    if with_county {
        writer.write_record(["code", "name", "county"])?;
    } else {
        writer.write_record(["code", "name"])?;
    }
    for row in rows {
        if with_county {
            writer.write_record([row.code, row.name, row.county.unwrap_or("")])?;
        } else {
            writer.write_record([row.code, row.name])?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(codes: &[&str], with_county: bool) -> Vec<Row> {
        codes
            .iter()
            .map(|c| Row::new(muni_names::get_record(c).unwrap(), with_county))
            .collect()
    }

    fn render(rows: &[Row], format: OutputFormat) -> String {
        let mut buf = Vec::new();
        write_rows(&mut buf, rows, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text() {
        let out = render(&rows(&["0101", "0714"], false), OutputFormat::Text);
        assert_eq!(out, "0101\tABSECON\n0714\tNEWARK\n");

        let out = render(&rows(&["0714"], true), OutputFormat::Text);
        assert_eq!(out, "0714\tNEWARK\tESSEX\n");
    }

    #[test]
    fn test_csv() {
        let out = render(&rows(&["0101", "0105"], false), OutputFormat::Csv);
        assert_eq!(out, "code,name\n0101,ABSECON\n0105,BUENA VISTA\n");

        let out = render(&rows(&["1111"], true), OutputFormat::Csv);
        assert_eq!(out, "code,name,county\n1111,TRENTON,MERCER\n");
    }

    #[test]
    fn test_json() {
        let out = render(&rows(&["2123"], false), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value, serde_json::json!([{"code": "2123", "name": "WHITE"}]));

        let out = render(&rows(&["2123"], true), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["county"], "WARREN");
    }

    #[test]
    fn test_resolve_mixed_hits_and_misses() {
        let (rows, misses) = resolve(&["0714", "0000", "1111"], true);
        let codes: Vec<&str> = rows.iter().map(|r| r.code).collect();
        assert_eq!(codes, ["0714", "1111"]);
        assert_eq!(rows[0].county, Some("ESSEX"));
        assert_eq!(misses, [DirectoryError::CodeNotFound("0000".to_string())]);

        let out = render(&rows, OutputFormat::Csv);
        assert_eq!(out, "code,name,county\n0714,NEWARK,ESSEX\n1111,TRENTON,MERCER\n");
    }

    #[test]
    fn test_resolve_keeps_input_order() {
        let (rows, misses) = resolve(&["2123", "0101", "2123"], false);
        let codes: Vec<&str> = rows.iter().map(|r| r.code).collect();
        assert_eq!(codes, ["2123", "0101", "2123"]);
        assert!(misses.is_empty());
    }

    #[test]
    fn test_resolve_all_misses() {
        let codes = vec!["9999".to_string(), "0000".to_string()];
        let (rows, misses) = resolve(codes.as_slice(), false);
        assert!(rows.is_empty());
        assert_eq!(
            misses,
            [
                DirectoryError::CodeNotFound("9999".to_string()),
                DirectoryError::CodeNotFound("0000".to_string()),
            ]
        );
        assert_eq!(render(&rows, OutputFormat::Csv), "code,name\n");
        assert_eq!(render(&rows, OutputFormat::Text), "");
    }
}
