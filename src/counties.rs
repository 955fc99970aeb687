//! County name mapping
//! The first two digits of a municipality code select one of the 21 counties, numbered alphabetically

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{DirectoryError, Result};
use crate::models::CountySummary;
use crate::muni_names;

pub static COUNTY_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // South Jersey
    m.insert("01", "ATLANTIC");
    m.insert("03", "BURLINGTON");
    m.insert("04", "CAMDEN");
    m.insert("05", "CAPE MAY");
    m.insert("06", "CUMBERLAND");
    m.insert("08", "GLOUCESTER");
    m.insert("15", "OCEAN");
    m.insert("17", "SALEM");

    // Central Jersey
    m.insert("10", "HUNTERDON");
    m.insert("11", "MERCER");
    m.insert("12", "MIDDLESEX");
    m.insert("13", "MONMOUTH");
    m.insert("18", "SOMERSET");

    // North Jersey
    m.insert("02", "BERGEN");
    m.insert("07", "ESSEX");
    m.insert("09", "HUDSON");
    m.insert("14", "MORRIS");
    m.insert("16", "PASSAIC");
    m.insert("19", "SUSSEX");
    m.insert("20", "UNION");
    m.insert("21", "WARREN");

    m
});

/// County name for a two-digit county code
pub fn county_name(county_code: &str) -> Result<&'static str> {
    COUNTY_NAMES
        .get(county_code)
        .copied()
        .ok_or_else(|| DirectoryError::CountyNotFound(county_code.to_string()))
}

/// County name for a known municipality code
pub fn county_of(muni_code: &str) -> Result<&'static str> {
    let record = muni_names::get_record(muni_code)?;
    county_name(record.county_code())
}

/// Display form "NAME, COUNTY" (e.g. "NEWARK, ESSEX")
pub fn format_municipality(muni_code: &str) -> Result<String> {
    let record = muni_names::get_record(muni_code)?;
    let county = county_name(record.county_code())?;
    Ok(format!("{}, {}", record.name(), county))
}

/// Every county in code order, with the number of municipalities it holds
pub fn summaries() -> Vec<CountySummary> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for record in muni_names::records() {
        *counts.entry(record.county_code()).or_insert(0) += 1;
    }

    let mut all: Vec<CountySummary> = COUNTY_NAMES
        .iter()
        .map(|(&code, &name)| CountySummary {
            code,
            name,
            municipality_count: counts.get(code).copied().unwrap_or(0),
        })
        .collect();
    all.sort_unstable_by_key(|c| c.code);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_county_name() {
        assert_eq!(county_name("01").unwrap(), "ATLANTIC");
        assert_eq!(county_name("07").unwrap(), "ESSEX");
        assert_eq!(county_name("21").unwrap(), "WARREN");
    }

    #[test]
    fn test_unknown_county() {
        assert_eq!(
            county_name("22"),
            Err(DirectoryError::CountyNotFound("22".to_string()))
        );
        assert!(county_name("1").is_err());
    }

    #[test]
    fn test_county_of() {
        assert_eq!(county_of("0714").unwrap(), "ESSEX");
        assert_eq!(county_of("1111").unwrap(), "MERCER");
        assert_eq!(county_of("0266").unwrap(), "BERGEN");
        assert_eq!(county_of("2121").unwrap(), "WARREN");
        assert!(matches!(county_of("0799"), Err(DirectoryError::CodeNotFound(_))));
    }

    #[test]
    fn test_format_municipality() {
        assert_eq!(format_municipality("0714").unwrap(), "NEWARK, ESSEX");
        assert_eq!(format_municipality("0101").unwrap(), "ABSECON, ATLANTIC");
        assert!(format_municipality("0000").is_err());
    }

    #[test]
    fn test_every_municipality_has_a_county() {
        for record in muni_names::records() {
            assert!(county_name(record.county_code()).is_ok(), "{}", record.code());
        }
    }

    #[test]
    fn test_summaries() {
        let all = summaries();
        assert_eq!(all.len(), 21);
        assert_eq!(all[0].code, "01");
        assert_eq!(all[0].municipality_count, 23);
        assert_eq!(all[12].name, "MONMOUTH");
        assert_eq!(all[12].municipality_count, 53);
        let total: usize = all.iter().map(|c| c.municipality_count).sum();
        assert_eq!(total, muni_names::len());
    }
}
