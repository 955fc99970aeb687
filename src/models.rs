use serde::Serialize;

/// One entry of the municipality directory. Only the directory builds these,
/// so `code` is always four ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MunicipalityRecord {
    code: &'static str,
    name: &'static str,
}

impl MunicipalityRecord {
    pub(crate) fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Two-digit county prefix, e.g. "07" for "0714".
    pub fn county_code(&self) -> &'static str {
        &self.code[..2]
    }
}

/// County summary used by the listing endpoints and the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct CountySummary {
    pub code: &'static str,
    pub name: &'static str,
    pub municipality_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_county_code() {
        let record = MunicipalityRecord::new("0714", "NEWARK");
        assert_eq!(record.county_code(), "07");
        assert_eq!(record.code(), "0714");
        assert_eq!(record.name(), "NEWARK");
    }

    #[test]
    fn test_serializes_code_and_name() {
        let record = MunicipalityRecord::new("1111", "TRENTON");
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json, serde_json::json!({"code": "1111", "name": "TRENTON"}));
    }
}
