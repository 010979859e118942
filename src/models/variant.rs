//! Inbound and outbound variant wire types
//!
//! Field names on the wire are a compatibility contract with existing
//! callers; the inbound format uses mixed-case names (`chr`, `Pos`, `Ref`,
//! `Alt`) while the outbound format is lowercase.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One variant as submitted by the caller.
///
/// `id` is caller-assigned and only echoed back; no validation is applied
/// beyond the type shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRequest {
    pub id: i64,
    #[serde(rename = "chr")]
    pub chromosome: String,
    #[serde(rename = "Pos")]
    pub position: i64,
    #[serde(rename = "Ref")]
    pub reference_allele: String,
    #[serde(rename = "Alt")]
    pub alternate_allele: String,
}

impl fmt::Display for VariantRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chr{}:{} {}>{} (id {})",
            self.chromosome, self.position, self.reference_allele, self.alternate_allele, self.id
        )
    }
}

/// One classified variant as returned to the caller.
///
/// Optional fields mirror whatever the upstream response carried; they are
/// serialized as `null` when absent so callers can distinguish "upstream
/// said nothing" from a present-but-empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantResult {
    pub id: i64,
    pub chrom: String,
    pub pos: i64,
    #[serde(rename = "ref")]
    pub reference_allele: String,
    pub alt: String,
    pub classification: Option<String>,
    pub db_snp: Option<String>,
    pub c_dot: Option<String>,
    pub transcript: Option<String>,
    pub gene: Option<String>,
    pub score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_wire_names() {
        let json = r#"{"id":1,"chr":"1","Pos":100,"Ref":"A","Alt":"T"}"#;
        let request: VariantRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.id, 1);
        assert_eq!(request.chromosome, "1");
        assert_eq!(request.position, 100);
        assert_eq!(request.reference_allele, "A");
        assert_eq!(request.alternate_allele, "T");
    }

    #[test]
    fn test_request_rejects_missing_fields() {
        let json = r#"{"id":1,"chr":"1","Pos":100,"Ref":"A"}"#;
        assert!(serde_json::from_str::<VariantRequest>(json).is_err());
    }

    #[test]
    fn test_result_serializes_absent_fields_as_null() {
        let result = VariantResult {
            id: 1,
            chrom: "1".to_string(),
            pos: 100,
            reference_allele: "A".to_string(),
            alt: "T".to_string(),
            classification: Some("Pathogenic".to_string()),
            db_snp: None,
            c_dot: None,
            transcript: None,
            gene: None,
            score: Some(0.9),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["classification"], "Pathogenic");
        assert_eq!(value["ref"], "A");
        assert_eq!(value["score"], 0.9);
        // Absent upstream fields are null, never empty strings
        assert!(value["db_snp"].is_null());
        assert!(value["c_dot"].is_null());
        assert!(value["transcript"].is_null());
        assert!(value["gene"].is_null());
        assert!(value.as_object().unwrap().contains_key("db_snp"));
    }

    #[test]
    fn test_request_display() {
        let request = VariantRequest {
            id: 7,
            chromosome: "X".to_string(),
            position: 1234,
            reference_allele: "G".to_string(),
            alternate_allele: "C".to_string(),
        };

        assert_eq!(request.to_string(), "chrX:1234 G>C (id 7)");
    }
}
