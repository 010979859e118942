//! Upstream classification API wire types
//!
//! Request and response shapes for the Franklin classification endpoint.
//! The request field names and the hardcoded `hg19` reference version are
//! part of the upstream wire contract.

use crate::models::variant::{VariantRequest, VariantResult};
use serde::{Deserialize, Serialize};

/// Genome build sent with every classification request.
pub const REFERENCE_VERSION: &str = "hg19";

/// Payload for one upstream classification call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub variant: ClassifyVariant,
    pub is_versioned_request: bool,
}

/// The variant portion of the upstream payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyVariant {
    pub chrom: String,
    pub alt: String,
    pub pos: i64,
    #[serde(rename = "ref")]
    pub reference_allele: String,
    pub reference_version: String,
}

impl ClassifyRequest {
    /// Build the upstream payload for one inbound variant.
    pub fn from_variant(variant: &VariantRequest) -> Self {
        Self {
            variant: ClassifyVariant {
                chrom: variant.chromosome.clone(),
                alt: variant.alternate_allele.clone(),
                pos: variant.position,
                reference_allele: variant.reference_allele.clone(),
                reference_version: REFERENCE_VERSION.to_string(),
            },
            is_versioned_request: false,
        }
    }
}

/// Successful upstream response body.
///
/// Every field is optional; whatever the upstream omits stays `None` and is
/// passed through as `null` to the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub classification: Option<String>,
    pub db_snp: Option<String>,
    pub c_dot: Option<String>,
    pub transcript: Option<String>,
    pub gene: Option<String>,
    pub score: Option<f64>,
}

impl ClassifyResponse {
    /// Merge an upstream response with the originating request into the
    /// outbound result shape.
    pub fn into_result(self, variant: &VariantRequest) -> VariantResult {
        VariantResult {
            id: variant.id,
            chrom: variant.chromosome.clone(),
            pos: variant.position,
            reference_allele: variant.reference_allele.clone(),
            alt: variant.alternate_allele.clone(),
            classification: self.classification,
            db_snp: self.db_snp,
            c_dot: self.c_dot,
            transcript: self.transcript,
            gene: self.gene,
            score: self.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_variant() -> VariantRequest {
        VariantRequest {
            id: 1,
            chromosome: "1".to_string(),
            position: 100,
            reference_allele: "A".to_string(),
            alternate_allele: "T".to_string(),
        }
    }

    #[test]
    fn test_classify_request_wire_shape() {
        let payload = ClassifyRequest::from_variant(&sample_variant());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["variant"]["chrom"], "1");
        assert_eq!(value["variant"]["pos"], 100);
        assert_eq!(value["variant"]["ref"], "A");
        assert_eq!(value["variant"]["alt"], "T");
        assert_eq!(value["variant"]["reference_version"], "hg19");
        assert_eq!(value["is_versioned_request"], false);
    }

    #[test]
    fn test_response_missing_fields_stay_absent() {
        let json = r#"{"classification":"Benign"}"#;
        let response: ClassifyResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.classification.as_deref(), Some("Benign"));
        assert_eq!(response.db_snp, None);
        assert_eq!(response.score, None);
    }

    #[test]
    fn test_response_empty_string_is_not_absence() {
        let json = r#"{"gene":""}"#;
        let response: ClassifyResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.gene.as_deref(), Some(""));
        assert_eq!(response.classification, None);
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let json = r#"{"classification":"VUS","assembly":"GRCh37","acmg":["PM2"]}"#;
        let response: ClassifyResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.classification.as_deref(), Some("VUS"));
    }

    #[test]
    fn test_into_result_echoes_request_fields() {
        let variant = sample_variant();
        let response = ClassifyResponse {
            classification: Some("Pathogenic".to_string()),
            score: Some(0.9),
            ..Default::default()
        };

        let result = response.into_result(&variant);
        assert_eq!(result.id, 1);
        assert_eq!(result.chrom, "1");
        assert_eq!(result.pos, 100);
        assert_eq!(result.reference_allele, "A");
        assert_eq!(result.alt, "T");
        assert_eq!(result.classification.as_deref(), Some("Pathogenic"));
        assert_eq!(result.score, Some(0.9));
        assert_eq!(result.gene, None);
    }
}
