use serde::{Deserialize, Serialize};

/// Information about a specific enrichment.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Enrichment {
    /// The unique identifier of this enrichment.
    pub enrichment_id: Option<String>,
    /// The human readable name for this enrichment.
    pub name: Option<String>,
    /// The description of this enrichment.
    pub description: Option<String>,
    /// The type of this enrichment. See [`enrichment_type`].
    #[serde(rename = "type")]
    pub enrichment_type: Option<String>,
    pub options: Option<EnrichmentOptions>,
}

/// The type of an [`Enrichment`].
pub mod enrichment_type {
    pub const PART_OF_SPEECH: &str = "part_of_speech";
    pub const SENTIMENT: &str = "sentiment";
    pub const NATURAL_LANGUAGE_UNDERSTANDING: &str = "natural_language_understanding";
    pub const DICTIONARY: &str = "dictionary";
    pub const REGULAR_EXPRESSION: &str = "regular_expression";
    pub const UIMA_ANNOTATOR: &str = "uima_annotator";
    pub const RULE_BASED: &str = "rule_based";
    pub const WATSON_KNOWLEDGE_STUDIO_MODEL: &str = "watson_knowledge_studio_model";
    pub const CLASSIFIER: &str = "classifier";
    pub const WEBHOOK: &str = "webhook";
    pub const SENTENCE_CLASSIFIER: &str = "sentence_classifier";
}

/// An object that contains options for the current enrichment. Starting with
/// version `2020-08-30`, the enrichment options are not included in responses
/// from the List Enrichments method.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnrichmentOptions {
    /// An array of supported languages for this enrichment. When creating an
    /// enrichment, only specify a language that is used by the model or in the
    /// dictionary.
    pub languages: Option<Vec<String>>,
    /// The name of the entity type. Required when `type` is `dictionary`.
    pub entity_type: Option<String>,
    /// The regular expression to apply for this enrichment.
    pub regular_expression: Option<String>,
    /// The name of the result document field that this enrichment creates.
    pub result_field: Option<String>,
    /// The identifier of the document classifier.
    pub classifier_id: Option<String>,
    /// The identifier of the document classifier model.
    pub model_id: Option<String>,
    /// Specifies a threshold. Only classes with evaluation confidence scores
    /// that are higher than the specified threshold are included in the output.
    pub confidence_threshold: Option<f64>,
    /// Evaluates only the classes that fall in the top set of results when
    /// ranked by confidence.
    pub top_k: Option<i64>,
    /// A URL that uses the SSL protocol (begins with https) for the webhook.
    pub url: Option<String>,
    /// The Discovery API version that allows to distinguish the schema.
    pub version: Option<String>,
    /// A private key can be included in the request to authenticate with the
    /// external service.
    pub secret: Option<String>,
    pub headers: Option<Vec<WebhookHeader>>,
    /// Discovery calculates offsets of the text's location with this encoding
    /// type in documents.
    pub location_encoding: Option<String>,
}

/// An array of headers to pass with the HTTP request.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WebhookHeader {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// An object that contains an array of enrichment definitions.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Enrichments {
    pub enrichments: Option<Vec<Enrichment>>,
}

impl Enrichments {
    /// Looks up an enrichment by identifier
    pub fn find(&self, enrichment_id: &str) -> Option<&Enrichment> {
        self.enrichments
            .iter()
            .flatten()
            .find(|e| e.enrichment_id.as_deref() == Some(enrichment_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiscoveryModel;

    #[test]
    fn test_type_field_is_renamed() {
        let enrichment = Enrichment::from_json(
            r#"{"enrichment_id": "e1", "type": "part_of_speech",
                "options": {"result_field": "pos"}}"#,
        )
        .unwrap();

        assert_eq!(enrichment.enrichment_type.as_deref(), Some(enrichment_type::PART_OF_SPEECH));
        assert_eq!(
            enrichment.options.and_then(|o| o.result_field).as_deref(),
            Some("pos")
        );
    }

    #[test]
    fn test_find_enrichment() {
        let enrichments = Enrichments::from_json(
            r#"{"enrichments": [
                {"enrichment_id": "a", "name": "first"},
                {"enrichment_id": "b", "name": "second"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(enrichments.find("b").and_then(|e| e.name.as_deref()), Some("second"));
        assert!(enrichments.find("c").is_none());
    }
}
