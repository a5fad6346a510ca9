use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::aggregation::QueryAggregation;
use crate::table::QueryTableResult;

/// A response that contains the documents and aggregations for the query.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResponse {
    /// The number of matching results for the query. Results that match due to
    /// a curation only are not counted in the total.
    pub matching_results: Option<i64>,
    /// Array of document results for the query.
    pub results: Option<Vec<QueryResult>>,
    /// Array of aggregations for the query.
    pub aggregations: Option<Vec<QueryAggregation>>,
    pub retrieval_details: Option<RetrievalDetails>,
    /// Suggested correction to the submitted `natural_language_query` value.
    pub suggested_query: Option<String>,
    /// Array of suggested refinements. The suggested refinements feature that
    /// returns this field is deprecated.
    pub suggested_refinements: Option<Vec<QuerySuggestedRefinement>>,
    /// Array of table results.
    pub table_results: Option<Vec<QueryTableResult>>,
    /// Passages that best match the query from across all of the collections
    /// in the project. Returned if `passages.per_document` is `false`.
    pub passages: Option<Vec<QueryResponsePassage>>,
}

impl QueryResponse {
    pub fn results(&self) -> &[QueryResult] {
        self.results.as_deref().unwrap_or_default()
    }

    pub fn aggregations(&self) -> &[QueryAggregation] {
        self.aggregations.as_deref().unwrap_or_default()
    }

    /// Every aggregation in the response, depth-first
    pub fn all_aggregations(&self) -> Vec<&QueryAggregation> {
        let mut all = Vec::new();
        for aggregation in self.aggregations() {
            aggregation.walk(&mut |a| all.push(a));
        }
        all
    }
}

/// Result document for the specified query.
///
/// Fields other than the ones listed come from the indexed document itself and
/// are kept in `document`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResult {
    /// The unique identifier of the document.
    pub document_id: Option<String>,
    /// Metadata of the document.
    pub metadata: Option<Map<String, Value>>,
    pub result_metadata: Option<QueryResultMetadata>,
    /// Passages from the document that best matches the query. Returned if
    /// `passages.per_document` is `true`.
    pub document_passages: Option<Vec<QueryResultPassage>>,
    #[serde(flatten)]
    pub document: Map<String, Value>,
}

/// Metadata of a query result.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResultMetadata {
    /// The document retrieval source that produced this search result. See
    /// [`document_retrieval_source`].
    pub document_retrieval_source: Option<String>,
    /// The collection id associated with this training data set.
    pub collection_id: Option<String>,
    /// The confidence score for the given result. Calculated based on how
    /// relevant the result is estimated to be.
    pub confidence: Option<f64>,
}

pub mod document_retrieval_source {
    pub const SEARCH: &str = "search";
    pub const CURATION: &str = "curation";
}

/// A passage query result.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResultPassage {
    /// The content of the extracted passage.
    pub passage_text: Option<String>,
    /// The position of the first character of the extracted passage in the
    /// originating field.
    pub start_offset: Option<i64>,
    /// The position after the last character of the extracted passage in the
    /// originating field.
    pub end_offset: Option<i64>,
    /// The label of the field from which the passage has been extracted.
    pub field: Option<String>,
    /// An array of extracted answers to the specified query.
    pub answers: Option<Vec<ResultPassageAnswer>>,
}

/// Object that contains a potential answer to the specified query.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultPassageAnswer {
    pub answer_text: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    /// An estimate of the probability that the answer is relevant.
    pub confidence: Option<f64>,
}

/// A passage query response.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResponsePassage {
    pub passage_text: Option<String>,
    /// Estimate of the probability that the passage is relevant.
    pub passage_score: Option<f64>,
    pub document_id: Option<String>,
    pub collection_id: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub field: Option<String>,
    pub answers: Option<Vec<ResultPassageAnswer>>,
}

/// An object contain retrieval type information.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetrievalDetails {
    /// Identifies the document retrieval strategy used for this query.
    /// `relevancy_training` indicates that the results were returned using a
    /// relevancy trained model.
    pub document_retrieval_strategy: Option<String>,
}

pub mod document_retrieval_strategy {
    pub const UNTRAINED: &str = "untrained";
    pub const RELEVANCY_TRAINING: &str = "relevancy_training";
}

/// A suggested additional query term or terms user to filter results.
///
/// The suggested refinements feature is deprecated by the service; the field
/// is kept so older responses still decode.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuerySuggestedRefinement {
    /// The text used to filter.
    pub text: Option<String>,
}

/// An object that contains an array of autocompletion suggestions.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Completions {
    /// Array of autocomplete suggestion based on the provided prefix.
    pub completions: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiscoveryModel;
    use serde_json::json;

    #[test]
    fn test_document_fields_are_kept() {
        let result = QueryResult::from_json(
            r#"{"document_id": "d1", "title": "Quarterly report", "enriched_text": {"entities": []},
                "result_metadata": {"collection_id": "c1", "confidence": 0.8}}"#,
        )
        .unwrap();

        assert_eq!(result.document_id.as_deref(), Some("d1"));
        assert_eq!(result.document.get("title"), Some(&json!("Quarterly report")));
        assert!(!result.document.contains_key("document_id"));
        assert_eq!(result.result_metadata.and_then(|m| m.confidence), Some(0.8));
    }

    #[test]
    fn test_deprecated_refinements_still_decode() {
        let response = QueryResponse::from_json(
            r#"{"matching_results": 1, "suggested_refinements": [{"text": "watson"}]}"#,
        )
        .unwrap();
        let refinements = response.suggested_refinements.unwrap();
        assert_eq!(refinements[0].text.as_deref(), Some("watson"));
    }

    #[test]
    fn test_all_aggregations_flattens_tree() {
        let response = QueryResponse::from_json(
            r#"{"aggregations": [
                {"type": "filter", "match": "x", "aggregations": [
                    {"type": "max", "field": "y", "value": 3}
                ]},
                {"type": "term", "field": "z"}
            ]}"#,
        )
        .unwrap();

        let kinds: Vec<_> = response.all_aggregations().into_iter().map(|a| a.kind()).collect();
        assert_eq!(kinds, vec!["filter", "max", "term"]);
    }

    #[test]
    fn test_unknown_aggregation_survives_serialization() {
        let body = r#"{"aggregations": [
            {"type": "significant_terms", "field": "x", "matching_results": 3,
                "results": [{"key": "k"}]}
        ]}"#;
        let response = QueryResponse::from_json(body).unwrap();
        assert!(response.aggregations()[0].is_unknown());

        let rendered = response.to_json().unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&rendered).unwrap(),
            serde_json::from_str::<serde_json::Value>(body).unwrap()
        );
    }

    #[test]
    fn test_empty_response_accessors() {
        let response = QueryResponse::default();
        assert!(response.results().is_empty());
        assert!(response.all_aggregations().is_empty());
    }
}
