use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::config::DecodeConfig;
use crate::model::DiscoveryModel;
use crate::{
    AnalyzedDocument, CollectionDetails, Completions, ComponentSettingsResponse,
    DeleteDocumentResponse, DocumentAccepted, DocumentClassifier, DocumentClassifierModel,
    DocumentClassifierModels, DocumentClassifiers, DocumentDetails, Enrichment, Enrichments,
    Expansions, ListBatchesResponse, ListCollectionsResponse, ListDocumentsResponse,
    ListFieldsResponse, ListProjectsResponse, ProjectDetails, QueryNoticesResponse, QueryResponse,
    StopWordList, TrainingQuery, TrainingQuerySet,
};

macro_rules! response_kinds {
    ($($variant:ident => $name:literal, $model:ty;)+) => {
        /// Every response shape the service returns
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ResponseKind {
            $($variant,)+
        }

        impl ResponseKind {
            pub const ALL: &'static [ResponseKind] = &[$(ResponseKind::$variant,)+];

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        /// A decoded response body, typed by its [`ResponseKind`]
        #[derive(Debug, Clone, PartialEq)]
        pub enum DecodedResponse {
            $($variant($model),)+
        }

        impl DecodedResponse {
            pub fn kind(&self) -> ResponseKind {
                match self {
                    $(Self::$variant(_) => ResponseKind::$variant,)+
                }
            }

            pub fn to_json_pretty(&self) -> Result<String> {
                match self {
                    $(Self::$variant(model) => model.to_json_pretty(),)+
                }
            }

            fn parse(kind: ResponseKind, body: &str) -> Result<Self> {
                match kind {
                    $(ResponseKind::$variant => <$model>::from_json(body).map(Self::$variant),)+
                }
            }
        }
    };
}

response_kinds! {
    ListCollections => "list-collections", ListCollectionsResponse;
    CollectionDetails => "collection-details", CollectionDetails;
    Query => "query", QueryResponse;
    Completions => "completions", Completions;
    QueryNotices => "query-notices", QueryNoticesResponse;
    ListFields => "list-fields", ListFieldsResponse;
    ComponentSettings => "component-settings", ComponentSettingsResponse;
    DocumentAccepted => "document-accepted", DocumentAccepted;
    DeleteDocument => "delete-document", DeleteDocumentResponse;
    ListDocuments => "list-documents", ListDocumentsResponse;
    DocumentDetails => "document-details", DocumentDetails;
    TrainingQuerySet => "training-query-set", TrainingQuerySet;
    TrainingQuery => "training-query", TrainingQuery;
    AnalyzedDocument => "analyzed-document", AnalyzedDocument;
    Enrichments => "enrichments", Enrichments;
    Enrichment => "enrichment", Enrichment;
    ListProjects => "list-projects", ListProjectsResponse;
    ProjectDetails => "project-details", ProjectDetails;
    DocumentClassifiers => "document-classifiers", DocumentClassifiers;
    DocumentClassifier => "document-classifier", DocumentClassifier;
    DocumentClassifierModels => "document-classifier-models", DocumentClassifierModels;
    DocumentClassifierModel => "document-classifier-model", DocumentClassifierModel;
    ListBatches => "list-batches", ListBatchesResponse;
    Expansions => "expansions", Expansions;
    StopWords => "stop-words", StopWordList;
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResponseKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .with_context(|| format!("Unknown response kind '{}'", s))
    }
}

/// Parse `body` as the response shape named by `kind`
pub fn decode(kind: ResponseKind, body: &str, config: &DecodeConfig) -> Result<DecodedResponse> {
    let decoded = DecodedResponse::parse(kind, body)
        .with_context(|| format!("Failed to decode {} response", kind))?;

    if let DecodedResponse::Query(response) = &decoded {
        check_aggregations(response, config)?;
    }

    debug!(kind = %kind, summary = %decoded.summary(), "Decoded response");
    Ok(decoded)
}

fn check_aggregations(response: &QueryResponse, config: &DecodeConfig) -> Result<()> {
    let unknown: Vec<&str> = response
        .all_aggregations()
        .into_iter()
        .filter_map(|a| a.unknown_type())
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }

    if config.log_unknown_aggregations {
        for aggregation_type in &unknown {
            warn!(aggregation_type = %aggregation_type, "Unrecognized aggregation type");
        }
    }

    if config.is_strict() {
        anyhow::bail!(
            "Query response contains {} aggregation(s) of an unrecognized type: {}",
            unknown.len(),
            unknown.join(", ")
        );
    }
    Ok(())
}

fn count<T>(items: &Option<Vec<T>>) -> usize {
    items.as_ref().map_or(0, Vec::len)
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

impl DecodedResponse {
    /// One line description of the response
    pub fn summary(&self) -> String {
        let detail = match self {
            Self::ListCollections(r) => format!("{} collections", count(&r.collections)),
            Self::CollectionDetails(r) => format!(
                "collection {} ({} enrichments)",
                or_dash(&r.collection_id),
                count(&r.enrichments)
            ),
            Self::Query(r) => format!(
                "{} matching, {} results, {} aggregations, {} passages, {} tables",
                r.matching_results.unwrap_or(0),
                count(&r.results),
                r.all_aggregations().len(),
                count(&r.passages),
                count(&r.table_results)
            ),
            Self::Completions(r) => format!("{} completions", count(&r.completions)),
            Self::QueryNotices(r) => format!(
                "{} matching, {} notices",
                r.matching_results.unwrap_or(0),
                count(&r.notices)
            ),
            Self::ListFields(r) => format!("{} fields", count(&r.fields)),
            Self::ComponentSettings(r) => format!(
                "{} results per page, {} aggregations",
                r.results_per_page.unwrap_or(0),
                count(&r.aggregations)
            ),
            Self::DocumentAccepted(r) => {
                format!("document {} {}", or_dash(&r.document_id), or_dash(&r.status))
            }
            Self::DeleteDocument(r) => {
                format!("document {} {}", or_dash(&r.document_id), or_dash(&r.status))
            }
            Self::ListDocuments(r) => format!(
                "{} matching, {} documents",
                r.matching_results.unwrap_or(0),
                count(&r.documents)
            ),
            Self::DocumentDetails(r) => format!(
                "document {} {} ({} notices)",
                or_dash(&r.document_id),
                or_dash(&r.status),
                count(&r.notices)
            ),
            Self::TrainingQuerySet(r) => format!(
                "{} training queries, {} examples",
                count(&r.queries),
                r.example_count()
            ),
            Self::TrainingQuery(r) => format!(
                "training query {} ({} examples)",
                or_dash(&r.query_id),
                count(&r.examples)
            ),
            Self::AnalyzedDocument(r) => format!("{} notices", count(&r.notices)),
            Self::Enrichments(r) => format!("{} enrichments", count(&r.enrichments)),
            Self::Enrichment(r) => format!(
                "enrichment {} ({})",
                or_dash(&r.enrichment_id),
                or_dash(&r.enrichment_type)
            ),
            Self::ListProjects(r) => format!("{} projects", count(&r.projects)),
            Self::ProjectDetails(r) => format!(
                "project {} ({}, {} collections)",
                or_dash(&r.project_id),
                or_dash(&r.project_type),
                r.collection_count.unwrap_or(0)
            ),
            Self::DocumentClassifiers(r) => format!("{} classifiers", count(&r.classifiers)),
            Self::DocumentClassifier(r) => format!(
                "classifier {} ({} enrichments)",
                or_dash(&r.classifier_id),
                count(&r.enrichments)
            ),
            Self::DocumentClassifierModels(r) => format!("{} classifier models", count(&r.models)),
            Self::DocumentClassifierModel(r) => format!(
                "classifier model {} {}",
                or_dash(&r.model_id),
                or_dash(&r.status)
            ),
            Self::ListBatches(r) => format!("{} batches", count(&r.batches)),
            Self::Expansions(r) => format!("{} expansions", count(&r.expansions)),
            Self::StopWords(r) => format!("{} stopwords", count(&r.stopwords)),
        };
        format!("{}: {}", self.kind(), detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryAggregation;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ResponseKind::ALL {
            assert_eq!(kind.name().parse::<ResponseKind>().unwrap(), *kind);
        }
        assert_eq!("list_batches".parse::<ResponseKind>().unwrap(), ResponseKind::ListBatches);
        assert!("batches-list".parse::<ResponseKind>().is_err());
    }

    #[test]
    fn test_decode_collections() {
        let decoded = decode(
            ResponseKind::ListCollections,
            r#"{"collections": [{"collection_id": "abc", "name": "docs"}]}"#,
            &DecodeConfig::default(),
        )
        .unwrap();

        assert_eq!(decoded.kind(), ResponseKind::ListCollections);
        assert_eq!(decoded.summary(), "list-collections: 1 collections");
    }

    #[test]
    fn test_decode_error_names_kind() {
        let err = decode(
            ResponseKind::TrainingQuerySet,
            "{\"queries\": 3}",
            &DecodeConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("training-query-set"));
    }

    #[test]
    fn test_unknown_aggregation_lenient_vs_strict() {
        let body = r#"{"matching_results": 3, "aggregations": [
            {"type": "term", "field": "author", "results": [{"key": "a", "matching_results": 3,
                "aggregations": [{"type": "significant_terms"}]}]}
        ]}"#;

        let lenient = decode(ResponseKind::Query, body, &DecodeConfig::lenient()).unwrap();
        assert!(lenient.summary().contains("2 aggregations"));

        let err = decode(ResponseKind::Query, body, &DecodeConfig::strict()).unwrap_err();
        assert!(err.to_string().contains("unrecognized type"));
        assert!(err.to_string().contains("significant_terms"));
    }

    #[test]
    fn test_strict_error_lists_every_unknown_type() {
        let body = r#"{"aggregations": [
            {"type": "significant_terms", "field": "a"},
            {"type": "nested", "path": "p", "aggregations": [{"type": "geo_bounds"}]}
        ]}"#;

        let err = decode(ResponseKind::Query, body, &DecodeConfig::strict()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("2 aggregation(s)"));
        assert!(message.contains("significant_terms, geo_bounds"));
    }

    #[test]
    fn test_lenient_decode_keeps_unknown_payload() {
        let body = r#"{"aggregations": [{"type": "significant_terms", "field": "a"}]}"#;
        let DecodedResponse::Query(response) =
            decode(ResponseKind::Query, body, &DecodeConfig::lenient()).unwrap()
        else {
            panic!("expected a query response");
        };

        let QueryAggregation::Unknown(raw) = &response.aggregations()[0] else {
            panic!("expected an unknown aggregation");
        };
        assert_eq!(raw.get("field").and_then(|v| v.as_str()), Some("a"));
    }

    #[test]
    fn test_pretty_output_matches_kind() {
        let decoded = decode(
            ResponseKind::StopWords,
            r#"{"stopwords": ["a", "the"]}"#,
            &DecodeConfig::default(),
        )
        .unwrap();
        let pretty = decoded.to_json_pretty().unwrap();
        assert!(pretty.contains("\"stopwords\""));
        assert_eq!(decoded.summary(), "stop-words: 2 stopwords");
    }
}
