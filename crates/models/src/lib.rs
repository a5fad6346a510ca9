//! Value types for the Discovery v2 service responses.
//!
//! Every type mirrors one JSON object of the service's wire format. The
//! polymorphic `aggregations` arrays decode into the [`QueryAggregation`] sum
//! type, selected by each object's `type` field.

pub mod aggregation;
pub mod batch;
pub mod collection;
pub mod component_settings;
pub mod config;
pub mod decode;
pub mod document;
pub mod document_classifier;
pub mod enrichment;
pub mod model;
pub mod project;
pub mod query;
pub mod table;
pub mod training;

pub use aggregation::{
    QueryAggregation, QueryAggregationQueryPairAggregation, QueryAggregationQueryTopHitsAggregation,
    QueryAggregationQueryTopicAggregation, QueryAggregationQueryTrendAggregation,
    QueryCalculationAggregation, QueryFilterAggregation, QueryGroupByAggregation,
    QueryGroupByAggregationResult, QueryHistogramAggregation, QueryHistogramAggregationResult,
    QueryNestedAggregation, QueryPairAggregationResult, QueryTermAggregation,
    QueryTermAggregationResult, QueryTimesliceAggregation, QueryTimesliceAggregationResult,
    QueryTopHitsAggregation, QueryTopHitsAggregationResult, QueryTopicAggregationResult,
    QueryTrendAggregationResult,
};
pub use batch::{BatchDetails, ListBatchesResponse};
pub use collection::{
    Collection, CollectionDetails, CollectionDetailsSmartDocumentUnderstanding,
    CollectionEnrichment, Expansion, Expansions, ListCollectionsResponse, StopWordList,
};
pub use component_settings::{
    ComponentSettingsAggregation, ComponentSettingsFieldsShown, ComponentSettingsFieldsShownBody,
    ComponentSettingsFieldsShownTitle, ComponentSettingsResponse,
};
pub use config::{DecodeConfig, DecodeMode};
pub use decode::{DecodedResponse, ResponseKind, decode};
pub use document::{
    AnalyzedDocument, AnalyzedResult, DeleteDocumentResponse, DocumentAccepted, DocumentDetails,
    DocumentDetailsChildren, Field, ListDocumentsResponse, ListFieldsResponse, Notice,
    QueryNoticesResponse,
};
pub use document_classifier::{
    ClassifierFederatedModel, ClassifierModelEvaluation, CreateDocumentClassifier,
    CreateDocumentClassifierBuilder, DocumentClassifier, DocumentClassifierEnrichment,
    DocumentClassifierModel, DocumentClassifierModels, DocumentClassifiers,
    ModelEvaluationMacroAverage, ModelEvaluationMicroAverage, PerClassModelEvaluation,
};
pub use enrichment::{Enrichment, EnrichmentOptions, Enrichments, WebhookHeader};
pub use model::DiscoveryModel;
pub use project::{
    DefaultQueryParams, DefaultQueryParamsPassages, DefaultQueryParamsSuggestedRefinements,
    DefaultQueryParamsTableResults, ListProjectsResponse, ProjectDetails, ProjectListDetails,
    ProjectRelevancyTrainingStatus,
};
pub use query::{
    Completions, QueryResponse, QueryResponsePassage, QueryResult, QueryResultMetadata,
    QueryResultPassage, QuerySuggestedRefinement, ResultPassageAnswer, RetrievalDetails,
};
pub use table::{
    DocumentAttribute, QueryTableResult, TableBodyCells, TableCellKey, TableCellValues,
    TableColumnHeaderIds, TableColumnHeaderTexts, TableColumnHeaderTextsNormalized,
    TableColumnHeaders, TableElementLocation, TableHeaders, TableKeyValuePairs, TableResultTable,
    TableRowHeaderIds, TableRowHeaderTexts, TableRowHeaderTextsNormalized, TableRowHeaders,
    TableTextLocation,
};
pub use training::{TrainingExample, TrainingQuery, TrainingQuerySet};
