use serde::{Deserialize, Serialize};

/// Details about a specific project.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectListDetails {
    /// The unique identifier of this project.
    pub project_id: Option<String>,
    /// The human readable name of this project.
    pub name: Option<String>,
    /// The type of project. See [`project_type`].
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub relevancy_training_status: Option<ProjectRelevancyTrainingStatus>,
    /// The number of collections configured in this project.
    pub collection_count: Option<i64>,
}

pub mod project_type {
    pub const INTELLIGENT_DOCUMENT_PROCESSING: &str = "intelligent_document_processing";
    pub const DOCUMENT_RETRIEVAL: &str = "document_retrieval";
    pub const CONVERSATIONAL_SEARCH: &str = "conversational_search";
    pub const CONTENT_MINING: &str = "content_mining";
    pub const CONTENT_INTELLIGENCE: &str = "content_intelligence";
    pub const OTHER: &str = "other";
}

/// A list of projects in this instance.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListProjectsResponse {
    pub projects: Option<Vec<ProjectListDetails>>,
}

/// Detailed information about the specified project.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub project_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub relevancy_training_status: Option<ProjectRelevancyTrainingStatus>,
    pub collection_count: Option<i64>,
    pub default_query_parameters: Option<DefaultQueryParams>,
}

/// Relevancy training status information for this project.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectRelevancyTrainingStatus {
    /// When the training data was updated.
    pub data_updated: Option<String>,
    /// The total number of examples.
    pub total_examples: Option<i64>,
    /// When `true`, sufficient label diversity is present to allow training for
    /// this project.
    pub sufficient_label_diversity: Option<bool>,
    /// When `true`, the relevancy training is in processing.
    pub processing: Option<bool>,
    /// When `true`, the minimum number of examples required to train has been met.
    pub minimum_examples_added: Option<bool>,
    /// The time that the most recent successful training occurred.
    pub successfully_trained: Option<String>,
    /// When `true`, relevancy training is available when querying collections
    /// in the project.
    pub available: Option<bool>,
    /// The number of notices generated during the relevancy training.
    pub notices: Option<i64>,
    /// When `true`, the minimum number of queries required to train has been met.
    pub minimum_queries_added: Option<bool>,
}

impl ProjectRelevancyTrainingStatus {
    /// Both training minimums met and labels diverse enough to train
    pub fn ready_to_train(&self) -> bool {
        self.minimum_examples_added == Some(true)
            && self.minimum_queries_added == Some(true)
            && self.sufficient_label_diversity == Some(true)
    }
}

/// Default query parameters for this project.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefaultQueryParams {
    /// An array of collection identifiers to query. If empty or omitted all
    /// collections in the project are queried.
    pub collection_ids: Option<Vec<String>>,
    pub passages: Option<DefaultQueryParamsPassages>,
    pub table_results: Option<DefaultQueryParamsTableResults>,
    /// A string representing the default aggregation query for the project.
    pub aggregation: Option<String>,
    pub suggested_refinements: Option<DefaultQueryParamsSuggestedRefinements>,
    /// When `true`, a spelling suggestions for the query are returned by default.
    pub spelling_suggestions: Option<bool>,
    /// When `true`, highlights for the query are returned by default.
    pub highlight: Option<bool>,
    /// The number of document results returned by default.
    pub count: Option<i64>,
    /// A comma separated list of document fields to sort results by default.
    pub sort: Option<String>,
    /// An array of field names to return in document results if present by default.
    #[serde(rename = "return")]
    pub return_fields: Option<Vec<String>>,
}

/// Default settings configuration for passage search options.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefaultQueryParamsPassages {
    pub enabled: Option<bool>,
    /// The number of passages to return.
    pub count: Option<i64>,
    /// An array of field names to perform the passage search on.
    pub fields: Option<Vec<String>>,
    /// The approximate number of characters that each returned passage will contain.
    pub characters: Option<i64>,
    /// When `true` the number of passages that can be returned from a single
    /// document is restricted to the `max_per_document` value.
    pub per_document: Option<bool>,
    /// The default maximum number of passages that can be taken from a single document.
    pub max_per_document: Option<i64>,
}

/// Default project query settings for table results.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefaultQueryParamsTableResults {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
    /// The number of table results to include in each result document.
    pub per_document: Option<i64>,
}

/// Object containing suggested refinement settings.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefaultQueryParamsSuggestedRefinements {
    pub enabled: Option<bool>,
    pub count: Option<i64>,
}
