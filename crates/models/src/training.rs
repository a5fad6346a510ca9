use serde::{Deserialize, Serialize};

/// Object that contains training query details.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingQuery {
    /// The query ID associated with the training query.
    pub query_id: Option<String>,
    /// The natural text query that is used as the training query.
    pub natural_language_query: Option<String>,
    /// The filter used on the collection before the `natural_language_query` is applied.
    pub filter: Option<String>,
    /// The date and time the query was created.
    pub created: Option<String>,
    /// The date and time the query was updated.
    pub updated: Option<String>,
    /// Array of training examples.
    pub examples: Option<Vec<TrainingExample>>,
}

/// Object that contains example response details for a training query.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingExample {
    /// The document ID associated with this training example.
    pub document_id: Option<String>,
    /// The collection ID associated with this training example.
    pub collection_id: Option<String>,
    /// The relevance of the training example.
    pub relevance: Option<i64>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

/// Object specifying the training queries contained in the identified training set.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrainingQuerySet {
    /// Array of training queries. At least 50 queries are required for training
    /// to begin. A maximum of 10,000 queries are returned.
    pub queries: Option<Vec<TrainingQuery>>,
}

impl TrainingQuerySet {
    /// Total examples across all queries
    pub fn example_count(&self) -> usize {
        self.queries
            .iter()
            .flatten()
            .map(|q| q.examples.as_ref().map_or(0, Vec::len))
            .sum()
    }
}
