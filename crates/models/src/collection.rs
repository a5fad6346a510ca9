use serde::{Deserialize, Serialize};

/// A collection for storing documents.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Collection {
    /// The unique identifier of the collection.
    pub collection_id: Option<String>,
    /// The name of the collection.
    pub name: Option<String>,
}

/// Response object that contains an array of collection details.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListCollectionsResponse {
    pub collections: Option<Vec<Collection>>,
}

/// A collection for storing documents.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionDetails {
    pub collection_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// The date that the collection was created.
    pub created: Option<String>,
    /// The language of the collection. For a list of supported languages, see
    /// the product documentation.
    pub language: Option<String>,
    /// An array of enrichments that are applied to this collection.
    pub enrichments: Option<Vec<CollectionEnrichment>>,
    pub smart_document_understanding: Option<CollectionDetailsSmartDocumentUnderstanding>,
}

/// An object describing an enrichment for a collection.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionEnrichment {
    /// The unique identifier of this enrichment.
    pub enrichment_id: Option<String>,
    /// An array of field names that the enrichment is applied to.
    ///
    /// If you apply an enrichment to a field from a JSON file, the data is converted to an array
    /// automatically, even if the field contains a single value.
    pub fields: Option<Vec<String>>,
}

/// An object that describes the Smart Document Understanding model for a collection.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionDetailsSmartDocumentUnderstanding {
    /// When `true`, smart document understanding conversion is enabled for the collection.
    pub enabled: Option<bool>,
    /// See [`sdu_model`] for the values the service reports.
    pub model: Option<String>,
}

/// Values of [`CollectionDetailsSmartDocumentUnderstanding::model`].
pub mod sdu_model {
    pub const CUSTOM: &str = "custom";
    pub const PRE_TRAINED: &str = "pre_trained";
    pub const TEXT_EXTRACTION: &str = "text_extraction";
}

/// The query expansion definitions for the specified collection.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Expansions {
    pub expansions: Option<Vec<Expansion>>,
}

/// An expanded definition of a term.
///
/// When `input_terms` is absent the expansion is bidirectional: every term in
/// `expanded_terms` expands to every other term.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Expansion {
    pub input_terms: Option<Vec<String>>,
    pub expanded_terms: Option<Vec<String>>,
}

impl Expansion {
    pub fn is_bidirectional(&self) -> bool {
        self.input_terms.as_ref().is_none_or(|terms| terms.is_empty())
    }
}

/// List of words to filter out of text that is submitted in queries.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StopWordList {
    pub stopwords: Option<Vec<String>>,
}
