use serde::{Deserialize, Serialize};

/// The default component settings for this project.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentSettingsResponse {
    pub fields_shown: Option<ComponentSettingsFieldsShown>,
    /// Whether or not autocomplete is enabled.
    pub autocomplete: Option<bool>,
    /// Whether or not structured search is enabled.
    pub structured_search: Option<bool>,
    /// Number or results shown per page.
    pub results_per_page: Option<i64>,
    /// a list of component setting aggregations.
    pub aggregations: Option<Vec<ComponentSettingsAggregation>>,
}

/// Fields shown in the results section of the UI.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentSettingsFieldsShown {
    pub body: Option<ComponentSettingsFieldsShownBody>,
    pub title: Option<ComponentSettingsFieldsShownTitle>,
}

/// Body label.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentSettingsFieldsShownBody {
    /// Use the whole passage as the body.
    pub use_passage: Option<bool>,
    /// Use a specific field as the title.
    pub field: Option<String>,
}

/// Title label.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentSettingsFieldsShownTitle {
    /// Use a specific field as the title.
    pub field: Option<String>,
}

/// Display settings for aggregations.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentSettingsAggregation {
    /// Identifier used to map aggregation settings to aggregation configuration.
    pub name: Option<String>,
    /// User-friendly alias for the aggregation.
    pub label: Option<String>,
    /// Whether users is allowed to select more than one of the aggregation terms.
    pub multiple_selections_allowed: Option<bool>,
    /// Type of visualization to use when rendering the aggregation. See
    /// [`visualization_type`].
    pub visualization_type: Option<String>,
}

pub mod visualization_type {
    pub const AUTO: &str = "auto";
    pub const FACET_TABLE: &str = "facet_table";
    pub const WORD_CLOUD: &str = "word_cloud";
    pub const MAP: &str = "map";
}
