use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationType {
    Auto,
    FacetTable,
    WordCloud,
    Map,
    /// A value this client does not know yet, kept as sent.
    #[serde(untagged)]
    Unrecognized(String),
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSettingsFieldsShownBody {
    pub use_passage: Option<bool>,
    pub field: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSettingsFieldsShownTitle {
    pub field: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSettingsFieldsShown {
    pub body: Option<ComponentSettingsFieldsShownBody>,
    pub title: Option<ComponentSettingsFieldsShownTitle>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSettingsAggregation {
    pub name: Option<String>,
    pub label: Option<String>,
    pub multiple_selections_allowed: Option<bool>,
    pub visualization_type: Option<VisualizationType>,
}

/// Display settings of the tooling UI for a project.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentSettingsResponse {
    pub fields_shown: Option<ComponentSettingsFieldsShown>,
    pub autocomplete: Option<bool>,
    pub structured_search: Option<bool>,
    pub results_per_page: Option<i64>,
    pub aggregations: Option<Vec<ComponentSettingsAggregation>>,
}
