//! Query aggregation results.
//!
//! The service returns aggregations as a list of JSON objects whose `type`
//! member selects the shape of the rest of the object. Results of most
//! aggregation kinds can carry further `aggregations`, so decoding recurses.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

const DISCRIMINATOR: &str = "type";

fn decode_error(message: impl std::fmt::Display) -> serde_json::Error {
    <serde_json::Error as serde::de::Error>::custom(message)
}

/// One aggregation of a query response, dispatched on its `type` member.
///
/// Discriminators this crate does not know are kept verbatim in `Unknown`
/// and encode back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryAggregation {
    Term(QueryTermAggregation),
    GroupBy(QueryGroupByAggregation),
    Histogram(QueryHistogramAggregation),
    Timeslice(QueryTimesliceAggregation),
    Nested(QueryNestedAggregation),
    Filter(QueryFilterAggregation),
    Calculation(QueryCalculationAggregation),
    TopHits(QueryTopHitsAggregation),
    Pair(QueryPairAggregation),
    Trend(QueryTrendAggregation),
    Topic(QueryTopicAggregation),
    Unknown(Value),
}

impl QueryAggregation {
    /// The wire discriminator of this aggregation.
    pub fn kind(&self) -> &str {
        match self {
            QueryAggregation::Term(_) => "term",
            QueryAggregation::GroupBy(_) => "group_by",
            QueryAggregation::Histogram(_) => "histogram",
            QueryAggregation::Timeslice(_) => "timeslice",
            QueryAggregation::Nested(_) => "nested",
            QueryAggregation::Filter(_) => "filter",
            QueryAggregation::Calculation(c) => c.kind.as_str(),
            QueryAggregation::TopHits(_) => "top_hits",
            QueryAggregation::Pair(_) => "pair",
            QueryAggregation::Trend(_) => "trend",
            QueryAggregation::Topic(_) => "topic",
            QueryAggregation::Unknown(raw) => raw
                .get(DISCRIMINATOR)
                .and_then(Value::as_str)
                .unwrap_or_default(),
        }
    }

    /// User supplied name, for the kinds that accept one.
    pub fn name(&self) -> Option<&str> {
        match self {
            QueryAggregation::Term(a) => a.name.as_deref(),
            QueryAggregation::Histogram(a) => a.name.as_deref(),
            QueryAggregation::Timeslice(a) => a.name.as_deref(),
            QueryAggregation::TopHits(a) => a.name.as_deref(),
            _ => None,
        }
    }

    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let kind = match value.get(DISCRIMINATOR) {
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => {
                return Err(decode_error(format!(
                    "aggregation `type` must be a string, got {}",
                    other
                )))
            }
            None => {
                return Err(decode_error(
                    "aggregation object is missing its `type` member",
                ))
            }
        };

        let aggregation = match kind.as_str() {
            "term" => QueryAggregation::Term(serde_json::from_value(value)?),
            "group_by" => QueryAggregation::GroupBy(serde_json::from_value(value)?),
            "histogram" => QueryAggregation::Histogram(serde_json::from_value(value)?),
            "timeslice" => QueryAggregation::Timeslice(serde_json::from_value(value)?),
            "nested" => QueryAggregation::Nested(serde_json::from_value(value)?),
            "filter" => QueryAggregation::Filter(serde_json::from_value(value)?),
            "min" | "max" | "sum" | "average" | "unique_count" => {
                QueryAggregation::Calculation(serde_json::from_value(value)?)
            }
            "top_hits" => QueryAggregation::TopHits(serde_json::from_value(value)?),
            "pair" => QueryAggregation::Pair(serde_json::from_value(value)?),
            "trend" => QueryAggregation::Trend(serde_json::from_value(value)?),
            "topic" => QueryAggregation::Topic(serde_json::from_value(value)?),
            _ => {
                tracing::debug!("Keeping aggregation with unrecognized type '{}' as raw JSON", kind);
                QueryAggregation::Unknown(value)
            }
        };
        Ok(aggregation)
    }

    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        let body = match self {
            QueryAggregation::Term(a) => serde_json::to_value(a)?,
            QueryAggregation::GroupBy(a) => serde_json::to_value(a)?,
            QueryAggregation::Histogram(a) => serde_json::to_value(a)?,
            QueryAggregation::Timeslice(a) => serde_json::to_value(a)?,
            QueryAggregation::Nested(a) => serde_json::to_value(a)?,
            QueryAggregation::Filter(a) => serde_json::to_value(a)?,
            QueryAggregation::Calculation(a) => serde_json::to_value(a)?,
            QueryAggregation::TopHits(a) => serde_json::to_value(a)?,
            QueryAggregation::Pair(a) => serde_json::to_value(a)?,
            QueryAggregation::Trend(a) => serde_json::to_value(a)?,
            QueryAggregation::Topic(a) => serde_json::to_value(a)?,
            QueryAggregation::Unknown(raw) => return Ok(raw.clone()),
        };

        let mut object: Map<String, Value> = match body {
            Value::Object(object) => object,
            other => {
                return Err(decode_error(format!(
                    "aggregation encoded to a non-object value: {}",
                    other
                )))
            }
        };
        object.insert(
            DISCRIMINATOR.to_string(),
            Value::String(self.kind().to_string()),
        );
        Ok(Value::Object(object))
    }
}

impl Serialize for QueryAggregation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for QueryAggregation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        QueryAggregation::from_value(value).map_err(D::Error::custom)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTermAggregation {
    pub field: String,
    pub count: Option<i64>,
    pub name: Option<String>,
    pub results: Option<Vec<QueryTermAggregationResult>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTermAggregationResult {
    pub key: String,
    pub matching_results: i64,
    pub relevancy: Option<f64>,
    pub total_matching_documents: Option<i64>,
    pub estimated_matching_results: Option<f64>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryGroupByAggregation {
    pub results: Option<Vec<QueryGroupByAggregationResult>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryGroupByAggregationResult {
    pub key: String,
    pub matching_results: i64,
    pub relevancy: Option<f64>,
    pub total_matching_documents: Option<i64>,
    pub estimated_matching_results: Option<f64>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryHistogramAggregation {
    pub field: String,
    pub interval: i64,
    pub name: Option<String>,
    pub results: Option<Vec<QueryHistogramAggregationResult>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryHistogramAggregationResult {
    pub key: i64,
    pub matching_results: i64,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTimesliceAggregation {
    pub field: String,
    pub interval: String,
    pub name: Option<String>,
    pub results: Option<Vec<QueryTimesliceAggregationResult>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTimesliceAggregationResult {
    pub key_as_string: String,
    pub key: i64,
    pub matching_results: i64,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryNestedAggregation {
    pub path: String,
    pub matching_results: i64,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFilterAggregation {
    pub r#match: String,
    pub matching_results: i64,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// The metric computed by a calculation aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    Min,
    Max,
    Sum,
    Average,
    UniqueCount,
}

impl CalculationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationKind::Min => "min",
            CalculationKind::Max => "max",
            CalculationKind::Sum => "sum",
            CalculationKind::Average => "average",
            CalculationKind::UniqueCount => "unique_count",
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryCalculationAggregation {
    #[serde(rename = "type")]
    pub kind: CalculationKind,
    pub field: String,
    pub value: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTopHitsAggregationResult {
    pub matching_results: i64,
    pub hits: Option<Vec<Map<String, Value>>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTopHitsAggregation {
    pub size: i64,
    pub name: Option<String>,
    pub hits: Option<QueryTopHitsAggregationResult>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPairAggregationResult {
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryPairAggregation {
    pub first: Option<String>,
    pub second: Option<String>,
    pub show_estimated_matching_results: Option<bool>,
    pub show_total_matching_documents: Option<bool>,
    pub results: Option<Vec<QueryPairAggregationResult>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTrendAggregationResult {
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTrendAggregation {
    pub facet: Option<String>,
    pub time_segments: Option<String>,
    pub show_estimated_matching_results: Option<bool>,
    pub show_total_matching_documents: Option<bool>,
    pub results: Option<Vec<QueryTrendAggregationResult>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTopicAggregationResult {
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryTopicAggregation {
    pub facet: Option<String>,
    pub time_segments: Option<String>,
    pub show_estimated_matching_results: Option<bool>,
    pub show_total_matching_documents: Option<bool>,
    pub results: Option<Vec<QueryTopicAggregationResult>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_term_aggregation_with_nested_results() {
        let payload = json!({
            "type": "term",
            "field": "enriched_text.entities.type",
            "count": 2,
            "name": "entity_types",
            "results": [{
                "key": "Organization",
                "matching_results": 17,
                "relevancy": 1.4,
                "aggregations": [{
                    "type": "histogram",
                    "field": "price",
                    "interval": 100,
                    "results": [{"key": 0, "matching_results": 4}]
                }]
            }]
        });

        let aggregation: QueryAggregation = serde_json::from_value(payload.clone()).unwrap();

        let QueryAggregation::Term(term) = &aggregation else {
            panic!("expected a term aggregation, got {:?}", aggregation);
        };
        assert_eq!(aggregation.name(), Some("entity_types"));
        let results = term.results.as_ref().unwrap();
        assert_eq!(results[0].matching_results, 17);
        let nested = results[0].aggregations.as_ref().unwrap();
        assert_eq!(nested[0].kind(), "histogram");
        assert!(matches!(&nested[0], QueryAggregation::Histogram(h) if h.interval == 100));

        assert_eq!(serde_json::to_value(&aggregation).unwrap(), payload);
    }

    #[test]
    fn test_calculation_kinds_share_one_shape() {
        for kind in ["min", "max", "sum", "average", "unique_count"] {
            let payload = json!({"type": kind, "field": "price", "value": 12.5});
            let aggregation: QueryAggregation = serde_json::from_value(payload.clone()).unwrap();

            assert!(matches!(aggregation, QueryAggregation::Calculation(_)));
            assert_eq!(aggregation.kind(), kind);
            assert_eq!(serde_json::to_value(&aggregation).unwrap(), payload);
        }
    }

    #[test]
    fn test_filter_and_nested_aggregations() {
        let payload = json!([
            {
                "type": "nested",
                "path": "enriched_text.entities",
                "matching_results": 40,
                "aggregations": [{
                    "type": "filter",
                    "match": "enriched_text.entities.type::Person",
                    "matching_results": 12
                }]
            },
            {
                "type": "timeslice",
                "field": "publication_date",
                "interval": "1d",
                "results": [{"key_as_string": "2023-01-01T00:00:00Z", "key": 1672531200000i64, "matching_results": 3}]
            }
        ]);

        let aggregations: Vec<QueryAggregation> = serde_json::from_value(payload.clone()).unwrap();

        let QueryAggregation::Nested(nested) = &aggregations[0] else {
            panic!("expected nested aggregation");
        };
        let inner = nested.aggregations.as_ref().unwrap();
        assert!(matches!(
            &inner[0],
            QueryAggregation::Filter(f) if f.r#match == "enriched_text.entities.type::Person"
        ));
        assert_eq!(aggregations[1].kind(), "timeslice");
        assert_eq!(serde_json::to_value(&aggregations).unwrap(), payload);
    }

    #[test]
    fn test_top_hits_and_pair_aggregations() {
        let payload = json!([
            {
                "type": "top_hits",
                "size": 1,
                "name": "best",
                "hits": {"matching_results": 9, "hits": [{"document_id": "doc-1", "title": "Intro"}]}
            },
            {
                "type": "pair",
                "first": "entities",
                "second": "keywords",
                "show_total_matching_documents": true,
                "results": [{"aggregations": [{"type": "group_by", "results": [{"key": "x", "matching_results": 1}]}]}]
            }
        ]);

        let aggregations: Vec<QueryAggregation> = serde_json::from_value(payload.clone()).unwrap();

        assert_eq!(aggregations[0].name(), Some("best"));
        let QueryAggregation::TopHits(top) = &aggregations[0] else {
            panic!("expected top_hits aggregation");
        };
        assert_eq!(top.hits.as_ref().unwrap().matching_results, 9);
        assert!(matches!(aggregations[1], QueryAggregation::Pair(_)));
        assert_eq!(serde_json::to_value(&aggregations).unwrap(), payload);
    }

    #[test]
    fn test_trend_and_topic_aggregations() {
        let payload = json!([
            {"type": "trend", "facet": "entities", "time_segments": "monthly", "results": [{"aggregations": []}]},
            {"type": "topic", "facet": "keywords", "show_estimated_matching_results": false}
        ]);

        let aggregations: Vec<QueryAggregation> = serde_json::from_value(payload.clone()).unwrap();

        assert!(matches!(aggregations[0], QueryAggregation::Trend(_)));
        assert!(matches!(aggregations[1], QueryAggregation::Topic(_)));
        assert_eq!(serde_json::to_value(&aggregations).unwrap(), payload);
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let payload = json!({"type": "percentile", "field": "price", "percents": [50, 99]});

        let aggregation: QueryAggregation = serde_json::from_value(payload.clone()).unwrap();

        assert_eq!(aggregation, QueryAggregation::Unknown(payload.clone()));
        assert_eq!(aggregation.kind(), "percentile");
        assert_eq!(serde_json::to_value(&aggregation).unwrap(), payload);
    }

    #[test]
    fn test_missing_or_invalid_discriminator_is_an_error() {
        let missing: Result<QueryAggregation, _> =
            serde_json::from_value(json!({"field": "price", "value": 1.0}));
        assert!(missing.is_err());

        let numeric: Result<QueryAggregation, _> = serde_json::from_value(json!({"type": 7}));
        assert!(numeric.is_err());
    }

    #[test]
    fn test_known_type_with_missing_required_member_is_an_error() {
        let result: Result<QueryAggregation, _> =
            serde_json::from_value(json!({"type": "histogram", "field": "price"}));
        assert!(result.is_err());
    }
}
