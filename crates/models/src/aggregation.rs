use serde::de::{self, DeserializeOwned};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// An aggregation produced by Discovery, selected by the wire field `type`.
///
/// Discriminators the crate does not know decode to [`QueryAggregation::Unknown`]
/// instead of failing the whole response. The raw object is kept, `type`
/// included, so it serializes back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryAggregation {
    Term(QueryTermAggregation),
    GroupBy(QueryGroupByAggregation),
    Histogram(QueryHistogramAggregation),
    Timeslice(QueryTimesliceAggregation),
    Nested(QueryNestedAggregation),
    Filter(QueryFilterAggregation),
    Min(QueryCalculationAggregation),
    Max(QueryCalculationAggregation),
    Average(QueryCalculationAggregation),
    Sum(QueryCalculationAggregation),
    UniqueCount(QueryCalculationAggregation),
    TopHits(QueryTopHitsAggregation),
    Pair(QueryAggregationQueryPairAggregation),
    Trend(QueryAggregationQueryTrendAggregation),
    Topic(QueryAggregationQueryTopicAggregation),
    Unknown(Map<String, Value>),
}

impl QueryAggregation {
    /// The wire discriminator of this variant. For an unknown aggregation this
    /// is the raw `type` the service sent.
    pub fn kind(&self) -> &str {
        match self {
            Self::Term(_) => "term",
            Self::GroupBy(_) => "group_by",
            Self::Histogram(_) => "histogram",
            Self::Timeslice(_) => "timeslice",
            Self::Nested(_) => "nested",
            Self::Filter(_) => "filter",
            Self::Min(_) => "min",
            Self::Max(_) => "max",
            Self::Average(_) => "average",
            Self::Sum(_) => "sum",
            Self::UniqueCount(_) => "unique_count",
            Self::TopHits(_) => "top_hits",
            Self::Pair(_) => "pair",
            Self::Trend(_) => "trend",
            Self::Topic(_) => "topic",
            Self::Unknown(raw) => raw.get("type").and_then(Value::as_str).unwrap_or_default(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// The raw discriminator of an aggregation this crate does not model
    pub fn unknown_type(&self) -> Option<&str> {
        match self {
            Self::Unknown(_) => Some(self.kind()),
            _ => None,
        }
    }

    /// The calculation payload for `min`, `max`, `average`, `sum` and `unique_count`
    pub fn as_calculation(&self) -> Option<&QueryCalculationAggregation> {
        match self {
            Self::Min(c)
            | Self::Max(c)
            | Self::Average(c)
            | Self::Sum(c)
            | Self::UniqueCount(c) => Some(c),
            _ => None,
        }
    }

    /// Direct children, whether held on the aggregation itself or on its results
    pub fn sub_aggregations(&self) -> Vec<&QueryAggregation> {
        fn collect<'a>(
            nested: &'a Option<Vec<QueryAggregation>>,
            out: &mut Vec<&'a QueryAggregation>,
        ) {
            out.extend(nested.iter().flatten());
        }

        let mut children = Vec::new();
        let mut add = |nested| collect(nested, &mut children);
        match self {
            Self::Term(a) => a.results.iter().flatten().for_each(|r| add(&r.aggregations)),
            Self::GroupBy(a) => a.results.iter().flatten().for_each(|r| add(&r.aggregations)),
            Self::Histogram(a) => a.results.iter().flatten().for_each(|r| add(&r.aggregations)),
            Self::Timeslice(a) => a.results.iter().flatten().for_each(|r| add(&r.aggregations)),
            Self::Nested(a) => add(&a.aggregations),
            Self::Filter(a) => add(&a.aggregations),
            Self::Pair(a) => a.results.iter().flatten().for_each(|r| add(&r.aggregations)),
            Self::Trend(a) => a.results.iter().flatten().for_each(|r| add(&r.aggregations)),
            Self::Topic(a) => a.results.iter().flatten().for_each(|r| add(&r.aggregations)),
            Self::Min(_)
            | Self::Max(_)
            | Self::Average(_)
            | Self::Sum(_)
            | Self::UniqueCount(_)
            | Self::TopHits(_)
            | Self::Unknown(_) => {}
        }
        children
    }

    /// Depth-first, pre-order traversal of this aggregation and everything below it
    pub fn walk<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a QueryAggregation),
    {
        visit(self);
        for child in self.sub_aggregations() {
            child.walk(visit);
        }
    }
}

fn payload<T: DeserializeOwned>(object: Map<String, Value>) -> serde_json::Result<T> {
    serde_json::from_value(Value::Object(object))
}

fn tagged<T: Serialize>(kind: &str, payload: &T) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(payload)?;
    if let Value::Object(object) = &mut value {
        object.insert("type".to_string(), Value::String(kind.to_string()));
    }
    Ok(value)
}

impl<'de> Deserialize<'de> for QueryAggregation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let kind = match object.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(_) => return Err(de::Error::custom("aggregation `type` must be a string")),
            None => return Err(de::Error::missing_field("type")),
        };

        let aggregation = match kind.as_str() {
            "term" => payload(object).map(Self::Term),
            "group_by" => payload(object).map(Self::GroupBy),
            "histogram" => payload(object).map(Self::Histogram),
            "timeslice" => payload(object).map(Self::Timeslice),
            "nested" => payload(object).map(Self::Nested),
            "filter" => payload(object).map(Self::Filter),
            "min" => payload(object).map(Self::Min),
            "max" => payload(object).map(Self::Max),
            "average" => payload(object).map(Self::Average),
            "sum" => payload(object).map(Self::Sum),
            "unique_count" => payload(object).map(Self::UniqueCount),
            "top_hits" => payload(object).map(Self::TopHits),
            "pair" => payload(object).map(Self::Pair),
            "trend" => payload(object).map(Self::Trend),
            "topic" => payload(object).map(Self::Topic),
            _ => Ok(Self::Unknown(object)),
        };
        aggregation.map_err(|e| de::Error::custom(format!("invalid `{}` aggregation: {}", kind, e)))
    }
}

impl Serialize for QueryAggregation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let kind = self.kind();
        let value = match self {
            Self::Unknown(raw) => return raw.serialize(serializer),
            Self::Term(a) => tagged(kind, a),
            Self::GroupBy(a) => tagged(kind, a),
            Self::Histogram(a) => tagged(kind, a),
            Self::Timeslice(a) => tagged(kind, a),
            Self::Nested(a) => tagged(kind, a),
            Self::Filter(a) => tagged(kind, a),
            Self::Min(a)
            | Self::Max(a)
            | Self::Average(a)
            | Self::Sum(a)
            | Self::UniqueCount(a) => tagged(kind, a),
            Self::TopHits(a) => tagged(kind, a),
            Self::Pair(a) => tagged(kind, a),
            Self::Trend(a) => tagged(kind, a),
            Self::Topic(a) => tagged(kind, a),
        };
        value.map_err(S::Error::custom)?.serialize(serializer)
    }
}

/// Returns results for the specified field.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryTermAggregation {
    /// The field in the document where the values come from.
    pub field: Option<String>,
    /// The number of results returned. Not returned if `relevancy:true` is
    /// specified in the request.
    pub count: Option<i64>,
    /// Identifier specified in the query request of this aggregation.
    pub name: Option<String>,
    pub results: Option<Vec<QueryTermAggregationResult>>,
}

/// Top value result for the `term` aggregation.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryTermAggregationResult {
    /// Value of the field with a nonzero frequency in the document set.
    pub key: Option<String>,
    /// Number of documents that contain the `key`.
    pub matching_results: Option<i64>,
    /// The relevancy score for this result. Returned only if `relevancy:true`
    /// is specified in the request.
    pub relevancy: Option<f64>,
    /// Number of documents in the collection that contain the term in the
    /// specified field.
    pub total_matching_documents: Option<i64>,
    /// Number of documents that are estimated to match the query and also meet
    /// the condition.
    pub estimated_matching_results: Option<f64>,
    /// An array of subaggregations.
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Separates document results into groups that meet the conditions you specify.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryGroupByAggregation {
    pub results: Option<Vec<QueryGroupByAggregationResult>>,
}

/// Result group for the `group_by` aggregation.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryGroupByAggregationResult {
    /// The condition that is met by the documents in this group. For example,
    /// `YEARTXT<2000`.
    pub key: Option<String>,
    pub matching_results: Option<i64>,
    pub relevancy: Option<f64>,
    pub total_matching_documents: Option<i64>,
    pub estimated_matching_results: Option<f64>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Numeric interval segments to categorize documents by using field values
/// from a single numeric field to describe the category.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryHistogramAggregation {
    /// The numeric field name used to create the histogram.
    pub field: Option<String>,
    /// The size of the sections that the results are split into.
    pub interval: Option<i64>,
    pub name: Option<String>,
    pub results: Option<Vec<QueryHistogramAggregationResult>>,
}

/// Histogram numeric interval result.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryHistogramAggregationResult {
    /// The value of the upper bound for the numeric segment.
    pub key: Option<i64>,
    pub matching_results: Option<i64>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// A specialized histogram aggregation that uses dates to create interval segments.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryTimesliceAggregation {
    /// The date field name used to create the timeslice.
    pub field: Option<String>,
    /// The date interval value. Valid values are seconds, minutes, hours, days,
    /// weeks, and years.
    pub interval: Option<String>,
    pub name: Option<String>,
    pub results: Option<Vec<QueryTimesliceAggregationResult>>,
}

/// A timeslice interval segment.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryTimesliceAggregationResult {
    /// String date value of the upper bound for the timeslice interval in
    /// ISO-8601 format.
    pub key_as_string: Option<String>,
    /// Numeric date value of the upper bound for the timeslice interval in
    /// UNIX milliseconds since epoch.
    pub key: Option<i64>,
    pub matching_results: Option<i64>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// A restriction that alters the document set that is used by the
/// aggregations that it precedes. Subsequent aggregations are applied to
/// nested documents from the specified field.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryNestedAggregation {
    /// The path to the document field to scope subsequent aggregations to.
    pub path: Option<String>,
    /// Number of nested documents found in the specified field.
    pub matching_results: Option<i64>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// A modifier that narrows the document set of the subaggregations it
/// precedes.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryFilterAggregation {
    /// The filter that is written in Discovery Query Language syntax and
    /// applied to the documents before subaggregations are run.
    #[serde(rename = "match")]
    pub filter_match: Option<String>,
    /// Number of documents that match the filter.
    pub matching_results: Option<i64>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Returns a scalar calculation across all documents for the field specified.
/// Possible calculations include min, max, sum, average, and unique_count.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryCalculationAggregation {
    /// The field to perform the calculation on.
    pub field: Option<String>,
    /// The value of the calculation.
    pub value: Option<f64>,
}

/// Returns the top documents ranked by the score of the query.
///
/// Older payloads carry a `results` array instead of a single `hits` object;
/// both are kept.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryTopHitsAggregation {
    /// The number of documents to return.
    pub size: Option<i64>,
    pub name: Option<String>,
    pub hits: Option<QueryTopHitsAggregationResult>,
    pub results: Option<Vec<QueryTopHitsAggregationResult>>,
}

/// The `top_hits` aggregation under the name the generated SDKs give its
/// polymorphic subtype.
pub type QueryAggregationQueryTopHitsAggregation = QueryTopHitsAggregation;

/// A query response that contains the matching documents for the preceding aggregations.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryTopHitsAggregationResult {
    /// Number of matching results.
    pub matching_results: Option<i64>,
    /// An array of the document results in an ordered list.
    pub hits: Option<Vec<Map<String, Value>>>,
}

/// Calculates relevancy values using combinations of document sets from
/// results of the specified pair of aggregations.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryAggregationQueryPairAggregation {
    /// Array of aggregations.
    pub results: Option<Vec<QueryPairAggregationResult>>,
}

/// Result for the `pair` aggregation.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryPairAggregationResult {
    /// Array of subaggregations of type `term` or `group_by`.
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Detects sharp and unexpected changes in the frequency of a facet or
/// facet value over time based on the past history of frequency changes.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryAggregationQueryTrendAggregation {
    /// Array of subaggregations of type `term` or `group_by` and `timeslice`.
    pub results: Option<Vec<QueryTrendAggregationResult>>,
}

/// Result for the `trend` aggregation.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryTrendAggregationResult {
    pub key: Option<String>,
    pub matching_results: Option<i64>,
    pub aggregations: Option<Vec<QueryAggregation>>,
}

/// Detects how much the frequency of various facet values deviates from the
/// expected average based on the past frequencies.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryAggregationQueryTopicAggregation {
    /// Array of subaggregations of type `term` or `group_by` and `timeslice`.
    pub results: Option<Vec<QueryTopicAggregationResult>>,
}

/// Result for the `topic` aggregation.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryTopicAggregationResult {
    pub aggregations: Option<Vec<QueryAggregation>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiscoveryModel;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: Value) -> QueryAggregation {
        QueryAggregation::from_value(value).unwrap()
    }

    #[test]
    fn test_dispatch_on_type() {
        let cases = [
            (json!({"type": "term", "field": "author", "results": []}), "term"),
            (json!({"type": "group_by", "results": []}), "group_by"),
            (json!({"type": "histogram", "field": "price", "interval": 10}), "histogram"),
            (json!({"type": "timeslice", "field": "date", "interval": "1d"}), "timeslice"),
            (json!({"type": "nested", "path": "enriched_text.entities"}), "nested"),
            (json!({"type": "filter", "match": "rating>3"}), "filter"),
            (json!({"type": "min", "field": "price", "value": 1.5}), "min"),
            (json!({"type": "max", "field": "price", "value": 9}), "max"),
            (json!({"type": "average", "field": "price", "value": 4.2}), "average"),
            (json!({"type": "sum", "field": "price", "value": 120.0}), "sum"),
            (json!({"type": "unique_count", "field": "author", "value": 7}), "unique_count"),
            (json!({"type": "top_hits", "size": 3}), "top_hits"),
            (json!({"type": "pair", "results": []}), "pair"),
            (json!({"type": "trend", "results": []}), "trend"),
            (json!({"type": "topic", "results": []}), "topic"),
        ];

        for (payload, expected) in cases {
            assert_eq!(parse(payload).kind(), expected);
        }
    }

    #[test]
    fn test_calculation_variant() {
        let aggregation = parse(json!({"type": "sum", "field": "price", "value": 120.5}));

        match &aggregation {
            QueryAggregation::Sum(calc) => {
                assert_eq!(calc.field.as_deref(), Some("price"));
                assert_eq!(calc.value, Some(120.5));
            }
            other => panic!("expected sum, got {:?}", other),
        }
        assert!(aggregation.as_calculation().is_some());
    }

    #[test]
    fn test_integer_value_accepted_for_calculation() {
        let aggregation = parse(json!({"type": "max", "field": "year", "value": 2024}));
        assert_eq!(aggregation.as_calculation().and_then(|c| c.value), Some(2024.0));
    }

    #[test]
    fn test_serialization_keeps_discriminator() {
        let aggregation = QueryAggregation::UniqueCount(QueryCalculationAggregation {
            field: Some("author".to_string()),
            value: Some(7.0),
        });

        let value = serde_json::to_value(&aggregation).unwrap();
        assert_eq!(value, json!({"type": "unique_count", "field": "author", "value": 7.0}));
        assert_eq!(parse(value), aggregation);
    }

    #[test]
    fn test_filter_match_is_renamed() {
        let aggregation = parse(json!({
            "type": "filter",
            "match": "rating>3",
            "matching_results": 4
        }));
        match aggregation {
            QueryAggregation::Filter(filter) => {
                assert_eq!(filter.filter_match.as_deref(), Some("rating>3"));
                assert_eq!(filter.matching_results, Some(4));
            }
            other => panic!("expected filter, got {:?}", other),
        }
    }

    #[test]
    fn test_top_hits_shapes() {
        let with_hits = parse(json!({
            "type": "top_hits",
            "size": 2,
            "hits": {"matching_results": 10, "hits": [{"document_id": "d1"}, {"document_id": "d2"}]}
        }));
        let with_results = parse(json!({
            "type": "top_hits",
            "results": [{"matching_results": 1, "hits": [{"document_id": "d3"}]}]
        }));

        let QueryAggregation::TopHits(top) = with_hits else {
            panic!("expected top_hits");
        };
        assert_eq!(top.size, Some(2));
        let hits = top.hits.unwrap();
        assert_eq!(hits.matching_results, Some(10));
        assert_eq!(hits.hits.unwrap()[1]["document_id"], json!("d2"));

        let QueryAggregation::TopHits(top) = with_results else {
            panic!("expected top_hits");
        };
        assert_eq!(top.results.unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_type_does_not_fail() {
        let aggregation = parse(json!({"type": "significant_terms", "field": "x"}));
        assert!(aggregation.is_unknown());
        assert_eq!(aggregation.kind(), "significant_terms");
        assert_eq!(aggregation.unknown_type(), Some("significant_terms"));
        assert!(aggregation.sub_aggregations().is_empty());
    }

    #[test]
    fn test_unknown_type_round_trips_exactly() {
        let payload = json!({
            "type": "significant_terms",
            "field": "x",
            "matching_results": 3,
            "results": [{"key": "k"}]
        });

        let aggregation = parse(payload.clone());
        assert_eq!(serde_json::to_value(&aggregation).unwrap(), payload);

        let rendered = aggregation.to_json().unwrap();
        assert_eq!(QueryAggregation::from_json(&rendered).unwrap(), aggregation);
    }

    #[test]
    fn test_known_types_are_not_unknown() {
        let aggregation = parse(json!({"type": "term", "field": "author"}));
        assert!(!aggregation.is_unknown());
        assert_eq!(aggregation.unknown_type(), None);
    }

    #[test]
    fn test_missing_type_fails() {
        let err = QueryAggregation::from_value(json!({"field": "x"})).unwrap_err();
        assert!(format!("{:#}", err).contains("type"));
    }

    #[test]
    fn test_non_string_type_fails() {
        assert!(QueryAggregation::from_value(json!({"type": 3, "field": "x"})).is_err());
    }

    #[test]
    fn test_bad_payload_names_the_discriminator() {
        let err = QueryAggregation::from_value(json!({"type": "histogram", "interval": "wide"}))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("`histogram`"));
    }

    #[test]
    fn test_nested_tree_walk() {
        let aggregation = parse(json!({
            "type": "nested",
            "path": "enriched_text.entities",
            "matching_results": 20,
            "aggregations": [
                {
                    "type": "term",
                    "field": "enriched_text.entities.text",
                    "results": [
                        {"key": "IBM", "matching_results": 5, "aggregations": [
                            {"type": "average", "field": "rating", "value": 4.0}
                        ]},
                        {"key": "Watson", "matching_results": 3}
                    ]
                },
                {"type": "trend", "results": [
                    {"key": "2023", "matching_results": 2, "aggregations": [
                        {"type": "timeslice", "field": "date", "interval": "1y"}
                    ]}
                ]}
            ]
        }));

        assert_eq!(aggregation.sub_aggregations().len(), 2);

        let mut kinds = Vec::new();
        aggregation.walk(&mut |a| kinds.push(a.kind()));
        assert_eq!(kinds, vec!["nested", "term", "average", "trend", "timeslice"]);
    }

    #[test]
    fn test_pair_results_hold_subaggregations() {
        let aggregation = parse(json!({
            "type": "pair",
            "results": [{"aggregations": [
                {"type": "term", "field": "a"},
                {"type": "group_by"}
            ]}]
        }));

        let kinds: Vec<_> = aggregation.sub_aggregations().into_iter().map(|a| a.kind()).collect();
        assert_eq!(kinds, vec!["term", "group_by"]);
    }
}
