//! Options applied while a [`QueryBuilder`](crate::QueryBuilder) is being
//! constructed.

use model::core::value::Value;
use std::collections::HashMap;

/// A configuration step run once, in order, during construction.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryBuilderOption {
    /// Appends each `(name, value)` pair as a criterion, keeping the given order.
    KvCriteria(Vec<(String, Value)>),
}

/// Builds a [`QueryBuilderOption::KvCriteria`] from any ordered sequence of
/// pairs. The iteration order of `pairs` becomes the placeholder order.
pub fn with_kv_criteria<I, K, V>(pairs: I) -> QueryBuilderOption
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    QueryBuilderOption::KvCriteria(
        pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect(),
    )
}

/// Like [`with_kv_criteria`] but for an unordered map. Entries are sorted by
/// name so the rendered query is the same on every run.
pub fn with_sorted_kv_criteria<K, V>(map: HashMap<K, V>) -> QueryBuilderOption
where
    K: Into<String>,
    V: Into<Value>,
{
    let mut pairs = map
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect::<Vec<(String, Value)>>();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    QueryBuilderOption::KvCriteria(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_with_kv_criteria_keeps_order() {
        let opt = with_kv_criteria([("b", 1), ("a", 2)]);
        assert_eq!(
            opt,
            QueryBuilderOption::KvCriteria(vec![
                ("b".to_string(), Value::Int(1)),
                ("a".to_string(), Value::Int(2)),
            ])
        );
    }

    #[test]
    fn test_with_kv_criteria_from_btree_map() {
        let map = BTreeMap::from([("z", "last"), ("m", "mid")]);
        let QueryBuilderOption::KvCriteria(pairs) = with_kv_criteria(map);
        let names = pairs.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["m", "z"]);
    }

    #[test]
    fn test_with_sorted_kv_criteria_sorts_by_name() {
        let map = HashMap::from([
            ("nb_partitions", Value::Int(6)),
            ("name", Value::from("test")),
            ("enabled", Value::Boolean(true)),
        ]);
        let QueryBuilderOption::KvCriteria(pairs) = with_sorted_kv_criteria(map);
        let names = pairs.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["enabled", "name", "nb_partitions"]);
        assert_eq!(pairs[1].1, Value::from("test"));
    }
}
