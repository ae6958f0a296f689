//! The query builder: a base query plus an ordered list of equality filters.

use crate::{
    error::QueryBuilderError,
    options::QueryBuilderOption,
    renderer::{Render, Renderer},
};
use model::core::value::Value;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// One equality filter: `name = <value>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    name: String,
    value: Value,
}

impl Criterion {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Render for Criterion {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.name);
        r.sql.push_str(" = ");
        r.add_param(self.value.clone());
    }
}

/// Builds `<base> where a = $1 and b = $2 ...` together with the values to
/// bind, in placeholder order.
///
/// The builder is meant to be owned by a single task. Appending takes
/// `&mut self`, so sharing one across threads requires external locking.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    base_query: String,
    criteria: Vec<Criterion>,
}

impl QueryBuilder {
    /// Creates a builder with no criteria.
    pub fn new(base_query: impl Into<String>) -> Result<Self, QueryBuilderError> {
        Self::with_options(base_query, std::iter::empty())
    }

    /// Creates a builder and applies `options` in the order given.
    ///
    /// Fails with [`QueryBuilderError::EmptyBaseQuery`] if `base_query` is
    /// empty, in which case none of the options are applied.
    pub fn with_options(
        base_query: impl Into<String>,
        options: impl IntoIterator<Item = QueryBuilderOption>,
    ) -> Result<Self, QueryBuilderError> {
        let base_query = base_query.into();
        if base_query.is_empty() {
            warn!("Rejected query builder with an empty base query");
            return Err(QueryBuilderError::EmptyBaseQuery);
        }

        let mut qb = Self {
            base_query,
            criteria: Vec::new(),
        };

        for option in options {
            qb.apply(option);
        }

        debug!(
            base_query = %qb.base_query,
            criteria = qb.criteria.len(),
            "Created query builder"
        );
        Ok(qb)
    }

    fn apply(&mut self, option: QueryBuilderOption) {
        match option {
            QueryBuilderOption::KvCriteria(pairs) => {
                for (name, value) in pairs {
                    self.append_criterion(name, value);
                }
            }
        }
    }

    /// Adds a filter at the end of the list. Names are neither validated nor
    /// deduplicated.
    pub fn append_criterion(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let criterion = Criterion::new(name, value);
        trace!(
            column = criterion.name(),
            value_type = criterion.value().type_name(),
            position = self.criteria.len(),
            "Appended criterion"
        );
        self.criteria.push(criterion);
    }

    /// Renders the query and collects the values to bind.
    ///
    /// Does not touch the criteria, so it can be called again after more
    /// criteria are appended.
    pub fn build(&self) -> (String, Vec<Value>) {
        let mut r = Renderer::new(&self.base_query);

        if !self.criteria.is_empty() {
            r.sql.push_str(" where ");
            for (i, criterion) in self.criteria.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(" and ");
                }
                criterion.render(&mut r);
            }
        }

        debug!(
            criteria = self.criteria.len(),
            params = r.params.len(),
            "Built query"
        );
        r.finish()
    }

    pub fn base_query(&self) -> &str {
        &self.base_query
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_base_query() {
        assert_eq!(
            QueryBuilder::new("").unwrap_err(),
            QueryBuilderError::EmptyBaseQuery
        );
    }

    #[test]
    fn test_whitespace_base_query_is_accepted() {
        let qb = QueryBuilder::new(" ").unwrap();
        assert_eq!(qb.build(), (" ".to_string(), vec![]));
    }

    #[test]
    fn test_criterion_render() {
        let mut r = Renderer::new("");
        Criterion::new("id", 42).render(&mut r);
        assert_eq!(r.finish(), ("id = $1".to_string(), vec![Value::Int(42)]));
    }

    #[test]
    fn test_accessors() {
        let mut qb = QueryBuilder::new("select * from channels").unwrap();
        assert!(qb.is_empty());

        qb.append_criterion("name", "test");
        assert_eq!(qb.base_query(), "select * from channels");
        assert_eq!(qb.len(), 1);
        assert_eq!(qb.criteria()[0].name(), "name");
        assert_eq!(qb.criteria()[0].value(), &Value::from("test"));
    }

    #[test]
    fn test_criterion_serde_round_trip() {
        let criterion = Criterion::new("nb_partitions", 6);
        let json = serde_json::to_string(&criterion).unwrap();
        assert_eq!(json, r#"{"name":"nb_partitions","value":{"Int":6}}"#);

        let back: Criterion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, criterion);
    }
}
