//! Binds a built value sequence through `tokio-postgres`.

use model::core::value::Value;
use tokio_postgres::types::ToSql;

pub struct PgParam(Box<dyn ToSql + Sync + Send>);

impl PgParam {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Int(v) => PgParam(Box::new(v)),
            Value::Float(v) => PgParam(Box::new(v)),
            Value::String(v) => PgParam(Box::new(v)),
            Value::Boolean(v) => PgParam(Box::new(v)),
            Value::Bytes(v) => PgParam(Box::new(v)),
            Value::Null => PgParam(Box::new(Option::<String>::None)),
        }
    }
}

impl AsRef<dyn ToSql + Sync> for PgParam {
    fn as_ref(&self) -> &(dyn ToSql + Sync + 'static) {
        &*self.0
    }
}

/// Owns the converted parameters so that borrowed slices can be handed to
/// `Client::query` and friends.
///
/// ```no_run
/// # async fn run(client: &tokio_postgres::Client) -> Result<(), tokio_postgres::Error> {
/// use querybuilder::{QueryBuilder, params::PgParamStore};
///
/// let mut qb = QueryBuilder::new("select * from channels").unwrap();
/// qb.append_criterion("name", "test");
/// let (sql, values) = qb.build();
///
/// let store = PgParamStore::from_values(values);
/// let rows = client.query(sql.as_str(), &store.as_refs()).await?;
/// # let _ = rows;
/// # Ok(())
/// # }
/// ```
pub struct PgParamStore {
    pub params: Vec<PgParam>,
}

impl PgParamStore {
    pub fn from_values(values: Vec<Value>) -> Self {
        Self {
            params: values.into_iter().map(PgParam::from_value).collect(),
        }
    }

    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|param| param.as_ref())
            .collect::<Vec<_>>()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
