//! Assembles a parameterized `WHERE` clause from a base query and a list of
//! equality filters.
//!
//! ```
//! use querybuilder::QueryBuilder;
//!
//! let mut qb = QueryBuilder::new("select * from channels").unwrap();
//! qb.append_criterion("name", "test");
//! qb.append_criterion("nb_partitions", 6);
//!
//! let (sql, params) = qb.build();
//! assert_eq!(sql, "select * from channels where name = $1 and nb_partitions = $2");
//! assert_eq!(params.len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod macros;
pub mod options;
#[cfg(feature = "postgres")]
pub mod params;
pub mod renderer;


pub use builder::{Criterion, QueryBuilder};
pub use error::QueryBuilderError;
pub use model::core::value::Value;
pub use options::{QueryBuilderOption, with_kv_criteria, with_sorted_kv_criteria};
