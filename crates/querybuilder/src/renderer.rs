//! Defines the rendering trait and the context that accumulates SQL and
//! bound parameters.

use model::core::value::Value;

/// A trait for anything that can write itself into a parameterized query.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// Holds the state while a query is being rendered.
///
/// Every value goes through [`Renderer::add_param`], which is the only place
/// placeholders are emitted, so placeholder `$k` always refers to
/// `params[k - 1]`.
#[derive(Debug, Default)]
pub struct Renderer {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Renderer {
    /// Starts a renderer whose output begins with `sql`, verbatim.
    pub fn new(sql: &str) -> Self {
        Self {
            sql: sql.to_string(),
            params: Vec::new(),
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = placeholder(self.params.len() - 1);
        self.sql.push_str(&placeholder);
    }
}

/// Returns the positional placeholder for a 0-based parameter index.
pub fn placeholder(index: usize) -> String {
    format!("${}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_one_based() {
        assert_eq!(placeholder(0), "$1");
        assert_eq!(placeholder(9), "$10");
    }

    #[test]
    fn test_add_param_numbers_in_order() {
        let mut r = Renderer::new("select 1");
        r.sql.push_str(" where a = ");
        r.add_param(Value::Int(1));
        r.sql.push_str(" and b = ");
        r.add_param(Value::Null);

        let (sql, params) = r.finish();
        assert_eq!(sql, "select 1 where a = $1 and b = $2");
        assert_eq!(params, vec![Value::Int(1), Value::Null]);
    }
}
