//! Lookup scopes for placeholder resolution.

use serde_json::{Map, Value};

/// A stack of variable mappings, innermost last.
///
/// The bottom entry is the render context. Each repeating-section element
/// that is an object pushes its own mapping, whose keys shadow the enclosing
/// ones. Elements that are not objects contribute no keys and push nothing.
#[derive(Debug, Clone)]
pub(crate) struct Scopes<'a> {
    stack: Vec<&'a Map<String, Value>>,
}

impl<'a> Scopes<'a> {
    /// Create the scope stack for a render call.
    pub(crate) fn root(vars: &'a Map<String, Value>) -> Self {
        Self { stack: vec![vars] }
    }

    /// Enter one section element. Returns whether a mapping was pushed.
    pub(crate) fn enter(&mut self, element: &'a Value) -> bool {
        match element.as_object() {
            Some(vars) => {
                self.stack.push(vars);
                true
            }
            None => false,
        }
    }

    /// Leave the element entered last. The root is never removed.
    pub(crate) fn leave(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Resolve a key, searching outwards until a mapping defines it.
    pub(crate) fn lookup(&self, key: &str) -> Option<&'a Value> {
        self.stack.iter().rev().find_map(|vars| vars.get(key))
    }
}

/// Append the text form of a scalar value.
///
/// `null` renders as nothing. Arrays and objects have no scalar form and
/// also render as nothing.
pub(crate) fn push_scalar(out: &mut String, value: &Value) {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => {}
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scalar(value: Value) -> String {
        let mut out = String::new();
        push_scalar(&mut out, &value);
        out
    }

    #[test]
    fn test_scalar_coercion() {
        assert_eq!(scalar(json!("text")), "text");
        assert_eq!(scalar(json!(42)), "42");
        assert_eq!(scalar(json!(12.5)), "12.5");
        assert_eq!(scalar(json!(true)), "true");
        assert_eq!(scalar(json!(false)), "false");
        assert_eq!(scalar(Value::Null), "");
        assert_eq!(scalar(json!([1, 2])), "");
        assert_eq!(scalar(json!({"a": 1})), "");
    }

    #[test]
    fn test_child_shadows_parent() {
        let root_vars = json!({"a": "outer", "b": "outer-b"});
        let element = json!({"a": "inner"});
        let mut scopes = Scopes::root(root_vars.as_object().unwrap());
        assert!(scopes.enter(&element));

        assert_eq!(scopes.lookup("a"), Some(&json!("inner")));
        assert_eq!(scopes.lookup("b"), Some(&json!("outer-b")));
        assert_eq!(scopes.lookup("missing"), None);

        scopes.leave();
        assert_eq!(scopes.lookup("a"), Some(&json!("outer")));
    }

    #[test]
    fn test_explicit_null_shadows_parent() {
        let root_vars = json!({"a": "outer"});
        let element = json!({"a": null});
        let mut scopes = Scopes::root(root_vars.as_object().unwrap());
        scopes.enter(&element);

        assert_eq!(scopes.lookup("a"), Some(&Value::Null));
    }

    #[test]
    fn test_scalar_element_falls_through() {
        let root_vars = json!({"a": "outer"});
        let element = json!("just a string");
        let mut scopes = Scopes::root(root_vars.as_object().unwrap());

        assert!(!scopes.enter(&element));
        assert_eq!(scopes.lookup("a"), Some(&json!("outer")));
    }

    #[test]
    fn test_root_survives_leave() {
        let root_vars = json!({"a": "outer"});
        let mut scopes = Scopes::root(root_vars.as_object().unwrap());
        scopes.leave();

        assert_eq!(scopes.lookup("a"), Some(&json!("outer")));
    }
}
