//! Rendering of parsed templates against a data context.

use super::error::TemplateError;
use super::parser::{Node, parse};
use super::scope::{Scopes, push_scalar};
use serde_json::{Map, Value};

/// The mapping of keys to values supplied to a single render call.
///
/// Values are scalars (rendered as text) or arrays of objects (expanded by
/// repeating sections).
pub type DataContext = Map<String, Value>;

/// Render template content against a data context.
///
/// - `{{key}}` is replaced by the value of `key`; absent or `null` values
///   render as an empty string.
/// - `{{#key}}...{{/key}}` renders its body once per element of the array
///   at `key`. Inside the body, keys resolve against the element first and
///   then against the enclosing scopes. A missing or non-array value renders
///   the block as nothing.
///
/// # Errors
///
/// Returns a [`TemplateError`] when section tags are unbalanced or
/// mismatched. Nothing is rendered in that case.
///
/// # Examples
///
/// ```ignore
/// let context = serde_json::json!({"name": "Ana"});
/// let html = render("Hello {{name}}", context.as_object().unwrap())?;
/// assert_eq!(html, "Hello Ana");
/// ```
pub fn render(template: &str, context: &DataContext) -> Result<String, TemplateError> {
    let nodes = parse(template)?;
    let mut out = String::with_capacity(template.len());
    render_nodes(&nodes, Scopes::root(context), &mut out);
    Ok(out)
}

/// A section being repeated.
struct Repeat<'v> {
    /// Index of the first node of the body.
    body: usize,
    /// Remaining elements of the section's array.
    items: std::slice::Iter<'v, Value>,
    /// Whether the current element pushed a scope.
    entered: bool,
}

impl<'v> Repeat<'v> {
    /// Move to the next element, returning false once the array is exhausted.
    fn advance(&mut self, scopes: &mut Scopes<'v>) -> bool {
        if self.entered {
            scopes.leave();
            self.entered = false;
        }
        match self.items.next() {
            Some(item) => {
                self.entered = scopes.enter(item);
                true
            }
            None => false,
        }
    }
}

fn render_nodes<'v>(nodes: &[Node<'_>], mut scopes: Scopes<'v>, out: &mut String) {
    let mut repeats: Vec<Repeat<'v>> = Vec::new();
    let mut pc = 0;

    while let Some(node) = nodes.get(pc) {
        match node {
            Node::Text(text) => {
                out.push_str(text);
                pc += 1;
            }
            Node::Variable(key) => {
                if let Some(value) = scopes.lookup(key) {
                    push_scalar(out, value);
                }
                pc += 1;
            }
            Node::Section { name, end } => {
                let Some(Value::Array(items)) = scopes.lookup(name) else {
                    pc = end + 1;
                    continue;
                };
                let mut repeat = Repeat {
                    body: pc + 1,
                    items: items.iter(),
                    entered: false,
                };
                if repeat.advance(&mut scopes) {
                    pc = repeat.body;
                    repeats.push(repeat);
                } else {
                    pc = end + 1;
                }
            }
            Node::End => {
                let Some(repeat) = repeats.last_mut() else {
                    pc += 1;
                    continue;
                };
                if repeat.advance(&mut scopes) {
                    pc = repeat.body;
                } else {
                    repeats.pop();
                    pc += 1;
                }
            }
        }
    }
}

/// Placeholders referenced by a template.
///
/// Keys appear once each, in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateOutline {
    /// Scalar placeholder keys, including those inside section bodies.
    pub variables: Vec<String>,
    /// Repeating-section names.
    pub sections: Vec<String>,
}

impl TemplateOutline {
    /// Whether the template references no placeholders at all.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.sections.is_empty()
    }
}

/// Check section structure and list the placeholders a template uses.
///
/// # Errors
///
/// Returns the same [`TemplateError`] that [`render`] would.
pub fn outline(template: &str) -> Result<TemplateOutline, TemplateError> {
    let nodes = parse(template)?;
    let mut outline = TemplateOutline::default();
    for node in &nodes {
        match node {
            Node::Text(_) | Node::End => {}
            Node::Variable(key) => push_unique(&mut outline.variables, key),
            Node::Section { name, .. } => push_unique(&mut outline.sections, name),
        }
    }
    Ok(outline)
}

fn push_unique(list: &mut Vec<String>, key: &str) {
    if !list.iter().any(|k| k == key) {
        list.push(key.to_string());
    }
}
