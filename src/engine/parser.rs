//! Template parsing into a flat node list.
//!
//! Sections are not nested in the output: a section open records the index
//! of its matching [`Node::End`], so walking a template never recurses no
//! matter how deeply sections nest.
//!
//! The scanner looks for `{{...}}` tags. A tag is recognized only when its
//! inner text is a key (`[A-Za-z0-9_]+`), optionally prefixed by `#` (open
//! section) or `/` (close section). Everything else, including a `{{` that
//! is never closed, is kept as literal text.

use super::error::TemplateError;

/// A parsed template fragment, borrowing from the template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node<'a> {
    /// Literal text copied to the output.
    Text(&'a str),
    /// A `{{key}}` placeholder.
    Variable(&'a str),
    /// A `{{#name}}` tag; `end` is the index of its closing [`Node::End`].
    Section { name: &'a str, end: usize },
    /// A `{{/name}}` tag.
    End,
}

/// A recognized tag.
enum Tag<'a> {
    Variable(&'a str),
    Open(&'a str),
    Close(&'a str),
}

/// An open section waiting for its closing tag.
struct Open<'a> {
    name: &'a str,
    position: usize,
    /// Index of the section's node, patched when the section closes.
    index: usize,
}

/// Check whether `s` is a valid placeholder key.
pub(crate) fn is_key(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn classify(inner: &str) -> Option<Tag<'_>> {
    if let Some(name) = inner.strip_prefix('#') {
        is_key(name).then_some(Tag::Open(name))
    } else if let Some(name) = inner.strip_prefix('/') {
        is_key(name).then_some(Tag::Close(name))
    } else {
        is_key(inner).then_some(Tag::Variable(inner))
    }
}

/// Parse a template into a flat node list.
///
/// Returns an error only when section tags are unbalanced or mismatched.
pub(crate) fn parse(template: &str) -> Result<Vec<Node<'_>>, TemplateError> {
    let mut stack: Vec<Open<'_>> = Vec::new();
    let mut nodes: Vec<Node<'_>> = Vec::new();

    // Start of text not yet emitted
    let mut cursor = 0;
    // Where to look for the next `{{`
    let mut search = 0;

    while let Some(rel) = template[search..].find("{{") {
        let open = search + rel;
        let inner_start = open + 2;

        // No closing braces anywhere after this point: the rest is literal.
        let Some(close_rel) = template[inner_start..].find("}}") else {
            break;
        };
        let inner = &template[inner_start..inner_start + close_rel];
        let end = inner_start + close_rel + 2;

        let Some(tag) = classify(inner) else {
            // Not a tag; retry one byte later so `{{{key}}}` still finds `{{key}}`.
            search = open + 1;
            continue;
        };

        if open > cursor {
            nodes.push(Node::Text(&template[cursor..open]));
        }

        match tag {
            Tag::Variable(key) => nodes.push(Node::Variable(key)),
            Tag::Open(name) => {
                stack.push(Open {
                    name,
                    position: open,
                    index: nodes.len(),
                });
                nodes.push(Node::Section { name, end: 0 });
            }
            Tag::Close(name) => {
                let Some(section) = stack.pop() else {
                    return Err(TemplateError::UnexpectedClose {
                        name: name.to_string(),
                        position: open,
                    });
                };
                if section.name != name {
                    return Err(TemplateError::MismatchedClose {
                        expected: section.name.to_string(),
                        found: name.to_string(),
                        position: open,
                    });
                }
                nodes[section.index] = Node::Section {
                    name,
                    end: nodes.len(),
                };
                nodes.push(Node::End);
            }
        }

        cursor = end;
        search = end;
    }

    if let Some(section) = stack.pop() {
        return Err(TemplateError::UnclosedSection {
            name: section.name.to_string(),
            position: section.position,
        });
    }

    if cursor < template.len() {
        nodes.push(Node::Text(&template[cursor..]));
    }

    Ok(nodes)
}
