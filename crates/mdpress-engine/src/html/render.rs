use super::node::{Attributes, Node};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Parent nodes must have a tag.")]
    MissingTag,
    #[error("Parent node missing child nodes.")]
    MissingChildren,
    #[error("All leaf nodes must have a value.")]
    MissingValue,
}

/// Serializes a node and all of its descendants to HTML.
///
/// Text and attribute values are written as-is, without escaping.
///
/// # Errors
/// - [`RenderError::MissingValue`] for a leaf without a value
/// - [`RenderError::MissingTag`] for a parent without a tag
/// - [`RenderError::MissingChildren`] for a parent whose child list is absent
///   (an empty list is fine and renders as `<tag></tag>`)
pub fn render(node: &Node) -> Result<String, RenderError> {
    let mut out = String::new();
    render_into(node, &mut out)?;
    Ok(out)
}

fn render_into(node: &Node, out: &mut String) -> Result<(), RenderError> {
    match node {
        Node::Leaf {
            tag,
            value,
            attributes,
        } => {
            let value = value.as_deref().ok_or(RenderError::MissingValue)?;
            match tag {
                None => out.push_str(value),
                Some(tag) => {
                    open_tag(out, tag, attributes.as_ref());
                    out.push_str(value);
                    close_tag(out, tag);
                }
            }
        }
        Node::Parent {
            tag,
            children,
            attributes,
        } => {
            let tag = tag.as_deref().ok_or(RenderError::MissingTag)?;
            let children = children.as_deref().ok_or(RenderError::MissingChildren)?;
            open_tag(out, tag, attributes.as_ref());
            for child in children {
                render_into(child, out)?;
            }
            close_tag(out, tag);
        }
    }
    Ok(())
}

fn open_tag(out: &mut String, tag: &str, attributes: Option<&Attributes>) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attributes.into_iter().flat_map(Attributes::iter) {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let html = render(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&html)
    }
}
