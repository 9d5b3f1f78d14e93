/// Ordered HTML attribute mapping.
///
/// Keys are unique and keep their insertion order, which makes rendered
/// output deterministic. Inserting an existing key replaces its value in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder form of [`Attributes::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// A node of the output HTML tree.
///
/// Fields are optional so that a malformed node can be represented and then
/// rejected by [`render`](super::render). The constructors always produce
/// renderable nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A node without children: raw text when `tag` is `None`, otherwise a
    /// single element wrapping `value`.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Option<Attributes>,
    },
    /// An element wrapping an ordered list of child nodes.
    Parent {
        tag: Option<String>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    },
}

impl Node {
    /// Untagged leaf: renders as its raw value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: None,
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: None,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: None,
        }
    }

    /// Replaces the node's attributes.
    pub fn with_attributes(self, attributes: Attributes) -> Self {
        match self {
            Self::Leaf { tag, value, .. } => Self::Leaf {
                tag,
                value,
                attributes: Some(attributes),
            },
            Self::Parent { tag, children, .. } => Self::Parent {
                tag,
                children,
                attributes: Some(attributes),
            },
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } | Self::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Leaf { attributes, .. } | Self::Parent { attributes, .. } => {
                attributes.as_ref()
            }
        }
    }

    /// Child nodes; always empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Parent {
                children: Some(children),
                ..
            } => children,
            _ => &[],
        }
    }
}
