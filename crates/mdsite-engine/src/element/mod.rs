//! # Element Tree
//!
//! The output data structure of the markdown pipeline: a strict tree of
//! [`ElementNode`]s that serializes to HTML markup.
//!
//! ## Node Shapes
//!
//! - **Leaf**: optional tag, a text value and attributes. No children.
//!   A leaf without a tag renders as its raw value.
//! - **Parent**: tag, attributes and an ordered list of children. No value.
//!
//! Every parent exclusively owns its children; there is no sharing and no
//! back-reference anywhere in the tree.
//!
//! ## Modules
//!
//! - **`render`**: depth-first serialization to markup, with [`RenderError`]
//!   for structurally invalid parents

pub mod render;

use indexmap::IndexMap;

pub use render::{InvalidElement, RenderError, render};

/// Insertion-ordered attribute map. Rendering follows insertion order.
pub type Attributes = IndexMap<String, String>;

/// A node in the output HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementNode {
    /// A node with a text value and no children.
    Leaf {
        /// Tag name, or `None` for raw text.
        tag: Option<String>,
        /// Text emitted between the tags (or on its own when untagged).
        value: String,
        attributes: Attributes,
    },
    /// A node that wraps an ordered list of children.
    ///
    /// `tag` and `children` are optional only so that a malformed parent can
    /// be represented and rejected at render time. The constructors on
    /// [`ElementNode`] always set both.
    Parent {
        tag: Option<String>,
        attributes: Attributes,
        /// `Some(vec![])` is a valid empty parent; `None` is invalid.
        children: Option<Vec<ElementNode>>,
    },
}

impl ElementNode {
    /// Creates an untagged leaf holding raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Creates a tagged leaf with no attributes.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Creates a tagged parent with no attributes.
    pub fn parent(tag: impl Into<String>, children: Vec<ElementNode>) -> Self {
        Self::Parent {
            tag: Some(tag.into()),
            attributes: Attributes::new(),
            children: Some(children),
        }
    }

    /// Appends an attribute, keeping insertion order.
    ///
    /// Setting an existing key replaces its value in place.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Leaf { attributes, .. } | Self::Parent { attributes, .. } => {
                attributes.insert(key.into(), value.into());
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } | Self::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::Leaf { attributes, .. } | Self::Parent { attributes, .. } => attributes,
        }
    }

    /// Children of a parent node. Leaves and malformed parents yield an empty slice.
    pub fn children(&self) -> &[ElementNode] {
        match self {
            Self::Parent {
                children: Some(children),
                ..
            } => children,
            _ => &[],
        }
    }

    /// Renders this node and its subtree to markup.
    pub fn to_html(&self) -> Result<String, RenderError> {
        render(self)
    }
}
