//! Accessibility tree.
//!
//! Widgets render into [`Node`]s instead of pixels: every node carries the
//! role, accessible name and ARIA attributes a screen reader would see. The
//! tree is the rendering contract tests and snapshots are written against.

use std::collections::BTreeMap;
use std::fmt;

use platform::ElementId;
use serde::Serialize;

/// ARIA role of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Page root.
    Document,
    /// Site header.
    Banner,
    /// Main content.
    Main,
    /// Push button.
    Button,
    /// Modal or non-modal dialog.
    Dialog,
    /// Generic grouping container.
    Group,
    /// Section heading.
    Heading,
    /// Image.
    Img,
    /// Hyperlink.
    Link,
    /// Scrolling, non-essential text.
    Marquee,
    /// Flyout menu.
    Menu,
    /// Horizontal menu bar.
    Menubar,
    /// Item of a menu or menubar.
    Menuitem,
    /// Navigation landmark.
    Navigation,
    /// Labelled page region.
    Region,
    /// Search text field.
    Searchbox,
    /// Static text.
    Text,
    /// Media element.
    Video,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 18] = [
        Role::Document,
        Role::Banner,
        Role::Main,
        Role::Button,
        Role::Dialog,
        Role::Group,
        Role::Heading,
        Role::Img,
        Role::Link,
        Role::Marquee,
        Role::Menu,
        Role::Menubar,
        Role::Menuitem,
        Role::Navigation,
        Role::Region,
        Role::Searchbox,
        Role::Text,
        Role::Video,
    ];

    /// Lowercase ARIA name (`"menuitem"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Banner => "banner",
            Self::Main => "main",
            Self::Button => "button",
            Self::Dialog => "dialog",
            Self::Group => "group",
            Self::Heading => "heading",
            Self::Img => "img",
            Self::Link => "link",
            Self::Marquee => "marquee",
            Self::Menu => "menu",
            Self::Menubar => "menubar",
            Self::Menuitem => "menuitem",
            Self::Navigation => "navigation",
            Self::Region => "region",
            Self::Searchbox => "searchbox",
            Self::Text => "text",
            Self::Video => "video",
        }
    }

    /// Parse an ARIA role name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the accessibility tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// ARIA role.
    pub role: Role,
    /// Element id, for nodes that receive events or focus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ElementId>,
    /// Accessible name (`aria-label`, or the visible text of a control).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Remaining attributes (`aria-expanded`, `placeholder`, `src`, ...).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<&'static str, String>,
    /// Child nodes, in document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// An empty node with `role`.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            id: None,
            label: None,
            text: None,
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set the element id.
    pub fn id(mut self, id: ElementId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the accessible name.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set an attribute.
    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.insert(name, value.to_string());
        self
    }

    /// Set a boolean ARIA state (`"true"` / `"false"`).
    pub fn flag(self, name: &'static str, value: bool) -> Self {
        self.attr(name, if value { "true" } else { "false" })
    }

    /// Append a child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append children.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Value of attribute `name`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Depth-first, pre-order walk starting at (and including) this node.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Every element id present in the tree.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.descendants().filter_map(|node| node.id)
    }

    /// The node carrying `id`.
    pub fn find_by_id(&self, id: ElementId) -> Option<&Node> {
        self.descendants().find(|node| node.id == Some(id))
    }

    /// Every node matching `query`, in document order.
    pub fn query_all(&self, query: &Query<'_>) -> Vec<&Node> {
        self.descendants()
            .filter(|node| query.matches(node))
            .collect()
    }

    /// The single node matching `query`.
    pub fn query_one(&self, query: &Query<'_>) -> Result<&Node, QueryError> {
        let mut matches = self.query_all(query).into_iter();
        let first = matches.next().ok_or_else(|| QueryError::NotFound {
            query: query.to_string(),
        })?;
        let rest = matches.count();
        if rest > 0 {
            return Err(QueryError::Ambiguous {
                query: query.to_string(),
                count: rest.saturating_add(1),
            });
        }
        Ok(first)
    }
}

/// Iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A lookup in the tree, in the vocabulary of DOM testing libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'q> {
    /// Exact accessible name.
    Label(&'q str),
    /// Accessible name starting with the given text.
    LabelPrefix(&'q str),
    /// ARIA role.
    Role(Role),
    /// Exact `placeholder` attribute.
    Placeholder(&'q str),
    /// Visible text.
    Text(&'q str),
}

impl Query<'_> {
    /// Whether `node` satisfies the query.
    pub fn matches(&self, node: &Node) -> bool {
        match *self {
            Self::Label(label) => node.label.as_deref() == Some(label),
            Self::LabelPrefix(prefix) => node
                .label
                .as_deref()
                .is_some_and(|label| label.starts_with(prefix)),
            Self::Role(role) => node.role == role,
            Self::Placeholder(text) => node.get_attr("placeholder") == Some(text),
            Self::Text(text) => node.text.as_deref() == Some(text),
        }
    }
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => write!(f, "label {label:?}"),
            Self::LabelPrefix(prefix) => write!(f, "label starting with {prefix:?}"),
            Self::Role(role) => write!(f, "role {role}"),
            Self::Placeholder(text) => write!(f, "placeholder {text:?}"),
            Self::Text(text) => write!(f, "text {text:?}"),
        }
    }
}

/// Failed tree lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Nothing matched.
    #[error("no element with {query}")]
    NotFound {
        /// The query, rendered.
        query: String,
    },
    /// More than one node matched a single-node query.
    #[error("{count} elements with {query}, expected exactly one")]
    Ambiguous {
        /// The query, rendered.
        query: String,
        /// Number of matches.
        count: usize,
    },
}
