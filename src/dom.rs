//! Minimal retained element tree.
//!
//! The selector mutates the documentation page through this model instead
//! of global document lookups, so every element it cares about is held as
//! an explicit [`NodeId`] handle. Only the parts of the DOM contract the
//! selector touches are modeled: tag names, class lists, ids, text
//! content, the display style, and parent/child structure.

/// Handle to an element inside a [`Dom`].
///
/// Ids are only minted by the owning arena and stay valid for its lifetime;
/// elements are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// The subset of the CSS `display` property the selector toggles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// No explicit display set; the element renders per its tag.
    #[default]
    Inherit,
    /// Rendered as a list item.
    ListItem,
    /// Hidden.
    None,
}

/// One element in the tree.
#[derive(Debug)]
struct Element {
    tag: String,
    classes: Vec<String>,
    id: Option<String>,
    text: String,
    display: Display,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            id: None,
            text: String::new(),
            display: Display::Inherit,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena-backed element tree rooted at a `body` element.
#[derive(Debug)]
pub struct Dom {
    nodes: Vec<Element>,
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom {
    /// Create an empty tree containing only the root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
        }
    }

    /// The root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a detached element with the given tag.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    /// The element's own text content.
    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        &self.node(node).text
    }

    /// Replace the element's text content.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        text.clone_into(&mut self.node_mut(node).text);
    }

    /// The element's display style.
    #[must_use]
    pub fn display(&self, node: NodeId) -> Display {
        self.node(node).display
    }

    /// Set the element's display style.
    pub fn set_display(&mut self, node: NodeId, display: Display) {
        self.node_mut(node).display = display;
    }

    /// Replace the element's class list with a single class.
    pub fn set_class(&mut self, node: NodeId, class: &str) {
        self.node_mut(node).classes = vec![class.to_string()];
    }

    /// Whether the element carries the given class.
    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).classes.iter().any(|c| c == class)
    }

    /// The element's id attribute.
    #[must_use]
    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.node(node).id.as_deref()
    }

    /// Set the element's id attribute.
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.node_mut(node).id = Some(id.to_string());
    }

    /// The element's parent, if attached.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    /// The element's children, in insertion order.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    /// All attached elements carrying `class`, in document order.
    #[must_use]
    pub fn by_class(&self, class: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|&node| self.has_class(node, class))
            .collect()
    }

    /// The first attached element with the given id attribute.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|&node| self.node(node).id.as_deref() == Some(id))
    }

    /// Depth-first walk from the root, in document order.
    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.node(node).children.iter().rev().copied());
        }
        order
    }

    fn node(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    fn node_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }
}

/// Find the candidate whose trimmed text content equals `text`.
///
/// Returns an explicit "not found" instead of assuming the anchor exists.
#[must_use]
pub fn find_by_label(
    dom: &Dom,
    candidates: impl IntoIterator<Item = NodeId>,
    text: &str,
) -> Option<NodeId> {
    candidates
        .into_iter()
        .find(|&node| dom.text(node).trim() == text)
}
