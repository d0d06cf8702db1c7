//! The diagram model: disk nodes at caller-supplied positions connected by
//! weighted, optionally blocked edges.
//!
//! Coronet does no layout. A [`Node`] carries its own position and radius;
//! an [`Edge`] references two nodes by [`Id`] with a strength in `[0, 1]`
//! and a blocked flag. A [`Diagram`] is an ordered node table plus an edge
//! list, built fresh per render and discarded afterwards.

use std::rc::Rc;

use indexmap::IndexMap;

use coronet_core::{
    draw::{ArrowDefinition, BandStack, Disk, DiskDefinition},
    geometry::Point,
    identifier::Id,
};

use crate::error::CoronetError;

/// A diagram node: a banded disk at a fixed position.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: Option<String>,
    disk: Disk,
    primary: BandStack,
    secondary: BandStack,
    definition: Rc<DiskDefinition>,
}

impl Node {
    /// Creates a node with default styling and empty band stacks.
    ///
    /// # Errors
    ///
    /// Returns [`CoronetError::Geometry`] if the radius is not positive and
    /// finite.
    pub fn new(id: Id, position: Point, radius: f32) -> Result<Self, CoronetError> {
        let disk = Disk::new(position, radius)?;
        Ok(Self {
            id,
            label: None,
            disk,
            primary: BandStack::new(),
            secondary: BandStack::new(),
            definition: Rc::new(DiskDefinition::new()),
        })
    }

    /// Returns the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the label text, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the node's disk.
    pub fn disk(&self) -> Disk {
        self.disk
    }

    /// Returns the primary band stack (grows from the bottom or left edge).
    pub fn primary(&self) -> &BandStack {
        &self.primary
    }

    /// Returns the secondary band stack (grows from the top or right edge).
    pub fn secondary(&self) -> &BandStack {
        &self.secondary
    }

    /// Returns the visual definition for this node's disk.
    pub fn definition(&self) -> &Rc<DiskDefinition> {
        &self.definition
    }

    /// Sets the label (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the primary band stack (builder style).
    pub fn with_primary(mut self, primary: BandStack) -> Self {
        self.primary = primary;
        self
    }

    /// Sets the secondary band stack (builder style).
    pub fn with_secondary(mut self, secondary: BandStack) -> Self {
        self.secondary = secondary;
        self
    }

    /// Sets the visual definition, shared via `Rc` across nodes.
    pub fn with_definition(mut self, definition: Rc<DiskDefinition>) -> Self {
        self.definition = definition;
        self
    }
}

/// A directed edge between two nodes.
///
/// Strength scales the stroke width; a strength of exactly 0 makes the
/// edge a silent no-op at render time. Blocked edges render dashed and
/// muted with a perpendicular cancellation bar.
#[derive(Debug, Clone)]
pub struct Edge {
    from: Id,
    to: Id,
    strength: f32,
    blocked: bool,
    definition: Rc<ArrowDefinition>,
}

impl Edge {
    /// Creates an active edge.
    ///
    /// # Errors
    ///
    /// Returns [`CoronetError::InvalidStrength`] unless strength is a
    /// finite value in `[0, 1]`.
    pub fn new(from: Id, to: Id, strength: f32) -> Result<Self, CoronetError> {
        if !strength.is_finite() || !(0.0..=1.0).contains(&strength) {
            return Err(CoronetError::InvalidStrength(strength));
        }
        Ok(Self {
            from,
            to,
            strength,
            blocked: false,
            definition: Rc::new(ArrowDefinition::default()),
        })
    }

    /// Returns the source node id.
    pub fn from(&self) -> Id {
        self.from
    }

    /// Returns the destination node id.
    pub fn to(&self) -> Id {
        self.to
    }

    /// Returns the edge strength in `[0, 1]`.
    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Returns `true` if this edge is blocked.
    pub fn blocked(&self) -> bool {
        self.blocked
    }

    /// Returns the visual definition for this edge.
    pub fn definition(&self) -> &Rc<ArrowDefinition> {
        &self.definition
    }

    /// Marks the edge as blocked (builder style).
    pub fn with_blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    /// Sets the visual definition, shared via `Rc` across edges.
    pub fn with_definition(mut self, definition: Rc<ArrowDefinition>) -> Self {
        self.definition = definition;
        self
    }
}

/// A complete diagram: an ordered node table plus an edge list.
///
/// Node iteration order equals insertion order, which is also draw order.
#[derive(Debug, Default)]
pub struct Diagram {
    nodes: IndexMap<Id, Node>,
    edges: Vec<Edge>,
}

impl Diagram {
    /// Creates an empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`CoronetError::DuplicateNode`] if a node with the same id
    /// was already added.
    pub fn add_node(&mut self, node: Node) -> Result<(), CoronetError> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return Err(CoronetError::DuplicateNode(id));
        }
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Adds an edge to the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`CoronetError::UnknownNode`] if either endpoint does not
    /// name an existing node, or [`CoronetError::SelfEdge`] if both
    /// endpoints are the same node (a degenerate segment).
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), CoronetError> {
        if !self.nodes.contains_key(&edge.from()) {
            return Err(CoronetError::UnknownNode(edge.from()));
        }
        if !self.nodes.contains_key(&edge.to()) {
            return Err(CoronetError::UnknownNode(edge.to()));
        }
        if edge.from() == edge.to() {
            return Err(CoronetError::SelfEdge(edge.from()));
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Returns the nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Returns the edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns `true` if the diagram has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use coronet_core::{color::Color, draw::Band};

    use super::*;

    fn node(name: &str, x: f32, y: f32) -> Node {
        Node::new(Id::new(name), Point::new(x, y), 20.0).unwrap()
    }

    #[test]
    fn test_node_new_rejects_bad_radius() {
        let result = Node::new(Id::new("bad"), Point::new(0.0, 0.0), -1.0);
        assert!(matches!(result, Err(CoronetError::Geometry(_))));
    }

    #[test]
    fn test_node_builder() {
        let band = Band::new(0.4, Color::new("red").unwrap()).unwrap();
        let node = node("rain", 10.0, 20.0)
            .with_label("Rain")
            .with_primary([band].into_iter().collect());

        assert_eq!(node.label(), Some("Rain"));
        assert_eq!(node.primary().bands().len(), 1);
        assert!(node.secondary().is_empty());
    }

    #[test]
    fn test_edge_strength_validation() {
        let (a, b) = (Id::new("a"), Id::new("b"));
        assert!(Edge::new(a, b, 0.0).is_ok());
        assert!(Edge::new(a, b, 1.0).is_ok());
        assert!(matches!(
            Edge::new(a, b, 1.2),
            Err(CoronetError::InvalidStrength(_))
        ));
        assert!(matches!(
            Edge::new(a, b, -0.1),
            Err(CoronetError::InvalidStrength(_))
        ));
        assert!(Edge::new(a, b, f32::NAN).is_err());
    }

    #[test]
    fn test_diagram_rejects_duplicate_nodes() {
        let mut diagram = Diagram::new();
        diagram.add_node(node("rain", 0.0, 0.0)).unwrap();
        let result = diagram.add_node(node("rain", 50.0, 0.0));
        assert!(matches!(result, Err(CoronetError::DuplicateNode(_))));
    }

    #[test]
    fn test_diagram_rejects_unknown_edge_endpoints() {
        let mut diagram = Diagram::new();
        diagram.add_node(node("rain", 0.0, 0.0)).unwrap();

        let edge = Edge::new(Id::new("rain"), Id::new("ghost"), 0.5).unwrap();
        assert!(matches!(
            diagram.add_edge(edge),
            Err(CoronetError::UnknownNode(_))
        ));
    }

    #[test]
    fn test_diagram_rejects_self_edges() {
        let mut diagram = Diagram::new();
        diagram.add_node(node("rain", 0.0, 0.0)).unwrap();

        let edge = Edge::new(Id::new("rain"), Id::new("rain"), 0.5).unwrap();
        assert!(matches!(
            diagram.add_edge(edge),
            Err(CoronetError::SelfEdge(_))
        ));
    }

    #[test]
    fn test_node_order_is_insertion_order() {
        let mut diagram = Diagram::new();
        for name in ["c", "a", "b"] {
            diagram.add_node(node(name, 0.0, 0.0)).unwrap();
        }

        let order: Vec<String> = diagram.nodes().map(|n| n.id().to_string()).collect();
        assert_eq!(order, ["c", "a", "b"]);
    }
}
