use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Every kind of node the renderer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Layout and text
    Div,
    Space,
    Button,
    H1,
    H2,
    Text,
    // Charts
    ResponsiveContainer,
    LineChart,
    PieChart,
    XAxis,
    YAxis,
    Tooltip,
    Legend,
    Line,
    Pie,
    Cell,
    // Data
    Table,
}

impl NodeKind {
    /// The wire tag written to the `"type"` key.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Div => "div",
            NodeKind::Space => "Space",
            NodeKind::Button => "Button",
            NodeKind::H1 => "h1",
            NodeKind::H2 => "h2",
            NodeKind::Text => "#text",
            NodeKind::ResponsiveContainer => "ResponsiveContainer",
            NodeKind::LineChart => "LineChart",
            NodeKind::PieChart => "PieChart",
            NodeKind::XAxis => "XAxis",
            NodeKind::YAxis => "YAxis",
            NodeKind::Tooltip => "Tooltip",
            NodeKind::Legend => "Legend",
            NodeKind::Line => "Line",
            NodeKind::Pie => "Pie",
            NodeKind::Cell => "Cell",
            NodeKind::Table => "Table",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A property value: plain JSON, or a list of nodes carried as data.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Json(Value),
    Nodes(Vec<UiNode>),
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Json(value) => value.serialize(serializer),
            PropValue::Nodes(nodes) => {
                let mut seq = serializer.serialize_seq(Some(nodes.len()))?;
                for node in nodes {
                    seq.serialize_element(node)?;
                }
                seq.end()
            }
        }
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        PropValue::Json(value)
    }
}

impl From<Vec<UiNode>> for PropValue {
    fn from(nodes: Vec<UiNode>) -> Self {
        PropValue::Nodes(nodes)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Json(Value::from(value))
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Json(Value::from(value))
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Json(Value::from(value))
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Json(Value::from(value))
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Json(Value::from(value))
    }
}

impl From<u64> for PropValue {
    fn from(value: u64) -> Self {
        PropValue::Json(Value::from(value))
    }
}

/// An ordered property list. Insertion order is wire order; keys are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(Vec<(String, PropValue)>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property, consuming and returning the list for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.push((key.into(), value.into()));
    }

    /// The first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Props(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl Serialize for Props {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One element of the UI tree.
///
/// Fields are private: a node is fixed at construction and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UiNode {
    kind: NodeKind,
    props: Props,
    children: Vec<UiNode>,
}

impl UiNode {
    pub fn new(kind: NodeKind, props: Props, children: Vec<UiNode>) -> Self {
        Self {
            kind,
            props,
            children,
        }
    }

    /// A node with neither properties nor children.
    pub fn leaf(kind: NodeKind) -> Self {
        Self::new(kind, Props::new(), Vec::new())
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn children(&self) -> &[UiNode] {
        &self.children
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        let nested: usize = self
            .props
            .iter()
            .map(|(_, value)| match value {
                PropValue::Nodes(nodes) => nodes.iter().map(UiNode::node_count).sum(),
                PropValue::Json(_) => 0,
            })
            .sum();
        1 + nested + self.children.iter().map(UiNode::node_count).sum::<usize>()
    }
}

/// `{"type": .., "props": .., "children": ..}`, with empty props and children omitted.
impl Serialize for UiNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(!self.props.is_empty()) + usize::from(!self.children.is_empty());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", self.kind.tag())?;
        if !self.props.is_empty() {
            map.serialize_entry("props", &self.props)?;
        }
        if !self.children.is_empty() {
            map.serialize_entry("children", &self.children)?;
        }
        map.end()
    }
}
