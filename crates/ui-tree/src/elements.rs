//! Constructors for each node kind, named after the renderer's components.

use crate::node::{NodeKind, Props, UiNode};

pub fn div(children: Vec<UiNode>) -> UiNode {
    UiNode::new(NodeKind::Div, Props::new(), children)
}

pub fn h1(children: Vec<UiNode>) -> UiNode {
    UiNode::new(NodeKind::H1, Props::new(), children)
}

pub fn h2(children: Vec<UiNode>) -> UiNode {
    UiNode::new(NodeKind::H2, Props::new(), children)
}

/// A text leaf; the string travels in the `value` property.
pub fn text(value: impl Into<String>) -> UiNode {
    UiNode::new(NodeKind::Text, Props::new().with("value", value.into()), Vec::new())
}

pub fn space(children: Vec<UiNode>, props: Props) -> UiNode {
    UiNode::new(NodeKind::Space, props, children)
}

pub fn button(children: Vec<UiNode>, props: Props) -> UiNode {
    UiNode::new(NodeKind::Button, props, children)
}

pub fn responsive_container(children: Vec<UiNode>, props: Props) -> UiNode {
    UiNode::new(NodeKind::ResponsiveContainer, props, children)
}

pub fn line_chart(children: Vec<UiNode>, props: Props) -> UiNode {
    UiNode::new(NodeKind::LineChart, props, children)
}

pub fn pie_chart(children: Vec<UiNode>, props: Props) -> UiNode {
    UiNode::new(NodeKind::PieChart, props, children)
}

pub fn x_axis(props: Props) -> UiNode {
    UiNode::new(NodeKind::XAxis, props, Vec::new())
}

pub fn y_axis() -> UiNode {
    UiNode::leaf(NodeKind::YAxis)
}

pub fn tooltip() -> UiNode {
    UiNode::leaf(NodeKind::Tooltip)
}

pub fn legend() -> UiNode {
    UiNode::leaf(NodeKind::Legend)
}

pub fn line(props: Props) -> UiNode {
    UiNode::new(NodeKind::Line, props, Vec::new())
}

pub fn pie(children: Vec<UiNode>, props: Props) -> UiNode {
    UiNode::new(NodeKind::Pie, props, children)
}

pub fn cell(props: Props) -> UiNode {
    UiNode::new(NodeKind::Cell, props, Vec::new())
}

pub fn table(props: Props) -> UiNode {
    UiNode::new(NodeKind::Table, props, Vec::new())
}
