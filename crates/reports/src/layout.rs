//! The fixed parts of a report modal: header, footer and section headings.

use ui_tree::elements::{button, h1, h2, space, text};
use ui_tree::{Props, UiNode};

/// Action string the renderer understands as "close the modal".
const CLOSE_MODAL_ACTION: &str = r#"{"action":"CloseModal"}"#;

pub fn header(title: &str) -> Vec<UiNode> {
    vec![space(vec![text(title)], Props::new())]
}

pub fn footer() -> Vec<UiNode> {
    let close = button(
        vec![text("Close")],
        Props::new()
            .with("className", "form_action_button")
            .with("borderType", "danger")
            .with("buttonType", "outlined")
            .with("onClick", CLOSE_MODAL_ACTION),
    );
    vec![space(vec![close], Props::new().with("justifyContent", "space-between"))]
}

pub fn title(value: &str) -> UiNode {
    h1(vec![text(value)])
}

pub fn section(value: &str) -> UiNode {
    h2(vec![text(value)])
}
