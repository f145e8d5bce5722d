use crate::error::UiError;
use crate::node::UiNode;
use crate::serializer;
use serde::Serialize;

pub const DEFAULT_MODAL_SIZE: &str = "xxxl";

/// The top-level response document: `{"ui": {"modal": {...}}}`.
///
/// All three content arrays are always written, empty or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEnvelope {
    ui: UiSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct UiSection {
    modal: Modal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Modal {
    size: String,
    header_content: Vec<UiNode>,
    footer_content: Vec<UiNode>,
    content: Vec<UiNode>,
}

impl ReportEnvelope {
    /// Wraps a report's root node with its header and footer in a modal of
    /// the default size.
    pub fn wrap(root: UiNode, header: Vec<UiNode>, footer: Vec<UiNode>) -> Self {
        Self::wrap_sized(DEFAULT_MODAL_SIZE, root, header, footer)
    }

    pub fn wrap_sized(
        size: impl Into<String>,
        root: UiNode,
        header: Vec<UiNode>,
        footer: Vec<UiNode>,
    ) -> Self {
        Self {
            ui: UiSection {
                modal: Modal {
                    size: size.into(),
                    header_content: header,
                    footer_content: footer,
                    content: vec![root],
                },
            },
        }
    }

    pub fn size(&self) -> &str {
        &self.ui.modal.size
    }

    pub fn header(&self) -> &[UiNode] {
        &self.ui.modal.header_content
    }

    pub fn footer(&self) -> &[UiNode] {
        &self.ui.modal.footer_content
    }

    /// The report's root node.
    pub fn root(&self) -> &UiNode {
        &self.ui.modal.content[0]
    }

    pub fn to_json_string(&self) -> Result<String, UiError> {
        serializer::to_json_string(self)
    }

    pub fn to_value(&self) -> Result<serde_json::Value, UiError> {
        Ok(serde_json::to_value(self)?)
    }
}
