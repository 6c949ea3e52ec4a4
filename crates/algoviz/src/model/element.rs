use serde::{Deserialize, Serialize};

use super::Status;

/// One bar of the array being visualized.
///
/// `id` is the rendering identity and travels with the value when the
/// element moves. `value` doubles as the bar height in percent (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMarker {
    pub id: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub status: Status,
    /// Render a gap after this bar (merge sort split point).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_split_after: bool,
}

impl ElementMarker {
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
            label: None,
            status: Status::Default,
            is_split_after: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}
