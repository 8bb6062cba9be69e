#![forbid(unsafe_code)]

//! The PDF-export request body and its transport seam.
//!
//! The core's only export responsibility is producing the request body: a
//! mapping from 1-based quadrant number to the placed component's label,
//! serialized as `{"quadrants": {"<n>": "<label>", ...}}` and POSTed by
//! whatever shell owns the HTTP stack. The [`Transport`] trait is that
//! seam; the core never performs or retries the call itself.

use quadboard_model::GridItem;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Placeholder endpoint for the PDF-generation service.
pub const DEFAULT_ENDPOINT: &str = "https://your-api-endpoint/generate-pdf";

/// The export request body.
///
/// Keys are 1-based quadrant numbers in reading order (top-left is 1);
/// the BTreeMap keeps serialization order deterministic. serde_json
/// renders the integer keys as JSON strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
    quadrants: BTreeMap<u8, String>,
}

impl ExportRequest {
    /// Build the request body from the placed items.
    #[must_use]
    pub fn from_items(items: &[GridItem]) -> Self {
        Self {
            quadrants: items
                .iter()
                .map(|item| (item.quadrant().number(), item.label.clone()))
                .collect(),
        }
    }

    /// The quadrant-number → label mapping.
    #[must_use]
    pub fn quadrants(&self) -> &BTreeMap<u8, String> {
        &self.quadrants
    }

    /// Serialize the body to a JSON string.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(ExportError::Serialize)
    }
}

/// Human-readable summary of the current layout.
///
/// Logged alongside the request so an operator can see what was sent
/// without decoding the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSummary {
    /// Number of placed components.
    pub total_components: usize,
    /// Number of occupied quadrants.
    pub occupied_quadrants: usize,
    /// One line per quadrant, e.g. `"Quadrant 2: Card"`.
    pub components: Vec<String>,
}

impl LayoutSummary {
    /// Build a summary from the placed items.
    #[must_use]
    pub fn from_items(items: &[GridItem]) -> Self {
        let request = ExportRequest::from_items(items);
        Self {
            total_components: items.len(),
            occupied_quadrants: request.quadrants.len(),
            components: request
                .quadrants
                .iter()
                .map(|(number, label)| format!("Quadrant {number}: {label}"))
                .collect(),
        }
    }
}

/// Sends an [`ExportRequest`] to the PDF-generation service.
///
/// Implemented by the shell (an HTTP client, a test double, a recorder).
/// The core holds no retry policy; a failed send is reported once to
/// whoever initiated the export.
pub trait Transport {
    /// Deliver the request, returning once it was accepted.
    fn send(&self, request: &ExportRequest) -> Result<(), ExportError>;
}

/// Why an export failed.
#[derive(Debug)]
pub enum ExportError {
    /// The request body could not be serialized.
    Serialize(serde_json::Error),
    /// The transport could not deliver the request.
    Transport(String),
    /// The service answered with a non-success status.
    Rejected { status: u16 },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize export request: {err}"),
            Self::Transport(detail) => write!(f, "export transport failed: {detail}"),
            Self::Rejected { status } => {
                write!(f, "PDF generation rejected with status {status}")
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Transport(_) | Self::Rejected { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadboard_core::quadrant::Quadrant;
    use std::cell::RefCell;

    fn item(id: &str, label: &str, x: u8, y: u8) -> GridItem {
        GridItem::new(id, label, Quadrant::new(x, y))
    }

    #[test]
    fn top_right_card_maps_to_quadrant_two() {
        let request = ExportRequest::from_items(&[item("a", "Card", 1, 0)]);
        assert_eq!(request.quadrants().get(&2).map(String::as_str), Some("Card"));
        assert_eq!(request.quadrants().len(), 1);
    }

    #[test]
    fn body_serializes_with_string_keys() {
        let request = ExportRequest::from_items(&[item("a", "Card", 1, 0)]);
        assert_eq!(request.to_json().unwrap(), r#"{"quadrants":{"2":"Card"}}"#);
    }

    #[test]
    fn full_grid_covers_all_four_numbers() {
        let items = [
            item("1-1", "Header", 0, 0),
            item("1-2", "Footer", 1, 0),
            item("1-3", "Sidebar", 0, 1),
            item("3-1", "Card", 1, 1),
        ];
        let request = ExportRequest::from_items(&items);
        let numbers: Vec<u8> = request.quadrants().keys().copied().collect();
        assert_eq!(numbers, [1, 2, 3, 4]);
    }

    #[test]
    fn empty_grid_yields_empty_mapping() {
        let request = ExportRequest::from_items(&[]);
        assert!(request.quadrants().is_empty());
        assert_eq!(request.to_json().unwrap(), r#"{"quadrants":{}}"#);
    }

    #[test]
    fn summary_counts_and_describes() {
        let items = [item("3-1", "Card", 1, 0), item("1-1", "Header", 0, 0)];
        let summary = LayoutSummary::from_items(&items);
        assert_eq!(summary.total_components, 2);
        assert_eq!(summary.occupied_quadrants, 2);
        assert_eq!(summary.components, ["Quadrant 1: Header", "Quadrant 2: Card"]);
    }

    struct RecordingTransport {
        sent: RefCell<Vec<String>>,
        fail_with: Option<u16>,
    }

    impl Transport for RecordingTransport {
        fn send(&self, request: &ExportRequest) -> Result<(), ExportError> {
            if let Some(status) = self.fail_with {
                return Err(ExportError::Rejected { status });
            }
            self.sent.borrow_mut().push(request.to_json()?);
            Ok(())
        }
    }

    #[test]
    fn transport_seam_delivers_the_body() {
        let transport = RecordingTransport {
            sent: RefCell::new(Vec::new()),
            fail_with: None,
        };
        let request = ExportRequest::from_items(&[item("a", "Card", 1, 0)]);
        transport.send(&request).unwrap();
        assert_eq!(
            transport.sent.borrow().as_slice(),
            [r#"{"quadrants":{"2":"Card"}}"#]
        );
    }

    #[test]
    fn rejected_send_reports_the_status() {
        let transport = RecordingTransport {
            sent: RefCell::new(Vec::new()),
            fail_with: Some(500),
        };
        let request = ExportRequest::from_items(&[item("a", "Card", 1, 0)]);
        let err = transport.send(&request).unwrap_err();
        assert_eq!(err.to_string(), "PDF generation rejected with status 500");
    }
}
