//! What the reader is currently interested in.
//!
//! A [`Selection`] and a [`ViewerContext`] are tracked independently and may be
//! stale relative to each other; [`resolve`] reconciles them on every read and
//! never mutates either.

use serde::Serialize;
use std::time::Instant;
use thiserror::Error;

/// Which event source reported a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOrigin {
    ViewerEvent,
    NativeCopy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub text: String,
    pub captured_at: Instant,
    pub origin: SelectionOrigin,
}

impl Selection {
    /// Returns `None` for text that is empty once trimmed.
    pub fn new(
        text: impl Into<String>,
        captured_at: Instant,
        origin: SelectionOrigin,
    ) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self {
            text,
            captured_at,
            origin,
        })
    }
}

/// The open document and, once the viewer reported one, its visible page (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerContext {
    pub document_id: String,
    pub page_number: Option<u32>,
}

impl ViewerContext {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            page_number: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedContext {
    Text(String),
    Locator { document_id: String, page_number: u32 },
    None,
}

/// Selection wins over page position; a document without a known page means page 1.
pub fn resolve(selection: Option<&Selection>, viewer: Option<&ViewerContext>) -> ResolvedContext {
    if let Some(selection) = selection {
        let trimmed = selection.text.trim();
        if !trimmed.is_empty() {
            return ResolvedContext::Text(trimmed.to_string());
        }
    }
    match viewer {
        Some(viewer) => ResolvedContext::Locator {
            document_id: viewer.document_id.clone(),
            page_number: viewer.page_number.filter(|page| *page > 0).unwrap_or(1),
        },
        None => ResolvedContext::None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("No context available")]
pub struct NoContext;

/// Request-side shape of a resolved context, as the backend expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContextQuery {
    Text {
        text: String,
    },
    Locator {
        #[serde(rename = "filename")]
        document_id: String,
        page_number: u32,
    },
}

impl TryFrom<ResolvedContext> for ContextQuery {
    type Error = NoContext;

    fn try_from(context: ResolvedContext) -> Result<Self, Self::Error> {
        match context {
            ResolvedContext::Text(text) => Ok(ContextQuery::Text { text }),
            ResolvedContext::Locator {
                document_id,
                page_number,
            } => Ok(ContextQuery::Locator {
                document_id,
                page_number,
            }),
            ResolvedContext::None => Err(NoContext),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(text: &str) -> Selection {
        Selection {
            text: text.to_string(),
            captured_at: Instant::now(),
            origin: SelectionOrigin::ViewerEvent,
        }
    }

    fn viewer(page: Option<u32>) -> ViewerContext {
        ViewerContext {
            document_id: "bio101.pdf".to_string(),
            page_number: page,
        }
    }

    #[test]
    fn selection_always_wins() {
        for context in [None, Some(viewer(None)), Some(viewer(Some(9)))] {
            let resolved = resolve(Some(&selection("  krebs cycle \n")), context.as_ref());
            assert_eq!(resolved, ResolvedContext::Text("krebs cycle".to_string()));
        }
    }

    #[test]
    fn blank_selection_defers_to_page() {
        let resolved = resolve(Some(&selection("   ")), Some(&viewer(Some(3))));
        assert_eq!(
            resolved,
            ResolvedContext::Locator {
                document_id: "bio101.pdf".to_string(),
                page_number: 3
            }
        );
    }

    #[test]
    fn unknown_page_defaults_to_first() {
        let resolved = resolve(None, Some(&viewer(None)));
        assert_eq!(
            resolved,
            ResolvedContext::Locator {
                document_id: "bio101.pdf".to_string(),
                page_number: 1
            }
        );
    }

    #[test]
    fn nothing_resolves_to_none() {
        assert_eq!(resolve(None, None), ResolvedContext::None);
        assert_eq!(
            ContextQuery::try_from(ResolvedContext::None),
            Err(NoContext)
        );
    }

    #[test]
    fn blank_text_never_becomes_a_selection() {
        assert!(Selection::new(" \t", Instant::now(), SelectionOrigin::NativeCopy).is_none());
        assert!(Selection::new("atp", Instant::now(), SelectionOrigin::NativeCopy).is_some());
    }

    #[test]
    fn queries_serialize_with_backend_field_names() {
        let text = serde_json::to_value(ContextQuery::Text {
            text: "atp".to_string(),
        })
        .unwrap();
        assert_eq!(text, serde_json::json!({ "text": "atp" }));

        let locator = serde_json::to_value(ContextQuery::Locator {
            document_id: "bio101.pdf".to_string(),
            page_number: 3,
        })
        .unwrap();
        assert_eq!(
            locator,
            serde_json::json!({ "filename": "bio101.pdf", "page_number": 3 })
        );
    }
}
