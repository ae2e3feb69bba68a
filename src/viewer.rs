//! Bridge to the embedded document viewer.
//!
//! The viewer lives in a host process. It streams its events to us as
//! newline-delimited JSON on stdin and accepts commands as JSON lines on stdout.
//! Event payloads differ across viewer builds, so every raw event goes through
//! [`classify`] before anything else looks at it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Write;
use tracing::{debug, trace, warn};

/// Emitted by the host once the viewer's API handle can accept commands.
pub const APIS_READY_EVENT: &str = "APIS_READY";

const SELECTION_TEXT_FIELDS: [&str; 5] = [
    "text",
    "copiedText",
    "selectedText",
    "selectionText",
    "textSelection",
];
const PAGE_FIELDS: [&str; 2] = ["pageNumber", "pageNum"];
const COPY_EVENT: &str = "TEXT_COPY";
const DESELECT_EVENTS: [&str; 2] = ["TEXT_DESELECTED", "SELECTION_DESTROY"];
const PAGE_VIEW_EVENT: &str = "PAGE_VIEW";

/// An event exactly as the viewer reported it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawViewerEvent {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub data: Value,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl RawViewerEvent {
    pub fn new(kind: &str, data: Value) -> Self {
        Self {
            kind: Some(kind.to_string()),
            data,
            rest: Map::new(),
        }
    }

    fn data_field(&self, name: &str) -> Option<&Value> {
        self.data.as_object().and_then(|data| data.get(name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalSignal {
    Selected { text: String },
    Deselected,
    PageChanged { page: u32 },
    Unrecognized,
}

/// Normalize a raw viewer event into a canonical signal.
///
/// Deselection markers are matched before the generic "SELECT" test because
/// `TEXT_DESELECTED` would otherwise read as a selection.
pub fn classify(event: &RawViewerEvent) -> CanonicalSignal {
    let Some(kind) = event.kind.as_deref() else {
        return CanonicalSignal::Unrecognized;
    };

    if DESELECT_EVENTS.contains(&kind) {
        return CanonicalSignal::Deselected;
    }

    let upper = kind.to_ascii_uppercase();
    if kind == COPY_EVENT || upper.contains("SELECT") {
        return match selection_text(event) {
            Some(text) => CanonicalSignal::Selected { text },
            None => CanonicalSignal::Unrecognized,
        };
    }

    if upper == PAGE_VIEW_EVENT {
        return match page_number(event) {
            Some(page) => CanonicalSignal::PageChanged { page },
            None => CanonicalSignal::Unrecognized,
        };
    }

    CanonicalSignal::Unrecognized
}

fn selection_text(event: &RawViewerEvent) -> Option<String> {
    SELECTION_TEXT_FIELDS
        .iter()
        .filter_map(|field| event.data_field(field))
        .filter_map(Value::as_str)
        .find(|text| !text.is_empty())
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

fn page_number(event: &RawViewerEvent) -> Option<u32> {
    let in_data = PAGE_FIELDS.iter().filter_map(|field| event.data_field(field));
    let top_level = PAGE_FIELDS.iter().filter_map(|field| event.rest.get(*field));
    in_data.chain(top_level).find_map(positive_page)
}

fn positive_page(value: &Value) -> Option<u32> {
    let page = match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0 && *f > 0.0).map(|f| f as u64)),
        Value::String(raw) => raw.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u32::try_from(page).ok().filter(|page| *page > 0)
}

/// What arrived from the host on one stdin line.
#[derive(Debug, Clone, PartialEq)]
pub enum HostLine {
    ApisReady,
    Event(RawViewerEvent),
}

pub fn parse_host_line(line: &str) -> Option<HostLine> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str::<RawViewerEvent>(line) {
        Ok(event) if event.kind.as_deref() == Some(APIS_READY_EVENT) => Some(HostLine::ApisReady),
        Ok(event) => {
            trace!(kind = ?event.kind, "Viewer host event");
            Some(HostLine::Event(event))
        }
        Err(err) => {
            warn!("Dropping malformed viewer host line: {err}");
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum HostCommand {
    #[serde(rename_all = "camelCase")]
    PreviewFile {
        client_id: String,
        url: String,
        file_name: String,
    },
    #[serde(rename_all = "camelCase")]
    GotoLocation { page_number: u32 },
}

/// Writes viewer commands to the host over stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewerHost;

impl ViewerHost {
    pub fn send(&self, command: &HostCommand) -> Result<()> {
        let line = serde_json::to_string(command).context("serialize viewer command")?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{line}").context("write viewer command")?;
        out.flush().context("flush viewer command")?;
        debug!(%line, "Sent viewer command");
        Ok(())
    }
}
