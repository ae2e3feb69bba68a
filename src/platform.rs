//! Native text selection of the host platform.

use crate::geometry::Rect;
use anyhow::{Result, anyhow};
use tracing::debug;

/// Read access to whatever text the user currently has selected.
pub trait PlatformSelection {
    fn selected_text(&self) -> Result<String>;

    /// Bounding box of the live selection in window coordinates.
    fn selection_rect(&self) -> Result<Option<Rect>>;
}

/// Selection backed by the system clipboard.
///
/// On Linux this reads the primary selection, which tracks highlighted text
/// without a copy; elsewhere the regular clipboard is read.
#[derive(Debug, Default)]
pub struct ClipboardSelection;

impl PlatformSelection for ClipboardSelection {
    fn selected_text(&self) -> Result<String> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| anyhow!("failed to access clipboard: {e}"))?;
        let text = read_selection(&mut clipboard)?;
        debug!(chars = text.chars().count(), "Read platform selection");
        Ok(text)
    }

    fn selection_rect(&self) -> Result<Option<Rect>> {
        Err(anyhow!("selection geometry is not exposed by the clipboard"))
    }
}

#[cfg(target_os = "linux")]
fn read_selection(clipboard: &mut arboard::Clipboard) -> Result<String> {
    use arboard::{GetExtLinux, LinuxClipboardKind};

    match clipboard.get().clipboard(LinuxClipboardKind::Primary).text() {
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => clipboard
            .get_text()
            .map_err(|e| anyhow!("failed to read clipboard: {e}")),
        Err(e) => Err(anyhow!("failed to read primary selection: {e}")),
    }
}

#[cfg(not(target_os = "linux"))]
fn read_selection(clipboard: &mut arboard::Clipboard) -> Result<String> {
    clipboard
        .get_text()
        .map_err(|e| anyhow!("failed to read clipboard: {e}"))
}
