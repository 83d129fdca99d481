//! Discrete commands delivered by the host's command channel.

use crate::capture::CaptureMode;
use crate::surface::Snapshot;
use crate::tools::ToolKind;
use serde::{Deserialize, Serialize};

/// A command from the host (popup, keyboard shortcut, context menu).
///
/// Each maps 1:1 onto a session operation; every command except
/// `ToggleExtension` is a no-op while the overlay is disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    SetTool(ToolKind),
    /// Color as a hex token, e.g. `#ff0000`. Malformed tokens are
    /// logged and ignored.
    SetColor(String),
    SetSize(f64),
    ClearCanvas,
    Undo,
    Redo,
    TakeScreenshot(CaptureMode),
    CopyToClipboard,
    ToggleExtension(bool),
}

/// What applying a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The command was consumed and applied.
    Applied,
    /// Disabled overlay, malformed payload, or nothing to do.
    Ignored,
    /// The current surface pixels, for the host to encode and place on
    /// the clipboard.
    Clipboard(Snapshot),
    /// A capture began; the host runs its provider and reports back via
    /// `Session::finish_capture`.
    CaptureStarted(CaptureMode),
}
