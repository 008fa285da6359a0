//! Editor: key dispatch and the session loop.
//!
//! ```text
//!  bytes ──▶ KeyDecoder ──▶ Editor::process_key ──▶ TextBuffer / Viewport
//!                                   │
//!                                   ▼
//!               stdout ◀── one write ◀── Compositor
//! ```

#[allow(clippy::module_inception)]
mod editor;
mod session;

pub use editor::{Action, Editor, HELP_MESSAGE};
pub use session::{event_loop, run};
