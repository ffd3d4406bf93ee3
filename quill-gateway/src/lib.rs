//! Privileged side of the editor: directory listing, file I/O, native
//! dialogs and host platform detection.
//!
//! Every operation either returns a typed result or degrades to an empty
//! value. Nothing here panics or aborts the UI.

mod entry;
mod errors;
mod fs;
mod outcome;
mod platform;

pub mod dialogs;
#[cfg(any(test, feature = "fake"))]
mod fake;

pub use crate::entry::{DirectoryEntry, sort_entries};
pub use crate::errors::GatewayError;
#[cfg(any(test, feature = "fake"))]
pub use crate::fake::FakeFileSystem;
pub use crate::fs::{FileSystem, LocalFileSystem, list_directory_or_empty};
pub use crate::outcome::{ReadOutcome, WriteOutcome};
pub use crate::platform::HostPlatform;
