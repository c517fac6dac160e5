//! Menu model: the immutable navigation template and the per-mount state
//! derived from it.

pub mod entry;
pub mod state;

pub use entry::{validate_pathname, MenuEntry, MenuTemplate};
pub use state::{MenuRecord, MenuState};
