//! Workspace/mode navigation state.
//!
//! Tracks the active workspace, the active mode within it and nine selection
//! slots. Switching workspace is an unconditional reset of mode and
//! selections; switching mode touches nothing else.

mod selection;
mod state;
mod workspace;

pub use selection::Selections;
pub use state::NavigationState;
pub use workspace::{Mode, Workspace};
