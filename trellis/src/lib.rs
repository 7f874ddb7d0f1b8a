//! Trellis - declarative component trees with owner-held state
//!
//! Components declare their output as pure functions of state and props.
//! All mutation flows through queued update messages folded over the
//! owning component's state by the runtime, which diffs declared trees
//! at component boundaries and preserves keyed instances (and their
//! state) across re-renders.

pub mod core;
pub mod render;
pub mod runtime;

pub use render::Rendered;
pub use runtime::Runtime;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{Callback, Component, InstanceId, Key, Link, Node};
    pub use crate::render::Rendered;
    pub use crate::runtime::Runtime;
}
