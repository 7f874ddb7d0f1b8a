//! Mounted component instances and their identity keys

use std::any::TypeId;
use std::collections::HashMap;

use crate::core::{AnyProps, AnyState, InstanceId, Key, ViewFn};
use crate::render::Fragment;

/// Identity of one child occurrence within its parent's output.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) enum ChildKey {
    /// Explicitly keyed: stable across reordering and removals.
    Keyed(TypeId, Key),
    /// Unkeyed: matched by component type and occurrence order.
    Positional(TypeId, usize),
}

/// A live component instance owned by the runtime.
pub(crate) struct MountedInstance {
    pub(crate) type_name: &'static str,
    pub(crate) depth: usize,
    pub(crate) state: Box<AnyState>,
    pub(crate) props: Box<AnyProps>,
    pub(crate) view: ViewFn,
    /// Identity association from the most recent render.
    pub(crate) children: HashMap<ChildKey, InstanceId>,
    /// Committed output of the most recent render.
    pub(crate) fragment: Fragment,
}
