//! Declared output trees

use std::any::TypeId;

use crate::core::callback::Callback;
use crate::core::component::{AnyProps, AnyState, Component, InstanceId, Link};
use crate::core::queue::UpdateQueue;

/// Stable identity key for repeated siblings
pub type Key = u64;

pub(crate) type CreateFn = fn(&AnyProps) -> Box<AnyState>;
pub(crate) type ViewFn = fn(&AnyState, &AnyProps, InstanceId, &UpdateQueue) -> Node;

/// A node in a component's declared output.
pub enum Node {
    /// Plain text content
    Text(String),
    /// An interactive control; pressing it fires the callback
    Trigger {
        label: String,
        on_press: Callback<()>,
    },
    /// A named grouping of child nodes
    Section {
        name: &'static str,
        children: Vec<Node>,
    },
    /// A nested component, mounted and reconciled by the runtime
    Component(ChildSpec),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn trigger(label: impl Into<String>, on_press: Callback<()>) -> Self {
        Node::Trigger {
            label: label.into(),
            on_press,
        }
    }

    pub fn section(name: &'static str, children: Vec<Node>) -> Self {
        Node::Section { name, children }
    }

    /// A child component, matched to its previous instance by position.
    pub fn component<C: Component>(props: C::Props) -> Self {
        Node::Component(ChildSpec::of::<C>(None, props))
    }

    /// A child component matched to its previous instance by key,
    /// independent of its position among siblings.
    pub fn keyed<C: Component>(key: Key, props: C::Props) -> Self {
        Node::Component(ChildSpec::of::<C>(Some(key), props))
    }
}

/// Type-erased description of one child component occurrence.
pub struct ChildSpec {
    pub(crate) key: Option<Key>,
    pub(crate) type_id: TypeId,
    pub(crate) type_name: &'static str,
    pub(crate) props: Box<AnyProps>,
    pub(crate) create: CreateFn,
    pub(crate) view: ViewFn,
}

impl ChildSpec {
    pub(crate) fn of<C: Component>(key: Option<Key>, props: C::Props) -> Self {
        Self {
            key,
            type_id: TypeId::of::<C>(),
            type_name: std::any::type_name::<C>(),
            props: Box::new(props),
            create: create_erased::<C>,
            view: view_erased::<C>,
        }
    }
}

fn create_erased<C: Component>(props: &AnyProps) -> Box<AnyState> {
    let props = props
        .downcast_ref::<C::Props>()
        .expect("child spec carries the props of its own component type");
    Box::new(C::create(props))
}

fn view_erased<C: Component>(
    state: &AnyState,
    props: &AnyProps,
    id: InstanceId,
    queue: &UpdateQueue,
) -> Node {
    let state = state
        .downcast_ref::<C>()
        .expect("instance holds the state of its own component type");
    let props = props
        .downcast_ref::<C::Props>()
        .expect("instance holds the props of its own component type");
    let link = Link::new(id, queue.clone());
    state.view(props, &link)
}
