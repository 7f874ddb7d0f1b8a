//! Component trait and the link components use to request updates

use std::any::Any;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::callback::Callback;
use crate::core::node::Node;
use crate::core::queue::{Envelope, UpdateQueue};

/// Unique identifier for mounted component instances
pub type InstanceId = u64;

/// Type-erased instance state
pub(crate) type AnyState = dyn Any + Send;

/// Type-erased component props
pub(crate) type AnyProps = dyn Any + Send + Sync;

/// Helper to allocate instance ids
pub(crate) fn next_instance_id() -> InstanceId {
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Core trait for components.
///
/// `Self` is the component's owned state: created once from the initial
/// props, changed only by the runtime folding queued messages over it,
/// and dropped when the instance unmounts. `view` declares output from
/// the current state and props and must not mutate either.
pub trait Component: Sized + Send + 'static {
    /// Read-only input passed down by the owner.
    type Props: Clone + Send + Sync + 'static;

    /// Update request folded over the state at apply time.
    type Message: Send + 'static;

    /// Build the initial state from the first props.
    fn create(props: &Self::Props) -> Self;

    /// Fold one message over the current state.
    fn update(&mut self, message: Self::Message);

    /// Declare the output tree for the current state and props.
    fn view(&self, props: &Self::Props, link: &Link<Self>) -> Node;
}

/// Handle a component uses to mint callbacks bound to its own updates.
///
/// A link never exposes the state itself; descendants holding one of
/// its callbacks can only describe a transformation to request.
pub struct Link<C: Component> {
    id: InstanceId,
    queue: UpdateQueue,
    _component: PhantomData<fn(C)>,
}

impl<C: Component> Link<C> {
    pub(crate) fn new(id: InstanceId, queue: UpdateQueue) -> Self {
        Self {
            id,
            queue,
            _component: PhantomData,
        }
    }

    /// Create a callback that turns its input into a message for this
    /// component. The message is built when the callback fires and
    /// applied against whatever the state is at flush time.
    pub fn callback<IN, F>(&self, to_message: F) -> Callback<IN>
    where
        IN: 'static,
        F: Fn(IN) -> C::Message + Send + Sync + 'static,
    {
        let target = self.id;
        let queue = self.queue.clone();
        Callback::new(move |input: IN| {
            let message = to_message(input);
            queue.push(Envelope {
                target,
                apply: Box::new(move |state| {
                    if let Some(state) = state.downcast_mut::<C>() {
                        state.update(message);
                    }
                }),
            });
        })
    }
}
