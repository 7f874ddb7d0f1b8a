//! Callback values passed down as props

use std::fmt;
use std::sync::Arc;

/// A cloneable function value an owner hands to a descendant.
///
/// Invoking a callback never mutates anything in the receiver's scope;
/// the closures minted by [`Link::callback`](crate::core::Link::callback)
/// enqueue an update request for the owning component instead.
pub struct Callback<IN = ()> {
    f: Arc<dyn Fn(IN) + Send + Sync>,
}

impl<IN: 'static> Callback<IN> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(IN) + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// Invoke the callback with a value.
    pub fn emit(&self, value: IN) {
        (self.f)(value);
    }

    /// Adapt the callback to accept a different input.
    pub fn reform<T, F>(&self, adapt: F) -> Callback<T>
    where
        T: 'static,
        F: Fn(T) -> IN + Send + Sync + 'static,
    {
        let f = Arc::clone(&self.f);
        Callback::new(move |value| f(adapt(value)))
    }
}

impl<IN> Clone for Callback<IN> {
    fn clone(&self) -> Self {
        Self { f: Arc::clone(&self.f) }
    }
}

impl<IN> fmt::Debug for Callback<IN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}
