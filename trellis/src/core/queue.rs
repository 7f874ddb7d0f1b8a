//! Deferred update requests between callbacks and the runtime

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::core::component::{AnyState, InstanceId};

/// One queued update request: an applier folded over the target
/// instance's state at flush time, never over a value captured when
/// the request was made.
pub(crate) struct Envelope {
    pub(crate) target: InstanceId,
    pub(crate) apply: Box<dyn FnOnce(&mut AnyState) + Send>,
}

/// Sending half of the update queue, cloned into every callback.
#[derive(Clone)]
pub(crate) struct UpdateQueue {
    tx: Sender<Envelope>,
}

impl UpdateQueue {
    pub(crate) fn push(&self, envelope: Envelope) {
        // Sending fails only once the runtime is gone; a request with
        // no runtime has nowhere to land.
        let _ = self.tx.send(envelope);
    }
}

/// Receiving half, drained by the runtime on flush.
pub(crate) struct UpdateReceiver {
    rx: Receiver<Envelope>,
}

impl UpdateReceiver {
    pub(crate) fn drain(&self) -> Vec<Envelope> {
        self.rx.try_iter().collect()
    }
}

pub(crate) fn update_channel() -> (UpdateQueue, UpdateReceiver) {
    let (tx, rx) = unbounded();
    (UpdateQueue { tx }, UpdateReceiver { rx })
}
