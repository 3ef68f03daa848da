//! Bounded control-command ingress.
//!
//! An input/UI layer holds a [`ControlHandle`] (cheaply cloneable, any
//! thread) and submits [`Command`]s; the simulation drains the queue at
//! the start of each tick, so commands never land mid-tick. The channel
//! is bounded: a stalled simulation surfaces as
//! [`IngressError::QueueFull`] at the producer instead of unbounded
//! memory growth.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use ripple_core::{Command, IngressError};
use smallvec::SmallVec;

/// Per-tick drain buffer. Sixteen covers a burst of pointer-drag events
/// between two ticks without spilling to the heap.
pub(crate) type CommandBatch = SmallVec<[Command; 16]>;

/// Producer side of the control queue.
#[derive(Clone, Debug)]
pub struct ControlHandle {
    tx: Sender<Command>,
}

impl ControlHandle {
    /// Submit a command for application at the next tick boundary.
    ///
    /// # Errors
    ///
    /// [`IngressError::QueueFull`] if the queue is at capacity (the
    /// command is dropped), [`IngressError::Disconnected`] if the
    /// simulation has been dropped.
    pub fn submit(&self, command: Command) -> Result<(), IngressError> {
        match self.tx.try_send(command) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(IngressError::QueueFull),
            Err(TrySendError::Disconnected(_)) => Err(IngressError::Disconnected),
        }
    }
}

/// Consumer side of the control queue, owned by the simulation.
#[derive(Debug)]
pub(crate) struct ControlQueue {
    rx: Receiver<Command>,
}

impl ControlQueue {
    /// Drain every command currently queued, in submission order.
    /// Never blocks.
    pub(crate) fn drain(&self) -> CommandBatch {
        let mut batch = CommandBatch::new();
        while let Ok(command) = self.rx.try_recv() {
            batch.push(command);
        }
        batch
    }
}

/// Create a connected handle/queue pair with the given capacity.
pub(crate) fn control_queue(capacity: usize) -> (ControlHandle, ControlQueue) {
    let (tx, rx) = bounded(capacity);
    (ControlHandle { tx }, ControlQueue { rx })
}
