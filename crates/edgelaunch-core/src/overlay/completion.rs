use std::fmt;
use tracing::debug;

/// Identifies one activation of the launcher surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivationId(pub u64);

impl fmt::Display for ActivationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Single-shot completion signal handed to a launcher surface.
///
/// `complete` consumes the sender, so a surface can signal at most once.
/// Dropping it without completing signals nothing.
#[derive(Debug)]
pub struct CompletionSender {
    id: ActivationId,
    tx: async_channel::Sender<ActivationId>,
}

impl CompletionSender {
    #[must_use]
    pub fn id(&self) -> ActivationId {
        self.id
    }

    pub fn complete(self) {
        if self.tx.try_send(self.id).is_err() {
            debug!("Completion for activation {} dropped: coordinator gone", self.id);
        }
    }
}

/// Receiving end of all completion signals of one coordinator.
///
/// Cloneable so the host can await completions on its event loop while the
/// coordinator drains them synchronously.
#[derive(Debug, Clone)]
pub struct CompletionReceiver {
    rx: async_channel::Receiver<ActivationId>,
}

impl CompletionReceiver {
    pub fn try_recv(&self) -> Option<ActivationId> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next completion. Returns `None` once the coordinator is gone.
    pub async fn recv(&self) -> Option<ActivationId> {
        self.rx.recv().await.ok()
    }
}

/// Creates senders for new activations and hands out receivers.
pub(crate) struct CompletionChannel {
    tx: async_channel::Sender<ActivationId>,
    rx: CompletionReceiver,
}

impl CompletionChannel {
    pub(crate) fn new() -> Self {
        let (tx, rx) = async_channel::unbounded();
        Self {
            tx,
            rx: CompletionReceiver { rx },
        }
    }

    pub(crate) fn sender(&self, id: ActivationId) -> CompletionSender {
        CompletionSender {
            id,
            tx: self.tx.clone(),
        }
    }

    pub(crate) fn receiver(&self) -> &CompletionReceiver {
        &self.rx
    }
}
