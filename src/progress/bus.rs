//! In-process event bus for progress events.

use std::sync::mpsc::{channel, Receiver, SendError, Sender};

use parking_lot::Mutex;

use crate::progress::event::ProgressEvent;
use crate::progress::ProgressListener;

/// Channel-backed listener. Sending never blocks; a dropped receiver turns
/// further events into no-ops.
pub struct ProgressBus {
    sender: Mutex<Sender<ProgressEvent>>,
}

impl ProgressBus {
    pub fn new_pair() -> (Self, Receiver<ProgressEvent>) {
        let (sender, receiver) = channel();
        (
            Self {
                sender: Mutex::new(sender),
            },
            receiver,
        )
    }

    pub fn emit(&self, event: ProgressEvent) -> Result<(), SendError<ProgressEvent>> {
        self.sender.lock().send(event)
    }
}

impl ProgressListener for ProgressBus {
    fn on_event(&self, event: &ProgressEvent) {
        let _ = self.emit(event.clone());
    }
}
