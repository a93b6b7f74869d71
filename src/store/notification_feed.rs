use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use crate::simulator::{NotificationEvent, NotificationSink};

/// Bounded toast queue; the oldest toast is dropped when full.
#[derive(Clone)]
pub struct NotificationFeed {
    capacity: usize,
    toasts: Arc<Mutex<VecDeque<NotificationEvent>>>,
}

impl NotificationFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            toasts: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    pub fn push(&self, event: NotificationEvent) {
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        if toasts.len() == self.capacity {
            toasts.pop_front();
        }
        toasts.push_back(event);
    }

    /// Take every pending toast, oldest first
    pub fn drain(&self) -> Vec<NotificationEvent> {
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for NotificationFeed {
    fn notify(&self, event: NotificationEvent) {
        info!(
            "Toast for job {}: {} ({})",
            event.job_id, event.title, event.description
        );
        self.push(event);
    }
}
