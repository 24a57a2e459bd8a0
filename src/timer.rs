//! Cancellable scheduled tasks.
//!
//! The core never touches a real clock. It registers a [`Task`] here, gets a
//! [`TimerHandle`] back and emits a schedule action carrying that handle; the
//! host arms a browser timeout and reports back with [`Timers::take`] when it
//! fires. Cancelling removes the task, so a timeout that still fires after its
//! handle was cancelled resolves to nothing.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::collections::HashMap;

use crate::notification::NotificationId;

/// Opaque handle of one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Deferred work the core asks the host to run later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Start the exit transition of a notification.
    DismissNotification(NotificationId),
    /// Detach a notification after its exit transition.
    RemoveNotification(NotificationId),
    /// Put a skill item into its hidden starting pose.
    PrimeSkillItem(usize),
    /// Animate a primed skill item to its final pose.
    ShowSkillItem(usize),
    /// Fade the loading screen out.
    HideLoadingScreen,
    /// Take the faded loading screen out of the layout.
    RemoveLoadingScreen,
}

/// Table of pending tasks keyed by handle.
#[derive(Debug, Default)]
pub struct Timers {
    next: u64,
    pending: HashMap<TimerHandle, Task>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task and return its fresh handle.
    pub fn schedule(&mut self, task: Task) -> TimerHandle {
        self.next += 1;
        let handle = TimerHandle(self.next);
        self.pending.insert(handle, task);
        handle
    }

    /// Forget a task. Returns `true` if it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    /// Claim the task of a fired timer. Cancelled or already fired handles yield `None`.
    pub fn take(&mut self, handle: TimerHandle) -> Option<Task> {
        self.pending.remove(&handle)
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
