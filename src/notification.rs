//! Single-slot toast notifications.
//!
//! At most one notification is on screen. Showing a new one removes the old
//! one on the spot (no exit transition) and cancels its timers, so a stale
//! dismiss can never hide its successor. A shown notification goes
//! `Visible → Exiting → removed` on two timers.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use crate::action::Action;
use crate::consts::{ERROR_COLOR, NOTIFICATION_DISMISS_MS, NOTIFICATION_EXIT_MS, SUCCESS_COLOR};
use crate::timer::{Task, TimerHandle, Timers};

/// Identity of one shown notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u64);

/// Visual category. Only these two exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Parse a kind name. Unknown names fall back to `Error`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "error" => Self::Error,
            other => {
                log::warn!("unknown notification kind {other:?}, using error");
                Self::Error
            }
        }
    }

    /// Class added next to `notification` on the element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_COLOR,
            Self::Error => ERROR_COLOR,
        }
    }
}

/// A transient message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub text: String,
    pub kind: NotificationKind,
    /// Milliseconds since the epoch at creation.
    pub created_at_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Exiting,
}

#[derive(Debug)]
struct Displayed {
    notification: Notification,
    phase: Phase,
    timer: TimerHandle,
}

/// Owner of the notification slot.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    current: Option<Displayed>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Display `text`, superseding whatever is on screen.
    pub fn show(&mut self, text: impl Into<String>, kind: NotificationKind, now_ms: f64, timers: &mut Timers) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(old) = self.current.take() {
            if timers.cancel(old.timer) {
                actions.push(Action::Cancel(old.timer));
            }
            actions.push(Action::RemoveNotification(old.notification.id));
        }

        self.next_id += 1;
        let notification = Notification {
            id: NotificationId(self.next_id),
            text: text.into(),
            kind,
            created_at_ms: now_ms,
        };
        let id = notification.id;
        log::debug!("notification {} shown: {:?}", id.0, notification.text);
        actions.push(Action::ShowNotification(notification.clone()));

        let timer = timers.schedule(Task::DismissNotification(id));
        actions.push(Action::Schedule { handle: timer, delay_ms: NOTIFICATION_DISMISS_MS });
        self.current = Some(Displayed { notification, phase: Phase::Visible, timer });
        actions
    }

    /// Dismiss timer fired: start the exit transition if `id` is still on screen.
    pub fn on_dismiss(&mut self, id: NotificationId, timers: &mut Timers) -> Vec<Action> {
        let Some(shown) = self.current.as_mut() else {
            return Vec::new();
        };
        if shown.notification.id != id || shown.phase != Phase::Visible {
            return Vec::new();
        }
        shown.phase = Phase::Exiting;
        shown.timer = timers.schedule(Task::RemoveNotification(id));
        vec![
            Action::ExitNotification(id),
            Action::Schedule { handle: shown.timer, delay_ms: NOTIFICATION_EXIT_MS },
        ]
    }

    /// Exit transition finished: detach `id` if it is still the one on screen.
    pub fn on_remove(&mut self, id: NotificationId) -> Vec<Action> {
        match &self.current {
            Some(shown) if shown.notification.id == id && shown.phase == Phase::Exiting => {
                self.current = None;
                vec![Action::RemoveNotification(id)]
            }
            _ => Vec::new(),
        }
    }

    /// The notification on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|shown| &shown.notification)
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.current.as_ref().map(|shown| shown.phase)
    }
}
