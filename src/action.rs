//! Side effects the core asks the host to perform.
//!
//! Handlers on [`crate::page::PageCore`] never touch the DOM. They return a
//! list of [`Action`]s which the browser host applies in order, and which
//! tests inspect directly.

use crate::notification::{Notification, NotificationId};
use crate::preference::DarkModePreference;
use crate::timer::TimerHandle;

/// Page element whose class list an action toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Body,
    Navbar,
    Hamburger,
    NavMenu,
    /// The `.nav-link` whose `href` is `#<section id>`.
    NavLink(String),
    /// The floating scroll-to-top button.
    ScrollTopButton,
    LoadingScreen,
}

/// One DOM mutation or timer request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add (`on`) or remove a CSS class.
    SetClass { target: Target, class: &'static str, on: bool },
    /// Switch the body theme class and the toggle icon.
    ApplyTheme(DarkModePreference),
    /// Attach a new notification element.
    ShowNotification(Notification),
    /// Play the slide-out transition of a notification.
    ExitNotification(NotificationId),
    /// Detach a notification element immediately.
    RemoveNotification(NotificationId),
    /// Show the reveal target at this index and stop observing it.
    RevealTarget(usize),
    /// Stop watching the skills section.
    StopObservingSkills,
    /// Put a skill item into its hidden, scaled-down pose.
    PrimeSkillItem(usize),
    /// Transition a skill item to full opacity and scale.
    ShowSkillItem(usize),
    /// Take the loading screen out of the layout.
    RemoveLoadingScreen,
    /// Smoothly scroll the window to a document offset.
    ScrollTo { top: f64 },
    /// Hand a `mailto:` URI to the user's mail client.
    OpenMailClient(String),
    /// Clear every contact form field.
    ResetContactForm,
    /// Replace the footer copyright line.
    SetFooterText(String),
    /// Arm a timer that reports back through `PageCore::on_timer`.
    Schedule { handle: TimerHandle, delay_ms: u32 },
    /// Disarm a timer.
    Cancel(TimerHandle),
}

impl Action {
    pub(crate) fn class(target: Target, class: &'static str, on: bool) -> Self {
        Self::SetClass { target, class, on }
    }
}
