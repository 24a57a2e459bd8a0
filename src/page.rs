//! Page state core: every event handler of the behavior layer.
//!
//! ARCHITECTURE
//! ============
//! `PageCore` owns one controller per concern (theme, menu, notifications,
//! reveal watchers, timers) and exposes one method per DOM event. Each method
//! takes the event's data, updates state and returns the [`Action`]s the host
//! must apply. It never reads the DOM or a clock itself, so the whole page can
//! be driven from tests.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::action::{Action, Target};
use crate::config::SiteConfig;
use crate::consts::{LOADING_FADE_MS, LOADING_MIN_MS};
use crate::contact::ContactForm;
use crate::menu::MobileMenu;
use crate::notification::{NotificationCenter, NotificationKind};
use crate::preference::{PreferenceStorage, ThemeController};
use crate::reveal::{RevealAnimator, SkillsReveal};
use crate::scroll::{Layout, ScrollState, scroll_target};
use crate::timer::{Task, TimerHandle, Timers};

/// Sizes of the element groups found on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageShape {
    pub reveal_targets: usize,
    pub skill_items: usize,
}

pub struct PageCore<S> {
    pub config: SiteConfig,
    pub theme: ThemeController<S>,
    pub menu: MobileMenu,
    pub notifications: NotificationCenter,
    pub reveal: RevealAnimator,
    pub skills: SkillsReveal,
    pub timers: Timers,
    scroll: ScrollState,
    loaded: bool,
}

impl<S: PreferenceStorage> PageCore<S> {
    #[must_use]
    pub fn new(storage: S, config: SiteConfig, shape: PageShape) -> Self {
        Self {
            config,
            theme: ThemeController::new(storage),
            menu: MobileMenu::default(),
            notifications: NotificationCenter::new(),
            reveal: RevealAnimator::new(shape.reveal_targets),
            skills: SkillsReveal::new(shape.skill_items),
            timers: Timers::new(),
            scroll: ScrollState::default(),
            loaded: false,
        }
    }

    /// Scroll-spy state as of the last scroll event.
    #[must_use]
    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    // --- Lifecycle ---

    /// Script start: apply the stored theme and stamp the footer year.
    pub fn on_startup(&mut self, year: u32) -> Vec<Action> {
        let theme = self.theme.applied();
        log::info!("dark mode: {}", theme.as_str());
        vec![Action::ApplyTheme(theme), Action::SetFooterText(self.config.footer_text(year))]
    }

    /// Handlers are bound. The module may start after `load` has already
    /// fired, in which case no `load` event will follow and the load work runs
    /// now.
    pub fn on_ready(&mut self, already_loaded: bool, y: f64, layout: &Layout) -> Vec<Action> {
        if !already_loaded {
            log::debug!("waiting for window load");
            return Vec::new();
        }
        self.on_load(y, layout)
    }

    /// Window `load`: start the loading-screen fade and sync the scroll-spy.
    /// Runs once; a repeat only re-syncs the scroll-spy.
    pub fn on_load(&mut self, y: f64, layout: &Layout) -> Vec<Action> {
        if self.loaded {
            return self.on_scroll(y, layout);
        }
        self.loaded = true;
        let handle = self.timers.schedule(Task::HideLoadingScreen);
        let mut actions = vec![
            Action::Schedule { handle, delay_ms: LOADING_MIN_MS },
            Action::class(Target::Body, "loaded", true),
        ];
        actions.extend(self.on_scroll(y, layout));
        log::info!("Portfolio loaded successfully!");
        actions
    }

    /// Window `scroll`: recompute every scroll-derived flag.
    pub fn on_scroll(&mut self, y: f64, layout: &Layout) -> Vec<Action> {
        self.scroll = ScrollState::derive(y, layout);
        let mut actions = Vec::with_capacity(layout.sections.len() + 2);
        actions.push(Action::class(Target::Navbar, "scrolled", self.scroll.navbar_scrolled));
        for section in &layout.sections {
            let on = self.scroll.active_section.as_deref() == Some(section.id.as_str());
            actions.push(Action::class(Target::NavLink(section.id.clone()), "active", on));
        }
        actions.push(Action::class(Target::ScrollTopButton, "active", self.scroll.scroll_top_visible));
        actions
    }

    /// A scheduled timer fired.
    pub fn on_timer(&mut self, handle: TimerHandle) -> Vec<Action> {
        let Some(task) = self.timers.take(handle) else {
            log::debug!("timer {} fired after cancellation", handle.raw());
            return Vec::new();
        };
        match task {
            Task::DismissNotification(id) => self.notifications.on_dismiss(id, &mut self.timers),
            Task::RemoveNotification(id) => self.notifications.on_remove(id),
            Task::PrimeSkillItem(index) => self.skills.on_prime(index, &mut self.timers),
            Task::ShowSkillItem(index) => vec![Action::ShowSkillItem(index)],
            Task::HideLoadingScreen => {
                let handle = self.timers.schedule(Task::RemoveLoadingScreen);
                vec![
                    Action::class(Target::LoadingScreen, "hidden", true),
                    Action::Schedule { handle, delay_ms: LOADING_FADE_MS },
                ]
            }
            Task::RemoveLoadingScreen => vec![Action::RemoveLoadingScreen],
        }
    }

    // --- Notifications ---

    pub fn notify(&mut self, text: impl Into<String>, kind: NotificationKind, now_ms: f64) -> Vec<Action> {
        self.notifications.show(text, kind, now_ms, &mut self.timers)
    }

    // --- Clicks ---

    pub fn on_theme_toggle(&mut self) -> Vec<Action> {
        let next = self.theme.toggle();
        log::debug!("dark mode toggled: {}", next.as_str());
        vec![Action::ApplyTheme(next)]
    }

    pub fn on_hamburger_click(&mut self) -> Vec<Action> {
        self.menu.toggle()
    }

    /// Any `.nav-link` click. `target_top` is the linked section's offset when
    /// the link points at a section on this page.
    pub fn on_nav_link_click(&mut self, target_top: Option<f64>) -> Vec<Action> {
        let mut actions = self.menu.close();
        if let Some(top) = target_top {
            actions.push(Action::ScrollTo { top: scroll_target(top) });
        }
        actions
    }

    /// Hero scroll-down arrow click.
    #[allow(clippy::unused_self)]
    pub fn on_scroll_indicator_click(&mut self, target_top: Option<f64>) -> Vec<Action> {
        target_top.map(|top| vec![Action::ScrollTo { top: scroll_target(top) }]).unwrap_or_default()
    }

    /// Either scroll-to-top button.
    #[allow(clippy::unused_self)]
    pub fn on_scroll_top_click(&mut self) -> Vec<Action> {
        vec![Action::ScrollTo { top: 0.0 }]
    }

    pub fn on_contact_submit(&mut self, form: &ContactForm, now_ms: f64) -> Vec<Action> {
        if let Err(err) = form.validate() {
            log::debug!("contact form rejected: {err}");
            return self.notify(err.to_string(), NotificationKind::Error, now_ms);
        }
        let mut actions = vec![Action::OpenMailClient(form.mailto_uri(&self.config.contact_recipient))];
        actions.extend(self.notify("Message sent successfully!", NotificationKind::Success, now_ms));
        actions.push(Action::ResetContactForm);
        actions
    }

    pub fn on_project_link_click(&mut self, title: &str, now_ms: f64) -> Vec<Action> {
        self.notify(format!("Project \"{title}\" - Link to be added"), NotificationKind::Success, now_ms)
    }

    pub fn on_download_cv_click(&mut self, now_ms: f64) -> Vec<Action> {
        self.notify("Downloading CV...", NotificationKind::Success, now_ms)
    }

    // --- Intersection ---

    pub fn on_reveal_intersection(&mut self, index: usize, intersecting: bool) -> Vec<Action> {
        self.reveal.on_intersection(index, intersecting)
    }

    pub fn on_skills_intersection(&mut self, intersecting: bool) -> Vec<Action> {
        self.skills.on_intersection(intersecting, &mut self.timers)
    }
}
