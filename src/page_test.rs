#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::DARK_MODE_KEY;
use crate::notification::NotificationId;
use crate::preference::{DarkModePreference, MemoryStorage};
use crate::scroll::SectionBox;

// =============================================================
// Helpers
// =============================================================

fn core() -> PageCore<MemoryStorage> {
    PageCore::new(MemoryStorage::new(), SiteConfig::default(), PageShape { reveal_targets: 2, skill_items: 3 })
}

fn layout() -> Layout {
    Layout {
        sections: vec![SectionBox::new("home", 0.0, 500.0), SectionBox::new("about", 500.0, 500.0)],
        footer_top: Some(3000.0),
        viewport_height: 800.0,
    }
}

fn class_of(actions: &[Action], target: &Target, class: &str) -> Option<bool> {
    actions.iter().rev().find_map(|a| match a {
        Action::SetClass { target: t, class: c, on } if t == target && *c == class => Some(*on),
        _ => None,
    })
}

fn schedules(actions: &[Action]) -> Vec<(TimerHandle, u32)> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Schedule { handle, delay_ms } => Some((*handle, *delay_ms)),
            _ => None,
        })
        .collect()
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn startup_applies_stored_theme_and_footer() {
    let mut page = PageCore::new(
        MemoryStorage::with(DARK_MODE_KEY, "enabled"),
        SiteConfig::default(),
        PageShape::default(),
    );
    let actions = page.on_startup(2026);
    assert_eq!(actions[0], Action::ApplyTheme(DarkModePreference::Enabled));
    assert_eq!(actions[1], Action::SetFooterText("© 2026 Leo Melo. All Rights Reserved.".to_owned()));
}

#[test]
fn load_marks_body_and_runs_scroll_spy() {
    let mut page = core();
    let actions = page.on_load(0.0, &layout());
    assert_eq!(class_of(&actions, &Target::Body, "loaded"), Some(true));
    assert_eq!(class_of(&actions, &Target::NavLink("home".to_owned()), "active"), Some(true));
    assert_eq!(schedules(&actions)[0].1, LOADING_MIN_MS);
}

#[test]
fn loading_screen_fades_then_leaves_layout() {
    let mut page = core();
    let actions = page.on_load(0.0, &layout());
    let (hide, _) = schedules(&actions)[0];

    let actions = page.on_timer(hide);
    assert_eq!(class_of(&actions, &Target::LoadingScreen, "hidden"), Some(true));
    let (remove, delay) = schedules(&actions)[0];
    assert_eq!(delay, LOADING_FADE_MS);

    assert_eq!(page.on_timer(remove), vec![Action::RemoveLoadingScreen]);
    assert!(page.on_timer(remove).is_empty());
}

#[test]
fn ready_after_load_already_fired_runs_load_work() {
    let mut page = core();
    let actions = page.on_ready(true, 0.0, &layout());
    assert_eq!(class_of(&actions, &Target::Body, "loaded"), Some(true));
    assert_eq!(class_of(&actions, &Target::NavLink("home".to_owned()), "active"), Some(true));
    let armed = schedules(&actions);
    assert_eq!(armed.len(), 1);
    assert_eq!(armed[0].1, LOADING_MIN_MS);
}

#[test]
fn ready_before_load_waits_for_the_event() {
    let mut page = core();
    assert!(page.on_ready(false, 0.0, &layout()).is_empty());
    assert!(page.timers.is_empty());

    let actions = page.on_load(0.0, &layout());
    assert_eq!(class_of(&actions, &Target::Body, "loaded"), Some(true));
}

#[test]
fn second_load_only_resyncs_scroll_spy() {
    let mut page = core();
    page.on_ready(true, 0.0, &layout());
    let actions = page.on_load(550.0, &layout());
    assert!(schedules(&actions).is_empty());
    assert_eq!(class_of(&actions, &Target::Body, "loaded"), None);
    assert_eq!(class_of(&actions, &Target::NavLink("about".to_owned()), "active"), Some(true));
    assert_eq!(page.timers.len(), 1);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scroll_emits_every_flag() {
    let mut page = core();
    let actions = page.on_scroll(550.0, &layout());
    assert_eq!(class_of(&actions, &Target::Navbar, "scrolled"), Some(true));
    assert_eq!(class_of(&actions, &Target::NavLink("home".to_owned()), "active"), Some(false));
    assert_eq!(class_of(&actions, &Target::NavLink("about".to_owned()), "active"), Some(true));
    assert_eq!(class_of(&actions, &Target::ScrollTopButton, "active"), Some(true));
    assert_eq!(page.scroll_state().active_section.as_deref(), Some("about"));
}

#[test]
fn scroll_past_sections_clears_every_link() {
    let mut page = core();
    let actions = page.on_scroll(1100.0, &layout());
    assert_eq!(class_of(&actions, &Target::NavLink("home".to_owned()), "active"), Some(false));
    assert_eq!(class_of(&actions, &Target::NavLink("about".to_owned()), "active"), Some(false));
}

#[test]
fn repeated_scroll_is_idempotent() {
    let mut page = core();
    let first = page.on_scroll(700.0, &layout());
    let second = page.on_scroll(700.0, &layout());
    assert_eq!(first, second);
}

// =============================================================
// Clicks
// =============================================================

#[test]
fn theme_toggle_persists() {
    let mut page = core();
    assert_eq!(page.on_theme_toggle(), vec![Action::ApplyTheme(DarkModePreference::Enabled)]);
    assert_eq!(page.theme.load(), DarkModePreference::Enabled);
    assert_eq!(page.on_theme_toggle(), vec![Action::ApplyTheme(DarkModePreference::Disabled)]);
    assert_eq!(page.theme.load(), DarkModePreference::Disabled);
}

#[test]
fn nav_link_closes_menu_and_scrolls_below_header() {
    let mut page = core();
    page.on_hamburger_click();
    assert!(page.menu.is_open());

    let actions = page.on_nav_link_click(Some(500.0));
    assert!(!page.menu.is_open());
    assert_eq!(actions.last(), Some(&Action::ScrollTo { top: 420.0 }));
}

#[test]
fn nav_link_to_missing_section_only_closes_menu() {
    let mut page = core();
    page.on_hamburger_click();

    // e.g. `href="resume.html"`: not a section on this page.
    let actions = page.on_nav_link_click(None);
    assert!(!page.menu.is_open());
    assert_eq!(class_of(&actions, &Target::Hamburger, "active"), Some(false));
    assert_eq!(class_of(&actions, &Target::NavMenu, "active"), Some(false));
    assert!(!actions.iter().any(|a| matches!(a, Action::ScrollTo { .. })));
}

#[test]
fn scroll_indicator_and_scroll_top() {
    let mut page = core();
    assert_eq!(page.on_scroll_indicator_click(Some(900.0)), vec![Action::ScrollTo { top: 820.0 }]);
    assert!(page.on_scroll_indicator_click(None).is_empty());
    assert_eq!(page.on_scroll_top_click(), vec![Action::ScrollTo { top: 0.0 }]);
}

#[test]
fn project_and_cv_clicks_notify() {
    let mut page = core();
    page.on_project_link_click("Compiler", 0.0);
    assert_eq!(
        page.notifications.current().map(|n| n.text.clone()),
        Some("Project \"Compiler\" - Link to be added".to_owned())
    );
    page.on_download_cv_click(1.0);
    assert_eq!(page.notifications.current().map(|n| n.text.as_str()), Some("Downloading CV..."));
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn invalid_form_shows_error_without_handoff() {
    let mut page = core();
    let form = ContactForm { email: "x@y.z".to_owned(), subject: "s".to_owned(), message: "m".to_owned(), ..ContactForm::default() };
    let actions = page.on_contact_submit(&form, 0.0);
    assert!(!actions.iter().any(|a| matches!(a, Action::OpenMailClient(_) | Action::ResetContactForm)));
    let current = page.notifications.current().cloned();
    assert_eq!(current.as_ref().map(|n| n.kind), Some(NotificationKind::Error));
    assert_eq!(current.map(|n| n.text), Some("Please fill in all fields".to_owned()));
}

#[test]
fn valid_form_hands_off_notifies_then_resets() {
    let mut page = core();
    let form = ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hi there".to_owned(),
        message: "Hello".to_owned(),
    };
    let actions = page.on_contact_submit(&form, 0.0);

    let Some(Action::OpenMailClient(uri)) = actions.first() else {
        panic!("handoff should come first");
    };
    assert!(uri.starts_with("mailto:info@leomelo.dev?subject=Hi%20there&body="));
    assert!(matches!(&actions[1], Action::ShowNotification(n) if n.kind == NotificationKind::Success));
    assert_eq!(actions.last(), Some(&Action::ResetContactForm));
    assert_eq!(actions.iter().filter(|a| matches!(a, Action::OpenMailClient(_))).count(), 1);
}

// =============================================================
// Timers
// =============================================================

#[test]
fn superseded_dismiss_timer_is_inert() {
    let mut page = core();
    let first = page.notify("a", NotificationKind::Success, 0.0);
    let (stale, _) = schedules(&first)[0];
    page.notify("b", NotificationKind::Error, 100.0);

    assert!(page.on_timer(stale).is_empty());
    assert_eq!(page.notifications.current().map(|n| n.text.as_str()), Some("b"));
}

#[test]
fn dismiss_timer_runs_exit_then_remove() {
    let mut page = core();
    let actions = page.notify("a", NotificationKind::Success, 0.0);
    let (dismiss, _) = schedules(&actions)[0];

    let actions = page.on_timer(dismiss);
    assert_eq!(actions[0], Action::ExitNotification(NotificationId(1)));
    let (remove, _) = schedules(&actions)[0];
    assert_eq!(page.on_timer(remove), vec![Action::RemoveNotification(NotificationId(1))]);
    assert!(page.notifications.current().is_none());
}

#[test]
fn skills_timers_prime_then_show_each_item() {
    let mut page = core();
    let actions = page.on_skills_intersection(true);
    let primes = schedules(&actions);
    assert_eq!(primes.len(), 3);

    let actions = page.on_timer(primes[2].0);
    assert_eq!(actions[0], Action::PrimeSkillItem(2));
    let (show, _) = schedules(&actions)[0];
    assert_eq!(page.on_timer(show), vec![Action::ShowSkillItem(2)]);
}

#[test]
fn reveal_passes_through() {
    let mut page = core();
    assert_eq!(page.on_reveal_intersection(0, true), vec![Action::RevealTarget(0)]);
    assert!(page.on_reveal_intersection(0, true).is_empty());
}
