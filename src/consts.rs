//! Shared numeric and string constants for the page behavior layer.

// ── Scroll spy ──────────────────────────────────────────────────

/// Offset past which the navbar switches to its compact "scrolled" look.
pub const NAVBAR_SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// Sections become active this many pixels before their top reaches the viewport top.
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 100.0;

/// Offset past which the floating scroll-to-top button may appear.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;

/// Height of the fixed header subtracted from smooth-scroll targets.
pub const HEADER_ALLOWANCE_PX: f64 = 80.0;

/// Section targeted by the hero scroll-down indicator.
pub const SCROLL_INDICATOR_TARGET: &str = "about";

// ── Notifications ───────────────────────────────────────────────

/// Time a notification stays on screen before its exit transition starts.
pub const NOTIFICATION_DISMISS_MS: u32 = 3000;

/// Length of the slide-out exit transition.
pub const NOTIFICATION_EXIT_MS: u32 = 300;

pub const SUCCESS_COLOR: &str = "#10b981";
pub const ERROR_COLOR: &str = "#ef4444";

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the effective viewport by 50px at the bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Vertical offset of a hidden reveal target.
pub const REVEAL_OFFSET_PX: f64 = 30.0;

pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

pub const SKILLS_THRESHOLD: f64 = 0.3;

/// Per-item delay of the staggered skills reveal.
pub const SKILL_STAGGER_MS: u32 = 30;

/// Gap between priming a skill item and starting its transition.
pub const SKILL_PRIME_MS: u32 = 50;

pub const SKILL_TRANSITION: &str = "all 0.3s ease";

// ── Loading screen ──────────────────────────────────────────────

/// Minimum time the loading screen stays visible after `load`.
pub const LOADING_MIN_MS: u32 = 1500;

/// Fade-out time before the loading screen leaves the layout.
pub const LOADING_FADE_MS: u32 = 500;

// ── Persistence ─────────────────────────────────────────────────

/// Storage key of the dark-mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";
