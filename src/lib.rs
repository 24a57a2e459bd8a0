//! Client-side behavior layer for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and attached to a static HTML page.
//! It owns every interactive behavior of the page: dark-mode toggle, mobile
//! menu, scroll-spy, smooth scrolling, the contact form's `mailto:` handoff,
//! toast notifications and scroll-triggered reveals. The markup and styles are
//! external; the crate only toggles classes and inline styles on them.
//!
//! Without the `hydrate` feature only the pure state core is built, which is
//! what the tests exercise.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | [`page::PageCore`], one handler per DOM event |
//! | [`action`] | DOM mutations and timer requests returned by handlers |
//! | [`notification`] | Single-slot toast lifecycle |
//! | [`scroll`] | Scroll-spy derivations and layout snapshot |
//! | [`reveal`] | One-shot intersection reveals |
//! | [`menu`] | Mobile menu state |
//! | [`contact`] | Contact form validation and `mailto:` URI |
//! | [`preference`] | Dark-mode preference and storage seam |
//! | [`timer`] | Cancellable scheduled tasks |
//! | [`config`] | Site configuration |
//! | [`error`] | Startup errors |
//! | [`consts`] | Thresholds, durations and keys |
//! | `dom`, `host` | Browser binding (`hydrate` only) |

pub mod action;
pub mod config;
pub mod consts;
pub mod contact;
pub mod error;
pub mod menu;
pub mod notification;
pub mod page;
pub mod preference;
pub mod reveal;
pub mod scroll;
pub mod timer;

#[cfg(feature = "hydrate")]
mod dom;
#[cfg(feature = "hydrate")]
mod host;

/// WASM entry point: bind the page once the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let config = dom::read_config();
    if let Err(err) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from(format!("console logger unavailable: {err}")));
    }
    if let Err(err) = host::Page::mount(config) {
        log::error!("portfolio behavior not attached: {err}");
    }
}

/// `showNotification(message, kind?)` for other scripts on the page. `kind`
/// is `"success"` (the default) or `"error"`; anything else shows as an error.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    host::notify(message, kind.as_deref().unwrap_or("success"));
}
