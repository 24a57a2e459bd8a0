//! Browser host: owns the core, applies its actions and wires every listener.
//!
//! ARCHITECTURE
//! ============
//! `Page` is created once at startup and shared (`Rc`) by every listener,
//! observer and timer closure. Events go in through [`Page::run`], which
//! borrows the core only while the handler runs and then applies the returned
//! actions. Timers are `gloo` timeouts keyed by the core's handles; dropping a
//! timeout cancels it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use js_sys::{Array, Date};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

use crate::action::{Action, Target};
use crate::config::SiteConfig;
use crate::consts::{
    REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, REVEAL_TRANSITION, SCROLL_INDICATOR_TARGET, SKILL_TRANSITION,
    SKILLS_THRESHOLD,
};
use crate::dom::{Dom, query, query_all, query_in};
use crate::error::SetupError;
use crate::notification::{Notification, NotificationId, NotificationKind};
use crate::page::{PageCore, PageShape};
use crate::preference::{DarkModePreference, LocalStorage};
use crate::timer::TimerHandle;

const REVEAL_INDEX_ATTR: &str = "data-reveal-index";
const NOTIFICATION_STYLE_ID: &str = "notification-styles";
const NOTIFICATION_KEYFRAMES: &str = "
@keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}";

type Core = PageCore<LocalStorage>;

thread_local! {
    static MOUNTED: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

/// Show a notification from outside the module, by kind name.
pub(crate) fn notify(message: &str, kind: &str) {
    let Some(page) = MOUNTED.with(|slot| slot.borrow().clone()) else {
        log::warn!("notification {message:?} dropped: page not bound");
        return;
    };
    let kind = NotificationKind::from_name(kind);
    page.run(|core| core.notify(message, kind, Date::now()));
}

pub(crate) struct Page {
    core: RefCell<Core>,
    dom: Dom,
    timeouts: RefCell<HashMap<TimerHandle, Timeout>>,
    notification: RefCell<Option<(NotificationId, HtmlElement)>>,
    reveal_observer: RefCell<Option<IntersectionObserver>>,
    skills_observer: RefCell<Option<IntersectionObserver>>,
}

impl Page {
    /// Bind to the document and register every listener once.
    pub fn mount(config: SiteConfig) -> Result<(), SetupError> {
        let dom = Dom::bind(&config)?;
        let shape = PageShape { reveal_targets: dom.reveal_targets.len(), skill_items: dom.skill_items.len() };
        let page = Rc::new(Self {
            core: RefCell::new(PageCore::new(LocalStorage, config, shape)),
            dom,
            timeouts: RefCell::new(HashMap::new()),
            notification: RefCell::new(None),
            reveal_observer: RefCell::new(None),
            skills_observer: RefCell::new(None),
        });

        let year = Date::new_0().get_full_year();
        page.run(|core| core.on_startup(year));
        page.register_listeners()?;
        let (loaded, y, layout) = (page.dom.already_loaded(), page.dom.scroll_y(), page.dom.layout());
        page.run(|core| core.on_ready(loaded, y, &layout));
        page.observe_reveals()?;
        page.observe_skills()?;
        MOUNTED.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&page)));
        log::info!("Portfolio initialized successfully!");
        Ok(())
    }

    /// Run one handler against the core and apply what it returns.
    fn run(self: &Rc<Self>, handler: impl FnOnce(&mut Core) -> Vec<Action>) {
        let actions = {
            let mut core = self.core.borrow_mut();
            handler(&mut core)
        };
        for action in actions {
            self.apply(action);
        }
    }

    // --- Listener registration ---

    fn register_listeners(self: &Rc<Self>) -> Result<(), SetupError> {
        let dom = &self.dom;

        let page = Rc::clone(self);
        listen(&dom.window, "load", move |_| {
            let (y, layout) = (page.dom.scroll_y(), page.dom.layout());
            page.run(|core| core.on_load(y, &layout));
        })?;

        let page = Rc::clone(self);
        listen(&dom.window, "scroll", move |_| {
            let (y, layout) = (page.dom.scroll_y(), page.dom.layout());
            page.run(|core| core.on_scroll(y, &layout));
        })?;

        let page = Rc::clone(self);
        listen(&dom.dark_toggle, "click", move |_| page.run(Core::on_theme_toggle))?;

        let page = Rc::clone(self);
        listen(&dom.hamburger, "click", move |_| page.run(Core::on_hamburger_click))?;

        for (section_id, link) in &dom.nav_links {
            let page = Rc::clone(self);
            let section_id = section_id.clone();
            listen(link, "click", move |ev| {
                let top = section_id.as_deref().and_then(|id| page.dom.element_top(id));
                if top.is_some() {
                    ev.prevent_default();
                }
                page.run(|core| core.on_nav_link_click(top));
            })?;
        }

        for button in [&dom.scroll_top, &dom.footer_scroll_top] {
            let page = Rc::clone(self);
            listen(button, "click", move |_| page.run(Core::on_scroll_top_click))?;
        }

        if let Some(indicator) = query(&dom.document, ".scroll-down a") {
            let page = Rc::clone(self);
            listen(&indicator, "click", move |ev| {
                ev.prevent_default();
                let top = page.dom.element_top(SCROLL_INDICATOR_TARGET);
                page.run(|core| core.on_scroll_indicator_click(top));
            })?;
        }

        if let Some(form) = &dom.contact_form {
            let page = Rc::clone(self);
            listen(form, "submit", move |ev| {
                ev.prevent_default();
                let form = page.dom.contact_values();
                page.run(|core| core.on_contact_submit(&form, Date::now()));
            })?;
        } else {
            log::debug!("no contact form on page");
        }

        for card in query_all::<Element>(&dom.document, ".project-card") {
            let Some(link) = query_in(&card, ".project-link") else {
                continue;
            };
            let title = query_in(&card, ".project-info h3")
                .and_then(|h| h.text_content())
                .unwrap_or_default();
            let page = Rc::clone(self);
            listen(&link, "click", move |ev| {
                ev.prevent_default();
                page.run(|core| core.on_project_link_click(&title, Date::now()));
            })?;
        }

        if let Some(download) = query(&dom.document, "a[download]") {
            let page = Rc::clone(self);
            listen(&download, "click", move |_| page.run(|core| core.on_download_cv_click(Date::now())))?;
        }

        for anchor in query_all::<Element>(&dom.document, "a[href=\"#\"]") {
            listen(&anchor, "click", |ev| ev.prevent_default())?;
        }
        Ok(())
    }

    fn observe_reveals(self: &Rc<Self>) -> Result<(), SetupError> {
        if self.dom.reveal_targets.is_empty() {
            return Ok(());
        }
        let page = Rc::clone(self);
        let observer = observer(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), move |entry| {
            let Some(index) = reveal_index(&entry.target()) else {
                return;
            };
            let intersecting = entry.is_intersecting();
            page.run(|core| core.on_reveal_intersection(index, intersecting));
        })?;

        for (index, target) in self.dom.reveal_targets.iter().enumerate() {
            let style = target.style();
            check(style.set_property("opacity", "0"), "reveal style");
            check(style.set_property("transform", &format!("translateY({REVEAL_OFFSET_PX}px)")), "reveal style");
            check(style.set_property("transition", REVEAL_TRANSITION), "reveal style");
            check(target.set_attribute(REVEAL_INDEX_ATTR, &index.to_string()), "reveal index");
            observer.observe(target);
        }
        *self.reveal_observer.borrow_mut() = Some(observer);
        Ok(())
    }

    fn observe_skills(self: &Rc<Self>) -> Result<(), SetupError> {
        let Some(skills) = &self.dom.skills else {
            log::debug!("no skills section on page");
            return Ok(());
        };
        let page = Rc::clone(self);
        let observer = observer(SKILLS_THRESHOLD, None, move |entry| {
            let intersecting = entry.is_intersecting();
            page.run(|core| core.on_skills_intersection(intersecting));
        })?;
        observer.observe(skills);
        *self.skills_observer.borrow_mut() = Some(observer);
        Ok(())
    }

    // --- Action application ---

    fn apply(self: &Rc<Self>, action: Action) {
        match action {
            Action::SetClass { target, class, on } => {
                if let Some(el) = self.target(&target) {
                    set_class(el, class, on);
                }
            }
            Action::ApplyTheme(pref) => self.apply_theme(pref),
            Action::ShowNotification(notification) => self.show_notification(&notification),
            Action::ExitNotification(id) => {
                if let Some((_, el)) = self.notification.borrow().as_ref().filter(|(shown, _)| *shown == id) {
                    check(el.style().set_property("animation", "slideOut 0.3s ease"), "notification exit");
                }
            }
            Action::RemoveNotification(id) => {
                let mut slot = self.notification.borrow_mut();
                if slot.as_ref().is_some_and(|(shown, _)| *shown == id) {
                    if let Some((_, el)) = slot.take() {
                        el.remove();
                    }
                }
            }
            Action::RevealTarget(index) => {
                if let Some(target) = self.dom.reveal_targets.get(index) {
                    let style = target.style();
                    check(style.set_property("opacity", "1"), "reveal");
                    check(style.set_property("transform", "translateY(0)"), "reveal");
                    if let Some(observer) = self.reveal_observer.borrow().as_ref() {
                        observer.unobserve(target);
                    }
                }
            }
            Action::StopObservingSkills => {
                if let Some(observer) = self.skills_observer.borrow_mut().take() {
                    observer.disconnect();
                }
            }
            Action::PrimeSkillItem(index) => {
                if let Some(item) = self.dom.skill_items.get(index) {
                    let style = item.style();
                    check(style.set_property("opacity", "0"), "skill prime");
                    check(style.set_property("transform", "scale(0.8)"), "skill prime");
                }
            }
            Action::ShowSkillItem(index) => {
                if let Some(item) = self.dom.skill_items.get(index) {
                    let style = item.style();
                    check(style.set_property("transition", SKILL_TRANSITION), "skill show");
                    check(style.set_property("opacity", "1"), "skill show");
                    check(style.set_property("transform", "scale(1)"), "skill show");
                }
            }
            Action::RemoveLoadingScreen => {
                if let Some(screen) = &self.dom.loading_screen {
                    check(screen.style().set_property("display", "none"), "loading screen");
                }
            }
            Action::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.dom.window.scroll_to_with_scroll_to_options(&options);
            }
            Action::OpenMailClient(uri) => check(self.dom.window.location().set_href(&uri), "mailto handoff"),
            Action::ResetContactForm => {
                if let Some(form) = &self.dom.contact_form {
                    form.reset();
                }
            }
            Action::SetFooterText(text) => {
                if let Some(line) = query(&self.dom.document, ".footer-content p") {
                    line.set_text_content(Some(&text));
                }
            }
            Action::Schedule { handle, delay_ms } => self.schedule(handle, delay_ms),
            Action::Cancel(handle) => {
                self.timeouts.borrow_mut().remove(&handle);
            }
        }
    }

    fn target(&self, target: &Target) -> Option<&Element> {
        match target {
            Target::Body => Some(&*self.dom.body),
            Target::Navbar => Some(&self.dom.navbar),
            Target::Hamburger => Some(&self.dom.hamburger),
            Target::NavMenu => Some(&self.dom.nav_menu),
            Target::NavLink(section_id) => self.dom.nav_link(section_id),
            Target::ScrollTopButton => Some(&self.dom.scroll_top),
            Target::LoadingScreen => self.dom.loading_screen.as_deref(),
        }
    }

    fn apply_theme(&self, pref: DarkModePreference) {
        let dark = pref.is_enabled();
        set_class(&self.dom.body, "dark-mode", dark);
        set_class(&self.dom.dark_icon, "fa-sun", dark);
        set_class(&self.dom.dark_icon, "fa-moon", !dark);
    }

    fn show_notification(&self, notification: &Notification) {
        let document = &self.dom.document;
        if document.get_element_by_id(NOTIFICATION_STYLE_ID).is_none() {
            if let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) {
                style.set_id(NOTIFICATION_STYLE_ID);
                style.set_text_content(Some(NOTIFICATION_KEYFRAMES));
                check(head.append_child(&style), "notification keyframes");
            }
        }

        let el = match document.create_element("div") {
            Ok(el) => el.unchecked_into::<HtmlElement>(),
            Err(err) => {
                log::warn!("could not create notification element: {err:?}");
                return;
            }
        };
        el.set_class_name(&format!("notification {}", notification.kind.css_class()));
        el.set_text_content(Some(&notification.text));
        el.style().set_css_text(&format!(
            "position: fixed; top: 100px; right: 30px; background: {}; color: white; \
             padding: 1rem 1.5rem; border-radius: 0.5rem; \
             box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); z-index: 9999; \
             animation: slideIn 0.3s ease; font-weight: 500;",
            notification.kind.background()
        ));
        check(self.dom.body.append_child(&el), "notification attach");
        *self.notification.borrow_mut() = Some((notification.id, el));
    }

    fn schedule(self: &Rc<Self>, handle: TimerHandle, delay_ms: u32) {
        let page: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(delay_ms, move || {
            if let Some(page) = page.upgrade() {
                page.timeouts.borrow_mut().remove(&handle);
                page.run(|core| core.on_timer(handle));
            }
        });
        self.timeouts.borrow_mut().insert(handle, timeout);
    }
}

/// Attach a page-lifetime listener.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), SetupError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| SetupError::js("addEventListener", &err))?;
    closure.forget();
    Ok(())
}

/// Build an intersection observer that hands each entry to `on_entry`.
fn observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(IntersectionObserverEntry) + 'static,
) -> Result<IntersectionObserver, SetupError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            on_entry(entry.unchecked_into());
        }
    });
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| SetupError::js("IntersectionObserver", &err))?;
    callback.forget();
    Ok(observer)
}

fn reveal_index(target: &Element) -> Option<usize> {
    match target.get_attribute(REVEAL_INDEX_ATTR)?.parse() {
        Ok(index) => Some(index),
        Err(err) => {
            log::debug!("bad reveal index: {err}");
            None
        }
    }
}

fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    check(result, "classList");
}

fn check<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        log::debug!("{what} failed: {err:?}");
    }
}
