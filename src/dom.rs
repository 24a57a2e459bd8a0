//! Element lookup and layout measurement against the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::contact::ContactForm;
use crate::error::SetupError;
use crate::scroll::{Layout, SectionBox};

/// Handles to every element the behavior layer touches.
pub(crate) struct Dom {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub navbar: Element,
    pub hamburger: Element,
    pub nav_menu: Element,
    pub dark_toggle: Element,
    pub dark_icon: Element,
    pub scroll_top: Element,
    pub footer_scroll_top: Element,
    pub footer: HtmlElement,
    pub loading_screen: Option<HtmlElement>,
    pub contact_form: Option<HtmlFormElement>,
    /// Every `.nav-link`, with the section id when its `href` is `#id`.
    pub nav_links: Vec<(Option<String>, Element)>,
    pub sections: Vec<HtmlElement>,
    pub reveal_targets: Vec<HtmlElement>,
    pub skills: Option<Element>,
    pub skill_items: Vec<HtmlElement>,
}

impl Dom {
    pub fn bind(config: &SiteConfig) -> Result<Self, SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoDocument)?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        let body = document.body().ok_or(SetupError::MissingElement("body"))?;

        let dark_toggle = required(&document, "#darkModeToggle")?;
        let dark_icon = query_in(&dark_toggle, "i").ok_or(SetupError::MissingElement("#darkModeToggle i"))?;
        let footer = required(&document, ".footer")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SetupError::MissingElement(".footer"))?;

        let nav_links = query_all::<Element>(&document, ".nav-link")
            .into_iter()
            .map(|link| (section_href(&link), link))
            .collect();

        let contact_form = query(&document, "#contactForm").and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned());
        let loading_screen = query(&document, "#loadingScreen").and_then(|el| el.dyn_ref::<HtmlElement>().cloned());

        Ok(Self {
            navbar: required(&document, "#navbar")?,
            hamburger: required(&document, "#hamburger")?,
            nav_menu: required(&document, "#navMenu")?,
            scroll_top: required(&document, "#scrollTop")?,
            footer_scroll_top: required(&document, "#footerScrollTop")?,
            sections: query_all(&document, "section[id]"),
            reveal_targets: query_all(&document, &config.reveal_selector()),
            skills: query(&document, "#skills"),
            skill_items: query_all(&document, ".skill-item"),
            loading_screen,
            contact_form,
            nav_links,
            dark_toggle,
            dark_icon,
            footer,
            body,
            document,
            window,
        })
    }

    /// Current vertical scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// Snapshot of section boxes, footer and viewport as laid out right now.
    pub fn layout(&self) -> Layout {
        let viewport_height = match self.window.inner_height() {
            Ok(value) => value.as_f64().unwrap_or(0.0),
            Err(_) => 0.0,
        };
        Layout {
            sections: self
                .sections
                .iter()
                .map(|section| {
                    SectionBox::new(section.id(), f64::from(section.offset_top()), f64::from(section.offset_height()))
                })
                .collect(),
            footer_top: Some(f64::from(self.footer.offset_top())),
            viewport_height,
        }
    }

    /// Document offset of the element with `id`.
    pub fn element_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        let el = el.dyn_ref::<HtmlElement>()?;
        Some(f64::from(el.offset_top()))
    }

    pub fn nav_link(&self, section_id: &str) -> Option<&Element> {
        self.nav_links
            .iter()
            .find(|(id, _)| id.as_deref() == Some(section_id))
            .map(|(_, link)| link)
    }

    /// Whether the document finished loading before we got here.
    pub fn already_loaded(&self) -> bool {
        self.document.ready_state() == "complete"
    }

    /// Current values of the four contact fields.
    pub fn contact_values(&self) -> ContactForm {
        ContactForm {
            name: field_value(&self.document, "name"),
            email: field_value(&self.document, "email"),
            subject: field_value(&self.document, "subject"),
            message: field_value(&self.document, "message"),
        }
    }
}

/// Load the embedded site config, if the page has one.
pub(crate) fn read_config() -> SiteConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    SiteConfig::from_json_or_default(raw.as_deref())
}

/// Section id of an in-page `href="#id"` link. Bare `#` and external links have none.
fn section_href(link: &Element) -> Option<String> {
    let id = link.get_attribute("href")?.strip_prefix('#')?.to_owned();
    (!id.is_empty()).then_some(id)
}

fn required(document: &Document, selector: &'static str) -> Result<Element, SetupError> {
    query(document, selector).ok_or(SetupError::MissingElement(selector))
}

pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("query {selector:?} failed: {err:?}");
            None
        }
    }
}

pub(crate) fn query_in(parent: &Element, selector: &str) -> Option<Element> {
    match parent.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("query {selector:?} failed: {err:?}");
            None
        }
    }
}

/// Every element matching `selector` that casts to `T`.
pub(crate) fn query_all<T: JsCast + Clone>(document: &Document, selector: &str) -> Vec<T> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("query {selector:?} failed: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<T>().cloned())
        .collect()
}

fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}
