//! Browser wiring: element lookup, render target and event listeners.
//!
//! Requires a browser environment (`hydrate`). Native builds keep only the
//! element ids and `DomError` so the lookup contract stays testable.
//!
//! DESIGN
//! ======
//! Elements are looked up once in `GameElements::lookup` and handed to the
//! controller. Nothing reads the DOM by id after startup.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Document, Element, HtmlButtonElement, HtmlImageElement};

#[cfg(feature = "hydrate")]
use crate::config::ClientConfig;
#[cfg(feature = "hydrate")]
use crate::controller::{Clock, Controller, RenderTarget};
#[cfg(feature = "hydrate")]
use crate::net::api::{self, Action};

pub const CLICK_BUTTON_ID: &str = "clickBtn";
pub const UPGRADE_BUTTON_ID: &str = "upgradeBtn";
pub const XP_ID: &str = "xp";
pub const CLICK_VALUE_ID: &str = "click_value";
pub const UPGRADE_COST_ID: &str = "upgrade_cost";
pub const MONSTER_ID: &str = "monster";

/// Every element id the page must provide at load time.
pub const REQUIRED_IDS: [&str; 6] =
    [CLICK_BUTTON_ID, UPGRADE_BUTTON_ID, XP_ID, CLICK_VALUE_ID, UPGRADE_COST_ID, MONSTER_ID];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(&'static str),
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: &'static str, expected: &'static str },
    #[error("failed to register listener: {0}")]
    Listener(String),
}

/// Handles to the game page elements.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct GameElements {
    pub click_button: HtmlButtonElement,
    pub upgrade_button: HtmlButtonElement,
    pub xp: Element,
    pub click_value: Element,
    pub upgrade_cost: Element,
    pub monster: HtmlImageElement,
}

#[cfg(feature = "hydrate")]
impl GameElements {
    /// Look up all required elements in `document`.
    ///
    /// # Errors
    ///
    /// Returns `DomError::MissingElement` or `DomError::WrongElementType`
    /// for the first element that cannot be used.
    pub fn lookup(document: &Document) -> Result<Self, DomError> {
        Ok(Self {
            click_button: typed(document, CLICK_BUTTON_ID, "button")?,
            upgrade_button: typed(document, UPGRADE_BUTTON_ID, "button")?,
            xp: element(document, XP_ID)?,
            click_value: element(document, CLICK_VALUE_ID)?,
            upgrade_cost: element(document, UPGRADE_COST_ID)?,
            monster: typed(document, MONSTER_ID, "img")?,
        })
    }
}

#[cfg(feature = "hydrate")]
fn element(document: &Document, id: &'static str) -> Result<Element, DomError> {
    document.get_element_by_id(id).ok_or(DomError::MissingElement(id))
}

#[cfg(feature = "hydrate")]
fn typed<E: JsCast>(document: &Document, id: &'static str, expected: &'static str) -> Result<E, DomError> {
    element(document, id)?
        .dyn_into::<E>()
        .map_err(|_| DomError::WrongElementType { id, expected })
}

#[cfg(feature = "hydrate")]
impl RenderTarget for GameElements {
    fn set_xp(&mut self, text: &str) {
        self.xp.set_text_content(Some(text));
    }

    fn set_click_value(&mut self, text: &str) {
        self.click_value.set_text_content(Some(text));
    }

    fn set_upgrade_cost(&mut self, text: &str) {
        self.upgrade_cost.set_text_content(Some(text));
    }

    fn set_upgrade_disabled(&mut self, disabled: bool) {
        self.upgrade_button.set_disabled(disabled);
    }

    fn set_monster_src(&mut self, src: &str) {
        self.monster.set_src(src);
    }
}

/// `Date.now()`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

#[cfg(feature = "hydrate")]
impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        js_sys::Date::now().max(0.0) as u64
    }
}

#[cfg(feature = "hydrate")]
type SharedController = Rc<RefCell<Controller<GameElements, BrowserClock>>>;

/// Read config from `<body>` data attributes, falling back to defaults.
#[cfg(feature = "hydrate")]
fn read_config(document: &Document) -> ClientConfig {
    let Some(body) = document.body() else {
        return ClientConfig::default();
    };
    match ClientConfig::from_attributes(|name| body.get_attribute(name)) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using default client config");
            ClientConfig::default()
        }
    }
}

/// Bind the controller to the current document.
///
/// # Errors
///
/// Returns a `DomError` if the window, document or any required element is
/// unavailable, or a listener cannot be registered.
#[cfg(feature = "hydrate")]
pub fn attach() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let elements = GameElements::lookup(&document)?;
    let config = read_config(&document);
    log::debug!("client config: {config:?}");

    let click_button = elements.click_button.clone();
    let upgrade_button = elements.upgrade_button.clone();
    let controller: SharedController = Rc::new(RefCell::new(Controller::new(elements, BrowserClock, config)));

    bind(&click_button, Action::Click, &controller)?;
    bind(&upgrade_button, Action::Upgrade, &controller)?;
    Ok(())
}

#[cfg(feature = "hydrate")]
fn bind(button: &HtmlButtonElement, action: Action, controller: &SharedController) -> Result<(), DomError> {
    let controller = Rc::clone(controller);
    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let pending = controller.borrow_mut().begin(action);
        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::post_action(&pending.url).await;
            controller.borrow_mut().finish(pending, result);
        });
    });
    button
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(|e| DomError::Listener(format!("{e:?}")))?;
    // Listeners live as long as the page.
    handler.forget();
    Ok(())
}
