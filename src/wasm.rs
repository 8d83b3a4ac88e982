//! Browser entry point.
//!
//! Wraps the live document in [`DomPage`], builds one shared controller and
//! attaches a click listener for every row of the control table plus one per
//! animation box.

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::bindings::{ControlMap, ControlSelector};
use crate::config::DemoConfig;
use crate::constants::{ANIMATION_BOX_CLASS, DATA_TARGET_ATTR};
use crate::controller::DemoController;
use crate::error::PageError;
use crate::handlers::{dispatch, log_initialized};
use crate::message::Message;
use crate::page::{Page, StyleProperty};
use crate::state::AnimationState;

fn js_error(value: JsValue) -> PageError {
    PageError::dom(format!("{:?}", value))
}

/// [`Page`] over the browser document.
pub struct DomPage {
    document: Document,
}

impl DomPage {
    /// Wrap the window's document.
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("Bad selector '{}': {:?}", selector, e);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

impl Page for DomPage {
    type Element = HtmlElement;

    fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn card_box(&self, card_id: &str) -> Option<HtmlElement> {
        let selector = format!("#{card_id} .{ANIMATION_BOX_CLASS}");
        match self.document.query_selector(&selector) {
            Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            Err(e) => {
                log::warn!("Bad selector '{}': {:?}", selector, e);
                None
            }
        }
    }

    fn animation_boxes(&self) -> Vec<HtmlElement> {
        self.query_all(&format!(".{ANIMATION_BOX_CLASS}"))
    }

    fn has_class(&self, element: &HtmlElement, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&mut self, element: &HtmlElement, class: &str) -> Result<(), PageError> {
        PageError::check_token(class)?;
        element.class_list().add_1(class).map_err(js_error)
    }

    fn remove_classes(
        &mut self,
        element: &HtmlElement,
        classes: &[&str],
    ) -> Result<(), PageError> {
        let list = element.class_list();
        for class in classes {
            PageError::check_token(class)?;
            list.remove_1(class).map_err(js_error)?;
        }
        Ok(())
    }

    fn set_style(&mut self, element: &HtmlElement, property: StyleProperty, value: &str) {
        let style = element.style();
        let result = if value.is_empty() {
            style.remove_property(property.css_name()).map(|_| ())
        } else {
            style.set_property(property.css_name(), value)
        };
        if let Err(e) = result {
            log::warn!("Failed to set {}: {:?}", property.css_name(), e);
        }
    }

    fn set_text(&mut self, element: &HtmlElement, text: &str) {
        element.set_text_content(Some(text));
    }

    fn value(&self, element: &HtmlElement) -> String {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }
}

struct WebApp {
    controller: DemoController<DomPage>,
    rng: StdRng,
}

type SharedApp = Rc<RefCell<WebApp>>;

fn add_click_listener(target: &Element, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        log::error!("Failed to attach click listener: {:?}", e);
    }
    // Listeners live as long as the page.
    closure.forget();
}

fn bind_controls(app: &SharedApp, page: &DomPage, controls: &ControlMap) {
    for binding in controls.bindings() {
        let elements: Vec<HtmlElement> = match binding.selector {
            ControlSelector::Id(id) => page.element_by_id(id).into_iter().collect(),
            ControlSelector::Class(_) => page.query_all(&binding.selector.css()),
        };
        if elements.is_empty() {
            log::warn!("No element matches {}", binding.selector.css());
        }

        for element in elements {
            let app = app.clone();
            let action = binding.action.clone();
            let control = element.clone();
            add_click_listener(&element, move |_event| {
                let target = control.get_attribute(DATA_TARGET_ATTR);
                let Some(message) = action.message(target.as_deref()) else {
                    log::warn!("Control has no {} attribute", DATA_TARGET_ATTR);
                    return;
                };
                run_message(&app, message);
            });
        }
    }
}

fn run_message(app: &SharedApp, message: Message) {
    let mut app = app.borrow_mut();
    let WebApp { controller, rng } = &mut *app;
    dispatch(message, controller, rng);
}

fn bind_box_presses(app: &SharedApp, page: &DomPage) {
    for element in page.animation_boxes() {
        let app = app.clone();
        let pressed = element.clone();
        add_click_listener(&element, move |_event| press(&app, &pressed));
    }
}

fn press(app: &SharedApp, element: &HtmlElement) {
    let (task, delay) = {
        let mut state = app.borrow_mut();
        let delay = state.press_delay_ms();
        (state.controller.press_box(element, web_time::Instant::now()), delay)
    };

    let Some(window) = web_sys::window() else {
        return;
    };
    let app = app.clone();
    let reset = Closure::once_into_js(move || {
        app.borrow_mut().controller.finish_task(task);
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        reset.unchecked_ref(),
        delay,
    ) {
        log::error!("Failed to schedule press reset: {:?}", e);
    }
}

impl WebApp {
    fn press_delay_ms(&self) -> i32 {
        i32::try_from(self.controller.press_feedback().as_millis()).unwrap_or(i32::MAX)
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = DemoConfig::default();
    if let Err(e) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::log_1(&format!("Logger already set: {}", e).into());
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available");
        return;
    };

    let page = DomPage::new(document.clone());
    let bind_view = DomPage::new(document);
    let controller = DemoController::new(page, AnimationState::default(), &config);
    log_initialized(&controller);

    let app: SharedApp = Rc::new(RefCell::new(WebApp {
        controller,
        rng: StdRng::from_os_rng(),
    }));

    bind_controls(&app, &bind_view, &ControlMap::default());
    bind_box_presses(&app, &bind_view);
}
