//! Thin DOM helpers shared by the behavior bindings

use folio_ui::Clock;
use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, HtmlElement, MouseEvent, NodeList, Performance,
    SvgElement, TouchEvent, Window,
};

use crate::error::MountError;

pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, MountError> {
    window.document().ok_or(MountError::NoDocument)
}

fn collect(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, MountError> {
    Ok(collect(document.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`
pub fn select_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, MountError> {
    Ok(collect(root.query_selector_all(selector)?))
}

/// First element in the document matching `selector`
pub fn select(document: &Document, selector: &str) -> Result<Option<Element>, MountError> {
    Ok(document.query_selector(selector)?)
}

/// First descendant of `root` matching `selector`
pub fn select_in(root: &Element, selector: &str) -> Result<Option<Element>, MountError> {
    Ok(root.query_selector(selector)?)
}

/// First document element matching `selector`, or a missing-element error
pub fn require(
    document: &Document,
    selector: &str,
    role: &'static str,
) -> Result<Element, MountError> {
    select(document, selector)?.ok_or_else(|| MountError::missing(role, selector))
}

/// Direct element children of `parent`
pub fn children(parent: &Element) -> Vec<Element> {
    let list = parent.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Add or remove `class` on `el`
pub fn set_class(el: &Element, class: &str, present: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, present) {
        log::warn!("[folio] class '{}' not applied: {:?}", class, e);
    }
}

fn style_of(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        Some(html.style())
    } else {
        el.dyn_ref::<SvgElement>().map(SvgElement::style)
    }
}

/// Set an inline style property on an HTML or SVG element
pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(style) = style_of(el) else {
        return;
    };
    if let Err(e) = style.set_property(property, value) {
        log::warn!("[folio] style '{}' not applied: {:?}", property, e);
    }
}

/// Element an event was dispatched to
pub fn event_target(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Horizontal position of the first active touch (`touchstart`/`touchmove`)
pub fn touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

/// Horizontal position of the first lifted touch (`touchend`)
pub fn changed_touch_x(event: &Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

/// Horizontal position of a primary-button mouse event
pub fn mouse_x(event: &Event) -> Option<f64> {
    let event = event.dyn_ref::<MouseEvent>()?;
    if event.button() != 0 {
        return None;
    }
    Some(f64::from(event.client_x()))
}

/// Clock backed by `performance.now()`
///
/// Shares its time origin with `requestAnimationFrame` timestamps.
pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    pub fn new(window: &Window) -> Result<Self, MountError> {
        let performance = window
            .performance()
            .ok_or_else(|| MountError::Js("performance unavailable".to_string()))?;
        Ok(Self { performance })
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.performance.now()
    }
}
