//! Panel bindings: navigation drawer, skill popups, work filter, modals,
//! lightbox and cover reveal

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_ui::{
    ClickTarget, CoverConfig, CoverReveal, Lightbox, LightboxConfig, ModalConfig, ModalSet,
    NavConfig, NavDrawer, PreviewLayout, SkillsConfig, Toggle, WorkFilter, WorksConfig,
};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlImageElement, Window};

use crate::dom;
use crate::error::MountError;
use crate::Mounted;

// =============================================================================
// Navigation drawer
// =============================================================================

/// Attach the burger menu; all three elements must exist
pub fn mount_nav(document: &Document, config: &NavConfig) -> Result<Mounted, MountError> {
    let toggle = dom::require(document, &config.toggle, "menu toggle")?;
    let links = dom::require(document, &config.links, "nav links")?;
    let close = dom::require(document, &config.close, "nav close")?;

    let drawer = Rc::new(Cell::new(NavDrawer::default()));
    let apply = {
        let toggle = toggle.clone();
        let links = links.clone();
        Rc::new(move |drawer: NavDrawer| {
            dom::set_class(&links, NavDrawer::LINKS_CLASS, drawer.is_open());
            dom::set_class(&toggle, NavDrawer::TOGGLE_CLASS, drawer.is_open());
        })
    };

    let mut mounted = Mounted::default();
    let (d, a) = (Rc::clone(&drawer), Rc::clone(&apply));
    mounted.listen(EventListener::new(&toggle, "click", move |_event: &Event| {
        let mut state = d.get();
        state.open();
        d.set(state);
        a(state);
    }));

    let mut closers = vec![close];
    closers.extend(dom::select_all_in(&links, "a")?);
    for el in closers {
        let (d, a) = (Rc::clone(&drawer), Rc::clone(&apply));
        mounted.listen(EventListener::new(&el, "click", move |_event: &Event| {
            let mut state = d.get();
            state.close();
            d.set(state);
            a(state);
        }));
    }
    Ok(mounted)
}

// =============================================================================
// Skill popups
// =============================================================================

pub fn mount_skills(document: &Document, config: &SkillsConfig) -> Result<Mounted, MountError> {
    let mut mounted = Mounted::default();
    for skill in dom::select_all(document, &config.selector)? {
        let popup = Cell::new(Toggle::default());
        let class_name = config.class_name.clone();
        let target = skill.clone();
        mounted.listen(EventListener::new(&skill, "click", move |_event: &Event| {
            let mut state = popup.get();
            let on = state.toggle();
            popup.set(state);
            dom::set_class(&target, &class_name, on);
        }));
    }
    Ok(mounted)
}

// =============================================================================
// Work filter
// =============================================================================

struct FilterView {
    buttons: Vec<Element>,
    boxes: Vec<Element>,
    filter: RefCell<WorkFilter>,
}

impl FilterView {
    fn select(&self, index: usize) {
        if !self.filter.borrow_mut().select(index) {
            return;
        }
        let filter = self.filter.borrow();
        for (i, button) in self.buttons.iter().enumerate() {
            dom::set_class(button, WorkFilter::ACTIVE_CLASS, filter.is_button_active(i));
        }
        for (i, work) in self.boxes.iter().enumerate() {
            dom::set_class(work, WorkFilter::HIDDEN_CLASS, filter.is_box_hidden(i));
        }
    }
}

pub fn mount_works(document: &Document, config: &WorksConfig) -> Result<Mounted, MountError> {
    let buttons = dom::select_all(document, &config.buttons)?;
    let boxes = dom::select_all(document, &config.boxes)?;

    let categories: Vec<String> = buttons
        .iter()
        .map(|b| b.get_attribute(&config.category_attribute).unwrap_or_default())
        .collect();
    let classes: Vec<Vec<String>> = boxes
        .iter()
        .map(|b| b.class_name().split_whitespace().map(str::to_string).collect())
        .collect();
    let filter = WorkFilter::new(categories, classes);
    if !filter.is_usable() {
        return Err(MountError::missing("work filter", &config.buttons));
    }

    let view = Rc::new(FilterView {
        buttons: buttons.clone(),
        boxes,
        filter: RefCell::new(filter),
    });
    let mut mounted = Mounted::default();
    for (index, button) in buttons.iter().enumerate() {
        let view = Rc::clone(&view);
        mounted.listen(EventListener::new(button, "click", move |_event: &Event| {
            view.select(index);
        }));
    }
    Ok(mounted)
}

// =============================================================================
// Preview modals
// =============================================================================

struct ModalView {
    modals: Vec<Element>,
    state: RefCell<ModalSet>,
    content: String,
    layout: PreviewLayout,
}

impl ModalView {
    fn find(&self, id: &str) -> Option<&Element> {
        self.modals.iter().find(|m| m.id() == id)
    }

    fn open(&self, id: &str) {
        if !self.state.borrow_mut().open(id) {
            log::debug!("[folio-modal] no modal '{}'", id);
            return;
        }
        let Some(modal) = self.find(id) else {
            return;
        };
        dom::set_style(modal, "display", "flex");
        dom::set_style(modal, "justify-content", "center");
        dom::set_style(modal, "align-items", "center");

        if let Ok(Some(content)) = dom::select_in(modal, &self.content) {
            dom::set_style(&content, "width", &self.layout.content_width);
            dom::set_style(&content, "max-width", &self.layout.content_max_width);
            if let Ok(Some(frame)) = dom::select_in(&content, "iframe") {
                dom::set_style(&frame, "width", &self.layout.frame_width);
                dom::set_style(&frame, "height", &self.layout.frame_height);
            }
        }
    }

    fn hide(&self, modal: &Element) {
        self.state.borrow_mut().close(&modal.id());
        dom::set_style(modal, "display", "none");
    }
}

pub fn mount_modals(
    document: &Document,
    window: &Window,
    config: &ModalConfig,
) -> Result<Mounted, MountError> {
    let triggers = dom::select_all(document, &config.trigger)?;
    let modals = dom::select_all(document, &config.modal)?;
    if triggers.is_empty() || modals.is_empty() {
        return Err(MountError::missing("preview modal", &config.modal));
    }

    let view = Rc::new(ModalView {
        state: RefCell::new(ModalSet::new(modals.iter().map(Element::id))),
        modals,
        content: config.content.clone(),
        layout: config.layout.clone(),
    });
    let mut mounted = Mounted::default();

    for trigger in triggers {
        let Some(id) = trigger.get_attribute(&config.target_attribute) else {
            continue;
        };
        let view = Rc::clone(&view);
        mounted.listen(EventListener::new(&trigger, "click", move |_event: &Event| {
            view.open(&id);
        }));
    }

    for close in dom::select_all(document, &config.close)? {
        let view = Rc::clone(&view);
        let modal_selector = config.modal.clone();
        let button = close.clone();
        mounted.listen(EventListener::new(&close, "click", move |_event: &Event| {
            if let Ok(Some(modal)) = button.closest(&modal_selector) {
                view.hide(&modal);
            }
        }));
    }

    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(window, "click", move |event: &Event| {
        let Some(target) = dom::event_target(event) else {
            return;
        };
        if let Some(modal) = v.modals.iter().find(|m| **m == target) {
            v.state.borrow_mut().backdrop_click(&modal.id());
            dom::set_style(modal, "display", "none");
        }
    }));

    Ok(mounted)
}

// =============================================================================
// Image lightbox
// =============================================================================

struct OpenLightbox {
    overlay: Element,
    _listeners: Vec<EventListener>,
}

struct LightboxLayer {
    document: Document,
    current: RefCell<Option<OpenLightbox>>,
}

impl LightboxLayer {
    fn open(self: &Rc<Self>, lightbox: Lightbox) -> Result<(), MountError> {
        self.close();

        let overlay = self.document.create_element("div")?;
        overlay.set_class_name(Lightbox::OVERLAY_CLASS);
        dom::set_style(&overlay, "display", "flex");
        dom::set_style(&overlay, "justify-content", "center");
        dom::set_style(&overlay, "align-items", "center");

        let content = self.document.create_element("div")?;
        content.set_class_name(Lightbox::CONTENT_CLASS);

        let close = self.document.create_element("span")?;
        close.set_class_name(Lightbox::CLOSE_CLASS);
        close.set_text_content(Some(Lightbox::CLOSE_GLYPH));

        let image = self
            .document
            .create_element("img")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| MountError::Js("img is not an image element".to_string()))?;
        image.set_src(&lightbox.src);
        image.set_alt(&lightbox.alt);

        content.append_child(&close)?;
        content.append_child(&image)?;
        overlay.append_child(&content)?;
        let body = self
            .document
            .body()
            .ok_or_else(|| MountError::missing("document body", "body"))?;
        body.append_child(&overlay)?;

        let layer = Rc::clone(self);
        let on_close = EventListener::new(&close, "click", move |_event: &Event| {
            layer.close();
        });
        let layer = Rc::clone(self);
        let backdrop = overlay.clone();
        let on_backdrop = EventListener::new(&overlay, "click", move |event: &Event| {
            let target = match dom::event_target(event) {
                Some(t) if t == backdrop => ClickTarget::Backdrop,
                _ => ClickTarget::Content,
            };
            if lightbox.should_close(target) {
                layer.close();
            }
        });

        *self.current.borrow_mut() = Some(OpenLightbox {
            overlay,
            _listeners: vec![on_close, on_backdrop],
        });
        Ok(())
    }

    fn close(&self) {
        let Some(open) = self.current.borrow_mut().take() else {
            return;
        };
        open.overlay.remove();
    }
}

pub fn mount_lightbox(document: &Document, config: &LightboxConfig) -> Result<Mounted, MountError> {
    let layer = Rc::new(LightboxLayer {
        document: document.clone(),
        current: RefCell::new(None),
    });
    let mut mounted = Mounted::default();

    for img in dom::select_all(document, &config.images)? {
        let layer = Rc::clone(&layer);
        let alt = config.alt.clone();
        let source = img.clone();
        mounted.listen(EventListener::new(&img, "click", move |_event: &Event| {
            let src = match source.dyn_ref::<HtmlImageElement>() {
                Some(image) => image.src(),
                None => source.get_attribute("src").unwrap_or_default(),
            };
            if let Err(e) = layer.open(Lightbox::new(src, alt.clone())) {
                log::warn!("[folio-lightbox] open failed: {}", e);
            }
        }));
    }
    Ok(mounted)
}

// =============================================================================
// Cover reveal
// =============================================================================

struct CoverView {
    overlay: Element,
    circle: Element,
    state: RefCell<CoverReveal>,
    pending: RefCell<Option<Timeout>>,
}

impl CoverView {
    fn press(self: &Rc<Self>) {
        let Some(delay_ms) = self.state.borrow_mut().press() else {
            return;
        };
        dom::set_class(&self.circle, CoverReveal::SHRINK_CLASS, true);

        let view = Rc::clone(self);
        let timeout = Timeout::new(delay_ms, move || {
            view.pending.borrow_mut().take();
            if view.state.borrow_mut().finish() {
                dom::set_class(&view.overlay, CoverReveal::HIDDEN_CLASS, true);
            }
        });
        *self.pending.borrow_mut() = Some(timeout);
    }
}

pub fn mount_cover(document: &Document, config: &CoverConfig) -> Result<Mounted, MountError> {
    let overlay = dom::require(document, &config.overlay, "cover overlay")?;
    let circle = dom::require(document, &config.circle, "cover circle")?;
    let button = dom::require(document, &config.button, "cover button")?;

    let view = Rc::new(CoverView {
        overlay,
        circle,
        state: RefCell::new(CoverReveal::new(config.delay_ms)),
        pending: RefCell::new(None),
    });
    let mut mounted = Mounted::default();
    mounted.listen(EventListener::new(&button, "click", move |_event: &Event| {
        view.press();
    }));
    Ok(mounted)
}
