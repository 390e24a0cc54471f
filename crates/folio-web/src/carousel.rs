//! Slide carousel binding
//!
//! Buttons, touch and mouse gestures feed the [`Carousel`] state; the track's
//! `transform` is rewritten after every change.

use std::cell::RefCell;
use std::rc::Rc;

use folio_ui::{Carousel, CarouselConfig, CarouselSnapshot};
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Element, Event, Window};

use crate::dom;
use crate::error::MountError;
use crate::Mounted;

/// One carousel on the page
pub struct CarouselView {
    track: Element,
    first_slide: Option<Element>,
    state: RefCell<Carousel>,
}

impl CarouselView {
    fn new(track: Element, config: &CarouselConfig) -> Self {
        let slides = dom::children(&track);
        let view = Self {
            first_slide: slides.first().cloned(),
            state: RefCell::new(Carousel::new(slides.len(), config)),
            track,
        };
        view.measure();
        view
    }

    /// Re-measure the slide width from the first slide
    ///
    /// Runs before every render, so a carousel mounted while hidden picks up
    /// its real width once shown.
    fn measure(&self) {
        if let Some(slide) = &self.first_slide {
            let width = slide.get_bounding_client_rect().width();
            self.state.borrow_mut().set_slide_width(width);
        }
    }

    fn render(&self) {
        self.measure();
        let state = self.state.borrow();
        if state.slide_count() == 0 {
            return;
        }
        dom::set_style(&self.track, "transform", &state.transform());
    }

    pub fn advance(&self) {
        self.state.borrow_mut().advance();
        self.render();
    }

    pub fn retreat(&self) {
        self.state.borrow_mut().retreat();
        self.render();
    }

    fn press(&self, x: f64) {
        self.state.borrow_mut().press(x);
    }

    fn drag_to(&self, x: f64) {
        let moved = self.state.borrow_mut().drag_to(x).is_some();
        if moved {
            self.render();
        }
    }

    fn release(&self, x: f64) {
        let released = self.state.borrow_mut().release(x).is_some();
        if released {
            self.render();
        }
    }

    fn cancel(&self) {
        self.state.borrow_mut().cancel();
        self.render();
    }

    fn resize(&self) {
        self.render();
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        self.state.borrow().snapshot()
    }
}

/// Attach a carousel to `root`
///
/// The track is required; previous/next controls are optional.
pub fn mount(
    root: &Element,
    window: &Window,
    config: &CarouselConfig,
) -> Result<(Rc<CarouselView>, Mounted), MountError> {
    let track = dom::select_in(root, &config.track)?
        .ok_or_else(|| MountError::missing("carousel track", &config.track))?;
    let view = Rc::new(CarouselView::new(track.clone(), config));
    let mut mounted = Mounted::default();

    if let Some(next) = dom::select_in(root, &config.next)? {
        let view = Rc::clone(&view);
        mounted.listen(EventListener::new(&next, "click", move |_event: &Event| {
            view.advance();
        }));
    }
    if let Some(prev) = dom::select_in(root, &config.prev)? {
        let view = Rc::clone(&view);
        mounted.listen(EventListener::new(&prev, "click", move |_event: &Event| {
            view.retreat();
        }));
    }

    // Touch gestures
    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(&track, "touchstart", move |event: &Event| {
        if let Some(x) = dom::touch_x(event) {
            v.press(x);
        }
    }));
    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(&track, "touchmove", move |event: &Event| {
        if let Some(x) = dom::touch_x(event) {
            v.drag_to(x);
        }
    }));
    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(&track, "touchend", move |event: &Event| {
        if let Some(x) = dom::changed_touch_x(event) {
            v.release(x);
        }
    }));
    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(&track, "touchcancel", move |_event: &Event| {
        v.cancel();
    }));

    // Mouse drags start on the track but may end anywhere
    let v = Rc::clone(&view);
    mounted.listen(EventListener::new_with_options(
        &track,
        "mousedown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            if let Some(x) = dom::mouse_x(event) {
                event.prevent_default();
                v.press(x);
            }
        },
    ));
    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(window, "mousemove", move |event: &Event| {
        if !v.state.borrow().is_dragging() {
            return;
        }
        if let Some(x) = dom::mouse_x(event) {
            v.drag_to(x);
        }
    }));
    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(window, "mouseup", move |event: &Event| {
        if let Some(x) = dom::mouse_x(event) {
            v.release(x);
        }
    }));

    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(window, "resize", move |_event: &Event| {
        v.resize();
    }));

    Ok((view, mounted))
}
