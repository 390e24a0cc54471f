//! Progress ring binding
//!
//! Rings are observed once; the first time one is sufficiently visible its
//! animation starts and is driven by `requestAnimationFrame` until done.

use std::cell::RefCell;
use std::rc::Rc;

use folio_ui::{
    Animated, Clock, ProgressConfig, ProgressRing, VisibilityAction, VisibilityWatcher, WatchMode,
};
use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::{Document, Element, Window};

use crate::dom::{self, PerformanceClock};
use crate::error::MountError;
use crate::observer::Observer;
use crate::Mounted;

struct RingView {
    circle: Element,
    label: Element,
    ring: RefCell<ProgressRing>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl RingView {
    fn start(self: &Rc<Self>, now_ms: f64) {
        let circumference = {
            let mut ring = self.ring.borrow_mut();
            if !ring.start(now_ms) {
                return;
            }
            ring.circumference().to_string()
        };
        dom::set_style(&self.circle, "stroke-dasharray", &circumference);
        dom::set_style(&self.circle, "stroke-dashoffset", &circumference);
        self.schedule();
    }

    fn schedule(self: &Rc<Self>) {
        let view = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            view.on_frame(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();

        let (step, frame) = {
            let mut ring = self.ring.borrow_mut();
            let step = ring.step(timestamp);
            (step, ring.last_frame())
        };
        if let Some(frame) = frame {
            dom::set_style(&self.circle, "stroke-dashoffset", &frame.dash_offset.to_string());
            self.label.set_text_content(Some(&frame.label()));
        }
        if step.is_continue() {
            self.schedule();
        }
    }
}

fn ring_view(container: &Element, config: &ProgressConfig) -> Result<RingView, MountError> {
    let circle = dom::select_in(container, &config.ring)?
        .ok_or_else(|| MountError::missing("progress ring shape", &config.ring))?;
    let label = dom::select_in(container, &config.label)?
        .ok_or_else(|| MountError::missing("progress ring label", &config.label))?;

    let value = container.get_attribute(&config.value_attribute).unwrap_or_default();
    let radius = circle.get_attribute("r").unwrap_or_default();

    Ok(RingView {
        ring: RefCell::new(ProgressRing::from_attributes(&value, &radius, config)),
        circle,
        label,
        frame: RefCell::new(None),
    })
}

/// Attach every progress ring on the page
///
/// Returns the number of rings attached alongside the listeners.
pub fn mount(
    document: &Document,
    window: &Window,
    config: &ProgressConfig,
) -> Result<(usize, Mounted), MountError> {
    let mut elements = Vec::new();
    let mut views = Vec::new();
    for container in dom::select_all(document, &config.selector)? {
        match ring_view(&container, config) {
            Ok(view) => {
                elements.push(container);
                views.push(Rc::new(view));
            }
            Err(e) => log::debug!("[folio-progress] ring skipped: {}", e),
        }
    }

    let mut mounted = Mounted::default();
    if views.is_empty() {
        return Ok((0, mounted));
    }

    let clock = PerformanceClock::new(window)?;
    let mut watcher = VisibilityWatcher::new(WatchMode::Once, config.threshold);
    for key in 0..views.len() {
        watcher.observe(key);
    }

    let count = views.len();
    let observer = Observer::new(elements, config.threshold, None, move |entry, unobserve| {
        if let Some(VisibilityAction::Enter { key, .. }) = watcher.handle(entry) {
            unobserve.key(key);
            views[key].start(clock.now_ms());
        }
    })?;
    mounted.observe(observer);

    Ok((count, mounted))
}
