//! IntersectionObserver binding
//!
//! Entries are reported as [`VisibilityEntry`] values keyed by the element's
//! position in the observed list. The observer disconnects when dropped.

use folio_ui::VisibilityEntry;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::MountError;

type EntryCallback = dyn FnMut(js_sys::Array, IntersectionObserver);

/// Observer over a fixed list of elements
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<EntryCallback>,
}

/// Handle passed to entry handlers for unsubscribing elements
pub struct Unobserve<'a> {
    observer: &'a IntersectionObserver,
    elements: &'a [Element],
}

impl Unobserve<'_> {
    /// Stop observing the element with key `key`
    pub fn key(&self, key: usize) {
        if let Some(el) = self.elements.get(key) {
            self.observer.unobserve(el);
        }
    }
}

impl Observer {
    /// Observe `elements`, reporting crossings of `threshold`
    pub fn new<F>(
        elements: Vec<Element>,
        threshold: f64,
        root_margin: Option<&str>,
        mut on_entry: F,
    ) -> Result<Self, MountError>
    where
        F: FnMut(VisibilityEntry<usize>, &Unobserve<'_>) + 'static,
    {
        let watched = elements.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let unobserve = Unobserve {
                    observer: &observer,
                    elements: &watched,
                };
                for value in entries.iter() {
                    let Ok(entry) = value.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(key) = watched.iter().position(|el| *el == target) else {
                        continue;
                    };
                    on_entry(
                        VisibilityEntry::new(key, entry.is_intersecting(), entry.intersection_ratio()),
                        &unobserve,
                    );
                }
            },
        ) as Box<EntryCallback>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for el in &elements {
            observer.observe(el);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
