//! Browser bindings for the portfolio behaviors
//!
//! This crate runs on the page's main thread. It scans the document for the
//! elements each behavior needs, attaches event listeners and intersection
//! observers, and writes the state computed by `folio-ui` back to the DOM.
//!
//! ```js
//! import init, { Folio } from "./pkg/folio_web.js";
//!
//! await init();
//! window.folio = Folio.mount();
//! ```
//!
//! A behavior whose elements are missing is skipped; the rest of the page
//! still works. Dropping (`free()`-ing) the [`Folio`] handle detaches every
//! listener and observer.

mod carousel;
mod dom;
mod error;
mod fade;
mod logger;
mod observer;
mod panels;
mod progress;
mod testimonials;

pub use error::MountError;

use std::rc::Rc;

use folio_ui::FolioConfig;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;

use carousel::CarouselView;
use observer::Observer;

/// Listeners and observers kept alive for a mounted behavior
#[derive(Default)]
pub(crate) struct Mounted {
    listeners: Vec<EventListener>,
    observers: Vec<Observer>,
}

impl Mounted {
    pub(crate) fn listen(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub(crate) fn observe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    fn absorb(&mut self, other: Mounted) {
        self.listeners.extend(other.listeners);
        self.observers.extend(other.observers);
    }
}

/// Handle owning every behavior attached to the page
#[wasm_bindgen]
pub struct Folio {
    carousels: Vec<Rc<CarouselView>>,
    ring_count: usize,
    mounted: Mounted,
}

/// Log and drop a non-fatal mount error
fn skip_missing<T>(what: &str, result: Result<T, MountError>) -> Result<Option<T>, MountError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            log::debug!("[folio] {} skipped: {}", what, e);
            Ok(None)
        }
    }
}

impl Folio {
    fn mount_page(config: FolioConfig) -> Result<Self, MountError> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        logger::init(config.log_level.to_filter());

        let window = dom::window()?;
        let document = dom::document(&window)?;

        let mut folio = Folio {
            carousels: Vec::new(),
            ring_count: 0,
            mounted: Mounted::default(),
        };

        let roots = skip_missing("carousels", dom::select_all(&document, &config.carousel.root))?;
        for root in roots.unwrap_or_default() {
            if let Some((view, mounted)) =
                skip_missing("carousel", carousel::mount(&root, &window, &config.carousel))?
            {
                folio.carousels.push(view);
                folio.mounted.absorb(mounted);
            }
        }

        if let Some((count, mounted)) =
            skip_missing("progress rings", progress::mount(&document, &window, &config.progress))?
        {
            folio.ring_count = count;
            folio.mounted.absorb(mounted);
        }

        let behaviors = [
            ("fade groups", fade::mount(&document, &config.fade)),
            ("nav drawer", panels::mount_nav(&document, &config.nav)),
            ("skill popups", panels::mount_skills(&document, &config.skills)),
            ("work filter", panels::mount_works(&document, &config.works)),
            ("preview modals", panels::mount_modals(&document, &window, &config.modals)),
            ("lightbox", panels::mount_lightbox(&document, &config.lightbox)),
            ("cover", panels::mount_cover(&document, &config.cover)),
            ("testimonials", testimonials::mount(&document, &config.testimonials)),
        ];
        for (what, result) in behaviors {
            if let Some(mounted) = skip_missing(what, result)? {
                folio.mounted.absorb(mounted);
            }
        }

        log::info!(
            "[folio] mounted {} carousels, {} progress rings, {} listeners",
            folio.carousels.len(),
            folio.ring_count,
            folio.mounted.listeners.len()
        );
        Ok(folio)
    }
}

#[wasm_bindgen]
impl Folio {
    /// Attach every behavior using the default selectors
    #[wasm_bindgen]
    pub fn mount() -> Result<Folio, JsValue> {
        Ok(Self::mount_page(FolioConfig::default())?)
    }

    /// Attach every behavior using a JSON configuration
    ///
    /// Keys left out of the document keep their defaults.
    #[wasm_bindgen]
    pub fn mount_with_config(json: &str) -> Result<Folio, JsValue> {
        let config = FolioConfig::from_json(json).map_err(MountError::from)?;
        Ok(Self::mount_page(config)?)
    }

    /// Number of carousels attached
    #[wasm_bindgen]
    pub fn carousel_count(&self) -> usize {
        self.carousels.len()
    }

    /// Number of progress rings attached
    #[wasm_bindgen]
    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    /// Advance carousel `index` by one slide
    #[wasm_bindgen]
    pub fn advance_carousel(&self, index: usize) {
        if let Some(view) = self.carousels.get(index) {
            view.advance();
        }
    }

    /// Retreat carousel `index` by one slide
    #[wasm_bindgen]
    pub fn retreat_carousel(&self, index: usize) {
        if let Some(view) = self.carousels.get(index) {
            view.retreat();
        }
    }

    /// Get carousel state as JSON
    #[wasm_bindgen]
    pub fn get_carousels_json(&self) -> String {
        let snapshots: Vec<_> = self.carousels.iter().map(|c| c.snapshot()).collect();
        serde_json::to_string(&snapshots).unwrap_or_else(|_| "[]".to_string())
    }
}
