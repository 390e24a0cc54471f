//! Scroll-reveal binding

use folio_ui::{FadeConfig, FadeGroup, FadeTracker};
use web_sys::Document;

use crate::dom;
use crate::error::MountError;
use crate::observer::Observer;
use crate::Mounted;

fn mount_group(
    document: &Document,
    group: &FadeGroup,
    config: &FadeConfig,
) -> Result<Option<Observer>, MountError> {
    let elements = dom::select_all(document, &group.selector)?;
    if elements.is_empty() {
        return Ok(None);
    }

    let mut tracker = FadeTracker::new(group, config, elements.len());
    let targets = elements.clone();
    let observer = Observer::new(
        elements,
        config.threshold,
        Some(&config.root_margin),
        move |entry, unobserve| {
            let Some(change) = tracker.handle(entry) else {
                return;
            };
            dom::set_class(&targets[change.key], &change.class, change.present);
            if change.unobserve {
                unobserve.key(change.key);
            }
        },
    )?;
    Ok(Some(observer))
}

/// Attach every configured fade group that has elements on the page
pub fn mount(document: &Document, config: &FadeConfig) -> Result<Mounted, MountError> {
    let mut mounted = Mounted::default();
    for group in &config.groups {
        match mount_group(document, group, config) {
            Ok(Some(observer)) => mounted.observe(observer),
            Ok(None) => {}
            Err(e) => log::debug!("[folio-fade] group '{}' skipped: {}", group.selector, e),
        }
    }
    Ok(mounted)
}
