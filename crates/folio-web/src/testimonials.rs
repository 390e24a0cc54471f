//! Testimonial deck binding

use std::cell::RefCell;
use std::rc::Rc;

use folio_ui::{CardDeck, TestimonialConfig};
use gloo::events::EventListener;
use web_sys::{Document, Element, Event};

use crate::dom;
use crate::error::MountError;
use crate::Mounted;

struct DeckView {
    cards: Vec<Element>,
    deck: RefCell<CardDeck>,
}

impl DeckView {
    fn press(&self, x: f64) {
        self.deck.borrow_mut().press(x);
    }

    fn release(&self, x: f64) {
        let committed = matches!(self.deck.borrow_mut().release(x), Some(swipe) if swipe.commits());
        if !committed {
            return;
        }
        let deck = self.deck.borrow();
        for (i, card) in self.cards.iter().enumerate() {
            dom::set_class(card, CardDeck::ACTIVE_CLASS, deck.is_active(i));
        }
    }
}

/// Attach the testimonial deck; needs the container and at least one card
pub fn mount(document: &Document, config: &TestimonialConfig) -> Result<Mounted, MountError> {
    let root = dom::require(document, &config.root, "testimonial container")?;
    let cards = dom::select_all(document, &config.cards)?;
    if cards.is_empty() {
        return Err(MountError::missing("testimonial card", &config.cards));
    }

    let view = Rc::new(DeckView {
        deck: RefCell::new(CardDeck::new(cards.len(), config.swipe_threshold)),
        cards,
    });
    let mut mounted = Mounted::default();

    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(&root, "touchstart", move |event: &Event| {
        if let Some(x) = dom::touch_x(event) {
            v.press(x);
        }
    }));
    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(&root, "touchend", move |event: &Event| {
        if let Some(x) = dom::changed_touch_x(event) {
            v.release(x);
        }
    }));
    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(&root, "mousedown", move |event: &Event| {
        if let Some(x) = dom::mouse_x(event) {
            v.press(x);
        }
    }));
    let v = Rc::clone(&view);
    mounted.listen(EventListener::new(&root, "mouseup", move |event: &Event| {
        if let Some(x) = dom::mouse_x(event) {
            v.release(x);
        }
    }));

    Ok(mounted)
}
