#![cfg(target_arch = "wasm32")]

use folio_web::Folio;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{window, Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    window().and_then(|w| w.document()).expect("no document")
}

/// Insert `html` into a fresh container appended to the body
fn fixture(html: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").expect("create fixture");
    root.set_inner_html(html);
    doc.body().expect("no body").append_child(&root).expect("append fixture");
    root
}

fn click(selector: &str) {
    document()
        .query_selector(selector)
        .expect("bad selector")
        .unwrap_or_else(|| panic!("{selector} not found"))
        .dyn_into::<HtmlElement>()
        .expect("not an html element")
        .click();
}

fn has_class(selector: &str, class: &str) -> bool {
    document()
        .query_selector(selector)
        .expect("bad selector")
        .unwrap_or_else(|| panic!("{selector} not found"))
        .class_list()
        .contains(class)
}

fn carousels(folio: &Folio) -> serde_json::Value {
    serde_json::from_str(&folio.get_carousels_json()).expect("carousel json")
}

// =============================================================================
// Mounting
// =============================================================================

#[wasm_bindgen_test]
fn mount_on_bare_page() {
    let folio = Folio::mount().expect("mount");
    assert_eq!(folio.carousel_count(), 0);
    assert_eq!(folio.ring_count(), 0);
    assert_eq!(folio.get_carousels_json(), "[]");
}

#[wasm_bindgen_test]
fn mount_rejects_bad_config() {
    assert!(Folio::mount_with_config("{ not json").is_err());
}

#[wasm_bindgen_test]
fn mount_with_partial_config() {
    let root = fixture(
        r#"<div class="slider"><div class="carousel-track">
            <div style="width: 100px">a</div>
            <div style="width: 100px">b</div>
        </div></div>"#,
    );
    let folio = Folio::mount_with_config(r#"{ "carousel": { "root": ".slider" } }"#).expect("mount");
    assert_eq!(folio.carousel_count(), 1);
    root.remove();
}

#[wasm_bindgen_test]
fn bad_carousel_selector_skips_carousels() {
    let folio = Folio::mount_with_config(r#"{ "carousel": { "root": "[[" } }"#).expect("mount");
    assert_eq!(folio.carousel_count(), 0);
}

// =============================================================================
// Carousel
// =============================================================================

const CAROUSEL: &str = r#"
    <div class="carousel">
        <button class="prev">prev</button>
        <div class="carousel-track">
            <div style="width: 284px">one</div>
            <div style="width: 284px">two</div>
            <div style="width: 284px">three</div>
        </div>
        <button class="next">next</button>
    </div>"#;

#[wasm_bindgen_test]
fn carousel_buttons_move_track() {
    let root = fixture(CAROUSEL);
    let folio = Folio::mount().expect("mount");
    assert_eq!(folio.carousel_count(), 1);

    let state = carousels(&folio);
    assert_eq!(state[0]["slideCount"], 3);
    assert_eq!(state[0]["slideWidth"], 300.0);

    click(".carousel .next");
    click(".carousel .next");
    let state = carousels(&folio);
    assert_eq!(state[0]["index"], 2);
    assert_eq!(state[0]["offset"], -600.0);

    click(".carousel .next");
    assert_eq!(carousels(&folio)[0]["index"], 0);

    click(".carousel .prev");
    assert_eq!(carousels(&folio)[0]["index"], 2);

    root.remove();
}

#[wasm_bindgen_test]
fn carousel_hidden_at_mount_measures_when_shown() {
    let root = fixture(&format!(r#"<div id="wrap" style="display: none">{CAROUSEL}</div>"#));
    let folio = Folio::mount().expect("mount");
    assert_eq!(carousels(&folio)[0]["slideWidth"], 16.0);

    document()
        .get_element_by_id("wrap")
        .expect("wrap")
        .dyn_into::<HtmlElement>()
        .expect("not an html element")
        .style()
        .set_property("display", "block")
        .expect("show wrapper");

    folio.advance_carousel(0);
    let state = carousels(&folio);
    assert_eq!(state[0]["slideWidth"], 300.0);
    assert_eq!(state[0]["offset"], -300.0);

    root.remove();
}

#[wasm_bindgen_test]
fn carousel_api_methods() {
    let root = fixture(CAROUSEL);
    let folio = Folio::mount().expect("mount");

    folio.retreat_carousel(0);
    assert_eq!(carousels(&folio)[0]["index"], 2);
    folio.advance_carousel(0);
    assert_eq!(carousels(&folio)[0]["index"], 0);

    // Out-of-range carousels are ignored
    folio.advance_carousel(7);
    assert_eq!(carousels(&folio)[0]["index"], 0);

    root.remove();
}

// =============================================================================
// Panels
// =============================================================================

#[wasm_bindgen_test]
fn nav_drawer_opens_and_closes() {
    let root = fixture(
        r##"<button id="menu-toggle">menu</button>
        <ul id="nav-links"><li><a href="#top">top</a></li></ul>
        <button id="close-btn">close</button>"##,
    );
    let _folio = Folio::mount().expect("mount");

    click("#menu-toggle");
    assert!(has_class("#nav-links", "show"));
    assert!(has_class("#menu-toggle", "hide"));

    click("#close-btn");
    assert!(!has_class("#nav-links", "show"));
    assert!(!has_class("#menu-toggle", "hide"));

    root.remove();
}

#[wasm_bindgen_test]
fn work_filter_hides_other_categories() {
    let root = fixture(
        r#"<button class="toggle-btn" data-category="web">web</button>
        <button class="toggle-btn" data-category="design">design</button>
        <div class="work-box web" id="w1"></div>
        <div class="work-box design" id="w2"></div>"#,
    );
    let _folio = Folio::mount().expect("mount");

    click(".toggle-btn[data-category=design]");
    assert!(has_class(".toggle-btn[data-category=design]", "active"));
    assert!(has_class("#w1", "hidden"));
    assert!(!has_class("#w2", "hidden"));

    root.remove();
}

#[wasm_bindgen_test]
fn lightbox_opens_and_closes() {
    let root = fixture(r#"<div class="contact-images"><img src="data:," id="photo"></div>"#);
    let _folio = Folio::mount().expect("mount");

    click("#photo");
    assert!(document().query_selector(".image-modal").unwrap().is_some());

    click(".image-modal .close");
    assert!(document().query_selector(".image-modal").unwrap().is_none());

    root.remove();
}

#[wasm_bindgen_test]
fn dropping_handle_detaches_listeners() {
    let root = fixture(r#"<div class="skill-box" id="skill"></div>"#);
    let folio = Folio::mount().expect("mount");

    click("#skill");
    assert!(has_class("#skill", "active-popup"));

    drop(folio);
    click("#skill");
    assert!(has_class("#skill", "active-popup"));

    root.remove();
}
