//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use glide::browser::{DomPage, DomTarget, Overlay};
use glide::{
    list_focusable, CornerRadius, Direction, FocusTarget, GlideConfig, OverlayFrame, Page, Rect,
    Selector,
};
use web_sys::{Document, HtmlElement};

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
}

/// Mount `html` in a fresh fixture container and return the container.
fn fixture(html: &str) -> HtmlElement {
    let document = document();
    let container: HtmlElement = document
        .create_element("div")
        .expect("create")
        .dyn_into()
        .expect("html element");
    container.set_inner_html(html);
    document.body().expect("body").append_child(&container).expect("append");
    container
}

fn by_id(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .expect("element")
        .dyn_into()
        .expect("html element")
}

// ============================================================================
// Candidate Directory
// ============================================================================

#[wasm_bindgen_test]
fn test_interactive_elements_filters_predicate() {
    let container = fixture(
        r##"<a id="link" href="#">link</a>
           <a id="anchor">no href</a>
           <button id="enabled">ok</button>
           <button id="disabled" disabled>no</button>
           <div id="tabbable" tabindex="0">div</div>
           <button id="untabbable" tabindex="-1">skip</button>"##,
    );
    let page = DomPage::current().expect("page");
    let found = page.interactive_elements();

    let ids: Vec<String> = found.iter().map(|t| t.element().id()).collect();
    assert!(ids.contains(&"link".to_string()));
    assert!(ids.contains(&"enabled".to_string()));
    assert!(ids.contains(&"tabbable".to_string()));
    assert!(!ids.contains(&"anchor".to_string()));
    assert!(!ids.contains(&"disabled".to_string()));
    assert!(!ids.contains(&"untabbable".to_string()));
    container.remove();
}

#[wasm_bindgen_test]
fn test_hidden_container_excludes_children() {
    let container = fixture(
        r#"<div style="display: none"><button id="in-hidden">x</button></div>
           <div style="opacity: 0"><button id="in-transparent">x</button></div>
           <div style="visibility: hidden"><button id="shown" style="visibility: visible">x</button></div>
           <button id="plain">x</button>"#,
    );
    let page = DomPage::current().expect("page");
    let ids: Vec<String> = list_focusable(&page)
        .iter()
        .map(|t| t.element().id())
        .collect();

    assert!(!ids.contains(&"in-hidden".to_string()));
    assert!(!ids.contains(&"in-transparent".to_string()));
    assert!(ids.contains(&"shown".to_string()));
    assert!(ids.contains(&"plain".to_string()));
    container.remove();
}

// ============================================================================
// DomTarget
// ============================================================================

#[wasm_bindgen_test]
fn test_rect_and_detach() {
    let container = fixture(
        r#"<button id="sized" style="position: fixed; left: 10px; top: 20px;
             width: 100px; height: 40px; margin: 0; border: 0; padding: 0">x</button>"#,
    );
    let target = DomTarget::new(by_id("sized"));
    assert_eq!(target.rect(), Some(Rect::new(10.0, 20.0, 110.0, 60.0)));

    container.remove();
    assert_eq!(target.rect(), None);
}

#[wasm_bindgen_test]
fn test_corner_radii_scaled_by_transform() {
    let container = fixture(
        r#"<button id="round" style="position: fixed; left: 0; top: 0; width: 100px;
             height: 40px; border: 0; padding: 0; border-radius: 8px;
             transform: scale(2); transform-origin: 0 0">x</button>"#,
    );
    let radii = DomTarget::new(by_id("round")).corner_radii();
    assert_eq!(radii, CornerRadius::uniform(16.0));
    container.remove();
}

#[wasm_bindgen_test]
fn test_try_focus_reports_outcome() {
    let container = fixture(r#"<button id="yes">y</button><button id="no" disabled>n</button>"#);
    assert!(DomTarget::new(by_id("yes")).try_focus());
    assert!(!DomTarget::new(by_id("no")).try_focus());

    let page = DomPage::current().expect("page");
    assert_eq!(page.active_element(), Some(DomTarget::new(by_id("yes"))));
    container.remove();
}

#[wasm_bindgen_test]
fn test_body_is_not_an_active_element() {
    if let Some(active) = document().active_element() {
        if let Ok(element) = active.dyn_into::<HtmlElement>() {
            element.blur().expect("blur");
        }
    }
    let page = DomPage::current().expect("page");
    assert_eq!(page.active_element(), None);
}

// ============================================================================
// Selector over the DOM
// ============================================================================

#[wasm_bindgen_test]
fn test_select_right_neighbor() {
    let container = fixture(
        r#"<button id="a" style="position: fixed; left: 100px; top: 100px; width: 80px; height: 40px">a</button>
           <button id="b" style="position: fixed; left: 300px; top: 100px; width: 80px; height: 40px">b</button>
           <button id="c" style="position: fixed; left: 100px; top: 300px; width: 80px; height: 40px">c</button>"#,
    );
    let page = DomPage::current().expect("page");
    by_id("a").focus().expect("focus");

    let selector = Selector::new((&GlideConfig::default()).into());
    let chosen = selector.select_next(&page, Direction::Right);
    assert_eq!(chosen, Some(DomTarget::new(by_id("b"))));

    let chosen = selector.select_next(&page, Direction::Up);
    assert_eq!(chosen, None);
    container.remove();
}

// ============================================================================
// Overlay
// ============================================================================

#[wasm_bindgen_test]
fn test_overlay_install_apply_remove() {
    let document = document();
    let overlay = Overlay::install(&document, "glide-test-overlay").expect("install");
    assert!(document.get_element_by_id("glide-test-overlay").is_some());

    // Installing again reuses the element
    let again = Overlay::install(&document, "glide-test-overlay").expect("install");
    assert_eq!(
        document
            .query_selector_all("#glide-test-overlay")
            .expect("query")
            .length(),
        1
    );

    overlay.apply(&OverlayFrame {
        rect: Rect::new(5.0, 6.0, 55.0, 36.0),
        radii: CornerRadius::uniform(4.0),
    });
    let style = overlay.element().style();
    assert_eq!(style.get_property_value("left").expect("left"), "5px");
    assert_eq!(style.get_property_value("width").expect("width"), "50px");
    assert_eq!(style.get_property_value("pointer-events").expect("pe"), "none");

    again.remove();
    assert!(document.get_element_by_id("glide-test-overlay").is_none());
}

#[wasm_bindgen_test]
fn test_install_and_dispose() {
    let glide = glide::browser::Glide::install(&GlideConfig {
        overlay_id: "glide-install-test".into(),
        ..GlideConfig::default()
    })
    .expect("install");
    assert!(document().get_element_by_id("glide-install-test").is_some());

    glide.dispose();
    glide.dispose();
    assert!(glide.disposed());
    assert!(document().get_element_by_id("glide-install-test").is_none());
}
