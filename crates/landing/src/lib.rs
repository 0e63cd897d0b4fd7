//! Marketing page enhancements
//!
//! Stateless DOM wiring for the static landing page: use-case tab
//! switching, offset-adjusted smooth scrolling for in-page anchors, a
//! one-shot reveal animation as cards enter the viewport, and a hover lift
//! on the hero stat tiles. The module attaches everything on load; the
//! page works without it, just flatter.

use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

/// Fixed navigation bar selector; its height offsets every anchor scroll.
const NAV_SELECTOR: &str = ".site-nav";

/// Extra breathing room under the nav when scrolling to an anchor.
const SCROLL_MARGIN: f64 = 20.0;

/// Card selectors that fade in on scroll.
const REVEAL_SELECTOR: &str = ".card, .feature-card, .problem-card";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let document = document();
    init_tabs(&document);
    init_smooth_scroll(&document);
    init_reveal_on_scroll(&document);
    init_stat_hover(&document);
}

fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Tab buttons form an exclusivity group with their `data-tab` panels.
fn init_tabs(document: &Document) {
    for button in elements(document, ".tab-button") {
        let listener = EventListener::new(&button.clone().into(), "click", move |_| {
            let document = gloo::utils::document();
            let Some(target_tab) = button.get_attribute("data-tab") else {
                return;
            };

            for other in elements(&document, ".tab-button") {
                other.class_list().remove_1("active").ok();
            }
            for content in elements(&document, ".tab-content") {
                content.class_list().remove_1("active").ok();
            }

            button.class_list().add_1("active").ok();
            if let Some(panel) = document.get_element_by_id(&target_tab) {
                panel.class_list().add_1("active").ok();
            }
        });
        listener.forget();
    }
}

/// In-page anchors scroll smoothly, stopping under the fixed nav. Bare `#`
/// and external links keep their default behavior.
fn init_smooth_scroll(document: &Document) {
    for anchor in elements(document, "a[href^='#']") {
        let listener = EventListener::new(&anchor.clone().into(), "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if href == "#" || href.starts_with("http") {
                return;
            }
            event.prevent_default();

            let document = gloo::utils::document();
            let Ok(Some(target)) = document.query_selector(&href) else {
                return;
            };
            let Ok(target) = target.dyn_into::<HtmlElement>() else {
                return;
            };

            let nav_height = document
                .query_selector(NAV_SELECTOR)
                .ok()
                .flatten()
                .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
                .map_or(0.0, |nav| f64::from(nav.offset_height()));

            let top = f64::from(target.offset_top()) - nav_height - SCROLL_MARGIN;

            if let Some(window) = web_sys::window() {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        });
        listener.forget();
    }
}

/// Cards start transparent and slide up once, the first time they enter
/// the viewport. No un-reveal on exit.
fn init_reveal_on_scroll(document: &Document) {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Ok(element) = target.clone().dyn_into::<HtmlElement>() {
                    let style = element.style();
                    style.set_property("opacity", "1").ok();
                    style.set_property("transform", "translateY(0)").ok();
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -100px 0px");

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for card in elements(document, REVEAL_SELECTOR) {
        if let Ok(element) = card.clone().dyn_into::<HtmlElement>() {
            let style = element.style();
            style.set_property("opacity", "0").ok();
            style.set_property("transform", "translateY(30px)").ok();
            style
                .set_property("transition", "opacity 0.6s ease, transform 0.6s ease")
                .ok();
        }
        observer.observe(&card);
    }
}

/// Hero stat tiles float up on hover.
fn init_stat_hover(document: &Document) {
    for stat in elements(document, ".stat") {
        let Ok(element) = stat.dyn_into::<HtmlElement>() else {
            continue;
        };

        let enter_target = element.clone();
        let enter = EventListener::new(&element.clone().into(), "mouseenter", move |_| {
            let style = enter_target.style();
            style.set_property("transform", "translateY(-10px)").ok();
            style.set_property("transition", "transform 0.3s ease").ok();
        });
        enter.forget();

        let leave_target = element.clone();
        let leave = EventListener::new(&element.into(), "mouseleave", move |_| {
            leave_target
                .style()
                .set_property("transform", "translateY(0)")
                .ok();
        });
        leave.forget();
    }
}
