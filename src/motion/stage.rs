//! One-time resolution of the elements a page's effects operate on.
//!
//! Pages resolve a [`Stage`] at mount instead of sprinkling selector lookups
//! through event handlers. A selector that matches nothing leaves its
//! collection empty and the corresponding feature does no work.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Elements that receive the reveal mark when they enter the viewport.
const REVEAL_SELECTOR: &str = ".animate-on-scroll, .animate-left, .animate-right, .stagger";
const TIMELINE_SELECTOR: &str = ".timeline-item";
const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
const ANCHOR_SELECTOR: &str = "a[href^='#']";

pub struct Stage {
    pub reveal_targets: Vec<Element>,
    pub timeline_items: Vec<Element>,
    pub lazy_images: Vec<HtmlElement>,
    pub anchor_links: Vec<HtmlElement>,
}

impl Stage {
    pub fn resolve(document: &Document) -> Self {
        let stage = Self {
            reveal_targets: collect(document, REVEAL_SELECTOR),
            timeline_items: collect(document, TIMELINE_SELECTOR),
            lazy_images: collect_html(document, LAZY_IMAGE_SELECTOR),
            anchor_links: collect_html(document, ANCHOR_SELECTOR),
        };
        log::debug!(
            "stage resolved: {} reveal targets, {} timeline items, {} lazy images, {} anchors",
            stage.reveal_targets.len(),
            stage.timeline_items.len(),
            stage.lazy_images.len(),
            stage.anchor_links.len(),
        );
        stage
    }
}

fn collect(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn collect_html(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
