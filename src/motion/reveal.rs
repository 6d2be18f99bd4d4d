//! Viewport-intersection triggers: one-shot reveal marking, per-element
//! visibility callbacks, and the lazy image promoter.
//!
//! A registration fires at most once unless explicitly re-armed by turning
//! off [`RevealOptions::once`]. Targets that leave the document before
//! firing simply never fire.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;

/// The class the reveal system looks for to delay a target by a bounded
/// random jitter, so grouped elements don't animate in lockstep.
pub const STAGGER_CLASS: &str = "stagger";
/// The class applied to targets once they have entered the viewport.
pub const REVEALED_CLASS: &str = "animated";

#[derive(Debug, Clone, Copy)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN,
            once: true,
        }
    }
}

impl RevealOptions {
    /// Bare-viewport options for lazy loading (no margin shrink).
    fn edge_to_edge() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px",
            once: true,
        }
    }
}

/// An intersection observation set. Dropping it disconnects the observer;
/// pending registrations never fire afterwards.
pub struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Reveal {
    fn with_handler(
        options: RevealOptions,
        mut handler: impl FnMut(Element) + 'static,
    ) -> Option<Self> {
        let once = options.once;
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if once {
                        observer.unobserve(&target);
                    }
                    handler(target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .ok()?;
        Some(Self { observer, _callback: callback })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Marks every entering target with [`REVEALED_CLASS`]. Targets carrying
    /// [`STAGGER_CLASS`] are marked after a 0–200ms jitter.
    pub fn class_marker(options: RevealOptions, targets: &[Element]) -> Option<Self> {
        let reveal = Self::with_handler(options, |target| {
            if target.class_list().contains(STAGGER_CLASS) {
                let jitter = (js_sys::Math::random() * config::STAGGER_JITTER_MS) as u32;
                let target = target.clone();
                Timeout::new(jitter, move || {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                })
                .forget();
            } else {
                let _ = target.class_list().add_1(REVEALED_CLASS);
            }
        })?;
        for target in targets {
            reveal.observe(target);
        }
        Some(reveal)
    }

    /// One-shot visibility trigger for a single element.
    pub fn once(element: &Element, action: impl FnOnce() + 'static) -> Option<Self> {
        let slot = Rc::new(RefCell::new(Some(action)));
        let reveal = Self::with_handler(RevealOptions::default(), move |_target| {
            if let Some(action) = slot.borrow_mut().take() {
                action();
            }
        })?;
        reveal.observe(element);
        Some(reveal)
    }

    /// Promotes `img[data-src]` elements to their real source on first
    /// visibility.
    pub fn lazy_images(images: &[HtmlElement]) -> Option<Self> {
        let reveal = Self::with_handler(RevealOptions::edge_to_edge(), |target| {
            if let Some(src) = target.get_attribute("data-src") {
                let _ = target.set_attribute("src", &src);
                let _ = target.remove_attribute("data-src");
            }
        })?;
        for image in images {
            reveal.observe(image);
        }
        Some(reveal)
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
