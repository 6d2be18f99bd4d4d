//! Scroll-position reactions: the navbar state classification and smooth
//! anchor scrolling with the fixed-navbar allowance.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use crate::config;

/// Navbar presentation derived from one scroll sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavFrame {
    /// Solid background once the page has scrolled past the hero edge.
    pub solid: bool,
    /// Hidden while scrolling down deep in the page; scrolling up always
    /// brings the bar back.
    pub hidden: bool,
}

/// Compares each scroll offset against the previous one to classify
/// direction. Owned by the nav component, not shared.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self { last_offset: 0.0 }
    }

    pub fn sample(&mut self, offset: f64) -> NavFrame {
        let frame = NavFrame {
            solid: offset > config::NAV_SOLID_OFFSET,
            hidden: offset > config::NAV_HIDE_OFFSET && offset > self.last_offset,
        };
        // Overscroll bounce can report negative offsets; pin the baseline.
        self.last_offset = offset.max(0.0);
        frame
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Smoothly scrolls so `target` sits just below the fixed navbar.
pub fn smooth_scroll_to(window: &Window, target: &HtmlElement, allowance: f64) {
    let top = (f64::from(target.offset_top()) - allowance).max(0.0);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Click handlers for in-page `#fragment` links, attached once per page
/// mount. Dropping the set detaches every handler.
pub struct AnchorLinks {
    hooks: Vec<(HtmlElement, Closure<dyn FnMut(MouseEvent)>)>,
}

impl AnchorLinks {
    pub fn wire(window: &Window, anchors: &[HtmlElement]) -> Self {
        let mut hooks = Vec::new();
        for anchor in anchors {
            let Some(fragment) = anchor.get_attribute("href") else {
                continue;
            };
            if !fragment.starts_with('#') || fragment.len() < 2 {
                continue;
            }
            let window = window.clone();
            let callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                let Some(document) = window.document() else { return };
                let Some(target) = document.get_element_by_id(&fragment[1..]) else {
                    return;
                };
                let Ok(target) = target.dyn_into::<HtmlElement>() else { return };
                smooth_scroll_to(&window, &target, config::ANCHOR_ALLOWANCE);
                // Record the fragment without letting the browser jump.
                if let Ok(history) = window.history() {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&fragment));
                }
            }) as Box<dyn FnMut(MouseEvent)>);
            if anchor
                .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
                .is_ok()
            {
                hooks.push((anchor.clone(), callback));
            }
        }
        log::debug!("wired {} anchor links", hooks.len());
        Self { hooks }
    }
}

impl Drop for AnchorLinks {
    fn drop(&mut self) {
        for (anchor, callback) in &self.hooks {
            let _ = anchor
                .remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_offsets_leave_the_bar_alone() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.sample(50.0), NavFrame { solid: false, hidden: false });
    }

    #[test]
    fn solid_past_the_background_threshold() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.sample(150.0), NavFrame { solid: true, hidden: false });
    }

    #[test]
    fn hides_only_while_descending_past_the_hide_threshold() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.sample(250.0), NavFrame { solid: true, hidden: true });
        // Scrolling back up at the same depth reveals the bar.
        assert_eq!(tracker.sample(220.0), NavFrame { solid: true, hidden: false });
        assert_eq!(tracker.sample(260.0), NavFrame { solid: true, hidden: true });
    }

    #[test]
    fn descending_shallow_depths_never_hide() {
        let mut tracker = ScrollTracker::new();
        tracker.sample(50.0);
        assert_eq!(tracker.sample(180.0), NavFrame { solid: true, hidden: false });
    }

    #[test]
    fn negative_overscroll_clamps_the_baseline() {
        let mut tracker = ScrollTracker::new();
        tracker.sample(-30.0);
        // From a clamped baseline of zero, 250 counts as descending.
        assert_eq!(tracker.sample(250.0), NavFrame { solid: true, hidden: true });
    }
}
