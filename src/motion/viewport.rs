//! Viewport breakpoint classification and the body classes that hang off it.

use web_sys::{Document, Window};

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn classify(width: f64) -> Self {
        if width < config::MOBILE_BREAKPOINT {
            Self::Mobile
        } else if width < config::TABLET_BREAKPOINT {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }

    /// Cards fall back to flat rendering on small screens.
    pub fn tilt_enabled(self) -> bool {
        !matches!(self, Self::Mobile)
    }
}

pub fn current(window: &Window) -> Breakpoint {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(config::TABLET_BREAKPOINT);
    Breakpoint::classify(width)
}

/// Sets exactly one of the breakpoint classes on `<body>`. Reapplying the
/// current classification is harmless.
pub fn apply(document: &Document, breakpoint: Breakpoint) {
    let Some(body) = document.body() else { return };
    let classes = body.class_list();
    for candidate in [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop] {
        let _ = classes.toggle_with_force(candidate.css_class(), candidate == breakpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_the_reference_widths() {
        assert_eq!(Breakpoint::classify(500.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(800.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1200.0), Breakpoint::Desktop);
    }

    #[test]
    fn breakpoint_edges_are_inclusive_on_the_upper_side() {
        assert_eq!(Breakpoint::classify(767.9), Breakpoint::Mobile);
        assert_eq!(Breakpoint::classify(768.0), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1023.9), Breakpoint::Tablet);
        assert_eq!(Breakpoint::classify(1024.0), Breakpoint::Desktop);
    }

    #[test]
    fn body_classes_are_distinct() {
        let classes = [
            Breakpoint::Mobile.css_class(),
            Breakpoint::Tablet.css_class(),
            Breakpoint::Desktop.css_class(),
        ];
        assert_eq!(classes.len(), 3);
        assert!(classes.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn only_mobile_disables_tilt() {
        assert!(!Breakpoint::Mobile.tilt_enabled());
        assert!(Breakpoint::Tablet.tilt_enabled());
        assert!(Breakpoint::Desktop.tilt_enabled());
    }
}
