use dioxus::prelude::*;

use crate::hooks::use_reveal;

/// Intersection ratios are reported as floats; a crossing reported a hair
/// below the threshold still counts.
const RATIO_TOLERANCE: f64 = 0.001;

/// "Has this already played" guard for one-shot effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    played: bool,
}

impl OneShot {
    /// Returns `true` exactly once; every later call is a no-op.
    pub fn fire(&mut self) -> bool {
        if self.played {
            return false;
        }
        self.played = true;
        true
    }

    #[cfg(test)]
    pub fn played(&self) -> bool {
        self.played
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl VisibilityOptions {
    /// Any pixel in view.
    pub const ANY: Self = Self {
        threshold: 0.0,
        root_margin: "0px",
    };
    /// Generic reveal classes.
    pub const REVEAL: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -100px 0px",
    };
    /// `data-aos` style blocks.
    pub const AOS: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    };
    pub const RADAR: Self = Self {
        threshold: 0.3,
        root_margin: "0px",
    };
}

pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= threshold
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStyle {
    FadeIn,
    SlideInLeft,
    SlideInRight,
    ZoomIn,
    RotateIn,
    /// `data-aos` block, marked `aos-animate` instead of `in-view`.
    Aos,
}

impl RevealStyle {
    pub fn class(self) -> &'static str {
        match self {
            RevealStyle::FadeIn => "fade-in",
            RevealStyle::SlideInLeft => "slide-in-left",
            RevealStyle::SlideInRight => "slide-in-right",
            RevealStyle::ZoomIn => "zoom-in",
            RevealStyle::RotateIn => "rotate-in",
            RevealStyle::Aos => "aos",
        }
    }

    pub fn options(self) -> VisibilityOptions {
        match self {
            RevealStyle::Aos => VisibilityOptions::AOS,
            _ => VisibilityOptions::REVEAL,
        }
    }

    fn revealed_marker(self) -> &'static str {
        match self {
            RevealStyle::Aos => "aos-animate",
            _ => "in-view",
        }
    }

    pub fn class_list(self, revealed: bool) -> String {
        if revealed {
            format!("{} {}", self.class(), self.revealed_marker())
        } else {
            self.class().to_string()
        }
    }
}

/// Wraps content that animates in the first time it scrolls into view.
#[component]
pub fn RevealOnScroll(style: RevealStyle, class: Option<String>, children: Element) -> Element {
    let reveal = use_reveal(style.options());
    let classes = match class {
        Some(extra) => format!("{extra} {}", style.class_list(reveal.visible())),
        None => style.class_list(reveal.visible()),
    };
    rsx! {
        div { class: "{classes}", onmounted: move |event| reveal.mount(event),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn guard_fires_once_under_repeated_stimulus() {
        let mut guard = OneShot::default();
        assert!(!guard.played());
        let fired: Vec<bool> = (0..5).map(|_| guard.fire()).collect();
        assert_eq!(fired, vec![true, false, false, false, false]);
        assert!(guard.played());
    }

    #[test]
    fn threshold_requires_intersection_and_ratio() {
        assert!(crosses_threshold(true, 0.3, 0.3));
        assert!(crosses_threshold(true, 0.2995, 0.3));
        assert!(!crosses_threshold(true, 0.1, 0.3));
        assert!(!crosses_threshold(false, 1.0, 0.3));
        assert!(crosses_threshold(true, 0.0, 0.0));
    }

    #[test]
    fn revealed_classes_carry_the_marker() {
        assert_eq!(RevealStyle::SlideInLeft.class_list(false), "slide-in-left");
        assert_eq!(RevealStyle::ZoomIn.class_list(true), "zoom-in in-view");
        assert_eq!(RevealStyle::Aos.class_list(true), "aos aos-animate");
        assert_eq!(RevealStyle::Aos.options(), VisibilityOptions::AOS);
    }
}
