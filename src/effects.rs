use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::carousel::Carousel;
use crate::hooks::{use_event_listener, use_throttled_scroll, ListenerTarget};

pub const BACK_TO_TOP_FROM_PX: f64 = 500.0;
pub const BACK_TO_TOP_THROTTLE_MS: f64 = 100.0;
pub const PARALLAX_THROTTLE_MS: f64 = 16.0;
/// Height kept clear above an anchor target for the fixed navbar.
pub const ANCHOR_OFFSET_PX: f64 = 80.0;

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_FROM_PX
}

pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - ANCHOR_OFFSET_PX
}

/// Vertical offset of parallax shape `index`; deeper shapes move faster.
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    let speed = (index as f64 + 1.0) * 0.2;
    scroll_y * -0.5 * speed
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    CloseMenu,
    PrevTestimonial,
    NextTestimonial,
}

impl Shortcut {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Shortcut::CloseMenu),
            "ArrowLeft" => Some(Shortcut::PrevTestimonial),
            "ArrowRight" => Some(Shortcut::NextTestimonial),
            _ => None,
        }
    }

    pub fn apply(self, menu_open: &mut bool, carousel: &mut Carousel) {
        match self {
            Shortcut::CloseMenu => *menu_open = false,
            Shortcut::PrevTestimonial => carousel.prev(),
            Shortcut::NextTestimonial => carousel.next(),
        }
    }
}

pub fn use_keyboard_shortcuts(menu_open: Signal<bool>, carousel: Signal<Carousel>) {
    let mut menu_open = menu_open;
    let mut carousel = carousel;
    use_event_listener(ListenerTarget::Document, "keydown", move |event| {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(key) = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .map(web_sys::KeyboardEvent::key)
            else {
                return;
            };
            let Some(shortcut) = Shortcut::from_key(&key) else {
                return;
            };
            tracing::debug!(?shortcut, "keyboard shortcut");
            let mut open = *menu_open.peek();
            shortcut.apply(&mut open, &mut carousel.write());
            if open != *menu_open.peek() {
                menu_open.set(open);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (event, &mut menu_open, &mut carousel);
        }
    });
}

/// Smooth-scrolls so the section `id` sits just below the navbar. Unknown
/// ids are ignored.
pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(target) = window
            .document()
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            tracing::debug!(id, "anchor target missing");
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(anchor_scroll_top(f64::from(target.offset_top())));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn scroll_into_view(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(target) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

#[component]
pub fn BackToTop() -> Element {
    let mut visible = use_signal(|| false);

    use_throttled_scroll(BACK_TO_TOP_THROTTLE_MS, move |y| {
        let show = back_to_top_visible(y);
        if show != *visible.peek() {
            visible.set(show);
        }
    });

    rsx! {
        button {
            id: "back-to-top",
            r#type: "button",
            class: if visible() { "back-to-top visible" } else { "back-to-top" },
            aria_label: "Back to top",
            onclick: move |_| scroll_to_top(),
            i { class: "fas fa-arrow-up" }
        }
    }
}

/// Call-to-action that brings the contact form into view.
#[component]
pub fn GetInTouch(label: &'static str, target: &'static str) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "btn btn-primary get-in-touch",
            onclick: move |_| scroll_into_view(target),
            "{label}"
        }
    }
}

#[component]
pub fn ParallaxShapes(count: usize) -> Element {
    let mut scroll = use_signal(|| 0.0_f64);

    use_throttled_scroll(PARALLAX_THROTTLE_MS, move |y| scroll.set(y));

    let offset = scroll();
    let shapes: Vec<(usize, String)> = (0..count)
        .map(|index| {
            let shift = parallax_offset(offset, index);
            (index, format!("transform: translateY({shift}px);"))
        })
        .collect();

    rsx! {
        div { class: "parallax-shapes", aria_hidden: "true",
            for (index, style) in shapes {
                div { key: "{index}", class: "shape shape-{index}", style: "{style}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn back_to_top_threshold_is_exclusive() {
        assert!(!back_to_top_visible(500.0));
        assert!(back_to_top_visible(500.5));
        assert!(!back_to_top_visible(0.0));
    }

    #[test]
    fn anchors_leave_room_for_the_navbar() {
        assert_eq!(anchor_scroll_top(1000.0), 920.0);
        assert_eq!(anchor_scroll_top(40.0), -40.0);
    }

    #[test]
    fn parallax_speed_grows_with_depth() {
        assert_eq!(parallax_offset(0.0, 3), 0.0);
        assert_eq!(parallax_offset(100.0, 0), -10.0);
        assert_eq!(parallax_offset(100.0, 1), -20.0);
        assert!((parallax_offset(100.0, 2) - -30.0).abs() < 1e-9);
    }

    #[test]
    fn shortcuts_map_keys() {
        assert_eq!(Shortcut::from_key("Escape"), Some(Shortcut::CloseMenu));
        assert_eq!(Shortcut::from_key("ArrowLeft"), Some(Shortcut::PrevTestimonial));
        assert_eq!(Shortcut::from_key("ArrowRight"), Some(Shortcut::NextTestimonial));
        assert_eq!(Shortcut::from_key("Enter"), None);
    }

    #[test]
    fn shortcuts_drive_menu_and_carousel() {
        let mut open = true;
        let mut carousel = Carousel::new(3);

        Shortcut::PrevTestimonial.apply(&mut open, &mut carousel);
        assert_eq!(carousel.current(), 2);
        assert!(open);

        Shortcut::NextTestimonial.apply(&mut open, &mut carousel);
        assert_eq!(carousel.current(), 0);

        Shortcut::CloseMenu.apply(&mut open, &mut carousel);
        assert!(!open);
        assert_eq!(carousel.current(), 0);
    }
}
