use std::rc::Rc;

use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::content::NavSection;
use crate::effects::scroll_to_section;
use crate::hooks::{use_event_listener, use_mounted_element, use_throttled_scroll, ListenerTarget};
use crate::rate_limit::Debounce;
use crate::theme::ThemeToggle;

pub const SCROLL_THROTTLE_MS: f64 = 100.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 150;
pub const SCROLLED_FROM_PX: f64 = 100.0;
pub const HIDE_FROM_PX: f64 = 200.0;
pub const HOME_SECTION: &str = "home";
/// How far below the viewport top a section must reach to count as current.
pub const ACTIVE_PROBE_PX: f64 = 200.0;

/// Navbar appearance derived from successive scroll positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavScroll {
    last_y: f64,
    scrolled: bool,
    hidden: bool,
}

impl NavScroll {
    pub fn update(&mut self, y: f64) {
        self.scrolled = y > SCROLLED_FROM_PX;
        self.hidden = y > self.last_y && y > HIDE_FROM_PX;
        self.last_y = y;
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    #[cfg(test)]
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section containing `scroll_y + ACTIVE_PROBE_PX`, if any.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&'static str> {
    let probe = scroll_y + ACTIVE_PROBE_PX;
    sections
        .iter()
        .find(|section| section.contains(probe))
        .map(|section| section.id)
}

fn measure_sections(ids: &[&'static str]) -> Vec<SectionBounds> {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return Vec::new();
        };
        ids.iter()
            .copied()
            .filter_map(|id| {
                let element = document
                    .get_element_by_id(id)?
                    .dyn_into::<web_sys::HtmlElement>()
                    .ok()?;
                Some(SectionBounds {
                    id,
                    top: f64::from(element.offset_top()),
                    height: f64::from(element.offset_height()),
                })
            })
            .collect()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ids;
        Vec::new()
    }
}

/// Keeps the previous link when nothing matches.
fn refresh_active(mut active: Signal<Option<&'static str>>, ids: &[&'static str], scroll_y: f64) {
    let Some(current) = active_section(scroll_y, &measure_sections(ids)) else {
        return;
    };
    if *active.peek() != Some(current) {
        tracing::debug!(section = current, "nav: active section");
        active.set(Some(current));
    }
}

#[component]
pub fn Navbar(sections: Vec<NavSection>, menu_open: Signal<bool>) -> Element {
    let mut menu_open = menu_open;
    let mut scroll = use_signal(NavScroll::default);
    let active = use_signal(|| None::<&'static str>);
    let navbar = use_mounted_element();
    let ids: Rc<[&'static str]> = use_hook(|| sections.iter().map(|section| section.id).collect());

    let scroll_ids = ids.clone();
    use_throttled_scroll(SCROLL_THROTTLE_MS, move |y| {
        scroll.write().update(y);
        refresh_active(active, &scroll_ids, y);
    });

    let resize_ids = ids.clone();
    let mut debounce = Debounce::new(RESIZE_DEBOUNCE_MS);
    use_event_listener(ListenerTarget::Window, "resize", move |_event| {
        let ids = resize_ids.clone();
        debounce.call(move || refresh_active(active, &ids, crate::timing::scroll_y()));
    });

    use_event_listener(ListenerTarget::Document, "click", move |event| {
        if !*menu_open.peek() {
            return;
        }
        #[cfg(target_arch = "wasm32")]
        {
            let Some(root) = navbar.get() else {
                return;
            };
            let target = event.target().and_then(|target| target.dyn_into::<web_sys::Node>().ok());
            if !root.contains(target.as_ref()) {
                menu_open.set(false);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (event, navbar);
        }
    });

    let state = scroll();
    let open = menu_open();
    let navbar_class = if state.scrolled() { "navbar scrolled" } else { "navbar" };
    let navbar_style = format!("transform: {};", state.transform());
    let current = active();
    let links: Vec<(NavSection, &'static str)> = sections
        .iter()
        .map(|section| {
            let class = if current == Some(section.id) { "nav-link active" } else { "nav-link" };
            (*section, class)
        })
        .collect();

    rsx! {
        nav {
            class: "{navbar_class}",
            style: "{navbar_style}",
            onmounted: move |event| navbar.mount(event),
            a {
                class: "nav-logo",
                href: "#{HOME_SECTION}",
                onclick: move |event| {
                    event.prevent_default();
                    menu_open.set(false);
                    scroll_to_section(HOME_SECTION);
                },
                "Portfolio"
            }
            ul { class: if open { "nav-menu active" } else { "nav-menu" },
                for (section, class) in links {
                    li { key: "{section.id}",
                        a {
                            class: class,
                            href: "#{section.id}",
                            onclick: move |event| {
                                event.prevent_default();
                                menu_open.set(false);
                                scroll_to_section(section.id);
                            },
                            "{section.label}"
                        }
                    }
                }
            }
            ThemeToggle {}
            button {
                r#type: "button",
                class: if open { "hamburger active" } else { "hamburger" },
                aria_label: "Toggle menu",
                aria_expanded: open,
                onclick: move |_| {
                    let next = !menu_open();
                    menu_open.set(next);
                },
                span { class: "bar" }
                span { class: "bar" }
                span { class: "bar" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home", top: 0.0, height: 600.0 },
            SectionBounds { id: "about", top: 600.0, height: 500.0 },
            SectionBounds { id: "contact", top: 1500.0, height: 400.0 },
        ]
    }

    #[test]
    fn navbar_styles_follow_direction_and_depth() {
        let mut nav = NavScroll::default();
        nav.update(50.0);
        assert!(!nav.scrolled());
        assert!(!nav.hidden());

        nav.update(150.0);
        assert!(nav.scrolled());
        assert!(!nav.hidden());

        nav.update(250.0);
        assert!(nav.hidden());
        assert_eq!(nav.transform(), "translateY(-100%)");

        nav.update(240.0);
        assert!(!nav.hidden());
        assert_eq!(nav.transform(), "translateY(0)");
    }

    #[test]
    fn probe_sits_two_hundred_pixels_down() {
        let sections = layout();
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(399.0, &sections), Some("home"));
        assert_eq!(active_section(400.0, &sections), Some("about"));
        assert_eq!(active_section(1300.0, &sections), Some("contact"));
    }

    #[test]
    fn logo_scrolls_to_a_listed_section() {
        assert!(crate::content::NAV_SECTIONS
            .iter()
            .any(|section| section.id == HOME_SECTION));
    }

    #[test]
    fn gaps_match_nothing() {
        assert_eq!(active_section(950.0, &layout()), None);
        assert_eq!(active_section(5000.0, &layout()), None);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let sections = vec![
            SectionBounds { id: "outer", top: 0.0, height: 1000.0 },
            SectionBounds { id: "inner", top: 100.0, height: 200.0 },
        ];
        assert_eq!(active_section(0.0, &sections), Some("outer"));
    }
}
