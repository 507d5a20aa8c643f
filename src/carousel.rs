use dioxus::prelude::*;

use crate::content::Testimonial;
use crate::timing::sleep_ms;

pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;
/// Minimum horizontal travel, exclusive, for a touch gesture to count.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Testimonial slider position. `current` stays in `[0, total)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    total: usize,
}

impl Carousel {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + 1) % self.total;
    }

    pub fn prev(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + self.total - 1) % self.total;
    }

    /// Jumps to `index`; out-of-range indices are ignored.
    pub fn goto(&mut self, index: usize) {
        if index < self.total {
            self.current = index;
        }
    }

    pub fn track_transform(&self) -> String {
        let offset = self.current as i64 * -100;
        format!("translateX({offset}%)")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
}

/// Start position of an in-flight touch gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn dragging(&self) -> bool {
        self.start_x.is_some()
    }

    /// Ends the gesture. A leftward move (start right of end) advances.
    pub fn end(&mut self, x: f64) -> Option<Swipe> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        if diff > 0.0 {
            Some(Swipe::Next)
        } else {
            Some(Swipe::Prev)
        }
    }
}

pub fn apply_swipe(carousel: &mut Carousel, swipe: Swipe) {
    match swipe {
        Swipe::Next => carousel.next(),
        Swipe::Prev => carousel.prev(),
    }
}

/// Slider over `testimonials`. The position lives in `carousel`, owned by
/// the page so keyboard shortcuts can drive it too.
#[component]
pub fn TestimonialCarousel(testimonials: Vec<Testimonial>, carousel: Signal<Carousel>) -> Element {
    let mut carousel = carousel;
    let mut swipe = use_signal(SwipeTracker::default);

    use_future(move || async move {
        if carousel.peek().total() == 0 {
            return;
        }
        tracing::debug!("carousel: autoplay start");
        loop {
            sleep_ms(AUTOPLAY_INTERVAL_MS).await;
            carousel.write().next();
        }
    });

    if testimonials.is_empty() {
        return rsx! {};
    }

    let state = carousel();
    let transform = state.track_transform();

    rsx! {
        div { class: "testimonial-slider",
            div {
                id: "testimonial-track",
                class: "testimonial-track",
                style: "transform: {transform};",
                ontouchstart: move |event| {
                    let start = event.data().touches().first().map(|touch| touch.client_coordinates().x);
                    if let Some(x) = start {
                        swipe.write().start(x);
                    }
                },
                ontouchmove: move |event| {
                    if swipe.peek().dragging() {
                        event.prevent_default();
                    }
                },
                ontouchend: move |event| {
                    let end = event.data().touches_changed().first().map(|touch| touch.client_coordinates().x);
                    let Some(x) = end else {
                        return;
                    };
                    let gesture = swipe.write().end(x);
                    if let Some(direction) = gesture {
                        tracing::debug!(?direction, "carousel: swipe");
                        apply_swipe(&mut carousel.write(), direction);
                    }
                },
                for testimonial in testimonials.iter() {
                    div { key: "{testimonial.author}", class: "testimonial-slide",
                        blockquote { class: "testimonial-quote", "“{testimonial.quote}”" }
                        p { class: "testimonial-author", "{testimonial.author}" }
                        p { class: "testimonial-role", "{testimonial.role}" }
                    }
                }
            }
            div { class: "testimonial-controls",
                button {
                    id: "prev-testimonial",
                    r#type: "button",
                    class: "testimonial-btn",
                    aria_label: "Previous testimonial",
                    onclick: move |_| carousel.write().prev(),
                    i { class: "fas fa-chevron-left" }
                }
                div { class: "testimonial-dots",
                    for index in 0..state.total() {
                        button {
                            key: "{index}",
                            r#type: "button",
                            class: if index == state.current() { "dot active" } else { "dot" },
                            aria_label: format!("Show testimonial {}", index + 1),
                            onclick: move |_| carousel.write().goto(index),
                        }
                    }
                }
                button {
                    id: "next-testimonial",
                    r#type: "button",
                    class: "testimonial-btn",
                    aria_label: "Next testimonial",
                    onclick: move |_| carousel.write().next(),
                    i { class: "fas fa-chevron-right" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn single_slide_stays_put() {
        let mut carousel = Carousel::new(1);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.prev();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn goto_ignores_indices_without_a_dot() {
        let mut carousel = Carousel::new(3);
        carousel.goto(2);
        assert_eq!(carousel.current(), 2);
        carousel.goto(3);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn track_offset_follows_index() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.track_transform(), "translateX(0%)");
        carousel.goto(2);
        assert_eq!(carousel.track_transform(), "translateX(-200%)");
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn swipe_boundary_is_strict() {
        let mut tracker = SwipeTracker::default();
        tracker.start(200.0);
        assert_eq!(tracker.end(149.0), Some(Swipe::Next));

        tracker.start(200.0);
        assert_eq!(tracker.end(150.0), None);

        tracker.start(100.0);
        assert_eq!(tracker.end(151.0), Some(Swipe::Prev));

        tracker.start(100.0);
        assert_eq!(tracker.end(150.0), None);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert!(!tracker.dragging());
        assert_eq!(tracker.end(0.0), None);
    }

    #[test]
    fn swipe_moves_the_carousel() {
        let mut carousel = Carousel::new(4);
        apply_swipe(&mut carousel, Swipe::Next);
        assert_eq!(carousel.current(), 1);
        apply_swipe(&mut carousel, Swipe::Prev);
        apply_swipe(&mut carousel, Swipe::Prev);
        assert_eq!(carousel.current(), 3);
    }

    proptest! {
        #[test]
        fn next_and_prev_are_modular(total in 1usize..50, start in 0usize..50) {
            let start = start % total;
            let mut carousel = Carousel::new(total);
            carousel.goto(start);

            let mut forward = carousel;
            forward.next();
            prop_assert_eq!(forward.current(), (start + 1) % total);

            let mut backward = carousel;
            backward.prev();
            prop_assert_eq!(backward.current(), (start + total - 1) % total);
        }

        #[test]
        fn index_never_leaves_range(total in 1usize..20, moves in proptest::collection::vec(0u8..3, 0..100)) {
            let mut carousel = Carousel::new(total);
            for step in moves {
                match step {
                    0 => carousel.next(),
                    1 => carousel.prev(),
                    _ => carousel.goto(step as usize),
                }
                prop_assert!(carousel.current() < total);
            }
        }
    }
}
