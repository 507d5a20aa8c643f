use dioxus::prelude::*;

use crate::params::parse_count;
use crate::reveal::OneShot;
use crate::timing::sleep_ms;

pub const DURATION_MS: u32 = 2000;
pub const FRAME_MS: u32 = 16;
/// Targets at or above this render with a trailing `+`.
pub const PLUS_SUFFIX_FROM: u32 = 100;

pub fn format_count(value: u32, target: u32) -> String {
    if target >= PLUS_SUFFIX_FROM {
        format!("{value}+")
    } else {
        value.to_string()
    }
}

/// Frames of a 0 → `target` count-up. Intermediate frames show the floored
/// running value; the last frame is always exactly `target`.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: u32,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            increment: f64::from(target) / (f64::from(DURATION_MS) / f64::from(FRAME_MS)),
            current: 0.0,
            finished: false,
        }
    }
}

impl Iterator for CountUp {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current < f64::from(self.target) {
            return Some(format_count(self.current.floor() as u32, self.target));
        }
        self.finished = true;
        Some(format_count(self.target, self.target))
    }
}

/// Counter that starts when `started` flips on. The stats block owns the
/// visibility trigger so every counter in it starts together.
#[component]
pub fn StatCounter(label: &'static str, count: &'static str, started: Signal<bool>) -> Element {
    let mut text = use_signal(|| "0".to_string());
    let mut guard = use_signal(OneShot::default);

    use_effect(move || {
        if !started() || !guard.write().fire() {
            return;
        }
        let Some(target) = parse_count(count) else {
            return;
        };
        tracing::debug!(target, "counter: start");
        spawn(async move {
            for frame in CountUp::new(target) {
                text.set(frame);
                sleep_ms(FRAME_MS).await;
            }
        });
    });

    rsx! {
        div { class: "stat",
            span { class: "stat-number", "data-count": count, "{text}" }
            span { class: "stat-label", "{label}" }
        }
    }
}
