use dioxus::prelude::*;

use crate::content::{HexSkill, Skill, Tool};
use crate::hooks::use_reveal;
use crate::params::parse_percent;
use crate::reveal::{OneShot, VisibilityOptions};
use crate::timing::{random_unit, sleep_ms};

pub const LEGACY_MAX_DELAY_MS: f64 = 1000.0;
pub const MODERN_STAGGER_MS: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarVariant {
    /// Independent random delay per bar.
    Legacy,
    /// Bars fill one after another.
    Modern,
}

impl BarVariant {
    fn class(self) -> &'static str {
        match self {
            BarVariant::Legacy => "skill-progress",
            BarVariant::Modern => "skill-progress-modern-fill",
        }
    }
}

/// Delay before bar `index` starts filling; `random` is a sample in `[0, 1)`.
pub fn bar_delay_ms(variant: BarVariant, index: usize, random: f64) -> u32 {
    match variant {
        BarVariant::Legacy => (random.clamp(0.0, 1.0) * LEGACY_MAX_DELAY_MS) as u32,
        BarVariant::Modern => (index as u32).saturating_mul(MODERN_STAGGER_MS),
    }
}

pub fn width_style(percent: Option<u8>) -> String {
    match percent {
        Some(percent) => format!("width: {percent}%;"),
        None => "width: 0%;".to_string(),
    }
}

pub fn hexagon_transform(hovered: bool) -> &'static str {
    if hovered {
        "scale(1.1) rotate(5deg)"
    } else {
        "scale(1) rotate(0deg)"
    }
}

pub fn tool_card_transform(hovered: bool) -> &'static str {
    if hovered {
        "scale(1.05) translateY(-4px)"
    } else {
        "scale(1) translateY(0)"
    }
}

#[component]
fn SkillBar(
    skill: Skill,
    index: usize,
    variant: BarVariant,
    started: Signal<bool>,
) -> Element {
    let mut width = use_signal(|| None::<u8>);
    let mut guard = use_signal(OneShot::default);

    use_effect(move || {
        if !started() || !guard.write().fire() {
            return;
        }
        let Some(percent) = parse_percent(skill.width) else {
            return;
        };
        let delay = bar_delay_ms(variant, index, random_unit());
        spawn(async move {
            sleep_ms(delay).await;
            width.set(Some(percent));
        });
    });

    let animated = if width().is_some() { " animated" } else { "" };
    rsx! {
        div { class: "skill-item",
            div { class: "skill-info",
                span { class: "skill-name", "{skill.name}" }
                span { class: "skill-percent", "{skill.width}%" }
            }
            div { class: "skill-bar",
                div {
                    class: "{variant.class()}{animated}",
                    "data-width": skill.width,
                    style: width_style(width()),
                }
            }
        }
    }
}

#[component]
pub fn SkillBars(skills: Vec<Skill>, variant: BarVariant) -> Element {
    let reveal = use_reveal(VisibilityOptions::ANY);
    let started = reveal.signal();
    let list_class = match variant {
        BarVariant::Legacy => "skills-list",
        BarVariant::Modern => "skills-list modern",
    };
    rsx! {
        div { class: list_class, onmounted: move |event| reveal.mount(event),
            for (index, skill) in skills.into_iter().enumerate() {
                SkillBar { key: "{skill.name}", skill, index, variant, started }
            }
        }
    }
}

#[component]
pub fn SkillHexagons(skills: Vec<HexSkill>) -> Element {
    rsx! {
        div { class: "skill-hexagons",
            for skill in skills {
                SkillHexagon { key: "{skill.name}", skill }
            }
        }
    }
}

#[component]
fn SkillHexagon(skill: HexSkill) -> Element {
    let mut hovered = use_signal(|| false);
    rsx! {
        div {
            class: "skill-hexagon",
            style: "transform: {hexagon_transform(hovered())};",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            i { class: skill.icon }
            span { "{skill.name}" }
        }
    }
}

#[component]
pub fn ToolCards(tools: Vec<Tool>) -> Element {
    rsx! {
        div { class: "tool-cards",
            for tool in tools {
                ToolCard { key: "{tool.name}", tool }
            }
        }
    }
}

#[component]
fn ToolCard(tool: Tool) -> Element {
    let mut hovered = use_signal(|| false);
    rsx! {
        div {
            class: "tool-card",
            style: "transform: {tool_card_transform(hovered())};",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            i { class: tool.icon }
            span { "{tool.name}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn modern_bars_stagger_by_index() {
        let delays: Vec<u32> = (0..4)
            .map(|index| bar_delay_ms(BarVariant::Modern, index, 0.9))
            .collect();
        assert_eq!(delays, vec![0, 200, 400, 600]);
    }

    #[test]
    fn legacy_bars_use_random_delay_under_a_second() {
        assert_eq!(bar_delay_ms(BarVariant::Legacy, 3, 0.0), 0);
        assert_eq!(bar_delay_ms(BarVariant::Legacy, 0, 0.25), 250);
        assert!(bar_delay_ms(BarVariant::Legacy, 0, 0.9999) < 1000);
    }

    #[test]
    fn width_starts_empty_and_is_written_once() {
        assert_eq!(width_style(None), "width: 0%;");
        assert_eq!(width_style(Some(85)), "width: 85%;");
    }

    #[test]
    fn hover_transforms_return_to_rest() {
        assert_eq!(hexagon_transform(true), "scale(1.1) rotate(5deg)");
        assert_eq!(hexagon_transform(false), "scale(1) rotate(0deg)");
        assert_eq!(tool_card_transform(true), "scale(1.05) translateY(-4px)");
        assert_eq!(tool_card_transform(false), "scale(1) translateY(0)");
    }
}
