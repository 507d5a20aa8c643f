use dioxus::prelude::*;

use crate::content::RadarAxis;
use crate::hooks::use_reveal;
use crate::params::{parse_angle, parse_percent};
use crate::reveal::{OneShot, VisibilityOptions};
use crate::timing::sleep_ms;

pub const POINT_STAGGER_MS: u32 = 200;
pub const AREA_FADE_DELAY_MS: u32 = 800;
pub const AREA_OPACITY: f64 = 0.3;

pub fn point_transform(angle_deg: f64, revealed: bool) -> String {
    let scale = if revealed { 1 } else { 0 };
    format!("translate(-50%, -50%) rotate({angle_deg}deg) scale({scale})")
}

pub fn marker_transform(hovered: bool) -> &'static str {
    if hovered {
        "translateY(-180px) scale(1.5)"
    } else {
        "translateY(-180px) scale(1)"
    }
}

pub fn label_transform(hovered: bool) -> &'static str {
    if hovered {
        "translateX(-50%) rotate(calc(-1 * var(--angle))) scale(1.1)"
    } else {
        "translateX(-50%) rotate(calc(-1 * var(--angle))) scale(1)"
    }
}

/// CSS `clip-path` polygon for the filled area. Each axis contributes one
/// vertex at `level`% of the radius along its angle, measured clockwise
/// from twelve o'clock.
pub fn area_polygon(axes: &[(f64, u8)]) -> String {
    let vertices: Vec<String> = axes
        .iter()
        .map(|(angle_deg, level)| {
            let radians = angle_deg.to_radians();
            let radius = 50.0 * f64::from(*level) / 100.0;
            let x = 50.0 + radius * radians.sin();
            let y = 50.0 - radius * radians.cos();
            format!("{x:.2}% {y:.2}%")
        })
        .collect();
    format!("polygon({})", vertices.join(", "))
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct ParsedAxis {
    label: &'static str,
    angle_deg: f64,
    level: u8,
}

fn parse_axes(axes: &[RadarAxis]) -> Vec<ParsedAxis> {
    axes.iter()
        .map(|axis| ParsedAxis {
            label: axis.label,
            angle_deg: parse_angle(axis.angle),
            level: parse_percent(axis.level).unwrap_or(0),
        })
        .collect()
}

#[component]
pub fn RadarChart(axes: Vec<RadarAxis>) -> Element {
    let parsed = use_hook(|| parse_axes(&axes));
    let reveal = use_reveal(VisibilityOptions::RADAR);
    let mut revealed = use_signal(|| vec![false; parsed.len()]);
    let mut area_visible = use_signal(|| false);
    let mut guard = use_signal(OneShot::default);

    use_effect(move || {
        if !reveal.visible() || !guard.write().fire() {
            return;
        }
        let count = revealed.peek().len();
        tracing::debug!(points = count, "radar: reveal");
        for index in 0..count {
            spawn(async move {
                sleep_ms(index as u32 * POINT_STAGGER_MS).await;
                if let Some(point) = revealed.write().get_mut(index) {
                    *point = true;
                }
            });
        }
        spawn(async move {
            sleep_ms(AREA_FADE_DELAY_MS).await;
            area_visible.set(true);
        });
    });

    if parsed.is_empty() {
        return rsx! {};
    }

    let polygon = area_polygon(
        &parsed
            .iter()
            .map(|axis| (axis.angle_deg, axis.level))
            .collect::<Vec<_>>(),
    );
    let area_opacity = if area_visible() { AREA_OPACITY } else { 0.0 };

    rsx! {
        div { id: "radar-chart", class: "radar-chart", onmounted: move |event| reveal.mount(event),
            div {
                id: "radar-area",
                class: "radar-area",
                style: "opacity: {area_opacity}; clip-path: {polygon};",
            }
            for (index, axis) in parsed.iter().copied().enumerate() {
                RadarPoint {
                    key: "{axis.label}",
                    label: axis.label,
                    angle_deg: axis.angle_deg,
                    level: axis.level,
                    revealed: revealed().get(index).copied().unwrap_or(false),
                }
            }
        }
    }
}

#[component]
fn RadarPoint(label: &'static str, angle_deg: f64, level: u8, revealed: bool) -> Element {
    let mut hovered = use_signal(|| false);
    let opacity = if revealed { 1 } else { 0 };
    rsx! {
        div {
            class: "radar-point",
            style: "--angle: {angle_deg}deg; opacity: {opacity}; transform: {point_transform(angle_deg, revealed)};",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            span { class: "point-marker", style: "transform: {marker_transform(hovered())};" }
            span { class: "point-label", style: "transform: {label_transform(hovered())};",
                "{label} {level}%"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn points_start_collapsed_and_scale_in() {
        assert_eq!(
            point_transform(72.0, false),
            "translate(-50%, -50%) rotate(72deg) scale(0)"
        );
        assert_eq!(
            point_transform(72.0, true),
            "translate(-50%, -50%) rotate(72deg) scale(1)"
        );
    }

    #[test]
    fn polygon_places_vertices_by_angle_and_level() {
        assert_eq!(
            area_polygon(&[(0.0, 100), (90.0, 50), (180.0, 0)]),
            "polygon(50.00% 0.00%, 75.00% 50.00%, 50.00% 50.00%)"
        );
    }

    #[test]
    fn malformed_axis_values_fall_back() {
        let parsed = parse_axes(&[RadarAxis {
            label: "Ops",
            angle: "sideways",
            level: "plenty",
        }]);
        assert_eq!(
            parsed,
            vec![ParsedAxis {
                label: "Ops",
                angle_deg: 0.0,
                level: 0
            }]
        );
    }

    #[test]
    fn hover_transforms() {
        assert_eq!(marker_transform(true), "translateY(-180px) scale(1.5)");
        assert_eq!(
            label_transform(false),
            "translateX(-50%) rotate(calc(-1 * var(--angle))) scale(1)"
        );
    }
}
