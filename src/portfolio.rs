use dioxus::prelude::*;

use crate::content::{PortfolioFilterOption, PortfolioItem};
use crate::timing::sleep_ms;

pub const ALL: &str = "all";
pub const ENTRANCE_ANIMATION: &str = "fadeInUp 0.6s ease forwards";
pub const ENTRANCE_CLEAR_MS: u32 = 600;

/// Entrance animation flag for the grid. Each filter click starts a new
/// generation; only the latest click's timer clears the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Entrance {
    generation: u64,
    animating: bool,
}

impl Entrance {
    pub fn animating(&self) -> bool {
        self.animating
    }

    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.animating = true;
        self.generation
    }

    /// Called `ENTRANCE_CLEAR_MS` after `start` returned `generation`.
    pub fn clear(&mut self, generation: u64) {
        if self.generation == generation {
            self.animating = false;
        }
    }
}

pub fn is_shown(filter: &str, category: &str) -> bool {
    filter == ALL || filter == category
}

/// Visibility of every item under `filter`, in item order.
pub fn visibility<'a>(filter: &str, categories: impl IntoIterator<Item = &'a str>) -> Vec<bool> {
    categories
        .into_iter()
        .map(|category| is_shown(filter, category))
        .collect()
}

#[component]
pub fn PortfolioGrid(filters: Vec<PortfolioFilterOption>, items: Vec<PortfolioItem>) -> Element {
    let mut active = use_signal(|| ALL.to_string());
    let mut entrance = use_signal(Entrance::default);

    let animating = entrance().animating();
    let shown = visibility(&active(), items.iter().map(|item| item.category));
    let cards: Vec<(PortfolioItem, String, String)> = items
        .iter()
        .zip(shown)
        .map(|(item, visible)| {
            let class = if visible {
                format!("portfolio-item {}", item.category)
            } else {
                format!("portfolio-item {} hide", item.category)
            };
            let style = if visible && animating {
                format!("animation: {ENTRANCE_ANIMATION};")
            } else {
                String::new()
            };
            (*item, class, style)
        })
        .collect();
    let current = active();

    rsx! {
        div { class: "portfolio-filters",
            for option in filters {
                button {
                    key: "{option.value}",
                    r#type: "button",
                    class: if current == option.value { "filter-btn active" } else { "filter-btn" },
                    "data-filter": option.value,
                    onclick: move |_| {
                        tracing::debug!(filter = option.value, "portfolio: filter");
                        active.set(option.value.to_string());
                        let generation = entrance.write().start();
                        spawn(async move {
                            sleep_ms(ENTRANCE_CLEAR_MS).await;
                            entrance.write().clear(generation);
                        });
                    },
                    "{option.label}"
                }
            }
        }
        div { class: "portfolio-grid",
            for (item, class, style) in cards {
                div { key: "{item.title}", class: "{class}", style: "{style}",
                    div { class: "portfolio-content",
                        h3 { "{item.title}" }
                        p { "{item.summary}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn category_filter_shows_matching_items_only() {
        assert_eq!(
            visibility("web", ["web", "design", "web"]),
            vec![true, false, true]
        );
    }

    #[test]
    fn all_shows_everything() {
        assert_eq!(
            visibility(ALL, ["web", "design", "web"]),
            vec![true, true, true]
        );
    }

    #[test]
    fn entrance_clears_after_its_timer() {
        let mut entrance = Entrance::default();
        assert!(!entrance.animating());
        let generation = entrance.start();
        assert!(entrance.animating());
        entrance.clear(generation);
        assert!(!entrance.animating());
    }

    #[test]
    fn earlier_click_timer_does_not_cut_a_newer_entrance() {
        let mut entrance = Entrance::default();
        let first = entrance.start();
        let second = entrance.start();
        entrance.clear(first);
        assert!(entrance.animating());
        entrance.clear(second);
        assert!(!entrance.animating());
    }

    #[test]
    fn unknown_filter_hides_everything() {
        assert_eq!(visibility("video", ["web", "design"]), vec![false, false]);
    }
}
