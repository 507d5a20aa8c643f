use dioxus::prelude::*;

use crate::carousel::{Carousel, TestimonialCarousel};
use crate::contact::ContactSection;
use crate::content::{
    HEX_SKILLS, MODERN_SKILLS, NAV_SECTIONS, PARALLAX_SHAPES, PORTFOLIO_FILTERS, PORTFOLIO_ITEMS,
    RADAR_AXES, SERVICES, SKILLS, STATS, TESTIMONIALS, TOOLS, TYPING_PHRASES,
};
use crate::counter::StatCounter;
use crate::diagnostics::use_fault_reporting;
use crate::effects::{use_keyboard_shortcuts, BackToTop, GetInTouch, ParallaxShapes};
use crate::hooks::use_reveal;
use crate::navigation::Navbar;
use crate::portfolio::PortfolioGrid;
use crate::radar::RadarChart;
use crate::reveal::{RevealOnScroll, RevealStyle, VisibilityOptions};
use crate::skills::{BarVariant, SkillBars, SkillHexagons, ToolCards};
use crate::typing::TypingText;

const CONTACT_FORM_ID: &str = "contact-form";

/// The whole one-page portfolio. Owns the state that more than one behavior
/// drives: the mobile menu flag and the testimonial position.
#[component]
pub fn PortfolioPage() -> Element {
    let menu_open = use_signal(|| false);
    let carousel = use_signal(|| Carousel::new(TESTIMONIALS.len()));
    let stats = use_reveal(VisibilityOptions::ANY);

    use_keyboard_shortcuts(menu_open, carousel);
    use_fault_reporting();

    rsx! {
        Navbar { sections: NAV_SECTIONS.to_vec(), menu_open }
        main { class: "page",
            section { id: "home", class: "hero",
                ParallaxShapes { count: PARALLAX_SHAPES }
                div { class: "hero-content",
                    h1 { class: "hero-title", "Hi, I'm Alex" }
                    p { class: "hero-subtitle",
                        "I'm a "
                        TypingText { phrases: TYPING_PHRASES.to_vec() }
                    }
                    GetInTouch { label: "Get in touch", target: CONTACT_FORM_ID }
                }
            }
            section { id: "about", class: "about",
                RevealOnScroll { style: RevealStyle::SlideInLeft, class: Some("about-text".to_string()),
                    h2 { class: "section-title", "About Me" }
                    p {
                        "Developer and social media strategist building sites and campaigns "
                        "that people actually use."
                    }
                    GetInTouch { label: "Work with me", target: CONTACT_FORM_ID }
                }
                div { class: "stats", onmounted: move |event| stats.mount(event),
                    for stat in STATS.iter() {
                        StatCounter { key: "{stat.label}", label: stat.label, count: stat.count, started: stats.signal() }
                    }
                }
            }
            section { id: "skills", class: "skills",
                RevealOnScroll { style: RevealStyle::FadeIn,
                    h2 { class: "section-title", "Skills" }
                }
                div { class: "skills-grid",
                    RevealOnScroll { style: RevealStyle::SlideInLeft,
                        SkillBars { skills: SKILLS.to_vec(), variant: BarVariant::Legacy }
                    }
                    RevealOnScroll { style: RevealStyle::SlideInRight,
                        SkillBars { skills: MODERN_SKILLS.to_vec(), variant: BarVariant::Modern }
                    }
                }
                RevealOnScroll { style: RevealStyle::ZoomIn,
                    SkillHexagons { skills: HEX_SKILLS.to_vec() }
                }
                RevealOnScroll { style: RevealStyle::Aos,
                    ToolCards { tools: TOOLS.to_vec() }
                }
                RevealOnScroll { style: RevealStyle::RotateIn,
                    RadarChart { axes: RADAR_AXES.to_vec() }
                }
            }
            section { id: "portfolio", class: "portfolio",
                RevealOnScroll { style: RevealStyle::FadeIn,
                    h2 { class: "section-title", "Portfolio" }
                }
                PortfolioGrid { filters: PORTFOLIO_FILTERS.to_vec(), items: PORTFOLIO_ITEMS.to_vec() }
            }
            section { id: "testimonials", class: "testimonials",
                RevealOnScroll { style: RevealStyle::Aos,
                    h2 { class: "section-title", "What Clients Say" }
                }
                TestimonialCarousel { testimonials: TESTIMONIALS.to_vec(), carousel }
            }
            section { id: "contact", class: "contact",
                RevealOnScroll { style: RevealStyle::FadeIn,
                    h2 { class: "section-title", "Get In Touch" }
                }
                ContactSection { services: SERVICES.to_vec() }
            }
        }
        BackToTop {}
    }
}
