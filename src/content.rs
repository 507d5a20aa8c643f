//! Static page content. Numeric animation inputs are kept as the raw text a
//! page template would carry and go through `params` when a component mounts.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub count: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub width: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexSkill {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarAxis {
    pub label: &'static str,
    pub angle: &'static str,
    pub level: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioFilterOption {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { id: "home", label: "Home" },
    NavSection { id: "about", label: "About" },
    NavSection { id: "skills", label: "Skills" },
    NavSection { id: "portfolio", label: "Portfolio" },
    NavSection { id: "testimonials", label: "Testimonials" },
    NavSection { id: "contact", label: "Contact" },
];

pub const TYPING_PHRASES: &[&str] = &[
    "Full Stack Developer",
    "Social Media Manager",
    "Digital Strategist",
    "Web Developer",
    "Content Creator",
    "UI/UX Designer",
];

pub const STATS: &[Stat] = &[
    Stat { label: "Projects Completed", count: "150" },
    Stat { label: "Happy Clients", count: "50" },
    Stat { label: "Years Experience", count: "5" },
    Stat { label: "Campaigns Managed", count: "120" },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "HTML & CSS", width: "95" },
    Skill { name: "JavaScript", width: "88" },
    Skill { name: "React", width: "82" },
    Skill { name: "Node.js", width: "78" },
    Skill { name: "Social Media Strategy", width: "92" },
];

pub const MODERN_SKILLS: &[Skill] = &[
    Skill { name: "Content Marketing", width: "90" },
    Skill { name: "SEO", width: "85" },
    Skill { name: "Analytics", width: "80" },
    Skill { name: "Brand Design", width: "75" },
];

pub const HEX_SKILLS: &[HexSkill] = &[
    HexSkill { name: "HTML5", icon: "fab fa-html5" },
    HexSkill { name: "CSS3", icon: "fab fa-css3-alt" },
    HexSkill { name: "JavaScript", icon: "fab fa-js" },
    HexSkill { name: "React", icon: "fab fa-react" },
    HexSkill { name: "Node.js", icon: "fab fa-node-js" },
    HexSkill { name: "Git", icon: "fab fa-git-alt" },
];

pub const TOOLS: &[Tool] = &[
    Tool { name: "Figma", icon: "fab fa-figma" },
    Tool { name: "VS Code", icon: "fas fa-code" },
    Tool { name: "Canva", icon: "fas fa-palette" },
    Tool { name: "Google Analytics", icon: "fas fa-chart-line" },
];

pub const RADAR_AXES: &[RadarAxis] = &[
    RadarAxis { label: "Frontend", angle: "0deg", level: "90" },
    RadarAxis { label: "Backend", angle: "72deg", level: "75" },
    RadarAxis { label: "Design", angle: "144deg", level: "80" },
    RadarAxis { label: "Marketing", angle: "216deg", level: "92" },
    RadarAxis { label: "Strategy", angle: "288deg", level: "85" },
];

pub const PORTFOLIO_FILTERS: &[PortfolioFilterOption] = &[
    PortfolioFilterOption { label: "All", value: "all" },
    PortfolioFilterOption { label: "Web", value: "web" },
    PortfolioFilterOption { label: "Design", value: "design" },
    PortfolioFilterOption { label: "Social", value: "social" },
];

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        title: "E-commerce Storefront",
        category: "web",
        summary: "Responsive shop with cart and checkout flow.",
    },
    PortfolioItem {
        title: "Brand Identity Kit",
        category: "design",
        summary: "Logo, palette and typography system for a cafe chain.",
    },
    PortfolioItem {
        title: "Launch Campaign",
        category: "social",
        summary: "Six-week cross-platform campaign for a product launch.",
    },
    PortfolioItem {
        title: "Agency Landing Page",
        category: "web",
        summary: "Marketing site with animated sections and a contact funnel.",
    },
    PortfolioItem {
        title: "Event Poster Series",
        category: "design",
        summary: "Print and social variants for a music festival.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Delivered our new site ahead of schedule and the engagement numbers doubled.",
        author: "Sarah Johnson",
        role: "Founder, Bloom Studio",
    },
    Testimonial {
        quote: "Our social channels finally have a voice. Clear strategy, clear results.",
        author: "Michael Chen",
        role: "Marketing Lead, Northwind",
    },
    Testimonial {
        quote: "Thoughtful, responsive and genuinely creative. Would hire again.",
        author: "Amara Okafor",
        role: "Product Manager, Lumen",
    },
];

pub const SERVICES: &[ServiceOption] = &[
    ServiceOption { value: "web-development", label: "Web Development" },
    ServiceOption { value: "social-media", label: "Social Media Management" },
    ServiceOption { value: "design", label: "UI/UX Design" },
    ServiceOption { value: "strategy", label: "Digital Strategy" },
];

pub const PARALLAX_SHAPES: usize = 4;
