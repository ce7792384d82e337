//! Static showcase content.
//!
//! Immutable records loaded once at startup: projects for the carousel,
//! service / differential / testimonial cards, about-section stats and
//! skills, contact channels, and the code snippets the ambient field draws.
//! Colors are `[r, g, b]` so the lib stays free of egui types.

/// Accent cyan used across the page
pub const ACCENT: [u8; 3] = [0x38, 0xBD, 0xF8];
/// Deep blue used for gradients
pub const DEEP_BLUE: [u8; 3] = [0x1E, 0x3A, 0x8A];
/// Page background
pub const BACKGROUND: [u8; 3] = [0x0C, 0x10, 0x20];

/// Labels the ambient particle field draws from.
pub const CODE_SNIPPETS: &[&str] = &[
    "const portfolio = () => {",
    "  return <Amazing />",
    "}",
    "function createMagic() {",
    "  const design = \"3D\"",
    "  return design",
    "}",
    "if (performance > 95) {",
    "  deploy();",
    "}",
    "const speed = \"blazing\"",
    "render(<Portfolio />)",
    "// WordPress Expert",
    "// Elementor Pro",
    "export default Dev",
    "animation: true,",
    "responsive: true,",
    "optimized: true,",
    "<Component />",
    "useState()",
    "useEffect()",
    "className=\"...\"",
    "transform: 3D",
];

// ── Projects ──

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectMetrics {
    /// PageSpeed score
    pub performance: &'static str,
    /// Conversion uplift
    pub conversion: &'static str,
    /// Load time
    pub loading: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub metrics: ProjectMetrics,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Premium E-commerce",
        category: "WooCommerce",
        description: "High-performance storefront with full payment integration, coupon engine and a custom admin dashboard.",
        image: "https://images.unsplash.com/photo-1757301714935-c8127a21abc6?w=1200",
        tech: &["WordPress", "WooCommerce", "Elementor", "Custom CSS"],
        metrics: ProjectMetrics { performance: "95", conversion: "+180%", loading: "1.2s" },
    },
    Project {
        id: 2,
        title: "Tech Corporate Site",
        category: "WordPress",
        description: "Modern company website for a technology firm, smooth animations and premium responsive design.",
        image: "https://images.unsplash.com/photo-1676792519027-7c42006d7b4a?w=1200",
        tech: &["WordPress", "Elementor Pro", "GSAP", "Custom Plugins"],
        metrics: ProjectMetrics { performance: "98", conversion: "+150%", loading: "0.9s" },
    },
    Project {
        id: 3,
        title: "App Landing Page",
        category: "Design",
        description: "Conversion-focused landing page for a mobile app, wired into analytics and marketing tooling.",
        image: "https://images.unsplash.com/photo-1609921212029-bb5a28e60960?w=1200",
        tech: &["Elementor", "Custom Code", "Animations", "SEO"],
        metrics: ProjectMetrics { performance: "96", conversion: "+220%", loading: "1.0s" },
    },
    Project {
        id: 4,
        title: "News Portal",
        category: "WordPress",
        description: "SEO-tuned content portal with an advanced category system and a members area.",
        image: "https://images.unsplash.com/photo-1678341859828-bfb1a2bd527a?w=1200",
        tech: &["WordPress", "Custom Theme", "ACF", "Membership"],
        metrics: ProjectMetrics { performance: "92", conversion: "+130%", loading: "1.4s" },
    },
    Project {
        id: 5,
        title: "Analytics Dashboard",
        category: "UI/UX",
        description: "Full admin interface with interactive charts and real-time data visualisation.",
        image: "https://images.unsplash.com/photo-1643116774075-acc00caa9a7b?w=1200",
        tech: &["React", "WordPress API", "Chart.js", "REST API"],
        metrics: ProjectMetrics { performance: "94", conversion: "+165%", loading: "1.1s" },
    },
    Project {
        id: 6,
        title: "Creative Agency",
        category: "Portfolio",
        description: "Portfolio site for a creative agency with an interactive gallery and cinematic motion.",
        image: "https://images.unsplash.com/photo-1603201667246-3c45012c6d17?w=1200",
        tech: &["Elementor", "Custom Animations", "WebGL", "GSAP"],
        metrics: ProjectMetrics { performance: "97", conversion: "+200%", loading: "0.8s" },
    },
];

// ── Cards ──

#[derive(Debug, Clone, PartialEq)]
pub struct Differential {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: [u8; 3],
}

pub const DIFFERENTIALS: &[Differential] = &[
    Differential {
        glyph: "\u{26A1}",
        title: "Performance",
        description: "Ultra-fast loading and spotless Core Web Vitals",
        color: [0xFF, 0xD7, 0x00],
    },
    Differential {
        glyph: "\u{1F3A8}",
        title: "Premium Design",
        description: "Modern, intuitive interfaces that turn visitors into clients",
        color: [0xFF, 0x6B, 0x9D],
    },
    Differential {
        glyph: "</>",
        title: "Clean Code",
        description: "Professional development following established practice",
        color: ACCENT,
    },
    Differential {
        glyph: "\u{1F680}",
        title: "Results",
        description: "Work with measurable impact on business growth",
        color: [0xA7, 0x8B, 0xFA],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    /// Gradient start / end
    pub gradient: ([u8; 3], [u8; 3]),
    pub image: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "WordPress & Elementor",
        description: "Corporate and institutional sites on WordPress and Elementor Pro with full editorial flexibility.",
        gradient: ([0x1E, 0x3A, 0x8A], [0x3B, 0x82, 0xF6]),
        image: "https://images.unsplash.com/photo-1678341859828-bfb1a2bd527a?w=800",
    },
    Service {
        title: "WooCommerce Stores",
        description: "Complete, conversion-tuned online stores with payment integrations and advanced management.",
        gradient: ([0x05, 0x96, 0x69], [0x10, 0xB9, 0x81]),
        image: "https://images.unsplash.com/photo-1757301714935-c8127a21abc6?w=800",
    },
    Service {
        title: "Responsive Design",
        description: "Consistent experiences on every device, from phones to high-resolution desktops.",
        gradient: ([0x7C, 0x3A, 0xED], [0xA7, 0x8B, 0xFA]),
        image: "https://images.unsplash.com/photo-1609921212029-bb5a28e60960?w=800",
    },
    Service {
        title: "Performance Tuning",
        description: "Audit and optimisation to reach 90+ on PageSpeed and Core Web Vitals.",
        gradient: ([0xDC, 0x26, 0x26], [0xF8, 0x71, 0x71]),
        image: "https://images.unsplash.com/photo-1643116774075-acc00caa9a7b?w=800",
    },
    Service {
        title: "UI/UX Design",
        description: "Modern, intuitive interfaces focused on conversion and user experience.",
        gradient: ([0xDB, 0x27, 0x77], [0xF4, 0x72, 0xB6]),
        image: "https://images.unsplash.com/photo-1676792519027-7c42006d7b4a?w=800",
    },
    Service {
        title: "SEO & Analytics",
        description: "Search optimisation and analytics tooling to drive growth.",
        gradient: ([0xEA, 0x58, 0x0C], [0xFB, 0x92, 0x3C]),
        image: "https://images.unsplash.com/photo-1603201667246-3c45012c6d17?w=800",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    /// 1..=5 stars
    pub rating: u8,
    pub gradient: ([u8; 3], [u8; 3]),
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Ana Paula Silva",
        role: "CEO, TechStart",
        content: "Exceptional work. The site came out exactly as I pictured it, fast and modern.",
        rating: 5,
        gradient: ([0xA8, 0x55, 0xF7], [0xEC, 0x48, 0x99]),
    },
    Testimonial {
        name: "Carlos Mendes",
        role: "Founder, E-Shop Brasil",
        content: "Conversions went up 150% after the optimisation work. Professional from start to finish.",
        rating: 5,
        gradient: ([0x3B, 0x82, 0xF6], [0x06, 0xB6, 0xD4]),
    },
    Testimonial {
        name: "Mariana Costa",
        role: "Marketing Director, Style Co",
        content: "Attention to detail and respect for deadlines were impressive. It beat our expectations.",
        rating: 5,
        gradient: ([0xF9, 0x73, 0x16], [0xEF, 0x44, 0x44]),
    },
    Testimonial {
        name: "Ricardo Alves",
        role: "CTO, Digital Agency",
        content: "Clean code, a fast site and excellent support.",
        rating: 5,
        gradient: ([0x22, 0xC5, 0x5E], [0x10, 0xB9, 0x81]),
    },
    Testimonial {
        name: "Juliana Santos",
        role: "Owner, Boutique Luxe",
        content: "Elegant design and flawless behaviour. Our customers love the new shopping experience.",
        rating: 5,
        gradient: ([0xEC, 0x48, 0x99], [0xF4, 0x3F, 0x5E]),
    },
    Testimonial {
        name: "Fernando Lima",
        role: "Director, Consultoria Pro",
        content: "Completely changed our online presence. The site carries the credibility we needed.",
        rating: 5,
        gradient: ([0x63, 0x66, 0xF1], [0xA8, 0x55, 0xF7]),
    },
];

// ── About ──

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub color: [u8; 3],
}

pub const STATS: &[Stat] = &[
    Stat { value: "100+", label: "Projects delivered", color: [0xFF, 0xD7, 0x00] },
    Stat { value: "50+", label: "Happy clients", color: ACCENT },
    Stat { value: "98%", label: "Satisfaction rate", color: [0xFF, 0x6B, 0x9D] },
    Stat { value: "7+", label: "Years of experience", color: [0xA7, 0x8B, 0xFA] },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0..=100
    pub level: u8,
    pub color: [u8; 3],
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "WordPress", level: 95, color: ACCENT },
    Skill { name: "Elementor Pro", level: 98, color: [0xFF, 0x6B, 0x9D] },
    Skill { name: "WooCommerce", level: 90, color: [0xA7, 0x8B, 0xFA] },
    Skill { name: "Performance", level: 92, color: [0xFF, 0xD7, 0x00] },
    Skill { name: "UI/UX Design", level: 88, color: ACCENT },
    Skill { name: "SEO", level: 85, color: [0x10, 0xB9, 0x81] },
];

/// About section copy, one entry per paragraph.
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "With more than seven years of experience I build high-performance sites \
     and web applications with WordPress and Elementor Pro.",
    "I turn designs into digital experiences that are functional, elegant and \
     optimized, always with an eye on performance, SEO and conversion.",
    "Every project is a chance to exceed expectations and ship something that \
     makes a real difference to a client's business.",
];

/// Highlight cards under the About section. Same shape as a differential.
pub const HIGHLIGHTS: &[Differential] = &[
    Differential {
        glyph: "\u{26A1}",
        title: "Performance First",
        description: "Sites that load in under two seconds and score 90+ on PageSpeed",
        color: [0xFF, 0xD7, 0x00],
    },
    Differential {
        glyph: "</>",
        title: "Professional Code",
        description: "Built following established practice and industry standards",
        color: ACCENT,
    },
    Differential {
        glyph: "\u{263A}",
        title: "Client Focus",
        description: "Clear communication and dedicated support at every stage",
        color: [0xFF, 0x6B, 0x9D],
    },
];

// ── Contact ──

#[derive(Debug, Clone, PartialEq)]
pub struct ContactChannel {
    pub glyph: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    /// `mailto:`, `tel:` or `#` for non-linkable entries
    pub href: &'static str,
    pub color: [u8; 3],
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        glyph: "\u{2709}",
        label: "Email",
        value: "hello@lumenfolio.dev",
        href: "mailto:hello@lumenfolio.dev",
        color: ACCENT,
    },
    ContactChannel {
        glyph: "\u{260E}",
        label: "Phone",
        value: "+55 (11) 99999-9999",
        href: "tel:+5511999999999",
        color: [0x10, 0xB9, 0x81],
    },
    ContactChannel {
        glyph: "\u{2302}",
        label: "Location",
        value: "São Paulo, Brazil",
        href: "#",
        color: [0xFF, 0x6B, 0x9D],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub color: [u8; 3],
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "#", color: [0xFF, 0xFF, 0xFF] },
    SocialLink { label: "LinkedIn", href: "#", color: [0x0A, 0x66, 0xC2] },
    SocialLink { label: "Twitter", href: "#", color: [0x1D, 0xA1, 0xF2] },
];

impl ContactChannel {
    /// Parsed link target, `None` for placeholder hrefs.
    pub fn link(&self) -> Option<url::Url> {
        url::Url::parse(self.href).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique_and_tagged() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
        assert!(PROJECTS.iter().all(|p| !p.tech.is_empty()));
    }

    #[test]
    fn ratings_and_levels_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn contact_links_parse_except_placeholders() {
        let email = &CONTACT_CHANNELS[0];
        assert_eq!(email.link().map(|u| u.scheme().to_string()), Some("mailto".into()));
        let phone = &CONTACT_CHANNELS[1];
        assert_eq!(phone.link().map(|u| u.scheme().to_string()), Some("tel".into()));
        assert!(CONTACT_CHANNELS[2].link().is_none());
    }
}
