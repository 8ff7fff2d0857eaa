use crate::nav::NavAnchor;

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub demo: Option<&'static str>,
    pub github: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub id: &'static str,
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

/// Label/value pair used by the hero stats, profile card and skills list.
#[derive(Debug, Clone, Copy)]
pub struct Pair {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    Email,
    LinkedIn,
    Instagram,
    Upwork,
    Gumroad,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub label: &'static str,
    pub handle: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavAnchor; 5] = [
    NavAnchor::About,
    NavAnchor::Projects,
    NavAnchor::Services,
    NavAnchor::Testimonials,
    NavAnchor::Contact,
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "atlas",
        title: "Atlas Analytics Dashboard",
        description: "A premium analytics experience with clean hierarchy, live charts, and thoughtful empty states.",
        technologies: &["React", "TypeScript", "Recharts", "Tailwind"],
        demo: Some("#"),
        github: Some("#"),
    },
    Project {
        id: "aurora",
        title: "Aurora Landing Page System",
        description: "A modular marketing site kit built for speed—sections, pricing, FAQs, and conversion-focused layouts.",
        technologies: &["React", "Framer Motion", "shadcn/ui"],
        demo: Some("#"),
        github: Some("#"),
    },
    Project {
        id: "studio",
        title: "Studio Portfolio Builder",
        description: "A portfolio builder concept with drag-and-drop sections, smart typography presets, and export-ready pages.",
        technologies: &["React", "Radix", "Tailwind"],
        demo: Some("#"),
        github: Some("#"),
    },
    Project {
        id: "pulse",
        title: "Pulse Mobile App Concept",
        description: "A crisp mobile UI exploration—motion, micro-interactions, and a neutral, premium palette.",
        technologies: &["UI Design", "Motion", "Prototyping"],
        demo: Some("#"),
        github: None,
    },
    Project {
        id: "craft",
        title: "Craft Commerce UI",
        description: "A storefront UI with product storytelling, clean product cards, and a refined checkout flow.",
        technologies: &["React", "Tailwind", "Accessibility"],
        demo: Some("#"),
        github: Some("#"),
    },
    Project {
        id: "relay",
        title: "Relay Brand Identity",
        description: "A brand system case study—type scale, color interactions, and component-led identity guidelines.",
        technologies: &["Brand", "Design System", "Figma"],
        demo: Some("#"),
        github: None,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "t1",
        quote: "The work feels premium and intentional—every detail supports the story and the conversion flow.",
        name: "Avery Thompson",
        role: "Founder, Studio North",
    },
    Testimonial {
        id: "t2",
        quote: "Fast, responsive, and unbelievably polished. The final UI looked like a product from day one.",
        name: "Mina Park",
        role: "Product Lead, Lumen",
    },
    Testimonial {
        id: "t3",
        quote: "A rare mix of design taste and engineering rigor. Animations were subtle, smooth, and on-brand.",
        name: "Jonas Rivera",
        role: "CTO, Harbor",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Design Systems",
        description: "A cohesive UI foundation—tokens, components, and patterns that scale.",
    },
    Service {
        title: "Web Experiences",
        description: "High-end marketing sites and portfolios with crafted motion and typography.",
    },
    Service {
        title: "Product UI",
        description: "Dashboards and app interfaces that feel fast, clear, and premium.",
    },
];

pub const HERO_STATS: &[Pair] = &[
    Pair { label: "Years", value: "7+" },
    Pair { label: "Projects shipped", value: "45+" },
    Pair { label: "Repeat clients", value: "70%" },
];

pub const PROFILE_ROWS: &[Pair] = &[
    Pair { label: "Focus", value: "UI systems, landing pages, dashboards" },
    Pair { label: "Tools", value: "React, Tailwind, Framer Motion" },
    Pair { label: "Timezone", value: "UTC−5" },
];

pub const SKILL_HIGHLIGHTS: &[&str] = &["Product UI", "Design Systems", "Responsive Web", "Motion"];

pub const SKILLS: &[Pair] = &[
    Pair { label: "React + TypeScript", value: "Component systems" },
    Pair { label: "Tailwind", value: "Design tokens" },
    Pair { label: "Framer Motion", value: "Subtle animation" },
    Pair { label: "Accessibility", value: "Keyboard & semantics" },
    Pair { label: "Performance", value: "Fast loading" },
    Pair { label: "UI Review", value: "Polish & iteration" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: SocialIcon::Email,
        label: "Email",
        handle: "hello@alexmorgan.studio",
        href: "#",
    },
    SocialLink {
        icon: SocialIcon::LinkedIn,
        label: "LinkedIn",
        handle: "linkedin.com/in/alexmorgan",
        href: "#",
    },
    SocialLink {
        icon: SocialIcon::Instagram,
        label: "Instagram",
        handle: "@alexmorgan.design",
        href: "#",
    },
    SocialLink {
        icon: SocialIcon::Upwork,
        label: "Upwork",
        handle: "Alex M.",
        href: "#",
    },
    SocialLink {
        icon: SocialIcon::Gumroad,
        label: "Gumroad",
        handle: "alexmorgan",
        href: "#",
    },
];

/// `"Projects shipped"` -> `"projects-shipped"`, for test ids.
pub fn slug(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let projects = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(projects.len(), PROJECTS.len());

        let testimonials = TESTIMONIALS.iter().map(|t| t.id).collect::<HashSet<_>>();
        assert_eq!(testimonials.len(), TESTIMONIALS.len());
    }

    #[test]
    fn test_nav_links_skip_top() {
        assert!(!NAV_LINKS.contains(&NavAnchor::Top));
        for anchor in NAV_LINKS {
            assert_eq!(NavAnchor::from_id(anchor.id()), Some(anchor));
        }
    }

    #[test]
    fn test_projects_have_technologies() {
        for project in PROJECTS {
            assert!(!project.technologies.is_empty(), "{} has no tech", project.id);
            assert!(project.demo.is_some() || project.github.is_some());
        }
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Projects shipped"), "projects-shipped");
        assert_eq!(slug("Years"), "years");
        assert_eq!(slug("  Repeat   clients "), "repeat-clients");
    }
}
