//! Hard-coded page content. Everything here is read-only and lives for the
//! whole program.

use crate::about::AboutMode;

pub const OWNER_NAME: &str = "Steve Alden";
pub const LOGO_HEAD: &str = "s";
pub const LOGO_TAIL: &str = "teve";
pub const CONTACT_PITCH: &str =
    "Open to internship opportunities, collaborations, and conversations about software engineering.";
pub const CONTACT_FOOTER: &str = "Based in Indonesia • Available for remote internships";

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub year: u16,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub images: &'static [&'static str],
    pub url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "diamond-cut-motors",
        title: "Diamond Cut Motors",
        subtitle: None,
        year: 2024,
        description: "Fictional car showroom website",
        tags: &["UI/UX", "WebDev"],
        images: &["/public/Cras.png", "/public/DiamondCutHome.png"],
        url: Some("https://diamond-cut-motors-final-html-finished-copy-stippps-projects.vercel.app"),
    },
    Project {
        id: "taskora",
        title: "Taskora",
        subtitle: None,
        year: 2025,
        description: "AI-powered task scheduler for Android",
        tags: &["UI/UX", "Software"],
        images: &[],
        url: Some("https://github.com/alvinrk335/Taskora"),
    },
    Project {
        id: "karsaloka",
        title: "KarsaLoka",
        subtitle: Some("marketplace"),
        year: 2025,
        description: "Group buying marketplace with location support",
        tags: &["UI/UX", "Backend", "WebDev"],
        images: &["/public/Logo.png", "/public/GroupBuy.png"],
        url: Some("https://karsa-loka.vercel.app/marketplace"),
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// One row open at a time; toggling the open row closes it.
pub fn toggle_expanded(current: Option<&'static str>, id: &'static str) -> Option<&'static str> {
    if current == Some(id) {
        None
    } else {
        Some(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    LinkedIn,
    GitHub,
    Email,
}

#[derive(Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub icon: SocialIcon,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/steve-alden-6b80b52b0",
        description: "Professional network",
        icon: SocialIcon::LinkedIn,
    },
    SocialLink {
        name: "GitHub",
        url: "https://github.com/StipBinus",
        description: "Code & projects",
        icon: SocialIcon::GitHub,
    },
    SocialLink {
        name: "Email",
        url: "mailto:stevealdennn@gmail.com",
        description: "Direct contact",
        icon: SocialIcon::Email,
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AboutContent {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [Highlight],
    pub portrait: &'static str,
}

const DEVELOPER: AboutContent = AboutContent {
    eyebrow: "/ about me",
    heading: "Building calm, useful software",
    summary: "Computer science student who enjoys turning rough ideas into products people can \
              actually use, from mobile schedulers to marketplace backends.",
    highlights: &[
        Highlight {
            title: "Frontend",
            body: "React, TypeScript and careful motion design.",
        },
        Highlight {
            title: "Backend",
            body: "REST services, relational data and location-aware search.",
        },
        Highlight {
            title: "Mobile",
            body: "Android apps with AI-assisted planning.",
        },
    ],
    portrait: "/public/portrait-developer.png",
};

const BUSINESS: AboutContent = AboutContent {
    eyebrow: "/ about me",
    heading: "Running a small business on the side",
    summary: "Alongside code I run a small venture, which taught me budgeting, talking to \
              customers and shipping on a deadline.",
    highlights: &[
        Highlight {
            title: "Operations",
            body: "Suppliers, inventory and day-to-day logistics.",
        },
        Highlight {
            title: "Customers",
            body: "Direct sales and feedback loops with real buyers.",
        },
        Highlight {
            title: "Growth",
            body: "Social media campaigns and group-buying promotions.",
        },
    ],
    portrait: "/public/portrait-business.png",
};

pub fn about_content(mode: AboutMode) -> &'static AboutContent {
    match mode {
        AboutMode::Developer => &DEVELOPER,
        AboutMode::Business => &BUSINESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique_and_resolvable() {
        for project in PROJECTS {
            assert_eq!(find_project(project.id), Some(project));
            assert!(!project.tags.is_empty());
        }
        assert_eq!(find_project("missing"), None);
    }

    #[test]
    fn expanding_is_exclusive_and_toggles_off() {
        let open = toggle_expanded(None, "taskora");
        assert_eq!(open, Some("taskora"));

        let switched = toggle_expanded(open, "karsaloka");
        assert_eq!(switched, Some("karsaloka"));

        assert_eq!(toggle_expanded(switched, "karsaloka"), None);
    }

    #[test]
    fn social_links_use_external_schemes() {
        for link in SOCIAL_LINKS {
            assert!(link.url.starts_with("https://") || link.url.starts_with("mailto:"));
        }
    }

    #[test]
    fn each_mode_has_its_own_content() {
        let developer = about_content(AboutMode::Developer);
        let business = about_content(AboutMode::Business);

        assert_ne!(developer, business);
        assert_eq!(developer.highlights.len(), business.highlights.len());
    }
}
