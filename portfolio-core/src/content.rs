//! Static page content.
//!
//! Everything the page shows is compiled in and immutable. The types derive
//! `Serialize` so the content can be dumped as JSON (see [`crate::schema`]).

use serde::Serialize;

/// Symbolic icon reference. The site maps each tag to SVG path data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    /// Hamburger menu
    Menu,
    /// Close (X) glyph
    Close,
    /// Envelope
    Mail,
    /// Telephone handset
    Phone,
    /// Location pin
    MapPin,
    /// LinkedIn logo
    LinkedIn,
    /// Award ribbon
    Award,
    /// Target rings
    Target,
    /// Group of people
    Users,
    /// Bar chart
    BarChart,
    /// Open book
    BookOpen,
    /// Git branch
    GitBranch,
    /// Document with lines
    FileText,
    /// Twitter/X bird
    Twitter,
    /// Cloud
    Cloud,
    /// Brain
    Brain,
    /// Briefcase
    Briefcase,
    /// Globe
    Globe,
}

impl IconKind {
    /// Every icon tag, in declaration order.
    pub const ALL: [IconKind; 18] = [
        IconKind::Menu,
        IconKind::Close,
        IconKind::Mail,
        IconKind::Phone,
        IconKind::MapPin,
        IconKind::LinkedIn,
        IconKind::Award,
        IconKind::Target,
        IconKind::Users,
        IconKind::BarChart,
        IconKind::BookOpen,
        IconKind::GitBranch,
        IconKind::FileText,
        IconKind::Twitter,
        IconKind::Cloud,
        IconKind::Brain,
        IconKind::Briefcase,
        IconKind::Globe,
    ];
}

/// A navigation link and the section it targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Section element id (also the anchor fragment)
    pub id: &'static str,
    /// Link text
    pub label: &'static str,
}

impl NavItem {
    /// In-page anchor for the section, e.g. `#about`.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// A headline number animated by the count-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    /// Final value of the count-up
    pub value: u32,
    /// Caption under the number
    pub label: &'static str,
    /// Unit appended to the number
    pub suffix: Option<&'static str>,
}

/// A service card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceEntry {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// One position in the experience timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    /// Bullet points, in display order
    pub achievements: &'static [&'static str],
}

/// A project card in the portfolio grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub icon: IconKind,
}

/// A card in the contact details grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
    /// `None` renders a plain card (no link)
    pub href: Option<&'static str>,
    pub icon: IconKind,
    /// Opens in a new tab
    pub external: bool,
}

/// A round icon link in the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: IconKind,
}

impl SocialLink {
    /// `mailto:`/`tel:` links stay in the current tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

/// A verifiable certificate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: IconKind,
}

/// Who the page is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    /// Short uppercase mark shown in the navbar
    pub brand: &'static str,
    /// Name with post-nominal, used in the footer
    pub display_name: &'static str,
    pub role: &'static str,
    pub credentials: &'static str,
    pub summary: &'static str,
    pub headline: &'static str,
    pub about: &'static [&'static str],
    pub city: &'static str,
    pub country: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub tagline: &'static str,
}

impl Profile {
    /// "City, Country"
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Gideon Vision Olufeagba",
    brand: "VISION OLUFEAGBA",
    display_name: "Gideon Vision Olufeagba (CPM)",
    role: "Product Manager",
    credentials: "Certified Product Manager (CPM) | AWS Certified Cloud Practitioner",
    summary: "Results-driven Product Manager with expertise in end-to-end product development, strategic roadmap planning, and cross-functional leadership. Proven success designing quarterly roadmaps, managing complex backlogs, and facilitating Agile methodologies across EdTech and AgTech.",
    headline: "Results-Driven Product Leader",
    about: &[
        "I'm a passionate Product Manager based in Abuja, Nigeria, specializing in end-to-end product development across EdTech and AgTech. My approach blends data-driven decision making with user-centric design and clear stakeholder alignment.",
        "With certifications in Product Management, AWS Cloud, and Scrum fundamentals, I bring both strategic vision and technical understanding to every project.",
    ],
    city: "Abuja",
    country: "Nigeria",
    email: "visiongideon@gmail.com",
    phone: "+2349158312438",
    tagline: "Results-driven Product Manager specializing in end-to-end product development, strategic planning, and cross-functional leadership.",
};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "experience", label: "Experience" },
    NavItem { id: "services", label: "Services" },
    NavItem { id: "portfolio", label: "Portfolio" },
    NavItem { id: "contact", label: "Contact" },
];

/// Section ids in navigation order (scroll-spy targets).
pub fn nav_ids() -> Vec<&'static str> {
    NAV_ITEMS.iter().map(|item| item.id).collect()
}

pub const STATS: &[StatEntry] = &[
    StatEntry {
        value: 25,
        label: "Feature Adoption Improvement",
        suffix: Some("%"),
    },
    StatEntry {
        value: 90,
        label: "On-time Delivery Rate",
        suffix: Some("%"),
    },
    StatEntry {
        value: 85,
        label: "Stakeholder Approval Rating",
        suffix: Some("%"),
    },
    StatEntry {
        value: 65,
        label: "User Satisfaction Increase",
        suffix: Some("%"),
    },
];

pub const SKILLS: &[&str] = &[
    "Jira",
    "Figma",
    "Miro",
    "Mixpanel",
    "Firebase",
    "Scrum/Agile",
    "AWS",
    "Product Strategy",
    "User Research",
    "Stakeholder Management",
    "Data Analytics",
    "Roadmapping",
];

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        icon: IconKind::Target,
        title: "Product Strategy & Roadmapping",
        description: "Develop comprehensive product strategies and quarterly roadmaps aligned with business objectives. Synthesize stakeholder feedback and market research into actionable plans.",
    },
    ServiceEntry {
        icon: IconKind::GitBranch,
        title: "Agile Product Management",
        description: "Facilitation of Scrum ceremonies including planning, standups, and retrospectives. Maintain high velocity and delivery consistency.",
    },
    ServiceEntry {
        icon: IconKind::BarChart,
        title: "User Research & Analytics",
        description: "Conduct research and leverage tools like Mixpanel, LogRocket, and Firebase to drive data-informed decisions.",
    },
    ServiceEntry {
        icon: IconKind::Users,
        title: "Stakeholder Management",
        description: "Enable clear communication across cross-functional teams and business stakeholders. Lead change management and drive buy\u{2011}in.",
    },
    ServiceEntry {
        icon: IconKind::FileText,
        title: "Product Backlog Management",
        description: "Prioritize complex backlogs based on business value. Create PRDs and user stories that guide delivery.",
    },
    ServiceEntry {
        icon: IconKind::BookOpen,
        title: "EdTech & AgTech Expertise",
        description: "Specialized experience building in EdTech and AgTech with deep understanding of user needs and market dynamics.",
    },
];

pub const EXPERIENCES: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Lead Product Manager (Trade)",
        company: "AFEX",
        location: "Abuja",
        duration: "April 2022 - Present",
        achievements: &[
            "Designed quarterly product roadmaps synthesizing initiatives from 10+ stakeholders, achieving 25% improvement in feature adoption rates",
            "Managed product backlog of 80+ user stories with 90% on-time delivery rate across 9 development sprints",
            "Led bi-weekly sprint planning sessions for 5-person development team with 90% sprint goal completion rate",
            "Facilitated communication with 20+ cross-functional business stakeholders across multiple departments",
            "Achieved 85% stakeholder approval rating through effective change management presentations",
            "Reduced revision cycles by 30% through efficient design reviews and stakeholder sign-offs",
        ],
    },
    ExperienceEntry {
        title: "Product Lead (IDSS)",
        company: "Educratic Technologies Limited",
        location: "Remote",
        duration: "May 2024 - April 2025",
        achievements: &[
            "Led end-to-end product development for learning management platform serving exam class students and professionals",
            "Defined product vision and development roadmaps for 4 core modules (assessment, content delivery, analytics, and admin)",
            "Conducted extensive user research with 80+ teachers, students, and administrators",
            "Achieved 65% improvement in user satisfaction scores through user-centric design approach",
            "Managed complete sprint cycles including planning, execution, review, and retrospective activities",
            "Coordinated cross-functional collaboration between development, design, and business teams",
        ],
    },
];

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Agricultural Trading Platform",
        company: "AFEX Trade Platform",
        description: "Led product development for AFEX's trade platform, managing quarterly roadmaps and achieving 25% improvement in feature adoption through data-driven prioritization.",
        tags: &["Product Strategy", "Agile/Scrum", "Stakeholder Management", "AgTech"],
        icon: IconKind::Globe,
    },
    PortfolioItem {
        title: "EdTech Platform (IDSS)",
        company: "Learning Management System",
        description: "Developed learning management platform with 4 core modules; conducted research with 80+ participants and achieved 65% improvement in user satisfaction.",
        tags: &["EdTech", "User Research", "Product Development", "Analytics"],
        icon: IconKind::BookOpen,
    },
    PortfolioItem {
        title: "Data-Driven Product Insights",
        company: "Product Analytics Dashboard",
        description: "Implemented analytics framework using Mixpanel, LogRocket, and Firebase Crashlytics to guide product decisions and optimize UX.",
        tags: &["Analytics", "Mixpanel", "Firebase", "Data Strategy"],
        icon: IconKind::BarChart,
    },
    PortfolioItem {
        title: "Sprint Management Excellence",
        company: "Agile Transformation",
        description: "Achieved 92% velocity consistency across development sprints while maintaining 98% daily scrum attendance and reducing blockers by 40%.",
        tags: &["Scrum Master", "Team Leadership", "Process Optimization", "Agile"],
        icon: IconKind::GitBranch,
    },
    PortfolioItem {
        title: "Comprehensive PRD Framework",
        company: "Product Documentation",
        description: "Developed 12+ PRDs and user stories, reducing revision cycles by 30% through effective stakeholder collaboration.",
        tags: &["Documentation", "Requirements", "User Stories", "Process"],
        icon: IconKind::FileText,
    },
    PortfolioItem {
        title: "Stakeholder Alignment Success",
        company: "Change Management",
        description: "Delivered change management presentations to 20+ team members, achieving 85% stakeholder approval rating through clear communication and effective UAT.",
        tags: &["Change Management", "Presentations", "UAT", "Communication"],
        icon: IconKind::Users,
    },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        value: "visiongideon@gmail.com",
        href: Some("mailto:visiongideon@gmail.com"),
        icon: IconKind::Mail,
        external: false,
    },
    ContactLink {
        label: "Phone",
        value: "(+234) 9158312438",
        href: Some("tel:+2349158312438"),
        icon: IconKind::Phone,
        external: false,
    },
    ContactLink {
        label: "LinkedIn",
        value: "vision-olufeagba",
        href: Some("https://www.linkedin.com/in/vision-olufeagba/"),
        icon: IconKind::LinkedIn,
        external: true,
    },
    ContactLink {
        label: "X (Twitter)",
        value: "@visionolufeagba",
        href: Some("https://x.com/SimplyVision_"),
        icon: IconKind::Twitter,
        external: true,
    },
    ContactLink {
        label: "Medium",
        value: "@visionolufeagba",
        href: Some("https://medium.com/@SimplyVision_"),
        icon: IconKind::FileText,
        external: true,
    },
    ContactLink {
        label: "Location",
        value: "Abuja, Nigeria",
        href: None,
        icon: IconKind::MapPin,
        external: false,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/vision-olufeagba/",
        icon: IconKind::LinkedIn,
    },
    SocialLink {
        label: "X (Twitter)",
        href: "https://x.com/SimplyVision_",
        icon: IconKind::Twitter,
    },
    SocialLink {
        label: "Medium",
        href: "https://medium.com/@SimplyVision_",
        icon: IconKind::FileText,
    },
    SocialLink {
        label: "Email",
        href: "mailto:visiongideon@gmail.com",
        icon: IconKind::Mail,
    },
];

pub const EXPERTISE: &[&str] = &[
    "Product Strategy & Roadmapping",
    "Agile Product Management",
    "User Research & Analytics",
    "Stakeholder Management",
    "EdTech & AgTech Solutions",
];

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Certified Product Manager (CPM)",
        url: "https://certificates.aipmm.com/e7039c87-ad2f-4e1a-8a2d-216dc9dad49f#acc.QjXTrEkP",
        icon: IconKind::Award,
    },
    Certification {
        title: "AWS Certified Cloud Practitioner",
        url: "https://www.credly.com/badges/4f92fbdc-f6a5-4701-acbb-cdcca944dc0b/public_url",
        icon: IconKind::Cloud,
    },
    Certification {
        title: "Product Manager Nanodegree",
        url: "https://www.udacity.com/certificate/e/c582a9d4-b93a-11ee-b642-1739e588702b",
        icon: IconKind::BookOpen,
    },
    Certification {
        title: "Scrum Fundamentals Certified",
        url: "https://www.scrumstudy.com/certification/verify?type=SFC&number=973461",
        icon: IconKind::GitBranch,
    },
    Certification {
        title: "AI for Product Management",
        url: "https://www.credly.com/badges/267d90bc-0660-4300-8ebf-3c88317a8597/linked_in_profile",
        icon: IconKind::Brain,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn nav_ids_follow_declaration_order() {
        assert_eq!(
            nav_ids(),
            vec!["home", "about", "experience", "services", "portfolio", "contact"]
        );
    }

    #[test]
    fn nav_ids_are_unique() {
        let unique: HashSet<_> = NAV_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(unique.len(), NAV_ITEMS.len());
    }

    #[test]
    fn nav_href_is_fragment() {
        assert_eq!(NAV_ITEMS[1].href(), "#about");
    }

    #[test]
    fn stats_carry_percent_suffix() {
        assert_eq!(STATS.len(), 4);
        assert!(STATS.iter().all(|s| s.suffix == Some("%")));
        assert_eq!(STATS[1].value, 90);
    }

    #[test]
    fn portfolio_tags_are_distinct_per_item() {
        for item in PORTFOLIO_ITEMS {
            let unique: HashSet<_> = item.tags.iter().collect();
            assert_eq!(unique.len(), item.tags.len(), "{}", item.title);
        }
    }

    #[test]
    fn location_card_has_no_link() {
        let location = CONTACT_LINKS
            .iter()
            .find(|link| link.label == "Location")
            .unwrap();
        assert_eq!(location.href, None);
        assert_eq!(location.value, PROFILE.location());
    }

    #[test]
    fn mail_links_stay_in_tab() {
        let email = SOCIAL_LINKS.iter().find(|l| l.label == "Email").unwrap();
        assert!(!email.is_external());
        assert!(SOCIAL_LINKS[0].is_external());
    }

    #[test]
    fn icon_serializes_kebab_case() {
        let json = serde_json::to_string(&IconKind::BarChart).unwrap();
        assert_eq!(json, "\"bar-chart\"");
    }
}
