//! Static content rendered by the page sections.

use crate::filter::Categorized;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub roles: &'static [&'static str],
    pub tagline: &'static str,
    pub email: &'static str,
    pub email_href: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub location: &'static str,
    pub location_href: &'static str,
    pub image: &'static str,
    pub resume: &'static str,
    pub badges: [&'static str; 2],
    pub bio: &'static [&'static str],
    pub socials: &'static [SocialLink],
}

impl Profile {
    pub fn contact_details(&self) -> [ContactDetail; 3] {
        [
            ContactDetail {
                icon: "✉️",
                label: "Email",
                value: self.email,
                href: self.email_href,
            },
            ContactDetail {
                icon: "📞",
                label: "Phone",
                value: self.phone,
                href: self.phone_href,
            },
            ContactDetail {
                icon: "📍",
                label: "Location",
                value: self.location,
                href: self.location_href,
            },
        ]
    }
}

pub static PROFILE: Profile = Profile {
    name: "Yatin Annam",
    initials: "YA",
    roles: &[
        "Full-Stack Developer",
        "UI/UX Enthusiast",
        "Open Source Contributor",
    ],
    tagline: "I build fast, accessible and good-looking things for the web.",
    email: "ninjayatin@gmail.com",
    email_href: "mailto:ninjayatin@gmail.com",
    phone: "+91 88673 31342",
    phone_href: "tel:+918867331342",
    location: "Bengaluru, Karnataka",
    location_href: "https://google.com/maps?q=Bengaluru,Karnataka",
    image: "/profile.jpg",
    resume: "/resume.pdf",
    badges: ["1 Year Exp", "15+ Projects"],
    bio: &[
        "I'm a full-stack developer and designer with a passion for creating beautiful, functional, and user-centered digital experiences.",
        "I've had the privilege of working with startups and established companies alike, helping them bring their visions to life through thoughtful design and clean code.",
        "When I'm not coding, you'll find me exploring new technologies, contributing to open-source projects, or enjoying a good cup of coffee while sketching new ideas.",
    ],
    socials: &[
        SocialLink {
            label: "GitHub",
            href: "https://github.com/yatinannam",
            icon: "devicon-github-plain",
        },
        SocialLink {
            label: "LinkedIn",
            href: "https://linkedin.com/in/yatinannam",
            icon: "devicon-linkedin-plain",
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink { label: "Home", anchor: "#home" },
    NavLink { label: "About", anchor: "#about" },
    NavLink { label: "Projects", anchor: "#projects" },
    NavLink { label: "Experience", anchor: "#experience" },
    NavLink { label: "Skills", anchor: "#skills" },
    NavLink { label: "Contact", anchor: "#contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub static HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: "</>",
        label: "Clean Code",
        description: "Writing maintainable, scalable solutions",
    },
    Highlight {
        icon: "🎨",
        label: "Creative Design",
        description: "Crafting beautiful user experiences",
    },
    Highlight {
        icon: "⚡",
        label: "Fast Delivery",
        description: "Efficient and timely project completion",
    },
    Highlight {
        icon: "♥",
        label: "Passionate",
        description: "Dedicated to continuous learning",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub gradient: &'static str,
    pub link: &'static str,
    pub source: &'static str,
}

impl Project {
    /// The first `limit` technologies, and how many were left out.
    pub fn tech_preview(&self, limit: usize) -> (&'static [&'static str], Option<usize>) {
        let tech = self.tech;
        if tech.len() <= limit {
            (tech, None)
        } else {
            (&tech[..limit], Some(tech.len() - limit))
        }
    }
}

impl Categorized for Project {
    fn category(&self) -> &str {
        self.category
    }
}

pub static PROJECT_CATEGORIES: [&str; 4] = [crate::filter::ALL, "Web App", "Mobile", "Design"];

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "E-Commerce Platform",
        category: "Web App",
        description: "A modern e-commerce solution with real-time inventory management and seamless checkout experience.",
        tech: &["React", "Node.js", "MongoDB", "Stripe"],
        gradient: "from-primary/30 to-accent/30",
        link: "#",
        source: "#",
    },
    Project {
        id: 2,
        title: "Finance Dashboard",
        category: "Web App",
        description: "Interactive financial analytics dashboard with real-time data visualization and predictive insights.",
        tech: &["Vue.js", "D3.js", "Python", "PostgreSQL"],
        gradient: "from-accent/30 to-secondary/30",
        link: "#",
        source: "#",
    },
    Project {
        id: 3,
        title: "Fitness Tracker",
        category: "Mobile",
        description: "Cross-platform mobile app for tracking workouts, nutrition, and health metrics.",
        tech: &["React Native", "Firebase", "HealthKit"],
        gradient: "from-secondary/30 to-primary/30",
        link: "#",
        source: "#",
    },
    Project {
        id: 4,
        title: "Brand Identity System",
        category: "Design",
        description: "Complete brand identity design including logo, typography, color system, and guidelines.",
        tech: &["Figma", "Illustrator", "After Effects"],
        gradient: "from-primary/30 to-secondary/30",
        link: "#",
        source: "#",
    },
    Project {
        id: 5,
        title: "AI Chat Assistant",
        category: "Web App",
        description: "Intelligent chatbot with custom training and natural conversations.",
        tech: &["Next.js", "OpenAI", "Prisma", "Tailwind"],
        gradient: "from-accent/30 to-primary/30",
        link: "#",
        source: "#",
    },
    Project {
        id: 6,
        title: "Travel Booking App",
        category: "Mobile",
        description: "Travel booking experience with personalized recommendations and seamless payments.",
        tech: &["Flutter", "Node.js", "AWS", "Stripe"],
        gradient: "from-secondary/30 to-accent/30",
        link: "#",
        source: "#",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceKind {
    Work,
    Education,
}

impl ExperienceKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Work => "💼",
            Self::Education => "🎓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub id: u32,
    pub kind: ExperienceKind,
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub static EXPERIENCES: [Experience; 4] = [
    Experience {
        id: 1,
        kind: ExperienceKind::Work,
        title: "Senior Frontend Developer",
        organization: "TechCorp Inc.",
        period: "2022 - Present",
        description: "Leading the frontend team in building scalable web applications. Mentoring junior developers and setting team conventions.",
        achievements: &[
            "Improved app performance by 40%",
            "Led team of 5 developers",
            "Implemented CI/CD pipelines",
        ],
    },
    Experience {
        id: 2,
        kind: ExperienceKind::Work,
        title: "Full Stack Developer",
        organization: "StartupHub",
        period: "2020 - 2022",
        description: "Developed and maintained multiple full-stack applications. Collaborated with the design team on intuitive user interfaces.",
        achievements: &[
            "Built 3 products from scratch",
            "Reduced load time by 60%",
            "Integrated 10+ third-party APIs",
        ],
    },
    Experience {
        id: 3,
        kind: ExperienceKind::Education,
        title: "Master of Computer Science",
        organization: "Stanford University",
        period: "2018 - 2020",
        description: "Specialized in Human-Computer Interaction and Software Engineering. Thesis on accessibility in web applications.",
        achievements: &[
            "GPA: 3.9/4.0",
            "Published 2 research papers",
            "Teaching Assistant for Web Dev",
        ],
    },
    Experience {
        id: 4,
        kind: ExperienceKind::Work,
        title: "Junior Developer",
        organization: "Digital Agency",
        period: "2017 - 2018",
        description: "Started my professional journey building websites and web applications for clients across different industries.",
        achievements: &[
            "Completed 20+ client projects",
            "Learned agile methodologies",
            "First experience with React",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
}

impl Skill {
    pub fn monogram(&self) -> String {
        self.name.chars().take(2).collect()
    }
}

impl Categorized for Skill {
    fn category(&self) -> &str {
        self.category
    }
}

const fn skill(name: &'static str, level: u8, category: &'static str) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

pub static SKILLS: [Skill; 15] = [
    skill("React", 95, "Frontend"),
    skill("TypeScript", 90, "Frontend"),
    skill("Next.js", 88, "Frontend"),
    skill("Tailwind CSS", 92, "Frontend"),
    skill("Vue.js", 75, "Frontend"),
    skill("Node.js", 88, "Backend"),
    skill("Python", 82, "Backend"),
    skill("PostgreSQL", 85, "Backend"),
    skill("GraphQL", 78, "Backend"),
    skill("MongoDB", 80, "Backend"),
    skill("Figma", 90, "Tools & Design"),
    skill("Git", 92, "Tools & Design"),
    skill("Docker", 75, "Tools & Design"),
    skill("AWS", 70, "Tools & Design"),
    skill("CI/CD", 80, "Tools & Design"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub static STATS: [Stat; 4] = [
    Stat { label: "Projects Completed", value: "50+" },
    Stat { label: "Happy Clients", value: "30+" },
    Stat { label: "Years Experience", value: "5+" },
    Stat { label: "Technologies", value: "20+" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_project_categories_known() {
        for project in PROJECTS.iter() {
            assert!(
                PROJECT_CATEGORIES[1..].contains(&project.category),
                "unknown category for {}",
                project.title
            );
        }
        assert_eq!(PROJECT_CATEGORIES[0], crate::filter::ALL);
    }

    #[test]
    fn test_skill_levels_in_range() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_tech_preview() {
        let project = PROJECTS[0];
        let (shown, hidden) = project.tech_preview(3);
        assert_eq!(shown, &["React", "Node.js", "MongoDB"]);
        assert_eq!(hidden, Some(1));

        let project = PROJECTS[2];
        let (shown, hidden) = project.tech_preview(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, None);
    }

    #[test]
    fn test_skill_monogram() {
        assert_eq!(SKILLS[0].monogram(), "Re");
        assert_eq!(skill("C", 10, "Backend").monogram(), "C");
    }

    #[test]
    fn test_nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|l| l.anchor.starts_with('#')));
    }
}
