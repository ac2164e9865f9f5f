//! Static content for the portfolio sections.

pub const OWNER_NAME: &str = "Thiyagarajan V";
pub const OWNER_ROLE: &str = "AI & Python Developer";
pub const LOCATION: &str = "Tamil Nadu, India";
/// Served from `public/`, which cargo-leptos copies into the site root.
pub const PROFILE_IMAGE: &str = "/images/profile.svg";
pub const FAVICON: &str = "/favicon.svg";
/// `YYYY-MM-DD`, stamped by `build.rs`.
pub const BUILD_DATE: &str = env!("BUILD_DATE");

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        label: "Email",
        value: "thiyagu2004nanni@gmail.com",
        href: "mailto:thiyagu2004nanni@gmail.com",
        icon: "✉",
    },
    ContactChannel {
        label: "Phone",
        value: "+91 7094686699",
        href: "tel:+917094686699",
        icon: "☎",
    },
    ContactChannel {
        label: "LinkedIn",
        value: "Professional Profile",
        href: "https://www.linkedin.com/in/thiyagarajan-v-9b3b34373",
        icon: "in",
    },
    ContactChannel {
        label: "GitHub",
        value: "Source Code & Projects",
        href: "https://github.com/thiyagu200426",
        icon: "gh",
    },
];

impl ContactChannel {
    /// `mailto:` and `tel:` links stay in the current tab.
    pub fn opens_new_tab(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub static ABOUT_HIGHLIGHTS: [&str; 6] = [
    "Python Full Stack Development",
    "AI & Machine Learning",
    "RESTful API Development",
    "Database Design & Optimization",
    "Modern Frontend Technologies",
    "Cloud Platform Integration",
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub status: &'static str,
    pub location: &'static str,
    pub highlights: &'static [&'static str],
    pub grade: &'static str,
}

pub static EDUCATION: [Education; 3] = [
    Education {
        degree: "B.E. in Computer Science and Engineering",
        institution: "T.J Institute of Technology",
        period: "2022 – 2025",
        status: "Completed",
        location: LOCATION,
        highlights: &[
            "Specialized in AI and Machine Learning",
            "Full Stack Development Projects",
            "Database Management Systems",
            "Software Engineering Principles",
        ],
        grade: "Excellent Academic Performance",
    },
    Education {
        degree: "Diploma in Computer Engineering",
        institution: "Srinivasa Subbaraya Government College",
        period: "2019 – 2022",
        status: "Completed",
        location: LOCATION,
        highlights: &[
            "Programming Fundamentals",
            "Web Development Basics",
            "Computer Networks",
            "Database Concepts",
        ],
        grade: "First Class with Distinction",
    },
    Education {
        degree: "SSLC (10th Grade)",
        institution: "Jawahar Matriculation Higher Secondary School",
        period: "2019",
        status: "Completed",
        location: LOCATION,
        highlights: &[
            "Mathematics Excellence",
            "Science Foundation",
            "Academic Leadership",
            "Extracurricular Activities",
        ],
        grade: "Outstanding Performance",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tech_stack: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub status: &'static str,
    pub demo_link: Option<&'static str>,
    pub source_link: Option<&'static str>,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "MediBot – AI Virtual Assistant",
        description: "An intelligent prototype chatbot designed to provide medical advice and handle frequently asked questions. Built using natural language processing techniques to understand user queries and provide relevant health information.",
        category: "AI/Machine Learning",
        tech_stack: &["Python", "Django", "NLP", "Replit", "Natural Language Processing"],
        highlights: &[
            "Interactive conversational interface",
            "Medical FAQ database integration",
            "Basic NLP for query understanding",
            "Prototype deployed on Replit platform",
        ],
        status: "Learning Project",
        demo_link: None,
        source_link: None,
    },
    Project {
        title: "Online Organic Food Order System",
        description: "A comprehensive web application enabling users to browse, select, and order organic products with an efficient delivery system. Features user authentication, product catalog, shopping cart, and order management.",
        category: "Full Stack Development",
        tech_stack: &["Django", "React", "MySQL", "RESTful API", "Payment Integration"],
        highlights: &[
            "Responsive product catalog with search",
            "Secure user authentication system",
            "Real-time order tracking",
            "Admin dashboard for inventory management",
        ],
        status: "Completed",
        demo_link: Some("#"),
        source_link: Some("#"),
    },
    Project {
        title: "Spatial Sound Scene Analysis",
        description: "An innovative prototype that leverages machine learning to detect emergency sounds in the environment and automatically reduces device volume by 50% to ensure user awareness of critical situations.",
        category: "Machine Learning",
        tech_stack: &["Python", "Machine Learning", "Audio Processing", "Real-time Processing"],
        highlights: &[
            "Real-time audio analysis",
            "Emergency sound pattern recognition",
            "Automatic volume adjustment",
            "Machine learning classification models",
        ],
        status: "Prototype",
        demo_link: None,
        source_link: None,
    },
    Project {
        title: "Personal & Educational Content Blog",
        description: "A modern blog platform built to share technical insights, learning experiences, and educational content. Features content management, responsive design, and SEO optimization for better reach.",
        category: "Web Development",
        tech_stack: &["React", "Node.js", "MongoDB", "Express", "Markdown Support"],
        highlights: &[
            "Content management system",
            "SEO optimized articles",
            "Responsive design",
            "Social sharing integration",
        ],
        status: "In Development",
        demo_link: Some("#"),
        source_link: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Expert,
    Advanced,
    Proficient,
    Intermediate,
    Learning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Advanced => "Advanced",
            Self::Proficient => "Proficient",
            Self::Intermediate => "Intermediate",
            Self::Learning => "Learning",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Expert => BadgeVariant::Default,
            Self::Advanced => BadgeVariant::Secondary,
            Self::Proficient | Self::Intermediate | Self::Learning => BadgeVariant::Outline,
        }
    }
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Default => "bg-cyan/20 text-cyan border-cyan/30",
            Self::Secondary => "bg-purple/20 text-purple border-purple/30",
            Self::Outline => "bg-transparent text-muted border-muted/50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTone {
    Strong,
    Solid,
    Developing,
}

pub fn level_tone(level: u8) -> LevelTone {
    if level >= 80 {
        LevelTone::Strong
    } else if level >= 60 {
        LevelTone::Solid
    } else {
        LevelTone::Developing
    }
}

impl LevelTone {
    pub fn bar_class(&self) -> &'static str {
        match self {
            Self::Strong => "bg-green",
            Self::Solid => "bg-cyan",
            Self::Developing => "bg-yellow",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub proficiency: Proficiency,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8, proficiency: Proficiency) -> Skill {
    Skill {
        name,
        level,
        proficiency,
    }
}

use Proficiency::*;

pub static SKILL_CATEGORIES: [SkillCategory; 6] = [
    SkillCategory {
        title: "AI & Machine Learning",
        icon: "🧠",
        skills: &[
            skill("Natural Language Processing", 75, Advanced),
            skill("Large Language Models (ChatGPT, Gemini)", 80, Proficient),
            skill("Prompt Engineering", 85, Expert),
            skill("OpenAI API", 70, Intermediate),
            skill("Hugging Face APIs", 65, Intermediate),
            skill("LangChain", 60, Learning),
        ],
    },
    SkillCategory {
        title: "Backend Development",
        icon: "🖥",
        skills: &[
            skill("Python", 90, Expert),
            skill("Django", 85, Advanced),
            skill("Flask", 75, Proficient),
            skill("Django REST Framework", 80, Advanced),
            skill("FastAPI", 70, Intermediate),
            skill("RESTful API Design", 85, Advanced),
        ],
    },
    SkillCategory {
        title: "Frontend Development",
        icon: "🎨",
        skills: &[
            skill("HTML5 & CSS3", 90, Expert),
            skill("JavaScript (ES6+)", 85, Advanced),
            skill("React", 80, Advanced),
            skill("Responsive Design", 85, Advanced),
            skill("Modern CSS Frameworks", 75, Proficient),
        ],
    },
    SkillCategory {
        title: "Database & Storage",
        icon: "💾",
        skills: &[
            skill("MySQL", 85, Advanced),
            skill("SQLite", 90, Expert),
            skill("MongoDB", 70, Intermediate),
            skill("Database Design", 80, Advanced),
            skill("Query Optimization", 75, Proficient),
        ],
    },
    SkillCategory {
        title: "Tools & Technologies",
        icon: "🔧",
        skills: &[
            skill("Git & GitHub", 90, Expert),
            skill("Docker", 65, Intermediate),
            skill("Postman", 85, Advanced),
            skill("AWS Basics", 60, Learning),
            skill("Heroku", 75, Proficient),
        ],
    },
    SkillCategory {
        title: "Core Concepts",
        icon: "💡",
        skills: &[
            skill("Object-Oriented Programming", 90, Expert),
            skill("Data Structures & Algorithms", 80, Advanced),
            skill("Unit Testing", 75, Proficient),
            skill("Debugging", 85, Advanced),
            skill("MVC Architecture", 80, Advanced),
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Strength {
    pub label: &'static str,
    pub description: &'static str,
    pub value: u8,
}

pub static STRENGTHS: [Strength; 4] = [
    Strength {
        label: "Problem Solving",
        description: "Analytical thinking",
        value: 95,
    },
    Strength {
        label: "Continuous Learning",
        description: "Staying updated",
        value: 90,
    },
    Strength {
        label: "Adaptability",
        description: "Quick learning",
        value: 88,
    },
    Strength {
        label: "Innovation",
        description: "Creative solutions",
        value: 92,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

pub static QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Let's Grab Coffee",
        description: "Interested in discussing projects over coffee?",
        action: "Schedule Meet",
    },
    QuickAction {
        title: "Quick Chat",
        description: "Have a quick question or idea to discuss?",
        action: "Send Message",
    },
    QuickAction {
        title: "Project Collaboration",
        description: "Looking for a developer for your next project?",
        action: "Let's Talk",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_date_format() {
        assert_eq!(BUILD_DATE.len(), 10);
        for (i, c) in BUILD_DATE.chars().enumerate() {
            if i == 4 || i == 7 {
                assert_eq!(c, '-', "{BUILD_DATE}");
            } else {
                assert!(c.is_ascii_digit(), "{BUILD_DATE}");
            }
        }
    }

    #[test]
    fn test_static_assets_exist() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in [PROFILE_IMAGE, FAVICON] {
            let path = public.join(asset.trim_start_matches('/'));
            assert!(path.is_file(), "missing asset {}", path.display());
        }
    }

    #[test]
    fn test_level_tone_thresholds() {
        assert_eq!(level_tone(100), LevelTone::Strong);
        assert_eq!(level_tone(80), LevelTone::Strong);
        assert_eq!(level_tone(79), LevelTone::Solid);
        assert_eq!(level_tone(60), LevelTone::Solid);
        assert_eq!(level_tone(59), LevelTone::Developing);
        assert_eq!(level_tone(0), LevelTone::Developing);
    }

    #[test]
    fn test_badge_variants() {
        assert_eq!(Expert.badge(), BadgeVariant::Default);
        assert_eq!(Advanced.badge(), BadgeVariant::Secondary);
        assert_eq!(Proficient.badge(), BadgeVariant::Outline);
        assert_eq!(Intermediate.badge(), BadgeVariant::Outline);
        assert_eq!(Learning.badge(), BadgeVariant::Outline);
    }

    #[test]
    fn test_levels_are_percentages() {
        let skill_levels = SKILL_CATEGORIES
            .iter()
            .flat_map(|c| c.skills.iter().map(|s| s.level));
        let strength_levels = STRENGTHS.iter().map(|s| s.value);
        assert!(skill_levels.chain(strength_levels).all(|l| l <= 100));
    }

    #[test]
    fn test_only_web_links_open_new_tab() {
        let new_tab = CONTACT_CHANNELS
            .iter()
            .filter(|c| c.opens_new_tab())
            .map(|c| c.label)
            .collect::<Vec<_>>();
        assert_eq!(new_tab, vec!["LinkedIn", "GitHub"]);
    }
}
