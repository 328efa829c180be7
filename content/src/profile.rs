use serde::Serialize;

// every icon the content refers to
//
// content names icons by variant, and the webapp resolves each variant to its
// markup exactly once, so there is no string-keyed lookup anywhere
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Glyph {
    Award,
    Code,
    Coffee,
    Users,
    Mail,
    MapPin,
    Phone,
    Github,
    Linkedin,
    Twitter,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub bio: &'static [&'static str],
    pub location: &'static str,
    pub availability: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub resume: &'static str,
    pub avatar: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    // 0..=100
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stat {
    pub glyph: Glyph,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub glyph: Glyph,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactDetail {
    pub glyph: Glyph,
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub fn profile() -> &'static Profile {
    &PROFILE
}

pub fn skill_groups() -> &'static [SkillGroup] {
    SKILL_GROUPS
}

pub fn stats() -> &'static [Stat] {
    STATS
}

pub fn fun_facts() -> &'static [&'static str] {
    FUN_FACTS
}

pub fn social_links() -> &'static [SocialLink] {
    SOCIAL_LINKS
}

pub fn contact_details() -> &'static [ContactDetail] {
    CONTACT_DETAILS
}

static PROFILE: Profile = Profile {
    name: "Omar Ahsan",
    headline: "Full Stack Developer & AI Enthusiast",
    bio: &[
        "Hi! I'm a full-stack developer who likes turning messy problems into simple, dependable software. Lately that means a lot of automation and a growing pile of machine learning experiments.",
        "When I'm not coding you'll find me exploring new tools, contributing to open source, or writing up what I learned along the way.",
    ],
    location: "San Francisco, CA",
    availability: "Available for work",
    email: "omar@omarahsan.dev",
    phone: "+1 (555) 123-4567",
    resume: "/assets/omar-ahsan-resume.pdf",
    avatar: "/assets/avatar.webp",
};

static SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "TypeScript", level: 85 },
            Skill { name: "Vue.js", level: 70 },
            Skill { name: "TailwindCSS", level: 85 },
        ],
    },
    SkillGroup {
        category: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 85 },
            Skill { name: "Python", level: 90 },
            Skill { name: "FastAPI", level: 75 },
            Skill { name: "PostgreSQL", level: 75 },
        ],
    },
    SkillGroup {
        category: "AI & Automation",
        skills: &[
            Skill { name: "NEAT", level: 80 },
            Skill { name: "Web Scraping", level: 85 },
            Skill { name: "Docker", level: 70 },
        ],
    },
];

static STATS: &[Stat] = &[
    Stat { glyph: Glyph::Code, label: "Projects Completed", value: "50+" },
    Stat { glyph: Glyph::Coffee, label: "Cups of Coffee", value: "1000+" },
    Stat { glyph: Glyph::Users, label: "Happy Clients", value: "25+" },
    Stat { glyph: Glyph::Award, label: "Awards Won", value: "5" },
];

static FUN_FACTS: &[&str] = &[
    "I can solve a Rubik's cube in under 2 minutes",
    "I've traveled to 15 different countries",
    "I make the best coffee in the office (self-proclaimed)",
    "I once debugged code in my sleep and woke up with the solution",
];

static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/OmarAhsanCode",
        glyph: Glyph::Github,
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/omarahsan360",
        glyph: Glyph::Linkedin,
    },
    SocialLink {
        name: "Twitter",
        url: "https://x.com/omarahsan_",
        glyph: Glyph::Twitter,
    },
];

static CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        glyph: Glyph::Mail,
        label: "Email",
        value: "omar@omarahsan.dev",
        href: Some("mailto:omar@omarahsan.dev"),
    },
    ContactDetail {
        glyph: Glyph::MapPin,
        label: "Location",
        value: "San Francisco, CA",
        href: None,
    },
    ContactDetail {
        glyph: Glyph::Phone,
        label: "Phone",
        value: "+1 (555) 123-4567",
        href: Some("tel:+15551234567"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        for group in skill_groups() {
            assert!(!group.skills.is_empty());
            assert!(group.skills.iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn test_contact_email_matches_profile() {
        let email = contact_details()
            .iter()
            .find(|d| d.glyph == Glyph::Mail)
            .map(|d| d.value);

        assert_eq!(email, Some(profile().email));
    }
}
