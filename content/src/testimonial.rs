use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub image: &'static str,
    pub content: &'static str,
    // 1..=5
    pub rating: u8,
    pub project: &'static str,
}

impl Testimonial {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

pub fn testimonials() -> &'static [Testimonial] {
    TESTIMONIALS
}

static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        role: "Lead Designer",
        company: "TechCorp Inc.",
        image: "/assets/people/sarah.webp",
        content: "Working with Omar was an absolute pleasure. The attention to detail and creative problem-solving are exceptional, and the result went beyond what we asked for.",
        rating: 5,
        project: "E-commerce Platform Redesign",
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        role: "CTO",
        company: "StartupX",
        image: "/assets/people/michael.webp",
        content: "Deep technical expertise combined with clear communication. The project landed ahead of schedule and the code was a pleasure to take over.",
        rating: 5,
        project: "Full-Stack Web Application",
    },
    Testimonial {
        id: 3,
        name: "Emily Rodriguez",
        role: "Product Manager",
        company: "Digital Solutions Ltd.",
        image: "/assets/people/emily.webp",
        content: "Professional, reliable and inventive. The user experience improvements exceeded our goals.",
        rating: 5,
        project: "Mobile App Development",
    },
    Testimonial {
        id: 4,
        name: "David Thompson",
        role: "Marketing Director",
        company: "Creative Agency Pro",
        image: "/assets/people/david.webp",
        content: "Outstanding work on our portfolio website. The animations are smooth without getting in the way of the content.",
        rating: 5,
        project: "Portfolio Website",
    },
    Testimonial {
        id: 5,
        name: "Lisa Wang",
        role: "Founder",
        company: "InnovateLab",
        image: "/assets/people/lisa.webp",
        content: "Brings ideas to life with precision. The final product was what we envisioned, plus improvements we had not thought of.",
        rating: 4,
        project: "SaaS Platform Development",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ratings_in_range() {
        assert!(testimonials().iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<u32> = testimonials().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), testimonials().len());
    }

    #[test]
    fn test_initials() {
        assert_eq!(testimonials()[0].initials(), "SJ");
    }
}
