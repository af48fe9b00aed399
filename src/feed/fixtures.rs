//! Built-in featured datasets
//!
//! Served by the dev API and used as test data.

use super::records::{FeaturedConnection, FeaturedStory};

#[allow(clippy::too_many_arguments)]
fn connection(
    id: &str,
    name: &str,
    role: &str,
    company: &str,
    industry: &str,
    image: &str,
    alt: &str,
    verified: bool,
) -> FeaturedConnection {
    FeaturedConnection {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        industry: industry.to_string(),
        image_url: Some(image.to_string()),
        alt: alt.to_string(),
        verified,
    }
}

fn story(
    id: &str,
    title: &str,
    outcome: &str,
    metric: &str,
    image: &str,
    author: &str,
    company: &str,
) -> FeaturedStory {
    FeaturedStory {
        id: id.to_string(),
        title: title.to_string(),
        outcome: outcome.to_string(),
        metric: metric.to_string(),
        image_url: Some(image.to_string()),
        author: author.to_string(),
        company: company.to_string(),
    }
}

/// Featured alumni and founders
pub fn featured_connections() -> Vec<FeaturedConnection> {
    vec![
        connection(
            "conn_1",
            "Arjun Mehta",
            "Alumni Founder",
            "AgriTech Solutions",
            "AgriTech",
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=800&q=80",
            "Professional woman in business attire",
            true,
        ),
        connection(
            "conn_2",
            "Dr. Suresh Kumar",
            "Angel Investor",
            "PSG Alumni Network",
            "Deep Tech",
            "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&w=800&q=80",
            "Businessman in suit",
            true,
        ),
        connection(
            "conn_3",
            "Divya R.",
            "Student Innovator",
            "BioMed Systems",
            "Healthcare",
            "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=800&q=80",
            "Young woman smiling",
            false,
        ),
    ]
}

/// Campus-to-funding success stories
pub fn featured_stories() -> Vec<FeaturedStory> {
    vec![
        story(
            "story_1",
            "SIH Hackathon Victory",
            "Connected with technical mentors via NEFRA and won the National Smart India Hackathon.",
            "Won ₹1 Lakh",
            "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?auto=format&fit=crop&w=800&q=80",
            "Team Spark",
            "PSG iTech",
        ),
        story(
            "story_2",
            "Pre-Incubation Grant",
            "Met an alumni investor here. Secured pre-seed funding for our final year project prototype.",
            "Seed Funded",
            "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=800&q=80",
            "Karthik S.",
            "RoboDynamics",
        ),
        story(
            "story_3",
            "Global Mentorship",
            "Gained advisory support from Silicon Valley alumni to scale our SaaS platform globally.",
            "Global Expansion",
            "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?auto=format&fit=crop&w=800&q=80",
            "Priya Menon",
            "CloudFlow",
        ),
    ]
}
