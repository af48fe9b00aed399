//! Company profile page data

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CompanyTab {
    #[default]
    About,
    Team,
    Metrics,
}

impl CompanyTab {
    pub const ALL: [CompanyTab; 3] = [CompanyTab::About, CompanyTab::Team, CompanyTab::Metrics];

    pub fn label(self) -> &'static str {
        match self {
            CompanyTab::About => "About",
            CompanyTab::Team => "Team",
            CompanyTab::Metrics => "Metrics",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoreValue {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub title: &'static str,
    pub image_url: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub cover_url: &'static str,
    pub logo_url: &'static str,
    pub verified: bool,
    pub founded: &'static str,
    pub location: &'static str,
    pub website: &'static str,
    pub industry: &'static str,
    pub mission: &'static str,
    pub vision: &'static str,
    pub summary: &'static str,
    pub stats: Vec<Stat>,
    pub metrics: Vec<Metric>,
    pub values: Vec<CoreValue>,
    pub team: Vec<TeamMember>,
}

impl CompanyProfile {
    pub fn website_url(&self) -> String {
        format!("https://{}", self.website)
    }
}

/// The showcased startup
pub fn showcase() -> CompanyProfile {
    CompanyProfile {
        name: "TechVentures",
        tagline: "Building the future of fintech",
        cover_url: "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&w=1200&q=80",
        logo_url: "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&w=300&q=80",
        verified: true,
        founded: "2020",
        location: "San Francisco, CA",
        website: "www.techventures.io",
        industry: "Fintech",
        mission: "To revolutionize fintech by democratizing access to advanced financial technology for businesses of all sizes.",
        vision: "A world where every business, regardless of size, has access to enterprise-grade financial solutions.",
        summary: "TechVentures is a leading fintech platform that provides comprehensive solutions for payment processing, financial analytics, and risk management. Our innovative approach combines cutting-edge AI technology with user-centric design to solve real business problems.",
        stats: vec![
            Stat { label: "Employees", value: "75+" },
            Stat { label: "Clients", value: "120+" },
            Stat { label: "Projects", value: "200+" },
            Stat { label: "Countries", value: "15+" },
        ],
        metrics: vec![
            Metric {
                label: "System Uptime",
                value: "99.9%",
                description: "Industry-leading reliability",
            },
            Metric {
                label: "Client Satisfaction",
                value: "4.8/5",
                description: "Based on 500+ reviews",
            },
            Metric {
                label: "AI Models",
                value: "150+",
                description: "Advanced algorithms",
            },
            Metric {
                label: "Revenue Growth",
                value: "+180%",
                description: "Year-over-year",
            },
        ],
        values: vec![
            CoreValue {
                title: "Innovation First",
                description: "We constantly push boundaries and explore new possibilities to deliver cutting-edge solutions.",
                icon: "⚡",
            },
            CoreValue {
                title: "Collaborative Culture",
                description: "Our team thrives on open communication and diverse perspectives to solve complex problems.",
                icon: "🤝",
            },
            CoreValue {
                title: "Measurable Impact",
                description: "We focus on delivering real results that drive growth and create lasting value.",
                icon: "📈",
            },
        ],
        team: vec![
            TeamMember {
                name: "Sarah Chen",
                title: "Founder & CEO",
                image_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=400&q=80",
                bio: "Serial entrepreneur with 10+ years in fintech",
            },
            TeamMember {
                name: "Marcus Rodriguez",
                title: "CTO",
                image_url: "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&w=400&q=80",
                bio: "AI/ML expert and cloud infrastructure specialist",
            },
            TeamMember {
                name: "Emily Zhang",
                title: "COO",
                image_url: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=400&q=80",
                bio: "Operations strategist with Fortune 500 experience",
            },
            TeamMember {
                name: "James Wilson",
                title: "Head of Product",
                image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=400&q=80",
                bio: "Product innovation leader and design advocate",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_shape() {
        let company = showcase();
        assert_eq!(company.stats.len(), 4);
        assert_eq!(company.team[0].name, "Sarah Chen");
        assert_eq!(company.website_url(), "https://www.techventures.io");
        assert_eq!(CompanyTab::default(), CompanyTab::About);
    }
}
