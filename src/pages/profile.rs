//! User profile page data

use serde::Serialize;

use crate::forms::{require, FormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ProfileTab {
    #[default]
    About,
    Portfolio,
    Activity,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [
        ProfileTab::About,
        ProfileTab::Portfolio,
        ProfileTab::Activity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::About => "About",
            ProfileTab::Portfolio => "Portfolio",
            ProfileTab::Activity => "Activity",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub status: &'static str,
    pub years: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityItem {
    pub text: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MutualConnection {
    pub name: &'static str,
    pub avatar_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub bio: &'static str,
    pub cover_url: &'static str,
    pub avatar_url: &'static str,
    pub verified: bool,
    pub followers: &'static str,
    pub following: &'static str,
    pub connections: &'static str,
    pub expertise: Vec<&'static str>,
    pub location: &'static str,
    pub website: &'static str,
    pub joined: &'static str,
    pub experience: &'static str,
    pub portfolio: Vec<PortfolioItem>,
    pub activity: Vec<ActivityItem>,
    pub mutuals: Vec<MutualConnection>,
}

pub fn current_user() -> UserProfile {
    UserProfile {
        name: "Sarah Chen",
        title: "Founder & CEO",
        company: "TechVentures",
        bio: "Passionate about building innovative solutions and connecting passionate people. I believe the best ideas deserve the right capital, and the best capital deserves the right ideas.",
        cover_url: "https://images.unsplash.com/photo-1557821552-17105176677c?auto=format&fit=crop&w=1200&q=80",
        avatar_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=400&q=80",
        verified: true,
        followers: "2.4K",
        following: "840",
        connections: "156",
        expertise: vec!["Fintech", "AI/ML", "SaaS", "Blockchain", "Web3"],
        location: "San Francisco, CA",
        website: "www.techventures.io",
        joined: "Joined February 2024",
        experience: "8+ years in tech entrepreneurship",
        portfolio: vec![
            PortfolioItem {
                title: "TechVentures Inc",
                status: "Active",
                years: "2020 - Present",
                description: "AI-powered fintech platform for SMBs",
            },
            PortfolioItem {
                title: "DataFlow Analytics",
                status: "Exited",
                years: "2018 - 2021",
                description: "Real-time data visualization SaaS",
            },
            PortfolioItem {
                title: "CloudNine Solutions",
                status: "Active",
                years: "2019 - Present",
                description: "Enterprise cloud infrastructure",
            },
        ],
        activity: vec![
            ActivityItem { text: "Just closed Series A funding round", time: "2 days ago" },
            ActivityItem { text: "Connected with Marcus Rodriguez (Investor)", time: "1 week ago" },
            ActivityItem { text: "Added 3 new projects to portfolio", time: "2 weeks ago" },
            ActivityItem { text: "Shared insights on scaling startups", time: "3 weeks ago" },
        ],
        mutuals: vec![
            MutualConnection {
                name: "Marcus Rodriguez",
                avatar_url: "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&w=200&q=80",
            },
            MutualConnection {
                name: "Emily Zhang",
                avatar_url: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=200&q=80",
            },
            MutualConnection {
                name: "James Wilson",
                avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=200&q=80",
            },
            MutualConnection {
                name: "David Park",
                avatar_url: "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?auto=format&fit=crop&w=200&q=80",
            },
        ],
    }
}

/// "Request intro" dialog. Sending is cosmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntroRequest {
    pub target: String,
    pub message: String,
    sent: bool,
}

impl IntroRequest {
    pub fn is_sent(&self) -> bool {
        self.sent
    }

    pub fn send(&mut self) -> Result<(), FormError> {
        require("Name", &self.target)?;
        self.sent = true;
        Ok(())
    }

    /// Back to a blank dialog after the confirmation has shown
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_needs_target() {
        let mut intro = IntroRequest::default();
        assert_eq!(intro.send(), Err(FormError::MissingField("Name")));
        assert!(!intro.is_sent());

        intro.target = "Marcus Rodriguez".to_string();
        intro.send().unwrap();
        assert!(intro.is_sent());

        intro.clear();
        assert_eq!(intro, IntroRequest::default());
    }

    #[test]
    fn test_profile_tabs() {
        let labels: Vec<_> = ProfileTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["About", "Portfolio", "Activity"]);
        assert_eq!(current_user().mutuals.len(), 4);
    }
}
