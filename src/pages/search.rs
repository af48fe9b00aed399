//! Directory search
//!
//! A fixed mock directory filtered by free text and two toggle chips.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One person in the mock directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub industry: &'static str,
    pub image_url: &'static str,
    pub verified: bool,
}

const DIRECTORY: [DirectoryEntry; 6] = [
    DirectoryEntry {
        id: 1,
        name: "David Park",
        role: "Founder",
        company: "AI ANALYTICS",
        industry: "TECH",
        image_url: "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&w=800&q=80",
        verified: true,
    },
    DirectoryEntry {
        id: 2,
        name: "Sarah Chen",
        role: "Managing Partner",
        company: "GLOBAL VENTURES",
        industry: "FINANCE",
        image_url: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=800&q=80",
        verified: true,
    },
    DirectoryEntry {
        id: 3,
        name: "Arjun Mehta",
        role: "Alumni Founder",
        company: "AGRITECH SOL.",
        industry: "AGRITECH",
        image_url: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?auto=format&fit=crop&w=800&q=80",
        verified: false,
    },
    DirectoryEntry {
        id: 4,
        name: "Priya Sharma",
        role: "CEO",
        company: "HEALTH AI",
        industry: "HEALTHCARE",
        image_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&w=800&q=80",
        verified: true,
    },
    DirectoryEntry {
        id: 5,
        name: "Vikram Singh",
        role: "Tech Advisor",
        company: "DEEP MIND",
        industry: "DEEP TECH",
        image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=800&q=80",
        verified: true,
    },
    DirectoryEntry {
        id: 6,
        name: "Emily Zhang",
        role: "Product Lead",
        company: "ECOPACK",
        industry: "TECH",
        image_url: "https://images.unsplash.com/photo-1598550874175-4d7112ee7f43?auto=format&fit=crop&w=800&q=80",
        verified: false,
    },
];

pub fn directory() -> &'static [DirectoryEntry] {
    &DIRECTORY
}

/// Role filter chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoleChip {
    Founder,
    Investor,
    Student,
}

impl RoleChip {
    pub const ALL: [RoleChip; 3] = [RoleChip::Founder, RoleChip::Investor, RoleChip::Student];

    pub fn label(self) -> &'static str {
        match self {
            RoleChip::Founder => "FOUNDER",
            RoleChip::Investor => "INVESTOR",
            RoleChip::Student => "STUDENT",
        }
    }
}

/// Industry filter chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndustryChip {
    Tech,
    Finance,
    Healthcare,
}

impl IndustryChip {
    pub const ALL: [IndustryChip; 3] = [
        IndustryChip::Tech,
        IndustryChip::Finance,
        IndustryChip::Healthcare,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IndustryChip::Tech => "TECH",
            IndustryChip::Finance => "FINANCE",
            IndustryChip::Healthcare => "HEALTHCARE",
        }
    }
}

macro_rules! chip_text {
    ($chip:ty, $what:literal) => {
        impl fmt::Display for $chip {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $chip {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|chip| chip.label().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| format!("Unknown {}: {}", $what, s))
            }
        }
    };
}

chip_text!(RoleChip, "role");
chip_text!(IndustryChip, "industry");

/// Current query and chip selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub query: String,
    pub role: Option<RoleChip>,
    pub industry: Option<IndustryChip>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Select `chip`, or clear it when it is already selected
    pub fn toggle_role(&mut self, chip: RoleChip) {
        self.role = if self.role == Some(chip) { None } else { Some(chip) };
    }

    /// Select `chip`, or clear it when it is already selected
    pub fn toggle_industry(&mut self, chip: IndustryChip) {
        self.industry = if self.industry == Some(chip) {
            None
        } else {
            Some(chip)
        };
    }

    pub fn matches(&self, entry: &DirectoryEntry) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = query.is_empty()
            || entry.name.to_lowercase().contains(&query)
            || entry.role.to_lowercase().contains(&query);

        // Substring match, so "FOUNDER" also picks up "Alumni Founder"
        let matches_role = self
            .role
            .map_or(true, |chip| entry.role.to_uppercase().contains(chip.label()));

        let matches_industry = self
            .industry
            .map_or(true, |chip| entry.industry == chip.label());

        matches_query && matches_role && matches_industry
    }

    pub fn apply<'a>(&self, entries: &'a [DirectoryEntry]) -> Vec<&'a DirectoryEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(filter: &SearchFilter) -> Vec<&'static str> {
        filter.apply(directory()).into_iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_empty_filter_returns_everyone() {
        assert_eq!(names(&SearchFilter::new()).len(), 6);
    }

    #[test]
    fn test_query_matches_name_or_role_case_insensitively() {
        assert_eq!(names(&SearchFilter::new().with_query("chen")), vec!["Sarah Chen"]);
        assert_eq!(
            names(&SearchFilter::new().with_query("ADVISOR")),
            vec!["Vikram Singh"]
        );
        // company is not searched
        assert!(names(&SearchFilter::new().with_query("ecopack")).is_empty());
    }

    #[test]
    fn test_role_chip_is_substring_match() {
        let mut filter = SearchFilter::new();
        filter.toggle_role(RoleChip::Founder);
        assert_eq!(names(&filter), vec!["David Park", "Arjun Mehta"]);

        filter.toggle_role(RoleChip::Investor);
        assert!(names(&filter).is_empty());
    }

    #[test]
    fn test_industry_chip_is_exact_and_toggles_off() {
        let mut filter = SearchFilter::new();
        filter.toggle_industry(IndustryChip::Tech);
        // "DEEP TECH" is not "TECH"
        assert_eq!(names(&filter), vec!["David Park", "Emily Zhang"]);

        filter.toggle_industry(IndustryChip::Tech);
        assert_eq!(filter.industry, None);
        assert_eq!(names(&filter).len(), 6);
    }

    #[test]
    fn test_chips_parse_from_text() {
        assert_eq!("founder".parse::<RoleChip>(), Ok(RoleChip::Founder));
        assert_eq!(" Healthcare ".parse::<IndustryChip>(), Ok(IndustryChip::Healthcare));
        assert!("agritech".parse::<IndustryChip>().is_err());
    }
}
