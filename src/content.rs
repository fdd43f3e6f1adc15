//! Core data types for folio
//!
//! This module defines the tab enumeration, the profile content types,
//! and the mail deep-link composition.

use serde::Deserialize;

/// Application tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    About,
    Projects,
    Contact,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::About, Tab::Projects, Tab::Contact]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::About => 0,
            Tab::Projects => 1,
            Tab::Contact => 2,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Tab::About,
            1 => Tab::Projects,
            2 => Tab::Contact,
            _ => Tab::About,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::About => "About & Resume",
            Tab::Projects => "Projects",
            Tab::Contact => "Contact",
        }
    }
}

/// Who the portfolio belongs to
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub name: String,
    pub tagline: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: "Taeyun Kim".into(),
            tagline: "RPA Developer".into(),
        }
    }
}

/// A single project entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub summary: String,
    pub stack: Vec<String>,
    pub link: String,
}

/// A career timeline entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub detail: String,
}

/// Ways to reach the owner
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: "you@example.com".into(),
            phone: "010-0000-0000".into(),
        }
    }
}

/// External profile links, rendered as plain hyperlinks
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
    pub resume: String,
    pub notion: String,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            github: "https://github.com/yourname".into(),
            linkedin: "https://linkedin.com/in/yourname".into(),
            resume: "https://example.com/resume.pdf".into(),
            notion: "https://www.notion.so/your-resume".into(),
        }
    }
}

/// Complete portfolio content
///
/// Immutable after load; panels only read from it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub identity: Identity,
    pub intro: String,
    pub badges: Vec<(String, String)>,
    pub skills: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub credentials: Vec<String>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    pub links: Links,
}

impl Default for Profile {
    fn default() -> Self {
        Self::sample()
    }
}

impl Profile {
    /// Built-in sample content, used when no profile file exists
    pub fn sample() -> Self {
        Self {
            identity: Identity::default(),
            intro: "Hi, I'm an RPA developer. I build automation pipelines \
                    and I'm interested in combining them with AI."
                .into(),
            badges: vec![
                ("Solutions".into(), "Brity, A360, Blue Prism".into()),
                ("Languages".into(), "Spring Boot, Python, Vue".into()),
                ("Interests".into(), "n8n, RAG, databases".into()),
            ],
            skills: vec![
                "React".into(),
                "Next.js".into(),
                "Tailwind".into(),
                "Spring Boot".into(),
                "JPA".into(),
                "MySQL".into(),
                "Docker".into(),
                "n8n".into(),
                "AWS".into(),
                "GitHub Actions".into(),
            ],
            timeline: vec![
                TimelineEntry {
                    period: "2023 – present".into(),
                    title: "Fast Campus bootcamp".into(),
                    detail: "Backend developer track".into(),
                },
                TimelineEntry {
                    period: "2021 – 2023".into(),
                    title: "Metanet Global · RPA Engineer".into(),
                    detail: "Built automation pipelines, improved operating efficiency by 30%".into(),
                },
            ],
            credentials: vec![
                "SQLD".into(),
                "Craftsman Information Processing".into(),
                "Blue Prism certification".into(),
            ],
            projects: vec![
                Project {
                    title: "LoL custom-game team matcher".into(),
                    summary: "Discord bot that collects participants and runs automatic \
                              team matching with per-lane champion suggestions"
                        .into(),
                    stack: vec!["Node.js".into(), "Discord.js".into(), "Python".into(), "n8n".into()],
                    link: "https://github.com/yourname/lol-autoteam".into(),
                },
                Project {
                    title: "Perfume Info Collector".into(),
                    summary: "Crawls and cleans fragrance notes for a brand/name pair and \
                              records them to a Google Sheet"
                        .into(),
                    stack: vec!["Node.js".into(), "n8n".into(), "Google Sheets API".into()],
                    link: "https://github.com/yourname/perfume-info-collector".into(),
                },
                Project {
                    title: "RPA operations dashboard".into(),
                    summary: "Internal dashboard visualizing Blue Prism/Brity job status \
                              with automated alerting"
                        .into(),
                    stack: vec!["Spring Boot".into(), "React".into(), "MySQL".into(), "Docker".into()],
                    link: "https://github.com/yourname/rpa-dashboard".into(),
                },
            ],
            contact: ContactInfo::default(),
            links: Links::default(),
        }
    }
}

/// Compose the mail deep link for a contact inquiry.
///
/// Subject and body are percent-encoded query parameters; the exact field
/// composition is part of the contract with the receiving mail client:
/// subject `[Portfolio Inquiry] {name}`, body `{message}\n\n— From: {name} <{email}>`.
pub fn mailto_uri(to: &str, name: &str, email: &str, message: &str) -> String {
    let subject = format!("[Portfolio Inquiry] {name}");
    let body = format!("{message}\n\n— From: {name} <{email}>");
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(&subject),
        urlencoding::encode(&body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_round_trip() {
        for tab in Tab::all() {
            assert_eq!(Tab::from_index(tab.index()), *tab);
        }
        assert_eq!(Tab::from_index(99), Tab::About);
        assert_eq!(Tab::default(), Tab::About);
    }

    #[test]
    fn test_mailto_composition() {
        let uri = mailto_uri("you@example.com", "Hong Gildong", "hong@example.com", "Hello");
        assert!(uri.starts_with("mailto:you@example.com?subject="));

        let query = uri.split_once('?').unwrap().1;
        let mut subject = None;
        let mut body = None;
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap();
            let decoded = urlencoding::decode(value).unwrap().into_owned();
            match key {
                "subject" => subject = Some(decoded),
                "body" => body = Some(decoded),
                _ => panic!("unexpected query key: {key}"),
            }
        }

        assert_eq!(subject.as_deref(), Some("[Portfolio Inquiry] Hong Gildong"));
        assert_eq!(
            body.as_deref(),
            Some("Hello\n\n— From: Hong Gildong <hong@example.com>")
        );
    }

    #[test]
    fn test_mailto_encodes_reserved_characters() {
        let uri = mailto_uri("you@example.com", "A&B", "a@b.c", "1 + 1 = 2");
        let query = uri.split_once('?').unwrap().1;
        // Raw '&', '=', '+' and spaces must not survive into the query values
        for pair in query.split('&') {
            let value = pair.split_once('=').unwrap().1;
            assert!(!value.contains(' '));
            assert!(!value.contains('+'));
            assert!(!value.contains('='));
        }
    }

    #[test]
    fn test_sample_profile_is_complete() {
        let profile = Profile::sample();
        assert!(!profile.identity.name.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(!profile.projects.is_empty());
        assert!(!profile.timeline.is_empty());
        assert!(!profile.contact.email.is_empty());
    }
}
