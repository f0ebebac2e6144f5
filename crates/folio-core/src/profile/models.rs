//! Portfolio profile data model.
//!
//! Everything the card presents lives in one TOML file; an embedded sample
//! provides the out-of-the-box experience until the user writes their own.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Embedded sample profile, also written out by `folio init`.
pub const SAMPLE_PROFILE: &str = include_str!("sample.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub identity: Identity,
    /// Free-form introduction shown in the About section
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    /// Display name
    pub name: String,
    /// Headline text before the cycling word
    #[serde(default)]
    pub headline_prefix: String,
    /// Words the banner cycles through
    #[serde(default)]
    pub headline_words: Vec<String>,
    /// Headline text after the cycling word
    #[serde(default)]
    pub headline_suffix: String,
    /// One-line subtitle under the headline
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    /// E.g. "2019 - 2023"
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub email: String,
    /// Suggested subject line for outreach mail
    #[serde(default)]
    pub subject_hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl Profile {
    /// Load a profile from a TOML file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let profile: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Profile(e.to_string()))?;
        tracing::debug!("loaded profile from {}", path.display());
        Ok(profile)
    }

    /// Parse the embedded sample profile
    pub fn sample() -> crate::Result<Self> {
        toml::from_str(SAMPLE_PROFILE).map_err(|e| crate::Error::Profile(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise fall back to the sample
    pub fn load_or_sample(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no profile at {}, using embedded sample", path.display());
            Self::sample()
        }
    }

    /// Structural problems a `check` run should report. Empty means valid.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.identity.name.trim().is_empty() {
            problems.push("identity.name is empty".to_string());
        }
        if self.identity.headline_words.is_empty() {
            problems.push("identity.headline_words is empty; the banner has nothing to cycle".to_string());
        }
        if self
            .identity
            .headline_words
            .iter()
            .any(|w| w.trim().is_empty())
        {
            problems.push("identity.headline_words contains a blank entry".to_string());
        }
        for (i, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                problems.push(format!("projects[{}].title is empty", i));
            }
        }
        for (i, publication) in self.publications.iter().enumerate() {
            if publication.title.trim().is_empty() {
                problems.push(format!("publications[{}].title is empty", i));
            }
        }
        for (i, link) in self.links.iter().enumerate() {
            if link.url.trim().is_empty() {
                problems.push(format!("links[{}].url is empty", i));
            }
        }

        problems
    }

    /// Validate, returning the first problem as an error
    pub fn validate(&self) -> crate::Result<()> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(crate::Error::Profile(problem)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_parses_and_validates() {
        let profile = Profile::sample().unwrap();
        assert!(!profile.identity.name.is_empty());
        assert!(!profile.identity.headline_words.is_empty());
        assert!(!profile.projects.is_empty());
        assert!(profile.problems().is_empty());
    }

    #[test]
    fn test_minimal_profile_parses() {
        let profile: Profile = toml::from_str("[identity]\nname = \"Ada\"\n").unwrap();
        assert_eq!(profile.identity.name, "Ada");
        assert!(profile.projects.is_empty());
        // Valid TOML, but a card with no headline words is flagged.
        assert!(!profile.problems().is_empty());
    }

    #[test]
    fn test_missing_identity_is_an_error() {
        let result: Result<Profile, _> = toml::from_str("about = \"hi\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_problems_flag_blank_titles() {
        let mut profile = Profile::sample().unwrap();
        profile.projects[0].title = "  ".to_string();
        assert!(profile
            .problems()
            .iter()
            .any(|p| p.contains("projects[0].title")));
    }
}
