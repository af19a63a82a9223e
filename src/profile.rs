use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

static PROFILE: LazyLock<Profile> = LazyLock::new(|| {
    load_profile().unwrap_or_else(|err| {
        log::warn!("falling back to empty profile: {err}");
        Profile::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Profile content not found")]
    NotFound,
    #[error("Couldn't parse profile: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    #[default]
    Briefcase,
    Calendar,
    Sparkles,
    Shield,
    Code,
    GraduationCap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub icon: Icon,
    pub title: String,
    pub subtitle: String,
    pub badge: Option<String>,
    pub bullets: Vec<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub icon: Icon,
    pub title: String,
    pub subtitle: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub pills: Vec<String>,
    pub aim_title: String,
    pub aim_text: String,
    pub traits: Vec<Highlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub title: String,
    pub heading: String,
    pub text: String,
}

/// Everything the page says about its owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub tagline: String,
    pub intro: String,
    pub linkedin_href: String,
    pub cv_href: String,
    pub contact_email: String,
    pub scheduling_link: String,
    pub hero_image: String,
    pub gallery_images: Vec<String>,
    pub hero_pills: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub about: About,
    pub experience_title: String,
    pub experience: Vec<Entry>,
    pub leadership_title: String,
    pub leadership: Vec<Entry>,
    pub skills_title: String,
    pub skills: Vec<SkillGroup>,
    pub education_title: String,
    pub education: Vec<Entry>,
    pub contact: Contact,
}

impl Profile {
    /// Badge text: first letter of the first and last name.
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub fn load_profile() -> Result<Profile, ProfileError> {
    let file = Content::get(PROFILE_FILE).ok_or(ProfileError::NotFound)?;
    serde_json::from_slice(&file.data).map_err(|e| ProfileError::Parse(e.to_string()))
}

/// Cached profile. Never fails; broken content yields an empty profile.
pub fn profile() -> &'static Profile {
    &PROFILE
}
