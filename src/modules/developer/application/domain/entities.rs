use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{optional_text, required_text, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[schema(example = "github")]
    pub platform: String,
    #[schema(example = "https://github.com/ada")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SocialLink {
    pub fn normalized(self) -> Result<Self, ValidationError> {
        Ok(Self {
            platform: required_text("socialLinks.platform", &self.platform)?,
            url: required_text("socialLinks.url", &self.url)?,
            icon: optional_text(self.icon),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[schema(example = "Rust")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// 0 to 100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 90, maximum = 100)]
    pub proficiency: Option<u8>,
}

impl Skill {
    pub const MAX_PROFICIENCY: u8 = 100;

    pub fn normalized(self) -> Result<Self, ValidationError> {
        if let Some(p) = self.proficiency {
            if p > Self::MAX_PROFICIENCY {
                return Err(ValidationError::invalid(
                    "skills.proficiency",
                    format!("must be between 0 and {}", Self::MAX_PROFICIENCY),
                ));
            }
        }

        Ok(Self {
            name: required_text("skills.name", &self.name)?,
            icon: optional_text(self.icon),
            proficiency: self.proficiency,
        })
    }
}

pub fn normalize_social_links(links: Vec<SocialLink>) -> Result<Vec<SocialLink>, ValidationError> {
    links.into_iter().map(SocialLink::normalized).collect()
}

pub fn normalize_skills(skills: Vec<Skill>) -> Result<Vec<Skill>, ValidationError> {
    skills.into_iter().map(Skill::normalized).collect()
}

/// The portfolio owner's public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "Systems Engineer")]
    pub title: String,
    pub bio: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub avatar: Option<String>,
    pub resume: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub skills: Vec<Skill>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
