use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::validation::{optional_text, required_text, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectImage {
    #[schema(example = "https://cdn.example.com/shot-1.png")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl ProjectImage {
    pub fn normalized(self) -> Result<Self, ValidationError> {
        Ok(Self {
            url: required_text("images.url", &self.url)?,
            alt: optional_text(self.alt),
            is_featured: self.is_featured,
        })
    }
}

pub fn normalize_images(images: Vec<ProjectImage>) -> Result<Vec<ProjectImage>, ValidationError> {
    images.into_iter().map(ProjectImage::normalized).collect()
}

/// Trims every entry and drops blank ones.
pub fn normalize_technologies(technologies: Vec<String>) -> Vec<String> {
    technologies
        .into_iter()
        .filter_map(|t| optional_text(Some(t)))
        .collect()
}

pub fn validate_date_range(
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
) -> Result<(), ValidationError> {
    match (start_date, end_date) {
        (Some(start), Some(end)) if start > end => Err(ValidationError::invalid(
            "startDate",
            "must not be after endDate",
        )),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[schema(example = "Portfolio API")]
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub featured_image: Option<String>,
    pub images: Vec<ProjectImage>,
    #[schema(example = json!(["Rust", "PostgreSQL"]))]
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub featured: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Ascending sort key for listings.
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_image_requires_url() {
        let err = ProjectImage {
            url: "  ".to_string(),
            alt: None,
            is_featured: None,
        }
        .normalized()
        .unwrap_err();

        assert_eq!(err, ValidationError::Required("images.url"));
    }

    #[test]
    fn test_image_blank_alt_dropped() {
        let image = ProjectImage {
            url: " https://cdn.example.com/a.png ".to_string(),
            alt: Some(" ".to_string()),
            is_featured: Some(true),
        }
        .normalized()
        .unwrap();

        assert_eq!(image.url, "https://cdn.example.com/a.png");
        assert_eq!(image.alt, None);
        assert_eq!(image.is_featured, Some(true));
    }

    #[test]
    fn test_technologies_trimmed_and_blank_dropped() {
        let techs = normalize_technologies(vec![
            " Rust ".to_string(),
            "".to_string(),
            "Actix".to_string(),
        ]);

        assert_eq!(techs, vec!["Rust", "Actix"]);
    }

    #[test]
    fn test_date_range() {
        let early = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert!(validate_date_range(Some(early), Some(late)).is_ok());
        assert!(validate_date_range(Some(early), Some(early)).is_ok());
        assert!(validate_date_range(Some(late), None).is_ok());
        assert!(validate_date_range(None, None).is_ok());
        assert!(matches!(
            validate_date_range(Some(late), Some(early)),
            Err(ValidationError::Invalid {
                field: "startDate",
                ..
            })
        ));
    }

    #[test]
    fn test_project_serializes_camel_case() {
        let now = Utc::now();
        let project = Project {
            id: Uuid::nil(),
            title: "API".to_string(),
            description: "desc".to_string(),
            long_description: None,
            featured_image: None,
            images: vec![],
            technologies: vec!["Rust".to_string()],
            github_url: Some("https://github.com/x/api".to_string()),
            live_url: None,
            featured: true,
            start_date: None,
            end_date: None,
            order: 3,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["_id"], Uuid::nil().to_string());
        assert_eq!(json["githubUrl"], "https://github.com/x/api");
        assert_eq!(json["order"], 3);
        assert!(json["longDescription"].is_null());
        assert!(json.get("id").is_none());
    }
}
