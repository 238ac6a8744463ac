//! Wire types shared with the search backend
//!
//! `Project` is owned by the backend and only ever read by the client, so
//! decoding is lenient: every field may be absent or `null`, scalars of the
//! wrong type are kept as text, and `id` may be a number or a string. The
//! filter enums carry both the parameter text sent to the backend and a
//! human label.

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Backend identifier of a project (numeric or textual)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(serde_json::Number),
    Text(String),
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A project returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: ProjectId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    /// Source label as sent by the backend ("GitHub", "Hugging Face")
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
}

impl Project {
    /// Create a project with the given id and name, other fields empty
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::Number(id.into()),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// Text form of a scalar; `null` is empty, composites keep their JSON text
fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<ProjectId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => ProjectId::default(),
        Value::Number(n) => ProjectId::Number(n),
        other => ProjectId::Text(value_text(other)),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_text)
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter(|item| !item.is_null())
            .map(value_text)
            .collect(),
        Value::Null => Vec::new(),
        single => vec![value_text(single)],
    })
}

/// Source filter applied by the backend
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceFilter {
    /// Projects from every source
    #[default]
    #[serde(rename = "All")]
    #[value(name = "all")]
    All,
    /// Repositories hosted on GitHub
    #[serde(rename = "GitHub")]
    #[value(name = "github")]
    GitHub,
    /// Models and spaces hosted on Hugging Face
    #[serde(rename = "Hugging Face")]
    #[value(name = "hugging-face", alias = "huggingface", alias = "hf")]
    HuggingFace,
}

impl SourceFilter {
    /// All choices in display order
    pub const ALL: [Self; 3] = [Self::All, Self::GitHub, Self::HuggingFace];

    /// Parameter value sent to the backend (also the display label)
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::GitHub => "GitHub",
            Self::HuggingFace => "Hugging Face",
        }
    }
}

impl fmt::Display for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Ordering requested from the backend
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Most stars first
    #[default]
    #[value(name = "stars")]
    Stars,
    /// Fastest growing overall
    #[value(name = "growth")]
    Growth,
    /// Fastest growing over the last week
    #[value(name = "growth_week")]
    GrowthWeek,
    /// Fastest growing over the last month
    #[value(name = "growth_month")]
    GrowthMonth,
}

impl SortOption {
    /// All choices in display order
    pub const ALL: [Self; 4] = [Self::Stars, Self::Growth, Self::GrowthWeek, Self::GrowthMonth];

    /// Parameter value sent to the backend
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Growth => "growth",
            Self::GrowthWeek => "growth_week",
            Self::GrowthMonth => "growth_month",
        }
    }

    /// Human-readable label for menus
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stars => "Most stars",
            Self::Growth => "Fastest growing",
            Self::GrowthWeek => "Fastest growing this week",
            Self::GrowthMonth => "Fastest growing this month",
        }
    }

    /// Compact label for the selector bar
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Stars => "Stars",
            Self::Growth => "Growth",
            Self::GrowthWeek => "Week",
            Self::GrowthMonth => "Month",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_decodes_full_object() {
        let json = r#"{
            "id": 1,
            "name": "ros2-nav",
            "url": "https://github.com/example/ros2-nav",
            "description": "Navigation stack",
            "source": "GitHub",
            "tags": ["ros2", "navigation"]
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.id.to_string(), "1");
        assert_eq!(project.name, "ros2-nav");
        assert_eq!(project.source, "GitHub");
        assert_eq!(project.tags, vec!["ros2", "navigation"]);
    }

    #[test]
    fn test_project_tolerates_missing_and_null_fields() {
        let json = r#"{"id": "hf-42", "name": "arm-policy", "description": null, "tags": null}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.id, ProjectId::Text("hf-42".to_string()));
        assert!(project.description.is_empty());
        assert!(project.url.is_empty());
        assert!(project.tags.is_empty());
    }

    #[test]
    fn test_null_id_and_scalar_text_fields_decode() {
        let json = r#"[
            {"id": null, "name": "ros2-nav", "tags": []},
            {"id": 7, "name": 42, "description": 5, "source": true, "tags": ["arm", null, 3]}
        ]"#;
        let projects: Vec<Project> = serde_json::from_str(json).unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, ProjectId::default());
        assert_eq!(projects[0].name, "ros2-nav");
        assert_eq!(projects[1].id.to_string(), "7");
        assert_eq!(projects[1].name, "42");
        assert_eq!(projects[1].description, "5");
        assert_eq!(projects[1].source, "true");
        assert_eq!(projects[1].tags, vec!["arm", "3"]);
    }

    #[test]
    fn test_source_filter_params() {
        assert_eq!(SourceFilter::All.as_param(), "All");
        assert_eq!(SourceFilter::GitHub.as_param(), "GitHub");
        assert_eq!(SourceFilter::HuggingFace.as_param(), "Hugging Face");
        assert_eq!(SourceFilter::default(), SourceFilter::All);
    }

    #[test]
    fn test_source_filter_value_enum_aliases() {
        assert_eq!(
            SourceFilter::from_str("hf", true).unwrap(),
            SourceFilter::HuggingFace
        );
        assert_eq!(
            SourceFilter::from_str("github", true).unwrap(),
            SourceFilter::GitHub
        );
    }

    #[test]
    fn test_sort_option_params() {
        let params: Vec<&str> = SortOption::ALL.iter().map(|s| s.as_param()).collect();
        assert_eq!(params, vec!["stars", "growth", "growth_week", "growth_month"]);
        assert_eq!(SortOption::default(), SortOption::Stars);
    }

    #[test]
    fn test_sort_option_serde_matches_param() {
        for sort in SortOption::ALL {
            let json = serde_json::to_string(&sort).unwrap();
            assert_eq!(json, format!("\"{}\"", sort.as_param()));
        }
    }
}
