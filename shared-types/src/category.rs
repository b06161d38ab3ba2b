use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Fixed set of project categories offered by the generation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    WebDevelopment,
    MobileApp,
    #[serde(rename = "ai-ml")]
    AiMl,
    DataScience,
    Iot,
    Blockchain,
    Cybersecurity,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 7] = [
        ProjectCategory::WebDevelopment,
        ProjectCategory::MobileApp,
        ProjectCategory::AiMl,
        ProjectCategory::DataScience,
        ProjectCategory::Iot,
        ProjectCategory::Blockchain,
        ProjectCategory::Cybersecurity,
    ];

    /// Slug sent to the server and interpolated into the prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::WebDevelopment => "web-development",
            ProjectCategory::MobileApp => "mobile-app",
            ProjectCategory::AiMl => "ai-ml",
            ProjectCategory::DataScience => "data-science",
            ProjectCategory::Iot => "iot",
            ProjectCategory::Blockchain => "blockchain",
            ProjectCategory::Cybersecurity => "cybersecurity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::WebDevelopment => "Web Development",
            ProjectCategory::MobileApp => "Mobile Application",
            ProjectCategory::AiMl => "AI & Machine Learning",
            ProjectCategory::DataScience => "Data Science",
            ProjectCategory::Iot => "Internet of Things",
            ProjectCategory::Blockchain => "Blockchain",
            ProjectCategory::Cybersecurity => "Cybersecurity",
        }
    }

    pub fn info(&self) -> CategoryInfo {
        CategoryInfo {
            value: self.as_str().to_string(),
            label: self.label().to_string(),
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = ProjectCategory::ALL.iter().map(|c| c.as_str()).collect();
                format!("Unknown category '{}'. Valid categories: {}", s, valid.join(", "))
            })
    }
}

/// Select option for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryInfo {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_slug() {
        for category in ProjectCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("iot".parse::<ProjectCategory>(), Ok(ProjectCategory::Iot));
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "gardening".parse::<ProjectCategory>().unwrap_err();
        assert!(err.contains("Unknown category 'gardening'"));
        assert!(err.contains("ai-ml"));
    }

    #[test]
    fn test_ai_ml_label() {
        assert_eq!(ProjectCategory::AiMl.label(), "AI & Machine Learning");
        assert_eq!(ProjectCategory::AiMl.to_string(), "ai-ml");
    }
}
