use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// A single unit of work in the generated timeline, measured in weeks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GanttTask {
    pub task: String,
    pub start: i32,
    pub end: i32,
}

impl GanttTask {
    pub fn new(task: impl Into<String>, start: i32, end: i32) -> Self {
        Self {
            task: task.into(),
            start,
            end,
        }
    }

    /// Number of weeks covered, inclusive of both ends. Zero when `end < start`.
    pub fn span_weeks(&self) -> u64 {
        let span = i64::from(self.end) - i64::from(self.start) + 1;
        span.max(0) as u64
    }
}

/// Project proposal extracted from model output.
///
/// Only `title` is required. Models routinely answer `"duration": 12` instead of
/// `"duration": "12"`, so `duration` accepts either and is kept as text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProject {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub tools: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub language: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "string_or_number"
    )]
    #[ts(optional)]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub gantt: Option<Vec<GanttTask>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub build_steps: Option<Vec<String>>,
}

impl GeneratedProject {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}
