/// Worked example embedded in every prompt so the model copies the envelope
const EXAMPLE_FORMAT: &str = r#"{
  "title": "...",
  "tools": "...",
  "language": "...",
  "duration": "...",
  "gantt": [
    { "task": "Task 1", "start": 1, "end": 2 },
    { "task": "Task 2", "start": 3, "end": 4 }
  ],
  "buildSteps": [
    "Step 1: ...",
    "Step 2: ...",
    "Step 3: ..."
  ]
}"#;

/// Build the single instruction sent to the completion service.
///
/// `category` is appended as ` in <category>` only when present and non-empty.
pub fn build_prompt(keyword: &str, category: Option<&str>) -> String {
    let scope = match category.filter(|c| !c.is_empty()) {
        Some(category) => format!(" in {}", category),
        None => String::new(),
    };

    format!(
        r#"Generate 1 short, professional capstone project title for "{keyword}"{scope}. Also provide:
- Tools needed
- Programming language/platform
- Estimated duration (weeks)
- Simple Gantt chart steps in JSON (task: start week, end week)
- Step-by-step guide on how to build the system

Respond **ONLY** in strict JSON format, no extra text, no markdown.
Example format:
{EXAMPLE_FORMAT}"#
    )
}
