use ts_rs::TS;

/// Type names accepted by [`generate_typescript_definitions`], in export order
pub const API_TYPE_NAMES: &[&str] = &[
    "GanttTask",
    "GeneratedProject",
    "GenerateProjectRequest",
    "ErrorResponse",
    "HealthResponse",
    "ProjectCategory",
    "CategoryInfo",
    "CategoriesResponse",
];

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let result = match name {
        "GanttTask" => GanttTask::export_to_string()?,
        "GeneratedProject" => GeneratedProject::export_to_string()?,
        "GenerateProjectRequest" => GenerateProjectRequest::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,
        "HealthResponse" => HealthResponse::export_to_string()?,
        "ProjectCategory" => ProjectCategory::export_to_string()?,
        "CategoryInfo" => CategoryInfo::export_to_string()?,
        "CategoriesResponse" => CategoriesResponse::export_to_string()?,
        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in shared-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}
