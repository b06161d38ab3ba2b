use crate::error::CliError;
use shared_types::ProjectCategory;

/// Print the categories accepted by `--category`
pub async fn list_categories() -> Result<(), CliError> {
    println!("{}", format_categories());
    Ok(())
}

fn format_categories() -> String {
    ProjectCategory::ALL
        .iter()
        .map(|c| format!("{:<16} {}", c.as_str(), c.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lists_every_category() {
        let text = format_categories();
        assert_eq!(text.lines().count(), 7);
        assert!(text.lines().any(|l| l.starts_with("ai-ml") && l.ends_with("AI & Machine Learning")));
    }
}
