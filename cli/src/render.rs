use shared_types::{GanttTask, GeneratedProject};
use std::fmt::Write;

/// Columns available to a Gantt bar
pub const TRACK_WIDTH: usize = 24;
/// Weeks represented by a full track
pub const TIMELINE_WEEKS: u64 = 12;

pub const FILLED_BAR: char = '█';
const EMPTY: char = '░';

/// Width of a task's bar: `(end - start + 1) / 12` of the track, clipped to
/// the track. Reversed ranges get an empty bar.
pub fn bar_width(task: &GanttTask, track_width: usize) -> usize {
    let width = task.span_weeks().saturating_mul(track_width as u64) / TIMELINE_WEEKS;
    width.min(track_width as u64) as usize
}

fn render_bar(task: &GanttTask) -> String {
    let filled = bar_width(task, TRACK_WIDTH);
    let mut bar = String::with_capacity(TRACK_WIDTH * FILLED_BAR.len_utf8());
    bar.extend(std::iter::repeat(FILLED_BAR).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(TRACK_WIDTH - filled));
    bar
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Render the project card as plain text; `None` renders nothing.
pub fn render_project(project: Option<&GeneratedProject>) -> String {
    let project = match project {
        Some(project) => project,
        None => return String::new(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", project.title);

    if let Some(tools) = non_empty(&project.tools) {
        let _ = writeln!(out, "Tools: {}", tools);
    }
    if let Some(language) = non_empty(&project.language) {
        let _ = writeln!(out, "Language: {}", language);
    }
    if let Some(duration) = non_empty(&project.duration) {
        let _ = writeln!(out, "Duration: {} weeks", duration);
    }

    if let Some(gantt) = project.gantt.as_ref().filter(|g| !g.is_empty()) {
        let label_width = gantt.iter().map(|t| t.task.chars().count()).max().unwrap_or(0);
        let _ = writeln!(out, "\nGantt Chart:");
        for task in gantt {
            let _ = writeln!(
                out,
                "  {:<width$}  {}  {}-{} wk",
                task.task,
                render_bar(task),
                task.start,
                task.end,
                width = label_width
            );
        }
    }

    if let Some(steps) = project.build_steps.as_ref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "\nHow to Build:");
        for (i, step) in steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, step);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(line: &str) -> usize {
        line.chars().filter(|c| *c == FILLED_BAR).count()
    }

    #[test]
    fn test_bar_width_is_proportional() {
        assert_eq!(bar_width(&GanttTask::new("a", 1, 3), 24), 6);
        assert_eq!(bar_width(&GanttTask::new("b", 4, 12), 24), 18);
        assert_eq!(bar_width(&GanttTask::new("c", 1, 12), 24), 24);
        assert_eq!(bar_width(&GanttTask::new("d", 5, 5), 12), 1);
    }

    #[test]
    fn test_bar_width_clips_and_empties() {
        assert_eq!(bar_width(&GanttTask::new("long", 1, 30), 24), 24);
        assert_eq!(bar_width(&GanttTask::new("reversed", 6, 2), 24), 0);
    }

    #[test]
    fn test_absent_project_renders_nothing() {
        assert_eq!(render_project(None), "");
    }

    #[test]
    fn test_title_only() {
        let project = GeneratedProject::new("Smart Farm Monitor");
        assert_eq!(render_project(Some(&project)), "Smart Farm Monitor\n");
    }

    #[test]
    fn test_full_card() {
        let project = GeneratedProject {
            title: "AI-Assisted Patient Triage".to_string(),
            tools: Some("Python, Flask".to_string()),
            language: Some("Python".to_string()),
            duration: Some("12".to_string()),
            gantt: Some(vec![
                GanttTask::new("Research", 1, 3),
                GanttTask::new("Build", 4, 12),
            ]),
            build_steps: Some(vec![
                "Step 1: Gather data".to_string(),
                "Step 2: Train model".to_string(),
            ]),
        };

        let text = render_project(Some(&project));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "AI-Assisted Patient Triage");
        assert!(lines.contains(&"Tools: Python, Flask"));
        assert!(lines.contains(&"Language: Python"));
        assert!(lines.contains(&"Duration: 12 weeks"));

        let research = lines.iter().find(|l| l.contains("Research")).unwrap();
        let build = lines.iter().find(|l| l.contains("Build ")).unwrap();
        assert_eq!(filled(research), 6);
        assert_eq!(filled(build), 18);
        assert!(research.ends_with("1-3 wk"));
        assert!(build.ends_with("4-12 wk"));

        let steps_at = lines.iter().position(|l| *l == "How to Build:").unwrap();
        assert_eq!(lines[steps_at + 1], "  1. Step 1: Gather data");
        assert_eq!(lines[steps_at + 2], "  2. Step 2: Train model");
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let project = GeneratedProject {
            gantt: Some(vec![]),
            build_steps: Some(vec![]),
            ..GeneratedProject::new("X")
        };
        let text = render_project(Some(&project));
        assert!(!text.contains("Gantt Chart:"));
        assert!(!text.contains("How to Build:"));
    }

    #[test]
    fn test_empty_metadata_lines_are_omitted() {
        let project = GeneratedProject {
            tools: Some(String::new()),
            language: Some(String::new()),
            duration: Some(String::new()),
            ..GeneratedProject::new("Smart Farm Monitor")
        };
        assert_eq!(render_project(Some(&project)), "Smart Farm Monitor\n");
    }
}
