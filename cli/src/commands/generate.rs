//! Generate a project and optionally act on the resulting card

use crate::card::ProjectCard;
use crate::client::HttpProjectSource;
use crate::clipboard::{Clipboard, Osc52Clipboard};
use crate::error::CliError;
use crate::form::{FormInput, GenerationForm};
use crate::notice::{Notice, Notices};
use shared_types::ProjectCategory;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub keyword: Option<String>,
    pub category: Option<ProjectCategory>,
    pub interactive: bool,
    pub json: bool,
}

/// Action typed at the interactive prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Copy,
    Favorite,
    Next,
    Quit,
}

impl CardAction {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "c" | "copy" => Some(CardAction::Copy),
            "f" | "fav" | "favorite" => Some(CardAction::Favorite),
            "n" | "next" => Some(CardAction::Next),
            "q" | "quit" | "exit" => Some(CardAction::Quit),
            _ => None,
        }
    }
}

/// The form plus whatever card is currently displayed
pub struct GenerationSession {
    form: GenerationForm,
    card: Option<ProjectCard>,
}

impl GenerationSession {
    pub fn new(form: GenerationForm) -> Self {
        Self { form, card: None }
    }

    pub fn card(&self) -> Option<&ProjectCard> {
        self.card.as_ref()
    }

    pub fn notices(&self) -> &Notices {
        self.form.notices()
    }

    /// Submit the form. The displayed card only changes on success.
    pub async fn generate(&mut self, input: &FormInput) -> Result<&ProjectCard, CliError> {
        let project = self.form.submit(input).await?;
        Ok(&*self.card.insert(ProjectCard::new(project)))
    }

    /// Apply one card action. Returns `false` once the user asked to quit.
    pub async fn apply(
        &mut self,
        action: CardAction,
        input: &FormInput,
        clipboard: &dyn Clipboard,
    ) -> Result<bool, CliError> {
        match action {
            CardAction::Copy => {
                if let Some(card) = &self.card {
                    card.copy_title(clipboard, self.form.notices())?;
                }
            }
            CardAction::Favorite => {
                if let Some(card) = self.card.as_mut() {
                    card.toggle_favorite(self.form.notices());
                }
            }
            CardAction::Next => {
                // Failure is already reported as a notice and the old card stays
                if let Err(e) = self.generate(input).await {
                    debug!(error = %e, "Next project request failed");
                }
            }
            CardAction::Quit => return Ok(false),
        }
        Ok(true)
    }
}

pub async fn generate_project(
    server: Option<String>,
    options: &GenerateOptions,
) -> Result<(), CliError> {
    let source = Arc::new(HttpProjectSource::new(server)?);
    let notices = Arc::new(Notices::echoing());
    let mut session = GenerationSession::new(GenerationForm::new(source, notices));

    // One buffer for the whole run so lines read ahead by the keyword prompt
    // still reach the action loop
    let mut stdin = BufReader::new(tokio::io::stdin());
    let keyword = match &options.keyword {
        Some(keyword) => keyword.clone(),
        None => prompt_keyword(&mut stdin).await?,
    };
    let input = FormInput::new(keyword, options.category);

    let card = session.generate(&input).await?;
    let mut stdout = std::io::stdout();
    print_card(&mut stdout, card, options.json)?;

    if options.interactive {
        let clipboard = Osc52Clipboard::stdout();
        run_actions(&mut session, &input, &clipboard, &mut stdin, &mut stdout, options.json).await?;
    }

    Ok(())
}

async fn prompt_keyword<R>(reader: &mut R) -> Result<String, CliError>
where
    R: AsyncBufRead + Unpin,
{
    let mut stderr = tokio::io::stderr();
    stderr.write_all(b"Keyword or field of study: ").await?;
    stderr.flush().await?;

    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_card<W: Write>(out: &mut W, card: &ProjectCard, json: bool) -> Result<(), CliError> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(card.project())?)?;
    } else {
        write!(out, "{}", card.render())?;
    }
    out.flush()?;
    Ok(())
}

/// Read actions line by line until `quit` or end of input.
pub async fn run_actions<R, W>(
    session: &mut GenerationSession,
    input: &FormInput,
    clipboard: &dyn Clipboard,
    reader: R,
    out: &mut W,
    json: bool,
) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    loop {
        write!(out, "\n[c]opy title  [f]avorite  [n]ext  [q]uit > ")?;
        out.flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let action = match CardAction::parse(&line) {
            Some(action) => action,
            None => {
                session
                    .notices()
                    .push(Notice::info(format!("Unknown action: {}", line.trim())));
                continue;
            }
        };

        let before = session.card().cloned();
        if !session.apply(action, input, clipboard).await? {
            break;
        }

        if let Some(card) = session.card() {
            if before.as_ref() != Some(card) {
                writeln!(out)?;
                print_card(out, card, json)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{FAVORITE_ADDED, TITLE_COPIED};
    use crate::clipboard::MemoryClipboard;
    use crate::form::tests::MockProjectSource;
    use crate::form::{GENERATION_FAILED, KEYWORD_MISSING};
    use crate::render::FILLED_BAR;
    use shared_types::{GanttTask, GeneratedProject};

    fn healthcare_project() -> GeneratedProject {
        GeneratedProject {
            title: "AI-Assisted Patient Triage System".to_string(),
            tools: Some("Python, TensorFlow, Flask".to_string()),
            language: Some("Python".to_string()),
            duration: Some("12".to_string()),
            gantt: Some(vec![
                GanttTask::new("Research & design", 1, 3),
                GanttTask::new("Model and API", 4, 12),
            ]),
            build_steps: Some(vec![
                "Step 1: Collect triage datasets".to_string(),
                "Step 2: Train the classifier".to_string(),
                "Step 3: Deploy behind a REST API".to_string(),
            ]),
        }
    }

    fn session(source: Arc<MockProjectSource>) -> GenerationSession {
        GenerationSession::new(GenerationForm::new(source, Arc::new(Notices::new())))
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(CardAction::parse("c"), Some(CardAction::Copy));
        assert_eq!(CardAction::parse(" Favorite "), Some(CardAction::Favorite));
        assert_eq!(CardAction::parse("n"), Some(CardAction::Next));
        assert_eq!(CardAction::parse("quit"), Some(CardAction::Quit));
        assert_eq!(CardAction::parse("x"), None);
    }

    #[tokio::test]
    async fn test_healthcare_ai_end_to_end() {
        let source = MockProjectSource::replying(vec![Ok(healthcare_project())]);
        let mut session = session(source.clone());
        let input = FormInput::new("Healthcare AI", Some(ProjectCategory::AiMl));

        let text = session.generate(&input).await.unwrap().render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "AI-Assisted Patient Triage System");

        let bars: Vec<usize> = lines
            .iter()
            .filter(|l| l.ends_with(" wk"))
            .map(|l| l.chars().filter(|c| *c == FILLED_BAR).count())
            .collect();
        assert_eq!(bars, vec![6, 18]);

        let steps_at = lines.iter().position(|l| *l == "How to Build:").unwrap();
        assert!(lines[steps_at + 1].starts_with("  1. Step 1"));
        assert!(lines[steps_at + 2].starts_with("  2. Step 2"));
        assert!(lines[steps_at + 3].starts_with("  3. Step 3"));
        assert_eq!(lines.len(), steps_at + 4);

        let requests = source.requests.lock().unwrap();
        assert_eq!(requests[0].keyword.as_deref(), Some("Healthcare AI"));
        assert_eq!(requests[0].category.as_deref(), Some("ai-ml"));
    }

    #[tokio::test]
    async fn test_empty_keyword_end_to_end() {
        let source = MockProjectSource::replying(vec![Ok(healthcare_project())]);
        let mut session = session(source.clone());

        let result = session.generate(&FormInput::new("", None)).await;

        assert!(matches!(result, Err(CliError::Validation(_))));
        assert!(session.card().is_none());
        assert_eq!(source.call_count(), 0);
        assert_eq!(session.notices().last(), Some(Notice::error(KEYWORD_MISSING)));
    }

    #[tokio::test]
    async fn test_failed_next_keeps_current_card() {
        let source = MockProjectSource::replying(vec![
            Ok(GeneratedProject::new("First")),
            Err(CliError::Communication("HTTP 500".to_string())),
        ]);
        let mut session = session(source.clone());
        let input = FormInput::new("Robotics", None);
        let clipboard = MemoryClipboard::default();

        session.generate(&input).await.unwrap();
        assert!(session.apply(CardAction::Next, &input, &clipboard).await.unwrap());

        assert_eq!(session.card().unwrap().project().title, "First");
        assert_eq!(session.notices().last(), Some(Notice::error(GENERATION_FAILED)));
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn test_interactive_actions() {
        let source = MockProjectSource::replying(vec![
            Ok(GeneratedProject::new("First")),
            Ok(GeneratedProject::new("Second")),
        ]);
        let mut session = session(source.clone());
        let input = FormInput::new("Robotics", None);
        let clipboard = MemoryClipboard::default();
        session.generate(&input).await.unwrap();

        let mut out = Vec::new();
        run_actions(
            &mut session,
            &input,
            &clipboard,
            &b"f\nc\nbogus\nn\nq\nc\n"[..],
            &mut out,
            false,
        )
        .await
        .unwrap();

        let messages: Vec<String> = session
            .notices()
            .all()
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert!(messages.contains(&FAVORITE_ADDED.to_string()));
        assert!(messages.contains(&TITLE_COPIED.to_string()));
        assert!(messages.contains(&"Unknown action: bogus".to_string()));

        assert_eq!(clipboard.contents.lock().unwrap().as_deref(), Some("First"));
        assert_eq!(session.card().unwrap().project().title, "Second");
        assert!(!session.card().unwrap().is_favorite());
        assert_eq!(source.call_count(), 2);

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("★ First"));
        assert!(printed.contains("Second"));
    }

    #[tokio::test]
    async fn test_prompt_and_actions_share_one_reader() {
        let source = MockProjectSource::replying(vec![Ok(GeneratedProject::new("Smart Farm"))]);
        let mut session = session(source.clone());
        let clipboard = MemoryClipboard::default();
        // A buffered reader fills from the whole piped input on the first read
        let mut reader = BufReader::new(&b"IoT agriculture\nf\nc\nq\n"[..]);

        let keyword = prompt_keyword(&mut reader).await.unwrap();
        assert_eq!(keyword, "IoT agriculture");

        let input = FormInput::new(keyword, None);
        session.generate(&input).await.unwrap();
        let mut out = Vec::new();
        run_actions(&mut session, &input, &clipboard, &mut reader, &mut out, false)
            .await
            .unwrap();

        assert!(session.card().unwrap().is_favorite());
        assert_eq!(clipboard.contents.lock().unwrap().as_deref(), Some("Smart Farm"));
        assert_eq!(source.requests.lock().unwrap()[0].keyword.as_deref(), Some("IoT agriculture"));
    }
}
