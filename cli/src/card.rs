use crate::clipboard::Clipboard;
use crate::error::CliError;
use crate::notice::{Notice, Notices};
use crate::render::render_project;
use shared_types::GeneratedProject;

pub const TITLE_COPIED: &str = "Title copied to clipboard!";
pub const FAVORITE_ADDED: &str = "Added to favorites";
pub const FAVORITE_REMOVED: &str = "Removed from favorites";

/// The project currently on screen plus its local favorite flag.
///
/// The flag lives only as long as the card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    project: GeneratedProject,
    favorite: bool,
}

impl ProjectCard {
    pub fn new(project: GeneratedProject) -> Self {
        Self {
            project,
            favorite: false,
        }
    }

    pub fn project(&self) -> &GeneratedProject {
        &self.project
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite
    }

    pub fn render(&self) -> String {
        let mut text = render_project(Some(&self.project));
        if self.is_favorite() {
            text.insert_str(0, "★ ");
        }
        text
    }

    pub fn copy_title(&self, clipboard: &dyn Clipboard, notices: &Notices) -> Result<(), CliError> {
        clipboard.copy(&self.project.title)?;
        notices.push(Notice::success(TITLE_COPIED));
        Ok(())
    }

    pub fn toggle_favorite(&mut self, notices: &Notices) -> bool {
        self.favorite = !self.favorite;
        let message = if self.favorite {
            FAVORITE_ADDED
        } else {
            FAVORITE_REMOVED
        };
        notices.push(Notice::success(message));
        self.favorite
    }
}
