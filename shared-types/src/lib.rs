pub mod api;
pub mod category;
pub mod project;
pub mod typescript_gen;

pub use typescript_gen::generate_typescript_definitions;

pub use api::{ErrorResponse, GenerateProjectRequest, HealthResponse};
pub use category::{CategoriesResponse, CategoryInfo, ProjectCategory};
pub use project::{GanttTask, GeneratedProject};
