pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{memory::MemoryStore, mongo::MongoStore};
pub use app::{build_router, AppState};
pub use crate::core::catalog::CatalogService;
pub use domain::model::{Chapter, Course, CourseDetail, CourseFilter, CourseSummary, Rating, SortKey};
pub use utils::error::{CatalogError, Result};
