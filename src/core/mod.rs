pub mod catalog;

pub use crate::domain::model::{Chapter, Course, CourseFilter, CourseSummary, Rating, SortKey};
pub use crate::domain::ports::{ConfigProvider, CourseStore};
pub use crate::utils::error::Result;
