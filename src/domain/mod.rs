pub mod model;
pub mod ports;

pub use model::{Chapter, Course, CourseFilter, CourseSummary, Rating, SortKey};
pub use ports::{ConfigProvider, CourseStore};
