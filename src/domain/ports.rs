use crate::domain::model::{Chapter, Course, CourseFilter};
use crate::utils::error::Result;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

/// Storage port for the course collection. Implementations must keep the
/// rating update atomic: concurrent calls for the same chapter may not lose
/// submissions.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// All courses matching the filter, ordered per its sort key. With no
    /// sort key the order is ascending id (insertion order).
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>>;

    async fn find_course(&self, id: &ObjectId) -> Result<Option<Course>>;

    /// Applies one rating to the chapter at the 0-based index in a single
    /// read-modify-write: `total += value`, `count += 1`. Returns the
    /// updated chapter, or `None` when the course or chapter is missing
    /// (in which case nothing was modified).
    async fn rate_chapter(
        &self,
        id: &ObjectId,
        chapter_index: usize,
        value: i64,
    ) -> Result<Option<Chapter>>;

    /// Bulk insert for the out-of-band seed path; returns the assigned ids.
    async fn insert_courses(&self, courses: Vec<Course>) -> Result<Vec<ObjectId>>;
}

pub trait ConfigProvider: Send + Sync {
    fn mongo_uri(&self) -> &str;
    fn database_name(&self) -> &str;
    fn collection_name(&self) -> &str;
    fn bind_addr(&self) -> String;
    fn server_selection_timeout_secs(&self) -> u64;
}
