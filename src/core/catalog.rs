use crate::core::{Chapter, Course, CourseFilter, CourseStore, SortKey};
use crate::utils::error::{CatalogError, Result};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

/// The four catalog operations over a [`CourseStore`]. Handlers share one
/// instance through the application state; the store handle is built once
/// at startup and read-only afterwards.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CourseStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    pub async fn list_courses(
        &self,
        domain: Option<String>,
        sort: Option<SortKey>,
    ) -> Result<Vec<Course>> {
        let filter = CourseFilter { domain, sort };
        let courses = self.store.list_courses(&filter).await?;
        tracing::debug!(
            count = courses.len(),
            domain = filter.domain.as_deref(),
            sort = ?filter.sort,
            "listed courses"
        );
        Ok(courses)
    }

    pub async fn get_course(&self, id: &str) -> Result<Course> {
        let id = parse_course_id(id)?;
        self.store
            .find_course(&id)
            .await?
            .ok_or(CatalogError::CourseNotFound)
    }

    /// A missing course and a missing chapter are indistinguishable to the
    /// caller: both surface as `Chapter not found`.
    pub async fn get_chapter(&self, id: &str, ordinal: u32) -> Result<Chapter> {
        let id = parse_course_id(id)?;
        let index = chapter_index(ordinal).ok_or(CatalogError::ChapterNotFound)?;
        let course = self
            .store
            .find_course(&id)
            .await?
            .ok_or(CatalogError::ChapterNotFound)?;
        course
            .chapters
            .into_iter()
            .nth(index)
            .ok_or(CatalogError::ChapterNotFound)
    }

    pub async fn rate_chapter(&self, id: &str, ordinal: u32, value: i64) -> Result<Chapter> {
        let course_id = parse_course_id(id)?;
        let index = chapter_index(ordinal).ok_or(CatalogError::ChapterNotFound)?;
        let chapter = self
            .store
            .rate_chapter(&course_id, index, value)
            .await?
            .ok_or(CatalogError::ChapterNotFound)?;
        tracing::info!(
            course = id,
            ordinal,
            value,
            total = chapter.rating.total,
            count = chapter.rating.count,
            "chapter rated"
        );
        Ok(chapter)
    }
}

/// A malformed identifier is a client error, not a missed lookup.
fn parse_course_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| CatalogError::InvalidCourseId {
        value: id.to_string(),
    })
}

/// Ordinals are 1-based and dense; there is no chapter 0.
fn chapter_index(ordinal: u32) -> Option<usize> {
    (ordinal >= 1).then(|| (ordinal - 1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryStore;
    use crate::domain::model::Rating;

    fn fixture_course(name: &str) -> Course {
        Course {
            id: None,
            name: name.to_string(),
            date: 1_690_000_000,
            domain: vec!["mathematics".to_string()],
            chapters: vec![
                Chapter {
                    name: "Chapter One".to_string(),
                    text: "Intro".to_string(),
                    rating: Rating { total: 4, count: 2 },
                },
                Chapter {
                    name: "Chapter Two".to_string(),
                    text: "More".to_string(),
                    rating: Rating::default(),
                },
            ],
            rating: Rating { total: 4, count: 2 },
        }
    }

    async fn service_with_course() -> (CatalogService, ObjectId) {
        let store = Arc::new(MemoryStore::new());
        let ids = store
            .insert_courses(vec![fixture_course("Algebra")])
            .await
            .unwrap();
        (CatalogService::new(store), ids[0])
    }

    #[tokio::test]
    async fn test_get_course_found() {
        let (service, id) = service_with_course().await;
        let course = service.get_course(&id.to_hex()).await.unwrap();
        assert_eq!(course.name, "Algebra");
    }

    #[tokio::test]
    async fn test_get_course_unknown_id_is_not_found() {
        let (service, _) = service_with_course().await;
        let err = service
            .get_course("000000000000000000000000")
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::CourseNotFound));
    }

    #[tokio::test]
    async fn test_get_course_malformed_id_is_client_error() {
        let (service, _) = service_with_course().await;
        let err = service.get_course("not-an-id").await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCourseId { .. }));
    }

    #[tokio::test]
    async fn test_get_chapter_by_ordinal() {
        let (service, id) = service_with_course().await;
        let chapter = service.get_chapter(&id.to_hex(), 2).await.unwrap();
        assert_eq!(chapter.name, "Chapter Two");
    }

    #[tokio::test]
    async fn test_get_chapter_ordinal_zero_is_not_found() {
        let (service, id) = service_with_course().await;
        let err = service.get_chapter(&id.to_hex(), 0).await.unwrap_err();
        assert!(matches!(err, CatalogError::ChapterNotFound));
    }

    #[tokio::test]
    async fn test_get_chapter_of_missing_course_maps_to_chapter_not_found() {
        let (service, _) = service_with_course().await;
        let err = service
            .get_chapter("000000000000000000000000", 1)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::ChapterNotFound));
    }

    #[tokio::test]
    async fn test_rate_chapter_updates_aggregate() {
        let (service, id) = service_with_course().await;
        let chapter = service.rate_chapter(&id.to_hex(), 1, 5).await.unwrap();
        assert_eq!(chapter.rating.total, 9);
        assert_eq!(chapter.rating.count, 3);
    }

    #[tokio::test]
    async fn test_rate_missing_chapter_leaves_store_untouched() {
        let (service, id) = service_with_course().await;
        let err = service.rate_chapter(&id.to_hex(), 990, 5).await.unwrap_err();
        assert!(matches!(err, CatalogError::ChapterNotFound));

        let chapter = service.get_chapter(&id.to_hex(), 1).await.unwrap();
        assert_eq!(chapter.rating.count, 2);
    }
}
