use crate::domain::model::{Chapter, Course, CourseFilter};
use crate::domain::ports::CourseStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

/// In-memory course store with the same observable behavior as the MongoDB
/// adapter. The vector preserves insertion order, which is also the default
/// listing order; the write lock is held across the whole rating
/// read-modify-write, so concurrent submissions cannot lose updates.
///
/// Used by the integration suite and by environments without a MongoDB
/// server.
#[derive(Default)]
pub struct MemoryStore {
    courses: RwLock<Vec<Course>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        let guard = self.courses.read().await;
        let mut courses: Vec<Course> = guard
            .iter()
            .filter(|course| match &filter.domain {
                Some(domain) => course.primary_domain() == Some(domain.as_str()),
                None => true,
            })
            .cloned()
            .collect();

        if let Some(key) = filter.sort {
            key.apply(&mut courses);
        }
        Ok(courses)
    }

    async fn find_course(&self, id: &ObjectId) -> Result<Option<Course>> {
        let guard = self.courses.read().await;
        Ok(guard.iter().find(|course| course.id == Some(*id)).cloned())
    }

    async fn rate_chapter(
        &self,
        id: &ObjectId,
        chapter_index: usize,
        value: i64,
    ) -> Result<Option<Chapter>> {
        let mut guard = self.courses.write().await;
        let chapter = guard
            .iter_mut()
            .find(|course| course.id == Some(*id))
            .and_then(|course| course.chapters.get_mut(chapter_index));

        Ok(chapter.map(|chapter| {
            chapter.rating.total += value;
            chapter.rating.count += 1;
            chapter.clone()
        }))
    }

    async fn insert_courses(&self, courses: Vec<Course>) -> Result<Vec<ObjectId>> {
        let mut guard = self.courses.write().await;
        let mut ids = Vec::with_capacity(courses.len());
        for mut course in courses {
            let id = course.id.unwrap_or_else(ObjectId::new);
            course.id = Some(id);
            ids.push(id);
            guard.push(course);
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Rating;

    fn course(name: &str, domain: &str) -> Course {
        Course {
            id: None,
            name: name.to_string(),
            date: 1_690_000_000,
            domain: vec![domain.to_string(), "general".to_string()],
            chapters: vec![Chapter {
                name: "Intro".to_string(),
                text: "...".to_string(),
                rating: Rating::default(),
            }],
            rating: Rating::default(),
        }
    }

    #[tokio::test]
    async fn test_domain_filter_matches_primary_domain_only() {
        let store = MemoryStore::new();
        store
            .insert_courses(vec![
                course("Algebra", "mathematics"),
                course("Rust", "programming"),
                // "mathematics" as a secondary tag must not match.
                Course {
                    domain: vec!["physics".to_string(), "mathematics".to_string()],
                    ..course("Mechanics", "physics")
                },
            ])
            .await
            .unwrap();

        let filter = CourseFilter {
            domain: Some("mathematics".to_string()),
            sort: None,
        };
        let courses = store.list_courses(&filter).await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name, "Algebra");
    }

    #[tokio::test]
    async fn test_rate_out_of_bounds_returns_none_without_mutation() {
        let store = MemoryStore::new();
        let ids = store
            .insert_courses(vec![course("Algebra", "mathematics")])
            .await
            .unwrap();

        assert!(store.rate_chapter(&ids[0], 989, 5).await.unwrap().is_none());

        let stored = store.find_course(&ids[0]).await.unwrap().unwrap();
        assert_eq!(stored.chapters[0].rating, Rating::default());
    }
}
