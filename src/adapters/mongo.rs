use crate::domain::model::{Chapter, Course, CourseFilter};
use crate::domain::ports::CourseStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{ClientOptions, ReturnDocument};
use mongodb::{Client, Collection};
use std::time::Duration;

/// MongoDB-backed course store over a typed collection. Documents that do
/// not decode into [`Course`] fail the request with a typed error instead
/// of leaking loosely-typed values.
pub struct MongoStore {
    collection: Collection<Course>,
}

impl MongoStore {
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        server_selection_timeout: Duration,
    ) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.server_selection_timeout = Some(server_selection_timeout);

        let client = Client::with_options(options)?;
        let collection = client.database(database).collection::<Course>(collection);

        tracing::info!(database, collection = collection.name(), "connected to MongoDB");
        Ok(Self { collection })
    }

    /// Drops the whole collection. Seed tool only.
    pub async fn drop_collection(&self) -> Result<()> {
        self.collection.drop().await?;
        Ok(())
    }
}

#[async_trait]
impl CourseStore for MongoStore {
    async fn list_courses(&self, filter: &CourseFilter) -> Result<Vec<Course>> {
        let query = match &filter.domain {
            // Filtering compares the primary domain only.
            Some(domain) => doc! { "domain.0": domain },
            None => doc! {},
        };
        let sort = match filter.sort {
            Some(key) => key.sort_document(),
            // Stable default: ascending id, insertion order for
            // store-generated ids.
            None => doc! { "_id": 1 },
        };

        let cursor = self.collection.find(query).sort(sort).await?;
        let courses = cursor.try_collect().await?;
        Ok(courses)
    }

    async fn find_course(&self, id: &ObjectId) -> Result<Option<Course>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn rate_chapter(
        &self,
        id: &ObjectId,
        chapter_index: usize,
        value: i64,
    ) -> Result<Option<Chapter>> {
        let slot = format!("chapters.{}", chapter_index);

        // The filter pins the chapter slot so a rating never lands on a
        // missing index; filter + $inc run as one atomic store operation.
        let mut filter = doc! { "_id": *id };
        filter.insert(slot.as_str(), doc! { "$exists": true });

        let mut inc = Document::new();
        inc.insert(format!("{}.rating.total", slot), value);
        inc.insert(format!("{}.rating.count", slot), 1_i64);

        let updated = self
            .collection
            .find_one_and_update(filter, doc! { "$inc": inc })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated.and_then(|course| course.chapters.into_iter().nth(chapter_index)))
    }

    async fn insert_courses(&self, courses: Vec<Course>) -> Result<Vec<ObjectId>> {
        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let result = self.collection.insert_many(courses).await?;
        let mut pairs: Vec<_> = result.inserted_ids.into_iter().collect();
        pairs.sort_by_key(|(index, _)| *index);
        Ok(pairs
            .into_iter()
            .filter_map(|(_, id)| id.as_object_id())
            .collect())
    }
}
