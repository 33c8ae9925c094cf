use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// A course document as persisted in the store. The identifier is assigned
/// by the store on insert; `domain` is order-significant and its first entry
/// is the primary domain used for filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// Creation time, seconds since the Unix epoch.
    pub date: i64,
    pub domain: Vec<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub rating: Rating,
}

impl Course {
    pub fn primary_domain(&self) -> Option<&str> {
        self.domain.first().map(String::as_str)
    }
}

/// Chapters are positional: the 1-based ordinal used in lookups is the
/// index within the parent course's `chapters` list plus one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub rating: Rating,
}

/// Aggregate rating: running sum of submitted values plus submission count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub total: i64,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Alphabetical,
    Date,
    Rating,
}

impl SortKey {
    /// Sort document for store-side ordering.
    pub fn sort_document(self) -> Document {
        match self {
            SortKey::Alphabetical => doc! { "name": 1 },
            SortKey::Date => doc! { "date": -1 },
            SortKey::Rating => doc! { "rating.total": -1 },
        }
    }

    /// In-process ordering with the same semantics as [`sort_document`]:
    /// name ascending (byte order), date and rating total descending.
    pub fn apply(self, courses: &mut [Course]) {
        match self {
            SortKey::Alphabetical => courses.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Date => courses.sort_by(|a, b| b.date.cmp(&a.date)),
            SortKey::Rating => courses.sort_by(|a, b| b.rating.total.cmp(&a.rating.total)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub domain: Option<String>,
    pub sort: Option<SortKey>,
}

/// Listing response shape: chapters are omitted, the id is rendered as the
/// 24-character hex string clients pass back in course routes.
#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub name: String,
    pub date: i64,
    pub domain: Vec<String>,
    pub rating: Rating,
}

impl From<Course> for CourseSummary {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: course.name,
            date: course.date,
            domain: course.domain,
            rating: course.rating,
        }
    }
}

/// Full course response shape for single-course fetches.
#[derive(Debug, Clone, Serialize)]
pub struct CourseDetail {
    pub id: String,
    pub name: String,
    pub date: i64,
    pub domain: Vec<String>,
    pub chapters: Vec<Chapter>,
    pub rating: Rating,
}

impl From<Course> for CourseDetail {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: course.name,
            date: course.date,
            domain: course.domain,
            chapters: course.chapters,
            rating: course.rating,
        }
    }
}
