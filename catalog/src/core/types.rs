//! Value types stored by the catalog.
//!
//! These types define stable contracts between core components. They are
//! immutable once constructed and carry no behavior beyond identity.

use serde::{Deserialize, Serialize};

/// An offered course, keyed by `course_id`.
///
/// `PartialEq` compares all four fields; catalog membership is decided by
/// `course_id` alone (see [`crate::core::catalog::Catalog::add_course`]).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub course_id: String,
    pub title: String,
    pub instructor: String,
    pub category: String,
}

impl Course {
    /// Placeholder substituted when resolving an enrollment whose course has
    /// been removed from the catalog.
    ///
    /// All fields are empty. The sentinel is never stored; an empty
    /// `course_id` on a stored course is an invariant violation.
    pub fn missing() -> Self {
        Self {
            course_id: String::new(),
            title: String::new(),
            instructor: String::new(),
            category: String::new(),
        }
    }

    /// True if this value is the sentinel returned for orphaned enrollments.
    pub fn is_missing(&self) -> bool {
        self.course_id.is_empty()
    }
}

/// A student's enrollment in a course.
///
/// Student identity is an opaque string; no separate student record exists.
/// The referenced `course_id` may outlive its course (orphaned enrollment).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enrollment {
    pub student_id: String,
    pub course_id: String,
}
