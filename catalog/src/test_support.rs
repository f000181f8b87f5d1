//! Test-only helpers for constructing catalog fixtures.

use crate::core::catalog::Catalog;
use crate::core::types::{Course, Enrollment};

/// Create a deterministic course with derived title and instructor.
pub fn course(course_id: &str, category: &str) -> Course {
    Course {
        course_id: course_id.to_string(),
        title: format!("{} title", course_id),
        instructor: format!("{} instructor", course_id),
        category: category.to_string(),
    }
}

/// Create an enrollment pair.
pub fn enrollment(student_id: &str, course_id: &str) -> Enrollment {
    Enrollment {
        student_id: student_id.to_string(),
        course_id: course_id.to_string(),
    }
}

/// Catalog preloaded with the given courses, in order.
pub fn catalog_with_courses(courses: Vec<Course>) -> Catalog {
    let mut catalog = Catalog::new();
    for course in courses {
        catalog.add_course(course);
    }
    catalog
}
