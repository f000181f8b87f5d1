//! Semantic invariants over an assembled catalog.

use std::collections::HashSet;

use crate::core::catalog::Catalog;

/// Check semantic invariants on a catalog:
/// - No duplicate `course_id` among stored courses
/// - No duplicate (`student_id`, `course_id`) enrollment pair
/// - No stored course with an empty `course_id` (reserved for the sentinel)
/// - No enrollment with an empty `student_id` or `course_id`
///
/// Returns stable, human-readable violation messages; empty means healthy.
/// The mutating operations uphold these invariants themselves, so the audit
/// matters for catalogs assembled via [`Catalog::from_parts`].
///
/// Orphaned enrollments are deliberate behavior, not violations; they are
/// surfaced by [`Catalog::orphaned_enrollments`].
pub fn validate_invariants(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for course in catalog.courses() {
        if course.course_id.is_empty() {
            errors.push("stored course with empty course_id".to_string());
        }
        if !seen_ids.insert(course.course_id.as_str()) {
            errors.push(format!("duplicate course_id '{}'", course.course_id));
        }
    }

    let mut seen_pairs = HashSet::new();
    for enrollment in catalog.enrollments() {
        if enrollment.student_id.is_empty() || enrollment.course_id.is_empty() {
            errors.push(format!(
                "enrollment ('{}', '{}') has an empty field",
                enrollment.student_id, enrollment.course_id
            ));
        }
        if !seen_pairs.insert((
            enrollment.student_id.as_str(),
            enrollment.course_id.as_str(),
        )) {
            errors.push(format!(
                "duplicate enrollment ('{}', '{}')",
                enrollment.student_id, enrollment.course_id
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Course;
    use crate::test_support::{course, enrollment};

    #[test]
    fn empty_catalog_is_healthy() {
        assert!(validate_invariants(&Catalog::new()).is_empty());
    }

    #[test]
    fn catalog_built_through_operations_is_healthy() {
        let mut catalog = Catalog::new();
        catalog.add_course(course("SCALA01", "Programming"));
        catalog.add_course(course("SCALA01", "Design"));
        catalog.enroll_student("alice", "SCALA01");
        catalog.enroll_student("alice", "SCALA01");
        catalog.remove_course(&course("SCALA01", "Programming"));

        assert!(validate_invariants(&catalog).is_empty());
    }

    #[test]
    fn validate_invariants_reports_errors() {
        let catalog = Catalog::from_parts(
            vec![
                course("SCALA01", "Programming"),
                course("SCALA01", "Design"),
                Course::missing(),
            ],
            vec![
                enrollment("alice", "SCALA01"),
                enrollment("alice", "SCALA01"),
                enrollment("", "SCALA01"),
            ],
        );

        let errors = validate_invariants(&catalog);
        assert!(errors.iter().any(|err| err.contains("duplicate course_id")));
        assert!(errors.iter().any(|err| err.contains("empty course_id")));
        assert!(
            errors
                .iter()
                .any(|err| err.contains("duplicate enrollment"))
        );
        assert!(errors.iter().any(|err| err.contains("empty field")));
    }
}
