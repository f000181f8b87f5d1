//! Catalog state and operations.

use tracing::{debug, warn};

use crate::core::types::{Course, Enrollment};

/// In-memory catalog of courses and student enrollments.
///
/// Both collections preserve insertion order. Every operation is a total,
/// immediate transformation of the two collections: invalid inputs are
/// silent no-ops or empty/absent results, never errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a catalog directly from collections, bypassing the
    /// uniqueness checks of [`Self::add_course`] and [`Self::enroll_student`].
    ///
    /// Callers own the result's health; audit it with
    /// [`crate::core::invariants::validate_invariants`].
    pub fn from_parts(courses: Vec<Course>, enrollments: Vec<Enrollment>) -> Self {
        Self {
            courses,
            enrollments,
        }
    }

    /// Add a course unless one with the same `course_id` is already stored.
    ///
    /// The duplicate check is by `course_id` alone, so this path can never
    /// violate the unique-id invariant. Lookups assume at most one match.
    pub fn add_course(&mut self, course: Course) {
        if self.is_course_available(&course.course_id) {
            warn!(course_id = %course.course_id, "course id already present, ignoring add");
            return;
        }
        debug!(course_id = %course.course_id, category = %course.category, "course added");
        self.courses.push(course);
    }

    /// Remove every stored course sharing the argument's `course_id`.
    ///
    /// Enrollments referencing the removed course are left in place (no
    /// cascade); they resolve to [`Course::missing`] in
    /// [`Self::get_student_enrollments`].
    pub fn remove_course(&mut self, course: &Course) {
        let before = self.courses.len();
        self.courses
            .retain(|stored| stored.course_id != course.course_id);
        if self.courses.len() == before {
            warn!(course_id = %course.course_id, "course not present, ignoring remove");
        } else {
            debug!(course_id = %course.course_id, "course removed");
        }
    }

    /// True iff a course with this id is stored.
    pub fn is_course_available(&self, course_id: &str) -> bool {
        self.courses
            .iter()
            .any(|course| course.course_id == course_id)
    }

    /// First stored course with this id, or `None`.
    pub fn get_course(&self, course_id: &str) -> Option<&Course> {
        self.courses
            .iter()
            .find(|course| course.course_id == course_id)
    }

    /// All courses whose `category` equals the argument exactly, in stored
    /// order. Unknown categories yield an empty list.
    pub fn find_courses_by_category(&self, category: &str) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|course| course.category == category)
            .collect()
    }

    /// Enroll a student into an existing course.
    ///
    /// No-op when the course does not exist or the pair is already enrolled.
    pub fn enroll_student(&mut self, student_id: &str, course_id: &str) {
        if !self.is_course_available(course_id) {
            warn!(student_id, course_id, "course not available, ignoring enroll");
            return;
        }
        if self.is_student_enrolled(student_id, course_id) {
            warn!(student_id, course_id, "pair already enrolled, ignoring enroll");
            return;
        }
        debug!(student_id, course_id, "student enrolled");
        self.enrollments.push(Enrollment {
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
        });
    }

    /// Remove every enrollment matching both fields.
    pub fn unenroll_student(&mut self, student_id: &str, course_id: &str) {
        let before = self.enrollments.len();
        self.enrollments.retain(|enrollment| {
            !(enrollment.student_id == student_id && enrollment.course_id == course_id)
        });
        if self.enrollments.len() == before {
            warn!(student_id, course_id, "pair not enrolled, ignoring unenroll");
        } else {
            debug!(student_id, course_id, "student unenrolled");
        }
    }

    /// True iff exactly this (student, course) pair is enrolled.
    pub fn is_student_enrolled(&self, student_id: &str, course_id: &str) -> bool {
        self.enrollments.iter().any(|enrollment| {
            enrollment.student_id == student_id && enrollment.course_id == course_id
        })
    }

    /// Resolve every enrollment of `student_id` to its course, in stored
    /// order.
    ///
    /// An enrollment whose course has been removed resolves to
    /// [`Course::missing`] instead of being dropped, so the result length
    /// always equals the student's enrollment count. Returns owned values
    /// because the sentinel has no stored referent.
    pub fn get_student_enrollments(&self, student_id: &str) -> Vec<Course> {
        self.enrollments
            .iter()
            .filter(|enrollment| enrollment.student_id == student_id)
            .map(|enrollment| {
                self.get_course(&enrollment.course_id)
                    .cloned()
                    .unwrap_or_else(Course::missing)
            })
            .collect()
    }

    /// Student ids enrolled in `course_id`, in stored order.
    pub fn students_enrolled_in(&self, course_id: &str) -> Vec<&str> {
        self.enrollments
            .iter()
            .filter(|enrollment| enrollment.course_id == course_id)
            .map(|enrollment| enrollment.student_id.as_str())
            .collect()
    }

    /// Enrollments whose referenced course is no longer stored.
    pub fn orphaned_enrollments(&self) -> Vec<&Enrollment> {
        self.enrollments
            .iter()
            .filter(|enrollment| !self.is_course_available(&enrollment.course_id))
            .collect()
    }

    /// Stored courses, insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Stored enrollments, insertion order.
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn enrollment_count(&self) -> usize {
        self.enrollments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{course, enrollment};

    #[test]
    fn add_course_ignores_duplicate_id_with_different_fields() {
        let mut catalog = Catalog::new();
        catalog.add_course(course("SCALA01", "Programming"));

        let mut imposter = course("SCALA01", "Design");
        imposter.title = "another title".to_string();
        catalog.add_course(imposter);

        assert_eq!(catalog.course_count(), 1);
        let stored = catalog.get_course("SCALA01").expect("course");
        assert_eq!(stored.category, "Programming");
    }

    #[test]
    fn remove_course_removes_all_id_matches() {
        // from_parts can hold duplicate ids; remove must clear every match.
        let catalog_courses = vec![
            course("SCALA01", "Programming"),
            course("DESIGN01", "Design"),
            course("SCALA01", "Archive"),
        ];
        let mut catalog = Catalog::from_parts(catalog_courses, Vec::new());

        catalog.remove_course(&course("SCALA01", "Programming"));

        assert!(!catalog.is_course_available("SCALA01"));
        assert_eq!(catalog.course_count(), 1);
        assert!(catalog.is_course_available("DESIGN01"));
    }

    #[test]
    fn remove_course_on_absent_id_is_noop() {
        let mut catalog = Catalog::new();
        catalog.add_course(course("SCALA01", "Programming"));
        catalog.remove_course(&course("PYTHON01", "Programming"));
        assert_eq!(catalog.course_count(), 1);
    }

    #[test]
    fn get_course_picks_first_in_stored_order() {
        let mut first = course("SCALA01", "Programming");
        first.title = "first".to_string();
        let mut second = course("SCALA01", "Programming");
        second.title = "second".to_string();
        let catalog = Catalog::from_parts(vec![first, second], Vec::new());

        assert_eq!(catalog.get_course("SCALA01").expect("course").title, "first");
    }

    #[test]
    fn enroll_requires_existing_course() {
        let mut catalog = Catalog::new();
        catalog.enroll_student("alice", "GHOST01");
        assert!(!catalog.is_student_enrolled("alice", "GHOST01"));
        assert_eq!(catalog.enrollment_count(), 0);
    }

    #[test]
    fn enroll_is_idempotent_per_pair() {
        let mut catalog = Catalog::new();
        catalog.add_course(course("SCALA01", "Programming"));

        catalog.enroll_student("alice", "SCALA01");
        catalog.enroll_student("alice", "SCALA01");

        assert_eq!(catalog.enrollment_count(), 1);
        assert_eq!(catalog.get_student_enrollments("alice").len(), 1);
    }

    #[test]
    fn unenroll_leaves_unrelated_pairs_alone() {
        let mut catalog = Catalog::new();
        catalog.add_course(course("SCALA01", "Programming"));
        catalog.add_course(course("DESIGN01", "Design"));
        catalog.enroll_student("alice", "SCALA01");
        catalog.enroll_student("alice", "DESIGN01");
        catalog.enroll_student("bob", "SCALA01");

        catalog.unenroll_student("alice", "SCALA01");

        assert!(!catalog.is_student_enrolled("alice", "SCALA01"));
        assert!(catalog.is_student_enrolled("alice", "DESIGN01"));
        assert!(catalog.is_student_enrolled("bob", "SCALA01"));
    }

    #[test]
    fn orphaned_enrollment_resolves_to_sentinel() {
        let mut catalog = Catalog::new();
        catalog.add_course(course("SCALA01", "Programming"));
        catalog.enroll_student("alice", "SCALA01");

        catalog.remove_course(&course("SCALA01", "Programming"));

        // Orphan persists: the pair still reports enrolled.
        assert!(catalog.is_student_enrolled("alice", "SCALA01"));
        let resolved = catalog.get_student_enrollments("alice");
        assert_eq!(resolved.len(), 1);
        assert!(resolved[0].is_missing());
        assert_eq!(
            catalog.orphaned_enrollments(),
            vec![&enrollment("alice", "SCALA01")]
        );
    }

    #[test]
    fn students_enrolled_in_preserves_stored_order() {
        let mut catalog = Catalog::new();
        catalog.add_course(course("SCALA01", "Programming"));
        catalog.enroll_student("bob", "SCALA01");
        catalog.enroll_student("alice", "SCALA01");

        assert_eq!(catalog.students_enrolled_in("SCALA01"), vec!["bob", "alice"]);
    }
}
