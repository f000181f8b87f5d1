//! In-memory course and enrollment catalog.
//!
//! This crate maintains a single-owner catalog of courses and student
//! enrollments: two insertion-ordered collections with uniqueness invariants
//! and silent no-op semantics for invalid operations. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (value types, catalog state and
//!   operations, invariant auditing). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (loading and writing the TOML
//!   course offerings file). Isolated to keep the core deterministic.

pub mod core;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
