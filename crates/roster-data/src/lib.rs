//! Procedurally generated OneRoster records for the mock roster API.
//!
//! This crate owns the record model (organisations, users, courses, classes,
//! enrollments, academic sessions and grading categories) and the generator
//! that populates it. It is deliberately independent of any HTTP framework
//! so the backend can wrap it behind its own query port.
//!
//! # Overview
//!
//! - [`generate_roster`] builds a [`RosterDataset`] with fixed cardinalities.
//! - Cross-references are [`GuidRef`] values assigned round-robin from
//!   collections that were generated earlier.
//! - Identifiers are UUID v4 strings; pass a seed through
//!   [`GeneratorOptions`] to make them reproducible.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use roster_data::{GeneratorOptions, generate_roster};
//!
//! let dataset = generate_roster(&GeneratorOptions::seeded(7), Utc::now());
//! let counts = dataset.counts();
//!
//! assert_eq!(counts.orgs, 10);
//! assert_eq!(counts.users, 1250);
//! assert_eq!(counts.enrollments, 0);
//! ```

mod dataset;
mod generator;
mod identifiers;
mod model;
mod vocabulary;

pub use dataset::{DatasetCounts, RosterDataset};
pub use generator::{
    CATEGORY_COUNT, CLASS_COUNT, COURSE_COUNT, GeneratorOptions, ORG_COUNT, STUDENT_COUNT,
    TEACHER_COUNT, TERM_COUNT, generate_roster,
};
pub use model::{
    AcademicSession, BaseModel, Category, Class, Course, Enrollment, GuidRef, Org, Record, User,
    UserIdentifier,
};
pub use vocabulary::{ClassType, GuidRefType, OrgType, RoleType, SessionType, StatusType};
