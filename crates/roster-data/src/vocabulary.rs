//! Closed OneRoster vocabularies.
//!
//! Each enum serialises to the exact token used on the wire, so JSON
//! payloads read `"school"`, `"gradingPeriod"` and so on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declare a vocabulary enum together with its wire token mapping.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Token used for this value in JSON payloads.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Lifecycle status carried by every record.
    pub enum StatusType {
        /// The record is live.
        Active => "active",
        /// The record is scheduled for removal by the source system.
        ToBeDeleted => "tobedeleted",
    }
}

vocabulary! {
    /// Kind of organisation.
    pub enum OrgType {
        /// A single school.
        School => "school",
        /// A district grouping several schools.
        District => "district",
    }
}

vocabulary! {
    /// Role a user plays in the roster.
    pub enum RoleType {
        /// Enrolled learner.
        Student => "student",
        /// Teaching staff.
        Teacher => "teacher",
    }
}

vocabulary! {
    /// Kind of academic session.
    pub enum SessionType {
        /// A term within a school year.
        Term => "term",
        /// A semester within a school year.
        Semester => "semester",
        /// A grading period within a term.
        GradingPeriod => "gradingPeriod",
        /// A whole school year.
        SchoolYear => "schoolYear",
    }
}

vocabulary! {
    /// Kind of class.
    pub enum ClassType {
        /// Homeroom class.
        Homeroom => "homeroom",
        /// Timetabled class.
        Scheduled => "scheduled",
    }
}

vocabulary! {
    /// Declared target type of a [`crate::GuidRef`].
    pub enum GuidRefType {
        /// Points at an organisation.
        Org => "org",
        /// Points at an organisation of type school.
        School => "school",
        /// Points at a course.
        Course => "course",
        /// Points at an academic session of type term.
        Term => "term",
        /// Points at a user.
        User => "user",
        /// Points at a class.
        Class => "class",
        /// Points at any academic session.
        AcademicSession => "academicSession",
    }
}
