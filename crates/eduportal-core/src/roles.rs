//! Role registry.
//!
//! The set of roles is fixed at build time. Every user carries exactly one
//! [`Role`]; [`Role::SuperAdmin`] is the only role with override semantics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    TechnicalHead,
    Hr,
    Faculty,
    Student,
    Parent,
    OperationsManager,
    ReportingManager,
    AdmissionManager,
    Coordinator,
}

impl Role {
    pub const ALL: &'static [Role] = &[
        Role::SuperAdmin,
        Role::Admin,
        Role::TechnicalHead,
        Role::Hr,
        Role::Faculty,
        Role::Student,
        Role::Parent,
        Role::OperationsManager,
        Role::ReportingManager,
        Role::AdmissionManager,
        Role::Coordinator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::TechnicalHead => "TECHNICAL_HEAD",
            Role::Hr => "HR",
            Role::Faculty => "FACULTY",
            Role::Student => "STUDENT",
            Role::Parent => "PARENT",
            Role::OperationsManager => "OPERATIONS_MANAGER",
            Role::ReportingManager => "REPORTING_MANAGER",
            Role::AdmissionManager => "ADMISSION_MANAGER",
            Role::Coordinator => "COORDINATOR",
        }
    }

    /// Human readable name for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::TechnicalHead => "Technical Head",
            Role::Hr => "HR",
            Role::Faculty => "Faculty",
            Role::Student => "Student",
            Role::Parent => "Parent",
            Role::OperationsManager => "Operations Manager",
            Role::ReportingManager => "Reporting Manager",
            Role::AdmissionManager => "Admission Manager",
            Role::Coordinator => "Coordinator",
        }
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
