//! Core types for role reconciliation.
//!
//! Both sources reduce to the same shape: a [`RoleMap`] from role name to
//! [`Role`]. The comparator turns a pair of maps into [`Discrepancy`] values.

use std::collections::BTreeMap;
use std::fmt;

/// A predefined role as described by one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Role name, the comparison key across sources.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Whether the role is granted to everyone in the organization.
    pub platform_default: bool,
    /// Whether the role is granted to organization administrators.
    pub admin_default: bool,
}

/// Roles keyed by name.
///
/// A `BTreeMap` so iteration (and therefore discrepancy emission) order is
/// deterministic: key order, independent of fetch order. Last write wins on
/// key collision. Built fresh on every run; nothing persists.
pub type RoleMap = BTreeMap<String, Role>;

/// The role fields the comparator checks pairwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Free-text description.
    Description,
    /// The platform-default flag.
    PlatformDefault,
    /// The admin-default flag.
    AdminDefault,
}

impl Field {
    /// Human-readable label used in warning messages.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::PlatformDefault => "Platform default",
            Self::AdminDefault => "Admin default",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single finding from comparing the two sources.
///
/// Discrepancies are reported, never raised: any number of them still
/// constitutes a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    /// The role exists in both sources but one field differs.
    FieldMismatch {
        /// Role name.
        name: String,
        /// Which field differs.
        field: Field,
        /// Value on the rbac-config side ("(1)" in messages).
        config_value: String,
        /// Value on the documentation side ("(2)" in messages).
        doc_value: String,
    },
    /// The role exists in rbac-config but not in the documentation.
    MissingFromDocs {
        /// Role name.
        name: String,
    },
    /// The role exists in the documentation but not in rbac-config.
    MissingFromConfig {
        /// Role name.
        name: String,
    },
}

impl Discrepancy {
    /// The warning message for this finding.
    ///
    /// Wording distinguishes the two sources as "(1)" = rbac-config and
    /// "(2)" = Customer Documentation.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::FieldMismatch {
                field: Field::Description,
                config_value,
                doc_value,
                ..
            } => format!(
                "Description from rbac-config (1) and Customer Documentation (2) is not same.\n\t(1) {config_value}\n\t(2) {doc_value}"
            ),
            Self::FieldMismatch {
                field,
                config_value,
                doc_value,
                ..
            } => format!(
                "'{field}' tag from rbac-config (1) and Customer Documentation (2) is not same.\n\t(1) {config_value}\n\t(2) {doc_value}"
            ),
            Self::MissingFromDocs { name } => {
                format!("Role '{name}' from rbac-config is not listed in the Customer Documentation.")
            }
            Self::MissingFromConfig { name } => {
                format!("Role '{name}' from Customer Documentation is not listed in rbac-config repo.")
            }
        }
    }

    /// The role name this finding is about.
    #[must_use]
    pub fn role_name(&self) -> &str {
        match self {
            Self::FieldMismatch { name, .. }
            | Self::MissingFromDocs { name }
            | Self::MissingFromConfig { name } => name,
        }
    }
}
