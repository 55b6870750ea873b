//! # rolecheck
//!
//! Library for reconciling the predefined RBAC role catalog between the
//! Customer Portal documentation and the rbac-config repository.
//!
//! Two sources, one shape: [`DocsSource`] scrapes the predefined-roles table
//! out of the User Access guide, [`ConfigSource`] walks the role files in
//! `RedHatInsights/rbac-config` through the GitHub contents API, and both
//! produce a [`RoleMap`]. [`compare`] turns a pair of maps into
//! [`Discrepancy`] findings; [`report`] logs them at warning level.
//!
//! ## Example
//!
//! ```no_run
//! use rolecheck::{compare, report, ConfigSource, DocsSource};
//!
//! let doc_roles = DocsSource::new().fetch_roles().unwrap();
//! let config_roles = ConfigSource::from_env().unwrap().fetch_roles().unwrap();
//!
//! report(&compare(&config_roles, &doc_roles));
//! ```
//!
//! Fetch failures (network, auth, parse) are terminal errors; discrepancies
//! between the sources are findings, never errors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod config;
pub mod docs;
pub mod error;
pub mod html;
pub mod types;

pub use compare::{compare, report};
pub use config::ConfigSource;
pub use docs::DocsSource;
pub use error::{Error, Result};
pub use types::{Discrepancy, Field, Role, RoleMap};
