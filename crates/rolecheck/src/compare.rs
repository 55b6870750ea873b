//! Field and membership comparison between the two role maps.
//!
//! Detection and reporting are separate: [`compare`] is a pure function
//! returning findings, [`report`] logs them. Field comparison is exact
//! value equality; descriptions are not normalized, so minor formatting
//! differences do surface as mismatches.

use crate::types::{Discrepancy, Field, RoleMap};

/// Compare the two maps and return every discrepancy.
///
/// The config map drives the field comparison: for each name present in
/// both, description and the two flags are checked pairwise, one finding
/// per unequal field. Names on only one side yield a membership finding.
/// Emission follows key order: the config pass first, then the
/// docs-only pass.
#[must_use]
pub fn compare(config_roles: &RoleMap, doc_roles: &RoleMap) -> Vec<Discrepancy> {
    let mut findings = Vec::new();

    for (name, config_role) in config_roles {
        let Some(doc_role) = doc_roles.get(name) else {
            findings.push(Discrepancy::MissingFromDocs { name: name.clone() });
            continue;
        };
        if config_role.description != doc_role.description {
            findings.push(Discrepancy::FieldMismatch {
                name: name.clone(),
                field: Field::Description,
                config_value: config_role.description.clone(),
                doc_value: doc_role.description.clone(),
            });
        }
        if config_role.platform_default != doc_role.platform_default {
            findings.push(Discrepancy::FieldMismatch {
                name: name.clone(),
                field: Field::PlatformDefault,
                config_value: config_role.platform_default.to_string(),
                doc_value: doc_role.platform_default.to_string(),
            });
        }
        if config_role.admin_default != doc_role.admin_default {
            findings.push(Discrepancy::FieldMismatch {
                name: name.clone(),
                field: Field::AdminDefault,
                config_value: config_role.admin_default.to_string(),
                doc_value: doc_role.admin_default.to_string(),
            });
        }
    }

    for name in doc_roles.keys() {
        if !config_roles.contains_key(name) {
            findings.push(Discrepancy::MissingFromConfig { name: name.clone() });
        }
    }

    findings
}

/// Log every finding at warning level.
///
/// Findings are the intended output of a successful run; any number of them
/// leaves the run successful.
pub fn report(findings: &[Discrepancy]) {
    for finding in findings {
        log::warn!("{}", finding.message());
    }
}
