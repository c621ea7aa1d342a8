//! Child-resource derivation for AquaLightning composites
//!
//! One pure function per child type maps a composite resource plus the
//! operator defaults to a fully-populated child resource:
//!
//! - [`derive_kube_enforcer`] - synthesizes the [`crate::crd::AquaKubeEnforcer`]
//! - [`derive_enforcer`] - synthesizes the [`crate::crd::AquaEnforcer`]
//!
//! The derivations are independent: neither reads the other's output, both
//! depend only on the composite and the defaults, so they may run in any
//! order or concurrently. Children are built fresh on every call; deriving
//! twice from the same inputs yields identical resources.
//!
//! # Defaulting rule
//!
//! Applied independently per field: a non-empty composite value wins,
//! anything else (unset section, unset field, empty string) falls through to
//! the configured default. There is no all-or-nothing substitution of a
//! whole sub-record.
//!
//! # Naming contract
//!
//! The gateway address, gateway host and token-secret name formats produced
//! here are parsed by collaborating reconcilers - see the helpers below and
//! the constants in the crate root.

mod enforcer;
mod kube_enforcer;
mod starboard;

pub use enforcer::derive_enforcer;
pub use kube_enforcer::derive_kube_enforcer;
pub use starboard::default_starboard_details;

use crate::crd::{AquaLightning, LabelSet};
use crate::error::Error;
use crate::{
    APP_LABEL_KEY, COMPONENT_LABEL_KEY, DEPLOYED_BY, DEPLOYED_BY_LABEL_KEY, GATEWAY_PORT,
    OPERATOR_CR_LABEL_KEY, Result,
};

/// Name of the gateway Service serving a deployment of the given name
pub fn gateway_service_name(name: &str) -> String {
    format!("{name}-gateway")
}

/// In-cluster address ("host:port") of the gateway for a deployment
pub fn gateway_address(name: &str, namespace: &str) -> String {
    format!("{}.{}:{}", gateway_service_name(name), namespace, GATEWAY_PORT)
}

/// Name of the Secret holding the enforcer auth token for a deployment
///
/// The reconciler creates the secret separately under exactly this name;
/// the derivation only computes the reference.
pub fn enforcer_token_secret_name(name: &str) -> String {
    format!("{name}-enforcer-token")
}

/// Extract the composite resource name or return a validation error
pub(crate) fn resource_name(cr: &AquaLightning) -> Result<&str> {
    match cr.metadata.name.as_deref() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(Error::validation("composite resource name required")),
    }
}

/// Extract the composite resource namespace or return a validation error
pub(crate) fn resource_namespace<'a>(cr: &'a AquaLightning, name: &str) -> Result<&'a str> {
    match cr.metadata.namespace.as_deref() {
        Some(namespace) if !namespace.is_empty() => Ok(namespace),
        _ => Err(Error::validation_for_field(
            name,
            "metadata.namespace",
            "composite resource namespace required",
        )),
    }
}

/// Create the provenance labels every derived child carries
///
/// All four keys are synthesized from the composite name; none is taken
/// from user input, so a composite spec cannot tamper with them.
pub(crate) fn provenance_labels(name: &str, app_suffix: &str, component: &str) -> LabelSet {
    let mut labels = LabelSet::new();
    labels.insert(APP_LABEL_KEY.to_string(), format!("{name}-{app_suffix}"));
    labels.insert(DEPLOYED_BY_LABEL_KEY.to_string(), DEPLOYED_BY.to_string());
    labels.insert(OPERATOR_CR_LABEL_KEY.to_string(), name.to_string());
    labels.insert(COMPONENT_LABEL_KEY.to_string(), component.to_string());
    labels
}

/// Create the description annotation attached to a derived child
pub(crate) fn description_annotations(description: &str) -> LabelSet {
    let mut annotations = LabelSet::new();
    annotations.insert("description".to_string(), description.to_string());
    annotations
}

/// Apply the defaulting rule to a single string field
///
/// A non-empty composite value wins; `None` or an empty string falls
/// through to the default. An empty override is never accepted as "set".
pub(crate) fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}
