//! AquaEnforcer Custom Resource Definition
//!
//! Derived child resource describing a host Enforcer deployment. Instances
//! are synthesized by [`crate::derivation::derive_enforcer`] and
//! materialized by a dedicated reconciler.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{
    AquaCommon, AquaDeploymentState, AquaGatewayInformation, AquaInfrastructure, AquaSecret,
    AquaService,
};

/// Specification for an AquaEnforcer deployment
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "operator.aquasec.com",
    version = "v1alpha1",
    kind = "AquaEnforcer",
    plural = "aquaenforcers",
    namespaced,
    status = "AquaEnforcerStatus",
    printcolumn = r#"{"name":"Status","type":"string","jsonPath":".status.state"}"#,
    printcolumn = r#"{"name":"Age","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct AquaEnforcerSpec {
    /// Infrastructure settings (version, service account)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<AquaInfrastructure>,

    /// Settings shared with the other children of the same composite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<AquaCommon>,

    /// Gateway endpoint the enforcer connects to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<AquaGatewayInformation>,

    /// Auth token the enforcer group registers with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Secret holding the enforcer token; created by the reconciler under
    /// the name referenced here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<AquaSecret>,

    /// Workload settings for the enforcer daemonset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcer_service: Option<AquaService>,

    /// Run enforcer containers as a non-root user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_as_non_root: Option<bool>,

    /// Approve enforcer auto-updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcer_update_approved: Option<bool>,
}

/// Status for an AquaEnforcer
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct AquaEnforcerStatus {
    /// Current deployment state, maintained by the reconciler
    #[serde(default)]
    pub state: AquaDeploymentState,
}
