//! AquaKubeEnforcer Custom Resource Definition
//!
//! Derived child resource describing a KubeEnforcer deployment. Instances
//! are synthesized by [`crate::derivation::derive_kube_enforcer`] and
//! materialized by a dedicated reconciler.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{
    AquaDeploymentState, AquaImage, AquaInfrastructure, AquaKubeEnforcerConfig, AquaService,
    AquaStarboardDetails,
};

/// Specification for an AquaKubeEnforcer deployment
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "operator.aquasec.com",
    version = "v1alpha1",
    kind = "AquaKubeEnforcer",
    plural = "aquakubeenforcers",
    namespaced,
    status = "AquaKubeEnforcerStatus",
    printcolumn = r#"{"name":"Status","type":"string","jsonPath":".status.state"}"#,
    printcolumn = r#"{"name":"Age","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct AquaKubeEnforcerSpec {
    /// Infrastructure settings (version, service account)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<AquaInfrastructure>,

    /// Gateway connection configuration
    pub config: AquaKubeEnforcerConfig,

    /// Token the KubeEnforcer registers with
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,

    /// Approve enforcer auto-updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcer_update_approved: Option<bool>,

    /// Skip the operator's version compatibility check
    #[serde(default)]
    pub allow_any_version: bool,

    /// KubeEnforcer container image coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<AquaImage>,

    /// Workload settings for the KubeEnforcer service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kube_enforcer_service: Option<AquaService>,

    /// Starboard companion deployed alongside the KubeEnforcer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_starboard: Option<AquaStarboardDetails>,
}

/// Status for an AquaKubeEnforcer
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct AquaKubeEnforcerStatus {
    /// Current deployment state, maintained by the reconciler
    #[serde(default)]
    pub state: AquaDeploymentState,
}
