//! AquaLightning Custom Resource Definition
//!
//! The AquaLightning CRD is the composite resource of the operator: one
//! record describing a combined KubeEnforcer + Enforcer deployment. The
//! derivation layer reads it and synthesizes the two child resources; it is
//! never mutated by this crate.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{
    AquaCommon, AquaDeploymentState, AquaDockerRegistry, AquaEnvVar, AquaInfrastructure,
    AquaService, AquaStarboardDetails,
};

/// Specification for an AquaLightning composite deployment
///
/// Everything is optional except `common`: a composite with empty sections
/// still derives valid children, with every field falling back to the
/// operator defaults.
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "operator.aquasec.com",
    version = "v1alpha1",
    kind = "AquaLightning",
    plural = "aqualightnings",
    namespaced,
    status = "AquaLightningStatus",
    printcolumn = r#"{"name":"Status","type":"string","jsonPath":".status.state"}"#,
    printcolumn = r#"{"name":"Age","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct AquaLightningSpec {
    /// Settings shared by every derived child
    pub common: AquaCommon,

    /// KubeEnforcer-specific settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kube_enforcer: Option<LightningKubeEnforcerSpec>,

    /// Enforcer-specific settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcer: Option<LightningEnforcerSpec>,

    /// Opaque checksum over the generated config, used by the reconciler for
    /// change detection; never read during derivation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_map_checksum: Option<String>,
}

/// KubeEnforcer section of the composite spec
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LightningKubeEnforcerSpec {
    /// Infrastructure settings; `version` overrides the derived image tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<AquaInfrastructure>,

    /// Private registry override; `url` overrides the derived image registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_data: Option<AquaDockerRegistry>,

    /// Approve enforcer auto-updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcer_update_approved: Option<bool>,

    /// Skip the operator's version compatibility check
    #[serde(default)]
    pub allow_any_version: bool,

    /// Workload settings for the KubeEnforcer service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kube_enforcer_service: Option<AquaService>,

    /// Extra environment variables for the KubeEnforcer containers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<AquaEnvVar>>,

    /// Require mutual TLS between KubeEnforcer and gateway
    #[serde(default)]
    pub mtls: bool,

    /// Starboard descriptor override, retained for API compatibility; the
    /// derived child always carries the platform defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_starboard: Option<AquaStarboardDetails>,
}

/// Enforcer section of the composite spec
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LightningEnforcerSpec {
    /// Infrastructure settings, passed through to the derived child
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<AquaInfrastructure>,

    /// Auth token the enforcer group registers with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Workload settings; the nested image registry overrides the derived
    /// image registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcer_service: Option<AquaService>,

    /// Extra environment variables for the enforcer containers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envs: Option<Vec<AquaEnvVar>>,

    /// Require mutual TLS between enforcer and gateway
    #[serde(default)]
    pub mtls: bool,

    /// Run enforcer containers as a non-root user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_as_non_root: Option<bool>,

    /// Approve enforcer auto-updates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcer_update_approved: Option<bool>,
}

/// Status for an AquaLightning composite
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct AquaLightningStatus {
    /// Current deployment state, maintained by the reconciler
    #[serde(default)]
    pub state: AquaDeploymentState,
}
