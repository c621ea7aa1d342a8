//! Supporting types shared by the AquaLightning CRD and its derived children

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Infrastructure settings for an Aqua component
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AquaInfrastructure {
    /// Product version to deploy (e.g., "2022.4")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Service account the component runs under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
}

/// Container image coordinates
///
/// Each field is independently defaultable during derivation: an unset or
/// empty value falls back to the operator defaults.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AquaImage {
    /// Image registry host (e.g., "registry.aquasec.com")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,

    /// Image repository within the registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// Image tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Image pull policy ("Always", "IfNotPresent", "Never")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_policy: Option<String>,
}

/// Workload settings for a deployed Aqua service
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AquaService {
    /// Number of replicas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    /// Resource requirements for the service containers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,

    /// Container image coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<AquaImage>,
}

/// Resource requirements for a container
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct ResourceRequirements {
    /// Resource requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<ResourceQuantity>,

    /// Resource limits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceQuantity>,
}

/// Resource quantity for CPU and memory
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct ResourceQuantity {
    /// CPU quantity (e.g., "100m", "1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,

    /// Memory quantity (e.g., "128Mi", "1Gi")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

/// Environment variable pair injected into a component's containers
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct AquaEnvVar {
    /// Variable name
    pub name: String,

    /// Variable value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Private registry connection details
///
/// Only `url` participates in derivation; the credential fields are consumed
/// by the reconciler when it creates registry pull secrets.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AquaDockerRegistry {
    /// Registry URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Registry username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Registry password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Registry account email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Gateway endpoint reference for an enforcer
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct AquaGatewayInformation {
    /// Gateway host name
    pub host: String,

    /// Gateway port
    pub port: i32,
}

/// Reference to a key inside a Kubernetes secret
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct AquaSecret {
    /// Secret name
    pub name: String,

    /// Key within the secret
    pub key: String,
}

/// Settings shared by every component derived from a composite
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AquaCommon {
    /// Pull secret used for Aqua platform images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pull_secret: Option<String>,
}

/// Connection configuration for a KubeEnforcer deployment
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AquaKubeEnforcerConfig {
    /// Gateway address ("host:port") the KubeEnforcer connects to
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gateway_address: String,

    /// Logical cluster name reported to the Aqua console
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cluster_name: String,

    /// Pull secret used for KubeEnforcer images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pull_secret: Option<String>,
}

/// Pull-secret configuration for the Starboard companion
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AquaStarboardConfig {
    /// Pull secret used for Starboard images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pull_secret: Option<String>,
}

/// Starboard companion deployment accompanying every KubeEnforcer
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AquaStarboardDetails {
    /// Infrastructure settings (version, service account)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<AquaInfrastructure>,

    /// Skip the operator's version compatibility check
    #[serde(default)]
    pub allow_any_version: bool,

    /// Pull-secret configuration
    #[serde(default)]
    pub config: AquaStarboardConfig,

    /// Workload settings for the Starboard service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starboard_service: Option<AquaService>,
}

/// Deployment state reported in resource statuses
///
/// Written exclusively by the reconciler; the derivation layer never
/// touches status.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub enum AquaDeploymentState {
    /// Resource accepted, nothing deployed yet
    #[default]
    #[serde(rename = "Pending")]
    Pending,
    /// Child resources are being applied
    #[serde(rename = "Deploying")]
    Deploying,
    /// All child resources report ready
    #[serde(rename = "Running")]
    Running,
    /// A version change is rolling out
    #[serde(rename = "Update In Progress")]
    UpdateInProgress,
    /// A version change is waiting for manual approval
    #[serde(rename = "Update Pending Approval")]
    UpdatePendingApproval,
    /// Deployment failed; see reconciler events for details
    #[serde(rename = "Failed")]
    Failed,
}

impl std::fmt::Display for AquaDeploymentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Deploying => write!(f, "Deploying"),
            Self::Running => write!(f, "Running"),
            Self::UpdateInProgress => write!(f, "Update In Progress"),
            Self::UpdatePendingApproval => write!(f, "Update Pending Approval"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Label map attached to derived resources
pub type LabelSet = BTreeMap<String, String>;
