//! Custom Resource Definitions for the Aqua operator
//!
//! This module contains the composite AquaLightning CRD, the derived child
//! CRDs, and the supporting types they share.

mod enforcer;
mod kube_enforcer;
mod lightning;
mod types;

pub use enforcer::{AquaEnforcer, AquaEnforcerSpec, AquaEnforcerStatus};
pub use kube_enforcer::{AquaKubeEnforcer, AquaKubeEnforcerSpec, AquaKubeEnforcerStatus};
pub use lightning::{
    AquaLightning, AquaLightningSpec, AquaLightningStatus, LightningEnforcerSpec,
    LightningKubeEnforcerSpec,
};
pub use types::{
    AquaCommon, AquaDeploymentState, AquaDockerRegistry, AquaEnvVar, AquaGatewayInformation,
    AquaImage, AquaInfrastructure, AquaKubeEnforcerConfig, AquaSecret, AquaService,
    AquaStarboardConfig, AquaStarboardDetails, LabelSet, ResourceQuantity, ResourceRequirements,
};
