//! Aqua Operator - resource-derivation layer for the Aqua security platform
//!
//! This crate turns one composite custom resource ([`crd::AquaLightning`])
//! into the subordinate custom resources that dedicated reconcilers deploy
//! as running workloads: an [`crd::AquaKubeEnforcer`] and an
//! [`crd::AquaEnforcer`]. Only the derivation itself lives here - the
//! control loop that watches composites and applies children to a cluster
//! is a separate component and consumes this crate as a library.
//!
//! # Modules
//!
//! - [`crd`] - Custom Resource Definitions (AquaLightning and its children)
//! - [`derivation`] - Pure functions deriving child resources from a composite
//! - [`config`] - Injectable process-wide defaults used during derivation
//! - [`error`] - Error types for the operator

#![deny(missing_docs)]

pub mod config;
pub mod crd;
pub mod derivation;
pub mod error;

pub use error::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// Wire-Format Constants
// =============================================================================
// Collaborating reconcilers parse and match these strings; changing any of
// them breaks compatibility with deployed components.

/// Port the Aqua gateway service listens on
pub const GATEWAY_PORT: i32 = 8443;

/// Key inside the enforcer token secret that holds the credential
pub const ENFORCER_TOKEN_SECRET_KEY: &str = "token";

/// Label key carrying the per-deployment application name
pub const APP_LABEL_KEY: &str = "app";

/// Label key identifying the managing controller
pub const DEPLOYED_BY_LABEL_KEY: &str = "deployedby";

/// Label key back-referencing the composite resource a child was derived from
pub const OPERATOR_CR_LABEL_KEY: &str = "aquasecoperator_cr";

/// Label key classifying the Aqua sub-component a child belongs to
pub const COMPONENT_LABEL_KEY: &str = "aqua.component";

/// Value of the [`DEPLOYED_BY_LABEL_KEY`] label on every derived resource
pub const DEPLOYED_BY: &str = "aqua-operator";
