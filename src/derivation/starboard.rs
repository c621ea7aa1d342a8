//! Starboard companion descriptor
//!
//! Every derived KubeEnforcer ships with a Starboard deployment. The
//! descriptor is synthesized entirely from the operator defaults - no
//! composite field participates - so it lives in its own function where it
//! can be tested in isolation.

use crate::config::OperatorDefaults;
use crate::crd::{AquaImage, AquaInfrastructure, AquaService, AquaStarboardConfig, AquaStarboardDetails};

/// Build the Starboard descriptor embedded in every derived KubeEnforcer
pub fn default_starboard_details(defaults: &OperatorDefaults) -> AquaStarboardDetails {
    AquaStarboardDetails {
        infrastructure: Some(AquaInfrastructure {
            version: Some(defaults.starboard.version.clone()),
            service_account: Some(defaults.starboard.service_account.clone()),
        }),
        allow_any_version: true,
        config: AquaStarboardConfig {
            image_pull_secret: Some(defaults.starboard.image_pull_secret.clone()),
        },
        starboard_service: Some(AquaService {
            replicas: Some(defaults.starboard.replicas),
            resources: None,
            image_data: Some(AquaImage {
                registry: Some(defaults.starboard.registry.clone()),
                repository: Some(defaults.starboard.repository.clone()),
                tag: None,
                pull_policy: Some("IfNotPresent".to_string()),
            }),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn companion_is_built_purely_from_defaults() {
        let defaults = OperatorDefaults::default();
        let starboard = default_starboard_details(&defaults);

        let infra = starboard.infrastructure.expect("infrastructure set");
        assert_eq!(infra.version.as_deref(), Some("0.15.11"));
        assert_eq!(infra.service_account.as_deref(), Some("starboard-operator"));

        assert!(starboard.allow_any_version);
        assert_eq!(
            starboard.config.image_pull_secret.as_deref(),
            Some("starboard-registry")
        );

        let service = starboard.starboard_service.expect("service set");
        assert_eq!(service.replicas, Some(1));
        let image = service.image_data.expect("image set");
        assert_eq!(image.registry.as_deref(), Some("docker.io/aquasec"));
        assert_eq!(image.repository.as_deref(), Some("starboard-operator"));
        assert_eq!(image.pull_policy.as_deref(), Some("IfNotPresent"));
        assert!(image.tag.is_none());
    }

    #[test]
    fn companion_honors_injected_defaults() {
        let mut defaults = OperatorDefaults::default();
        defaults.starboard.version = "0.16.0".to_string();
        defaults.starboard.replicas = 2;

        let starboard = default_starboard_details(&defaults);
        let infra = starboard.infrastructure.expect("infrastructure set");
        assert_eq!(infra.version.as_deref(), Some("0.16.0"));
        assert_eq!(
            starboard.starboard_service.expect("service set").replicas,
            Some(2)
        );
    }
}
