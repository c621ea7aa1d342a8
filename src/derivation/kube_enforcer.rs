//! KubeEnforcer derivation

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use tracing::debug;

use super::starboard::default_starboard_details;
use super::{
    description_annotations, gateway_address, non_empty_or, provenance_labels, resource_name,
    resource_namespace,
};
use crate::Result;
use crate::config::OperatorDefaults;
use crate::crd::{
    AquaImage, AquaKubeEnforcer, AquaKubeEnforcerConfig, AquaKubeEnforcerSpec, AquaLightning,
    AquaService,
};

/// Derive the AquaKubeEnforcer child from a composite resource
///
/// Identity (name, namespace) is inherited from the composite. The image
/// registry and tag honor composite overrides and otherwise fall back to
/// the defaults; repository and pull policy are fixed. The gateway address
/// is synthesized from the composite identity, never read from its spec,
/// and the Starboard companion is always attached.
pub fn derive_kube_enforcer(
    cr: &AquaLightning,
    defaults: &OperatorDefaults,
) -> Result<AquaKubeEnforcer> {
    let name = resource_name(cr)?;
    let namespace = resource_namespace(cr, name)?;
    let section = cr.spec.kube_enforcer.as_ref();

    let registry = non_empty_or(
        section
            .and_then(|s| s.registry_data.as_ref())
            .and_then(|r| r.url.as_deref()),
        &defaults.registry,
    );
    let tag = non_empty_or(
        section
            .and_then(|s| s.infrastructure.as_ref())
            .and_then(|i| i.version.as_deref()),
        &defaults.latest_version,
    );

    let spec = AquaKubeEnforcerSpec {
        infrastructure: None,
        config: AquaKubeEnforcerConfig {
            gateway_address: gateway_address(name, namespace),
            cluster_name: defaults.cluster_name.clone(),
            image_pull_secret: cr.spec.common.image_pull_secret.clone(),
        },
        token: defaults.kube_enforcer_token.clone(),
        enforcer_update_approved: section.and_then(|s| s.enforcer_update_approved),
        allow_any_version: section.map(|s| s.allow_any_version).unwrap_or_default(),
        image_data: Some(AquaImage {
            registry: Some(registry.to_string()),
            repository: Some("kube-enforcer".to_string()),
            tag: Some(tag.to_string()),
            pull_policy: Some("Always".to_string()),
        }),
        kube_enforcer_service: Some(AquaService {
            replicas: None,
            resources: section
                .and_then(|s| s.kube_enforcer_service.as_ref())
                .and_then(|svc| svc.resources.clone()),
            image_data: None,
        }),
        deploy_starboard: Some(default_starboard_details(defaults)),
    };

    debug!(name, namespace, registry, tag, "derived AquaKubeEnforcer");

    Ok(AquaKubeEnforcer {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some(provenance_labels(name, "lightning", "kubeenforcer")),
            annotations: Some(description_annotations("Deploy Aqua KubeEnforcer")),
            ..Default::default()
        },
        spec,
        status: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{
        AquaCommon, AquaDockerRegistry, AquaInfrastructure, AquaLightningSpec,
        LightningKubeEnforcerSpec, ResourceQuantity, ResourceRequirements,
    };

    fn lightning(kube_enforcer: Option<LightningKubeEnforcerSpec>) -> AquaLightning {
        AquaLightning {
            metadata: ObjectMeta {
                name: Some("demo".to_string()),
                namespace: Some("aqua".to_string()),
                ..Default::default()
            },
            spec: AquaLightningSpec {
                common: AquaCommon {
                    image_pull_secret: Some("aqua-registry".to_string()),
                },
                kube_enforcer,
                enforcer: None,
                config_map_checksum: None,
            },
            status: None,
        }
    }

    #[test]
    fn identity_is_inherited_from_the_composite() {
        let child = derive_kube_enforcer(&lightning(None), &OperatorDefaults::default())
            .expect("derive");
        assert_eq!(child.metadata.name.as_deref(), Some("demo"));
        assert_eq!(child.metadata.namespace.as_deref(), Some("aqua"));
    }

    #[test]
    fn empty_overrides_fall_back_to_defaults() {
        let section = LightningKubeEnforcerSpec {
            registry_data: Some(AquaDockerRegistry {
                url: Some(String::new()),
                ..Default::default()
            }),
            infrastructure: Some(AquaInfrastructure::default()),
            ..Default::default()
        };
        let child = derive_kube_enforcer(&lightning(Some(section)), &OperatorDefaults::default())
            .expect("derive");
        let image = child.spec.image_data.expect("image set");
        assert_eq!(image.registry.as_deref(), Some("registry.aquasec.com"));
        assert_eq!(image.tag.as_deref(), Some("2022.4"));
    }

    #[test]
    fn composite_registry_and_version_override_defaults() {
        let section = LightningKubeEnforcerSpec {
            registry_data: Some(AquaDockerRegistry {
                url: Some("myregistry.io".to_string()),
                ..Default::default()
            }),
            infrastructure: Some(AquaInfrastructure {
                version: Some("2023.1".to_string()),
                service_account: None,
            }),
            ..Default::default()
        };
        let child = derive_kube_enforcer(&lightning(Some(section)), &OperatorDefaults::default())
            .expect("derive");
        let image = child.spec.image_data.expect("image set");
        assert_eq!(image.registry.as_deref(), Some("myregistry.io"));
        assert_eq!(image.tag.as_deref(), Some("2023.1"));
        // Repository and pull policy are never overridable
        assert_eq!(image.repository.as_deref(), Some("kube-enforcer"));
        assert_eq!(image.pull_policy.as_deref(), Some("Always"));
    }

    #[test]
    fn gateway_address_is_synthesized_from_identity() {
        let child = derive_kube_enforcer(&lightning(None), &OperatorDefaults::default())
            .expect("derive");
        assert_eq!(child.spec.config.gateway_address, "demo-gateway.aqua:8443");
    }

    #[test]
    fn cluster_name_has_no_composite_override_path() {
        let child = derive_kube_enforcer(&lightning(None), &OperatorDefaults::default())
            .expect("derive");
        assert_eq!(child.spec.config.cluster_name, "Default-cluster-name");
    }

    #[test]
    fn pull_secret_comes_from_the_common_section() {
        let child = derive_kube_enforcer(&lightning(None), &OperatorDefaults::default())
            .expect("derive");
        assert_eq!(
            child.spec.config.image_pull_secret.as_deref(),
            Some("aqua-registry")
        );
    }

    #[test]
    fn token_is_the_configured_placeholder() {
        let child = derive_kube_enforcer(&lightning(None), &OperatorDefaults::default())
            .expect("derive");
        assert_eq!(child.spec.token, "ke-token");
    }

    #[test]
    fn update_flags_pass_through_verbatim() {
        let section = LightningKubeEnforcerSpec {
            enforcer_update_approved: Some(true),
            allow_any_version: true,
            ..Default::default()
        };
        let child = derive_kube_enforcer(&lightning(Some(section)), &OperatorDefaults::default())
            .expect("derive");
        assert_eq!(child.spec.enforcer_update_approved, Some(true));
        assert!(child.spec.allow_any_version);
    }

    #[test]
    fn service_resources_pass_through_verbatim() {
        let resources = ResourceRequirements {
            requests: Some(ResourceQuantity {
                cpu: Some("100m".to_string()),
                memory: Some("256Mi".to_string()),
            }),
            limits: None,
        };
        let section = LightningKubeEnforcerSpec {
            kube_enforcer_service: Some(AquaService {
                resources: Some(resources.clone()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let child = derive_kube_enforcer(&lightning(Some(section)), &OperatorDefaults::default())
            .expect("derive");
        let service = child.spec.kube_enforcer_service.expect("service set");
        assert_eq!(service.resources, Some(resources));
    }

    #[test]
    fn starboard_companion_is_always_attached() {
        let child = derive_kube_enforcer(&lightning(None), &OperatorDefaults::default())
            .expect("derive");
        let starboard = child.spec.deploy_starboard.expect("starboard set");
        assert_eq!(starboard, default_starboard_details(&OperatorDefaults::default()));
    }

    #[test]
    fn labels_and_annotations_identify_the_component() {
        let child = derive_kube_enforcer(&lightning(None), &OperatorDefaults::default())
            .expect("derive");
        let labels = child.metadata.labels.expect("labels set");
        assert_eq!(labels["app"], "demo-lightning");
        assert_eq!(labels["deployedby"], "aqua-operator");
        assert_eq!(labels["aquasecoperator_cr"], "demo");
        assert_eq!(labels["aqua.component"], "kubeenforcer");
        let annotations = child.metadata.annotations.expect("annotations set");
        assert_eq!(annotations["description"], "Deploy Aqua KubeEnforcer");
    }

    #[test]
    fn absent_section_derives_a_complete_child() {
        let child = derive_kube_enforcer(&lightning(None), &OperatorDefaults::default())
            .expect("derive");
        assert!(child.spec.image_data.is_some());
        assert!(child.spec.kube_enforcer_service.is_some());
        assert!(child.spec.deploy_starboard.is_some());
        assert!(!child.spec.allow_any_version);
        assert_eq!(child.spec.enforcer_update_approved, None);
    }
}
