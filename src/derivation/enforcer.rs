//! Enforcer derivation

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use tracing::debug;

use super::{
    description_annotations, enforcer_token_secret_name, gateway_service_name, non_empty_or,
    provenance_labels, resource_name, resource_namespace,
};
use crate::config::OperatorDefaults;
use crate::crd::{
    AquaEnforcer, AquaEnforcerSpec, AquaGatewayInformation, AquaImage, AquaLightning, AquaSecret,
    AquaService,
};
use crate::{ENFORCER_TOKEN_SECRET_KEY, GATEWAY_PORT, Result};

/// Derive the AquaEnforcer child from a composite resource
///
/// Identity (name, namespace) is inherited from the composite. The gateway
/// host and token-secret reference are synthesized from the composite name;
/// infrastructure, common settings, token, resource requirements and the
/// run-as-non-root / update-approval flags pass through verbatim. Only the
/// service image registry is defaulted.
pub fn derive_enforcer(cr: &AquaLightning, defaults: &OperatorDefaults) -> Result<AquaEnforcer> {
    let name = resource_name(cr)?;
    let namespace = resource_namespace(cr, name)?;
    let section = cr.spec.enforcer.as_ref();

    let registry = non_empty_or(
        section
            .and_then(|s| s.enforcer_service.as_ref())
            .and_then(|svc| svc.image_data.as_ref())
            .and_then(|i| i.registry.as_deref()),
        &defaults.registry,
    );

    let spec = AquaEnforcerSpec {
        infrastructure: section.and_then(|s| s.infrastructure.clone()),
        common: Some(cr.spec.common.clone()),
        gateway: Some(AquaGatewayInformation {
            host: gateway_service_name(name),
            port: GATEWAY_PORT,
        }),
        token: section.and_then(|s| s.token.clone()),
        secret: Some(AquaSecret {
            name: enforcer_token_secret_name(name),
            key: ENFORCER_TOKEN_SECRET_KEY.to_string(),
        }),
        enforcer_service: Some(AquaService {
            replicas: None,
            resources: section
                .and_then(|s| s.enforcer_service.as_ref())
                .and_then(|svc| svc.resources.clone()),
            image_data: Some(AquaImage {
                registry: Some(registry.to_string()),
                ..Default::default()
            }),
        }),
        run_as_non_root: section.and_then(|s| s.run_as_non_root),
        enforcer_update_approved: section.and_then(|s| s.enforcer_update_approved),
    };

    debug!(name, namespace, registry, "derived AquaEnforcer");

    Ok(AquaEnforcer {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            labels: Some(provenance_labels(name, "enforcer", "enforcer")),
            annotations: Some(description_annotations("Deploy Aqua Enforcer")),
            ..Default::default()
        },
        spec,
        status: None,
    })
}
