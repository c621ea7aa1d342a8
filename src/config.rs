//! Injectable process-wide defaults used during derivation
//!
//! Every value a composite resource can leave unset falls back to one of
//! these defaults. They are held as an explicit configuration value rather
//! than compile-time constants so tests and alternative distributions can
//! inject their own set without rebuilding the operator.

/// Default registry for Aqua platform images
pub const DEFAULT_REGISTRY: &str = "registry.aquasec.com";

/// Latest supported Aqua platform version, used when no version is requested
pub const LATEST_VERSION: &str = "2022.4";

/// Placeholder token a KubeEnforcer registers with until the console issues
/// a real one
pub const DEFAULT_KUBE_ENFORCER_TOKEN: &str = "ke-token";

/// Cluster name reported to the Aqua console when none is configured
pub const DEFAULT_CLUSTER_NAME: &str = "Default-cluster-name";

/// Starboard version deployed alongside the KubeEnforcer
pub const STARBOARD_VERSION: &str = "0.15.11";

/// Service account the Starboard companion runs under
pub const STARBOARD_SERVICE_ACCOUNT: &str = "starboard-operator";

/// Pull secret used for Starboard images
pub const STARBOARD_IMAGE_PULL_SECRET: &str = "starboard-registry";

/// Registry hosting the Starboard image
pub const STARBOARD_REGISTRY: &str = "docker.io/aquasec";

/// Repository of the Starboard image
pub const STARBOARD_REPOSITORY: &str = "starboard-operator";

/// Defaults consumed while deriving child resources
///
/// [`OperatorDefaults::default`] yields the stock platform values;
/// [`OperatorDefaults::from_env`] additionally applies environment
/// overrides for air-gapped and mirror-registry installs.
#[derive(Clone, Debug, PartialEq)]
pub struct OperatorDefaults {
    /// Registry used when a composite supplies no registry override
    pub registry: String,

    /// Image tag used when a composite pins no version
    pub latest_version: String,

    /// Token placed on every derived KubeEnforcer
    pub kube_enforcer_token: String,

    /// Cluster name placed on every derived KubeEnforcer
    pub cluster_name: String,

    /// Defaults for the Starboard companion
    pub starboard: StarboardDefaults,
}

/// Defaults for the Starboard companion deployment
///
/// The companion is synthesized entirely from these values; no composite
/// field participates.
#[derive(Clone, Debug, PartialEq)]
pub struct StarboardDefaults {
    /// Starboard version
    pub version: String,

    /// Service account the companion runs under
    pub service_account: String,

    /// Pull secret for Starboard images
    pub image_pull_secret: String,

    /// Registry hosting the Starboard image
    pub registry: String,

    /// Repository of the Starboard image
    pub repository: String,

    /// Replica count for the companion deployment
    pub replicas: i32,
}

impl Default for OperatorDefaults {
    fn default() -> Self {
        Self {
            registry: DEFAULT_REGISTRY.to_string(),
            latest_version: LATEST_VERSION.to_string(),
            kube_enforcer_token: DEFAULT_KUBE_ENFORCER_TOKEN.to_string(),
            cluster_name: DEFAULT_CLUSTER_NAME.to_string(),
            starboard: StarboardDefaults::default(),
        }
    }
}

impl Default for StarboardDefaults {
    fn default() -> Self {
        Self {
            version: STARBOARD_VERSION.to_string(),
            service_account: STARBOARD_SERVICE_ACCOUNT.to_string(),
            image_pull_secret: STARBOARD_IMAGE_PULL_SECRET.to_string(),
            registry: STARBOARD_REGISTRY.to_string(),
            repository: STARBOARD_REPOSITORY.to_string(),
            replicas: 1,
        }
    }
}

impl OperatorDefaults {
    /// Build defaults with environment overrides applied
    ///
    /// Recognized variables: `AQUA_DEFAULT_REGISTRY`, `AQUA_LATEST_VERSION`,
    /// `AQUA_CLUSTER_NAME`. Empty values are ignored, same as empty
    /// composite overrides.
    pub fn from_env() -> Self {
        let mut defaults = Self::default();
        if let Some(registry) = env_non_empty("AQUA_DEFAULT_REGISTRY") {
            defaults.registry = registry;
        }
        if let Some(version) = env_non_empty("AQUA_LATEST_VERSION") {
            defaults.latest_version = version;
        }
        if let Some(cluster_name) = env_non_empty("AQUA_CLUSTER_NAME") {
            defaults.cluster_name = cluster_name;
        }
        defaults
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
