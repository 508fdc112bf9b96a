/// Where a service's image comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Pulled from a registry under this reference
    Upstream(&'static str),
    /// Built from source during installation
    CustomBuild,
}

impl ImageSource {
    /// Image reference as shown in the report
    pub fn reference(&self) -> &'static str {
        match self {
            ImageSource::Upstream(image) => *image,
            ImageSource::CustomBuild => "custom build",
        }
    }
}

/// How a service's version is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// Fixed in the compose files
    Pinned(&'static str),
    /// Read from `default.env`, falling back to `default`
    Environment {
        key: &'static str,
        default: &'static str,
    },
}

/// One infrastructure service in the platform's compose stacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerEntry {
    pub name: &'static str,
    pub image: ImageSource,
    pub version: VersionSource,
    pub group: &'static str,
    pub description: &'static str,
}

/// Display order of container groups in the Markdown report
pub const CONTAINER_GROUP_ORDER: &[&str] = &[
    "Core Platform",
    "ELK Stack",
    "Timesketch",
    "Prowler",
    "MISP",
    "Strelka",
    "DFIR-IRIS",
    "Other Tools",
];

const fn upstream(
    name: &'static str,
    image: &'static str,
    version: VersionSource,
    group: &'static str,
    description: &'static str,
) -> ContainerEntry {
    ContainerEntry {
        name,
        image: ImageSource::Upstream(image),
        version,
        group,
        description,
    }
}

const fn env(key: &'static str, default: &'static str) -> VersionSource {
    VersionSource::Environment { key, default }
}

const fn pinned(version: &'static str) -> VersionSource {
    VersionSource::Pinned(version)
}

#[rustfmt::skip]
pub const CONTAINER_CATALOG: &[ContainerEntry] = &[
    // Core Platform
    upstream("nginx", "nginx", env("NGINX_VERSION", "1.19.3-alpine"), "Core Platform", "Reverse proxy"),
    ContainerEntry {
        name: "risx-mssp-backend",
        image: ImageSource::CustomBuild,
        version: pinned("-"),
        group: "Core Platform",
        description: "Backend API container",
    },
    ContainerEntry {
        name: "risx-mssp-frontend",
        image: ImageSource::CustomBuild,
        version: pinned("-"),
        group: "Core Platform",
        description: "Frontend UI container",
    },
    ContainerEntry {
        name: "mysql",
        image: ImageSource::CustomBuild,
        version: pinned("-"),
        group: "Core Platform",
        description: "Database server",
    },
    // ELK Stack
    upstream("elasticsearch", "docker.elastic.co/elasticsearch/elasticsearch", env("ELASTIC_VERSION", "8.15.3"), "ELK Stack", "Search engine"),
    upstream("logstash", "docker.elastic.co/logstash/logstash", env("ELASTIC_VERSION", "8.15.3"), "ELK Stack", "Data processing"),
    upstream("kibana", "docker.elastic.co/kibana/kibana", env("ELASTIC_VERSION", "8.15.3"), "ELK Stack", "Visualization"),
    // Timesketch
    upstream("timesketch-web", "us-docker.pkg.dev/osdfir-registry/timesketch/timesketch", env("TIMESKETCH_VERSION", "20250708"), "Timesketch", "Timeline analysis"),
    upstream("timesketch-worker", "us-docker.pkg.dev/osdfir-registry/timesketch/timesketch", env("TIMESKETCH_VERSION", "20250708"), "Timesketch", "Background workers"),
    upstream("timesketch-postgres", "postgres", env("POSTGRES_VERSION", "15.6-alpine"), "Timesketch", "Database"),
    upstream("opensearch", "opensearchproject/opensearch", env("OPENSEARCH_VERSION", "2.17.0"), "Timesketch", "Search backend"),
    upstream("timesketch-redis", "redis", env("REDIS_VERSION", "7.2-alpine"), "Timesketch", "Caching"),
    // Prowler
    upstream("prowler-api", "prowlercloud/prowler-api", env("PROWLER_API_VERSION", "stable"), "Prowler", "Security assessment API"),
    upstream("prowler-ui", "prowlercloud/prowler-ui", env("PROWLER_UI_VERSION", "latest"), "Prowler", "Security assessment UI"),
    upstream("prowler-postgres", "postgres", pinned("16.3-alpine3.20"), "Prowler", "Database"),
    upstream("prowler-valkey", "valkey/valkey", pinned("7-alpine3.19"), "Prowler", "Cache"),
    upstream("glow", "ghcr.io/charmbracelet/glow", pinned("v2.0"), "Prowler", "README renderer utility"),
    // MISP
    upstream("misp-core", "ghcr.io/misp/misp-docker/misp-core", pinned("latest"), "MISP", "MISP core platform"),
    upstream("misp-modules", "ghcr.io/misp/misp-docker/misp-modules", pinned("latest"), "MISP", "MISP enrichment modules"),
    upstream("misp-mariadb", "mariadb", pinned("10.11"), "MISP", "Database"),
    upstream("misp-valkey", "valkey/valkey", pinned("7.2"), "MISP", "Cache"),
    upstream("misp-smtp", "ixdotai/smtp", pinned("latest"), "MISP", "Email relay"),
    // Strelka
    upstream("strelka-frontend", "target/strelka-frontend", env("STRELKA_VERSION", "0.24.07.09"), "Strelka", "File submission"),
    upstream("strelka-backend", "target/strelka-backend", env("STRELKA_VERSION", "0.24.07.09"), "Strelka", "File analysis"),
    upstream("strelka-manager", "target/strelka-manager", env("STRELKA_VERSION", "0.24.07.09"), "Strelka", "Coordination"),
    upstream("strelka-ui", "target/strelka-ui", pinned("v2.13"), "Strelka", "Web interface"),
    upstream("strelka-redis", "redis", pinned("7.4.0-alpine3.20"), "Strelka", "Coordination/Gatekeeper"),
    upstream("jaeger", "jaegertracing/all-in-one", pinned("1.42"), "Strelka", "Distributed tracing"),
    upstream("strelka-postgresql", "bitnami/postgresql", pinned("11"), "Strelka", "Database"),
    // DFIR-IRIS
    upstream("iriswebapp_app", "ghcr.io/dfir-iris/iriswebapp_app", env("IRIS_VERSION", "v2.4.20"), "DFIR-IRIS", "IR platform"),
    upstream("iriswebapp_db", "ghcr.io/dfir-iris/iriswebapp_db", env("IRIS_VERSION", "v2.4.20"), "DFIR-IRIS", "Database"),
    upstream("iriswebapp_nginx", "ghcr.io/dfir-iris/iriswebapp_nginx", env("IRIS_VERSION", "v2.4.20"), "DFIR-IRIS", "Web server"),
    upstream("rabbitmq", "rabbitmq", pinned("3-management-alpine"), "DFIR-IRIS", "Message queue"),
    // Other Tools
    upstream("cyberchef", "ghcr.io/gchq/cyberchef", env("CYBERCHEF_IMAGE_TAG", "10.19"), "Other Tools", "Data manipulation"),
    ContainerEntry {
        name: "velociraptor",
        image: ImageSource::CustomBuild,
        version: env("VELOCIRAPTOR_VERSION", "v0.74"),
        group: "Other Tools",
        description: "Endpoint visibility",
    },
    upstream("nightingale", "ghcr.io/rajanagori/nightingale", env("NIGHTINGALE_IMAGE_TAG", "v1.0.0"), "Other Tools", "Security testing"),
    upstream("portainer", "portainer/portainer-ce", env("PORTAINER_VERSION", "2.21.0"), "Other Tools", "Container management"),
    upstream("portainer-agent", "portainer/agent", env("PORTAINER_VERSION", "2.21.0"), "Other Tools", "Portainer agent"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(CONTAINER_CATALOG.len(), 38);
    }

    #[test]
    fn test_every_catalog_group_is_in_display_order() {
        for entry in CONTAINER_CATALOG {
            assert!(
                CONTAINER_GROUP_ORDER.contains(&entry.group),
                "{} has unlisted group {}",
                entry.name,
                entry.group
            );
        }
    }

    #[test]
    fn test_custom_build_reference() {
        assert_eq!(ImageSource::CustomBuild.reference(), "custom build");
        assert_eq!(ImageSource::Upstream("redis").reference(), "redis");
    }
}
