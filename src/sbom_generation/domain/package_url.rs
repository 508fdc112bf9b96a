use std::fmt;

/// Package URL type segment (`pkg:<type>/...`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurlType {
    Pypi,
    Npm,
    Docker,
    Github,
    Generic,
}

impl PurlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurlType::Pypi => "pypi",
            PurlType::Npm => "npm",
            PurlType::Docker => "docker",
            PurlType::Github => "github",
            PurlType::Generic => "generic",
        }
    }
}

/// Package locator of the form `pkg:<type>/<name>@<version>`.
///
/// The name is stored exactly as given; callers normalise it first
/// (lowercasing PyPI names, percent-encoding image references).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageUrl {
    purl_type: PurlType,
    name: String,
    version: String,
}

impl PackageUrl {
    pub fn new(purl_type: PurlType, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            purl_type,
            name: name.into(),
            version: version.into(),
        }
    }

    /// PyPI locator; names are case-insensitive on PyPI so they are lowercased.
    pub fn pypi(name: &str, version: &str) -> Self {
        Self::new(PurlType::Pypi, name.to_lowercase(), version)
    }

    pub fn npm(name: &str, version: &str) -> Self {
        Self::new(PurlType::Npm, name, version)
    }

    /// Docker locator for an image reference; `/` and other reserved
    /// characters are percent-encoded so the reference stays one segment.
    pub fn docker_image(image: &str, version: &str) -> Self {
        Self::new(PurlType::Docker, urlencoding::encode(image), version)
    }

    pub fn github(source: &str, version: &str) -> Self {
        Self::new(PurlType::Github, source, version)
    }

    /// Generic locator; the display name is lowercased and spaces become dashes.
    pub fn generic(name: &str, version: &str) -> Self {
        Self::new(
            PurlType::Generic,
            name.to_lowercase().replace(' ', "-"),
            version,
        )
    }

    pub fn purl_type(&self) -> PurlType {
        self.purl_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pkg:{}/{}@{}",
            self.purl_type.as_str(),
            self.name,
            self.version
        )
    }
}
