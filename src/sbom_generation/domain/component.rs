use crate::sbom_generation::domain::PackageUrl;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Version shown when a requirement line carries no version
pub const LATEST_VERSION: &str = "latest";

/// Version shown for containers built from source
pub const UNVERSIONED: &str = "-";

/// Semantic category of an inventoried item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Library,
    Container,
    Data,
    Application,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Library => "library",
            ComponentKind::Container => "container",
            ComponentKind::Data => "data",
            ComponentKind::Application => "application",
        }
    }
}

/// Whether a library is needed at runtime or only for development
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Required,
    Optional,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Required => "required",
            Scope::Optional => "optional",
        }
    }
}

/// Auxiliary name/value pair attached to a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One inventoried item of the SBOM.
///
/// Components are immutable once built; only getters are exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    kind: ComponentKind,
    bom_ref: String,
    name: String,
    version: String,
    purl: Option<String>,
    scope: Option<Scope>,
    group: String,
    description: String,
    properties: Vec<Property>,
}

impl Component {
    /// Starts a component whose identifier is derived from `identity`.
    pub fn builder(
        kind: ComponentKind,
        identity: &PackageUrl,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> ComponentBuilder {
        ComponentBuilder {
            kind,
            bom_ref: identity.to_string(),
            name: name.into(),
            version: version.into(),
            purl: None,
            scope: None,
            group: String::new(),
            description: String::new(),
            properties: Vec::new(),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn bom_ref(&self) -> &str {
        &self.bom_ref
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn purl(&self) -> Option<&str> {
        self.purl.as_deref()
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Value of the first property called `name`
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// Builder for [`Component`]
#[derive(Debug, Clone)]
pub struct ComponentBuilder {
    kind: ComponentKind,
    bom_ref: String,
    name: String,
    version: String,
    purl: Option<String>,
    scope: Option<Scope>,
    group: String,
    description: String,
    properties: Vec<Property>,
}

impl ComponentBuilder {
    pub fn purl(mut self, purl: &PackageUrl) -> Self {
        self.purl = Some(purl.to_string());
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::new(name, value));
        self
    }

    pub fn build(self) -> Result<Component> {
        if self.name.trim().is_empty() {
            return Err(SbomError::Validation {
                message: format!("component name cannot be empty ({})", self.bom_ref),
            }
            .into());
        }

        Ok(Component {
            kind: self.kind,
            bom_ref: self.bom_ref,
            name: self.name,
            version: self.version,
            purl: self.purl,
            scope: self.scope,
            group: self.group,
            description: self.description,
            properties: self.properties,
        })
    }
}
