//! Component view structs for read model
//!
//! These structs provide a flattened, query-optimized view of component data.

use crate::sbom_generation::domain::ComponentKind;

/// View representation of a software component
#[derive(Debug, Clone)]
pub struct ComponentView {
    pub kind: ComponentKind,
    /// BOM reference identifier
    pub bom_ref: String,
    pub name: String,
    pub version: String,
    /// Package URL (purl)
    pub purl: Option<String>,
    /// `required` or `optional`, libraries from manifests only
    pub scope: Option<String>,
    pub group: String,
    pub description: String,
    pub properties: Vec<PropertyView>,
}

impl ComponentView {
    /// Value of the first property called `name`
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// View representation of an auxiliary property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyView {
    pub name: String,
    pub value: String,
}
