use crate::application::read_models::{
    ApplicationView, ComponentView, PropertyView, SbomMetadataView, SbomReadModel,
};
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::domain::ComponentKind;
use crate::shared::Result;
use serde::Serialize;

const SCHEMA_URL: &str = "http://cyclonedx.org/schema/bom-1.5.schema.json";
const SPEC_VERSION: &str = "1.5";

#[derive(Debug, Serialize)]
struct Bom<'a> {
    #[serde(rename = "$schema")]
    schema: &'static str,
    #[serde(rename = "bomFormat")]
    bom_format: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'static str,
    #[serde(rename = "serialNumber")]
    serial_number: &'a str,
    version: u32,
    metadata: Metadata<'a>,
    components: Vec<Component<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tools: Vec<Tool<'a>>,
    component: Application<'a>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    vendor: &'a str,
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Application<'a> {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(rename = "bom-ref")]
    bom_ref: &'a str,
    name: &'a str,
    version: &'a str,
    description: &'a str,
    licenses: Vec<License<'a>>,
    #[serde(rename = "externalReferences")]
    external_references: Vec<ExternalReference<'a>>,
}

#[derive(Debug, Serialize)]
struct License<'a> {
    license: LicenseContent<'a>,
}

#[derive(Debug, Serialize)]
struct LicenseContent<'a> {
    id: &'a str,
}

#[derive(Debug, Serialize)]
struct ExternalReference<'a> {
    #[serde(rename = "type")]
    reference_type: &'static str,
    url: &'a str,
}

#[derive(Debug, Serialize)]
struct Component<'a> {
    #[serde(rename = "type")]
    component_type: &'static str,
    #[serde(rename = "bom-ref")]
    bom_ref: &'a str,
    name: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'a str>,
    group: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    properties: Vec<Property<'a>>,
}

#[derive(Debug, Serialize)]
struct Property<'a> {
    name: &'a str,
    value: &'a str,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.5 JSON format
///
/// This adapter implements the SbomFormatter port for CycloneDX format.
/// Components are written in collection order, without sorting or deduplication.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let bom = Bom {
            schema: SCHEMA_URL,
            bom_format: "CycloneDX",
            spec_version: SPEC_VERSION,
            serial_number: &model.metadata.serial_number,
            version: 1,
            metadata: self.build_metadata(&model.metadata, &model.application),
            components: model
                .components
                .iter()
                .map(|c| self.build_component(c))
                .collect(),
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxFormatter {
    fn build_metadata<'a>(
        &self,
        metadata: &'a SbomMetadataView,
        application: &'a ApplicationView,
    ) -> Metadata<'a> {
        Metadata {
            timestamp: &metadata.timestamp,
            tools: vec![Tool {
                vendor: &metadata.tool_vendor,
                name: &metadata.tool_name,
                version: &metadata.tool_version,
            }],
            component: Application {
                component_type: ComponentKind::Application.as_str(),
                bom_ref: &application.bom_ref,
                name: &application.name,
                version: &application.version,
                description: &application.description,
                licenses: vec![License {
                    license: LicenseContent {
                        id: &application.license,
                    },
                }],
                external_references: vec![
                    ExternalReference {
                        reference_type: "website",
                        url: &application.website,
                    },
                    ExternalReference {
                        reference_type: "vcs",
                        url: &application.vcs,
                    },
                ],
            },
        }
    }

    fn build_component<'a>(&self, component: &'a ComponentView) -> Component<'a> {
        Component {
            component_type: component.kind.as_str(),
            bom_ref: &component.bom_ref,
            name: &component.name,
            version: &component.version,
            purl: component.purl.as_deref(),
            scope: component.scope.as_deref(),
            group: &component.group,
            description: &component.description,
            properties: component.properties.iter().map(build_property).collect(),
        }
    }
}

fn build_property(property: &PropertyView) -> Property<'_> {
    Property {
        name: &property.name,
        value: &property.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::SbomReadModelBuilder;
    use crate::sbom_generation::catalog::{CONTAINER_CATALOG, EXTERNAL_DATA_SOURCES};
    use crate::sbom_generation::domain::{Component as DomainComponent, EnvironmentDefaults, PackageUrl, Scope};
    use crate::sbom_generation::services::{ContainerResolver, SbomGenerator, StaticComponents};
    use serde_json::Value;

    fn library(name: &str, version: &str, scope: Scope) -> DomainComponent {
        let purl = PackageUrl::npm(name, version);
        DomainComponent::builder(ComponentKind::Library, &purl, name, version)
            .purl(&purl)
            .scope(scope)
            .group("risx-mssp-back")
            .description("Web framework")
            .build()
            .unwrap()
    }

    fn render(components: &[DomainComponent]) -> Value {
        let metadata = SbomGenerator::generate_default_metadata();
        let model = SbomReadModelBuilder::build(components, &metadata, &[]);
        let output = CycloneDxFormatter::new().format(&model).unwrap();
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_document_header() {
        let json = render(&[]);

        assert_eq!(json["$schema"], SCHEMA_URL);
        assert_eq!(json["bomFormat"], "CycloneDX");
        assert_eq!(json["specVersion"], "1.5");
        assert_eq!(json["version"], 1);
        assert!(json["serialNumber"].as_str().unwrap().starts_with("urn:uuid:"));
        assert_eq!(json["components"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_metadata_tool_and_application() {
        let json = render(&[]);
        let metadata = &json["metadata"];

        assert!(metadata["timestamp"].as_str().unwrap().ends_with('Z'));
        assert_eq!(metadata["tools"][0]["vendor"], "10Root");
        assert_eq!(metadata["tools"][0]["name"], "risx-mssp-sbom");

        let application = &metadata["component"];
        assert_eq!(application["type"], "application");
        assert_eq!(application["bom-ref"], "risx-mssp");
        assert_eq!(application["name"], "Risx-MSSP");
        assert_eq!(application["version"], "1.0.0");
        assert_eq!(application["licenses"][0]["license"]["id"], "GPL-3.0-or-later");
        assert_eq!(application["externalReferences"][0]["type"], "website");
        assert_eq!(application["externalReferences"][1]["type"], "vcs");
        assert_eq!(
            application["externalReferences"][1]["url"],
            "https://github.com/10RootOrg/Risx-MSSP.git"
        );
    }

    #[test]
    fn test_library_component_fields() {
        let json = render(&[library("express", "4.18.0", Scope::Required)]);
        let component = &json["components"][0];

        assert_eq!(component["type"], "library");
        assert_eq!(component["bom-ref"], "pkg:npm/express@4.18.0");
        assert_eq!(component["purl"], "pkg:npm/express@4.18.0");
        assert_eq!(component["scope"], "required");
        assert_eq!(component["group"], "risx-mssp-back");
        assert_eq!(component["description"], "Web framework");
        assert!(component.get("properties").is_none());
    }

    #[test]
    fn test_container_and_data_components() {
        let mut components =
            ContainerResolver::resolve(&CONTAINER_CATALOG[..1], &EnvironmentDefaults::new()).unwrap();
        components.extend(StaticComponents::external_data_sources(&EXTERNAL_DATA_SOURCES[..1]).unwrap());

        let json = render(&components);
        let container = &json["components"][0];
        assert_eq!(container["type"], "container");
        assert!(container.get("scope").is_none());
        assert_eq!(container["properties"][0]["name"], "image");

        let data = &json["components"][1];
        assert_eq!(data["type"], "data");
        assert_eq!(data["properties"][0]["name"], "url");
    }

    #[test]
    fn test_components_keep_collection_order_and_duplicates() {
        let components = vec![
            library("zod", "3.22.0", Scope::Required),
            library("axios", "1.6.2", Scope::Optional),
            library("zod", "3.22.0", Scope::Required),
        ];
        let json = render(&components);
        let names: Vec<&str> = json["components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();

        assert_eq!(names, vec!["zod", "axios", "zod"]);
    }

    #[test]
    fn test_field_order_follows_cyclonedx_layout() {
        let metadata = SbomGenerator::generate_default_metadata();
        let model = SbomReadModelBuilder::build(&[], &metadata, &[]);
        let output = CycloneDxFormatter::new().format(&model).unwrap();

        let schema = output.find("\"$schema\"").unwrap();
        let format = output.find("\"bomFormat\"").unwrap();
        let components = output.find("\"components\"").unwrap();
        assert!(schema < format && format < components);
        assert!(output.contains("\n  \"bomFormat\""));
    }
}
