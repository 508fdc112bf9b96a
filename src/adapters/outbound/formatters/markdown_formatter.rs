use crate::application::read_models::{ComponentView, RepositoryView, SbomReadModel};
use crate::ports::outbound::SbomFormatter;
use crate::sbom_generation::catalog::CONTAINER_GROUP_ORDER;
use crate::sbom_generation::domain::ComponentKind;
use crate::sbom_generation::services::{EXTERNAL_DATA_SOURCES_GROUP, EXTERNAL_REPOSITORIES_GROUP};
use crate::shared::Result;

const SECTION_BREAK: &str = "---\n\n";

/// Markdown table header for child repository dependencies
const DEPENDENCY_TABLE_HEADER: &str =
    "| Package | Version | Purpose |\n|---------|---------|---------|\n";

const CONTAINER_TABLE_HEADER: &str =
    "| Service | Image | Version | Description |\n|---------|-------|---------|-------------|\n";

const EXTERNAL_REPOSITORY_TABLE_HEADER: &str = "| Repository | Source | Version/Commit | Purpose |\n|------------|--------|----------------|---------|\n";

const DATA_SOURCE_TABLE_HEADER: &str =
    "| Source | URL | Version | Purpose |\n|--------|-----|---------|---------|\n";

const OVERVIEW: &str = "The Risx-MSSP platform is a comprehensive Managed Security Service Provider (MSSP) solution that integrates multiple security tools for incident response, threat intelligence, and security operations.";

const SECURITY_CONSIDERATIONS: &str = "## Security Considerations

### Known Security-Sensitive Dependencies

1. **cryptography** - Handles cryptographic operations
2. **bcrypt** - Password hashing
3. **requests** - HTTP client - ensure proper certificate validation
4. **openai** - External API integration - secure API key handling required

### Recommendations

1. Regularly update dependencies to patch security vulnerabilities
2. Use tools like `npm audit`, `pip-audit`, or Snyk for vulnerability scanning
3. Pin Docker image versions in production
4. Review and monitor CVE databases for known vulnerabilities

";

const REFERENCES: &str = "## References

- [CycloneDX Specification](https://cyclonedx.org/specification/overview/)
- [SPDX License List](https://spdx.org/licenses/)
- [Package URL (purl) Specification](https://github.com/package-url/purl-spec)
";

/// MarkdownFormatter adapter for generating the human-readable SBOM report
///
/// This adapter implements the SbomFormatter port for Markdown format.
/// The summary's Total row counts every component in the read model, so it
/// always matches the number of components in the CycloneDX document.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace("\r\n", " ").replace('\n', " ")
    }

    fn table_row(cells: &[&str]) -> String {
        let escaped: Vec<String> = cells
            .iter()
            .map(|cell| Self::escape_markdown_table_cell(cell))
            .collect();
        format!("| {} |\n", escaped.join(" | "))
    }

    fn render_header(&self, output: &mut String, model: &SbomReadModel) {
        output.push_str("# Software Bill of Materials (SBOM)\n\n");
        output.push_str(&format!("## {} Platform\n\n", model.application.name));
        output.push_str(&format!(
            "**Generated:** {}\n",
            model.metadata.generated_date
        ));
        output.push_str("**Format:** CycloneDX 1.5\n");
        output.push_str(&format!("**License:** {}\n\n", model.application.license));
        output.push_str(SECTION_BREAK);
    }

    fn render_summary(&self, output: &mut String, model: &SbomReadModel) {
        output.push_str("## Overview\n\n");
        output.push_str(OVERVIEW);
        output.push_str("\n\n### Component Summary\n\n");
        output.push_str("| Category | Count |\n|----------|-------|\n");

        for repository in &model.repositories {
            let count = model.components_in_group(&repository.name).count();
            output.push_str(&format!("| {} | {} |\n", repository.title, count));
        }
        let rows = [
            (
                "Container Images",
                model.components_of_kind(ComponentKind::Container).count(),
            ),
            (
                EXTERNAL_REPOSITORIES_GROUP,
                model.components_in_group(EXTERNAL_REPOSITORIES_GROUP).count(),
            ),
            (
                EXTERNAL_DATA_SOURCES_GROUP,
                model.components_in_group(EXTERNAL_DATA_SOURCES_GROUP).count(),
            ),
        ];
        for (category, count) in rows {
            output.push_str(&format!("| {} | {} |\n", category, count));
        }
        output.push_str(&format!(
            "| **Total Components** | **{}** |\n\n",
            model.components.len()
        ));
        output.push_str(SECTION_BREAK);
    }

    fn render_repository_list(&self, output: &mut String, model: &SbomReadModel) {
        if model.repositories.is_empty() {
            return;
        }

        output.push_str("## Child Repositories\n\n");
        for (index, repository) in model.repositories.iter().enumerate() {
            output.push_str(&format!("### {}. {}\n", index + 1, repository.name));
            output.push_str(&format!("- **URL:** {}\n", repository.url));
            output.push_str(&format!("- **Type:** {}\n", repository.kind_description));
            output.push_str(&format!(
                "- **Dependencies:** {} packages\n\n",
                model.components_in_group(&repository.name).count()
            ));
        }
        output.push_str(SECTION_BREAK);
    }

    fn render_repository_dependencies(
        &self,
        output: &mut String,
        model: &SbomReadModel,
        repository: &RepositoryView,
    ) {
        output.push_str(&format!("## {} ({})\n\n", repository.title, repository.name));
        output.push_str(DEPENDENCY_TABLE_HEADER);

        let mut dependencies: Vec<&ComponentView> =
            model.components_in_group(&repository.name).collect();
        dependencies.sort_by_key(|c| c.name.to_lowercase());

        for dependency in dependencies {
            output.push_str(&Self::table_row(&[
                dependency.name.as_str(),
                dependency.version.as_str(),
                dependency.description.as_str(),
            ]));
        }
        output.push('\n');
        output.push_str(SECTION_BREAK);
    }

    /// Container tables in the fixed group order; containers outside it are not listed
    fn render_containers(&self, output: &mut String, model: &SbomReadModel) {
        output.push_str("## Container Images (Infrastructure)\n\n");

        for group in CONTAINER_GROUP_ORDER {
            let containers: Vec<&ComponentView> = model
                .components_of_kind(ComponentKind::Container)
                .filter(|c| c.group == *group)
                .collect();
            if containers.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n\n", group));
            output.push_str(CONTAINER_TABLE_HEADER);
            for container in containers {
                let image = container.property("image").unwrap_or(&container.name);
                output.push_str(&Self::table_row(&[
                    container.name.as_str(),
                    image,
                    container.version.as_str(),
                    container.description.as_str(),
                ]));
            }
            output.push('\n');
        }
        output.push_str(SECTION_BREAK);
    }

    fn render_external_repositories(&self, output: &mut String, model: &SbomReadModel) {
        output.push_str("## External Repositories (Cloned During Installation)\n\n");
        output.push_str(EXTERNAL_REPOSITORY_TABLE_HEADER);

        for repository in model.components_in_group(EXTERNAL_REPOSITORIES_GROUP) {
            let source = repository.property("source").unwrap_or_default();
            output.push_str(&Self::table_row(&[
                repository.name.as_str(),
                source,
                repository.version.as_str(),
                repository.description.as_str(),
            ]));
        }
        output.push('\n');
        output.push_str(SECTION_BREAK);
    }

    fn render_data_sources(&self, output: &mut String, model: &SbomReadModel) {
        output.push_str("## External Data Sources\n\n");
        output.push_str(DATA_SOURCE_TABLE_HEADER);

        for source in model.components_in_group(EXTERNAL_DATA_SOURCES_GROUP) {
            let url = source.property("url").unwrap_or_default();
            output.push_str(&Self::table_row(&[
                source.name.as_str(),
                url,
                source.version.as_str(),
                source.description.as_str(),
            ]));
        }
        output.push('\n');
        output.push_str(SECTION_BREAK);
    }

    fn render_files(&self, output: &mut String, model: &SbomReadModel) {
        output.push_str("## Files\n\n");
        output.push_str("- **sbom.json** - Machine-readable CycloneDX 1.5 format SBOM\n");
        output.push_str("- **SBOM.md** - This human-readable summary\n");
        output.push_str(&format!(
            "- **{}** - Tool to regenerate this SBOM\n\n",
            model.metadata.tool_name
        ));
        output.push_str(SECTION_BREAK);
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for MarkdownFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, model);
        self.render_repository_list(&mut output, model);
        for repository in &model.repositories {
            self.render_repository_dependencies(&mut output, model, repository);
        }
        self.render_containers(&mut output, model);
        self.render_external_repositories(&mut output, model);
        self.render_data_sources(&mut output, model);
        output.push_str(SECURITY_CONSIDERATIONS);
        output.push_str(SECTION_BREAK);
        self.render_files(&mut output, model);
        output.push_str(REFERENCES);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::SbomReadModelBuilder;
    use crate::sbom_generation::catalog::{
        CHILD_REPOSITORIES, CONTAINER_CATALOG, EXTERNAL_DATA_SOURCES, EXTERNAL_REPOSITORIES,
    };
    use crate::sbom_generation::domain::{
        Component, EnvironmentDefaults, PackageUrl, Scope,
    };
    use crate::sbom_generation::services::{
        ContainerResolver, SbomGenerator, StaticComponents,
    };

    fn library(name: &str, version: &str, group: &str, description: &str) -> Component {
        let purl = PackageUrl::npm(name, version);
        Component::builder(ComponentKind::Library, &purl, name, version)
            .purl(&purl)
            .scope(Scope::Required)
            .group(group)
            .description(description)
            .build()
            .unwrap()
    }

    fn full_components() -> Vec<Component> {
        let mut components = vec![
            library("requests", "2.31.0", "risx-mssp-python", "HTTP library"),
            library("zod", "^3.22.0", "risx-mssp-back", "Schema validation"),
            library("Axios", "1.6.2", "risx-mssp-back", "HTTP client"),
            library("cors", "^2.8.5", "risx-mssp-back", "CORS middleware"),
        ];
        components
            .extend(ContainerResolver::resolve(CONTAINER_CATALOG, &EnvironmentDefaults::new()).unwrap());
        components.extend(StaticComponents::external_repositories(EXTERNAL_REPOSITORIES).unwrap());
        components.extend(StaticComponents::external_data_sources(EXTERNAL_DATA_SOURCES).unwrap());
        components
    }

    fn render(components: &[Component]) -> String {
        let metadata = SbomGenerator::generate_default_metadata();
        let model = SbomReadModelBuilder::build(components, &metadata, CHILD_REPOSITORIES);
        MarkdownFormatter::new().format(&model).unwrap()
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        let input = "Text with | pipe and\nnewline";
        let escaped = MarkdownFormatter::escape_markdown_table_cell(input);
        assert_eq!(escaped, "Text with \\| pipe and newline");
    }

    #[test]
    fn test_header_and_summary() {
        let components = full_components();
        let output = render(&components);

        assert!(output.starts_with("# Software Bill of Materials (SBOM)\n\n## Risx-MSSP Platform\n"));
        assert!(output.contains("**Format:** CycloneDX 1.5\n"));
        assert!(output.contains("| Python Dependencies | 1 |\n"));
        assert!(output.contains("| Node.js Backend Dependencies | 3 |\n"));
        assert!(output.contains("| Node.js Frontend Dependencies | 0 |\n"));
        assert!(output.contains(&format!("| Container Images | {} |\n", CONTAINER_CATALOG.len())));
        assert!(output.contains(&format!(
            "| **Total Components** | **{}** |",
            components.len()
        )));
    }

    #[test]
    fn test_repository_list() {
        let output = render(&full_components());

        assert!(output.contains("### 2. risx-mssp-back\n- **URL:** https://github.com/10RootOrg/risx-mssp-back\n- **Type:** Node.js/Express Backend API\n- **Dependencies:** 3 packages\n"));
    }

    #[test]
    fn test_dependencies_sorted_case_insensitively() {
        let output = render(&full_components());

        let axios = output.find("| Axios | 1.6.2 | HTTP client |").unwrap();
        let cors = output.find("| cors | ^2.8.5 | CORS middleware |").unwrap();
        let zod = output.find("| zod | ^3.22.0 | Schema validation |").unwrap();
        assert!(axios < cors && cors < zod);
    }

    #[test]
    fn test_container_groups_follow_fixed_order() {
        let output = render(&full_components());

        let mut last = 0;
        for group in CONTAINER_GROUP_ORDER {
            let position = output.find(&format!("### {}\n", group)).unwrap();
            assert!(position > last, "{} out of order", group);
            last = position;
        }
        assert!(output.contains("| mysql | custom build | - |"));
    }

    #[test]
    fn test_container_outside_group_order_is_omitted() {
        let purl = PackageUrl::new(crate::sbom_generation::domain::PurlType::Docker, "sidecar", "1.0");
        let stray = Component::builder(ComponentKind::Container, &purl, "sidecar", "1.0")
            .group("Experimental")
            .description("Not in any known group")
            .build()
            .unwrap();

        let output = render(&[stray]);

        assert!(!output.contains("sidecar"));
        assert!(output.contains("| Container Images | 1 |"));
        assert!(output.contains("| **Total Components** | **1** |"));
    }

    #[test]
    fn test_external_tables() {
        let output = render(&full_components());

        assert!(output.contains("| docker-elk | deviantony/docker-elk | commit 629aea49 |"));
        assert!(output.contains("| YARA Forge Rules | yara-forge/yara-forge-rules | 20240922 |"));
    }

    #[test]
    fn test_static_sections_in_order() {
        let output = render(&[]);

        let security = output.find("## Security Considerations").unwrap();
        let files = output.find("## Files").unwrap();
        let references = output.find("## References").unwrap();
        assert!(security < files && files < references);
        assert!(output.contains("- **risx-mssp-sbom** - Tool to regenerate this SBOM"));
    }

    #[test]
    fn test_cells_are_escaped() {
        let component = library("odd|name", "1.0", "risx-mssp-back", "multi\nline");
        let output = render(&[component]);

        assert!(output.contains("| odd\\|name | 1.0 | multi line |"));
    }
}
