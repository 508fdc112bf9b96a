/// The top-level application the SBOM describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDescriptor {
    pub bom_ref: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    /// SPDX license identifier
    pub license: &'static str,
    pub website: &'static str,
    pub vcs: &'static str,
}

pub const PLATFORM: PlatformDescriptor = PlatformDescriptor {
    bom_ref: "risx-mssp",
    name: "Risx-MSSP",
    version: "1.0.0",
    description: "Managed Security Service Provider Platform",
    license: "GPL-3.0-or-later",
    website: "https://github.com/10RootOrg/Risx-MSSP",
    vcs: "https://github.com/10RootOrg/Risx-MSSP.git",
};
