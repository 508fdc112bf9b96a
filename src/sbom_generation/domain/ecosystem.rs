/// Dependency ecosystem of a child repository; selects the manifest parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    /// Flat `requirements.txt` list
    Python,
    /// `package.json` with dependency maps
    NodeJs,
}

impl Ecosystem {
    /// Manifest file expected at the repository root
    pub fn manifest_file(&self) -> &'static str {
        match self {
            Ecosystem::Python => "requirements.txt",
            Ecosystem::NodeJs => "package.json",
        }
    }

    /// Description used when a package has no entry in the purpose table
    pub fn fallback_description(&self) -> &'static str {
        match self {
            Ecosystem::Python => "Python package",
            Ecosystem::NodeJs => "Node.js package",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Ecosystem::Python => "Python",
            Ecosystem::NodeJs => "Node.js",
        }
    }
}
