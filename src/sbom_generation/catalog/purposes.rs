use crate::sbom_generation::domain::Ecosystem;

/// Known Python packages and what the platform uses them for.
/// Keys are matched case-sensitively, as written in `requirements.txt`.
pub const PYTHON_PACKAGE_PURPOSES: &[(&str, &str)] = &[
    ("altair", "Data visualization"),
    ("attrs", "Classes without boilerplate"),
    ("beautifulsoup4", "HTML/XML parsing"),
    ("cachetools", "Caching utilities"),
    ("certifi", "SSL certificates"),
    ("cffi", "C Foreign Function Interface"),
    ("charset-normalizer", "Character encoding detection"),
    ("click", "CLI creation toolkit"),
    ("click-plugins", "Click plugins extension"),
    ("colorama", "Cross-platform colored terminal"),
    ("cryptography", "Cryptographic recipes"),
    ("elastic-transport", "Elasticsearch transport"),
    ("elasticsearch", "Elasticsearch client"),
    ("filelock", "File locking"),
    ("google-auth", "Google authentication"),
    ("google-auth-oauthlib", "Google OAuth library"),
    ("grpcio", "gRPC framework"),
    ("grpcio-tools", "gRPC tools"),
    ("idna", "Internationalized domain names"),
    ("Jinja2", "Template engine"),
    ("jsonschema", "JSON schema validation"),
    ("jsonschema-specifications", "JSON schema specs"),
    ("MarkupSafe", "Safe string markup"),
    ("mysql-connector-python", "MySQL database connector"),
    ("narwhals", "DataFrame library adapter"),
    ("networkx", "Graph/network analysis"),
    ("numpy", "Numerical computing"),
    ("oauthlib", "OAuth library"),
    ("packaging", "Python packaging utilities"),
    ("pandas", "Data analysis library"),
    ("protobuf", "Protocol buffers"),
    ("psutil", "Process utilities"),
    ("pyasn1", "ASN.1 library"),
    ("pyasn1_modules", "ASN.1 modules"),
    ("pycparser", "C parser"),
    ("python-dateutil", "Date utilities"),
    ("pytz", "Timezone definitions"),
    ("pyvelociraptor", "Velociraptor API client"),
    ("PyYAML", "YAML parser"),
    ("referencing", "JSON reference resolution"),
    ("requests", "HTTP library"),
    ("requests-file", "File transport for requests"),
    ("requests-oauthlib", "OAuth for requests"),
    ("rpds-py", "Persistent data structures"),
    ("rsa", "RSA implementation"),
    ("shodan", "Shodan API client"),
    ("six", "Python 2/3 compatibility"),
    ("soupsieve", "CSS selectors for BS4"),
    ("timesketch-api-client", "Timesketch API client"),
    ("timesketch-import-client", "Timesketch import client"),
    ("tldextract", "TLD extraction"),
    ("typing_extensions", "Typing backports"),
    ("tzdata", "Timezone data"),
    ("urllib3", "HTTP client"),
    ("xlrd", "Excel file reading"),
    ("XlsxWriter", "Excel file writing"),
    ("leakcheck", "Leak checking API"),
    ("json_repair", "JSON repair utility"),
    ("openai", "OpenAI API client"),
];

/// Known npm packages and what the platform uses them for
pub const NPM_PACKAGE_PURPOSES: &[(&str, &str)] = &[
    ("ajv", "JSON schema validator"),
    ("axios", "HTTP client"),
    ("bcrypt", "Password hashing"),
    ("body-parser", "Request body parsing"),
    ("cors", "Cross-origin resource sharing"),
    ("csv-parser", "CSV parsing"),
    ("csv-writer", "CSV writing"),
    ("dotenv", "Environment variables"),
    ("express", "Web framework"),
    ("knex", "SQL query builder"),
    ("multer", "File upload handling"),
    ("mysql", "MySQL client"),
    ("mysql2", "MySQL client (improved)"),
    ("pg", "PostgreSQL client"),
    ("uuid", "UUID generation"),
    ("xml2js", "XML to JS conversion"),
    ("@types/pg", "PostgreSQL TypeScript types"),
    ("@codemirror/lang-json", "JSON language support"),
    ("@lezer/highlight", "Syntax highlighting"),
    ("@testing-library/jest-dom", "DOM testing utilities"),
    ("@testing-library/react", "React testing utilities"),
    ("@testing-library/user-event", "User event simulation"),
    ("@uiw/codemirror-theme-vscode", "VSCode theme for CodeMirror"),
    ("@uiw/codemirror-themes", "CodeMirror themes"),
    ("@uiw/react-codemirror", "React CodeMirror component"),
    ("@uiw/react-json-view", "JSON viewer component"),
    ("chart.js", "Charting library"),
    ("lottie-web", "Lottie animations"),
    ("path", "Path utilities"),
    ("react", "React framework"),
    ("react-chartjs-2", "React Chart.js wrapper"),
    ("react-dom", "React DOM"),
    ("react-json-view-preview", "JSON preview component"),
    ("react-scripts", "Create React App scripts"),
    ("react-svg", "SVG component"),
    ("web-vitals", "Web performance metrics"),
    ("@babel/plugin-proposal-private-property-in-object", "Babel plugin"),
    ("cross-env", "Cross-platform env vars"),
    ("react-router-dom", "React routing"),
];

/// Purpose of `name` in `ecosystem`, or the ecosystem's generic description
pub fn describe(ecosystem: Ecosystem, name: &str) -> &'static str {
    let table = match ecosystem {
        Ecosystem::Python => PYTHON_PACKAGE_PURPOSES,
        Ecosystem::NodeJs => NPM_PACKAGE_PURPOSES,
    };

    table
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, purpose)| *purpose)
        .unwrap_or_else(|| ecosystem.fallback_description())
}
