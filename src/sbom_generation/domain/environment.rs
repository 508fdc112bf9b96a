use std::collections::HashMap;

/// Variable defaults read from the platform's `default.env` file.
///
/// Only used to resolve container image versions; a missing key is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentDefaults {
    values: HashMap<String, String>,
}

impl EnvironmentDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `KEY=VALUE` lines.
    ///
    /// Blank lines, `#` comments and lines without `=` are skipped. The value
    /// is everything after the first `=`, trimmed, with surrounding quotes removed.
    /// A later assignment of the same key wins.
    pub fn parse(content: &str) -> Self {
        let values = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| {
                let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                (key.trim().to_string(), value.to_string())
            })
            .collect();

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for EnvironmentDefaults {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_quoted_values() {
        let env = EnvironmentDefaults::parse(
            r#"
# Versions
ELASTIC_VERSION=8.15.3
NGINX_VERSION="1.25.4-alpine"
IRIS_VERSION = 'v2.4.20'
"#,
        );

        assert_eq!(env.len(), 3);
        assert_eq!(env.get("ELASTIC_VERSION"), Some("8.15.3"));
        assert_eq!(env.get("NGINX_VERSION"), Some("1.25.4-alpine"));
        assert_eq!(env.get("IRIS_VERSION"), Some("v2.4.20"));
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let env = EnvironmentDefaults::parse("JAVA_OPTS=-Xms1g=-Xmx1g");
        assert_eq!(env.get("JAVA_OPTS"), Some("-Xms1g=-Xmx1g"));
    }

    #[test]
    fn test_parse_skips_comments_and_lines_without_equals() {
        let env = EnvironmentDefaults::parse("# KEY=commented\nexport\n\n   \nVALID=1");
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("KEY"), None);
        assert_eq!(env.get("VALID"), Some("1"));
    }

    #[test]
    fn test_parse_empty_value() {
        let env = EnvironmentDefaults::parse("EMPTY=");
        assert_eq!(env.get("EMPTY"), Some(""));
    }

    #[test]
    fn test_last_assignment_wins() {
        let env = EnvironmentDefaults::parse("A=1\nA=2");
        assert_eq!(env.get("A"), Some("2"));
    }

    #[test]
    fn test_empty_defaults() {
        let env = EnvironmentDefaults::new();
        assert!(env.is_empty());
        assert_eq!(env.get("ANYTHING"), None);
    }
}
