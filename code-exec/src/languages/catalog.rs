use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::error::Error;

/// Known languages plus the alias and default tables used to resolve them.
///
/// Built once at startup and shared read-only between submissions.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    languages: Vec<String>,
    members: HashSet<String>,
    aliases: HashMap<String, String>,
    defaults: HashMap<String, String>,
}

impl LanguageCatalog {
    /// Creates a catalog, keeping the first occurrence of each language id
    /// in load order.
    ///
    /// Fails when a default entry names a language the catalog does not
    /// know, or redirects one it does. Aliases may point anywhere; an alias that leads nowhere simply
    /// fails resolution.
    pub fn new<I, S>(
        languages: I,
        aliases: HashMap<String, String>,
        defaults: HashMap<String, String>,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut members = HashSet::new();
        let languages = languages
            .into_iter()
            .map(|id| id.as_ref().trim().to_string())
            .filter(|id| !id.is_empty() && members.insert(id.clone()))
            .collect();

        let catalog = Self {
            languages,
            members,
            aliases,
            defaults,
        };
        catalog.validate_defaults()?;
        Ok(catalog)
    }

    /// Shorthand forms people commonly use in code blocks
    pub fn default_aliases() -> HashMap<String, String> {
        [
            ("asm", "assembly"),
            ("c#", "cs"),
            ("c++", "cpp"),
            ("csharp", "cs"),
            ("f#", "fs"),
            ("fsharp", "fs"),
            ("js", "javascript"),
            ("nimrod", "nim"),
            ("py", "python"),
            ("q#", "qs"),
            ("rs", "rust"),
            ("sh", "bash"),
            ("python", "python"),
        ]
        .into_iter()
        .map(|(alias, target)| (alias.to_string(), target.to_string()))
        .collect()
    }

    /// Default targets must be members and default keys must not be, so a
    /// known id always resolves to itself and chains stop after one hop.
    fn validate_defaults(&self) -> Result<(), Error> {
        for (name, target) in &self.defaults {
            if self.contains(name) {
                return Err(Error::Configuration(format!(
                    "default entry `{}` would shadow a known language",
                    name
                )));
            }
            if !self.contains(target) {
                return Err(Error::Configuration(format!(
                    "default language for `{}` is unknown: {}",
                    name, target
                )));
            }
        }
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    pub fn alias(&self, token: &str) -> Option<&str> {
        self.aliases.get(token).map(String::as_str)
    }

    pub fn default_for(&self, id: &str) -> Option<&str> {
        self.defaults.get(id).map(String::as_str)
    }

    /// Language ids in load order
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Ids that can double as chat command names
    pub fn command_names(&self) -> Vec<&str> {
        static COMMAND_NAME: OnceLock<Regex> = OnceLock::new();
        let pattern = COMMAND_NAME.get_or_init(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

        self.languages()
            .filter(|id| pattern.is_match(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_order_and_dedup() {
        let catalog = LanguageCatalog::new(
            ["python3", "", "bash", "python3", "  c-gcc "],
            HashMap::new(),
            HashMap::new(),
        )
        .unwrap();

        assert_eq!(
            catalog.languages().collect::<Vec<_>>(),
            vec!["python3", "bash", "c-gcc"]
        );
        assert!(catalog.contains("c-gcc"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_command_names_skip_variants() {
        let catalog = LanguageCatalog::new(
            ["python3", "cpp-gcc", "brainfuck", "c#"],
            HashMap::new(),
            HashMap::new(),
        )
        .unwrap();

        assert_eq!(catalog.command_names(), vec!["python3", "brainfuck"]);
    }

    #[test]
    fn test_alias_through_default_is_accepted() {
        let catalog = LanguageCatalog::new(
            ["python3"],
            table(&[("py", "python")]),
            table(&[("python", "python3")]),
        );
        assert!(catalog.is_ok());
    }

    #[test]
    fn test_dangling_default_is_rejected() {
        let catalog =
            LanguageCatalog::new(["python3"], HashMap::new(), table(&[("cpp", "cpp-gcc")]));
        assert!(matches!(catalog, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_default_shadowing_known_language_is_rejected() {
        let catalog = LanguageCatalog::new(
            ["python2", "python3"],
            HashMap::new(),
            table(&[("python3", "python2")]),
        );
        assert!(matches!(catalog, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_alias_to_unknown_language_is_allowed() {
        let catalog =
            LanguageCatalog::new(["python3"], LanguageCatalog::default_aliases(), HashMap::new())
                .unwrap();
        assert_eq!(catalog.alias("nimrod"), Some("nim"));
        assert!(!catalog.contains("nim"));
    }
}
