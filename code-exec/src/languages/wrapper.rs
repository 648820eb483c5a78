use std::collections::HashMap;
use tracing::debug;

use crate::error::Error;

/// Substitution point for user code in a template
pub const CODE_PLACEHOLDER: &str = "{code}";

/// Boilerplate templates keyed by language family.
#[derive(Debug, Clone)]
pub struct WrapTemplates {
    templates: HashMap<String, String>,
    excluded: Vec<String>,
}

impl WrapTemplates {
    /// Creates a template table. Every template must contain the code
    /// placeholder exactly once.
    pub fn new(templates: HashMap<String, String>, excluded: Vec<String>) -> Result<Self, Error> {
        let table = Self {
            templates,
            excluded,
        };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), Error> {
        for (family, template) in &self.templates {
            let count = template.matches(CODE_PLACEHOLDER).count();
            if count != 1 {
                return Err(Error::Configuration(format!(
                    "template for `{}` must contain {} exactly once, found {}",
                    family, CODE_PLACEHOLDER, count
                )));
            }
        }
        Ok(())
    }

    /// Whether code for `language` can be wrapped
    pub fn is_wrappable(&self, language: &str) -> bool {
        self.templates.contains_key(family(language))
            && !self.excluded.iter().any(|id| id == language)
    }

    /// Substitutes `code` into the template for the language's family.
    pub fn wrap(&self, language: &str, code: &str) -> Result<String, Error> {
        if self.excluded.iter().any(|id| id == language) {
            return Err(Error::WrapRejected(language.to_string()));
        }

        let template = self
            .templates
            .get(family(language))
            .ok_or_else(|| Error::WrapRejected(language.to_string()))?;

        debug!("Wrapping code for `{}`", language);
        Ok(template.replacen(CODE_PLACEHOLDER, code, 1))
    }
}

impl Default for WrapTemplates {
    fn default() -> Self {
        let templates = [
            ("c", "#include <stdio.h>\nint main() {\n{code}\n}"),
            ("cpp", "#include <iostream>\nint main() {\n{code}\n}"),
            (
                "cs",
                "using System;\nclass Program {\nstatic void Main(string[] args) {\n{code}\n}\n}",
            ),
            (
                "java",
                "public class Main {\npublic static void main(String[] args) {\n{code}\n}\n}",
            ),
            ("rust", "fn main() {\n{code}\n}"),
            ("d", "import std.stdio;\nvoid main() {\n{code}\n}"),
            ("kotlin", "fun main(args: Array<String>) {\n{code}\n}"),
        ]
        .into_iter()
        .map(|(family, template)| (family.to_string(), template.to_string()))
        .collect();

        Self {
            templates,
            // These variants already run top-level statements
            excluded: vec!["cs-mono-shell".to_string(), "cs-csi".to_string()],
        }
    }
}

/// The part of a language id before its first `-`.
pub fn family(language: &str) -> &str {
    language.split('-').next().unwrap_or(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family() {
        assert_eq!(family("cpp-gcc"), "cpp");
        assert_eq!(family("cs-mono-shell"), "cs");
        assert_eq!(family("rust"), "rust");
    }

    #[test]
    fn test_wrap_uses_family_template() {
        let templates = WrapTemplates::default();
        assert_eq!(
            templates.wrap("rust", "println!(\"hi\");").unwrap(),
            "fn main() {\nprintln!(\"hi\");\n}"
        );
        assert!(templates
            .wrap("cpp-clang", "return 0;")
            .unwrap()
            .starts_with("#include <iostream>"));
    }

    #[test]
    fn test_wrap_rejects_family_without_template() {
        let err = WrapTemplates::default().wrap("python3", "print(1)").unwrap_err();
        assert!(matches!(err, Error::WrapRejected(ref id) if id == "python3"));
    }

    #[test]
    fn test_wrap_rejects_excluded_variant() {
        let templates = WrapTemplates::default();
        assert!(templates.is_wrappable("cs-core"));
        assert!(!templates.is_wrappable("cs-csi"));
        assert!(matches!(
            templates.wrap("cs-csi", "Console.WriteLine(1);"),
            Err(Error::WrapRejected(_))
        ));
    }

    #[test]
    fn test_wrap_is_deterministic() {
        let templates = WrapTemplates::default();
        let code = "let x = \"{code}\";";
        assert_eq!(
            templates.wrap("rust", code).unwrap(),
            templates.wrap("rust", code).unwrap()
        );
        assert_eq!(
            templates.wrap("rust", code).unwrap(),
            "fn main() {\nlet x = \"{code}\";\n}"
        );
    }

    #[test]
    fn test_template_without_placeholder_is_rejected() {
        let templates = [("go".to_string(), "func main() {}".to_string())]
            .into_iter()
            .collect();
        assert!(matches!(
            WrapTemplates::new(templates, vec![]),
            Err(Error::Configuration(_))
        ));
    }
}
