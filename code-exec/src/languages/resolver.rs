use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use super::LanguageCatalog;
use crate::error::Error;

const MAX_SUGGESTIONS: usize = 10;
const SUGGESTION_PREFIX_LEN: usize = 3;

/// Trims surrounding backticks and whitespace, then case-folds.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().trim_matches('`').to_lowercase()
}

/// Resolves a normalized language token to a canonical catalog id.
///
/// The token goes through the alias table, then the default table; the
/// result must be a catalog member.
pub fn resolve(catalog: &LanguageCatalog, token: &str) -> Result<String, Error> {
    let aliased = catalog.alias(token).unwrap_or(token);
    let id = catalog.default_for(aliased).unwrap_or(aliased);

    if catalog.contains(id) {
        debug!("Resolved language `{}` to `{}`", token, id);
        return Ok(id.to_string());
    }

    Err(Error::UnknownLanguage {
        language: id.to_string(),
        suggestions: suggestions(catalog, id),
    })
}

/// Catalog ids starting with the first three characters of `id`, in
/// catalog order, at most ten. Shorter ids are used whole as the prefix.
pub fn suggestions(catalog: &LanguageCatalog, id: &str) -> Vec<String> {
    let prefix: String = id
        .chars()
        .take(SUGGESTION_PREFIX_LEN)
        .collect::<String>()
        .to_lowercase();

    catalog
        .languages()
        .filter(|language| language.to_lowercase().starts_with(&prefix))
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

/// Strips code fence backticks and a leading line that only repeats the
/// language name, as left behind by ```` ```py ```` style blocks.
pub fn normalize_code(code: &str) -> String {
    static LANGUAGE_ECHO: OnceLock<Regex> = OnceLock::new();
    let echo = LANGUAGE_ECHO.get_or_init(|| Regex::new(r"^[0-9A-Za-z]+$").unwrap());

    let code = code.trim_matches('`');
    match code.split_once('\n') {
        Some((first_line, rest)) if echo.is_match(first_line) => rest.to_string(),
        _ => code.to_string(),
    }
}
