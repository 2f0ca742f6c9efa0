//! Per-backend language support tables
//!
//! The dispatcher consults these before any processing starts, so an
//! unsupported (backend, language) pair fails up front rather than partway
//! through a run.

use crate::backend::{rules, TokenizerKind};
use crate::error::{CoreError, Result};

/// Statistical model names per language code
const STATISTICAL_MODELS: &[(&str, &str)] = &[
    ("de", "de_core_sm"),
    ("en", "en_core_sm"),
    ("es", "es_core_sm"),
    ("fr", "fr_core_sm"),
    ("it", "it_core_sm"),
    ("ja", "ja_core_sm"),
    ("nl", "nl_core_sm"),
    ("pt", "pt_core_sm"),
];

/// The model artifact name mapped to a language for the statistical backend
pub fn statistical_model(language: &str) -> Option<&'static str> {
    let code = language.to_lowercase();
    STATISTICAL_MODELS
        .iter()
        .find(|(lang, _)| *lang == code)
        .map(|(_, model)| *model)
}

/// Language codes with a statistical model mapping
pub fn statistical_languages() -> Vec<&'static str> {
    STATISTICAL_MODELS.iter().map(|(lang, _)| *lang).collect()
}

/// Language codes with an embedded ruleset for the rules backend
pub fn ruleset_languages() -> Vec<&'static str> {
    rules::ruleset_languages()
}

/// Whether a backend can handle a language at all
///
/// The neural backend's inventory is open (any language is nominally
/// mappable; the model package check happens at load time), and the
/// external and passthrough backends accept any language code.
pub fn supported(kind: TokenizerKind, language: &str) -> bool {
    match kind {
        TokenizerKind::Rules => rules::ruleset_for(language).is_some(),
        TokenizerKind::Statistical => statistical_model(language).is_some(),
        TokenizerKind::Neural | TokenizerKind::External | TokenizerKind::Passthrough => {
            !language.is_empty()
        }
    }
}

/// Validate a (backend, language) pair, failing with `UnsupportedLanguage`
pub fn validate(kind: TokenizerKind, language: &str) -> Result<()> {
    if supported(kind, language) {
        Ok(())
    } else {
        Err(CoreError::UnsupportedLanguage {
            backend: kind.as_str().to_string(),
            language: language.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistical_model_lookup() {
        assert_eq!(statistical_model("en"), Some("en_core_sm"));
        assert_eq!(statistical_model("EN"), Some("en_core_sm"));
        assert_eq!(statistical_model("tlh"), None);
    }

    #[test]
    fn test_rules_support_follows_embedded_rulesets() {
        assert!(supported(TokenizerKind::Rules, "en"));
        assert!(!supported(TokenizerKind::Rules, "ja"));
    }

    #[test]
    fn test_open_inventories_accept_any_nonempty_code() {
        for kind in [
            TokenizerKind::Neural,
            TokenizerKind::External,
            TokenizerKind::Passthrough,
        ] {
            assert!(supported(kind, "xx"));
            assert!(!supported(kind, ""));
        }
    }

    #[test]
    fn test_validate_reports_backend_and_language() {
        let err = validate(TokenizerKind::Statistical, "tlh").unwrap_err();
        assert_eq!(
            err.to_string(),
            "tokenization with 'statistical' not available for language 'tlh'"
        );
    }
}
