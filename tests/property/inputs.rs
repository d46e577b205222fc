//! Property-based tests for session input validation and catalog parsing

use clipsmith::catalog::{Dialect, Voice};
use clipsmith::client::resolve_media_url;
use clipsmith::session::GenerationSession;
use proptest::prelude::*;
use std::str::FromStr;

proptest! {
    /// Any text with at least one non-whitespace character is accepted, for
    /// every dialect and voice combination, and is stored trimmed.
    #[test]
    fn session_accepts_nonblank_text(
        text in "[ \\t]*\\PC{1,100}[ \\t]*",
        dialect_idx in 0usize..5,
        voice_idx in 0usize..4,
    ) {
        prop_assume!(!text.trim().is_empty());
        let dialect = Dialect::all()[dialect_idx];
        let voice = Voice::all()[voice_idx];
        let session = GenerationSession::new(&text, dialect, voice).unwrap();
        prop_assert_eq!(session.text.as_str(), text.trim());
        prop_assert_eq!(session.dialect, dialect);
        prop_assert_eq!(session.voice, voice);
        prop_assert!(!session.generating);
    }

    /// Whitespace-only text is always rejected.
    #[test]
    fn session_rejects_blank_text(text in "[ \\t\\r\\n]{0,40}") {
        prop_assert!(GenerationSession::new(&text, Dialect::Msa, Voice::Male1).is_err());
    }

    /// Dialect codes survive a round-trip through parsing regardless of
    /// surrounding whitespace and letter case.
    #[test]
    fn dialect_code_roundtrip(
        dialect_idx in 0usize..5,
        pad_left in "[ \\t]{0,4}",
        pad_right in "[ \\t]{0,4}",
        uppercase in any::<bool>(),
    ) {
        let dialect = Dialect::all()[dialect_idx];
        let code = if uppercase {
            dialect.code().to_uppercase()
        } else {
            dialect.code().to_string()
        };
        let noisy = format!("{}{}{}", pad_left, code, pad_right);
        prop_assert_eq!(Dialect::from_str(&noisy).unwrap(), dialect);
    }

    /// Relative media paths always end up under the configured base URL;
    /// absolute URLs are never rewritten.
    #[test]
    fn media_url_resolution(path in "/[a-z0-9/_.]{1,60}") {
        let resolved = resolve_media_url("http://svc.example.com/", &path);
        prop_assert!(resolved.starts_with("http://svc.example.com/"));
        prop_assert!(resolved.ends_with(path.trim_start_matches('/')));

        let absolute = format!("https://cdn.example.com{}", path);
        prop_assert_eq!(resolve_media_url("http://svc.example.com", &absolute), absolute);
    }
}
