use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non-fallback locale provides *at least* the keys present
/// in the fallback (en-US) `mekkoscope-ui.ftl`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/mekkoscope-ui.ftl`
/// 2. Copy all keys from `en-US/mekkoscope-ui.ftl`
/// 3. Run `cargo test -p mekkoscope-ui` to confirm completeness.
#[test]
fn all_locales_have_all_fallback_keys() {
    // Embed the FTL sources at compile time.
    // (If you add a new locale, register it here.)
    const EN_US: &str = include_str!("../i18n/en-US/mekkoscope-ui.ftl");
    const ES_ES: &str = include_str!("../i18n/es-ES/mekkoscope-ui.ftl");
    const FR_FR: &str = include_str!("../i18n/fr-FR/mekkoscope-ui.ftl");

    let fallback_keys = extract_keys(EN_US);

    // Ensure fallback itself has no duplicates and at least one key.
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[
        ("es-ES", ES_ES),
        ("fr-FR", FR_FR),
        // Add new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let mut missing: BTreeSet<String> = BTreeSet::new();

        for k in &fallback_keys {
            if !keys.contains(k) {
                missing.insert(k.clone());
            }
        }

        if !missing.is_empty() {
            failures.push(format!(
                "{locale}: missing {} keys:\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Locale completeness failures:\n{}",
        failures.join("\n")
    );
}

fn extract_keys(src: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in src.lines() {
        if let Some(key) = parse_key(line) {
            keys.insert(key);
        }
    }
    keys
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen: HashSet<String> = HashSet::new();
    for line in src.lines() {
        if let Some(key) = parse_key(line) {
            assert!(seen.insert(key.clone()), "{locale}: duplicate key `{key}`");
        }
    }
}

fn parse_key(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('-') {
        return None;
    }
    let (candidate, _) = trimmed.split_once('=')?;
    let key = candidate.trim();
    if key.is_empty() || !key.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')) {
        return None;
    }
    Some(key.to_string())
}
