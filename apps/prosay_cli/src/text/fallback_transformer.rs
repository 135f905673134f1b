use parking_lot::Mutex;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use super::lookup_tables::{
    alternatives_for, EXACT_TRANSFORMATIONS, GENERIC_TEMPLATE_LEAD, NEGATIVE_PHRASES,
    NEGATIVE_TEMPLATE_LEAD, PREFIX_REWRITES, QUESTION_TEMPLATE_LEAD, REQUEST_PHRASES,
    REQUEST_TEMPLATE_LEAD,
};

/// Lowercase + trim. Shared by phrase matching and the response cache.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Rule-based rewriter used when no remote model produced usable text.
///
/// Rules are tried from most to least specific and the first hit wins:
/// exact phrase, partial phrase, question prefix, request wording,
/// negative wording, question mark, then a generic wrapper. The only
/// nondeterminism is which alternative of a matched phrase is returned,
/// and that comes from the owned RNG.
pub struct FallbackTransformer {
    rng: Mutex<StdRng>,
}

impl Default for FallbackTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackTransformer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn transform(&self, text: &str) -> String {
        let normalized = normalize(text);

        if let Some(alternatives) = alternatives_for(&normalized) {
            tracing::debug!(phrase = %normalized, "fallback: exact phrase match");
            return self.pick(alternatives);
        }

        for (key, alternatives) in EXACT_TRANSFORMATIONS {
            if normalized.contains(key) || key.contains(normalized.as_str()) {
                tracing::debug!(phrase = %key, "fallback: partial phrase match");
                return self.pick(alternatives);
            }
        }

        for (prefix, replacement) in PREFIX_REWRITES {
            if normalized.starts_with(prefix) {
                tracing::debug!(prefix = %prefix, "fallback: question prefix");
                let rest = remainder_after_prefix(text, &normalized, prefix);
                return format!("{} {}.", replacement, rest);
            }
        }

        if REQUEST_PHRASES.iter().any(|p| normalized.contains(p)) {
            let cleaned = strip_all(&normalized, REQUEST_PHRASES);
            return format!("{} {}.", REQUEST_TEMPLATE_LEAD, cleaned);
        }

        if NEGATIVE_PHRASES.iter().any(|p| normalized.contains(p)) {
            let cleaned = strip_all(&normalized, NEGATIVE_PHRASES);
            return format!("{} {}.", NEGATIVE_TEMPLATE_LEAD, cleaned);
        }

        if text.contains('?') {
            return format!("{} {}", QUESTION_TEMPLATE_LEAD, text);
        }

        format!("{} {}", GENERIC_TEMPLATE_LEAD, text)
    }

    fn pick(&self, alternatives: &[&str]) -> String {
        let mut rng = self.rng.lock();
        alternatives
            .choose(&mut *rng)
            .map(|s| s.to_string())
            .unwrap_or_else(|| GENERIC_TEMPLATE_LEAD.to_string())
    }
}

/// Text after `prefix`, keeping the caller's casing.
fn remainder_after_prefix(original: &str, normalized: &str, prefix: &str) -> String {
    // Lowercasing can change byte lengths outside ASCII; fall back to the
    // normalized remainder when the offsets no longer line up.
    let rest = original
        .trim()
        .get(prefix.len()..)
        .filter(|rest| rest.to_lowercase() == normalized[prefix.len()..])
        .unwrap_or(&normalized[prefix.len()..]);
    rest.trim().to_string()
}

fn strip_all(text: &str, phrases: &[&str]) -> String {
    phrases
        .iter()
        .fold(text.to_string(), |acc, phrase| acc.replace(phrase, ""))
        .trim()
        .to_string()
}
