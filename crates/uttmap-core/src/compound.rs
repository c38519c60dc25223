use crate::error::{DeployError, Result};

/// Prefix of original AISHELL-2 utterance IDs.
pub const DEFAULT_PREFIX: &str = "BAC";

/// Pick the embedded original utterance ID out of an augmented one.
///
/// The ID is split on `-` and the first token containing `prefix` anywhere
/// in it is returned, so `rev1-BAC001-noise` resolves to `BAC001`. An ID
/// that was never decorated resolves to itself.
pub fn resolve_original_id<'a>(augmented_id: &'a str, prefix: &str) -> Result<&'a str> {
    let mut matches = augmented_id.split('-').filter(|tok| tok.contains(prefix));
    let first = matches.next().ok_or_else(|| DeployError::UnresolvableId {
        utt_id: augmented_id.to_string(),
        prefix: prefix.to_string(),
    })?;
    if let Some(other) = matches.next() {
        tracing::debug!(
            augmented_id,
            chosen = first,
            ignored = other,
            "several tokens match prefix, using the first"
        );
    }
    Ok(first)
}
