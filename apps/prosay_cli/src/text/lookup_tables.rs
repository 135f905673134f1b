//! Static phrase tables backing the offline transformer.

/// Known blunt phrases and their professional alternatives. Order matters:
/// partial matching walks this slice front to back.
pub const EXACT_TRANSFORMATIONS: &[(&str, &[&str])] = &[
    (
        "please share your thoughts",
        &[
            "I would appreciate your insights on this matter.",
            "Could you please provide your perspective on this topic?",
            "Your input would be valuable in this discussion.",
            "I welcome your feedback on this subject.",
        ],
    ),
    (
        "what do you think",
        &[
            "What are your thoughts on this?",
            "I'd appreciate your perspective on this matter.",
            "May I ask for your professional opinion on this?",
        ],
    ),
    (
        "i don't like this",
        &[
            "I have some concerns about this approach.",
            "I'd like to suggest an alternative solution.",
            "This approach may benefit from some adjustments.",
        ],
    ),
    (
        "this is stupid",
        &[
            "I believe this approach could be reconsidered.",
            "I have some reservations about the effectiveness of this strategy.",
            "This solution might not be optimal for our objectives.",
        ],
    ),
    (
        "i'm angry about",
        &[
            "I'm concerned about",
            "I feel strongly regarding",
            "I'd like to address my concerns about",
        ],
    ),
    (
        "that's not my job",
        &[
            "This falls outside my current responsibilities.",
            "This may require expertise from another department.",
            "This task might align better with a different team's objectives.",
        ],
    ),
    (
        "i quit",
        &[
            "I would like to tender my resignation.",
            "I've decided to pursue opportunities elsewhere.",
            "I am giving my notice of resignation.",
        ],
    ),
];

/// Informational question openers and their replacement lead-ins.
pub const PREFIX_REWRITES: &[(&str, &str)] = &[
    ("what is", "I'm inquiring about"),
    ("who is", "I'm seeking information regarding"),
    ("where is", "Could you provide information on the location of"),
    ("when is", "I'd like to know the timing of"),
    ("why is", "I'm interested in understanding the reason behind"),
    ("how to", "Could you provide guidance on how to"),
];

pub const REQUEST_PHRASES: &[&str] = &["i need", "i want", "give me"];

pub const NEGATIVE_PHRASES: &[&str] = &["not good", "bad", "terrible", "awful"];

pub const REQUEST_TEMPLATE_LEAD: &str = "I would like to request";
pub const NEGATIVE_TEMPLATE_LEAD: &str = "I believe there may be room for improvement regarding";
pub const QUESTION_TEMPLATE_LEAD: &str = "I would appreciate your insights on";
pub const GENERIC_TEMPLATE_LEAD: &str = "I would like to professionally communicate:";

/// Returns the alternatives registered for an already-normalized phrase.
pub fn alternatives_for(phrase: &str) -> Option<&'static [&'static str]> {
    EXACT_TRANSFORMATIONS
        .iter()
        .find(|(key, _)| *key == phrase)
        .map(|(_, alternatives)| *alternatives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_normalized_and_unique() {
        let mut seen = HashSet::new();
        for (key, alternatives) in EXACT_TRANSFORMATIONS {
            assert_eq!(*key, key.trim().to_lowercase());
            assert!(seen.insert(*key), "duplicate key {key}");
            assert!(!alternatives.is_empty());
            assert!(alternatives.iter().all(|a| !a.trim().is_empty()));
        }
    }

    #[test]
    fn prefix_order_is_fixed() {
        let prefixes: Vec<&str> = PREFIX_REWRITES.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            prefixes,
            ["what is", "who is", "where is", "when is", "why is", "how to"]
        );
    }

    #[test]
    fn looks_up_alternatives() {
        assert_eq!(alternatives_for("i quit").map(|a| a.len()), Some(3));
        assert!(alternatives_for("I quit").is_none());
    }
}
