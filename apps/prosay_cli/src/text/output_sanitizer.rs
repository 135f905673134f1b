/// Lead-ins models sometimes prepend despite being told not to.
const PREAMBLES: &[&str] = &[
    "Here is the professional version:",
    "Here's the professional version:",
    "Here is the transformed text:",
    "Here's the transformed text:",
    "Professional version:",
    "Transformed text:",
    "Output:",
];

/// Strips model chatter around the rewritten text: surrounding whitespace,
/// a known preamble, and one pair of wrapping quotes.
pub fn sanitize_output(text: &str) -> String {
    let mut result = text.trim();

    for preamble in PREAMBLES {
        let head = result.get(..preamble.len());
        if head.is_some_and(|head| head.eq_ignore_ascii_case(preamble)) {
            result = result[preamble.len()..].trim();
            break;
        }
    }

    for (open, close) in [('"', '"'), ('\'', '\''), ('“', '”')] {
        if result.len() > open.len_utf8() + close.len_utf8()
            && result.starts_with(open)
            && result.ends_with(close)
        {
            result = result[open.len_utf8()..result.len() - close.len_utf8()].trim();
            break;
        }
    }

    result.to_string()
}
