//! Text normalization for keyword matching.
//!
//! Converts arbitrary user input into a canonical form: lowercase, French
//! accents stripped, punctuation turned into spaces, whitespace collapsed.
//! Total over all strings - the empty string normalizes to the empty string.

/// Punctuation that becomes a single space before matching.
const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '"', '\'', '`', '´',
];

/// Normalize a raw message into the canonical matching form.
///
/// The output is lowercase, accent-free for the Latin letters common in
/// French, free of the punctuation set above, and contains single spaces
/// only (no leading or trailing whitespace).
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.to_lowercase().chars() {
        match c {
            _ if PUNCTUATION.contains(&c) => out.push(' '),
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => out.push('a'),
            'ç' => out.push('c'),
            'è' | 'é' | 'ê' | 'ë' => out.push('e'),
            'ì' | 'í' | 'î' | 'ï' => out.push('i'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => out.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => out.push('u'),
            'ÿ' => out.push('y'),
            _ => out.push(c),
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
