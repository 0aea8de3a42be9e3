//! Fuzzy matching of free-text agent names against the canonical
//! directory.
//!
//! The operators type agent names by hand, so the same person shows up as
//! "Mario Rossi", "mario  rossi", "Mario Rosi". Exact normalized-key
//! lookup catches the first two; a small Levenshtein budget absorbs the
//! typos. Anything farther than the budget is treated as a genuinely new
//! agent, never silently merged.

use super::normalize::{normalized_key, title_case};

/// Edit-distance budget: at most two single-character edits between the
/// input key and a known key still count as the same agent.
pub const DEFAULT_MAX_DISTANCE: u32 = 2;

/// Resolve a free-text name against the known agent names.
///
/// Exact key match always wins, regardless of distance. Otherwise the
/// known entry at the smallest Levenshtein distance from the input key is
/// selected (first encountered minimum on ties); if that distance is
/// within `max_distance` its title-cased form is returned, else the input
/// itself is returned title-cased as a new agent.
///
/// Empty input returns the empty string without consulting the distance
/// table. Never panics.
pub fn canonicalize(input: &str, known_names: &[String], max_distance: u32) -> String {
    let raw = input.trim();
    if raw.is_empty() {
        return String::new();
    }
    let key = normalized_key(raw);

    let known: Vec<(String, &str)> = known_names
        .iter()
        .map(|name| (normalized_key(name), name.as_str()))
        .collect();

    if let Some(name) = known
        .iter()
        .find(|(known_key, _)| *known_key == key)
        .map(|(_, name)| *name)
    {
        return title_case(name);
    }

    let mut best: Option<&str> = None;
    let mut best_distance = u32::MAX;
    for (known_key, name) in &known {
        let distance = levenshtein(&key, known_key);
        if distance < best_distance {
            best_distance = distance;
            best = Some(*name);
        }
    }

    match best {
        Some(name) if best_distance <= max_distance => title_case(name),
        _ => title_case(raw),
    }
}

/// Compute Levenshtein edit distance between two strings.
///
/// Callers pass normalized keys, which is where the case-insensitivity of
/// the match comes from.
pub fn levenshtein(a: &str, b: &str) -> u32 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n as u32;
    }
    if n == 0 {
        return m as u32;
    }

    let mut prev: Vec<u32> = (0..=n as u32).collect();
    let mut curr = vec![0u32; n + 1];

    for (i, &a_ch) in a_chars.iter().enumerate() {
        curr[0] = (i + 1) as u32;
        for (j, &b_ch) in b_chars.iter().enumerate() {
            let cost = if a_ch == b_ch { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
