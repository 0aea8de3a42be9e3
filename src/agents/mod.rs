//! Agent identity resolution.
//!
//! Historical appointment rows carry free-text agent names; this module
//! turns that population into a deduplicated, alphabetically ordered
//! directory of canonical names, and resolves new free-text input against
//! it with fuzzy matching. The directory has no lifecycle of its own: it
//! is a pure function of the current records, rebuilt whenever they
//! change.

mod fuzzy;
mod normalize;

pub use fuzzy::{canonicalize, levenshtein, DEFAULT_MAX_DISTANCE};
pub use normalize::{normalized_key, title_case};

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::RawAppointmentRecord;

/// Build the canonical agent directory from the full historical name
/// population.
///
/// One title-cased representative survives per normalized key. Among
/// variants sharing a key the lexicographically smallest title-cased form
/// wins, so the output is independent of input order. Ordering is
/// accent-aware: the primary sort key folds diacritics, so "Èlena" files
/// under E rather than after Z.
pub fn build_directory(historical_names: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, String> = HashMap::new();
    for raw in historical_names {
        let canon = title_case(raw);
        if canon.is_empty() {
            continue;
        }
        let key = normalized_key(&canon);
        match seen.entry(key) {
            Entry::Occupied(mut entry) => {
                if canon < *entry.get() {
                    entry.insert(canon);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(canon);
            }
        }
    }

    let mut directory: Vec<String> = seen.into_values().collect();
    directory.sort_by_cached_key(|name| (normalized_key(name), name.clone()));
    tracing::debug!(agents = directory.len(), "Built agent directory");
    directory
}

/// Directory straight from collaborator rows: every non-empty `agente`
/// value feeds the build.
pub fn directory_from_records(records: &[RawAppointmentRecord]) -> Vec<String> {
    let names: Vec<String> = records
        .iter()
        .filter_map(|r| r.agente.clone())
        .filter(|name| !name.trim().is_empty())
        .collect();
    build_directory(&names)
}

const AGENT_PALETTE: [&str; 10] = [
    "#60a5fa", "#f472b6", "#34d399", "#f59e0b", "#a78bfa",
    "#f87171", "#38bdf8", "#fb923c", "#4ade80", "#c084fc",
];

/// Deterministic display color for an agent: same name, same color, on
/// every client. Pure data; rendering stays with the host.
pub fn agent_color(name: &str) -> &'static str {
    let mut hash: u32 = 0;
    for ch in name.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as u32);
    }
    AGENT_PALETTE[(hash as usize) % AGENT_PALETTE.len()]
}
