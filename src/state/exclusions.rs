use crate::error::Result;
use crate::planner::ExclusionSet;
use crate::state::persistence::{EXCLUSIONS_KEY, KeyValueStore};

/// Load the persisted exclusion terms.
///
/// A missing key is an empty set. A value that no longer parses is logged and
/// also treated as empty so a damaged file cannot block planning.
pub fn load_exclusions<S: KeyValueStore + ?Sized>(kv: &S) -> Result<ExclusionSet> {
    let Some(raw) = kv.get(EXCLUSIONS_KEY)? else {
        return Ok(ExclusionSet::new());
    };

    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(terms) => Ok(ExclusionSet::from_terms(terms)),
        Err(e) => {
            tracing::warn!(error = %e, key = EXCLUSIONS_KEY, "discarding unreadable exclusions");
            Ok(ExclusionSet::new())
        }
    }
}

/// Persist the exclusion terms as a JSON array of lower-cased strings.
pub fn save_exclusions<S: KeyValueStore + ?Sized>(kv: &mut S, set: &ExclusionSet) -> Result<()> {
    let json = serde_json::to_string(set)?;
    kv.set(EXCLUSIONS_KEY, json)
}
