use crate::core::{CatalogEntry, RawSelection, SelectionSet};
use std::collections::BTreeSet;

/// Turns submitted form values into the option ids each group actually knows.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionResolver;

impl SelectionResolver {
    pub fn new() -> Self {
        Self
    }

    /// Unknown ids are dropped. A group missing from `raw` resolves to an
    /// empty set; defaults are not injected here.
    pub fn resolve(&self, raw: &RawSelection, entry: &CatalogEntry) -> SelectionSet {
        let mut selection = SelectionSet::new();

        for (group_id, group) in &entry.groups {
            let submitted = raw.values(group_id).unwrap_or_default();
            let (known, unknown): (Vec<&String>, Vec<&String>) = submitted
                .iter()
                .partition(|value| group.options.contains_key(value.as_str()));

            if !unknown.is_empty() {
                tracing::debug!(
                    "Dropped unknown value(s) {:?} for group '{}' of '{}'",
                    unknown,
                    group_id,
                    entry.id
                );
            }

            let chosen: BTreeSet<String> = known.into_iter().cloned().collect();
            selection.insert_group(group_id.clone(), chosen);
        }

        selection
    }
}
