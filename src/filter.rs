//! Query/filter engine over the catalog.

use crate::catalog::EndpointDescriptor;

/// Search and category constraints, combined with logical AND.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    /// Case-insensitive substring matched against name, description, or
    /// category. Empty or absent matches everything.
    pub search: Option<String>,
    /// Exact category id. Absent matches everything.
    pub category: Option<String>,
}

impl FilterQuery {
    pub fn matches(&self, entry: &EndpointDescriptor) -> bool {
        let search_ok = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let needle = term.to_lowercase();
                entry.name.to_lowercase().contains(&needle)
                    || entry.description.to_lowercase().contains(&needle)
                    || entry.category.to_lowercase().contains(&needle)
            }
        };
        let category_ok = match self.category.as_deref() {
            None | Some("") => true,
            Some(id) => entry.category == id,
        };
        search_ok && category_ok
    }
}

/// Return the matching subset of `entries`, preserving insertion order.
/// No pagination; catalogs are dozens to low hundreds of entries.
pub fn matching(entries: &[EndpointDescriptor], query: &FilterQuery) -> Vec<EndpointDescriptor> {
    entries.iter().filter(|e| query.matches(e)).cloned().collect()
}
