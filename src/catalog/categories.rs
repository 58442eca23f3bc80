//! Fixed business categories used to group descriptors for navigation.
//!
//! The category set is externally defined, not derived from the catalog;
//! counts are computed against whatever descriptor set the caller passes.

use super::EndpointDescriptor;

/// One navigation category: stable id, display fields, ordered subcategories.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CategoryDef {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub subcategories: Vec<String>,
}

fn def(id: &str, name: &str, icon: &str, description: &str, subs: &[&str]) -> CategoryDef {
    CategoryDef {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        subcategories: subs.iter().map(|s| s.to_string()).collect(),
    }
}

/// Return the fixed, ordered category definitions.
pub fn defaults() -> Vec<CategoryDef> {
    vec![
        def(
            "messaging",
            "Messaging",
            "message-square",
            "SMS, MMS, and WhatsApp message delivery and management",
            &["sms", "mms", "whatsapp", "scheduling"],
        ),
        def(
            "voice",
            "Voice",
            "phone",
            "Outbound calls, call control, recordings, and transcriptions",
            &["calls", "recordings", "transcriptions", "conferences"],
        ),
        def(
            "verify",
            "Verify",
            "shield-check",
            "One-time passcode delivery and verification checks",
            &["otp", "totp", "checks"],
        ),
        def(
            "lookup",
            "Lookup",
            "search",
            "Phone number intelligence: carrier, line type, caller name",
            &["carrier", "line-type", "caller-name"],
        ),
        def(
            "video",
            "Video",
            "video",
            "Video rooms, participants, and composition management",
            &["rooms", "participants", "compositions"],
        ),
        def(
            "billing-communications",
            "Billing Communications",
            "credit-card",
            "Payment notices, receipts, and dunning messages to members",
            &["receipts", "dunning", "statements"],
        ),
    ]
}

/// Number of entries in `set` tagged with the given category id.
///
/// Used for navigation badges only; the filter engine does its own matching.
pub fn count_for_category(category_id: &str, set: &[EndpointDescriptor]) -> usize {
    set.iter().filter(|e| e.category == category_id).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    #[test]
    fn test_category_ids_are_unique() {
        let defs = defaults();
        let mut ids: Vec<_> = defs.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), defs.len());
    }

    #[test]
    fn test_every_builtin_category_is_defined() {
        let defs = defaults();
        for entry in builtin::defaults() {
            assert!(
                defs.iter().any(|d| d.id == entry.category),
                "builtin '{}' has unknown category '{}'",
                entry.id,
                entry.category
            );
        }
    }

    #[test]
    fn test_count_for_category() {
        let set = builtin::defaults();
        let total: usize = defaults()
            .iter()
            .map(|d| count_for_category(&d.id, &set))
            .sum();
        assert_eq!(total, set.len());
        assert_eq!(count_for_category("no-such-category", &set), 0);
    }
}
