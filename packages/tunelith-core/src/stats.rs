//! Site statistics.

use crate::store::MessageStore;
use crate::Result;
use serde::{Deserialize, Serialize};

const PROJECTS_DELIVERED: u32 = 50;
const SATISFIED_CLIENTS: u32 = 30;
const YEARS_OF_EXPERIENCE: u32 = 3;
const SUPPORT_HOURS: &str = "24/7";

/// Public counters shown on the website.
///
/// Field names are part of the public JSON API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteStats {
    pub projets_realises: u32,
    pub clients_satisfaits: u32,
    pub annees_experience: u32,
    pub support: String,
    /// Live count from the message store
    pub messages_recus: usize,
}

impl SiteStats {
    /// Static business counters with the given message count.
    pub fn with_message_count(messages_recus: usize) -> Self {
        Self {
            projets_realises: PROJECTS_DELIVERED,
            clients_satisfaits: SATISFIED_CLIENTS,
            annees_experience: YEARS_OF_EXPERIENCE,
            support: SUPPORT_HOURS.to_string(),
            messages_recus,
        }
    }
}

/// Build the stats, counting the stored messages.
pub fn site_stats<S>(store: &S) -> Result<SiteStats>
where
    S: MessageStore + ?Sized,
{
    Ok(SiteStats::with_message_count(store.count()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{submit, ContactSubmission};
    use crate::store::MemoryMessageStore;

    #[test]
    fn test_static_counters() {
        let stats = SiteStats::with_message_count(0);
        let value = serde_json::to_value(&stats).unwrap();

        assert_eq!(value["projets_realises"], 50);
        assert_eq!(value["clients_satisfaits"], 30);
        assert_eq!(value["annees_experience"], 3);
        assert_eq!(value["support"], "24/7");
        assert_eq!(value["messages_recus"], 0);
    }

    #[test]
    fn test_counts_messages() {
        let store = MemoryMessageStore::new();
        assert_eq!(site_stats(&store).unwrap().messages_recus, 0);

        submit(&store, ContactSubmission::new("Ada", "a@b.c", "Hi")).unwrap();

        assert_eq!(site_stats(&store).unwrap().messages_recus, 1);
    }

    #[test]
    fn test_read_error() {
        let store = MemoryMessageStore::new();
        store.set_corrupt(true);

        assert!(site_stats(&store).is_err());
    }
}
