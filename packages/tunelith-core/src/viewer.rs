//! Admin listing of stored messages.

use crate::record::MessageRecord;
use crate::store::MessageStore;
use crate::Result;

/// Load every stored message, newest first.
pub fn recent_messages<S>(store: &S) -> Result<Vec<MessageRecord>>
where
    S: MessageStore + ?Sized,
{
    let mut records = store.load_all()?;
    sort_newest_first(&mut records);
    Ok(records)
}

/// Sort by timestamp descending. Ties keep insertion order.
pub fn sort_newest_first(records: &mut [MessageRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
