//! Entity records
//!
//! A record is a flat JSON object. Key order is preserved so that field
//! listings follow the order the fields were entered in.

use serde_json::Value;

/// Field-name to value mapping of one entity
pub type Record = serde_json::Map<String, Value>;

/// Field linking a record to its chain
pub const PARENT_FIELD: &str = "parent_id";

/// Field on chain records listing the channels it alerts through
pub const CHANNELS_FIELD: &str = "channels";

/// Read a string-valued name field
///
/// Non-string values are not names and yield `None`.
#[inline]
#[must_use]
pub fn name_of<'a>(record: &'a Record, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Value::as_str)
}

/// Read the owning chain id
#[inline]
#[must_use]
pub fn parent_of(record: &Record) -> Option<&str> {
    name_of(record, PARENT_FIELD)
}

/// Channel ids referenced by a chain record
#[must_use]
pub fn channel_ids_of(record: &Record) -> Vec<&str> {
    record
        .get(CHANNELS_FIELD)
        .and_then(Value::as_array)
        .map(|ids| ids.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Remove a channel id from a chain record's channel list
///
/// Returns true if the record referenced the channel.
pub(crate) fn detach_channel(record: &mut Record, channel_id: &str) -> bool {
    let Some(Value::Array(ids)) = record.get_mut(CHANNELS_FIELD) else {
        return false;
    };
    let before = ids.len();
    ids.retain(|id| id.as_str() != Some(channel_id));
    ids.len() != before
}
