//! Internal unit tests, laid out by module.

mod config;
mod format;
mod pipeline;

use crate::record::Record;

/// Build a record that is known to be valid.
pub(crate) fn rec(id: i32, group_id: i32, name: &str) -> Record {
    Record::try_new(id, group_id, name).expect("test record must be valid")
}
