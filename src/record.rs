//! The validated item record and its ordering.

use std::cmp::Ordering;

/// Marker meaning "not parsed yet" for the integer fields.
///
/// A source object that explicitly carries this value for `id` or `listId`
/// is treated exactly like one that omits the field.
pub const UNSET_ID: i32 = -1;

/// A single validated item from the source document.
///
/// Records can only be built through [`Record::try_new`], which enforces
/// that every field is present and valid at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    id: i32,
    group_id: i32,
    name: String,
}

impl Record {
    /// Build a record, or `None` if any field fails validation.
    pub fn try_new(id: i32, group_id: i32, name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if id == UNSET_ID || group_id == UNSET_ID || name.is_empty() {
            return None;
        }
        Some(Self { id, group_id, name })
    }

    pub(crate) fn from_parts(
        id: Option<i32>,
        group_id: Option<i32>,
        name: Option<String>,
    ) -> Option<Self> {
        Self::try_new(id?, group_id?, name?)
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Grouping key, read from the `listId` field.
    pub fn group_id(&self) -> i32 {
        self.group_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key used for display ordering: `(group_id, name)`.
    pub fn sort_key(&self) -> (i32, &str) {
        (self.group_id, &self.name)
    }
}

/// Compare by group id, then by name.
///
/// Names compare by `str` ordering (code point order).
pub fn compare(a: &Record, b: &Record) -> Ordering {
    a.sort_key().cmp(&b.sort_key())
}

/// Sort records in place into display order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(compare);
}
