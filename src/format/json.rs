//! Streaming JSON parser for the item list.
//!
//! The document is walked token by token through `serde_json::Deserializer`;
//! no intermediate `Value` tree is built. Each array element is read into a
//! candidate, validated, and either kept or dropped before the next element
//! is touched.

use std::fmt;
use std::io::{BufReader, Read};

use serde::Deserialize;
use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};

use super::ParseError;
use crate::record::Record;

/// Counters collected while parsing one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Array elements consumed
    pub seen: usize,
    /// Elements that passed validation
    pub kept: usize,
}

impl ParseStats {
    pub fn dropped(&self) -> usize {
        self.seen - self.kept
    }
}

/// Parse a top-level JSON array of objects from a reader.
///
/// The reader is consumed and dropped before this returns, on success and
/// on failure alike.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>, ParseError> {
    parse_records_with_stats(reader).map(|(records, _)| records)
}

/// Parse from an in-memory buffer.
pub fn parse_records_from_slice(bytes: &[u8]) -> Result<Vec<Record>, ParseError> {
    parse_records(bytes)
}

/// Like [`parse_records`], also returning element counters.
pub fn parse_records_with_stats<R: Read>(
    reader: R,
) -> Result<(Vec<Record>, ParseStats), ParseError> {
    let mut de = serde_json::Deserializer::from_reader(BufReader::new(reader));
    let mut records = Vec::new();
    let mut stats = ParseStats::default();

    RecordArray {
        records: &mut records,
        stats: &mut stats,
    }
    .deserialize(&mut de)?;
    // Only whitespace may follow the closing bracket.
    de.end()?;

    Ok((records, stats))
}

struct RecordArray<'a> {
    records: &'a mut Vec<Record>,
    stats: &'a mut ParseStats,
}

impl<'de> DeserializeSeed<'de> for RecordArray<'_> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for RecordArray<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON array of objects")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        while let Some(candidate) = seq.next_element::<Candidate>()? {
            self.stats.seen += 1;
            if let Some(record) = candidate.into_record() {
                self.stats.kept += 1;
                self.records.push(record);
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(field_identifier, rename_all = "camelCase")]
enum Field {
    Id,
    ListId,
    Name,
    #[serde(other)]
    Unknown,
}

/// One array element, with every field still optional.
#[derive(Debug, Default)]
struct Candidate {
    id: Option<i32>,
    group_id: Option<i32>,
    name: Option<String>,
}

impl Candidate {
    fn into_record(self) -> Option<Record> {
        Record::from_parts(self.id, self.group_id, self.name)
    }
}

impl<'de> Deserialize<'de> for Candidate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_map(CandidateVisitor)
    }
}

struct CandidateVisitor;

impl<'de> Visitor<'de> for CandidateVisitor {
    type Value = Candidate;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an item object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Candidate, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut candidate = Candidate::default();
        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Id => candidate.id = Some(map.next_value()?),
                Field::ListId => candidate.group_id = Some(map.next_value()?),
                // A non-string value keeps whatever name was read before.
                Field::Name => {
                    if let NameValue(Some(name)) = map.next_value()? {
                        candidate.name = Some(name);
                    }
                }
                Field::Unknown => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(candidate)
    }
}

/// The `name` value: a string, or `None` for any other JSON type.
///
/// Non-string values are consumed in full so the stream stays aligned on the
/// next key.
struct NameValue(Option<String>);

impl<'de> Deserialize<'de> for NameValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(NameVisitor)
    }
}

struct NameVisitor;

impl<'de> Visitor<'de> for NameVisitor {
    type Value = NameValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<NameValue, E> {
        Ok(NameValue(Some(v.to_owned())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<NameValue, E> {
        Ok(NameValue(Some(v)))
    }

    fn visit_unit<E: de::Error>(self) -> Result<NameValue, E> {
        Ok(NameValue(None))
    }

    fn visit_none<E: de::Error>(self) -> Result<NameValue, E> {
        Ok(NameValue(None))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<NameValue, E> {
        Ok(NameValue(None))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<NameValue, E> {
        Ok(NameValue(None))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<NameValue, E> {
        Ok(NameValue(None))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<NameValue, E> {
        Ok(NameValue(None))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<NameValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(NameValue(None))
    }

    fn visit_map<A>(self, mut map: A) -> Result<NameValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(NameValue(None))
    }
}
