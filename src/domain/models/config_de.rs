//! Deserialization for the configuration records
//!
//! Object keys match field names case-insensitively, with an exact match
//! taking priority. Each key is applied in document order into the value
//! decoded so far, so a repeated scalar keeps its last value and a repeated
//! section merges into the earlier one. `null` leaves a record or string
//! untouched and empties `topics`. Unknown keys are skipped.

use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

use super::config::{BrokerConfig, CloudConfig, Config, QueueConfig};

/// A record whose fields are decoded one key at a time into an existing value
trait Record: Default {
    const NAME: &'static str;
    const FIELDS: &'static [&'static str];

    /// Decode the next map value into the field at `index` of [`Self::FIELDS`]
    fn merge_field<'de, A>(&mut self, index: usize, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>;
}

fn field_index(fields: &[&str], key: &str) -> Option<usize> {
    fields
        .iter()
        .position(|field| *field == key)
        .or_else(|| fields.iter().position(|field| fold_eq(field, key)))
}

fn fold_eq(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn merge_string<'de, A>(target: &mut String, map: &mut A) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    if let Some(value) = map.next_value::<Option<String>>()? {
        *target = value;
    }
    Ok(())
}

fn skip_value<'de, A>(map: &mut A) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
{
    map.next_value::<IgnoredAny>().map(|_| ())
}

/// Decodes an object into an existing record
struct MergeInto<'a, T>(&'a mut T);

impl<'de, T: Record> DeserializeSeed<'de> for MergeInto<'_, T> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(self)
    }
}

impl<'de, T: Record> Visitor<'de> for MergeInto<'_, T> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} object or null", T::NAME)
    }

    fn visit_none<E: de::Error>(self) -> Result<(), E> {
        Ok(())
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        Ok(())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        let Self(record) = self;
        while let Some(key) = map.next_key::<String>()? {
            match field_index(T::FIELDS, &key) {
                Some(index) => record.merge_field(index, &mut map)?,
                None => skip_value(&mut map)?,
            }
        }
        Ok(())
    }
}

/// Decodes a topic object into an existing routing table
struct MergeTopics<'a>(&'a mut HashMap<String, String>);

impl<'de> DeserializeSeed<'de> for MergeTopics<'_> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(self)
    }
}

impl<'de> Visitor<'de> for MergeTopics<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of topic names to handler names, or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<(), E> {
        let Self(topics) = self;
        topics.clear();
        Ok(())
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        self.visit_none()
    }

    fn visit_some<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    // Topic names are data, not field names: matched exactly.
    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        let Self(topics) = self;
        while let Some((topic, handler)) = map.next_entry::<String, Option<String>>()? {
            topics.insert(topic, handler.unwrap_or_default());
        }
        Ok(())
    }
}

impl Record for Config {
    const NAME: &'static str = "Config";
    const FIELDS: &'static [&'static str] = &["redis", "aws", "queue"];

    fn merge_field<'de, A>(&mut self, index: usize, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match index {
            0 => map.next_value_seed(MergeInto(&mut self.broker)),
            1 => map.next_value_seed(MergeInto(&mut self.cloud)),
            2 => map.next_value_seed(MergeInto(&mut self.queue)),
            _ => skip_value(map),
        }
    }
}

impl Record for BrokerConfig {
    const NAME: &'static str = "BrokerConfig";
    const FIELDS: &'static [&'static str] = &["host", "namespace", "queue"];

    fn merge_field<'de, A>(&mut self, index: usize, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match index {
            0 => merge_string(&mut self.host, map),
            1 => merge_string(&mut self.namespace, map),
            2 => merge_string(&mut self.queue, map),
            _ => skip_value(map),
        }
    }
}

impl Record for CloudConfig {
    const NAME: &'static str = "CloudConfig";
    const FIELDS: &'static [&'static str] = &["access_key", "secret_key", "region"];

    fn merge_field<'de, A>(&mut self, index: usize, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match index {
            0 => merge_string(&mut self.access_key, map),
            1 => merge_string(&mut self.secret_key, map),
            2 => merge_string(&mut self.region, map),
            _ => skip_value(map),
        }
    }
}

impl Record for QueueConfig {
    const NAME: &'static str = "QueueConfig";
    const FIELDS: &'static [&'static str] = &["name", "topics"];

    fn merge_field<'de, A>(&mut self, index: usize, map: &mut A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        match index {
            0 => merge_string(&mut self.name, map),
            1 => map.next_value_seed(MergeTopics(&mut self.topics)),
            _ => skip_value(map),
        }
    }
}

fn deserialize_record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Record,
{
    let mut record = T::default();
    MergeInto(&mut record).deserialize(deserializer)?;
    Ok(record)
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_record(deserializer)
    }
}

impl<'de> Deserialize<'de> for BrokerConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_record(deserializer)
    }
}

impl<'de> Deserialize<'de> for CloudConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_record(deserializer)
    }
}

impl<'de> Deserialize<'de> for QueueConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_record(deserializer)
    }
}
