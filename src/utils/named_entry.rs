use std::fmt;
use std::marker::PhantomData;

use serde::de;
use serde::de::DeserializeOwned;

/// A `[section.NAME]` table whose name becomes part of the value.
pub trait NamedEntry {
    type Value: DeserializeOwned;

    #[must_use]
    fn from_entry(name: String, value: Self::Value) -> Self;
}

struct NamedEntryVisitor<T>(PhantomData<T>);

impl<'de, T: NamedEntry> de::Visitor<'de> for NamedEntryVisitor<T> {
    type Value = Vec<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of named sections")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));

        // file order is kept as is, it decides the roster and catalog order
        while let Some((name, value)) = map.next_entry::<String, T::Value>()? {
            entries.push(T::from_entry(name, value));
        }

        Ok(entries)
    }
}

pub fn deserialize_named_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: de::Deserializer<'de>,
    T: NamedEntry,
{
    deserializer.deserialize_map(NamedEntryVisitor(PhantomData))
}
