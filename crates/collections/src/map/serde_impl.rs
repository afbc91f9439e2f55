//! Serde support: a map serializes as a map in iteration order

use super::OrderedMap;
use crate::ordering::OrderingPolicy;
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use tracing::trace;

impl<K, V> Serialize for OrderedMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<K, V> {
    marker: PhantomData<fn() -> OrderedMap<K, V>>,
}

impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            entries.insert(key, value);
        }
        trace!(entries = entries.len(), "deserialized ordered map");
        Ok(OrderedMap::from_parts(entries, OrderingPolicy::InsertionOrder))
    }
}

/// Deserialized maps use insertion order; a repeated key keeps its last value.
impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_iteration_order() {
        let m: OrderedMap<_, _> = vec![("zeta", 1), ("alpha", 2)].into_iter().collect();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn test_deserializes_preserving_document_order() {
        let m: OrderedMap<String, u32> =
            serde_json::from_str(r#"{"b": 2, "a": 1, "c": 3}"#).unwrap();
        assert_eq!(m.keys(), vec!["b", "a", "c"]);
        assert_eq!(m.get("a"), Some(&1));
    }

    #[test]
    fn test_sorted_map_serializes_sorted() {
        let m = OrderedMap::from_entries(vec![(3, "c"), (1, "a")], OrderingPolicy::by_key());
        assert_eq!(serde_json::to_string(&m).unwrap(), r#"{"1":"a","3":"c"}"#);
    }
}
