//! Serde support: a set serializes as a sequence in iteration order

use super::OrderedSet;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

impl<T: Serialize> Serialize for OrderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct OrderedSetVisitor<T> {
    marker: PhantomData<fn() -> OrderedSet<T>>,
}

impl<'de, T> Visitor<'de> for OrderedSetVisitor<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    type Value = OrderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = OrderedSet::new();
        while let Some(item) = access.next_element()? {
            set.add(item);
        }
        Ok(set)
    }
}

/// Deserialized sets use insertion order; repeated items collapse.
impl<'de, T> Deserialize<'de> for OrderedSet<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_json_round_trip() {
        let s: OrderedSet<String> = serde_json::from_str(r#"["b", "a", "b", "c"]"#).unwrap();
        assert_eq!(s.items(), vec!["b", "a", "c"]);
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"["b","a","c"]"#);
    }
}
