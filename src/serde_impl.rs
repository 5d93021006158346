use core::fmt;
use core::marker::PhantomData;
use core::hash::{Hash, BuildHasher};

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::AssocMap;

// upper bound on preallocation driven by an untrusted size hint
const MAX_PREALLOC: usize = 4096;

impl<K, V, S> Serialize for AssocMap<K, V, S>
where
    K: Serialize,
    V: Serialize,
{
    #[inline]
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_map(self.iter())
    }
}

struct AssocMapVisitor<K, V, S> {
    marker: PhantomData<AssocMap<K, V, S>>,
}

impl<'de, K, V, S> Visitor<'de> for AssocMapVisitor<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = AssocMap<K, V, S>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut map = AssocMap::with_capacity_and_hasher(capacity, S::default());

        // a repeated key overwrites, last one wins
        while let Some((k, v)) = access.next_entry()? {
            map.insert(k, v);
        }

        Ok(map)
    }
}

impl<'de, K, V, S> Deserialize<'de> for AssocMap<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AssocMapVisitor { marker: PhantomData })
    }
}
