use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field id -> grade pairs in registry order; the `/predict` request body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSnapshot {
    entries: Vec<(String, f64)>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id`, or overwrites it in place if already present.
    pub fn insert(&mut self, id: impl Into<String>, value: f64) {
        let id = id.into();
        match self.entries.iter_mut().find(|(k, _)| *k == id) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((id, value)),
        }
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl Serialize for FormSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, value) in &self.entries {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}
