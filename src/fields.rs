use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Every grade column the prediction model knows about, in model order.
pub const FULL_FIELDS: [&str; 20] = [
    "TBLANG", "TBMATH", "TBCT", "TMKNM", "TBLT", "M17", "M19", "M22", "M30", "M32", "M33", "M34",
    "M35", "M36", "M38", "M41", "M43", "M44", "M45", "M47",
];

/// The reduced 16-field form (no M34, M35, M38, M43).
pub const CORE_FIELDS: [&str; 16] = [
    "TBLANG", "TBMATH", "TBCT", "TMKNM", "TBLT", "M17", "M19", "M22", "M30", "M32", "M33", "M36",
    "M41", "M44", "M45", "M47",
];

/// Development sample grades used by `Form::fill_sample`.
pub const SAMPLE_GRADES: [(&str, &str); 16] = [
    ("TBLANG", "7.5"),
    ("TBMATH", "8.0"),
    ("TBCT", "7.8"),
    ("TMKNM", "8.2"),
    ("TBLT", "7.9"),
    ("M17", "8.1"),
    ("M19", "7.7"),
    ("M22", "8.3"),
    ("M30", "7.6"),
    ("M32", "8.0"),
    ("M33", "7.9"),
    ("M36", "8.2"),
    ("M41", "7.8"),
    ("M44", "8.1"),
    ("M45", "7.7"),
    ("M47", "8.0"),
];

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldSet {
    #[default]
    Full,
    Core,
}

impl FieldSet {
    pub fn ids(self) -> &'static [&'static str] {
        match self {
            FieldSet::Full => &FULL_FIELDS,
            FieldSet::Core => &CORE_FIELDS,
        }
    }
}

/// Ordered list of required field identifiers.
///
/// The order is the order fields are wired, validated, serialized and
/// cleared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRegistry {
    ids: Vec<String>,
}

impl FieldRegistry {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = Vec::new();
        for id in ids {
            let id = id.into();
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        Self { ids: seen }
    }

    pub fn from_set(set: FieldSet) -> Self {
        Self::new(set.ids().iter().copied())
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|f| f == id)
    }

    /// Fields present here but not in `other`, and the reverse.
    pub fn diff<'a>(&'a self, other: &'a [String]) -> (Vec<&'a str>, Vec<&'a str>) {
        let missing_remote = self
            .ids
            .iter()
            .filter(|id| !other.contains(id))
            .map(String::as_str)
            .collect();
        let missing_local = other
            .iter()
            .filter(|id| !self.ids.contains(id))
            .map(String::as_str)
            .collect();
        (missing_remote, missing_local)
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::from_set(FieldSet::default())
    }
}
