use crate::{Stat, StatsError, Value, decode_lines};
use log::debug;
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::{collections::HashMap, path::Path};

/// Insertion-ordered mapping from statistic name to value.
///
/// A repeated name replaces the earlier value in place: the entry keeps the
/// position of its first occurrence and holds the last value written.
#[derive(Debug, Clone, Default)]
pub struct StatsTable {
    entries: Vec<(String, Stat)>,
    /// name -> index into entries
    index: HashMap<String, usize>,
}

impl StatsTable {
    pub fn new() -> StatsTable {
        StatsTable::default()
    }

    /// Read a whole stats file into memory and parse it
    pub fn open<P: AsRef<Path>>(path: P) -> Result<StatsTable, StatsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(parse_stats(&content))
    }

    /// Insert or overwrite, returning the replaced value if any
    pub fn insert(&mut self, name: &str, stat: Stat) -> Option<Stat> {
        match self.index.get(name) {
            Some(&i) => {
                debug!("Overwrite duplicate statistic {name}");
                Some(std::mem::replace(&mut self.entries[i].1, stat))
            }
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), stat));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<&Stat, StatsError> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i].1)
            .ok_or_else(|| StatsError::Missing(name.to_string()))
    }

    pub fn get_scalar(&self, name: &str) -> Result<&Value, StatsError> {
        self.get(name)?
            .as_scalar()
            .ok_or_else(|| StatsError::NotScalar(name.to_string()))
    }

    pub fn get_f64(&self, name: &str) -> Result<f64, StatsError> {
        let value = self.get_scalar(name)?;
        value.as_f64().ok_or_else(|| StatsError::NotNumeric {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Stat)> {
        self.entries.iter().map(|(name, stat)| (name.as_str(), stat))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Sub-table of entries whose name starts with `prefix`, order preserved
    pub fn with_prefix(&self, prefix: &str) -> StatsTable {
        self.iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, stat)| (name.to_string(), stat.clone()))
            .collect()
    }
}

impl FromIterator<(String, Stat)> for StatsTable {
    fn from_iter<I: IntoIterator<Item = (String, Stat)>>(iter: I) -> Self {
        let mut table = StatsTable::new();
        for (name, stat) in iter {
            table.insert(&name, stat);
        }
        table
    }
}

impl Serialize for StatsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, stat) in self.iter() {
            map.serialize_entry(name, stat)?;
        }
        map.end()
    }
}

/// Parse the text of a stats report into a table
pub fn parse_stats(text: &str) -> StatsTable {
    let mut table = StatsTable::new();
    for entry in decode_lines(text) {
        table.insert(entry.name, Stat::from_tokens(entry.values.as_slice()));
    }
    debug!("Parsed {} statistics", table.len());
    table
}
