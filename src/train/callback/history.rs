//! Insertion-ordered metric history

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Metric name to ordered sequence of values
///
/// Names keep the order of their first `record`; each call appends one value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    series: Vec<(String, Vec<f32>)>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the series named `name`
    pub fn record(&mut self, name: &str, value: f32) {
        match self.series.iter_mut().find(|(n, _)| n == name) {
            Some((_, values)) => values.push(value),
            None => self.series.push((name.to_string(), vec![value])),
        }
    }

    /// Values recorded under `name`
    pub fn get(&self, name: &str) -> Option<&[f32]> {
        self.series.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_slice())
    }

    /// Series names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.series.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Iterate over `(name, values)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.series.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Serialize as a JSON object keyed by metric name
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.series.len()))?;
        for (name, values) in &self.series {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}
