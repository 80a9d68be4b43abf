use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Rounding beyond this many decimals is a no-op for `f64` scores.
pub const MAX_ROUNDING_PRECISION: u32 = 15;

/// Published per-residue disorder values; index 0 is residue position 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceSeries {
    values: Vec<f64>,
}

impl ReferenceSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for ReferenceSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Predicted scores keyed by 1-based residue position.
///
/// Keys need not be contiguous. When deserialized from JSON the string keys
/// (`{"1": 0.42}`) are parsed as positions; keys that are not written as a
/// plain position number (`"-1"`, `"+2"`, `"01"`, `"CA"`) are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionMap {
    scores: BTreeMap<usize, f64>,
}

impl PredictionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from a contiguous score list, assigning positions 1, 2, ...
    pub fn from_scores<I: IntoIterator<Item = f64>>(scores: I) -> Self {
        Self {
            scores: scores
                .into_iter()
                .enumerate()
                .map(|(i, score)| (i + 1, score))
                .collect(),
        }
    }

    pub fn insert(&mut self, position: usize, score: f64) -> Option<f64> {
        self.scores.insert(position, score)
    }

    pub fn get(&self, position: usize) -> Option<f64> {
        self.scores.get(&position).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scores.iter().map(|(&p, &s)| (p, s))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.scores.values().copied()
    }

    /// Copy with every score rounded to `precision` decimal places.
    ///
    /// Precisions above [`MAX_ROUNDING_PRECISION`] are clamped to it.
    pub fn rounded(&self, precision: u32) -> Self {
        let factor = 10f64.powi(precision.min(MAX_ROUNDING_PRECISION) as i32);
        Self {
            scores: self
                .scores
                .iter()
                .map(|(&p, &s)| (p, (s * factor).round() / factor))
                .collect(),
        }
    }
}

fn parse_position(key: &str) -> Option<usize> {
    key.parse::<usize>()
        .ok()
        .filter(|position| position.to_string() == key)
}

impl<'de> Deserialize<'de> for PredictionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
        let mut scores = BTreeMap::new();
        for (key, score) in raw {
            match parse_position(&key) {
                Some(position) => {
                    scores.insert(position, score);
                }
                None => debug!("Ignoring prediction key '{}': not a residue position.", key),
            }
        }
        Ok(Self { scores })
    }
}

impl FromIterator<(usize, f64)> for PredictionMap {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_scores_assigns_one_based_positions() {
        let map = PredictionMap::from_scores([0.2, 0.4]);
        assert_eq!(map.get(0), None);
        assert_eq!(map.get(1), Some(0.2));
        assert_eq!(map.get(2), Some(0.4));
    }

    #[test]
    fn iter_yields_positions_in_ascending_order() {
        let map: PredictionMap = [(7, 0.7), (2, 0.2), (5, 0.5)].into_iter().collect();
        let positions: Vec<_> = map.iter().map(|(p, _)| p).collect();
        assert_eq!(positions, vec![2, 5, 7]);
    }

    #[test]
    fn rounded_rounds_to_requested_precision() {
        let map = PredictionMap::from_scores([0.123456, 0.98765]);
        let rounded = map.rounded(4);
        assert!((rounded.get(1).unwrap() - 0.1235).abs() < 1e-12);
        assert!((rounded.get(2).unwrap() - 0.9877).abs() < 1e-12);
    }

    #[test]
    fn deserializes_string_keys_from_json() {
        let map: PredictionMap = serde_json::from_str(r#"{"1":0.9,"3":0.1}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(1), Some(0.9));
        assert_eq!(map.get(2), None);
        assert_eq!(map.get(3), Some(0.1));
    }

    #[test]
    fn keys_that_are_not_positions_are_skipped() {
        let map: PredictionMap =
            serde_json::from_str(r#"{"1":0.9,"-1":0.2,"+2":0.3,"03":0.4,"CA":0.5}"#).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(1), Some(0.9));
        assert_eq!(map.get(2), None);
        assert_eq!(map.get(3), None);
    }

    #[test]
    fn non_numeric_scores_are_still_rejected() {
        let result: Result<PredictionMap, _> = serde_json::from_str(r#"{"1":"high"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rounded_clamps_excessive_precision() {
        let map = PredictionMap::from_scores([0.123456, 0.98765]);
        let rounded = map.rounded(400);
        for (position, score) in rounded.iter() {
            assert!(score.is_finite());
            assert!((score - map.get(position).unwrap()).abs() < 1e-12);
        }
    }

    #[test]
    fn serialized_map_reads_back_unchanged() {
        let map: PredictionMap = [(2, 0.25), (10, 0.75)].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2":0.25,"10":0.75}"#);
        assert_eq!(serde_json::from_str::<PredictionMap>(&json).unwrap(), map);
    }

    #[test]
    fn reference_series_serializes_as_plain_array() {
        let series = ReferenceSeries::new(vec![0.5, 0.25]);
        assert_eq!(serde_json::to_string(&series).unwrap(), "[0.5,0.25]");
    }
}
