//! Association records and the per-call association index.

use std::collections::HashMap;

use crate::DiseaseId;

/// Score threshold applied before building the association DAG.
pub const DEFAULT_MIN_SCORE: f64 = 0.1;

/// A disease plus its computed relevance score for one target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssociationRecord {
    /// Associated disease.
    pub disease_id: DiseaseId,
    /// Display name of the disease.
    pub disease_name: String,
    /// Association score, typically in `[0, 1]`.
    pub score: f64,
}

impl AssociationRecord {
    /// Creates a new association record.
    pub fn new(disease_id: impl Into<DiseaseId>, disease_name: impl Into<String>, score: f64) -> Self {
        Self {
            disease_id: disease_id.into(),
            disease_name: disease_name.into(),
            score,
        }
    }

    /// Returns true if the score reaches `min_score`.
    ///
    /// NaN scores never pass.
    pub fn passes(&self, min_score: f64) -> bool {
        self.score >= min_score
    }
}

/// Keeps the records whose score is at least `min_score`, in input order.
pub fn filter_by_score(records: &[AssociationRecord], min_score: f64) -> Vec<AssociationRecord> {
    records
        .iter()
        .filter(|record| record.passes(min_score))
        .cloned()
        .collect()
}

/// Disposable membership index from disease id to association record.
///
/// Built from scratch for each projection; never shared between calls.
/// When a disease id occurs more than once, the last record wins.
#[derive(Debug, Clone, Default)]
pub struct AssociationSet<'a> {
    by_id: HashMap<&'a str, &'a AssociationRecord>,
}

impl<'a> AssociationSet<'a> {
    /// Indexes the given records by disease id.
    pub fn from_records(records: &'a [AssociationRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            by_id.insert(record.disease_id.as_str(), record);
        }
        Self { by_id }
    }

    /// Checks whether a disease is associated.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Returns the association record for a disease.
    pub fn get(&self, id: &str) -> Option<&'a AssociationRecord> {
        self.by_id.get(id).copied()
    }

    /// Returns the number of distinct associated diseases.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if no disease is associated.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<AssociationRecord> {
        vec![
            AssociationRecord::new("EFO_0000270", "asthma", 0.81),
            AssociationRecord::new("EFO_0000384", "Crohn's disease", 0.1),
            AssociationRecord::new("EFO_0000685", "rheumatoid arthritis", 0.05),
            AssociationRecord::new("EFO_0003767", "inflammatory bowel disease", f64::NAN),
        ]
    }

    #[test]
    fn test_filter_by_score_inclusive() {
        let kept = filter_by_score(&records(), 0.1);
        let ids: Vec<&str> = kept.iter().map(|r| r.disease_id.as_str()).collect();
        assert_eq!(ids, vec!["EFO_0000270", "EFO_0000384"]);
    }

    #[test]
    fn test_filter_by_score_zero_keeps_finite() {
        let kept = filter_by_score(&records(), 0.0);
        assert_eq!(kept.len(), 3);
    }

    #[test]
    fn test_filter_empty() {
        assert!(filter_by_score(&[], DEFAULT_MIN_SCORE).is_empty());
    }

    #[test]
    fn test_association_set_lookup() {
        let records = records();
        let set = AssociationSet::from_records(&records);
        assert_eq!(set.len(), 4);
        assert!(set.contains("EFO_0000270"));
        assert!(!set.contains("EFO_0000408"));
        assert_eq!(set.get("EFO_0000384").unwrap().disease_name, "Crohn's disease");
    }

    #[test]
    fn test_association_set_last_record_wins() {
        let records = vec![
            AssociationRecord::new("EFO_0000270", "asthma", 0.2),
            AssociationRecord::new("EFO_0000270", "asthma", 0.9),
        ];
        let set = AssociationSet::from_records(&records);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("EFO_0000270").unwrap().score, 0.9);
    }

    #[test]
    fn test_empty_set() {
        let set = AssociationSet::from_records(&[]);
        assert!(set.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_serde_camel_case() {
        let record = AssociationRecord::new("EFO_0000270", "asthma", 0.5);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["diseaseId"], "EFO_0000270");
        assert_eq!(json["diseaseName"], "asthma");
        assert_eq!(json["score"], 0.5);
    }
}
