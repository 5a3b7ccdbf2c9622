//! Property-based tests for ancestor projection using proptest.
//!
//! Random acyclic ontologies are generated by letting node `i` pick its
//! parents among nodes `0..i`; node 0 is always a root.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use proptest::sample::Index;

use efo_assoc::{filter_by_score, AssociationRecord, AssociationSet, Ontology, OntologyNode};
use efo_assoc_dag::{AncestorProjector, DagBuilder};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn id(i: usize) -> String {
    format!("EFO_{i:07}")
}

#[derive(Debug, Clone)]
struct Fixture {
    ontology: Ontology,
    associations: Vec<AssociationRecord>,
}

/// Strategy to generate an acyclic ontology plus a set of associations.
fn arb_fixture() -> impl Strategy<Value = Fixture> {
    (1usize..40)
        .prop_flat_map(|n| {
            (
                proptest::collection::vec(proptest::collection::vec(any::<Index>(), 0..4), n),
                proptest::collection::vec(proptest::option::of(0.0f64..1.0), n),
            )
        })
        .prop_map(|(parent_picks, scores)| {
            let nodes = parent_picks.iter().enumerate().map(|(i, picks)| {
                let mut parents: Vec<String> = Vec::new();
                if i > 0 {
                    for pick in picks {
                        let parent = id(pick.index(i));
                        if !parents.contains(&parent) {
                            parents.push(parent);
                        }
                    }
                }
                OntologyNode::new(id(i), format!("disease {i}"), parents)
            });
            let ontology = Ontology::from_nodes(nodes).unwrap();

            // Leaves first, the usual shape of a score-sorted association list
            let associations = scores
                .iter()
                .enumerate()
                .rev()
                .filter_map(|(i, score)| {
                    score.map(|score| AssociationRecord::new(id(i), format!("disease {i}"), score))
                })
                .collect();

            Fixture {
                ontology,
                associations,
            }
        })
}

/// Exhaustive reference: every ancestor reachable through unqualified
/// intermediates only.
fn reference_parents(ontology: &Ontology, start: &str, associated: &HashSet<&str>) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![start.to_string()];
    let mut expanded = HashSet::new();

    while let Some(current) = stack.pop() {
        if !expanded.insert(current.clone()) {
            continue;
        }
        for parent_id in &ontology.get(&current).unwrap().parent_ids {
            let parent = ontology.get(parent_id).unwrap();
            if associated.contains(parent_id.as_str()) || parent.is_root() {
                found.insert(parent_id.clone());
            } else {
                stack.push(parent_id.clone());
            }
        }
    }
    found
}

// ===========================================================================
// Projection invariants
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn projection_is_well_formed(fixture in arb_fixture()) {
        let dag = AncestorProjector::new(&fixture.ontology)
            .project(&fixture.associations)
            .unwrap();

        prop_assert!(dag.validate().is_ok(), "invalid DAG: {:?}", dag);
        prop_assert_eq!(dag.len(), fixture.associations.len() + dag.root_ids.len());
    }

    #[test]
    fn parents_are_associated_or_roots(fixture in arb_fixture()) {
        let associated: HashSet<&str> = fixture
            .associations
            .iter()
            .map(|record| record.disease_id.as_str())
            .collect();
        let dag = AncestorProjector::new(&fixture.ontology)
            .project(&fixture.associations)
            .unwrap();

        for (parent, _) in dag.edges() {
            let qualifies = associated.contains(parent)
                || fixture.ontology.get(parent).is_some_and(OntologyNode::is_root);
            prop_assert!(qualifies, "{} is neither associated nor a root", parent);
        }
        for root_id in &dag.root_ids {
            prop_assert!(!associated.contains(root_id.as_str()));
            prop_assert!(fixture.ontology.get(root_id).unwrap().is_root());
            prop_assert_eq!(dag.node(root_id).unwrap().score, None);
        }
    }

    #[test]
    fn parents_match_exhaustive_search(fixture in arb_fixture()) {
        let associated: HashSet<&str> = fixture
            .associations
            .iter()
            .map(|record| record.disease_id.as_str())
            .collect();
        let assoc_set = AssociationSet::from_records(&fixture.associations);
        let projector = AncestorProjector::new(&fixture.ontology);

        for record in &fixture.associations {
            let parents = projector
                .closest_qualifying_ancestors(&record.disease_id, &assoc_set)
                .unwrap();
            let unique: HashSet<String> = parents.iter().cloned().collect();

            prop_assert_eq!(unique.len(), parents.len(), "repeated parent for {}", record.disease_id);
            prop_assert_eq!(
                unique,
                reference_parents(&fixture.ontology, &record.disease_id, &associated)
            );
        }
    }

    #[test]
    fn nodes_follow_association_order(fixture in arb_fixture()) {
        let dag = AncestorProjector::new(&fixture.ontology)
            .project(&fixture.associations)
            .unwrap();

        let emitted: Vec<&str> = dag.ids().into_iter().take(fixture.associations.len()).collect();
        let expected: Vec<&str> = fixture
            .associations
            .iter()
            .map(|record| record.disease_id.as_str())
            .collect();
        prop_assert_eq!(emitted, expected);
    }

    #[test]
    fn threshold_keeps_only_passing_associations(
        fixture in arb_fixture(),
        threshold in 0.0f64..1.0,
    ) {
        let view = DagBuilder::new(&fixture.ontology)
            .build_with_threshold(&fixture.associations, threshold)
            .unwrap();

        prop_assert_eq!(&view.associations, &filter_by_score(&fixture.associations, threshold));
        let scored: HashMap<&str, Option<f64>> = view
            .dag
            .nodes
            .iter()
            .map(|node| (node.id.as_str(), node.score))
            .collect();
        for record in &fixture.associations {
            let kept = scored.get(record.disease_id.as_str()).copied().flatten().is_some();
            prop_assert_eq!(kept, record.score >= threshold);
        }
        prop_assert!(view.dag.validate().is_ok());
    }
}
