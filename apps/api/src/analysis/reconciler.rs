//! Reconciler: partitions a target skill list against a source skill list.
//!
//! Three-way classification is the point: equality-only comparison undercounts
//! real matches because professional text is full of abbreviations and product
//! name variants. Surfacing the synonym pairing lets a consumer show provenance
//! ("your 'Node' counted as 'Node.js'") instead of collapsing the distinction.

use serde::{Deserialize, Serialize};

use crate::analysis::taxonomy::Taxonomy;

/// A target skill satisfied by a distinct source surface form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymPair {
    pub target: String,
    pub source: String,
}

/// Partition of a target skill list. Every target skill lands in exactly one
/// of `matched`/`missing`; `synonym_pairs` records provenance for the subset
/// of matches that were not exact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub synonym_pairs: Vec<SynonymPair>,
}

/// Classifies each target skill, in target-list order:
/// exact case-insensitive match in `source` wins; otherwise the first source
/// entry that `Taxonomy::is_synonym` accepts; otherwise missing.
pub fn reconcile(source: &[String], target: &[String], taxonomy: &Taxonomy) -> ReconciliationResult {
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut synonym_pairs = Vec::new();

    for target_skill in target {
        if source
            .iter()
            .any(|s| s.eq_ignore_ascii_case(target_skill))
        {
            matched.push(target_skill.clone());
            continue;
        }

        // First qualifying source skill wins, left to right.
        if let Some(source_skill) = source
            .iter()
            .find(|s| taxonomy.is_synonym(s, target_skill))
        {
            matched.push(target_skill.clone());
            synonym_pairs.push(SynonymPair {
                target: target_skill.clone(),
                source: source_skill.clone(),
            });
            continue;
        }

        missing.push(target_skill.clone());
    }

    ReconciliationResult {
        matched,
        missing,
        synonym_pairs,
    }
}
