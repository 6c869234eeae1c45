//! Skill extractor: two-pass detection of catalogue skills in free-form text.
//!
//! Pass 1 matches each catalogue identifier as a case-insensitive whole word,
//! with punctuation inside multi-word names ("CI/CD", "Node.js") matched
//! literally. Pass 2 recovers skills embedded in descriptive phrasing
//! ("proficient in kubernetes") via substring tests, without full parsing.
//! Results always come back in taxonomy order, deduplicated.

use std::sync::Arc;

use anyhow::Result;
use regex::Regex;

use crate::analysis::taxonomy::{Skill, Taxonomy};

/// Pluggable extractor seam. The default backend is keyword-based; a semantic
/// backend could be swapped in behind `AppState` without touching handlers.
pub trait SkillExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<Skill>;
}

/// Framing phrases that precede a skill mention.
const CONTEXT_PREFIXES: &[&str] = &[
    "expertise in",
    "experienced with",
    "proficient in",
    "knowledge of",
    "skilled in",
    "familiar with",
    "worked with",
];

/// Framing phrases that follow a skill mention.
const CONTEXT_SUFFIXES: &[&str] = &["development", "programming", "skills"];

/// Keyword-based extractor: deterministic, no model, no I/O.
///
/// Whole-word patterns are compiled once at construction, one per catalogue
/// skill. Boundaries are "not alphanumeric" rather than `\b`, which anchors
/// identifiers ending in punctuation ("C++", "C#") at word edges, keeps
/// "Java" from firing inside "JavaScript", and still treats separators like
/// `+` as token boundaries ("React+Redux").
pub struct KeywordExtractor {
    taxonomy: Arc<Taxonomy>,
    word_patterns: Vec<Regex>,
}

impl KeywordExtractor {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Result<Self> {
        let word_patterns = taxonomy
            .all_skills()
            .iter()
            .map(|skill| {
                let escaped = regex::escape(skill.name());
                Regex::new(&format!(
                    r"(?i)(?:^|[^A-Za-z0-9])(?:{escaped})(?:$|[^A-Za-z0-9])"
                ))
                .map_err(Into::into)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(KeywordExtractor {
            taxonomy,
            word_patterns,
        })
    }

    fn mentioned_in_context(text_lower: &str, skill_lower: &str) -> bool {
        CONTEXT_PREFIXES
            .iter()
            .map(|p| format!("{p} {skill_lower}"))
            .chain(
                CONTEXT_SUFFIXES
                    .iter()
                    .map(|s| format!("{skill_lower} {s}")),
            )
            .any(|phrase| text_lower.contains(&phrase))
    }
}

impl SkillExtractor for KeywordExtractor {
    fn extract(&self, text: &str) -> Vec<Skill> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let text_lower = text.to_lowercase();
        let mut found = Vec::new();

        for (skill, pattern) in self.taxonomy.all_skills().iter().zip(&self.word_patterns) {
            if pattern.is_match(text) {
                found.push(skill.clone());
                continue;
            }
            // Contextual pass only for identifiers long enough to be unambiguous.
            if skill.name().len() > 3
                && Self::mentioned_in_context(&text_lower, &skill.name().to_lowercase())
            {
                found.push(skill.clone());
            }
        }

        found
    }
}
