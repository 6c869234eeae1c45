//! Format suggestions: quick checks on résumé text shape.
//!
//! Returns advisory findings only; nothing here blocks an analysis.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Positive,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
}

impl Suggestion {
    fn positive(message: &str) -> Self {
        Suggestion {
            kind: SuggestionKind::Positive,
            message: message.to_string(),
        }
    }

    fn warning(message: &str) -> Self {
        Suggestion {
            kind: SuggestionKind::Warning,
            message: message.to_string(),
        }
    }
}

/// Resumes shorter than this read as thin to screening software.
const MIN_RESUME_LEN: usize = 300;

/// Soft keywords used for the résumé/job-description alignment check.
const ALIGNMENT_KEYWORDS: &[&str] = &["team", "collaborate", "communicate", "deadline", "project"];

/// Fewer shared soft keywords than this warrants an alignment warning.
const MIN_ALIGNED_KEYWORDS: usize = 2;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("email pattern is valid")
    })
}

fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b(19|20)\d{2}\b").expect("year pattern is valid"))
}

/// Ordered, deterministic format checks: skills section, length, date ranges,
/// contact email. Date and email checks only warn when absent.
pub fn format_suggestions(text: &str) -> Vec<Suggestion> {
    let text_lower = text.to_lowercase();
    let mut suggestions = Vec::new();

    if text_lower.contains("skill") || text_lower.contains("expertise") {
        suggestions.push(Suggestion::positive(
            "Good job including a skills section that screening systems can easily identify.",
        ));
    } else {
        suggestions.push(Suggestion::warning(
            "Consider adding a dedicated \"Skills\" or \"Expertise\" section to improve detection.",
        ));
    }

    if text.len() < MIN_RESUME_LEN {
        suggestions.push(Suggestion::warning(
            "Your resume seems too short. Add more details about your experience and skills.",
        ));
    } else {
        suggestions.push(Suggestion::positive(
            "Your resume has a good length for screening systems to process properly.",
        ));
    }

    if !year_pattern().is_match(text) {
        suggestions.push(Suggestion::warning(
            "Include clear date ranges for each position to improve parsing.",
        ));
    }

    if !email_pattern().is_match(text) {
        suggestions.push(Suggestion::warning(
            "No email detected. Make sure your contact information is clearly visible.",
        ));
    }

    suggestions
}

/// Soft-keyword alignment between résumé and job description: warns when
/// fewer than two of the shared-vocabulary keywords appear in both texts.
pub fn alignment_suggestion(resume_text: &str, job_text: &str) -> Suggestion {
    let resume_lower = resume_text.to_lowercase();
    let job_lower = job_text.to_lowercase();

    let aligned = ALIGNMENT_KEYWORDS
        .iter()
        .filter(|k| resume_lower.contains(*k) && job_lower.contains(*k))
        .count();

    if aligned < MIN_ALIGNED_KEYWORDS {
        Suggestion::warning(
            "Try aligning your resume more closely with the job description keywords.",
        )
    } else {
        Suggestion::positive("Good keyword alignment with the job description detected.")
    }
}
