//! Heuristic metrics derived from text and a reconciled skill set.
//!
//! Three independent, pure derivations: compatibility percentage, seniority
//! estimate, and salary band. Thresholds live in one ordered decision table
//! per metric so precedence stays auditable.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeniorityEstimate {
    pub level: ExperienceLevel,
    /// 0-99, position on the beginner-to-expert scale.
    pub percentile: u32,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryEstimate {
    pub entry: u64,
    pub mid: u64,
    pub senior: u64,
}

/// Full metrics payload for one analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetrics {
    /// 0-100, share of target skills covered by the source side.
    pub compatibility: u32,
    pub seniority: SeniorityEstimate,
    pub salary: SalaryEstimate,
}

/// Role-title terms that signal seniority regardless of years mentioned.
const SENIOR_SIGNALS: &[&str] = &[
    "senior", "lead", "manager", "director", "head of", "chief", "principal",
];

/// Flat per-skill premium added uniformly to every salary tier.
const SKILL_PREMIUM: u64 = 500;

/// `round(matched / target * 100)`, clamped to 0-100. An empty target list is
/// a valid input and scores 0, not a division error.
pub fn compatibility_score(matched_count: usize, target_count: usize) -> u32 {
    if target_count == 0 {
        return 0;
    }
    let pct = (matched_count as f64 / target_count as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

fn years_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(\d+)\s*\+?\s*(?:years?|yrs?)\s+(?:of\s+)?experience")
            .expect("years pattern is valid")
    })
}

/// Maximum N over "N year(s) [of] experience" mentions; 0 if none.
pub fn years_of_experience(text: &str) -> u32 {
    years_pattern()
        .captures_iter(text)
        .filter_map(|c| c[1].parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}

pub fn has_senior_signal(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    SENIOR_SIGNALS.iter().any(|s| text_lower.contains(s))
}

/// Seniority decision table, evaluated top-down, first match wins:
///
/// | condition                                   | level  | percentile        |
/// |---------------------------------------------|--------|-------------------|
/// | years >= 8, or years >= 5 with a signal     | Senior | 85 + match_pct/10 |
/// | years >= 3, or signal with match_pct > 60   | Mid    | 50 + match_pct/5  |
/// | otherwise                                   | Entry  | 20 + match_pct/3  |
///
/// Percentile is rounded and capped at 99.
pub fn assess_seniority(text: &str, matched_count: usize, target_count: usize) -> SeniorityEstimate {
    let years = years_of_experience(text);
    let signal = has_senior_signal(text);
    let match_pct = if target_count == 0 {
        0.0
    } else {
        matched_count as f64 / target_count as f64 * 100.0
    };

    let (level, raw_percentile, rationale) = if years >= 8 || (years >= 5 && signal) {
        (
            ExperienceLevel::Senior,
            85.0 + match_pct / 10.0,
            "Your profile indicates senior-level expertise with substantial experience and a strong skill match.",
        )
    } else if years >= 3 || (signal && match_pct > 60.0) {
        (
            ExperienceLevel::Mid,
            50.0 + match_pct / 5.0,
            "You have a good foundation with relevant experience and skills for mid-level positions.",
        )
    } else {
        (
            ExperienceLevel::Entry,
            20.0 + match_pct / 3.0,
            "Your profile suggests entry-level experience. Focus on building more relevant skills.",
        )
    };

    SeniorityEstimate {
        level,
        percentile: (raw_percentile.round() as u32).min(99),
        rationale: rationale.to_string(),
    }
}

/// Base salary triple per industry, with a flat per-target-skill premium added
/// uniformly to all tiers. Unrecognized industries take the default triple.
pub fn salary_insights(target_count: usize, industry: &str) -> SalaryEstimate {
    let (entry, mid, senior) = match industry.to_lowercase().as_str() {
        "technology" => (65_000, 95_000, 135_000),
        "finance" => (70_000, 105_000, 150_000),
        "healthcare" => (60_000, 85_000, 120_000),
        "marketing" => (55_000, 80_000, 110_000),
        _ => (50_000, 75_000, 100_000),
    };

    let premium = SKILL_PREMIUM * target_count as u64;
    SalaryEstimate {
        entry: entry + premium,
        mid: mid + premium,
        senior: senior + premium,
    }
}

/// In-demand skills per industry, with a default list for unrecognized labels.
pub fn industry_skills(industry: &str) -> &'static [&'static str] {
    match industry.to_lowercase().as_str() {
        "technology" => &[
            "JavaScript",
            "Python",
            "AWS",
            "React",
            "Docker",
            "Kubernetes",
            "CI/CD",
        ],
        "finance" => &[
            "Financial Analysis",
            "Excel",
            "SQL",
            "Risk Assessment",
            "Bloomberg Terminal",
            "Accounting",
        ],
        "healthcare" => &[
            "EMR Systems",
            "HIPAA",
            "Clinical Documentation",
            "Patient Care",
            "Medical Terminology",
        ],
        "marketing" => &[
            "SEO",
            "Google Analytics",
            "Content Strategy",
            "Social Media Management",
            "CRM",
            "Adobe Creative Suite",
        ],
        _ => &[
            "Communication",
            "Project Management",
            "Microsoft Office",
            "Problem Solving",
            "Team Collaboration",
        ],
    }
}

/// Convenience wrapper producing the full metrics payload for one request.
pub fn compute_metrics(
    text: &str,
    matched_count: usize,
    target_count: usize,
    industry: &str,
) -> AnalysisMetrics {
    AnalysisMetrics {
        compatibility: compatibility_score(matched_count, target_count),
        seniority: assess_seniority(text, matched_count, target_count),
        salary: salary_insights(target_count, industry),
    }
}
