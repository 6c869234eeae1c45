//! Axum route handlers for the Analysis API.
//!
//! Handlers contain no analysis logic; they validate the caller contract,
//! call into the engine, and shape the JSON payload.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::heuristics::{self, AnalysisMetrics};
use crate::analysis::reconciler::{reconcile, ReconciliationResult};
use crate::analysis::resources::{resources_for, Resource};
use crate::analysis::roles::{all_roles, role_by_id, JobRole};
use crate::analysis::suggestions::{alignment_suggestion, format_suggestions, Suggestion};
use crate::analysis::taxonomy::Skill;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub skills: Vec<Skill>,
}

#[derive(Debug, Deserialize)]
pub struct ReconcileRequest {
    pub source_skills: Vec<String>,
    pub target_skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MetricsRequest {
    pub text: String,
    pub matched: Vec<String>,
    pub target_skills: Vec<String>,
    pub industry: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    /// Raw job description; target skills are extracted from it.
    pub job_text: Option<String>,
    /// Id of a curated role preset; takes precedence over `job_text`.
    pub job_role: Option<String>,
    /// Explicit target skill list; takes precedence over both of the above.
    pub job_skills: Option<Vec<String>>,
    pub industry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillResources {
    pub skill: String,
    pub resources: Vec<Resource>,
}

/// Full pipeline payload: everything a results screen needs in one response.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub resume_skills: Vec<Skill>,
    pub target_skills: Vec<String>,
    pub reconciliation: ReconciliationResult,
    pub metrics: AnalysisMetrics,
    pub suggestions: Vec<Suggestion>,
    pub industry: String,
    pub industry_skills: Vec<String>,
    /// Curated learning resources for each missing skill.
    pub learning_resources: Vec<SkillResources>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/extract
///
/// Detects catalogue skills in free-form text. Empty text is a valid input
/// and yields an empty list.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Json<ExtractResponse> {
    let skills = state.extractor.extract(&request.text);
    Json(ExtractResponse { skills })
}

/// POST /api/v1/analysis/reconcile
///
/// Partitions the target skill list into matched/missing, with synonym-pair
/// provenance for matches that were not exact.
pub async fn handle_reconcile(
    State(state): State<AppState>,
    Json(request): Json<ReconcileRequest>,
) -> Json<ReconciliationResult> {
    let result = reconcile(
        &request.source_skills,
        &request.target_skills,
        &state.taxonomy,
    );
    Json(result)
}

/// POST /api/v1/analysis/metrics
///
/// Derives compatibility, seniority, and salary estimates from text plus a
/// reconciled skill set. Empty target lists take the defined zero/floor path.
pub async fn handle_metrics(
    State(_state): State<AppState>,
    Json(request): Json<MetricsRequest>,
) -> Json<AnalysisMetrics> {
    let metrics = heuristics::compute_metrics(
        &request.text,
        request.matched.len(),
        request.target_skills.len(),
        &request.industry,
    );
    Json(metrics)
}

/// GET /api/v1/job-roles
///
/// Lists the curated role presets a caller can analyze against.
pub async fn handle_job_roles() -> Json<Vec<JobRole>> {
    Json(all_roles().to_vec())
}

/// GET /api/v1/resources/:skill
///
/// Static learning-resource lookup with a fixed fallback for unknown skills.
pub async fn handle_resources(Path(skill): Path<String>) -> Json<Vec<Resource>> {
    Json(resources_for(&skill).to_vec())
}

/// POST /api/v1/analysis/analyze
///
/// Full pipeline: extract resume skills, resolve the target list, reconcile,
/// derive metrics and format suggestions, and attach learning resources for
/// each missing skill.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let industry = request
        .industry
        .unwrap_or_else(|| "Technology".to_string());

    let resume_skills = state.extractor.extract(&request.resume_text);
    let source_names: Vec<String> = resume_skills
        .iter()
        .map(|s| s.name().to_string())
        .collect();

    let target_skills: Vec<String> = if let Some(skills) =
        request.job_skills.as_ref().filter(|s| !s.is_empty())
    {
        skills.clone()
    } else if let Some(role_id) = &request.job_role {
        let role = role_by_id(role_id)
            .ok_or_else(|| AppError::NotFound(format!("Job role '{role_id}' not found")))?;
        role.skills.iter().map(|s| s.to_string()).collect()
    } else if let Some(job_text) = &request.job_text {
        state
            .extractor
            .extract(job_text)
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    } else {
        return Err(AppError::Validation(
            "one of job_skills, job_role, or job_text must be provided".to_string(),
        ));
    };

    let reconciliation = reconcile(&source_names, &target_skills, &state.taxonomy);

    let metrics = heuristics::compute_metrics(
        &request.resume_text,
        reconciliation.matched.len(),
        target_skills.len(),
        &industry,
    );

    let mut suggestions = format_suggestions(&request.resume_text);
    if let Some(job_text) = &request.job_text {
        suggestions.push(alignment_suggestion(&request.resume_text, job_text));
    }

    let learning_resources = reconciliation
        .missing
        .iter()
        .map(|skill| SkillResources {
            skill: skill.clone(),
            resources: resources_for(skill).to_vec(),
        })
        .collect();

    tracing::debug!(
        resume_skills = resume_skills.len(),
        target_skills = target_skills.len(),
        matched = reconciliation.matched.len(),
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        resume_skills,
        target_skills,
        reconciliation,
        metrics,
        suggestions,
        industry_skills: heuristics::industry_skills(&industry)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        industry,
        learning_resources,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::analysis::extractor::KeywordExtractor;
    use crate::analysis::heuristics::ExperienceLevel;
    use crate::analysis::taxonomy::Taxonomy;
    use crate::config::Config;

    fn test_state() -> AppState {
        let taxonomy = Arc::new(Taxonomy::new());
        let extractor = Arc::new(KeywordExtractor::new(taxonomy.clone()).unwrap());
        AppState {
            taxonomy,
            extractor,
            config: Config {
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_extract_handler_empty_text_is_valid() {
        let response = handle_extract(
            State(test_state()),
            Json(ExtractRequest {
                text: String::new(),
            }),
        )
        .await;
        assert!(response.0.skills.is_empty());
    }

    #[tokio::test]
    async fn test_reconcile_handler_partitions_target() {
        let response = handle_reconcile(
            State(test_state()),
            Json(ReconcileRequest {
                source_skills: vec!["React".to_string()],
                target_skills: vec!["React".to_string(), "Docker".to_string()],
            }),
        )
        .await;
        assert_eq!(response.0.matched, vec!["React".to_string()]);
        assert_eq!(response.0.missing, vec!["Docker".to_string()]);
    }

    #[tokio::test]
    async fn test_metrics_handler_empty_target_is_zero() {
        let response = handle_metrics(
            State(test_state()),
            Json(MetricsRequest {
                text: "any".to_string(),
                matched: vec![],
                target_skills: vec![],
                industry: "Technology".to_string(),
            }),
        )
        .await;
        assert_eq!(response.0.compatibility, 0);
        assert_eq!(response.0.seniority.level, ExperienceLevel::Entry);
    }

    #[tokio::test]
    async fn test_resources_handler_falls_back_for_unknown_skill() {
        let response = handle_resources(Path("Nonexistent".to_string())).await;
        assert_eq!(response.0.len(), 3);
    }

    #[tokio::test]
    async fn test_analyze_requires_a_job_side() {
        let result = handle_analyze(
            State(test_state()),
            Json(AnalyzeRequest {
                resume_text: "Skills: React".to_string(),
                job_text: None,
                job_role: None,
                job_skills: None,
                industry: None,
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_analyze_full_pipeline_scenario_a() {
        let result = handle_analyze(
            State(test_state()),
            Json(AnalyzeRequest {
                resume_text: "5 years experience with React and Node.js, skilled in Python"
                    .to_string(),
                job_text: None,
                job_role: None,
                job_skills: Some(vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "Python".to_string(),
                    "Docker".to_string(),
                ]),
                industry: Some("Technology".to_string()),
            }),
        )
        .await
        .unwrap();

        let response = result.0;
        assert_eq!(response.metrics.compatibility, 75);
        assert_eq!(response.reconciliation.missing, vec!["Docker".to_string()]);
        assert_eq!(response.learning_resources.len(), 1);
        assert_eq!(response.learning_resources[0].skill, "Docker");
        assert_eq!(response.industry, "Technology");
    }

    #[tokio::test]
    async fn test_analyze_extracts_target_from_job_text() {
        let result = handle_analyze(
            State(test_state()),
            Json(AnalyzeRequest {
                resume_text: "Shipped Python services".to_string(),
                job_text: Some("Looking for Python and Docker experience".to_string()),
                job_role: None,
                job_skills: None,
                industry: None,
            }),
        )
        .await
        .unwrap();

        let response = result.0;
        assert!(response.target_skills.contains(&"Python".to_string()));
        assert!(response.target_skills.contains(&"Docker".to_string()));
        assert!(response
            .reconciliation
            .missing
            .contains(&"Docker".to_string()));
        // Alignment check runs whenever raw job text is supplied.
        assert!(response
            .suggestions
            .iter()
            .any(|s| s.message.contains("alignment") || s.message.contains("aligning")));
    }

    #[tokio::test]
    async fn test_job_roles_handler_lists_presets() {
        let response = handle_job_roles().await;
        assert_eq!(response.0.len(), 5);
        assert!(response.0.iter().any(|r| r.id == "devops-engineer"));
    }

    #[tokio::test]
    async fn test_analyze_with_role_preset() {
        let result = handle_analyze(
            State(test_state()),
            Json(AnalyzeRequest {
                resume_text: "Skills: Node.js, Docker, Python".to_string(),
                job_text: None,
                job_role: Some("backend-developer".to_string()),
                job_skills: None,
                industry: None,
            }),
        )
        .await
        .unwrap();

        let response = result.0;
        assert_eq!(response.target_skills.len(), 14);
        assert!(response
            .reconciliation
            .matched
            .contains(&"Node.js".to_string()));
        assert!(response
            .reconciliation
            .missing
            .contains(&"Redis".to_string()));
    }

    #[tokio::test]
    async fn test_analyze_unknown_role_is_not_found() {
        let result = handle_analyze(
            State(test_state()),
            Json(AnalyzeRequest {
                resume_text: "Skills: Rust".to_string(),
                job_text: None,
                job_role: Some("astronaut".to_string()),
                job_skills: None,
                industry: None,
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
