#![allow(dead_code)]

//! Skill taxonomy: the fixed catalogue of canonical skills and synonym groups.
//!
//! Built once at startup and shared read-only. All lookups are case-insensitive
//! and pure; unknown terms return `None`/`false`, never an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A canonical skill identifier, e.g. "Machine Learning".
/// Two skills are the same entity iff their identifiers match case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skill(String);

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Skill(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Skill {}

/// A set of interchangeable surface forms for one underlying competency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymGroup {
    pub forms: Vec<String>,
}

/// Canonical catalogue, in iteration order. Extraction results follow this order.
const SKILL_CATALOGUE: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Python",
    "Java",
    "C++",
    "C#",
    "Go",
    "Ruby",
    "PHP",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "GraphQL",
    "REST API",
    "HTML",
    "CSS",
    "SASS",
    "Redux",
    "Webpack",
    "Jest",
    "Git",
    "CI/CD",
    "Jenkins",
    "GitHub Actions",
    "Linux",
    "Agile",
    "Scrum",
    "Product Management",
    "Project Management",
    "Machine Learning",
    "Data Science",
    "AI",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "Pandas",
    "NumPy",
    "UI/UX",
    "Communication",
    "Leadership",
    "Teamwork",
    "Problem Solving",
];

/// Known synonym groups. Invariant: a surface form appears in at most one group.
const SYNONYM_GROUPS: &[&[&str]] = &[
    &["javascript", "js", "es6", "ecmascript"],
    &["typescript", "ts"],
    &["react", "reactjs", "react.js"],
    &["angular", "angularjs"],
    &["vue", "vuejs", "vue.js"],
    &["node.js", "node", "nodejs"],
    &["python", "py"],
    &["go", "golang"],
    &["c#", "csharp"],
    &["aws", "amazon web services"],
    &["gcp", "google cloud", "google cloud platform"],
    &["kubernetes", "k8s"],
    &["postgresql", "postgres"],
    &["mongodb", "mongo"],
    &["html", "html5"],
    &["css", "css3"],
    &["sass", "scss"],
    &["ci/cd", "continuous integration", "continuous delivery"],
    &["machine learning", "ml"],
    &["ai", "artificial intelligence"],
    &["ui/ux", "ux", "user experience"],
];

/// The process-wide skill catalogue plus synonym lookup structures.
/// Immutable after construction; safe to share across requests without locking.
#[derive(Debug)]
pub struct Taxonomy {
    skills: Vec<Skill>,
    groups: Vec<SynonymGroup>,
    /// Lowercased surface form -> index into `groups`.
    form_index: HashMap<String, usize>,
}

impl Taxonomy {
    pub fn new() -> Self {
        let skills = SKILL_CATALOGUE.iter().map(|s| Skill::new(*s)).collect();

        let mut groups = Vec::with_capacity(SYNONYM_GROUPS.len());
        let mut form_index = HashMap::new();
        for (idx, forms) in SYNONYM_GROUPS.iter().enumerate() {
            groups.push(SynonymGroup {
                forms: forms.iter().map(|f| f.to_string()).collect(),
            });
            for form in *forms {
                form_index.insert(form.to_lowercase(), idx);
            }
        }

        Taxonomy {
            skills,
            groups,
            form_index,
        }
    }

    /// All catalogue skills, in fixed iteration order.
    pub fn all_skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn synonym_group_count(&self) -> usize {
        self.groups.len()
    }

    /// The synonym group a term belongs to, if any. Case-insensitive.
    pub fn synonym_group_for(&self, term: &str) -> Option<&SynonymGroup> {
        self.form_index
            .get(&term.to_lowercase())
            .map(|&idx| &self.groups[idx])
    }

    /// Whether two terms denote the same competency: either both resolve to the
    /// same synonym group, or one is a case-insensitive substring of the other
    /// and both are longer than 3 characters (the loose containment rule).
    pub fn is_synonym(&self, a: &str, b: &str) -> bool {
        let a_lower = a.to_lowercase();
        let b_lower = b.to_lowercase();

        if let (Some(&ga), Some(&gb)) = (
            self.form_index.get(&a_lower),
            self.form_index.get(&b_lower),
        ) {
            if ga == gb {
                return true;
            }
        }

        a_lower.len() > 3
            && b_lower.len() > 3
            && (a_lower.contains(&b_lower) || b_lower.contains(&a_lower))
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_equality_is_case_insensitive() {
        assert_eq!(Skill::new("React"), Skill::new("react"));
        assert_eq!(Skill::new("NODE.JS"), Skill::new("Node.js"));
        assert_ne!(Skill::new("React"), Skill::new("Redux"));
    }

    #[test]
    fn test_catalogue_order_is_stable() {
        let taxonomy = Taxonomy::new();
        let names: Vec<&str> = taxonomy.all_skills().iter().map(|s| s.name()).collect();
        let react = names.iter().position(|&n| n == "React").unwrap();
        let node = names.iter().position(|&n| n == "Node.js").unwrap();
        let python = names.iter().position(|&n| n == "Python").unwrap();
        assert!(react < node && node < python);
    }

    #[test]
    fn test_synonym_group_lookup_is_case_insensitive() {
        let taxonomy = Taxonomy::new();
        let group = taxonomy.synonym_group_for("K8S").unwrap();
        assert!(group.forms.iter().any(|f| f == "kubernetes"));
    }

    #[test]
    fn test_unknown_term_has_no_group() {
        let taxonomy = Taxonomy::new();
        assert!(taxonomy.synonym_group_for("underwater basket weaving").is_none());
    }

    #[test]
    fn test_surface_forms_are_unique_across_groups() {
        let mut seen = std::collections::HashSet::new();
        for forms in SYNONYM_GROUPS {
            for form in *forms {
                assert!(
                    seen.insert(form.to_lowercase()),
                    "surface form '{form}' appears in more than one group"
                );
            }
        }
    }

    #[test]
    fn test_is_synonym_via_group() {
        let taxonomy = Taxonomy::new();
        assert!(taxonomy.is_synonym("js", "ecmascript"));
        assert!(taxonomy.is_synonym("Node", "node.js"));
        assert!(taxonomy.is_synonym("K8s", "Kubernetes"));
    }

    #[test]
    fn test_is_synonym_via_loose_containment() {
        let taxonomy = Taxonomy::new();
        // Neither form is in a group together; containment carries it.
        assert!(taxonomy.is_synonym("React", "ReactJS"));
        assert!(taxonomy.is_synonym("reactjs", "react"));
    }

    #[test]
    fn test_short_terms_never_match_by_containment() {
        let taxonomy = Taxonomy::new();
        // "Go" is length 2; containment requires both sides longer than 3.
        assert!(!taxonomy.is_synonym("Go", "Google"));
        assert!(!taxonomy.is_synonym("AI", "Agile"));
    }

    #[test]
    fn test_is_synonym_is_symmetric() {
        let taxonomy = Taxonomy::new();
        let pairs = [
            ("js", "javascript"),
            ("Node", "Node.js"),
            ("React", "ReactJS"),
            ("Docker", "Kubernetes"),
            ("Go", "Rust"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                taxonomy.is_synonym(a, b),
                taxonomy.is_synonym(b, a),
                "is_synonym({a}, {b}) not symmetric"
            );
        }
    }

    #[test]
    fn test_distinct_skills_are_not_synonyms() {
        let taxonomy = Taxonomy::new();
        assert!(!taxonomy.is_synonym("Docker", "Kubernetes"));
        assert!(!taxonomy.is_synonym("Python", "Ruby"));
    }
}
