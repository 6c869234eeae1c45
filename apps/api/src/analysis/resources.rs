//! Learning-resource lookup: a static table keyed by canonical skill name,
//! with a fixed fallback list for skills without curated entries.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub label: &'static str,
    pub url: &'static str,
}

macro_rules! resources {
    ($(($label:expr, $url:expr)),+ $(,)?) => {
        &[$(Resource { label: $label, url: $url }),+]
    };
}

/// General-purpose platforms recommended when no curated list exists.
const DEFAULT_RESOURCES: &[Resource] = resources![
    ("Coursera", "https://www.coursera.org/"),
    ("edX", "https://www.edx.org/"),
    ("Udemy", "https://www.udemy.com/"),
];

/// Curated resources for a skill, or the default list for unknown skills.
/// Lookup is case-insensitive; no network access.
pub fn resources_for(skill: &str) -> &'static [Resource] {
    match skill.to_lowercase().as_str() {
        "javascript" => resources![
            ("MDN Web Docs", "https://developer.mozilla.org/en-US/docs/Web/JavaScript"),
            ("JavaScript.info", "https://javascript.info/"),
            ("Eloquent JavaScript", "https://eloquentjavascript.net/"),
        ],
        "typescript" => resources![
            ("TypeScript Documentation", "https://www.typescriptlang.org/docs/"),
            ("TypeScript Deep Dive", "https://basarat.gitbook.io/typescript/"),
        ],
        "react" => resources![
            ("React Documentation", "https://react.dev/learn"),
            ("React Tutorial", "https://react.dev/learn/tutorial-tic-tac-toe"),
            ("Egghead.io React Courses", "https://egghead.io/q/react"),
        ],
        "python" => resources![
            ("Python.org Documentation", "https://docs.python.org/3/"),
            ("Real Python", "https://realpython.com/"),
            ("Python Crash Course (Book)", "https://nostarch.com/pythoncrashcourse2e"),
        ],
        "machine learning" => resources![
            ("Coursera Machine Learning", "https://www.coursera.org/learn/machine-learning"),
            ("Fast.ai", "https://www.fast.ai/"),
            ("Machine Learning Mastery", "https://machinelearningmastery.com/"),
        ],
        "docker" => resources![
            ("Docker Documentation", "https://docs.docker.com/"),
            ("Docker for Beginners", "https://docker-curriculum.com/"),
        ],
        "aws" => resources![
            ("AWS Getting Started", "https://aws.amazon.com/getting-started/"),
            ("AWS Training", "https://aws.amazon.com/training/"),
        ],
        "sql" => resources![
            ("SQL Tutorial", "https://www.w3schools.com/sql/"),
            ("Mode SQL Tutorial", "https://mode.com/sql-tutorial/"),
        ],
        "git" => resources![
            ("Git Documentation", "https://git-scm.com/doc"),
            ("Learn Git Branching", "https://learngitbranching.js.org/"),
        ],
        "node.js" => resources![
            ("Node.js Documentation", "https://nodejs.org/en/docs/"),
            ("Node.js Best Practices", "https://github.com/goldbergyoni/nodebestpractices"),
        ],
        "kubernetes" => resources![
            ("Kubernetes Documentation", "https://kubernetes.io/docs/home/"),
            ("Kubernetes the Hard Way", "https://github.com/kelseyhightower/kubernetes-the-hard-way"),
        ],
        "rust" => resources![
            ("The Rust Book", "https://doc.rust-lang.org/book/"),
            ("Rustlings", "https://github.com/rust-lang/rustlings"),
        ],
        _ => DEFAULT_RESOURCES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_skill_returns_curated_list() {
        let resources = resources_for("JavaScript");
        assert!(resources.iter().any(|r| r.label == "MDN Web Docs"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(resources_for("python"), resources_for("PYTHON"));
    }

    #[test]
    fn test_unknown_skill_falls_back_to_defaults() {
        let resources = resources_for("Underwater Basket Weaving");
        assert_eq!(resources, DEFAULT_RESOURCES);
        assert_eq!(resources.len(), 3);
    }

    #[test]
    fn test_multi_word_skill_lookup() {
        let resources = resources_for("Machine Learning");
        assert!(resources.iter().any(|r| r.label == "Fast.ai"));
    }

    #[test]
    fn test_every_entry_has_https_url() {
        for skill in ["JavaScript", "React", "Docker", "nothing curated"] {
            for resource in resources_for(skill) {
                assert!(resource.url.starts_with("https://"), "{}", resource.url);
            }
        }
    }
}
