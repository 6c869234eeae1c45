//! Job-role presets: curated target skill lists a caller can analyze against
//! without pasting a job description.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobRole {
    pub id: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

const JOB_ROLES: &[JobRole] = &[
    JobRole {
        id: "frontend-developer",
        title: "Frontend Developer",
        skills: &[
            "JavaScript",
            "TypeScript",
            "React",
            "HTML5",
            "CSS3",
            "Responsive Design",
            "REST API",
            "Git",
            "Webpack",
            "Jest",
            "Redux",
            "SCSS/SASS",
            "UI/UX Principles",
            "Performance Optimization",
        ],
    },
    JobRole {
        id: "backend-developer",
        title: "Backend Developer",
        skills: &[
            "Node.js",
            "Python",
            "Java",
            "Express.js",
            "MongoDB",
            "PostgreSQL",
            "MySQL",
            "Redis",
            "RESTful APIs",
            "Docker",
            "Kubernetes",
            "CI/CD",
            "AWS",
            "Microservices Architecture",
        ],
    },
    JobRole {
        id: "data-scientist",
        title: "Data Scientist",
        skills: &[
            "Python",
            "R",
            "SQL",
            "Machine Learning",
            "Deep Learning",
            "TensorFlow",
            "PyTorch",
            "Scikit-learn",
            "Pandas",
            "NumPy",
            "Data Visualization",
            "Statistical Analysis",
            "Jupyter",
            "Feature Engineering",
        ],
    },
    JobRole {
        id: "product-manager",
        title: "Product Manager",
        skills: &[
            "Product Strategy",
            "User Research",
            "Agile Methodologies",
            "Roadmapping",
            "Prioritization",
            "Market Analysis",
            "User Stories",
            "A/B Testing",
            "KPI Definition",
            "Stakeholder Management",
            "Cross-functional Team Leadership",
            "Product Analytics",
        ],
    },
    JobRole {
        id: "devops-engineer",
        title: "DevOps Engineer",
        skills: &[
            "Linux Administration",
            "CI/CD Pipelines",
            "Infrastructure as Code",
            "Docker",
            "Kubernetes",
            "Terraform",
            "Ansible",
            "AWS/GCP/Azure",
            "Monitoring Tools",
            "Bash Scripting",
            "Python",
            "Networking",
            "Security Best Practices",
        ],
    },
];

/// All role presets, in catalogue order.
pub fn all_roles() -> &'static [JobRole] {
    JOB_ROLES
}

/// Looks up a role preset by its id. Case-insensitive; unknown ids are a
/// normal miss, not an error.
pub fn role_by_id(id: &str) -> Option<&'static JobRole> {
    JOB_ROLES.iter().find(|r| r.id.eq_ignore_ascii_case(id))
}
