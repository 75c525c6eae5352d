//! Static reference tables for skill detection.
//!
//! All aliases and topic keywords are lowercase. Every synonym target and
//! every topic skill is a member of [`SKILL_VOCABULARY`].

// =============================================================================
// VOCABULARY
// =============================================================================

/// Canonical skill labels, in display casing
pub const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "Java",
    "HTML/CSS",
    "AWS",
    "SQL",
    "Git",
    "Docker",
    "TypeScript",
    "Ruby",
    "Angular",
    "Vue.js",
    "Express",
    "Kubernetes",
    "Azure",
    "Google Cloud",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "SQLite",
    "Machine Learning",
    "Data Science",
    "TensorFlow",
    "PyTorch",
    "Pandas",
    "React Native",
    "Flutter",
    "Swift",
    "Kotlin",
    "Xamarin",
    "Agile",
    "Scrum",
    "UI/UX Design",
    "SEO",
];

// =============================================================================
// SYNONYMS
// =============================================================================

/// Alias -> canonical label
pub const SKILL_SYNONYMS: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("typescript", "TypeScript"),
    ("ts", "TypeScript"),
    ("reactjs", "React"),
    ("react.js", "React"),
    ("nodejs", "Node.js"),
    ("node", "Node.js"),
    ("html", "HTML/CSS"),
    ("css", "HTML/CSS"),
    ("postgres", "PostgreSQL"),
    ("mongo", "MongoDB"),
    ("k8s", "Kubernetes"),
    ("python3", "Python"),
    ("ml", "Machine Learning"),
    ("ai", "Machine Learning"),
    ("artificial intelligence", "Machine Learning"),
    ("ux design", "UI/UX Design"),
    ("ui design", "UI/UX Design"),
    // Broad terms that still imply a concrete skill
    ("cloud", "AWS"),
    ("infra", "AWS"),
    ("infrastructure", "AWS"),
    ("web", "HTML/CSS"),
];

// =============================================================================
// TOPICS
// =============================================================================

/// Topic keyword -> skills it expands to
pub const TOPIC_SKILLS: &[(&str, &[&str])] = &[
    (
        "frontend",
        &["React", "JavaScript", "HTML/CSS", "Angular", "Vue.js"],
    ),
    (
        "backend",
        &["Node.js", "Express", "Python", "Java", "MongoDB", "SQL"],
    ),
    ("fullstack", &["React", "Node.js", "MongoDB", "JavaScript"]),
    ("mobile", &["React Native", "Flutter", "Swift", "Kotlin"]),
    ("cloud", &["AWS", "Azure", "Google Cloud"]),
    ("devops", &["Docker", "Kubernetes", "Git"]),
    ("ui", &["UI/UX Design", "HTML/CSS"]),
    (
        "ai",
        &["Machine Learning", "Data Science", "TensorFlow", "PyTorch"],
    ),
];

// =============================================================================
// SPECIAL CASES
// =============================================================================

/// Substring that, together with an [`INFRA_MARKERS`] hit, adds every cloud provider
pub const CLOUD_MARKER: &str = "cloud";

pub const INFRA_MARKERS: &[&str] = &["infra", "infrastructure"];

pub const CLOUD_PROVIDERS: &[&str] = &["AWS", "Azure", "Google Cloud"];

pub const ENGINEER_MARKER: &str = "engineer";

/// Either substring marks a project-manager role. `"pm"` is not word-bounded.
pub const PM_MARKERS: &[&str] = &["project manager", "pm"];

/// Role sentinel for engineering roles
pub const ENGINEER_SENTINEL: &str = "ENGINEER";

/// Role sentinel for project-manager roles
pub const PM_SENTINEL: &str = "PM";
