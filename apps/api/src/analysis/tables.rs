//! Constant data backing the heuristic scorer: section presence terms,
//! score pairs, keyword patterns, classification rules, and the static
//! advice lists. Kept separate from the scoring logic so the tables can
//! be tuned without touching the algorithm.

use std::sync::OnceLock;

use regex::Regex;

// ────────────────────────────────────────────────────────────────────────────
// Section presence terms (matched against lowercased text)
// ────────────────────────────────────────────────────────────────────────────

pub const CONTACT_TERMS: &[&str] = &["email", "phone", "address", "linkedin"];
pub const EXPERIENCE_TERMS: &[&str] = &["experience", "work", "job", "employment"];
pub const EDUCATION_TERMS: &[&str] = &[
    "education",
    "degree",
    "university",
    "college",
    "bachelor",
    "master",
    "phd",
];
pub const SKILLS_TERMS: &[&str] = &["skills", "technologies", "programming", "languages", "tools"];
pub const PROJECTS_TERMS: &[&str] = &["projects", "portfolio", "github", "repository"];
pub const SUMMARY_TERMS: &[&str] = &["summary", "objective", "profile", "about"];

// ────────────────────────────────────────────────────────────────────────────
// Section score pairs: (present, absent)
// ────────────────────────────────────────────────────────────────────────────

pub const CONTACT_SCORES: (u32, u32) = (85, 40);
pub const SUMMARY_SCORES: (u32, u32) = (75, 50);
pub const EXPERIENCE_SCORES: (u32, u32) = (80, 30);
pub const EDUCATION_SCORES: (u32, u32) = (85, 40);
pub const SKILLS_SCORES: (u32, u32) = (70, 35);
pub const PROJECTS_SCORES: (u32, u32) = (65, 25);

/// Text longer than this earns the "substantial content" strength.
pub const SUBSTANTIAL_CONTENT_CHARS: usize = 1000;
/// Text shorter than this earns the "too brief" weakness.
pub const BRIEF_CONTENT_CHARS: usize = 500;

// ────────────────────────────────────────────────────────────────────────────
// Classification rules — ordered, first match wins
// ────────────────────────────────────────────────────────────────────────────

pub const INDUSTRY_RULES: &[(&[&str], &str)] = &[
    (
        &[
            "software",
            "developer",
            "programming",
            "coding",
            "javascript",
            "python",
            "java",
            "react",
            "node",
        ],
        "Technology/Software Development",
    ),
    (
        &["marketing", "sales", "business", "management", "strategy"],
        "Business/Marketing",
    ),
    (
        &["design", "creative", "ui", "ux", "graphic", "art"],
        "Design/Creative",
    ),
    (
        &["finance", "accounting", "banking", "investment"],
        "Finance/Accounting",
    ),
];
pub const DEFAULT_INDUSTRY: &str = "General";

pub const EXPERIENCE_LEVEL_RULES: &[(&[&str], &str)] = &[
    (
        &["senior", "lead", "manager", "director", "vp", "chief"],
        "Senior/Executive",
    ),
    (&["mid", "intermediate", "3+", "5+"], "Mid-level"),
];
pub const DEFAULT_EXPERIENCE_LEVEL: &str = "Entry-level";

// ────────────────────────────────────────────────────────────────────────────
// Keyword extraction
// ────────────────────────────────────────────────────────────────────────────

/// Ordered keyword patterns. For each pattern the scorer keeps only the
/// first (leftmost) match; alternation order matters for `javascript|js`.
pub const KEYWORD_PATTERNS: &[&str] = &[
    "javascript|js",
    "python",
    "react",
    "node",
    "java",
    "sql",
    "html",
    "css",
    "git",
    "agile",
    "scrum",
    "aws",
    "docker",
    "marketing",
    "sales",
    "management",
    "leadership",
    "analysis",
];

/// Cap on the deduplicated keyword list.
pub const MAX_KEYWORDS: usize = 10;

/// Returned when no keyword pattern matches at all.
pub const FALLBACK_KEYWORDS: &[&str] = &["resume", "professional", "experience"];

static KEYWORD_REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();

/// Compiled keyword patterns, built once on first use.
pub fn keyword_regexes() -> &'static [Regex] {
    KEYWORD_REGEXES.get_or_init(|| {
        KEYWORD_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("valid keyword pattern"))
            .collect()
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Static advice — content-independent by design, returned verbatim
// ────────────────────────────────────────────────────────────────────────────

pub const SUGGESTIONS: &[&str] = &[
    "Add quantifiable achievements to experience section",
    "Include specific metrics and results",
    "Optimize for ATS with relevant keywords",
    "Add a compelling professional summary",
    "Include relevant certifications if applicable",
    "Add links to portfolio or GitHub projects",
];

pub const RECOMMENDATIONS: &[&str] = &[
    "Tailor resume for specific job descriptions",
    "Use action verbs to describe achievements",
    "Include relevant certifications and training",
    "Optimize resume for applicant tracking systems",
    "Add a professional headshot if appropriate",
    "Keep resume to 1-2 pages maximum",
];
