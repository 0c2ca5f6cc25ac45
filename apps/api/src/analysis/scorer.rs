//! Heuristic resume scorer — a pure, deterministic pass over extracted text.
//!
//! No I/O, no state, total over every string input (the empty string
//! resolves every section to its absent branch). Safe to call from any
//! number of concurrent request handlers.

use serde::{Deserialize, Serialize};

use crate::analysis::tables::{
    keyword_regexes, BRIEF_CONTENT_CHARS, CONTACT_SCORES, CONTACT_TERMS, DEFAULT_EXPERIENCE_LEVEL,
    DEFAULT_INDUSTRY, EDUCATION_SCORES, EDUCATION_TERMS, EXPERIENCE_LEVEL_RULES, EXPERIENCE_SCORES,
    EXPERIENCE_TERMS, FALLBACK_KEYWORDS, INDUSTRY_RULES, MAX_KEYWORDS, PROJECTS_SCORES,
    PROJECTS_TERMS, SKILLS_SCORES, SKILLS_TERMS, SUBSTANTIAL_CONTENT_CHARS, SUGGESTIONS,
    RECOMMENDATIONS, SUMMARY_SCORES, SUMMARY_TERMS,
};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Score and feedback for one resume section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionReport {
    pub score: u32,
    pub feedback: String,
}

/// The six fixed resume sections. A struct rather than a map, so every
/// report carries all six keys by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionScores {
    pub contact: SectionReport,
    pub summary: SectionReport,
    pub experience: SectionReport,
    pub education: SectionReport,
    pub skills: SectionReport,
    pub projects: SectionReport,
}

/// Full analysis report for one input text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub overall_score: u32,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub missing_elements: Vec<String>,
    pub sections: SectionScores,
    pub keywords: Vec<String>,
    pub industry_fit: String,
    pub experience_level: String,
    pub recommendations: Vec<String>,
}

/// Presence flags for the six sections, detected independently.
#[derive(Debug, Clone, Copy)]
struct SectionFlags {
    contact: bool,
    summary: bool,
    experience: bool,
    education: bool,
    skills: bool,
    projects: bool,
}

impl SectionFlags {
    fn detect(lower: &str) -> Self {
        Self {
            contact: contains_any(lower, CONTACT_TERMS),
            summary: contains_any(lower, SUMMARY_TERMS),
            experience: contains_any(lower, EXPERIENCE_TERMS),
            education: contains_any(lower, EDUCATION_TERMS),
            skills: contains_any(lower, SKILLS_TERMS),
            projects: contains_any(lower, PROJECTS_TERMS),
        }
    }
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// Analyzes extracted resume text and builds the full report.
pub fn analyze(text: &str) -> AnalysisReport {
    let lower = text.to_lowercase();
    let flags = SectionFlags::detect(&lower);
    let char_count = lower.chars().count();

    let sections = build_sections(&flags);
    let overall_score = overall_score(&sections);

    AnalysisReport {
        overall_score,
        summary: build_summary(overall_score),
        strengths: build_strengths(&flags, char_count),
        weaknesses: build_weaknesses(&flags, char_count),
        suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        missing_elements: build_missing_elements(&flags),
        sections,
        keywords: extract_keywords(&lower),
        industry_fit: classify(&lower, INDUSTRY_RULES, DEFAULT_INDUSTRY),
        experience_level: classify(&lower, EXPERIENCE_LEVEL_RULES, DEFAULT_EXPERIENCE_LEVEL),
        recommendations: RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
    }
}

fn build_sections(flags: &SectionFlags) -> SectionScores {
    SectionScores {
        contact: section(
            flags.contact,
            CONTACT_SCORES,
            "Contact information is complete and professional",
            "Contact information is missing or incomplete",
        ),
        summary: section(
            flags.summary,
            SUMMARY_SCORES,
            "Professional summary provides good overview",
            "Missing professional summary or objective statement",
        ),
        experience: section(
            flags.experience,
            EXPERIENCE_SCORES,
            "Work experience section demonstrates relevant background",
            "Work experience section needs more detail or is missing",
        ),
        education: section(
            flags.education,
            EDUCATION_SCORES,
            "Educational background is well presented",
            "Educational information could be more detailed",
        ),
        skills: section(
            flags.skills,
            SKILLS_SCORES,
            "Skills section shows technical capabilities",
            "Skills section needs more specific technical details",
        ),
        projects: section(
            flags.projects,
            PROJECTS_SCORES,
            "Project experience demonstrates practical skills",
            "Project portfolio could enhance the resume",
        ),
    }
}

fn section(present: bool, scores: (u32, u32), present_fb: &str, absent_fb: &str) -> SectionReport {
    let (score, feedback) = if present {
        (scores.0, present_fb)
    } else {
        (scores.1, absent_fb)
    };
    SectionReport {
        score,
        feedback: feedback.to_string(),
    }
}

/// Rounded arithmetic mean of the six section scores.
fn overall_score(sections: &SectionScores) -> u32 {
    let sum = sections.contact.score
        + sections.summary.score
        + sections.experience.score
        + sections.education.score
        + sections.skills.score
        + sections.projects.score;
    (sum as f64 / 6.0).round() as u32
}

fn build_summary(overall_score: u32) -> String {
    let quality = if overall_score >= 70 {
        "good"
    } else if overall_score >= 50 {
        "moderate"
    } else {
        "basic"
    };
    let closing = if overall_score >= 70 {
        "It demonstrates professional presentation and includes most essential sections."
    } else {
        "Consider adding more details and optimizing for better impact."
    };
    format!("This resume shows {quality} structure and content. {closing}")
}

fn build_strengths(flags: &SectionFlags, char_count: usize) -> Vec<String> {
    let mut strengths = Vec::new();
    if flags.contact {
        strengths.push("Complete contact information provided".to_string());
    }
    if flags.experience {
        strengths.push("Work experience section is present".to_string());
    }
    if flags.education {
        strengths.push("Educational background is included".to_string());
    }
    if flags.skills {
        strengths.push("Skills section demonstrates technical capabilities".to_string());
    }
    if flags.projects {
        strengths.push("Project experience shows practical application".to_string());
    }
    if char_count > SUBSTANTIAL_CONTENT_CHARS {
        strengths.push("Resume has substantial content".to_string());
    }
    strengths
}

fn build_weaknesses(flags: &SectionFlags, char_count: usize) -> Vec<String> {
    let mut weaknesses = Vec::new();
    if !flags.contact {
        weaknesses.push("Missing or incomplete contact information".to_string());
    }
    if !flags.summary {
        weaknesses.push("No professional summary or objective".to_string());
    }
    if !flags.experience {
        weaknesses.push("Work experience section is missing".to_string());
    }
    if !flags.education {
        weaknesses.push("Educational background is not included".to_string());
    }
    if !flags.skills {
        weaknesses.push("Skills section is missing or minimal".to_string());
    }
    if !flags.projects {
        weaknesses.push("No project portfolio or GitHub links".to_string());
    }
    if char_count < BRIEF_CONTENT_CHARS {
        weaknesses.push("Resume content is too brief".to_string());
    }
    weaknesses
}

fn build_missing_elements(flags: &SectionFlags) -> Vec<String> {
    let checks = [
        (flags.summary, "Professional summary"),
        (flags.projects, "Project portfolio"),
        (flags.skills, "Detailed skills section"),
        (flags.contact, "Complete contact details"),
    ];
    checks
        .iter()
        .filter(|(present, _)| !present)
        .map(|(_, label)| label.to_string())
        .collect()
}

/// First-match-wins over an ordered rule list.
fn classify(lower: &str, rules: &[(&[&str], &str)], default: &str) -> String {
    rules
        .iter()
        .find(|(terms, _)| contains_any(lower, terms))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| default.to_string())
}

/// For each keyword pattern, the first match (lowercased); deduplicated in
/// first-occurrence order and capped at [`MAX_KEYWORDS`].
fn extract_keywords(lower: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for re in keyword_regexes() {
        if let Some(m) = re.find(lower) {
            let keyword = m.as_str().to_lowercase();
            if !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }
    }
    keywords.truncate(MAX_KEYWORDS);

    if keywords.is_empty() {
        FALLBACK_KEYWORDS.iter().map(|s| s.to_string()).collect()
    } else {
        keywords
    }
}
