//! Dictionary-based skill tagging

use crate::types::{Section, SectionKind};

/// Canonical skill vocabulary, scanned in order
///
/// Matching is case-insensitive against the text but the canonical casing
/// here is what ends up on the record.
const KNOWN_SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "TypeScript",
    "React",
    "Vue",
    "Angular",
    "Node",
    "Node.js",
    "FastAPI",
    "Django",
    "Flask",
    "Express",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "SQLite",
    "Docker",
    "Kubernetes",
    "AWS",
    "GCP",
    "Azure",
    "Git",
    "CI/CD",
    "Linux",
    "Terraform",
    "PyTorch",
    "TensorFlow",
    "MLflow",
    "Pandas",
    "NumPy",
    "Java",
    "Go",
    "Rust",
    "C++",
    "C#",
    "Ruby",
    "PHP",
    "Swift",
    "GraphQL",
    "REST",
    "gRPC",
    "Kafka",
    "RabbitMQ",
    "HTML",
    "CSS",
    "Tailwind",
    "SASS",
    "LESS",
    "FAISS",
    "LangChain",
    "OpenAI",
    "Hugging Face",
    "Spark",
    "Airflow",
    "dbt",
    "Snowflake",
    "BigQuery",
    "Figma",
    "Jira",
    "Confluence",
];

/// Extracts skill tags from parsed sections
pub struct SkillTagger {
    max_tags: usize,
}

impl SkillTagger {
    pub fn new(max_tags: usize) -> Self {
        Self { max_tags }
    }

    /// Scan for known skills, preferring dedicated skills sections
    ///
    /// When the resume has no skills section, the first two sections stand
    /// in as the haystack. Results keep vocabulary order, not text order.
    pub fn extract(&self, sections: &[Section]) -> Vec<String> {
        let mut haystack = String::new();
        for section in sections {
            if section.kind == SectionKind::Skills {
                haystack.push(' ');
                haystack.push_str(&section.text);
            }
        }

        if haystack.trim().is_empty() {
            haystack = sections
                .iter()
                .take(2)
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
        }

        let haystack = haystack.to_lowercase();
        let mut found = Vec::new();
        for skill in KNOWN_SKILLS {
            if found.len() >= self.max_tags {
                break;
            }
            if haystack.contains(&skill.to_lowercase())
                && !found.iter().any(|f: &String| f == skill)
            {
                found.push(skill.to_string());
            }
        }
        found
    }
}

impl Default for SkillTagger {
    fn default() -> Self {
        Self::new(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_skills_in_fallback_sections() {
        let tagger = SkillTagger::default();
        let sections = vec![Section::new(
            SectionKind::Other,
            "Experienced with Python, React, and Docker",
        )];

        assert_eq!(tagger.extract(&sections), vec!["Python", "React", "Docker"]);
    }

    #[test]
    fn returns_canonical_casing() {
        let tagger = SkillTagger::default();
        let sections = vec![Section::new(SectionKind::Skills, "PYTHON and docker")];

        assert_eq!(tagger.extract(&sections), vec!["Python", "Docker"]);
    }

    #[test]
    fn caps_results_at_max_tags() {
        let tagger = SkillTagger::new(3);
        let sections = vec![Section::new(
            SectionKind::Skills,
            "Python JavaScript TypeScript React Vue Angular",
        )];

        let skills = tagger.extract(&sections);
        assert_eq!(skills, vec!["Python", "JavaScript", "TypeScript"]);
    }

    #[test]
    fn skills_sections_take_priority() {
        let tagger = SkillTagger::default();
        let sections = vec![
            Section::new(SectionKind::Summary, "Shipped Kafka pipelines"),
            Section::new(SectionKind::Skills, "Rust, PostgreSQL"),
        ];

        // Kafka lives outside the skills section, so it is not scanned.
        assert_eq!(tagger.extract(&sections), vec!["PostgreSQL", "Rust"]);
    }

    #[test]
    fn multiple_skills_sections_are_concatenated() {
        let tagger = SkillTagger::default();
        let sections = vec![
            Section::new(SectionKind::Skills, "Python"),
            Section::new(SectionKind::Experience, "Built services"),
            Section::new(SectionKind::Skills, "Terraform"),
        ];

        assert_eq!(tagger.extract(&sections), vec!["Python", "Terraform"]);
    }

    #[test]
    fn node_matches_both_variants() {
        let tagger = SkillTagger::default();
        let sections = vec![Section::new(SectionKind::Skills, "Node.js services")];

        // "Node" is a substring of "Node.js", so both vocabulary entries hit.
        assert_eq!(tagger.extract(&sections), vec!["Node", "Node.js"]);
    }

    #[test]
    fn no_sections_yields_no_skills() {
        let tagger = SkillTagger::default();
        assert!(tagger.extract(&[]).is_empty());
    }
}
