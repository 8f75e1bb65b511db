//! Heading-driven section parsing
//!
//! Splits extracted resume text into labeled sections by scanning for
//! heading lines. Everything between one heading and the next belongs to the
//! first heading's section.

use regex::Regex;

use crate::types::{Section, SectionKind};

/// Lines longer than this are never headings
const MAX_HEADING_LEN: usize = 60;

/// Maps a single line to a section label, if it is a heading
pub trait SectionClassifier: Send + Sync {
    fn classify(&self, line: &str) -> Option<SectionKind>;
}

/// Regex-based heading classifier
///
/// Strips decorator characters ("=== Skills ===", "SKILLS:") before
/// matching. Patterns anchor at the start of the cleaned line, so
/// "Experience with Docker" inside a paragraph still counts as a heading
/// only when the line itself is short enough to look like one.
pub struct HeuristicSectionClassifier {
    patterns: Vec<(SectionKind, Regex)>,
    decorators: Regex,
}

impl HeuristicSectionClassifier {
    pub fn new() -> Self {
        // Match order is fixed. Earlier labels win when a line matches more
        // than one pattern.
        let patterns = vec![
            (
                SectionKind::Summary,
                r"^(?:summary|objective|profile|about\s*me|professional\s*summary)",
            ),
            (
                SectionKind::Skills,
                r"^(?:skills|technical\s*skills|core\s*competencies|technologies|tools|proficiencies)",
            ),
            (
                SectionKind::Experience,
                r"^(?:experience|work\s*experience|employment|professional\s*experience|work\s*history)",
            ),
            (
                SectionKind::Projects,
                r"^(?:projects|personal\s*projects|key\s*projects|selected\s*projects|portfolio)",
            ),
            (
                SectionKind::Education,
                r"^(?:education|academic|degrees|certifications?|training|courses)",
            ),
        ]
        .into_iter()
        .map(|(kind, pattern)| {
            let regex = Regex::new(&format!("(?i){}", pattern)).expect("Invalid regex");
            (kind, regex)
        })
        .collect();

        Self {
            patterns,
            decorators: Regex::new(r"^[\s\-=_*#|:]+|[\s\-=_*#|:]+$").expect("Invalid regex"),
        }
    }
}

impl Default for HeuristicSectionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionClassifier for HeuristicSectionClassifier {
    fn classify(&self, line: &str) -> Option<SectionKind> {
        let line = line.trim();
        if line.chars().count() > MAX_HEADING_LEN {
            return None;
        }

        let cleaned = self.decorators.replace_all(line, "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return None;
        }

        for (kind, regex) in &self.patterns {
            if regex.is_match(cleaned) {
                return Some(*kind);
            }
        }
        None
    }
}

/// Splits raw resume text into labeled sections
pub struct SectionParser {
    classifier: Box<dyn SectionClassifier>,
}

impl SectionParser {
    pub fn new() -> Self {
        Self::with_classifier(Box::new(HeuristicSectionClassifier::new()))
    }

    pub fn with_classifier(classifier: Box<dyn SectionClassifier>) -> Self {
        Self { classifier }
    }

    /// Parse raw text into sections
    ///
    /// Always returns at least one section. Text before the first heading
    /// is treated as summary content; input that produces no sections at
    /// all falls back to a single other section.
    pub fn parse(&self, raw_text: &str) -> Vec<Section> {
        if raw_text.trim().is_empty() {
            return vec![Section::new(SectionKind::Other, raw_text)];
        }

        let mut sections = Vec::new();
        // Text before the first heading is treated as an untitled summary.
        let mut current_kind = SectionKind::Summary;
        let mut buffer: Vec<&str> = Vec::new();

        for line in raw_text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                // Keep paragraph breaks inside the section body.
                buffer.push("");
                continue;
            }
            if let Some(kind) = self.classifier.classify(trimmed) {
                flush(&mut sections, current_kind, &mut buffer);
                current_kind = kind;
            } else {
                buffer.push(trimmed);
            }
        }
        flush(&mut sections, current_kind, &mut buffer);

        if sections.is_empty() {
            return vec![Section::new(SectionKind::Other, raw_text.trim())];
        }
        sections
    }
}

impl Default for SectionParser {
    fn default() -> Self {
        Self::new()
    }
}

fn flush(sections: &mut Vec<Section>, kind: SectionKind, buffer: &mut Vec<&str>) {
    let text = buffer.join("\n");
    let text = text.trim();
    if !text.is_empty() {
        sections.push(Section::new(kind, text));
    }
    buffer.clear();
}
