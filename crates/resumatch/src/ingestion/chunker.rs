//! Word-window chunking within section boundaries

use crate::types::{Chunk, Section, SectionKind};

/// Approximate words per token for budget conversion
const WORDS_PER_TOKEN: f64 = 0.75;
/// Approximate tokens per word for the reported estimate
const TOKENS_PER_WORD: f64 = 1.33;

/// Cuts sections into overlapping word windows
///
/// Windows never cross a section boundary. Chunk indices run globally
/// across all sections of one resume.
pub struct SectionChunker {
    words_per_chunk: usize,
    words_overlap: usize,
}

impl SectionChunker {
    /// Build a chunker from token budgets
    pub fn new(chunk_size_tokens: usize, overlap_tokens: usize) -> Self {
        Self {
            words_per_chunk: (chunk_size_tokens as f64 * WORDS_PER_TOKEN) as usize,
            words_overlap: (overlap_tokens as f64 * WORDS_PER_TOKEN) as usize,
        }
    }

    /// Chunk all sections in order
    pub fn chunk(&self, sections: &[Section]) -> Vec<Chunk> {
        let mut chunks = Vec::new();

        for section in sections {
            let words: Vec<&str> = section.text.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }

            if words.len() <= self.words_per_chunk {
                // Short sections pass through verbatim, newlines intact.
                let index = chunks.len();
                chunks.push(make_chunk(
                    section.kind,
                    section.weight(),
                    section.text.clone(),
                    words.len(),
                    index,
                ));
                continue;
            }

            let step = self.words_per_chunk.saturating_sub(self.words_overlap);
            let mut start = 0;
            while start < words.len() {
                let end = (start + self.words_per_chunk).min(words.len());
                let text = words[start..end].join(" ");
                let index = chunks.len();
                chunks.push(make_chunk(
                    section.kind,
                    section.weight(),
                    text,
                    end - start,
                    index,
                ));
                // A zero step would loop forever on pathological configs.
                if step == 0 {
                    break;
                }
                start += step;
            }
        }

        chunks
    }
}

impl Default for SectionChunker {
    fn default() -> Self {
        Self::new(256, 32)
    }
}

fn make_chunk(
    section: SectionKind,
    weight: f32,
    text: String,
    word_count: usize,
    index: usize,
) -> Chunk {
    Chunk {
        text,
        section,
        weight,
        chunk_index: index as u32,
        token_count: (word_count as f64 * TOKENS_PER_WORD) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn short_section_passes_through_verbatim() {
        let chunker = SectionChunker::default();
        let sections = vec![Section::new(SectionKind::Skills, "Python, Rust,\nDocker")];

        let chunks = chunker.chunk(&sections);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "Python, Rust,\nDocker");
        assert_eq!(chunks[0].section, SectionKind::Skills);
        assert_eq!(chunks[0].weight, 1.0);
        assert_eq!(chunks[0].chunk_index, 0);
        // 3 words * 1.33, truncated
        assert_eq!(chunks[0].token_count, 3);
    }

    #[test]
    fn long_section_windows_reconstruct_original() {
        // Defaults give 192-word windows with a 24-word overlap. 400 words
        // produce windows [0..192], [168..360], [336..400].
        let chunker = SectionChunker::default();
        let text = words(400);
        let sections = vec![Section::new(SectionKind::Experience, text.clone())];

        let chunks = chunker.chunk(&sections);
        assert!(chunks.len() > 1);

        let mut rebuilt: Vec<&str> = chunks[0].text.split_whitespace().collect();
        for chunk in &chunks[1..] {
            let chunk_words: Vec<&str> = chunk.text.split_whitespace().collect();
            rebuilt.extend_from_slice(&chunk_words[24..]);
        }
        assert_eq!(rebuilt.join(" "), text);
    }

    #[test]
    fn indices_run_globally_across_sections() {
        let chunker = SectionChunker::default();
        let sections = vec![
            Section::new(SectionKind::Summary, words(400)),
            Section::new(SectionKind::Skills, "Python"),
        ];

        let chunks = chunker.chunk(&sections);

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, i as u32);
        }
        assert_eq!(chunks.last().unwrap().section, SectionKind::Skills);
    }

    #[test]
    fn chunks_never_mix_sections() {
        let chunker = SectionChunker::default();
        let sections = vec![
            Section::new(SectionKind::Experience, words(300)),
            Section::new(SectionKind::Education, words(250)),
        ];

        let chunks = chunker.chunk(&sections);

        for chunk in &chunks {
            match chunk.section {
                SectionKind::Experience => assert_eq!(chunk.weight, 0.7),
                SectionKind::Education => assert_eq!(chunk.weight, 0.3),
                other => panic!("unexpected section {:?}", other),
            }
        }
    }

    #[test]
    fn chunking_is_deterministic() {
        let chunker = SectionChunker::default();
        let sections = vec![Section::new(SectionKind::Other, words(500))];

        assert_eq!(chunker.chunk(&sections), chunker.chunk(&sections));
    }

    #[test]
    fn whitespace_only_section_emits_nothing() {
        let chunker = SectionChunker::default();
        let sections = vec![Section::new(SectionKind::Other, "   \n  ")];

        assert!(chunker.chunk(&sections).is_empty());
    }

    #[test]
    fn overlap_at_least_chunk_size_still_terminates() {
        // step saturates to zero, so exactly one window is emitted
        let chunker = SectionChunker::new(16, 32);
        let sections = vec![Section::new(SectionKind::Other, words(50))];

        let chunks = chunker.chunk(&sections);

        assert_eq!(chunks.len(), 1);
        let first: Vec<&str> = chunks[0].text.split_whitespace().collect();
        assert_eq!(first.len(), 12);
    }
}
