//! Word segmentation for Thai text.
//!
//! Thai is written without spaces between words, so token boundaries come
//! from a dictionary. [`MaximalMatchSegmenter`] picks, for every run of Thai
//! script, the segmentation with the fewest unknown characters and then the
//! fewest tokens. Boundaries only fall between Thai character clusters, so a
//! vowel sign is never split from its syllable. Other scripts are split on character class. Whitespace is
//! never emitted, so concatenating the tokens gives back the input with its
//! whitespace removed.

mod cluster;

use std::collections::HashSet;

use self::cluster::cluster_starts;
use crate::corpus::{parse_word_list, EmbeddedCorpus};

const BUNDLED_THAI_WORDS: &str = include_str!("thai_words.txt");

pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    Thai,
    Word,
    Symbol,
}

fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if ('\u{0E00}'..='\u{0E7F}').contains(&c) {
        CharClass::Thai
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Symbol
    }
}

/// Dictionary-based maximal matching.
#[derive(Debug, Clone)]
pub struct MaximalMatchSegmenter {
    words: HashSet<String>,
    /// Longest dictionary entry, in chars.
    max_len: usize,
}

impl Default for MaximalMatchSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl MaximalMatchSegmenter {
    /// Segmenter over the bundled dictionary and stopword corpus.
    pub fn new() -> Self {
        Self::from_words(
            parse_word_list(BUNDLED_THAI_WORDS)
                .into_iter()
                .chain(EmbeddedCorpus::words()),
        )
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: HashSet::new(),
            max_len: 0,
        }
        .with_words(words)
    }

    /// Extend the dictionary.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            let word: String = word.into();
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            self.max_len = self.max_len.max(word.chars().count());
            self.words.insert(word.to_string());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Segment one run of Thai script.
    fn segment_thai<'a>(&self, run: &'a str, out: &mut Vec<&'a str>) {
        // byte offset of every cluster boundary, including the end
        let bounds: Vec<usize> = cluster_starts(run)
            .into_iter()
            .chain(std::iter::once(run.len()))
            .collect();
        let n = bounds.len() - 1;

        // cost = (unknown chars, tokens); back[j] = (start, known)
        let mut cost: Vec<Option<(usize, usize)>> = vec![None; n + 1];
        let mut back: Vec<(usize, bool)> = vec![(0, false); n + 1];
        cost[0] = Some((0, 0));

        for i in 0..n {
            let Some((unknown, tokens)) = cost[i] else {
                continue;
            };
            let mut relax = |j: usize, candidate: (usize, usize), known: bool| {
                if cost[j].map_or(true, |current| candidate < current) {
                    cost[j] = Some(candidate);
                    back[j] = (i, known);
                }
            };

            for j in (i + 1..=n.min(i + self.max_len)).rev() {
                if self.words.contains(&run[bounds[i]..bounds[j]]) {
                    relax(j, (unknown, tokens + 1), true);
                }
            }
            let width = run[bounds[i]..bounds[i + 1]].chars().count();
            relax(i + 1, (unknown + width, tokens + 1), false);
        }

        let mut pieces = Vec::new();
        let mut j = n;
        while j > 0 {
            let (i, known) = back[j];
            pieces.push((i, j, known));
            j = i;
        }
        pieces.reverse();

        // adjacent unknown clusters form one token
        let mut k = 0;
        while k < pieces.len() {
            let (start, mut end, known) = pieces[k];
            k += 1;
            if !known {
                while k < pieces.len() && !pieces[k].2 {
                    end = pieces[k].1;
                    k += 1;
                }
            }
            out.push(&run[bounds[start]..bounds[end]]);
        }
    }
}

impl Segmenter for MaximalMatchSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut tokens: Vec<&str> = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            let class = classify(c);
            let mut end = start + c.len_utf8();
            if class != CharClass::Symbol {
                while let Some(&(i, next)) = chars.peek() {
                    if classify(next) != class {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }
            }

            let run = &text[start..end];
            match class {
                CharClass::Space => {}
                CharClass::Thai => self.segment_thai(run, &mut tokens),
                CharClass::Word | CharClass::Symbol => tokens.push(run),
            }
        }

        tokens.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn without_whitespace(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn segments_simple_sentence() {
        let tokens = MaximalMatchSegmenter::new().segment("ฉันรักภาษาไทย");
        assert_eq!(tokens, vec!["ฉัน", "รัก", "ภาษาไทย"]);
    }

    #[test]
    fn prefers_fewer_tokens() {
        let seg = MaximalMatchSegmenter::from_words(["ภาษา", "ไทย", "ภาษาไทย"]);
        assert_eq!(seg.segment("ภาษาไทย"), vec!["ภาษาไทย"]);
    }

    #[test]
    fn unknown_characters_are_grouped() {
        let seg = MaximalMatchSegmenter::from_words(["รัก"]);
        assert_eq!(seg.segment("รักกกกก"), vec!["รัก", "กกกก"]);
        assert_eq!(seg.segment("ฮฮรัก"), vec!["ฮฮ", "รัก"]);
    }

    #[test]
    fn never_splits_inside_a_syllable() {
        let seg = MaximalMatchSegmenter::new();
        assert_eq!(seg.segment("ไพเราะ"), vec!["ไพเราะ"]);
        assert_eq!(seg.segment("เสียงเพลง"), vec!["เสียง", "เพลง"]);
        assert_eq!(
            seg.segment("เสียงเพลงไพเราะมาก"),
            vec!["เสียง", "เพลง", "ไพเราะ", "มาก"]
        );
    }

    #[test]
    fn known_word_inside_a_cluster_is_not_lifted_out() {
        let seg = MaximalMatchSegmenter::from_words(["เรา"]);
        assert_eq!(seg.segment("ไพเราะ"), vec!["ไพเราะ"]);
        assert_eq!(seg.segment("เราไพ"), vec!["เรา", "ไพ"]);
    }

    #[test]
    fn empty_and_whitespace_input_gives_no_tokens() {
        let seg = MaximalMatchSegmenter::new();
        assert!(seg.segment("").is_empty());
        assert!(seg.segment("  \n\t ").is_empty());
    }

    #[test]
    fn mixed_scripts_split_on_class() {
        let tokens = MaximalMatchSegmenter::new().segment("สวัสดีครับ ผมชื่อ John, ID 6512!");
        assert_eq!(
            tokens,
            vec!["สวัสดี", "ครับ", "ผม", "ชื่อ", "John", ",", "ID", "6512", "!"]
        );
    }

    #[test]
    fn concatenation_reconstructs_input() {
        let seg = MaximalMatchSegmenter::new();
        for text in [
            "ฉันรักภาษาไทย",
            "ค่าเทอม ปริญญาตรี เท่าไรครับ",
            "หอในเปิดรับสมัครวันไหน??",
            "ติดต่อ admin@pcru.ac.th ได้ไหม",
            "กขฃคฅฆงจฉช",
        ] {
            let tokens = seg.segment(text);
            assert!(tokens.iter().all(|t| !t.trim().is_empty()), "{text}");
            assert_eq!(tokens.concat(), without_whitespace(text), "{text}");
        }
    }

    #[test]
    fn with_words_extends_dictionary() {
        let seg = MaximalMatchSegmenter::from_words(["ก"]).with_words(["กข", "  "]);
        assert!(seg.contains("กข"));
        assert_eq!(seg.len(), 2);
        assert_eq!(seg.segment("กขก"), vec!["กข", "ก"]);
    }
}
