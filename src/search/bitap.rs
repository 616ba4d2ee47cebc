//! Bitap approximate string matcher.
//!
//! Scores a pattern against a text by the fewest errors needed to match it
//! near an expected location. A score is `errors / pattern_len` plus the
//! distance of the match from `location` divided by `distance`; lower is
//! better and 0 is an exact match at the expected spot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Widest pattern a single bit-parallel pass can hold.
pub const MAX_BITS: usize = 32;

/// Lowest score reported for a non-identical match.
const MIN_MATCH_SCORE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Worst score still accepted as a match, in `[0, 1]`.
    pub threshold: f64,
    /// Character offset where a match is expected.
    pub location: usize,
    /// How far from `location` a match may drift before it costs a full error.
    pub distance: usize,
    /// Score on errors only, regardless of where the match sits.
    pub ignore_location: bool,
    pub case_sensitive: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            location: 0,
            distance: 100,
            ignore_location: false,
            case_sensitive: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitapMatch {
    pub is_match: bool,
    pub score: f64,
}

impl BitapMatch {
    const fn miss() -> Self {
        Self {
            is_match: false,
            score: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
struct Chunk {
    pattern: Vec<char>,
    alphabet: HashMap<char, u32>,
    start_index: usize,
}

/// A compiled pattern, reusable across many texts.
#[derive(Debug, Clone)]
pub struct BitapSearcher {
    pattern: String,
    chunks: Vec<Chunk>,
    options: MatchOptions,
}

impl BitapSearcher {
    #[must_use]
    pub fn new(pattern: &str, options: MatchOptions) -> Self {
        let pattern = if options.case_sensitive {
            pattern.to_string()
        } else {
            pattern.to_lowercase()
        };
        let chars: Vec<char> = pattern.chars().collect();
        let mut chunks = Vec::new();

        let mut add_chunk = |slice: &[char], start_index: usize| {
            chunks.push(Chunk {
                pattern: slice.to_vec(),
                alphabet: pattern_alphabet(slice),
                start_index,
            });
        };

        let len = chars.len();
        if len > MAX_BITS {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            let mut i = 0;
            while i < end {
                add_chunk(&chars[i..i + MAX_BITS], i);
                i += MAX_BITS;
            }
            if remainder > 0 {
                let start_index = len - MAX_BITS;
                add_chunk(&chars[start_index..], start_index);
            }
        } else if len > 0 {
            add_chunk(&chars, 0);
        }

        Self {
            pattern,
            chunks,
            options,
        }
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Match the pattern against `text`.
    #[must_use]
    pub fn search_in(&self, text: &str) -> BitapMatch {
        if self.chunks.is_empty() {
            return BitapMatch::miss();
        }

        let lowered;
        let text = if self.options.case_sensitive {
            text
        } else {
            lowered = text.to_lowercase();
            lowered.as_str()
        };

        if self.pattern == text {
            return BitapMatch {
                is_match: true,
                score: 0.0,
            };
        }

        let text: Vec<char> = text.chars().collect();
        let mut total_score = 0.0;
        let mut has_matches = false;

        for chunk in &self.chunks {
            let options = MatchOptions {
                location: self.options.location.saturating_add(chunk.start_index),
                ..self.options
            };
            let result = search_chunk(&text, &chunk.pattern, &chunk.alphabet, &options);
            if result.is_match {
                has_matches = true;
            }
            total_score += result.score;
        }

        if has_matches {
            #[allow(clippy::cast_precision_loss)]
            let score = total_score / self.chunks.len() as f64;
            BitapMatch {
                is_match: true,
                score,
            }
        } else {
            BitapMatch::miss()
        }
    }
}

/// Bit mask per pattern character; bit `len - i - 1` is set for position `i`.
fn pattern_alphabet(pattern: &[char]) -> HashMap<char, u32> {
    let len = pattern.len();
    let mut mask = HashMap::new();
    for (i, ch) in pattern.iter().enumerate() {
        *mask.entry(*ch).or_insert(0) |= 1u32 << (len - i - 1);
    }
    mask
}

#[allow(clippy::cast_precision_loss)]
fn match_score(
    pattern_len: usize,
    errors: usize,
    current_location: i64,
    expected_location: i64,
    options: &MatchOptions,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    if options.ignore_location {
        return accuracy;
    }
    let proximity = (expected_location - current_location).unsigned_abs();
    if options.distance == 0 {
        return if proximity > 0 { 1.0 } else { accuracy };
    }
    accuracy + proximity as f64 / options.distance as f64
}

fn find_from(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if from > text.len() || pattern.len() > text.len() - from {
        return None;
    }
    text[from..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|pos| pos + from)
}

#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
fn search_chunk(
    text: &[char],
    pattern: &[char],
    alphabet: &HashMap<char, u32>,
    options: &MatchOptions,
) -> BitapMatch {
    let pattern_len = pattern.len();
    let text_len = text.len() as i64;
    let expected_location = i64::try_from(options.location)
        .unwrap_or(i64::MAX)
        .clamp(0, text_len);

    let mut current_threshold = options.threshold;

    // Exact occurrences tighten the threshold before the fuzzy pass.
    let mut from = expected_location as usize;
    while let Some(index) = find_from(text, pattern, from) {
        let score = match_score(pattern_len, 0, index as i64, expected_location, options);
        current_threshold = current_threshold.min(score);
        from = index + pattern_len;
    }

    let mut best_location: i64 = -1;
    let mut last_bits: Vec<u32> = Vec::new();
    let mut final_score = 1.0;
    let mut bin_max = pattern_len as i64 + text_len;
    let mask = 1u32 << (pattern_len - 1);

    for errors in 0..pattern_len {
        // Widest window around the expected location still under threshold.
        let mut bin_min = 0i64;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            let score = match_score(
                pattern_len,
                errors,
                expected_location + bin_mid,
                expected_location,
                options,
            );
            if score <= current_threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = 1.max(expected_location - bin_mid + 1);
        let finish = (expected_location + bin_mid).min(text_len) + pattern_len as i64;

        let mut bits = vec![0u32; finish as usize + 2];
        bits[finish as usize + 1] = (1u32 << errors) - 1;

        let last = |j: usize| last_bits.get(j).copied().unwrap_or(0);

        let mut j = finish;
        while j >= start {
            let ju = j as usize;
            let current_location = j - 1;
            let char_match = text
                .get(current_location as usize)
                .and_then(|ch| alphabet.get(ch))
                .copied()
                .unwrap_or(0);

            bits[ju] = ((bits[ju + 1] << 1) | 1) & char_match;
            if errors > 0 {
                bits[ju] |= ((last(ju + 1) | last(ju)) << 1) | 1 | last(ju + 1);
            }

            if bits[ju] & mask != 0 {
                final_score = match_score(
                    pattern_len,
                    errors,
                    current_location,
                    expected_location,
                    options,
                );
                if final_score <= current_threshold {
                    current_threshold = final_score;
                    best_location = current_location;
                    if best_location <= expected_location {
                        break;
                    }
                    start = 1.max(2 * expected_location - best_location);
                }
            }
            j -= 1;
        }

        let score = match_score(
            pattern_len,
            errors + 1,
            expected_location,
            expected_location,
            options,
        );
        if score > current_threshold {
            break;
        }
        last_bits = bits;
    }

    BitapMatch {
        is_match: best_location >= 0,
        score: final_score.max(MIN_MATCH_SCORE),
    }
}
