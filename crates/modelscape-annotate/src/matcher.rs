//! Longest-first, whole-word span matching.
//!
//! Both annotators reduce to the same scan:
//!
//! 1. Order candidates by descending needle length (characters); equal
//!    lengths keep their given order.
//! 2. For each candidate, walk the text left to right and claim every
//!    case-insensitive occurrence that sits on word boundaries, passes the
//!    suffix rule, and does not overlap a range claimed earlier.
//! 3. Cut the text at the claimed ranges.
//!
//! Because longer needles claim first, `"robot hours"` always wins over
//! `"robot"`, independent of where in the text either occurs.
//!
//! Word characters are alphanumerics and `_`. A boundary is only enforced on
//! sides where the needle itself starts or ends with a word character, so
//! needles like `"C++"` still match before punctuation.

use std::cmp::Reverse;
use std::ops::Range;

use modelscape_types::{AnnotatedSpan, AnnotationKind};

/// A needle and the annotation it produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub needle: String,
    pub kind: AnnotationKind,
    pub ref_id: String,
}

impl Candidate {
    pub fn new(needle: impl Into<String>, kind: AnnotationKind, ref_id: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            kind,
            ref_id: ref_id.into(),
        }
    }
}

/// Extra rejection rules on top of word boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchRules {
    /// Reject a match followed by `.` and a digit, so `"N1"` stays out of `"N1.5"`.
    pub reject_decimal_suffix: bool,
}

/// A claimed byte range and the candidate that claimed it.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Claim {
    range: Range<usize>,
    candidate: usize,
}

/// Candidates prepared for repeated scanning.
#[derive(Clone, Debug, Default)]
pub struct SpanMatcher {
    candidates: Vec<Candidate>,
    rules: MatchRules,
}

impl SpanMatcher {
    /// Blank needles are dropped; surrounding whitespace is trimmed.
    pub fn new(candidates: impl IntoIterator<Item = Candidate>, rules: MatchRules) -> Self {
        let mut candidates: Vec<Candidate> = candidates
            .into_iter()
            .filter_map(|mut c| {
                let trimmed = c.needle.trim();
                if trimmed.is_empty() {
                    return None;
                }
                if trimmed.len() != c.needle.len() {
                    c.needle = trimmed.to_string();
                }
                Some(c)
            })
            .collect();
        // Stable: equal lengths keep caller order.
        candidates.sort_by_key(|c| Reverse(c.needle.chars().count()));
        Self { candidates, rules }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in scan order (longest first).
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Annotate every candidate occurrence.
    pub fn annotate(&self, text: &str) -> Vec<AnnotatedSpan> {
        self.annotate_with(text, |_| true)
    }

    /// Annotate using only the candidates `include` accepts. Excluded
    /// candidates take no part in the scan, so shorter needles still match
    /// inside their text.
    pub fn annotate_with(&self, text: &str, include: impl Fn(&Candidate) -> bool) -> Vec<AnnotatedSpan> {
        let claims = self.claims(text, &include);
        self.cut(text, &claims)
    }

    /// Re-scan the plain spans of an existing sequence. Annotated spans pass
    /// through untouched, so repeated passes never stack annotations.
    pub fn annotate_spans_with(
        &self,
        spans: Vec<AnnotatedSpan>,
        include: impl Fn(&Candidate) -> bool,
    ) -> Vec<AnnotatedSpan> {
        let mut out = Vec::with_capacity(spans.len());
        for span in spans {
            if span.is_annotation() {
                out.push(span);
            } else {
                out.extend(self.annotate_with(&span.text, &include));
            }
        }
        out
    }

    fn claims(&self, text: &str, include: &impl Fn(&Candidate) -> bool) -> Vec<Claim> {
        let mut claims: Vec<Claim> = Vec::new();

        for (idx, candidate) in self.candidates.iter().enumerate() {
            if !include(candidate) {
                continue;
            }
            let mut pos = 0;
            while pos < text.len() {
                if let Some(len) = match_at(text, pos, &candidate.needle) {
                    let range = pos..pos + len;
                    if self.accepts(text, &range) && !overlaps(&claims, &range) {
                        let at = claims.partition_point(|c| c.range.start < range.start);
                        claims.insert(
                            at,
                            Claim {
                                range: range.clone(),
                                candidate: idx,
                            },
                        );
                        pos = range.end;
                        continue;
                    }
                }
                pos = next_char_boundary(text, pos);
            }
        }

        claims
    }

    fn accepts(&self, text: &str, range: &Range<usize>) -> bool {
        let matched = &text[range.clone()];
        let before = text[..range.start].chars().next_back();
        let after = text[range.end..].chars().next();

        let starts_word = matched.chars().next().is_some_and(is_word_char);
        let ends_word = matched.chars().next_back().is_some_and(is_word_char);
        if starts_word && before.is_some_and(is_word_char) {
            return false;
        }
        if ends_word && after.is_some_and(is_word_char) {
            return false;
        }
        if self.rules.reject_decimal_suffix && has_decimal_suffix(&text[range.end..]) {
            return false;
        }
        true
    }

    fn cut(&self, text: &str, claims: &[Claim]) -> Vec<AnnotatedSpan> {
        let mut spans = Vec::with_capacity(claims.len() * 2 + 1);
        let mut cursor = 0;

        for claim in claims {
            if claim.range.start > cursor {
                spans.push(AnnotatedSpan::plain(&text[cursor..claim.range.start]));
            }
            let candidate = &self.candidates[claim.candidate];
            spans.push(AnnotatedSpan::annotated(
                &text[claim.range.clone()],
                candidate.kind,
                candidate.ref_id.clone(),
            ));
            cursor = claim.range.end;
        }

        if cursor < text.len() {
            spans.push(AnnotatedSpan::plain(&text[cursor..]));
        }
        spans
    }
}

/// Word characters for boundary checks.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn has_decimal_suffix(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some('.') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Case-insensitive match of `needle` at byte `pos`; returns the matched byte
/// length in `text`.
fn match_at(text: &str, pos: usize, needle: &str) -> Option<usize> {
    let mut hay = text[pos..].char_indices();
    for n in needle.chars() {
        let (_, h) = hay.next()?;
        if !chars_eq_ignore_case(h, n) {
            return None;
        }
    }
    Some(hay.next().map_or(text.len() - pos, |(i, _)| i))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Claims are sorted and disjoint, so only the last one starting before
/// `range.end` can reach into it.
fn overlaps(claims: &[Claim], range: &Range<usize>) -> bool {
    let idx = claims.partition_point(|c| c.range.start < range.end);
    idx > 0 && claims[idx - 1].range.end > range.start
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(text.len(), |c| pos + c.len_utf8())
}
