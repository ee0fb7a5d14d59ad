//! Pattern Library - the rules that define every split
//!
//! Each level of the tree is produced by one [`Rule`]: a compiled regex whose matches are the
//! pieces of the level below. Rules are data, the decomposition engine never looks inside them.
//!
//! The rule order, coarsest first:
//! 1. paragraph: one non-blank line, trimmed of surrounding whitespace
//! 2. sentence: text up to and including a run of terminators (`.`, `!`, `?`), plus any closing
//!    quotes or brackets
//! 3. word: a run of signs, or a run of anything that is neither sign nor whitespace
//! 4. sign: a single ASCII punctuation character (the sign branch of a word)
//! 5. letter: a single non-sign, non-whitespace character (the letter branch of a word)
//!
//! Rules match content only. Whatever lies between two matches is a separator; see
//! [`Rule::spans`].

use crate::textree::config::PatternConfig;
use crate::textree::error::{Result, TextreeError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::ops::Range;

pub const DEFAULT_PARAGRAPH: &str = r"[^\s](?:[^\n]*[^\s])?";
pub const DEFAULT_SENTENCE: &str = r#"[^\s.!?][^.!?]*(?:[.!?]+['")\]]*|$)|[.!?]+['")\]]*"#;
pub const DEFAULT_WORD: &str = r"[[:punct:]]+|[^\s[:punct:]]+";
pub const DEFAULT_SIGN: &str = r"[[:punct:]]";
pub const DEFAULT_LETTER: &str = r"[^\s[:punct:]]";
/// Horizontal whitespace runs (spaces and tabs) collapsed by normalization
pub const DEFAULT_NORMALIZE: &str = r"[ \t]+";

static DEFAULT_LIBRARY: Lazy<PatternLibrary> = Lazy::new(|| {
    PatternLibrary::from_config(&PatternConfig::default())
        .expect("built-in patterns are valid and never match the empty string")
});

/// Which split a rule performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Paragraph,
    Sentence,
    Word,
    Sign,
    Letter,
}

impl RuleKind {
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Paragraph => "paragraph",
            RuleKind::Sentence => "sentence",
            RuleKind::Word => "word",
            RuleKind::Sign => "sign",
            RuleKind::Letter => "letter",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compile `pattern`, rejecting patterns that match the empty string.
fn compile(rule: &'static str, pattern: &str) -> Result<Regex> {
    let regex = Regex::new(pattern).map_err(|source| TextreeError::InvalidPattern {
        rule,
        pattern: pattern.to_string(),
        source,
    })?;
    if regex.is_match("") {
        return Err(TextreeError::EmptyMatchPattern {
            rule,
            pattern: pattern.to_string(),
        });
    }
    Ok(regex)
}

/// A compiled matching rule.
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    regex: Regex,
}

impl Rule {
    pub fn new(kind: RuleKind, pattern: &str) -> Result<Self> {
        let regex = compile(kind.name(), pattern)?;
        Ok(Rule { kind, regex })
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// All matches in `text`, left to right, non-overlapping and never empty.
    pub fn find_all<'r, 't>(&'r self, text: &'t str) -> RuleMatches<'r, 't> {
        RuleMatches {
            inner: self.regex.find_iter(text),
        }
    }

    /// Whether the rule matches anywhere in `text`.
    pub fn matches_any(&self, text: &str) -> bool {
        self.find_all(text).next().is_some()
    }

    /// Walk `text` as alternating matches and gaps. The pieces concatenate back to `text`.
    pub fn spans<'r, 't>(&'r self, text: &'t str) -> Spans<'r, 't> {
        Spans {
            text,
            matches: self.regex.find_iter(text),
            cursor: 0,
            pending: None,
        }
    }
}

/// Iterator over the non-empty matches of a [`Rule`].
pub struct RuleMatches<'r, 't> {
    inner: regex::Matches<'r, 't>,
}

impl<'r, 't> Iterator for RuleMatches<'r, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        self.inner
            .by_ref()
            .find(|m| !m.is_empty())
            .map(|m| m.as_str())
    }
}

/// One piece of a text walked by [`Rule::spans`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'t> {
    /// A match of the rule
    Match(&'t str),
    /// Text between matches (or before the first / after the last)
    Gap(&'t str),
}

pub struct Spans<'r, 't> {
    text: &'t str,
    matches: regex::Matches<'r, 't>,
    cursor: usize,
    pending: Option<Range<usize>>,
}

impl<'r, 't> Iterator for Spans<'r, 't> {
    type Item = Span<'t>;

    fn next(&mut self) -> Option<Span<'t>> {
        if let Some(range) = self.pending.take() {
            self.cursor = range.end;
            return Some(Span::Match(&self.text[range]));
        }

        match self.matches.by_ref().find(|m| !m.is_empty()) {
            Some(m) if m.start() > self.cursor => {
                let gap = &self.text[self.cursor..m.start()];
                self.cursor = m.start();
                self.pending = Some(m.range());
                Some(Span::Gap(gap))
            }
            Some(m) => {
                self.cursor = m.end();
                Some(Span::Match(m.as_str()))
            }
            None if self.cursor < self.text.len() => {
                let gap = &self.text[self.cursor..];
                self.cursor = self.text.len();
                Some(Span::Gap(gap))
            }
            None => None,
        }
    }
}

/// The full rule set plus the whitespace normalization rule.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    paragraph: Rule,
    sentence: Rule,
    word: Rule,
    sign: Rule,
    letter: Rule,
    normalize: Regex,
}

impl PatternLibrary {
    /// The built-in rules, compiled once per process.
    pub fn default_library() -> &'static PatternLibrary {
        &DEFAULT_LIBRARY
    }

    pub fn from_config(config: &PatternConfig) -> Result<Self> {
        Ok(PatternLibrary {
            paragraph: Rule::new(RuleKind::Paragraph, &config.paragraph)?,
            sentence: Rule::new(RuleKind::Sentence, &config.sentence)?,
            word: Rule::new(RuleKind::Word, &config.word)?,
            sign: Rule::new(RuleKind::Sign, &config.sign)?,
            letter: Rule::new(RuleKind::Letter, &config.letter)?,
            normalize: compile("normalize", &config.normalize)?,
        })
    }

    pub fn rule(&self, kind: RuleKind) -> &Rule {
        match kind {
            RuleKind::Paragraph => &self.paragraph,
            RuleKind::Sentence => &self.sentence,
            RuleKind::Word => &self.word,
            RuleKind::Sign => &self.sign,
            RuleKind::Letter => &self.letter,
        }
    }

    /// Collapse every normalization match into a single space.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalize.replace_all(raw, " ").into_owned()
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::default_library().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(kind: RuleKind, text: &str) -> Vec<String> {
        PatternLibrary::default_library()
            .rule(kind)
            .find_all(text)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_paragraph_rule_one_per_line() {
        assert_eq!(
            matches(RuleKind::Paragraph, "Para one.\n\nPara two."),
            vec!["Para one.", "Para two."]
        );
        assert_eq!(matches(RuleKind::Paragraph, " padded \n"), vec!["padded"]);
        assert!(matches(RuleKind::Paragraph, " \n\t\n").is_empty());
    }

    #[test]
    fn test_sentence_rule_splits_on_terminators() {
        assert_eq!(
            matches(RuleKind::Sentence, "Hi there. Bye!"),
            vec!["Hi there.", "Bye!"]
        );
        assert_eq!(
            matches(RuleKind::Sentence, "Really?! Yes... fine"),
            vec!["Really?!", "Yes...", "fine"]
        );
    }

    #[test]
    fn test_sentence_rule_keeps_closing_quotes() {
        assert_eq!(
            matches(RuleKind::Sentence, r#""Go." He went."#),
            vec![r#""Go.""#, "He went."]
        );
    }

    #[test]
    fn test_sentence_rule_leading_terminators() {
        assert_eq!(matches(RuleKind::Sentence, "... ok."), vec!["...", "ok."]);
    }

    #[test]
    fn test_word_rule_separates_signs_from_letters() {
        assert_eq!(matches(RuleKind::Word, "asd."), vec!["asd", "."]);
        assert_eq!(
            matches(RuleKind::Word, "don't stop"),
            vec!["don", "'", "t", "stop"]
        );
        assert_eq!(matches(RuleKind::Word, "abc123 ..."), vec!["abc123", "..."]);
    }

    #[test]
    fn test_sign_and_letter_rules_are_single_characters() {
        assert_eq!(matches(RuleKind::Sign, "a,b."), vec![",", "."]);
        assert_eq!(matches(RuleKind::Letter, "a,b."), vec!["a", "b"]);
    }

    #[test]
    fn test_matches_any() {
        let library = PatternLibrary::default_library();
        assert!(library.rule(RuleKind::Sign).matches_any("hey!"));
        assert!(!library.rule(RuleKind::Sign).matches_any("hey"));
    }

    #[test]
    fn test_spans_partition_text() {
        let rule = PatternLibrary::default_library().rule(RuleKind::Word);
        let spans: Vec<Span> = rule.spans(" Hi  there.").collect();
        assert_eq!(
            spans,
            vec![
                Span::Gap(" "),
                Span::Match("Hi"),
                Span::Gap("  "),
                Span::Match("there"),
                Span::Match("."),
            ]
        );
    }

    #[test]
    fn test_spans_of_unmatched_text_is_one_gap() {
        let rule = PatternLibrary::default_library().rule(RuleKind::Paragraph);
        assert_eq!(rule.spans("\n\n").collect::<Vec<_>>(), vec![Span::Gap("\n\n")]);
        assert_eq!(rule.spans("").count(), 0);
    }

    #[test]
    fn test_normalize_collapses_spaces_and_tabs() {
        let library = PatternLibrary::default_library();
        assert_eq!(library.normalize("a \t b\t\tc"), "a b c");
        assert_eq!(library.normalize("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = Rule::new(RuleKind::Word, "[unclosed").unwrap_err();
        assert!(matches!(
            err,
            TextreeError::InvalidPattern { rule: "word", .. }
        ));
    }

    #[test]
    fn test_empty_matching_pattern_is_rejected() {
        let err = Rule::new(RuleKind::Sentence, r"[a-z]*").unwrap_err();
        assert!(matches!(
            err,
            TextreeError::EmptyMatchPattern {
                rule: "sentence",
                ..
            }
        ));
    }

    #[test]
    fn test_custom_library_from_config() {
        let config = PatternConfig {
            word: r"\S+".to_string(),
            ..PatternConfig::default()
        };
        let library = PatternLibrary::from_config(&config).unwrap();
        let words: Vec<&str> = library.rule(RuleKind::Word).find_all("don't stop").collect();
        assert_eq!(words, vec!["don't", "stop"]);
    }
}
