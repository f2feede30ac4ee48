//! Answer normalization and option matching for multiple-choice questions.
//!
//! Answers are recorded either as option letters (`"B"`, `"B C D"`, `"b, c"`)
//! or as the text of the correct option. [`CanonicalAnswers`] settles which of
//! the two a question uses, and [`match_option`] flags each option against it.

use crate::types::{AnswerMode, MatchedQuestion, OptionMatch, Question};

/// Letters used to label options by position.
pub const OPTION_LETTERS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

/// Shortest cleaned text allowed to match by substring containment.
const MIN_CONTAINMENT_LEN: usize = 10;

fn is_option_letter(c: char) -> bool {
    OPTION_LETTERS.contains(&c.to_ascii_uppercase())
}

fn is_answer_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

fn is_prefix_delimiter(c: char) -> bool {
    matches!(c, '.' | ')' | ':') || c.is_whitespace()
}

/// Split a letter list such as `"B, C D"` into uppercase letters.
///
/// Returns `None` unless the string is made only of single letters A-F
/// separated by runs of commas and/or whitespace.
fn split_letter_list(s: &str) -> Option<Vec<char>> {
    let mut letters = Vec::new();
    let mut expect_letter = true;

    for c in s.chars() {
        if is_answer_separator(c) {
            if letters.is_empty() {
                return None;
            }
            expect_letter = true;
        } else if expect_letter && is_option_letter(c) {
            letters.push(c.to_ascii_uppercase());
            expect_letter = false;
        } else {
            return None;
        }
    }

    if letters.is_empty() || expect_letter {
        None
    } else {
        Some(letters)
    }
}

/// Normalize raw answer strings into canonical tokens.
///
/// Letter lists expand into one uppercase token per letter; anything else is
/// kept as a single trimmed token with its case intact.
pub fn normalize<S: AsRef<str>>(answers: &[S]) -> Vec<String> {
    answers
        .iter()
        .flat_map(|answer| {
            let trimmed = answer.as_ref().trim();
            match split_letter_list(trimmed) {
                Some(letters) => letters.into_iter().map(String::from).collect::<Vec<_>>(),
                None => vec![trimmed.to_string()],
            }
        })
        .collect()
}

/// Canonical answers of one question, tagged with how they must be matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalAnswers {
    /// Every token is a single letter A-F (stored uppercase).
    LetterList(Vec<char>),
    /// At least one token is free text; all tokens are compared as text.
    TextAnswers(Vec<String>),
}

impl CanonicalAnswers {
    /// Normalize and classify the raw answers of a question.
    pub fn from_answers<S: AsRef<str>>(answers: &[S]) -> Self {
        Self::classify(normalize(answers))
    }

    /// Classify already normalized tokens. A single non-letter token puts the
    /// whole set in text mode.
    pub fn classify(tokens: Vec<String>) -> Self {
        let letters: Option<Vec<char>> = tokens.iter().map(|t| single_option_letter(t)).collect();
        match letters {
            Some(letters) => Self::LetterList(letters),
            None => Self::TextAnswers(tokens),
        }
    }

    pub fn mode(&self) -> AnswerMode {
        match self {
            Self::LetterList(_) => AnswerMode::Letter,
            Self::TextAnswers(_) => AnswerMode::Text,
        }
    }

    /// Tokens for display, e.g. the "answer: B, C" badge.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            Self::LetterList(letters) => letters.iter().map(|&c| String::from(c)).collect(),
            Self::TextAnswers(tokens) => tokens.clone(),
        }
    }
}

fn single_option_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_option_letter(c) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// Split a `"B. "` / `"B) "` / `"B: "` / `"B "` prefix off an option.
///
/// Returns the uppercase letter and the text after the delimiter.
fn split_letter_prefix(option: &str) -> Option<(char, &str)> {
    let mut chars = option.char_indices();
    let (_, first) = chars.next()?;
    let (idx, delimiter) = chars.next()?;

    if is_option_letter(first) && is_prefix_delimiter(delimiter) {
        Some((first.to_ascii_uppercase(), &option[idx + delimiter.len_utf8()..]))
    } else {
        None
    }
}

/// Letter for an option slot, if the slot is within A-F.
pub fn positional_letter(index: usize) -> Option<char> {
    OPTION_LETTERS.get(index).copied()
}

/// Display label for an option.
///
/// Uses the option's own letter prefix when present, otherwise its position
/// (`A` for index 0), and `index + 1` past the end of the alphabet.
pub fn derive_letter(option: &str, index: usize) -> String {
    match split_letter_prefix(option) {
        Some((letter, _)) => String::from(letter),
        None => match positional_letter(index) {
            Some(letter) => String::from(letter),
            None => (index + 1).to_string(),
        },
    }
}

/// Option text without its letter prefix.
pub fn clean_text(option: &str) -> &str {
    match split_letter_prefix(option) {
        Some((_, rest)) => rest.trim_start(),
        None => option,
    }
}

fn text_matches(option: &str, answer: &str) -> bool {
    if option == answer {
        return true;
    }
    if answer.chars().count() >= MIN_CONTAINMENT_LEN && option.contains(answer) {
        return true;
    }
    option.chars().count() >= MIN_CONTAINMENT_LEN && answer.contains(option)
}

/// Evaluate a single option against the canonical answers of its question.
pub fn match_option(option: &str, index: usize, answers: &CanonicalAnswers) -> OptionMatch {
    let display_text = clean_text(option);

    let is_correct = match answers {
        CanonicalAnswers::LetterList(letters) => {
            // The prefix letter and the slot letter can disagree in the source
            // data; either one identifies the option.
            let own = split_letter_prefix(option).map(|(letter, _)| letter);
            let positional = positional_letter(index);
            letters
                .iter()
                .any(|&answer| Some(answer) == own || Some(answer) == positional)
        }
        CanonicalAnswers::TextAnswers(tokens) => {
            let option_clean = display_text.trim().to_lowercase();
            tokens
                .iter()
                .any(|token| text_matches(&option_clean, &token.trim().to_lowercase()))
        }
    };

    OptionMatch {
        letter: derive_letter(option, index),
        display_text: display_text.to_string(),
        is_correct,
    }
}

/// Evaluate every option of a question, in order.
pub fn match_options<S: AsRef<str>>(options: &[S], answers: &CanonicalAnswers) -> Vec<OptionMatch> {
    options
        .iter()
        .enumerate()
        .map(|(idx, option)| match_option(option.as_ref(), idx, answers))
        .collect()
}

/// Normalize the answers of a question and evaluate all of its options.
pub fn match_question(question: &Question) -> MatchedQuestion {
    let answers = CanonicalAnswers::from_answers(&question.answers);

    MatchedQuestion {
        text: question.text.clone(),
        options: match_options(&question.options, &answers),
        answers: answers.tokens(),
        answer_mode: answers.mode(),
        num_options: question.num_options,
    }
}
