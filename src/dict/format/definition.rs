//! # Definition Cleaning
//!
//! Turns the free-form, wiki/HTML-flavoured gloss column of the source dump
//! into a single line of plain senses separated by `"; "`.
//!
//! ## Stages
//! 1.  **Strip markup**: category tags, `[hy:漢字]`, word-class and etymology
//!     fields, character labels, `[[link]]` brackets and `::` bullets are
//!     removed from the whole text.
//! 2.  **Split senses**: the text is cut on `<br>` tags in any spelling.
//! 3.  **Clean senses**: list numbering, `/>` and `]` residue and `br`
//!     fragments are removed from each sense; empty and dash-only senses are
//!     dropped.
//! 4.  **Normalize**: senses are joined, whitespace and repeated `;` are
//!     collapsed and the ends are trimmed.
//!
//! Every stage is a pure `&str -> String` transform over regexes compiled
//! once per process.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Separator placed between surviving senses.
pub const SENSE_SEPARATOR: &str = "; ";

/// Whole-text substitutions, applied in order before splitting.
const MARKUP_RULES: &[(&str, &str)] = &[
    // Category tags, including malformed ones closed by several `]`
    (r"\[Category:[^\]]*\]+", ""),
    (r"\[分類:[^\]]*\]+", ""),
    (r"\[hy:漢字\]", ""),
    // Word class ends at a line break, tag or `;`; etymology only at a line break
    (r"词类:\s*[^\n<;]*", ""),
    (r"词源:\s*[^\n]*", ""),
    // Longest label first so `漢字:` does not leave a stray `漢`
    (r"(?:漢字|字喃|字):\s*", ""),
    (r"\[\[([^\]]+)\]\]", "${1}"),
    (r"::", ""),
];

/// Numbering and self-closing tag residue left at the edges of a sense.
const SENSE_RULES: &[(&str, &str)] = &[
    (r"^\d+\.\s*", ""),
    (r"/>\s*\d+\.\s*", ""),
    (r"/>\s*", ""),
];

/// Stray brackets hugging the ends of a sense.
const BRACKET_RULES: &[(&str, &str)] = &[(r"^\]\s*", ""), (r"\s*\]$", "")];

/// Senses that carry no content once cleaned.
const FILLER_SENSES: &[&str] = &["", "-", "---"];

/// A compiled substitution.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

static MARKUP: OnceLock<Vec<Rule>> = OnceLock::new();
static SENSE: OnceLock<Vec<Rule>> = OnceLock::new();
static BRACKETS: OnceLock<Vec<Rule>> = OnceLock::new();
static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();
static SEMICOLON_RUN: OnceLock<Regex> = OnceLock::new();

fn compile(rules: &[(&str, &'static str)]) -> Vec<Rule> {
    rules
        .iter()
        .map(|&(pattern, replacement)| Rule {
            pattern: Regex::new(pattern).expect("Invalid definition cleaning regex pattern"),
            replacement,
        })
        .collect()
}

fn cached<'a>(cell: &'a OnceLock<Vec<Rule>>, rules: &[(&str, &'static str)]) -> &'a [Rule] {
    cell.get_or_init(|| compile(rules))
}

fn cached_regex<'a>(cell: &'a OnceLock<Regex>, pattern: &str) -> &'a Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid definition cleaning regex pattern"))
}

/// Matches `<br>`, `<br/>` and `<br />` in any letter case.
fn line_break_regex() -> &'static Regex {
    cached_regex(&LINE_BREAK, r"(?i)<br\s*/?>")
}

fn whitespace_run_regex() -> &'static Regex {
    cached_regex(&WHITESPACE_RUN, r"\s+")
}

fn semicolon_run_regex() -> &'static Regex {
    cached_regex(&SEMICOLON_RUN, r";\s*;+")
}

/// Replaces every match of `pattern`, reusing `text` when nothing matched.
fn substitute(text: String, pattern: &Regex, replacement: &str) -> String {
    if let Cow::Owned(replaced) = pattern.replace_all(&text, replacement) {
        return replaced;
    }
    text
}

fn apply_rules(text: String, rules: &[Rule]) -> String {
    rules
        .iter()
        .fold(text, |acc, rule| substitute(acc, &rule.pattern, rule.replacement))
}

/// Clean a raw definition into `"; "`-separated plain senses.
///
/// Returns an empty string when nothing but markup noise was present; the
/// caller decides whether to drop the entry. Never fails.
///
/// # Example
/// ```
/// use vi2zh_dict::clean_definition;
///
/// assert_eq!(
///     clean_definition("1. nghĩa một<br />2. [[nghĩa]] hai[Category:Danh từ]]"),
///     "nghĩa một; nghĩa hai"
/// );
/// ```
pub fn clean_definition(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let stripped = strip_markup(text);

    let senses: Vec<String> = line_break_regex()
        .split(&stripped)
        .filter_map(clean_sense)
        .collect();

    normalize(senses.join(SENSE_SEPARATOR))
}

/// Stage 1: whole-text markup removal.
fn strip_markup(text: &str) -> String {
    apply_rules(text.to_string(), cached(&MARKUP, MARKUP_RULES))
}

/// Stage 3: cleans one sense, or `None` if it is filler.
fn clean_sense(raw: &str) -> Option<String> {
    let sense = apply_rules(raw.trim().to_string(), cached(&SENSE, SENSE_RULES));

    // Literal `br />` left behind by double-escaped tags
    let sense = sense.replace("br />", "");
    let sense = if sense.trim() == "br" { String::new() } else { sense };

    let sense = apply_rules(sense, cached(&BRACKETS, BRACKET_RULES)).replace(']', "");
    let sense = sense.trim();

    if FILLER_SENSES.contains(&sense) {
        None
    } else {
        Some(sense.to_string())
    }
}

/// Stage 4: whitespace and separator normalization of the joined senses.
fn normalize(joined: String) -> String {
    let collapsed = substitute(joined, whitespace_run_regex(), " ");
    let collapsed = substitute(collapsed, semicolon_run_regex(), ";");
    collapsed.trim().trim_matches(';').trim().to_string()
}
