use crate::errors::DiffError;
use globset::{GlobBuilder, GlobMatcher};
use std::collections::BTreeSet;
use std::iter::Peekable;
use std::str::Chars;

const UNCLOSED_CLASS: &str = "unclosed character class";

/// Characters globset treats specially inside a class, each with its neighbours.
const CLASS_SPECIALS: [(char, char, char); 4] = [
    ('!', ' ', '"'),
    ('-', ',', '.'),
    (']', '\\', '^'),
    ('^', ']', '_'),
];

/// How file names are normalized before they are matched and used as snapshot keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFolding {
    /// Names and patterns are upper-cased, so `note.TXT` and `NOTE.txt` share a key.
    #[default]
    Insensitive,
    Sensitive,
}

impl CaseFolding {
    /// Upper-cases one character at a time; characters whose upper case is
    /// longer than one character (`ß`) are kept as they are.
    pub fn normalize(&self, name: &str) -> String {
        match self {
            CaseFolding::Insensitive => name.chars().map(simple_uppercase).collect(),
            CaseFolding::Sensitive => name.to_string(),
        }
    }
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Rewrites a `filepath`-style pattern into globset syntax.
///
/// Braces are literal, `\\` escapes the next character (also inside classes),
/// `[^...]` negates a class and `!` is an ordinary class member.
fn translate_pattern(pattern: &str) -> Result<String, String> {
    let mut glob = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => {
                    glob.push('\\');
                    glob.push(escaped);
                }
                None => return Err("dangling '\\'".to_string()),
            },
            '{' | '}' => {
                glob.push('\\');
                glob.push(c);
            }
            '[' => translate_class(&mut chars, &mut glob)?,
            c => glob.push(c),
        }
    }

    Ok(glob)
}

fn class_char(chars: &mut Peekable<Chars<'_>>) -> Result<char, String> {
    match chars.next() {
        None => Err(UNCLOSED_CLASS.to_string()),
        Some(c @ ('-' | ']')) => Err(format!("unexpected {:?} in character class", c)),
        Some('\\') => chars.next().ok_or_else(|| UNCLOSED_CLASS.to_string()),
        Some(c) => Ok(c),
    }
}

fn translate_class(chars: &mut Peekable<Chars<'_>>, glob: &mut String) -> Result<(), String> {
    let negated = chars.next_if_eq(&'^').is_some();

    let mut ranges = Vec::<(char, char)>::new();
    loop {
        if !ranges.is_empty() && chars.next_if_eq(&']').is_some() {
            break;
        }
        let lo = class_char(chars)?;
        let hi = if chars.next_if_eq(&'-').is_some() {
            class_char(chars)?
        } else {
            lo
        };
        ranges.push((lo, hi));
    }

    // split out the characters globset would misread so they can be placed safely
    let mut plain = Vec::<(char, char)>::new();
    let mut specials = BTreeSet::<char>::new();
    for (lo, hi) in ranges.into_iter().filter(|(lo, hi)| lo <= hi) {
        let mut start = lo;
        for (special, before, after) in CLASS_SPECIALS {
            if special < start || special > hi {
                continue;
            }
            if special > start {
                plain.push((start, before));
            }
            specials.insert(special);
            start = after;
        }
        if start <= hi {
            plain.push((start, hi));
        }
    }

    match (plain.is_empty(), specials.is_empty(), negated) {
        // reversed ranges match nothing
        (true, true, false) => return Err("character class matches nothing".to_string()),
        (true, true, true) => {
            glob.push('?');
            return Ok(());
        }
        _ => {}
    }

    // a lone '!' or '^' would read as negation in first position
    if !negated && plain.is_empty() && !specials.contains(&']') && !specials.contains(&'-') {
        let alternatives = specials
            .iter()
            .map(|c| format!("\\{}", c))
            .collect::<Vec<_>>();
        if alternatives.len() == 1 {
            glob.push_str(&alternatives[0]);
        } else {
            glob.push_str(&format!("{{{}}}", alternatives.join(",")));
        }
        return Ok(());
    }

    glob.push('[');
    if negated {
        glob.push('^');
    }
    // ']' and '-' are literal only in first position, '-' also in last
    let dash_first = !specials.contains(&']');
    if specials.contains(&']') {
        glob.push(']');
    }
    if dash_first && specials.contains(&'-') {
        glob.push('-');
    }
    for (lo, hi) in plain {
        glob.push(lo);
        if lo != hi {
            glob.push('-');
            glob.push(hi);
        }
    }
    for special in ['!', '^'] {
        if specials.contains(&special) {
            glob.push(special);
        }
    }
    if !dash_first && specials.contains(&'-') {
        glob.push('-');
    }
    glob.push(']');

    Ok(())
}

/// Glob filter over plain file names.
///
/// A malformed pattern does not fail construction: every `matches` call reports
/// it instead, so the scan can log it per entry and keep going.
#[derive(Debug, Clone)]
pub struct NameFilter {
    pattern: String,
    case_folding: CaseFolding,
    matcher: Result<GlobMatcher, String>,
}

impl NameFilter {
    pub fn new(pattern: &str, case_folding: CaseFolding) -> Self {
        let matcher = translate_pattern(&case_folding.normalize(pattern)).and_then(|glob| {
            GlobBuilder::new(&glob)
                .literal_separator(true)
                .backslash_escape(true)
                .build()
                .map(|glob| glob.compile_matcher())
                .map_err(|e| e.kind().to_string())
        });

        NameFilter {
            pattern: pattern.to_string(),
            case_folding,
            matcher,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn case_folding(&self) -> CaseFolding {
        self.case_folding
    }

    /// The snapshot key for a file name.
    pub fn key(&self, name: &str) -> String {
        self.case_folding.normalize(name)
    }

    pub fn matches(&self, name: &str) -> Result<bool, DiffError> {
        match &self.matcher {
            Ok(matcher) => Ok(matcher.is_match(self.key(name))),
            Err(reason) => Err(DiffError::InvalidPattern {
                pattern: self.pattern.clone(),
                reason: reason.clone(),
            }),
        }
    }
}

impl Default for NameFilter {
    fn default() -> Self {
        NameFilter::new("*", CaseFolding::default())
    }
}
