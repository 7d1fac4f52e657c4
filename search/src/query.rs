//! Declarative record predicates.

use crate::config::{CaseMatching, SearchConfig};
use docquery_core::{Field, Record};
use nucleo::pattern::{CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};

/// Predicate over record fields.
///
/// A field that is unset on a record never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Substring match.
    Contains { field: Field, needle: String },
    /// Whole-value match.
    Equals { field: Field, value: String },
    /// Fuzzy match. Only decides membership, never ranking.
    Fuzzy { field: Field, pattern: String },
    /// Every inner predicate matches. Empty matches everything.
    All(Vec<Predicate>),
    /// At least one inner predicate matches. Empty matches nothing.
    Any(Vec<Predicate>),
}

impl Predicate {
    pub fn title_contains(needle: impl Into<String>) -> Self {
        Predicate::Contains {
            field: Field::Title,
            needle: needle.into(),
        }
    }

    pub fn template_is(value: impl Into<String>) -> Self {
        Predicate::Equals {
            field: Field::TemplateName,
            value: value.into(),
        }
    }

    /// Compiles the predicate against a config.
    pub fn matcher(&self, config: &SearchConfig) -> RecordMatcher {
        RecordMatcher {
            node: Node::compile(self, config),
            matcher: Matcher::new(NucleoConfig::DEFAULT),
            buf: Vec::new(),
        }
    }
}

/// A compiled [`Predicate`], reusable across records.
pub struct RecordMatcher {
    node: Node,
    matcher: Matcher,
    buf: Vec<char>,
}

impl RecordMatcher {
    pub fn matches(&mut self, record: &Record) -> bool {
        self.node.eval(record, &mut self.matcher, &mut self.buf)
    }
}

enum Node {
    Contains {
        field: Field,
        needle: String,
        respect_case: bool,
    },
    Equals {
        field: Field,
        value: String,
        respect_case: bool,
    },
    Fuzzy {
        field: Field,
        pattern: Pattern,
    },
    All(Vec<Node>),
    Any(Vec<Node>),
}

impl Node {
    fn compile(predicate: &Predicate, config: &SearchConfig) -> Self {
        match predicate {
            Predicate::Contains { field, needle } => {
                let respect_case = config.case_matching.respects_case(needle);
                Node::Contains {
                    field: *field,
                    needle: fold_case(needle, respect_case),
                    respect_case,
                }
            }
            Predicate::Equals { field, value } => {
                let respect_case = config.case_matching.respects_case(value);
                Node::Equals {
                    field: *field,
                    value: fold_case(value, respect_case),
                    respect_case,
                }
            }
            Predicate::Fuzzy { field, pattern } => {
                let case_matching = match config.case_matching {
                    CaseMatching::Sensitive => NucleoCaseMatching::Respect,
                    CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
                    CaseMatching::Smart => NucleoCaseMatching::Smart,
                };
                let normalization = if config.unicode_normalization {
                    Normalization::Smart
                } else {
                    Normalization::Never
                };
                Node::Fuzzy {
                    field: *field,
                    pattern: Pattern::parse(pattern, case_matching, normalization),
                }
            }
            Predicate::All(inner) => {
                Node::All(inner.iter().map(|p| Node::compile(p, config)).collect())
            }
            Predicate::Any(inner) => {
                Node::Any(inner.iter().map(|p| Node::compile(p, config)).collect())
            }
        }
    }

    fn eval(&self, record: &Record, matcher: &mut Matcher, buf: &mut Vec<char>) -> bool {
        match self {
            Node::Contains {
                field,
                needle,
                respect_case,
            } => record
                .field(*field)
                .is_some_and(|text| fold_case(&text, *respect_case).contains(needle.as_str())),
            Node::Equals {
                field,
                value,
                respect_case,
            } => record
                .field(*field)
                .is_some_and(|text| fold_case(&text, *respect_case) == *value),
            Node::Fuzzy { field, pattern } => record.field(*field).is_some_and(|text| {
                pattern
                    .score(Utf32Str::new(&text, buf), matcher)
                    .is_some()
            }),
            Node::All(inner) => inner.iter().all(|n| n.eval(record, matcher, buf)),
            Node::Any(inner) => inner.iter().any(|n| n.eval(record, matcher, buf)),
        }
    }
}

fn fold_case(text: &str, respect_case: bool) -> String {
    if respect_case {
        text.to_string()
    } else {
        text.to_lowercase()
    }
}
