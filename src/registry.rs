//! # Function Registry
//!
//! The fixed vocabulary of the selector language, split into three tables:
//!
//! - **[predicates]** - named boolean tests (`private`, `final`, `overrides`, ...)
//! - **[converters]** - navigation from one subject to related ones (`declaringClass -> ...`)
//! - **[extractors]** - text derived from a subject for regex leaves (`simpleName ~ /.../`)
//!
//! Names are resolved while compiling, so a misspelled name never reaches
//! evaluation. Each entry lists the subject kinds it accepts; applying it to
//! any other non-null kind is a [`EvalError::KindMismatch`]. A null subject
//! is never an error:
//!
//! - predicates return `false` (only `true` and `null` return `true`),
//! - converters return null,
//! - regex leaves do not match.
//!
//! A converter with several targets (`interfaces`) makes the converted
//! expression true when it holds for any target; with no targets it is
//! evaluated once against null.
//!
//! The same name may appear in more than one table (`implements` is both a
//! predicate and an extractor); the parser picks the table from the syntax.

pub mod converters;
pub mod extractors;
pub mod predicates;

use std::{collections::HashMap, fmt, sync::LazyLock};

use crate::{
    evaluator::EvalError,
    model::{Subject, SubjectKind},
};

pub use converters::CONVERTERS;
pub use extractors::EXTRACTORS;
pub use predicates::PREDICATES;

pub(crate) const ANY: &[SubjectKind] = &[SubjectKind::Type, SubjectKind::Method, SubjectKind::Field];
pub(crate) const TYPE: &[SubjectKind] = &[SubjectKind::Type];
pub(crate) const METHOD: &[SubjectKind] = &[SubjectKind::Method];
pub(crate) const FIELD: &[SubjectKind] = &[SubjectKind::Field];
pub(crate) const MEMBER: &[SubjectKind] = &[SubjectKind::Method, SubjectKind::Field];
pub(crate) const TYPE_OR_METHOD: &[SubjectKind] = &[SubjectKind::Type, SubjectKind::Method];

/// Which table an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Predicate,
    Converter,
    Extractor,
}

/// A named boolean test.
pub struct Predicate {
    pub name: &'static str,
    pub applies_to: &'static [SubjectKind],
    pub description: &'static str,
    test: fn(Subject<'_>) -> bool,
}

/// A named navigation from one subject to related ones.
pub struct Converter {
    pub name: &'static str,
    pub applies_to: &'static [SubjectKind],
    pub description: &'static str,
    navigate: Navigate,
}

/// How a converter reaches its targets.
#[derive(Clone, Copy)]
enum Navigate {
    /// Exactly one target, possibly null
    One(fn(Subject<'_>) -> Subject<'_>),
    /// Any number of targets; none at all is treated as a single null
    Each(fn(Subject<'_>) -> Vec<Subject<'_>>),
}

/// A named text projection used on the left of `~`.
pub struct Extractor {
    pub name: &'static str,
    pub applies_to: &'static [SubjectKind],
    pub description: &'static str,
    extract: fn(Subject<'_>) -> String,
}

fn check_kind(
    table: Table,
    name: &'static str,
    applies_to: &[SubjectKind],
    subject: &Subject<'_>,
) -> Result<(), EvalError> {
    let kind = subject.kind();
    if kind == SubjectKind::Null || applies_to.contains(&kind) {
        Ok(())
    } else {
        Err(EvalError::KindMismatch { table, name, kind })
    }
}

impl Predicate {
    pub(crate) const fn new(
        name: &'static str,
        applies_to: &'static [SubjectKind],
        description: &'static str,
        test: fn(Subject<'_>) -> bool,
    ) -> Self {
        Predicate {
            name,
            applies_to,
            description,
            test,
        }
    }

    pub fn test(&self, subject: Subject<'_>) -> Result<bool, EvalError> {
        check_kind(Table::Predicate, self.name, self.applies_to, &subject)?;
        Ok((self.test)(subject))
    }
}

impl Converter {
    pub(crate) const fn new(
        name: &'static str,
        applies_to: &'static [SubjectKind],
        description: &'static str,
        convert: fn(Subject<'_>) -> Subject<'_>,
    ) -> Self {
        Converter {
            name,
            applies_to,
            description,
            navigate: Navigate::One(convert),
        }
    }

    /// A converter with several targets. The converted expression holds if
    /// it holds for any of them.
    pub(crate) const fn each(
        name: &'static str,
        applies_to: &'static [SubjectKind],
        description: &'static str,
        convert: fn(Subject<'_>) -> Vec<Subject<'_>>,
    ) -> Self {
        Converter {
            name,
            applies_to,
            description,
            navigate: Navigate::Each(convert),
        }
    }

    /// The subjects to evaluate the converted expression against. Never
    /// empty: a null subject, or a subject with nothing to navigate to,
    /// yields a single null.
    pub fn convert<'m>(&self, subject: Subject<'m>) -> Result<Vec<Subject<'m>>, EvalError> {
        check_kind(Table::Converter, self.name, self.applies_to, &subject)?;
        if subject.is_null() {
            return Ok(vec![Subject::Null]);
        }
        let targets = match self.navigate {
            Navigate::One(convert) => vec![convert(subject)],
            Navigate::Each(convert) => convert(subject),
        };
        if targets.is_empty() {
            return Ok(vec![Subject::Null]);
        }
        Ok(targets)
    }
}

impl Extractor {
    pub(crate) const fn new(
        name: &'static str,
        applies_to: &'static [SubjectKind],
        description: &'static str,
        extract: fn(Subject<'_>) -> String,
    ) -> Self {
        Extractor {
            name,
            applies_to,
            description,
            extract,
        }
    }

    /// The text to match, or `None` for a null subject.
    pub fn extract(&self, subject: Subject<'_>) -> Result<Option<String>, EvalError> {
        check_kind(Table::Extractor, self.name, self.applies_to, &subject)?;
        if subject.is_null() {
            return Ok(None);
        }
        Ok(Some((self.extract)(subject)))
    }
}

macro_rules! entry_debug {
    ($entry:ident) => {
        impl fmt::Debug for $entry {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($entry))
                    .field("name", &self.name)
                    .field("applies_to", &self.applies_to)
                    .finish()
            }
        }
    };
}

entry_debug!(Predicate);
entry_debug!(Converter);
entry_debug!(Extractor);

static PREDICATE_INDEX: LazyLock<HashMap<&'static str, &'static Predicate>> =
    LazyLock::new(|| PREDICATES.iter().map(|p| (p.name, p)).collect());

static CONVERTER_INDEX: LazyLock<HashMap<&'static str, &'static Converter>> =
    LazyLock::new(|| CONVERTERS.iter().map(|c| (c.name, c)).collect());

static EXTRACTOR_INDEX: LazyLock<HashMap<&'static str, &'static Extractor>> =
    LazyLock::new(|| EXTRACTORS.iter().map(|e| (e.name, e)).collect());

pub fn predicate(name: &str) -> Option<&'static Predicate> {
    PREDICATE_INDEX.get(name).copied()
}

pub fn converter(name: &str) -> Option<&'static Converter> {
    CONVERTER_INDEX.get(name).copied()
}

pub fn extractor(name: &str) -> Option<&'static Extractor> {
    EXTRACTOR_INDEX.get(name).copied()
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Table::Predicate => "predicate",
            Table::Converter => "converter",
            Table::Extractor => "extractor",
        };
        f.write_str(name)
    }
}
