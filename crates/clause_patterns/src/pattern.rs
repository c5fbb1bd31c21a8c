//! Pattern variants and their constructors.
//!
//! `Pattern` is a closed tagged union over every matchable shape. Patterns
//! are immutable once built; the sequence-like constructors validate their
//! tail declaration up front and return [`PatternError`] on a malformed one.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeFull;

use clause_value::Value;

use crate::error::{PatternError, PatternResult};

/// A description of a value's expected shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// Matches anything, binds nothing.
    Wildcard,
    /// Matches anything; an enclosing argument group binds the name.
    Var(String),
    /// Matches subjects equal to the literal.
    Value(Value),
    /// Ordered sequence with a fixed prefix and an optional tail.
    Sequence(SequencePattern),
    /// Fixed-arity sequence.
    Tuple(Vec<Pattern>),
    /// Keyed mapping; only the declared keys are inspected.
    Mapping(MappingPattern),
    /// Object of one exact type, projected to its declared fields.
    Object(ObjectPattern),
    /// The same subject tested against several sub-patterns at once.
    Duplicate(SequencePattern),
    /// Aggregates bindings of the inner pattern into one environment.
    Args(Box<Pattern>),
}

/// One declared item of a sequence-like pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Pattern(Pattern),
    /// The open-tail marker (written `..` in the `seq!` macro).
    Rest,
}

/// What follows the fixed prefix of a sequence pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum Tail {
    /// No tail marker: the subject may not have elements past the prefix.
    None,
    /// `..`: any remaining elements, bound to nothing.
    Open,
    /// `.., $name`: the remaining elements, bound as one list. Always a `Var`.
    Bind(Box<Pattern>),
}

/// Prefix and tail of a `Sequence` or `Duplicate` pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct SequencePattern {
    heads: Vec<Pattern>,
    tail: Tail,
    /// Number of declared elements, tail marker included.
    declared_len: usize,
}

impl SequencePattern {
    /// Split declared elements into prefix and tail.
    ///
    /// The first `Rest` opens the tail. At most one element may follow it and
    /// it must be a `Var`.
    pub fn decompose(elements: impl IntoIterator<Item = Element>) -> PatternResult<Self> {
        let mut heads = Vec::new();
        let mut tail = Tail::None;
        let mut declared_len = 0usize;

        for element in elements {
            declared_len += 1;
            tail = match (tail, element) {
                (Tail::None, Element::Rest) => Tail::Open,
                (Tail::None, Element::Pattern(p)) => {
                    heads.push(p);
                    Tail::None
                }
                (Tail::Open, Element::Pattern(p @ Pattern::Var(_))) => Tail::Bind(Box::new(p)),
                (Tail::Open, Element::Rest) | (Tail::Bind(_), Element::Rest) => {
                    return Err(PatternError::invalid_shape(
                        "more than one tail marker in a sequence",
                    ));
                }
                (Tail::Open, Element::Pattern(p)) => {
                    return Err(PatternError::invalid_shape(format!(
                        "only a variable may follow the tail marker, found {p}"
                    )));
                }
                (Tail::Bind(_), Element::Pattern(p)) => {
                    return Err(PatternError::invalid_shape(format!(
                        "nothing may follow the tail variable, found {p}"
                    )));
                }
            };
        }

        Ok(SequencePattern {
            heads,
            tail,
            declared_len,
        })
    }

    fn from_heads(heads: Vec<Pattern>) -> Self {
        let declared_len = heads.len();
        SequencePattern {
            heads,
            tail: Tail::None,
            declared_len,
        }
    }

    pub fn heads(&self) -> &[Pattern] {
        &self.heads
    }

    pub fn tail(&self) -> &Tail {
        &self.tail
    }

    pub fn declared_len(&self) -> usize {
        self.declared_len
    }
}

/// Declared keys of a `Mapping` pattern, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MappingPattern {
    entries: Vec<(String, Pattern)>,
}

impl MappingPattern {
    /// Build from `(key, pattern)` pairs. A repeated key keeps its first
    /// position and its last pattern.
    pub fn new<K: Into<String>>(entries: impl IntoIterator<Item = (K, Pattern)>) -> Self {
        let mut out: Vec<(String, Pattern)> = Vec::new();
        for (key, pattern) in entries {
            let key = key.into();
            if let Some(slot) = out.iter_mut().find(|(k, _)| *k == key) {
                slot.1 = pattern;
            } else {
                out.push((key, pattern));
            }
        }
        MappingPattern { entries: out }
    }

    pub fn entries(&self) -> &[(String, Pattern)] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

/// Type and declared fields of an `Object` pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectPattern {
    type_name: String,
    fields: MappingPattern,
}

impl ObjectPattern {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn fields(&self) -> &MappingPattern {
        &self.fields
    }
}

// Constructors

impl Pattern {
    /// Variable pattern: accepts any subject and, inside an argument group,
    /// binds it to `name`.
    pub fn var(name: impl Into<String>) -> Self {
        Pattern::Var(name.into())
    }

    /// Literal pattern compared by equality. Containers are not decomposed;
    /// use `Pattern::from` for that.
    pub fn value(value: impl Into<Value>) -> Self {
        Pattern::Value(value.into())
    }

    /// Sequence pattern over a list subject. At most one `Element::Rest`,
    /// optionally followed by a single variable that binds the remainder.
    pub fn sequence(elements: impl IntoIterator<Item = Element>) -> PatternResult<Self> {
        SequencePattern::decompose(elements).map(Pattern::Sequence)
    }

    /// Tuple pattern with exact arity.
    pub fn tuple(elements: impl IntoIterator<Item = Pattern>) -> Self {
        Pattern::Tuple(elements.into_iter().collect())
    }

    /// Mapping pattern. Only the declared keys are inspected; each must be
    /// present. A repeated key keeps its last pattern.
    pub fn mapping<K: Into<String>>(entries: impl IntoIterator<Item = (K, Pattern)>) -> Self {
        Pattern::Mapping(MappingPattern::new(entries))
    }

    /// Object pattern: the subject's type name must equal `type_name`, and
    /// each declared field must be present and match.
    pub fn object<K: Into<String>>(
        type_name: impl Into<String>,
        fields: impl IntoIterator<Item = (K, Pattern)>,
    ) -> Self {
        Pattern::Object(ObjectPattern {
            type_name: type_name.into(),
            fields: MappingPattern::new(fields),
        })
    }

    /// Broadcast the subject to one copy per declared element and match
    /// those copies as a sequence.
    pub fn duplicate(elements: impl IntoIterator<Item = Element>) -> PatternResult<Self> {
        SequencePattern::decompose(elements).map(Pattern::Duplicate)
    }

    /// Argument group: folds the inner pattern's results into one verdict
    /// plus the bindings of every variable inside it.
    pub fn args(inner: Pattern) -> Self {
        Pattern::Args(Box::new(inner))
    }

    /// Argument group over a mapping of named patterns.
    pub fn kwargs<K: Into<String>>(entries: impl IntoIterator<Item = (K, Pattern)>) -> Self {
        Pattern::args(Pattern::mapping(entries))
    }

    /// The conventional pattern over a call's arguments: positional patterns
    /// as an exact-arity tuple next to a mapping of named patterns, wrapped in
    /// an argument group. Match it against [`call_subject`].
    pub fn call<K: Into<String>>(
        positional: impl IntoIterator<Item = Pattern>,
        named: impl IntoIterator<Item = (K, Pattern)>,
    ) -> Self {
        Pattern::args(Pattern::Sequence(SequencePattern::from_heads(vec![
            Pattern::tuple(positional),
            Pattern::mapping(named),
        ])))
    }

    /// Normalize a literal into the matching variant.
    ///
    /// Lists become `Sequence`, tuples `Tuple`, maps `Mapping`, recursively;
    /// anything else becomes `Value`.
    pub fn from_literal(value: Value) -> Self {
        match &value {
            Value::List(items) => Pattern::Sequence(SequencePattern::from_heads(
                items.iter().cloned().map(Pattern::from_literal).collect(),
            )),
            Value::Tuple(items) => {
                Pattern::Tuple(items.iter().cloned().map(Pattern::from_literal).collect())
            }
            Value::Map(map) => Pattern::mapping(
                map.iter()
                    .map(|(k, v)| (k.clone(), Pattern::from_literal(v.clone()))),
            ),
            _ => Pattern::Value(value),
        }
    }
}

/// Build the subject a [`Pattern::call`] pattern is matched against.
pub fn call_subject(positional: &[Value], named: &BTreeMap<String, Value>) -> Value {
    Value::list(vec![
        Value::tuple(positional.to_vec()),
        Value::map(named.iter().map(|(k, v)| (k.clone(), v.clone()))),
    ])
}

// Introspection

impl Pattern {
    /// Variable names in the order matching visits them. Repeated names
    /// appear once per occurrence.
    pub fn bound_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'p>(&'p self, names: &mut Vec<&'p str>) {
        match self {
            Pattern::Wildcard | Pattern::Value(_) => {}
            Pattern::Var(name) => names.push(name),
            Pattern::Sequence(seq) | Pattern::Duplicate(seq) => {
                for head in &seq.heads {
                    head.collect_names(names);
                }
                if let Tail::Bind(tail) = &seq.tail {
                    tail.collect_names(names);
                }
            }
            Pattern::Tuple(elements) => {
                for element in elements {
                    element.collect_names(names);
                }
            }
            Pattern::Mapping(map) => map.collect_names(names),
            Pattern::Object(obj) => obj.fields.collect_names(names),
            Pattern::Args(inner) => inner.collect_names(names),
        }
    }

    /// Short label used in trace output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Pattern::Wildcard => "Match any",
            Pattern::Var(_) => "Match var",
            Pattern::Value(_) => "Match value",
            Pattern::Sequence(_) => "Match list",
            Pattern::Tuple(_) => "Match tuple",
            Pattern::Mapping(_) => "Match dict",
            Pattern::Object(_) => "Match obj",
            Pattern::Duplicate(_) => "Match dup",
            Pattern::Args(_) => "Match arg",
        }
    }
}

impl MappingPattern {
    fn collect_names<'p>(&'p self, names: &mut Vec<&'p str>) {
        for (_, pattern) in &self.entries {
            pattern.collect_names(names);
        }
    }
}

// Conversions

impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        Pattern::from_literal(value)
    }
}

impl From<Pattern> for Element {
    fn from(pattern: Pattern) -> Self {
        Element::Pattern(pattern)
    }
}

impl From<RangeFull> for Element {
    fn from(_: RangeFull) -> Self {
        Element::Rest
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Element::Pattern(Pattern::from_literal(value))
    }
}

macro_rules! literal_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Pattern {
                fn from(literal: $ty) -> Self {
                    Pattern::from_literal(Value::from(literal))
                }
            }

            impl From<$ty> for Element {
                fn from(literal: $ty) -> Self {
                    Element::Pattern(Pattern::from(literal))
                }
            }
        )*
    };
}

literal_conversions!(bool, i32, i64, f64, char, &str, String);

// Display

fn write_patterns(f: &mut fmt::Formatter<'_>, patterns: &[Pattern]) -> fmt::Result {
    for (i, p) in patterns.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{p}")?;
    }
    Ok(())
}

impl fmt::Display for SequencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        write_patterns(f, &self.heads)?;
        let sep = if self.heads.is_empty() { "" } else { ", " };
        match &self.tail {
            Tail::None => {}
            Tail::Open => write!(f, "{sep}...")?,
            Tail::Bind(tail) => write!(f, "{sep}..., {tail}")?,
        }
        write!(f, "]")
    }
}

impl fmt::Display for MappingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, pattern)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}={pattern}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Wildcard => write!(f, "_"),
            Pattern::Var(name) => write!(f, "${name}"),
            Pattern::Value(Value::Str(s)) => write!(f, "'{}'", s.as_str()),
            Pattern::Value(v) => write!(f, "{v}"),
            Pattern::Sequence(seq) => write!(f, "{seq}"),
            Pattern::Tuple(elements) => {
                write!(f, "(")?;
                write_patterns(f, elements)?;
                if elements.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Pattern::Mapping(map) => write!(f, "dict({map})"),
            Pattern::Object(obj) => write!(f, "{}({})", obj.type_name, obj.fields),
            Pattern::Duplicate(seq) => write!(f, "dup{seq}"),
            Pattern::Args(inner) => write!(f, "args({inner})"),
        }
    }
}
