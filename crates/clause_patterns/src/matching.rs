//! The matching algorithm.
//!
//! Each variant turns `(pattern, subject)` into a flat list of partial
//! results. Compound variants lead with a shape check and append the
//! flattened results of their children, so a mismatch deep inside a subject
//! never short-circuits the walk: every binding and every failure surfaces
//! in one list.

use clause_stack::ensure_sufficient_stack;
use clause_value::Value;

use crate::environment::Environment;
use crate::pattern::{MappingPattern, ObjectPattern, Pattern, SequencePattern, Tail};
use crate::result::{all_matched, MatchResult, MatchResults, MatchValue};
use crate::trace;

impl Pattern {
    /// Match `value` against this pattern.
    ///
    /// The returned list is never empty. Index 0 of a compound pattern is a
    /// shape check only; AND the whole list (or use [`Pattern::is_match`])
    /// for a verdict.
    pub fn match_value(&self, value: &Value) -> MatchResults<'_> {
        if trace::trace_enabled() {
            trace::traced(self, value, || self.match_untraced(value))
        } else {
            self.match_untraced(value)
        }
    }

    /// Whether every partial result of matching `value` succeeded.
    pub fn is_match(&self, value: &Value) -> bool {
        all_matched(&self.match_value(value))
    }

    /// Match and collect bindings in one step.
    ///
    /// Argument groups are matched as they are; any other pattern is
    /// aggregated as if it were wrapped in one. Returns `None` when the match
    /// fails, including on a conflicting repeated variable.
    pub fn capture(&self, value: &Value) -> Option<Environment> {
        if let Pattern::Args(_) = self {
            // The group is traced as one invocation.
            return match self.match_value(value).into_iter().next()? {
                MatchResult {
                    matched: true,
                    value: MatchValue::Bindings(env),
                    ..
                } => Some(env),
                _ => None,
            };
        }
        let (matched, env) = aggregate(self.match_value(value));
        matched.then_some(env)
    }

    fn match_untraced(&self, value: &Value) -> MatchResults<'_> {
        ensure_sufficient_stack(|| match self {
            Pattern::Wildcard | Pattern::Var(_) => vec![MatchResult::subject(true, self, value)],
            Pattern::Value(literal) => vec![MatchResult::subject(value == literal, self, value)],
            Pattern::Sequence(seq) => seq.match_list(self, value),
            Pattern::Tuple(elements) => match_tuple(self, elements, value),
            Pattern::Mapping(map) => map.match_map(self, value),
            Pattern::Object(obj) => obj.match_object(self, value),
            Pattern::Duplicate(seq) => {
                let copies = vec![value.clone(); seq.declared_len()];
                seq.match_list(self, &Value::list(copies))
            }
            Pattern::Args(inner) => {
                let (matched, env) = aggregate(inner.match_value(value));
                vec![MatchResult::new(matched, self, MatchValue::Bindings(env))]
            }
        })
    }
}

/// Fold a result list into a verdict plus the bindings of every `Var`.
///
/// A name bound twice to unequal values fails the match. The environment is
/// overlaid either way, so on a conflict the later value is the one kept.
fn aggregate(results: MatchResults<'_>) -> (bool, Environment) {
    let mut env = Environment::new();
    let mut matched = true;

    for result in results {
        matched = matched && result.matched;
        let (Some(name), MatchValue::Subject(bound)) = (result.binding_name(), result.value)
        else {
            continue;
        };
        if env.lookup(name).is_some_and(|previous| *previous != bound) {
            tracing::trace!(name, "conflicting binding for repeated variable");
            matched = false;
        }
        env = env.join(&Environment::single(name, bound));
    }

    (matched, env)
}

impl SequencePattern {
    /// `source` is the `Sequence` or `Duplicate` pattern owning `self`.
    fn match_list<'p>(&'p self, source: &'p Pattern, value: &Value) -> MatchResults<'p> {
        let Some(items) = value.as_list() else {
            return vec![MatchResult::subject(false, source, value)];
        };
        let heads = self.heads();
        if items.len() < heads.len() {
            return vec![MatchResult::subject(false, source, value)];
        }

        let mut results = vec![MatchResult::subject(true, source, value)];
        for (head, item) in heads.iter().zip(items) {
            results.extend(head.match_value(item));
        }

        let rest = &items[heads.len()..];
        match self.tail() {
            Tail::Bind(tail) => results.extend(tail.match_value(&Value::list(rest.to_vec()))),
            Tail::Open => {}
            // Without a tail marker the prefix must cover the whole subject.
            Tail::None if !rest.is_empty() => {
                results.push(MatchResult::subject(false, source, &Value::list(rest.to_vec())));
            }
            Tail::None => {}
        }
        results
    }
}

fn match_tuple<'p>(source: &'p Pattern, elements: &'p [Pattern], value: &Value) -> MatchResults<'p> {
    match value.as_tuple() {
        Some(items) if items.len() == elements.len() => {
            let mut results = vec![MatchResult::subject(true, source, value)];
            for (element, item) in elements.iter().zip(items) {
                results.extend(element.match_value(item));
            }
            results
        }
        _ => vec![MatchResult::subject(false, source, value)],
    }
}

impl MappingPattern {
    /// `source` is the `Mapping` or `Object` pattern owning `self`.
    fn match_map<'p>(&'p self, source: &'p Pattern, value: &Value) -> MatchResults<'p> {
        let Some(map) = value.as_map() else {
            return vec![MatchResult::subject(false, source, value)];
        };

        let mut results = vec![MatchResult::subject(true, source, value)];
        for (key, pattern) in self.entries() {
            match map.get(key) {
                Some(item) => results.extend(pattern.match_value(item)),
                None => results.push(MatchResult::new(false, source, MatchValue::Absent)),
            }
        }
        results
    }
}

impl ObjectPattern {
    fn match_object<'p>(&'p self, source: &'p Pattern, value: &Value) -> MatchResults<'p> {
        let Some(obj) = value.as_object().filter(|o| o.type_name() == self.type_name()) else {
            return vec![MatchResult::subject(false, source, value)];
        };

        // Project the declared fields; undeclared ones are never read.
        let projected = Value::map(
            self.fields()
                .keys()
                .filter_map(|k| obj.get_field(k).map(|v| (k, v.clone()))),
        );
        let mut results = self.fields().match_map(source, &projected);
        // Re-surface the mapping's shape check against the object itself.
        if let Some(top) = results.first_mut() {
            top.value = MatchValue::Subject(value.clone());
        }
        results
    }
}
