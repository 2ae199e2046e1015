//! Named comparator rules and the per-table registry resolving them.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Classifier: does this sampled text belong to the rule's type?
pub type ClassifyFn = dyn Fn(&str) -> bool + Send + Sync;

/// Raw two-way comparator over cell text. Built-in rules order descending
/// natively; [`crate::stable::sort_rows`] compensates for direction.
pub type CompareFn = dyn Fn(&str, &str) -> Ordering + Send + Sync;

/// A named `{classify, compare}` sorting rule.
///
/// Rules are cheap to clone: the closures sit behind `Arc`, so a registry
/// built once can be cloned into any number of tables as a snapshot.
#[derive(Clone)]
pub struct SortRule {
    name: String,
    classify: Arc<ClassifyFn>,
    compare: Arc<CompareFn>,
}

impl SortRule {
    pub fn new(
        name: impl Into<String>,
        classify: impl Fn(&str) -> bool + Send + Sync + 'static,
        compare: impl Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            classify: Arc::new(classify),
            compare: Arc::new(compare),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the rule's classifier accepts the sampled text.
    pub fn classifies(&self, text: &str) -> bool {
        (self.classify)(text)
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        (self.compare)(a, b)
    }

    /// The raw comparator, for wrapping with [`crate::stable::stabilize`].
    pub fn comparator(&self) -> &CompareFn {
        &*self.compare
    }
}

impl fmt::Debug for SortRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortRule").field("name", &self.name).finish()
    }
}

/// Errors from rule registration.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// A rule must carry a non-empty name to be resolvable.
    #[error("Sort rule must carry a non-empty name")]
    InvalidRule,
}

/// Ordered rule registry owned by one table.
///
/// Resolution walks rules in registration order. The built-in
/// case-insensitive text rule is the fallback and never occupies a slot,
/// so registered rules always win when they apply.
#[derive(Debug, Clone)]
pub struct SortRegistry {
    rules: Vec<SortRule>,
    fallback: SortRule,
}

impl Default for SortRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SortRegistry {
    /// An empty registry holding only the text fallback.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            fallback: text_rule(),
        }
    }

    /// A registry pre-seeded with the built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.seed_builtins();
        registry
    }

    /// Idempotently add the built-in rules. Safe to call on registries the
    /// application already populated.
    pub fn seed_builtins(&mut self) {
        if self.get(crate::date::DATE_RULE).is_none() {
            self.rules.push(crate::date::date_rule());
        }
    }

    /// Append a rule. Names are not required to be unique; the earliest
    /// registration wins on lookup.
    pub fn register(&mut self, rule: SortRule) -> Result<(), RegistryError> {
        if rule.name().is_empty() {
            return Err(RegistryError::InvalidRule);
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Append a rule unless one with the same name already exists.
    pub fn register_if_absent(&mut self, rule: SortRule) -> Result<(), RegistryError> {
        if self.get(rule.name()).is_some() {
            return Ok(());
        }
        self.register(rule)
    }

    pub fn get(&self, name: &str) -> Option<&SortRule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The case-insensitive text rule used when nothing else applies.
    pub fn fallback(&self) -> &SortRule {
        &self.fallback
    }

    /// Resolve the rule for a column.
    ///
    /// A forced name looks the rule up directly; unknown names silently
    /// fall back to the text rule. Otherwise the first rule (registration
    /// order) whose classifier accepts every sample wins.
    pub fn resolve(&self, forced: Option<&str>, samples: &[String]) -> &SortRule {
        if let Some(name) = forced {
            return self.get(name).unwrap_or(&self.fallback);
        }
        self.rules
            .iter()
            .find(|rule| samples.iter().all(|sample| rule.classifies(sample)))
            .unwrap_or(&self.fallback)
    }
}

/// Default comparator: trimmed, case-insensitive text. Earlier code-point
/// order compares greater (descending-first native polarity).
fn case_insensitive_compare(a: &str, b: &str) -> Ordering {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    b.cmp(&a)
}

pub(crate) fn text_rule() -> SortRule {
    SortRule::new("text", |_| true, case_insensitive_compare)
}
