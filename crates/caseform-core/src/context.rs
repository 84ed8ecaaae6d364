//! Evaluation context: the name→value lookup for one evaluation call

use crate::value::FieldValue;
use ahash::AHashMap;

/// The variable context an expression or template is evaluated against.
///
/// Built fresh by the caller for each evaluation (from form field values,
/// client/enrollment metadata, and system constants) and read-only for the
/// duration of the call. Names absent from the context resolve to
/// [`FieldValue::Unknown`] rather than an error.
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    values: AHashMap<String, FieldValue>,
}

impl EvalContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Resolve a variable. Absent names are `Unknown`, not an error.
    pub fn get(&self, name: &str) -> FieldValue {
        self.values.get(name).cloned().unwrap_or(FieldValue::Unknown)
    }

    /// Whether a variable has been supplied (even as `Unknown`)
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of supplied variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for EvalContext
where
    N: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}
