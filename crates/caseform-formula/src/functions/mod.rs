//! Built-in display/computation functions
//!
//! The registry is a fixed lookup table built once at startup. Lookup is
//! case-sensitive: form definitions name these functions in upper snake
//! case (`ABS`, `FORMAT_DURATION`).

pub mod duration;
pub mod math;

use crate::error::FormulaResult;
use ahash::AHashMap;
use caseform_core::FieldValue;

/// Function implementation signature
///
/// Arguments arrive already evaluated and never contain
/// [`FieldValue::Unknown`]; the evaluator short-circuits unknown arguments
/// before the registry is consulted.
pub type FunctionImpl = fn(&[FieldValue]) -> FormulaResult<FieldValue>;

/// Function definition
pub struct FunctionDef {
    /// Function name (upper snake case)
    pub name: &'static str,
    /// Minimum arguments
    pub min_args: usize,
    /// Maximum arguments (None = unlimited)
    pub max_args: Option<usize>,
    /// Implementation
    pub implementation: FunctionImpl,
}

/// Function registry
pub struct FunctionRegistry {
    functions: AHashMap<String, FunctionDef>,
}

impl FunctionRegistry {
    /// Create a new registry with all built-in functions
    pub fn new() -> Self {
        let mut registry = Self {
            functions: AHashMap::new(),
        };

        // ABS
        registry.register(FunctionDef {
            name: "ABS",
            min_args: 1,
            max_args: Some(1),
            implementation: math::fn_abs,
        });

        // FORMAT_DURATION
        registry.register(FunctionDef {
            name: "FORMAT_DURATION",
            min_args: 1,
            max_args: Some(1),
            implementation: duration::fn_format_duration,
        });

        registry
    }

    /// Look up a function by name (case-sensitive)
    pub fn get(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Register a function, replacing any existing entry with the same name
    pub fn register(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.to_string(), def);
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
