//! Built-in functions and constants
//!
//! The registry is the only place names get meaning. It is built once and
//! never mutated, so an expression can reach nothing beyond what is
//! registered here.

pub mod math;

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// Function implementation signature
///
/// Arguments arrive already evaluated, with the arity checked by the parser.
pub type FunctionImpl = fn(&[f64]) -> f64;

/// Function definition
pub struct FunctionDef {
    /// Function name as written in expressions
    pub name: &'static str,
    /// Exact number of arguments
    pub arity: usize,
    /// Implementation
    pub implementation: FunctionImpl,
}

/// Function and constant registry
pub struct FunctionRegistry {
    functions: AHashMap<&'static str, FunctionDef>,
    constants: AHashMap<&'static str, f64>,
}

static REGISTRY: Lazy<FunctionRegistry> = Lazy::new(FunctionRegistry::new);

/// The shared built-in registry
pub fn registry() -> &'static FunctionRegistry {
    &REGISTRY
}

impl FunctionRegistry {
    fn new() -> Self {
        let mut registry = Self {
            functions: AHashMap::with_capacity(20),
            constants: AHashMap::with_capacity(2),
        };

        registry.register_trig_functions();
        registry.register_exponential_functions();
        registry.register_rounding_functions();

        registry.constants.insert("PI", std::f64::consts::PI);
        registry.constants.insert("E", std::f64::consts::E);

        registry
    }

    /// Look up a function by name (case-sensitive)
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /// Look up a constant by name (case-sensitive)
    pub fn constant(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    /// Registered function names, sorted
    pub fn function_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.values().map(|def| def.name).collect();
        names.sort_unstable();
        names
    }

    /// Registered constant names, sorted
    pub fn constant_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.constants.keys().copied().collect();
        names.sort_unstable();
        names
    }

    fn register(&mut self, name: &'static str, arity: usize, implementation: FunctionImpl) {
        self.functions.insert(
            name,
            FunctionDef {
                name,
                arity,
                implementation,
            },
        );
    }

    fn register_trig_functions(&mut self) {
        self.register("sin", 1, math::fn_sin);
        self.register("cos", 1, math::fn_cos);
        self.register("tan", 1, math::fn_tan);
        self.register("asin", 1, math::fn_asin);
        self.register("acos", 1, math::fn_acos);
        self.register("atan", 1, math::fn_atan);
    }

    fn register_exponential_functions(&mut self) {
        // log is the natural logarithm
        self.register("log", 1, math::fn_log);
        self.register("log10", 1, math::fn_log10);
        self.register("sqrt", 1, math::fn_sqrt);
        self.register("exp", 1, math::fn_exp);
        self.register("pow", 2, math::fn_pow);
    }

    fn register_rounding_functions(&mut self) {
        self.register("abs", 1, math::fn_abs);
        self.register("floor", 1, math::fn_floor);
        self.register("ceil", 1, math::fn_ceil);
        self.register("round", 1, math::fn_round);
        self.register("max", 2, math::fn_max);
        self.register("min", 2, math::fn_min);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let names = registry().function_names();
        assert_eq!(
            names,
            vec![
                "abs", "acos", "asin", "atan", "ceil", "cos", "exp", "floor", "log", "log10",
                "max", "min", "pow", "round", "sin", "sqrt", "tan",
            ]
        );
        assert_eq!(registry().constant_names(), vec!["E", "PI"]);
    }

    #[test]
    fn test_registry_arity() {
        assert_eq!(registry().function("pow").map(|f| f.arity), Some(2));
        assert_eq!(registry().function("max").map(|f| f.arity), Some(2));
        assert_eq!(registry().function("sqrt").map(|f| f.arity), Some(1));
    }

    #[test]
    fn test_definitions_carry_their_names() {
        for name in registry().function_names() {
            assert_eq!(registry().function(name).map(|f| f.name), Some(name));
        }
    }

    #[test]
    fn test_registry_is_case_sensitive() {
        assert!(registry().function("SIN").is_none());
        assert!(registry().constant("pi").is_none());
        assert_eq!(registry().constant("PI"), Some(std::f64::consts::PI));
    }
}
