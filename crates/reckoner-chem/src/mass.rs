//! Molar mass resolution

use crate::elements::element;
use crate::error::{FormulaError, FormulaResult};
use crate::formula::{parse_formula, ElementCounts, FormulaOptions};

/// One element's share of a molar mass
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakdownEntry {
    pub element: String,
    pub count: u64,
    /// Atomic mass in g/mol
    pub atomic_mass: f64,
    /// `count * atomic_mass`
    pub contribution: f64,
}

/// Molar mass of a formula with its per-element breakdown
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MolarMass {
    /// Total in g/mol
    pub total: f64,
    /// Entries in order of first appearance in the formula
    pub breakdown: Vec<BreakdownEntry>,
}

impl MolarMass {
    /// Total number of atoms across the breakdown
    pub fn atom_count(&self) -> u64 {
        self.breakdown
            .iter()
            .fold(0u64, |sum, entry| sum.saturating_add(entry.count))
    }
}

/// Reduce element counts to a molar mass
///
/// Fails on the first element missing from the periodic table; no partial
/// total is ever returned.
pub fn resolve(counts: &ElementCounts) -> FormulaResult<MolarMass> {
    let mut breakdown = Vec::with_capacity(counts.len());

    for (symbol, count) in counts.iter() {
        let entry = element(symbol)
            .ok_or_else(|| FormulaError::UnknownElement(symbol.to_string()))?;

        breakdown.push(BreakdownEntry {
            element: symbol.to_string(),
            count,
            atomic_mass: entry.atomic_mass,
            contribution: entry.atomic_mass * count as f64,
        });
    }

    let total = breakdown.iter().map(|entry| entry.contribution).sum();

    Ok(MolarMass { total, breakdown })
}

/// Molar mass of `formula`, parsed permissively
///
/// # Example
/// ```rust
/// use reckoner_chem::molar_mass;
///
/// let water = molar_mass("H2O").unwrap();
/// assert!((water.total - 18.015).abs() < 1e-9);
/// ```
pub fn molar_mass(formula: &str) -> FormulaResult<MolarMass> {
    molar_mass_with(formula, &FormulaOptions::default())
}

/// Molar mass of `formula` with explicit parse options
pub fn molar_mass_with(formula: &str, options: &FormulaOptions) -> FormulaResult<MolarMass> {
    let counts = parse_formula(formula, options)?;
    let mass = resolve(&counts)?;

    log::debug!(
        "molar mass of {:?}: {:.3} g/mol over {} elements",
        formula,
        mass.total,
        mass.breakdown.len()
    );
    Ok(mass)
}
