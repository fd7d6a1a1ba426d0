//! # reckoner-chem
//!
//! Chemical formula parsing and molar mass calculation for reckoner.
//!
//! This crate provides:
//! - Formula parsing with nested groups and multipliers (text → element counts)
//! - A periodic table of standard atomic weights
//! - Molar mass resolution with a per-element breakdown
//!
//! ## Example
//!
//! ```rust
//! use reckoner_chem::{molar_mass, FormulaError};
//!
//! let mass = molar_mass("Al2(SO4)3").unwrap();
//! assert_eq!(mass.breakdown.len(), 3);
//!
//! assert_eq!(molar_mass("Xx2"), Err(FormulaError::UnknownElement("Xx".into())));
//! ```

pub mod elements;
pub mod error;
pub mod formula;
pub mod mass;

pub use elements::{element, elements, Element};
pub use error::{FormulaError, FormulaResult};
pub use formula::{parse_formula, ElementCounts, FormulaOptions, ParseMode};
pub use mass::{molar_mass, molar_mass_with, resolve, BreakdownEntry, MolarMass};
