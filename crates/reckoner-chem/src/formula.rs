//! Chemical formula parser
//!
//! Expands element symbols, counts and parenthesized groups with trailing
//! multipliers into per-element atom counts, e.g. `Al2(SO4)3` → Al 2, S 3, O 12.
//!
//! Nesting is tracked with an explicit stack of groups rather than recursion,
//! so memory is bounded by the nesting depth of the formula.

use crate::error::{FormulaError, FormulaResult};

/// How to treat text outside the formula grammar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseMode {
    /// Skip stray characters and counts
    #[default]
    Permissive,
    /// Reject stray characters, stray counts and formulas without elements
    Strict,
}

/// Options for formula parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormulaOptions {
    pub mode: ParseMode,
}

impl FormulaOptions {
    pub fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
        }
    }
}

/// Element → atom count, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ElementCounts {
    entries: Vec<(String, u64)>,
}

impl ElementCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` atoms of `element`, appending it if not yet present
    pub fn add(&mut self, element: &str, count: u64) -> FormulaResult<()> {
        match self.entries.iter_mut().find(|(symbol, _)| symbol == element) {
            Some((_, existing)) => {
                *existing = existing
                    .checked_add(count)
                    .ok_or(FormulaError::CountOverflow)?;
            }
            None => self.entries.push((element.to_string(), count)),
        }
        Ok(())
    }

    /// Count for `element`, if it appears
    pub fn get(&self, element: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(symbol, _)| symbol == element)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(symbol, count)| (symbol.as_str(), *count))
    }

    /// Number of distinct elements
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of atoms across all elements
    pub fn total_atoms(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |sum, (_, count)| sum.saturating_add(*count))
    }

    /// Fold a closed group into this one, scaling every count by `multiplier`
    fn merge_scaled(&mut self, group: ElementCounts, multiplier: u64) -> FormulaResult<()> {
        for (element, count) in group.entries {
            let scaled = count
                .checked_mul(multiplier)
                .ok_or(FormulaError::CountOverflow)?;
            self.add(&element, scaled)?;
        }
        Ok(())
    }
}

/// Parse a chemical formula into element counts
///
/// # Example
/// ```rust
/// use reckoner_chem::{parse_formula, FormulaOptions};
///
/// let counts = parse_formula("Ca(OH)2", &FormulaOptions::default()).unwrap();
/// assert_eq!(counts.get("Ca"), Some(1));
/// assert_eq!(counts.get("O"), Some(2));
/// assert_eq!(counts.get("H"), Some(2));
/// ```
pub fn parse_formula(formula: &str, options: &FormulaOptions) -> FormulaResult<ElementCounts> {
    let counts = FormulaParser::new(formula, options.mode).parse()?;

    if options.mode == ParseMode::Strict && counts.is_empty() {
        return Err(FormulaError::Empty);
    }

    log::trace!(
        "parsed formula {:?} into {} elements",
        formula,
        counts.len()
    );
    Ok(counts)
}

struct FormulaParser<'a> {
    input: &'a str,
    pos: usize,
    mode: ParseMode,
    root: ElementCounts,
    /// One group per currently open parenthesis
    open_groups: Vec<ElementCounts>,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str, mode: ParseMode) -> Self {
        Self {
            input,
            pos: 0,
            mode,
            root: ElementCounts::new(),
            open_groups: Vec::new(),
        }
    }

    fn parse(mut self) -> FormulaResult<ElementCounts> {
        while let Some(c) = self.peek_char() {
            let offset = self.pos;

            if c.is_ascii_uppercase() {
                self.parse_element()?;
            } else if c == '(' {
                self.advance();
                self.open_groups.push(ElementCounts::new());
            } else if c == ')' {
                self.advance();
                self.close_group(offset)?;
            } else if c.is_whitespace() {
                self.advance();
            } else if c.is_ascii_digit() {
                if self.mode == ParseMode::Strict {
                    return Err(FormulaError::StrayCount { offset });
                }
                self.scan_count()?;
                log::debug!("skipping stray count at offset {}", offset);
            } else {
                if self.mode == ParseMode::Strict {
                    return Err(FormulaError::UnexpectedCharacter { ch: c, offset });
                }
                self.advance();
                log::debug!("skipping {:?} at offset {}", c, offset);
            }
        }

        if !self.open_groups.is_empty() {
            return Err(FormulaError::UnclosedParen {
                depth: self.open_groups.len(),
            });
        }

        Ok(self.root)
    }

    fn parse_element(&mut self) -> FormulaResult<()> {
        let start = self.pos;
        self.advance();
        if self.peek_char().map_or(false, |c| c.is_ascii_lowercase()) {
            self.advance();
        }
        let input = self.input;
        let symbol = &input[start..self.pos];
        self.skip_whitespace();
        let count = self.scan_count()?.unwrap_or(1);

        self.top().add(symbol, count)
    }

    fn close_group(&mut self, offset: usize) -> FormulaResult<()> {
        let group = self
            .open_groups
            .pop()
            .ok_or(FormulaError::UnmatchedClosingParen { offset })?;
        self.skip_whitespace();
        let multiplier = self.scan_count()?.unwrap_or(1);

        self.top().merge_scaled(group, multiplier)
    }

    fn top(&mut self) -> &mut ElementCounts {
        self.open_groups.last_mut().unwrap_or(&mut self.root)
    }

    /// Read an optional run of digits
    fn scan_count(&mut self) -> FormulaResult<Option<u64>> {
        let start = self.pos;
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }
        if start == self.pos {
            return Ok(None);
        }
        self.input[start..self.pos]
            .parse::<u64>()
            .map(Some)
            .map_err(|_| FormulaError::CountOverflow)
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }
}
