//! Periodic table
//!
//! Standard atomic weights in g/mol. Elements with no stable isotope carry
//! the mass number of their longest-lived isotope.

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// A chemical element
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Atomic mass in g/mol
    pub atomic_mass: f64,
}

impl Element {
    const fn new(
        atomic_number: u8,
        symbol: &'static str,
        name: &'static str,
        atomic_mass: f64,
    ) -> Self {
        Self {
            atomic_number,
            symbol,
            name,
            atomic_mass,
        }
    }
}

static ELEMENTS: [Element; 118] = [
    Element::new(1, "H", "Hydrogen", 1.008),
    Element::new(2, "He", "Helium", 4.0026),
    Element::new(3, "Li", "Lithium", 6.94),
    Element::new(4, "Be", "Beryllium", 9.0122),
    Element::new(5, "B", "Boron", 10.81),
    Element::new(6, "C", "Carbon", 12.011),
    Element::new(7, "N", "Nitrogen", 14.007),
    Element::new(8, "O", "Oxygen", 15.999),
    Element::new(9, "F", "Fluorine", 18.998),
    Element::new(10, "Ne", "Neon", 20.18),
    Element::new(11, "Na", "Sodium", 22.989),
    Element::new(12, "Mg", "Magnesium", 24.305),
    Element::new(13, "Al", "Aluminium", 26.982),
    Element::new(14, "Si", "Silicon", 28.085),
    Element::new(15, "P", "Phosphorus", 30.974),
    Element::new(16, "S", "Sulfur", 32.06),
    Element::new(17, "Cl", "Chlorine", 35.45),
    Element::new(18, "Ar", "Argon", 39.948),
    Element::new(19, "K", "Potassium", 39.098),
    Element::new(20, "Ca", "Calcium", 40.078),
    Element::new(21, "Sc", "Scandium", 44.956),
    Element::new(22, "Ti", "Titanium", 47.867),
    Element::new(23, "V", "Vanadium", 50.942),
    Element::new(24, "Cr", "Chromium", 51.996),
    Element::new(25, "Mn", "Manganese", 54.938),
    Element::new(26, "Fe", "Iron", 55.845),
    Element::new(27, "Co", "Cobalt", 58.933),
    Element::new(28, "Ni", "Nickel", 58.693),
    Element::new(29, "Cu", "Copper", 63.546),
    Element::new(30, "Zn", "Zinc", 65.38),
    Element::new(31, "Ga", "Gallium", 69.723),
    Element::new(32, "Ge", "Germanium", 72.63),
    Element::new(33, "As", "Arsenic", 74.922),
    Element::new(34, "Se", "Selenium", 78.971),
    Element::new(35, "Br", "Bromine", 79.904),
    Element::new(36, "Kr", "Krypton", 83.798),
    Element::new(37, "Rb", "Rubidium", 85.468),
    Element::new(38, "Sr", "Strontium", 87.62),
    Element::new(39, "Y", "Yttrium", 88.906),
    Element::new(40, "Zr", "Zirconium", 91.224),
    Element::new(41, "Nb", "Niobium", 92.906),
    Element::new(42, "Mo", "Molybdenum", 95.95),
    Element::new(43, "Tc", "Technetium", 98.0),
    Element::new(44, "Ru", "Ruthenium", 101.07),
    Element::new(45, "Rh", "Rhodium", 102.91),
    Element::new(46, "Pd", "Palladium", 106.42),
    Element::new(47, "Ag", "Silver", 107.8682),
    Element::new(48, "Cd", "Cadmium", 112.41),
    Element::new(49, "In", "Indium", 114.82),
    Element::new(50, "Sn", "Tin", 118.71),
    Element::new(51, "Sb", "Antimony", 121.76),
    Element::new(52, "Te", "Tellurium", 127.6),
    Element::new(53, "I", "Iodine", 126.90447),
    Element::new(54, "Xe", "Xenon", 131.29),
    Element::new(55, "Cs", "Caesium", 132.91),
    Element::new(56, "Ba", "Barium", 137.33),
    Element::new(57, "La", "Lanthanum", 138.91),
    Element::new(58, "Ce", "Cerium", 140.12),
    Element::new(59, "Pr", "Praseodymium", 140.91),
    Element::new(60, "Nd", "Neodymium", 144.24),
    Element::new(61, "Pm", "Promethium", 145.0),
    Element::new(62, "Sm", "Samarium", 150.36),
    Element::new(63, "Eu", "Europium", 151.96),
    Element::new(64, "Gd", "Gadolinium", 157.25),
    Element::new(65, "Tb", "Terbium", 158.93),
    Element::new(66, "Dy", "Dysprosium", 162.5),
    Element::new(67, "Ho", "Holmium", 164.93),
    Element::new(68, "Er", "Erbium", 167.26),
    Element::new(69, "Tm", "Thulium", 168.93),
    Element::new(70, "Yb", "Ytterbium", 173.05),
    Element::new(71, "Lu", "Lutetium", 174.97),
    Element::new(72, "Hf", "Hafnium", 178.49),
    Element::new(73, "Ta", "Tantalum", 180.95),
    Element::new(74, "W", "Tungsten", 183.84),
    Element::new(75, "Re", "Rhenium", 186.21),
    Element::new(76, "Os", "Osmium", 190.23),
    Element::new(77, "Ir", "Iridium", 192.22),
    Element::new(78, "Pt", "Platinum", 195.08),
    Element::new(79, "Au", "Gold", 196.96657),
    Element::new(80, "Hg", "Mercury", 200.59),
    Element::new(81, "Tl", "Thallium", 204.38),
    Element::new(82, "Pb", "Lead", 207.2),
    Element::new(83, "Bi", "Bismuth", 208.98),
    Element::new(84, "Po", "Polonium", 209.0),
    Element::new(85, "At", "Astatine", 210.0),
    Element::new(86, "Rn", "Radon", 222.0),
    Element::new(87, "Fr", "Francium", 223.0),
    Element::new(88, "Ra", "Radium", 226.0),
    Element::new(89, "Ac", "Actinium", 227.0),
    Element::new(90, "Th", "Thorium", 232.04),
    Element::new(91, "Pa", "Protactinium", 231.04),
    Element::new(92, "U", "Uranium", 238.03),
    Element::new(93, "Np", "Neptunium", 237.0),
    Element::new(94, "Pu", "Plutonium", 244.0),
    Element::new(95, "Am", "Americium", 243.0),
    Element::new(96, "Cm", "Curium", 247.0),
    Element::new(97, "Bk", "Berkelium", 247.0),
    Element::new(98, "Cf", "Californium", 251.0),
    Element::new(99, "Es", "Einsteinium", 252.0),
    Element::new(100, "Fm", "Fermium", 257.0),
    Element::new(101, "Md", "Mendelevium", 258.0),
    Element::new(102, "No", "Nobelium", 259.0),
    Element::new(103, "Lr", "Lawrencium", 266.0),
    Element::new(104, "Rf", "Rutherfordium", 267.0),
    Element::new(105, "Db", "Dubnium", 268.0),
    Element::new(106, "Sg", "Seaborgium", 269.0),
    Element::new(107, "Bh", "Bohrium", 270.0),
    Element::new(108, "Hs", "Hassium", 269.0),
    Element::new(109, "Mt", "Meitnerium", 278.0),
    Element::new(110, "Ds", "Darmstadtium", 281.0),
    Element::new(111, "Rg", "Roentgenium", 282.0),
    Element::new(112, "Cn", "Copernicium", 285.0),
    Element::new(113, "Nh", "Nihonium", 286.0),
    Element::new(114, "Fl", "Flerovium", 289.0),
    Element::new(115, "Mc", "Moscovium", 290.0),
    Element::new(116, "Lv", "Livermorium", 293.0),
    Element::new(117, "Ts", "Tennessine", 294.0),
    Element::new(118, "Og", "Oganesson", 294.0),
];

static BY_SYMBOL: Lazy<AHashMap<&'static str, &'static Element>> =
    Lazy::new(|| ELEMENTS.iter().map(|e| (e.symbol, e)).collect());

/// Look up an element by its symbol (case-sensitive)
pub fn element(symbol: &str) -> Option<&'static Element> {
    BY_SYMBOL.get(symbol).copied()
}

/// All elements, ordered by atomic number
pub fn elements() -> &'static [Element] {
    &ELEMENTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_and_unique() {
        for (i, element) in elements().iter().enumerate() {
            assert_eq!(element.atomic_number as usize, i + 1, "{}", element.symbol);
        }
        assert_eq!(BY_SYMBOL.len(), 118);
    }

    #[test]
    fn test_symbols_are_well_formed() {
        for element in elements() {
            let mut chars = element.symbol.chars();
            assert!(chars.next().map_or(false, |c| c.is_ascii_uppercase()));
            assert!(chars.all(|c| c.is_ascii_lowercase()));
            assert!(element.symbol.len() <= 2, "{}", element.symbol);
            assert!(element.atomic_mass > 0.0);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(element("O").map(|e| e.atomic_mass), Some(15.999));
        assert_eq!(element("Fe").map(|e| e.name), Some("Iron"));
        assert!(element("Xx").is_none());
        assert!(element("fe").is_none());
    }
}
