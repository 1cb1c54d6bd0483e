//! Element table - static nuclide data
//!
//! Every tile carries a [`Nuclide`], an interned id into the static
//! tables below. The table is deliberately not exhaustive: ids that
//! appear only as fusion products or decay targets (e.g. `23Na`,
//! `52mMn`) have no entry here and fall back to the mass-number
//! derivation for labels and points.

use std::fmt;

use crate::{decay, fusion};

/// Interned nuclide identifier
///
/// Wraps a `&'static str` drawn from the static rule tables, so
/// equality is cheap and tiles stay `Copy`. Arbitrary strings (e.g.
/// from a persisted snapshot) enter through [`Nuclide::resolve`],
/// which only admits ids reachable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nuclide(&'static str);

impl Nuclide {
    pub(crate) const fn from_static(id: &'static str) -> Self {
        Self(id)
    }

    /// The raw id string, e.g. `"56Iron"`
    pub fn id(&self) -> &'static str {
        self.0
    }

    /// Intern an id string against the set of known nuclides
    ///
    /// Returns `None` for ids that appear nowhere in the element,
    /// fusion, or decay tables. Persistence collaborators use this to
    /// reject malformed snapshots before they reach the engine.
    pub fn resolve(id: &str) -> Option<Nuclide> {
        known_ids().find(|known| *known == id).map(Nuclide)
    }
}

impl fmt::Display for Nuclide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The light base nuclide spawned with probability 0.9
pub const HYDROGEN: Nuclide = Nuclide("Hydrogen");

/// The heavier base nuclide spawned with probability 0.1
pub const DEUTERON: Nuclide = Nuclide("Deuteron");

/// Reaching this nuclide (via fusion or decay) wins the game
pub const WINNING_NUCLIDE: Nuclide = Nuclide("56Iron");

/// Display label split into mass prefix and element name
///
/// Presentation renders the mass prefix as a superscript; the core
/// only owns the split. An isomer marker (`m`) is folded into the
/// prefix, so `52mMn` splits as (`52m`, `Mn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub mass: &'static str,
    pub name: &'static str,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.mass, self.name)
    }
}

/// One row of the element table
#[derive(Debug, Clone, Copy)]
pub struct ElementDef {
    pub id: &'static str,
    pub label: Label,
    /// Explicit point value; `None` falls back to mass/2
    pub points: Option<f64>,
}

const fn def(id: &'static str, mass: &'static str, name: &'static str, points: Option<f64>) -> ElementDef {
    ElementDef {
        id,
        label: Label { mass, name },
        points,
    }
}

/// The labeled nuclides with explicit point values
///
/// `56Iron` scores its full mass number (it is the winning nuclide);
/// every other chain member scores mass/2, same as the fallback.
pub static ELEMENTS: &[ElementDef] = &[
    def("Hydrogen", "", "Hydrogen", None),
    def("Deuteron", "", "Deuteron", Some(1.0)),
    def("3Helium", "3", "Helium", Some(1.5)),
    def("4Helium", "4", "Helium", Some(2.0)),
    def("7Beryllium", "7", "Beryllium", Some(3.0)),
    def("8Beryllium", "8", "Beryllium", Some(4.0)),
    def("12Carbon", "12", "Carbon", Some(6.0)),
    def("16Oxygen", "16", "Oxygen", Some(8.0)),
    def("20Neon", "20", "Neon", Some(10.0)),
    def("24Magnesium", "24", "Magnesium", Some(12.0)),
    def("28Silicon", "28", "Silicon", Some(14.0)),
    def("32Sulfur", "32", "Sulfur", Some(16.0)),
    def("36Argon", "36", "Argon", Some(18.0)),
    def("40Calcium", "40", "Calcium", Some(20.0)),
    def("44Titanium", "44", "Titanium", Some(22.0)),
    def("48Chromium", "48", "Chromium", Some(24.0)),
    def("52Iron", "52", "Iron", Some(26.0)),
    def("56Nickel", "56", "Nickel", Some(28.0)),
    def("56Iron", "56", "Iron", Some(56.0)),
];

/// Look up the element table entry for a nuclide, if it has one
pub fn lookup(nuclide: Nuclide) -> Option<&'static ElementDef> {
    ELEMENTS.iter().find(|e| e.id == nuclide.id())
}

/// Parse the leading decimal mass-number prefix of an id
///
/// The contract for ids without a table entry: the id starts with its
/// mass number (`"23Na"` -> 23). Ids with no numeric prefix
/// (`"Hydrogen"`) have mass 0.
pub fn mass_number(id: &str) -> u32 {
    let digits: &str = &id[..id.len() - id.trim_start_matches(|c: char| c.is_ascii_digit()).len()];
    digits.parse().unwrap_or(0)
}

/// Display label for any known nuclide
///
/// Uses the explicit table label when present; otherwise splits the
/// id at the end of its numeric prefix, keeping a trailing isomer
/// marker (`m`) with the prefix.
pub fn label(nuclide: Nuclide) -> Label {
    if let Some(def) = lookup(nuclide) {
        return def.label;
    }
    let id = nuclide.id();
    let mut split = id.len() - id.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if id[split..].starts_with('m') && split > 0 {
        split += 1;
    }
    Label {
        mass: &id[..split],
        name: &id[split..],
    }
}

/// Every id reachable at runtime: table entries, spawn nuclides,
/// fusion pair members and products, decay sources and targets.
pub(crate) fn known_ids() -> impl Iterator<Item = &'static str> {
    ELEMENTS
        .iter()
        .map(|e| e.id)
        .chain(fusion::known_ids())
        .chain(decay::known_ids())
}

/// Whether an id string names a known nuclide
pub fn is_known(id: &str) -> bool {
    Nuclide::resolve(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_table_entry() {
        let n = Nuclide::resolve("56Iron").unwrap();
        assert_eq!(n, WINNING_NUCLIDE);
        assert_eq!(n.id(), "56Iron");
    }

    #[test]
    fn test_resolve_untabled_chain_member() {
        // 23Na exists only as a fusion product / proton-capture seed.
        assert!(Nuclide::resolve("23Na").is_some());
        assert!(Nuclide::resolve("52mMn").is_some());
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(Nuclide::resolve("Unobtainium"), None);
        assert_eq!(Nuclide::resolve(""), None);
    }

    #[test]
    fn test_mass_number_prefix() {
        assert_eq!(mass_number("56Iron"), 56);
        assert_eq!(mass_number("7Li"), 7);
        assert_eq!(mass_number("52mMn"), 52);
        assert_eq!(mass_number("Hydrogen"), 0);
    }

    #[test]
    fn test_explicit_labels() {
        let l = label(Nuclide::resolve("3Helium").unwrap());
        assert_eq!(l.mass, "3");
        assert_eq!(l.name, "Helium");

        let l = label(HYDROGEN);
        assert_eq!(l.mass, "");
        assert_eq!(l.name, "Hydrogen");
    }

    #[test]
    fn test_derived_label_with_isomer_marker() {
        let l = label(Nuclide::resolve("52mMn").unwrap());
        assert_eq!(l.mass, "52m");
        assert_eq!(l.name, "Mn");

        let l = label(Nuclide::resolve("7Li").unwrap());
        assert_eq!(l.mass, "7");
        assert_eq!(l.name, "Li");
    }

    #[test]
    fn test_every_fusion_product_and_decay_target_is_known() {
        // The invariant from the data model: anything the graph can
        // produce must be resolvable.
        for id in known_ids() {
            assert!(Nuclide::resolve(id).is_some(), "unresolvable id {id}");
        }
    }
}
