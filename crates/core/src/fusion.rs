//! Fusion graph - which nuclide pairs combine, and into what
//!
//! The graph is a static table of unordered pairs. Lookup is
//! symmetric (`can_fuse(a, b) == can_fuse(b, a)`), but the stored
//! direction matters for resolution: [`fuse`] prefers the edge whose
//! first member is the stationary anchor tile.
//!
//! Carbon and oxygen burning produce one of several candidate
//! products; the draw happens at fusion time through the injected
//! random source, never at table construction.

use crate::elements::Nuclide;
use crate::rng::GameRng;

/// The product side of a fusion edge
#[derive(Debug, Clone, Copy)]
pub enum Product {
    Single(&'static str),
    /// One is chosen uniformly at random when the fusion fires
    Candidates(&'static [&'static str]),
}

/// One directed edge of the fusion graph
#[derive(Debug, Clone, Copy)]
pub struct FusionRule {
    pub a: &'static str,
    pub b: &'static str,
    pub product: Product,
}

const fn pair(a: &'static str, b: &'static str, product: &'static str) -> FusionRule {
    FusionRule {
        a,
        b,
        product: Product::Single(product),
    }
}

const fn branch(a: &'static str, b: &'static str, candidates: &'static [&'static str]) -> FusionRule {
    FusionRule {
        a,
        b,
        product: Product::Candidates(candidates),
    }
}

/// The stellar burning network
///
/// pp-chain, helium/alpha ladder, carbon and oxygen burning, proton
/// captures, plus alpha captures on decay products (`44Ca`, `48Ti`,
/// `52Cr` - the ids the decay chains actually produce). `52Cr + 4He`
/// is the main route to the winning `56Iron`.
pub static FUSION_RULES: &[FusionRule] = &[
    pair("Hydrogen", "Hydrogen", "Deuteron"),
    pair("Hydrogen", "Deuteron", "3Helium"),
    pair("Hydrogen", "7Li", "4Helium"),
    pair("3Helium", "3Helium", "4Helium"),
    pair("3Helium", "4Helium", "7Beryllium"),
    pair("4Helium", "4Helium", "8Beryllium"),
    pair("4Helium", "8Beryllium", "12Carbon"),
    pair("4Helium", "12Carbon", "16Oxygen"),
    pair("4Helium", "16Oxygen", "20Neon"),
    pair("4Helium", "20Neon", "24Magnesium"),
    pair("4Helium", "24Magnesium", "28Silicon"),
    pair("4Helium", "28Silicon", "32Sulfur"),
    pair("4Helium", "32Sulfur", "36Argon"),
    pair("4Helium", "36Argon", "40Calcium"),
    pair("4Helium", "40Calcium", "44Titanium"),
    pair("4Helium", "44Titanium", "48Chromium"),
    pair("4Helium", "48Chromium", "52Iron"),
    pair("4Helium", "52Iron", "56Nickel"),
    pair("4Helium", "56Nickel", "60Zn"),
    pair("4Helium", "44Ca", "48Ti"),
    pair("4Helium", "48Ti", "52Cr"),
    pair("4Helium", "52Cr", "56Iron"),
    pair("4Helium", "56Iron", "60Ni"),
    pair("7Beryllium", "Hydrogen", "8B"),
    branch(
        "12Carbon",
        "12Carbon",
        &["20Neon", "23Na", "23Mg", "24Magnesium", "16Oxygen"],
    ),
    branch(
        "16Oxygen",
        "16Oxygen",
        &["28Silicon", "31P", "31S", "30Si", "30P", "32Sulfur", "24Magnesium"],
    ),
    pair("23Na", "Hydrogen", "24Magnesium"),
    pair("30Si", "Hydrogen", "31P"),
    pair("31P", "Hydrogen", "32Sulfur"),
];

/// Find the edge stored exactly as (a, b)
fn edge(a: Nuclide, b: Nuclide) -> Option<&'static FusionRule> {
    FUSION_RULES
        .iter()
        .find(|r| r.a == a.id() && r.b == b.id())
}

/// Whether the unordered pair (a, b) has a fusion edge
pub fn can_fuse(a: Nuclide, b: Nuclide) -> bool {
    edge(a, b).is_some() || edge(b, a).is_some()
}

/// Resolve the fusion of `anchor` (the stationary tile) and `moving`
///
/// Prefers the edge stored as (anchor, moving); candidate sets are
/// drawn uniformly at the moment of fusion. Returns `None` when the
/// pair has no edge in either direction.
pub fn fuse(anchor: Nuclide, moving: Nuclide, rng: &mut GameRng) -> Option<Nuclide> {
    let rule = edge(anchor, moving).or_else(|| edge(moving, anchor))?;
    let id = match rule.product {
        Product::Single(id) => id,
        Product::Candidates(set) => *rng.pick(set),
    };
    Some(Nuclide::from_static(id))
}

/// Every id the graph mentions (pair members and all products)
pub(crate) fn known_ids() -> Vec<&'static str> {
    let mut ids = Vec::new();
    for rule in FUSION_RULES {
        ids.push(rule.a);
        ids.push(rule.b);
        match rule.product {
            Product::Single(id) => ids.push(id),
            Product::Candidates(set) => ids.extend_from_slice(set),
        }
    }
    ids
}
