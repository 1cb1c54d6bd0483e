//! Decay rules - unstable nuclides and their countdown windows
//!
//! A tile whose nuclide has a rule here carries a countdown in game
//! turns. Each move decrements it once; at zero the tile becomes one
//! of the rule's targets. `52mMn` is the one branching rule (isomeric
//! transition vs. beta decay); the target is drawn when the decay
//! fires, not when the table is built.

use crate::elements::Nuclide;
use crate::halflife::half_life_to_turns;
use crate::rng::GameRng;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 365.2425 * DAY;

/// One decay rule
#[derive(Debug, Clone, Copy)]
pub struct DecayRule {
    pub nuclide: &'static str,
    pub half_life_secs: f64,
    /// One entry if deterministic; one is drawn uniformly otherwise
    pub targets: &'static [&'static str],
    /// Signed score adjustment applied when the decay fires
    pub score_delta: f64,
}

const fn rule(
    nuclide: &'static str,
    half_life_secs: f64,
    targets: &'static [&'static str],
    score_delta: f64,
) -> DecayRule {
    DecayRule {
        nuclide,
        half_life_secs,
        targets,
        score_delta,
    }
}

pub static DECAY_RULES: &[DecayRule] = &[
    rule("7Beryllium", 53.22 * DAY, &["7Li"], -3.0),
    rule("8Beryllium", 8.19e-17, &["4Helium"], -4.0),
    rule("8B", 0.77, &["8Beryllium"], 0.0),
    rule("23Mg", 11.317, &["23Na"], 0.0),
    rule("30P", 2.498 * MINUTE, &["30Si"], 0.0),
    rule("31S", 2.5534, &["31P"], 0.0),
    rule("44Sc", 3.97 * HOUR, &["44Ca"], 0.0),
    rule("44Titanium", 60.0 * YEAR, &["44Sc"], 0.0),
    rule("48V", 15.9735 * DAY, &["48Ti"], 0.0),
    rule("48Chromium", 21.56 * HOUR, &["48V"], 0.0),
    rule("52Mn", 5.591 * DAY, &["52Cr"], 0.0),
    rule("52mMn", 21.1 * MINUTE, &["52Cr", "52Mn"], 0.0),
    rule("52Iron", 8.275 * HOUR, &["52mMn"], 0.0),
    rule("56Co", 77.27 * DAY, &["56Iron"], 28.0),
    rule("56Nickel", 6.075 * DAY, &["56Co"], 28.0),
    rule("60Cu", 23.7 * MINUTE, &["60Ni"], 0.0),
    rule("60Zn", 2.38 * MINUTE, &["60Cu"], 0.0),
];

/// The decay rule for a nuclide, if it is unstable
pub fn rule_for(nuclide: Nuclide) -> Option<&'static DecayRule> {
    DECAY_RULES.iter().find(|r| r.nuclide == nuclide.id())
}

/// Draw a fresh countdown for a newly created tile of this nuclide
///
/// `None` for stable nuclides. For unstable ones the countdown is
/// uniform over `[ceil(4m), ceil(8m)]` where `m` is the mapped turn
/// scale - intentionally a window, so decay timing feels stochastic
/// rather than clockwork.
pub fn roll_countdown(nuclide: Nuclide, rng: &mut GameRng) -> Option<u32> {
    let rule = rule_for(nuclide)?;
    let m = half_life_to_turns(rule.half_life_secs);
    let lo = (4.0 * m).ceil() as u32;
    let hi = (8.0 * m).ceil() as u32;
    Some(rng.range_inclusive(lo.max(1), hi.max(1)))
}

/// Draw the decay target for a firing rule
pub fn pick_target(rule: &DecayRule, rng: &mut GameRng) -> Nuclide {
    let id = if rule.targets.len() == 1 {
        rule.targets[0]
    } else {
        *rng.pick(rule.targets)
    };
    Nuclide::from_static(id)
}

/// Every id the decay table mentions (sources and targets)
pub(crate) fn known_ids() -> Vec<&'static str> {
    let mut ids = Vec::new();
    for rule in DECAY_RULES {
        ids.push(rule.nuclide);
        ids.extend_from_slice(rule.targets);
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: &str) -> Nuclide {
        Nuclide::resolve(id).unwrap()
    }

    #[test]
    fn test_rule_lookup() {
        let rule = rule_for(n("7Beryllium")).unwrap();
        assert_eq!(rule.targets, &["7Li"]);
        assert_eq!(rule.score_delta, -3.0);

        assert!(rule_for(n("Hydrogen")).is_none());
        assert!(rule_for(n("56Iron")).is_none());
    }

    #[test]
    fn test_no_duplicate_rules() {
        for (i, a) in DECAY_RULES.iter().enumerate() {
            for b in &DECAY_RULES[i + 1..] {
                assert_ne!(a.nuclide, b.nuclide, "duplicate rule for {}", a.nuclide);
            }
        }
    }

    #[test]
    fn test_countdown_window_for_8beryllium() {
        // m ~= 1 for 8Be, so countdowns land in [4, 8].
        let mut rng = GameRng::new(5);
        for _ in 0..100 {
            let turns = roll_countdown(n("8Beryllium"), &mut rng).unwrap();
            assert!((4..=8).contains(&turns), "turns = {turns}");
        }
    }

    #[test]
    fn test_countdown_none_for_stable() {
        let mut rng = GameRng::new(5);
        assert_eq!(roll_countdown(n("Hydrogen"), &mut rng), None);
        assert_eq!(roll_countdown(n("7Li"), &mut rng), None);
    }

    #[test]
    fn test_countdown_is_at_least_one_turn() {
        let mut rng = GameRng::new(11);
        for rule in DECAY_RULES {
            let turns = roll_countdown(n(rule.nuclide), &mut rng).unwrap();
            assert!(turns >= 1, "{} rolled 0", rule.nuclide);
        }
    }

    #[test]
    fn test_branching_target_draws_both_outcomes() {
        let rule = rule_for(n("52mMn")).unwrap();
        let mut rng = GameRng::new(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(pick_target(rule, &mut rng).id());
        }
        assert!(seen.contains("52Cr"));
        assert!(seen.contains("52Mn"));
    }

    #[test]
    fn test_deterministic_target_never_draws() {
        let rule = rule_for(n("56Co")).unwrap();
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);
        // Single-target rules must not consume randomness.
        assert_eq!(pick_target(rule, &mut a).id(), "56Iron");
        assert_eq!(pick_target(rule, &mut b).id(), "56Iron");
        assert_eq!(a.range_inclusive(0, 1000), GameRng::new(1).range_inclusive(0, 1000));
    }
}
