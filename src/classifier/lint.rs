// SignGlove — Rule Reachability Lint
//
// Six boolean inputs give only 64 hand states, so reachability is decided
// by enumeration.  A rule is reported shadowed when, for every state it
// accepts, some earlier enabled rule also accepts that state under every
// motion sample that would satisfy the later rule's guard.  Guards are
// compared with `MotionGuard::implies`, which is conservative, so a report
// is always a real dead rule; some dead rules may go unreported.

use super::{HandFlags, Rule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnreachableReason {
    /// Some flag is required both set and clear.
    Contradictory,
    /// Earlier rules (by table index) claim every state this rule accepts.
    Shadowed { by: Vec<usize> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unreachable {
    pub index: usize,
    pub symbol: char,
    pub reason: UnreachableReason,
}

pub(super) fn unreachable_rules(rules: &[Rule]) -> Vec<Unreachable> {
    let mut found = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        if !rule.enabled {
            continue;
        }
        if !rule.pattern.is_satisfiable() {
            found.push(Unreachable {
                index,
                symbol: rule.symbol,
                reason: UnreachableReason::Contradictory,
            });
            continue;
        }
        if let Some(by) = shadowing_rules(rule, &rules[..index]) {
            log::debug!("rule {} ({}) shadowed by {:?}", index, rule.symbol, by);
            found.push(Unreachable {
                index,
                symbol: rule.symbol,
                reason: UnreachableReason::Shadowed { by },
            });
        }
    }

    found
}

/// Indices of the earlier rules that together cover `rule`, or `None` if
/// some accepted state gets through to it.
fn shadowing_rules(rule: &Rule, earlier: &[Rule]) -> Option<Vec<usize>> {
    let mut by = Vec::new();

    for flags in HandFlags::all().filter(|&f| rule.pattern.matches(f)) {
        let cover = earlier
            .iter()
            .position(|prior| prior.enabled && prior.pattern.matches(flags) && covers(prior, rule))?;
        if !by.contains(&cover) {
            by.push(cover);
        }
    }

    by.sort_unstable();
    Some(by)
}

/// Whether `prior` fires whenever `rule`'s guard passes.
fn covers(prior: &Rule, rule: &Rule) -> bool {
    match (&prior.guard, &rule.guard) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(theirs), Some(ours)) => ours.implies(theirs),
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Comparison, Flag::*, MotionGuard, Pattern, RuleTable};
    use super::*;
    use crate::events::Axis;

    fn z_below(t: f32) -> MotionGuard {
        MotionGuard::accel(Axis::Z, Comparison::Below(t))
    }

    #[test]
    fn test_subsumed_rule_is_shadowed() {
        let table = RuleTable::new(vec![
            Rule::new('G', Pattern::ANY.on(Bent2)),
            Rule::new('S', Pattern::ANY.on(Bent2).on(Touch1)),
        ]);
        assert_eq!(
            table.unreachable(),
            vec![Unreachable {
                index: 1,
                symbol: 'S',
                reason: UnreachableReason::Shadowed { by: vec![0] },
            }]
        );
    }

    #[test]
    fn test_union_of_earlier_rules_shadows() {
        let table = RuleTable::new(vec![
            Rule::new('X', Pattern::ANY.on(Bent1).on(Touch1)),
            Rule::new('Y', Pattern::ANY.on(Bent1).off(Touch1)),
            Rule::new('Z', Pattern::ANY.on(Bent1)),
        ]);
        let report = table.unreachable();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].reason, UnreachableReason::Shadowed { by: vec![0, 1] });
    }

    #[test]
    fn test_specific_before_general_is_fine() {
        let table = RuleTable::new(vec![
            Rule::new('S', Pattern::ANY.on(Bent2).on(Touch1)),
            Rule::new('G', Pattern::ANY.on(Bent2)),
        ]);
        assert!(table.unreachable().is_empty());
    }

    #[test]
    fn test_guarded_rule_does_not_shadow_unguarded() {
        let table = RuleTable::new(vec![
            Rule::new('P', Pattern::ANY.on(Bent2)).guarded(z_below(4.0)),
            Rule::new('T', Pattern::ANY.on(Bent2).on(Touch3)),
        ]);
        assert!(table.unreachable().is_empty());
    }

    #[test]
    fn test_looser_guard_shadows_tighter() {
        let table = RuleTable::new(vec![
            Rule::new('Y', Pattern::ANY.on(Bent2)).guarded(z_below(-6.0)),
            Rule::new('Q', Pattern::ANY.on(Bent2)).guarded(z_below(-7.0)),
        ]);
        assert_eq!(table.unreachable().len(), 1);

        let table = RuleTable::new(vec![
            Rule::new('Q', Pattern::ANY.on(Bent2)).guarded(z_below(-7.0)),
            Rule::new('Y', Pattern::ANY.on(Bent2)).guarded(z_below(-6.0)),
        ]);
        assert!(table.unreachable().is_empty());
    }

    #[test]
    fn test_unrelated_guards_do_not_shadow() {
        let table = RuleTable::new(vec![
            Rule::new('G', Pattern::ANY.on(Bent2))
                .guarded(MotionGuard::accel(Axis::Y, Comparison::Above(6.0))),
            Rule::new('Z', Pattern::ANY.on(Bent2))
                .guarded(MotionGuard::gyro(Axis::X, Comparison::MagnitudeAbove(1.0))),
        ]);
        assert!(table.unreachable().is_empty());
    }

    #[test]
    fn test_disabled_rules_neither_shadow_nor_report() {
        let table = RuleTable::new(vec![
            Rule::new('G', Pattern::ANY.on(Bent2)).disabled(),
            Rule::new('S', Pattern::ANY.on(Bent2).on(Touch1)),
            Rule::new('D', Pattern::ANY.on(Touch3).off(Touch3)).disabled(),
        ]);
        assert!(table.unreachable().is_empty());
    }
}
