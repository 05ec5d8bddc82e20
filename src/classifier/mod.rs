// SignGlove — Letter Classifier
//
// Maps the conditioned hand state (three bent flags, three touch flags and
// the current motion sample) onto one letter.  Rules are plain data held in
// an ordered table and evaluated top to bottom; the first enabled rule whose
// predicate holds wins, and no match yields `Symbol::NoMatch`.
//
// Order is the only tie-break.  Several rules overlap, so moving a rule
// changes what the glove spells.

mod lint;
mod rules;

pub use lint::{Unreachable, UnreachableReason};

use crate::events::{Axis, MotionSample, Symbol};

// ---------------------------------------------------------------------------
// Hand flags
// ---------------------------------------------------------------------------

/// One boolean input of the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Index finger bent.
    Bent1 = 0,
    /// Middle finger bent.
    Bent2 = 1,
    /// Ring finger bent.
    Bent4 = 2,
    /// Thumb touching pad 1.
    Touch1 = 3,
    Touch2 = 4,
    Touch3 = 5,
}

impl Flag {
    pub const ALL: [Flag; 6] = [
        Flag::Bent1,
        Flag::Bent2,
        Flag::Bent4,
        Flag::Touch1,
        Flag::Touch2,
        Flag::Touch3,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The six classifier flags packed into a bitset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HandFlags(u8);

impl HandFlags {
    pub const COMBINATIONS: u8 = 1 << Flag::ALL.len();

    pub fn new(bent: [bool; 3], touch: [bool; 3]) -> Self {
        let inputs = [bent[0], bent[1], bent[2], touch[0], touch[1], touch[2]];
        let bits = Flag::ALL
            .iter()
            .zip(inputs)
            .filter(|(_, on)| *on)
            .fold(0u8, |acc, (flag, _)| acc | flag.bit());
        Self(bits)
    }

    pub fn get(self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Every possible flag combination.
    pub fn all() -> impl Iterator<Item = HandFlags> {
        (0..Self::COMBINATIONS).map(HandFlags)
    }
}

/// Conjunction of flag literals: flags that must be set and flags that must
/// be clear.  A flag may appear in both, which makes the pattern
/// unsatisfiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pattern {
    set: u8,
    clear: u8,
}

impl Pattern {
    /// Matches every hand state.
    pub const ANY: Pattern = Pattern { set: 0, clear: 0 };

    pub const fn on(self, flag: Flag) -> Self {
        Self { set: self.set | flag.bit(), ..self }
    }

    pub const fn off(self, flag: Flag) -> Self {
        Self { clear: self.clear | flag.bit(), ..self }
    }

    pub fn matches(&self, flags: HandFlags) -> bool {
        flags.0 & self.set == self.set && flags.0 & self.clear == 0
    }

    pub fn is_satisfiable(&self) -> bool {
        self.set & self.clear == 0
    }
}

// ---------------------------------------------------------------------------
// Motion guards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionSource {
    Accel,
    Gyro,
}

/// One-sided threshold on a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    Below(f32),
    Above(f32),
    MagnitudeAbove(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionGuard {
    pub source: MotionSource,
    pub axis: Axis,
    pub comparison: Comparison,
}

impl MotionGuard {
    pub fn accel(axis: Axis, comparison: Comparison) -> Self {
        Self { source: MotionSource::Accel, axis, comparison }
    }

    pub fn gyro(axis: Axis, comparison: Comparison) -> Self {
        Self { source: MotionSource::Gyro, axis, comparison }
    }

    pub fn holds(&self, motion: &MotionSample) -> bool {
        let vector = match self.source {
            MotionSource::Accel => &motion.accel,
            MotionSource::Gyro => &motion.gyro,
        };
        let value = vector[self.axis as usize];
        match self.comparison {
            Comparison::Below(t) => value < t,
            Comparison::Above(t) => value > t,
            Comparison::MagnitudeAbove(t) => value.abs() > t,
        }
    }

    /// `true` when every sample passing `self` also passes `other`.
    /// Conservative: unrelated guards never imply each other.
    pub fn implies(&self, other: &MotionGuard) -> bool {
        if self.source != other.source || self.axis != other.axis {
            return false;
        }
        match (self.comparison, other.comparison) {
            (Comparison::Below(a), Comparison::Below(b)) => a <= b,
            (Comparison::Above(a), Comparison::Above(b)) => a >= b,
            (Comparison::MagnitudeAbove(a), Comparison::MagnitudeAbove(b)) => a >= b,
            // x > a >= b  ⇒  |x| > b
            (Comparison::Above(a), Comparison::MagnitudeAbove(b)) => a >= b,
            // x < a  ⇒  |x| > -a
            (Comparison::Below(a), Comparison::MagnitudeAbove(b)) => -a >= b,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub symbol: char,
    pub pattern: Pattern,
    pub guard: Option<MotionGuard>,
    /// Disabled rules stay in the table but never fire.
    pub enabled: bool,
    /// Hand shape the rule is meant to recognise.
    pub note: &'static str,
}

impl Rule {
    pub fn new(symbol: char, pattern: Pattern) -> Self {
        Self {
            symbol,
            pattern,
            guard: None,
            enabled: true,
            note: "",
        }
    }

    pub fn guarded(mut self, guard: MotionGuard) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn note(mut self, note: &'static str) -> Self {
        self.note = note;
        self
    }

    /// Predicate only; ignores `enabled`.
    pub fn matches(&self, flags: HandFlags, motion: &MotionSample) -> bool {
        self.pattern.matches(flags) && self.guard.map_or(true, |g| g.holds(motion))
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The glove's alphabet, in evaluation order.
    pub fn standard() -> Self {
        Self::new(rules::standard_rules())
    }

    /// Enable or disable every rule producing `symbol`.  Returns how many
    /// rules were touched.
    pub fn set_enabled(&mut self, symbol: char, enabled: bool) -> usize {
        let mut touched = 0;
        for rule in self.rules.iter_mut().filter(|r| r.symbol == symbol) {
            rule.enabled = enabled;
            touched += 1;
        }
        touched
    }

    pub fn classify(&self, bent: [bool; 3], touch: [bool; 3], motion: &MotionSample) -> Symbol {
        self.classify_flags(HandFlags::new(bent, touch), motion)
    }

    pub fn classify_flags(&self, flags: HandFlags, motion: &MotionSample) -> Symbol {
        self.first_match(flags, motion)
            .map_or(Symbol::NoMatch, |(_, rule)| Symbol::Letter(rule.symbol))
    }

    /// Index and rule of the first enabled match.
    pub fn first_match(&self, flags: HandFlags, motion: &MotionSample) -> Option<(usize, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.enabled && rule.matches(flags, motion))
    }

    /// Enabled rules that can never fire.  Reports only; the table is left
    /// as it is.
    pub fn unreachable(&self) -> Vec<Unreachable> {
        lint::unreachable_rules(&self.rules)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Flag::*;

    fn still() -> MotionSample {
        MotionSample::at_rest(Axis::Z, 9.8)
    }

    #[test]
    fn test_hand_flags_packing() {
        let flags = HandFlags::new([true, false, true], [false, true, false]);
        assert!(flags.get(Bent1));
        assert!(!flags.get(Bent2));
        assert!(flags.get(Bent4));
        assert!(!flags.get(Touch1));
        assert!(flags.get(Touch2));
        assert!(!flags.get(Touch3));
        assert_eq!(HandFlags::all().count(), 64);
    }

    #[test]
    fn test_pattern_literals() {
        let p = Pattern::ANY.on(Bent1).off(Touch1);
        assert!(p.matches(HandFlags::new([true, false, false], [false, true, true])));
        assert!(!p.matches(HandFlags::new([true, false, false], [true, false, false])));
        assert!(!p.matches(HandFlags::new([false, false, false], [false, false, false])));
        assert!(Pattern::ANY.matches(HandFlags::default()));
    }

    #[test]
    fn test_contradictory_pattern_never_matches() {
        let p = Pattern::ANY.on(Touch3).off(Touch3);
        assert!(!p.is_satisfiable());
        assert!(HandFlags::all().all(|f| !p.matches(f)));
    }

    #[test]
    fn test_guards() {
        let below = MotionGuard::accel(Axis::Z, Comparison::Below(4.0));
        let above = MotionGuard::accel(Axis::Z, Comparison::Above(2.0));
        let spin = MotionGuard::gyro(Axis::X, Comparison::MagnitudeAbove(1.0));

        let m = MotionSample::new([0.0, 0.0, 3.0], [-1.5, 0.0, 0.0]);
        assert!(below.holds(&m));
        assert!(above.holds(&m));
        assert!(spin.holds(&m));

        let m = MotionSample::new([0.0, 0.0, 4.0], [0.5, 0.0, 0.0]);
        assert!(!below.holds(&m));
        assert!(!spin.holds(&m));
    }

    #[test]
    fn test_guard_implication() {
        let z_below = |t| MotionGuard::accel(Axis::Z, Comparison::Below(t));
        let z_above = |t| MotionGuard::accel(Axis::Z, Comparison::Above(t));
        let z_mag = |t| MotionGuard::accel(Axis::Z, Comparison::MagnitudeAbove(t));

        assert!(z_below(-7.0).implies(&z_below(-6.0)));
        assert!(!z_below(-6.0).implies(&z_below(-7.0)));
        assert!(z_above(3.0).implies(&z_above(2.0)));
        assert!(z_above(3.0).implies(&z_mag(2.0)));
        assert!(z_below(-7.0).implies(&z_mag(6.0)));
        assert!(!z_below(4.0).implies(&z_above(2.0)));
        assert!(!z_below(4.0).implies(&MotionGuard::accel(Axis::Y, Comparison::Below(4.0))));
        assert!(!z_below(4.0).implies(&MotionGuard::gyro(Axis::Z, Comparison::Below(4.0))));
    }

    #[test]
    fn test_first_match_wins() {
        let general = Rule::new('G', Pattern::ANY.on(Bent2));
        let specific = Rule::new('S', Pattern::ANY.on(Bent2).on(Touch1));
        let table = RuleTable::new(vec![general.clone(), specific.clone()]);
        assert_eq!(
            table.classify([false, true, false], [true, false, false], &still()),
            Symbol::Letter('G')
        );

        // Reversed order flips the outcome for the overlapping input.
        let table = RuleTable::new(vec![specific, general]);
        assert_eq!(
            table.classify([false, true, false], [true, false, false], &still()),
            Symbol::Letter('S')
        );
    }

    #[test]
    fn test_no_match_fallback() {
        let table = RuleTable::new(vec![Rule::new('X', Pattern::ANY.on(Touch3))]);
        assert_eq!(table.classify([false; 3], [false; 3], &still()), Symbol::NoMatch);
        assert_eq!(RuleTable::new(vec![]).classify([true; 3], [true; 3], &still()), Symbol::NoMatch);
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let mut table = RuleTable::new(vec![
            Rule::new('C', Pattern::ANY.on(Bent1)).disabled(),
            Rule::new('D', Pattern::ANY.on(Bent1)),
        ]);
        let bent = [true, false, false];
        assert_eq!(table.classify(bent, [false; 3], &still()), Symbol::Letter('D'));

        assert_eq!(table.set_enabled('C', true), 1);
        assert_eq!(table.classify(bent, [false; 3], &still()), Symbol::Letter('C'));
        assert_eq!(table.set_enabled('Q', true), 0);
    }

    #[test]
    fn test_guard_falls_through_to_later_rule() {
        let table = RuleTable::new(vec![
            Rule::new('M', Pattern::ANY.on(Bent1))
                .guarded(MotionGuard::accel(Axis::Z, Comparison::Below(4.0))),
            Rule::new('N', Pattern::ANY.on(Bent1)),
        ]);
        let low = MotionSample::new([0.0, 0.0, 1.0], [0.0; 3]);
        let high = MotionSample::new([0.0, 0.0, 9.0], [0.0; 3]);
        assert_eq!(table.classify([true, false, false], [false; 3], &low), Symbol::Letter('M'));
        assert_eq!(table.classify([true, false, false], [false; 3], &high), Symbol::Letter('N'));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let table = RuleTable::standard();
        let motion = MotionSample::new([0.3, -1.2, 3.5], [0.1, 0.2, -0.4]);
        for flags in HandFlags::all() {
            let first = table.classify_flags(flags, &motion);
            for _ in 0..3 {
                assert_eq!(table.classify_flags(flags, &motion), first);
            }
        }
    }
}
