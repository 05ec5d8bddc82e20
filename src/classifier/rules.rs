// SignGlove — Standard Alphabet Table
//
// Order matters: see the module docs in `classifier`.  Disabled entries are
// hand shapes that were tried on the glove and turned off; flip them on with
// `RuleTable::set_enabled` rather than deleting them.

use super::Flag::{Bent1 as B1, Bent2 as B2, Bent4 as B4, Touch1 as T1, Touch2 as T2, Touch3 as T3};
use super::{Comparison, MotionGuard, Pattern, Rule};
use crate::config::*;
use crate::events::Axis;

const P: Pattern = Pattern::ANY;

pub(super) fn standard_rules() -> Vec<Rule> {
    let accel_z_below = |t| MotionGuard::accel(Axis::Z, Comparison::Below(t));

    vec![
        // ---- Static letters ------------------------------------------------
        Rule::new('A', P.on(B1).on(B2).on(B4).on(T1).on(T2).on(T3))
            .note("fist, thumb on all pads"),
        Rule::new('B', P.off(B1).off(B2).off(B4).on(T1).off(T2).off(T3))
            .note("flat hand, thumb across palm"),
        Rule::new('C', P.on(B1).on(B2).on(B4).off(T1).on(T2).on(T3))
            .note("fist with thumb under")
            .disabled(),
        // Requires T3 both on and off, so it can never fire. Kept so the
        // lint keeps reporting it until the intended shape is known.
        Rule::new('D', P.off(B1).on(B2).on(B4).on(T1).off(T2).off(T3).on(T3))
            .note("index up, rest curled onto thumb"),
        Rule::new('E', P.on(B2).on(B4).on(T1)).note("hooked fingers, thumb tucked"),
        Rule::new('M', P.on(B1).on(B2).on(B4).off(T1).on(T2).on(T3))
            .guarded(accel_z_below(ACCEL_Z_M_BELOW))
            .note("three fingers over thumb"),
        Rule::new('P', P.off(B1).on(B2).on(B4).off(T1).off(T2))
            .guarded(MotionGuard::accel(Axis::Z, Comparison::Above(ACCEL_Z_P_ABOVE)))
            .note("index forward, hand pointing down"),
        Rule::new('I', P.on(B1).on(B2).off(B4).on(T1)).note("little finger up"),
        Rule::new('U', P.off(B1).off(B2).on(B4).on(T1)).note("two fingers up together"),
        Rule::new('T', P.on(B2).on(B4).off(T1).off(T2).on(T3)).note("thumb between index and middle"),
        // ---- Alternate static shapes ---------------------------------------
        Rule::new('F', P.off(B1).on(B2).off(B4).off(T1).on(T2).on(T3))
            .note("OK sign")
            .disabled(),
        Rule::new('G', P.off(B1).on(B2).off(B4))
            .guarded(MotionGuard::accel(Axis::Y, Comparison::Above(ACCEL_Y_G_ABOVE)))
            .note("sideways finger gun")
            .disabled(),
        Rule::new('H', P.off(B1).off(B2).on(B4).on(T1).on(T2).off(T3))
            .note("two fingers sideways")
            .disabled(),
        Rule::new('K', P.off(B1).on(B2).on(B4).off(T1).on(T2).off(T3))
            .note("thumb on middle finger")
            .disabled(),
        Rule::new('L', P.off(B1).off(B2).on(B4).off(T1).off(T2).off(T3))
            .note("L shape")
            .disabled(),
        Rule::new('N', P.on(B1).on(B2).off(B4).off(T1).on(T2).on(T3))
            .note("two fingers over thumb")
            .disabled(),
        Rule::new('O', P.on(B1).on(B2).on(B4).off(T1).off(T2).off(T3))
            .note("fingers curved onto thumb tip")
            .disabled(),
        Rule::new('Q', P.on(B1).on(B2).off(B4))
            .guarded(accel_z_below(ACCEL_Z_Q_BELOW))
            .note("G pointing down")
            .disabled(),
        Rule::new('R', P.off(B1).off(B2).on(B4).off(T1).off(T2).off(T3))
            .note("crossed fingers")
            .disabled(),
        Rule::new('V', P.off(B1).off(B2).on(B4).off(T1).off(T2).off(T3))
            .note("two fingers apart")
            .disabled(),
        Rule::new('W', P.off(B1).off(B2).off(B4).off(T1).off(T2).off(T3))
            .note("three fingers apart")
            .disabled(),
        Rule::new('Y', P.off(B1).on(B2).off(B4))
            .guarded(accel_z_below(ACCEL_Z_Y_BELOW))
            .note("thumb and little finger out, hand down")
            .disabled(),
        // ---- Traced letters (gyro) -----------------------------------------
        Rule::new('J', P.off(B1).on(B2).on(B4))
            .guarded(MotionGuard::gyro(Axis::Y, Comparison::MagnitudeAbove(GYRO_TRACE_ABOVE)))
            .note("little finger traces a hook")
            .disabled(),
        Rule::new('Z', P.off(B1).on(B2).off(B4))
            .guarded(MotionGuard::gyro(Axis::X, Comparison::MagnitudeAbove(GYRO_TRACE_ABOVE)))
            .note("index traces a zigzag")
            .disabled(),
    ]
}
