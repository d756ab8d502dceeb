//! Property-based tests for the phase sequencer and seek planning:
//! modular wraparound, mode rescaling, and shortest-path selection.

#[cfg(test)]
mod proptest_drive {
    use focus_drive::{Direction, PhaseSequencer, SeekPlan, StepMode};
    use proptest::prelude::*;

    /// Helper: a sequencer jogged to an arbitrary position.
    ///
    /// Steps-per-revolution is kept a multiple of four so the phase table
    /// length divides the position modulus and closure holds for both.
    fn seq_at(mode: StepMode, base: u16, offset: u16) -> PhaseSequencer {
        let mut seq = PhaseSequencer::new(mode, base);
        for _ in 0..offset {
            seq.step(Direction::Backward);
        }
        seq
    }

    fn mode_from(half: bool) -> StepMode {
        if half {
            StepMode::Half
        } else {
            StepMode::Full
        }
    }

    fn direction_from(forward: bool) -> Direction {
        if forward {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        // --- Step involution: one step each way restores the state ---

        #[test]
        fn step_round_trip_restores_state(
            quads in 1u16..200,
            offset in 0u16..400,
            half in any::<bool>(),
            forward in any::<bool>(),
        ) {
            let base = quads * 4;
            let mut seq = seq_at(mode_from(half), base, offset % (base * 2));
            let phase = seq.phase_index();
            let position = seq.position();
            let direction = direction_from(forward);

            seq.step(direction);
            seq.step(direction.opposite());

            prop_assert_eq!(seq.phase_index(), phase);
            prop_assert_eq!(seq.position(), position);
        }

        // --- Closure: a full revolution returns to the origin ---

        #[test]
        fn full_revolution_closes(
            quads in 1u16..100,
            half in any::<bool>(),
            forward in any::<bool>(),
        ) {
            let base = quads * 4;
            let mut seq = PhaseSequencer::new(mode_from(half), base);
            let direction = direction_from(forward);

            for _ in 0..seq.position_modulus() {
                seq.step(direction);
            }

            prop_assert_eq!(seq.phase_index(), 0);
            prop_assert_eq!(seq.position(), 0);
        }

        // --- Invariant: indices stay inside their moduli ---

        #[test]
        fn indices_stay_in_range(
            quads in 1u16..100,
            offset in 0u16..1000,
            half in any::<bool>(),
        ) {
            let base = quads * 4;
            let seq = seq_at(mode_from(half), base, offset);
            prop_assert!(seq.phase_index() < seq.phase_modulus());
            prop_assert!(seq.position() < seq.position_modulus());
        }

        // --- Mode switch preserves the rotor angle ---

        #[test]
        fn full_half_full_round_trip_is_exact(
            quads in 1u16..100,
            offset in 0u16..400,
        ) {
            let base = quads * 4;
            let mut seq = seq_at(StepMode::Full, base, offset % base);
            let position = seq.position();
            let angle = seq.angle();

            seq.set_mode(StepMode::Half);
            prop_assert_eq!(seq.position(), position * 2);
            prop_assert!((seq.angle().value() - angle.value()).abs() < 1e-3);

            seq.set_mode(StepMode::Full);
            prop_assert_eq!(seq.position(), position);
        }

        #[test]
        fn half_to_full_rounds_down_at_most_half_step(
            quads in 1u16..100,
            offset in 0u16..800,
        ) {
            let base = quads * 4;
            let mut seq = seq_at(StepMode::Half, base, offset % (base * 2));
            let angle_before = seq.angle();
            let half_step = seq.angle_per_step().value();

            seq.set_mode(StepMode::Full);

            let drift = angle_before.value() - seq.angle().value();
            prop_assert!(drift >= -1e-3, "rounding never moves the angle forward");
            prop_assert!(drift <= half_step + 1e-3, "rounding loses at most half a full step");
        }

        // --- Seek planning ---

        #[test]
        fn plan_at_mark_is_empty(
            quads in 1u16..100,
            position in 0u16..800,
            half in any::<bool>(),
        ) {
            let base = quads * 4;
            let modulus = base * mode_from(half).position_scale();
            let position = position % modulus;
            let plan = SeekPlan::shortest_path(position, position, modulus);
            prop_assert!(plan.is_empty());
        }

        #[test]
        fn plan_never_exceeds_quarter_revolution(
            quads in 1u16..100,
            position in 0u16..800,
            mark in 0u16..800,
        ) {
            let modulus = quads * 4;
            let plan = SeekPlan::shortest_path(position % modulus, mark % modulus, modulus);
            // diff is capped at modulus / 2 before the halving
            prop_assert!(plan.steps <= modulus / 4);
        }

        #[test]
        fn plan_halves_the_shortest_distance(
            quads in 1u16..100,
            position in 0u16..800,
            mark in 0u16..800,
        ) {
            let modulus = quads * 4;
            let position = position % modulus;
            let mark = mark % modulus;
            let raw = if position >= mark { position - mark } else { mark - position };
            let shortest = raw.min(modulus - raw);
            let plan = SeekPlan::shortest_path(position, mark, modulus);
            prop_assert_eq!(plan.steps, shortest / 2);
        }
    }
}
