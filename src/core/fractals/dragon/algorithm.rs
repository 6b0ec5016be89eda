use crate::core::data::turn_sequence::TurnSequence;
use crate::core::fractals::dragon::errors::DragonError;

/// Largest iteration count whose turn count `2^n - 1` fits in a `usize`.
pub const MAX_ITERATIONS: u32 = usize::BITS - 1;

/// Number of turns in a Dragon Curve of `iterations` folds: `2^n - 1`.
pub fn turns_for_iterations(iterations: u32) -> Result<usize, DragonError> {
    if iterations == 0 {
        return Err(DragonError::ZeroIterations);
    }

    if iterations > MAX_ITERATIONS {
        return Err(DragonError::IterationsOverflow {
            iterations,
            max_iterations: MAX_ITERATIONS,
        });
    }

    Ok((1usize << iterations) - 1)
}

/// Builds the turn sequence of a Dragon Curve by repeated folding.
///
/// Starting from a single left turn, each fold appends a left turn and then
/// a copy of everything before it, with the copy's middle entry (index
/// `previous_len / 2` of the copied block) inverted.
///
/// See <http://mathworld.wolfram.com/DragonCurve.html>.
pub fn generate_turn_sequence(iterations: u32) -> Result<TurnSequence, DragonError> {
    let total = turns_for_iterations(iterations)?;
    let mut turns = Vec::with_capacity(total);

    turns.push(true);

    for _ in 2..=iterations {
        let previous = turns.len();
        let flip_mark = previous / 2;

        turns.push(true);

        for index in 0..previous {
            let turn = turns[index];
            turns.push(if index == flip_mark { !turn } else { turn });
        }
    }

    debug_assert_eq!(turns.len(), total);
    log::debug!("generated {} turns for {} iterations", turns.len(), iterations);

    Ok(TurnSequence::from_turns(iterations, turns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_iterations_is_rejected() {
        assert_eq!(generate_turn_sequence(0), Err(DragonError::ZeroIterations));
    }

    #[test]
    fn test_iterations_beyond_usize_width_are_rejected() {
        let result = turns_for_iterations(usize::BITS);

        assert_eq!(
            result,
            Err(DragonError::IterationsOverflow {
                iterations: usize::BITS,
                max_iterations: usize::BITS - 1,
            })
        );
    }

    #[test]
    fn test_turn_counts() {
        assert_eq!(turns_for_iterations(1), Ok(1));
        assert_eq!(turns_for_iterations(2), Ok(3));
        assert_eq!(turns_for_iterations(12), Ok(4095));
        assert_eq!(turns_for_iterations(MAX_ITERATIONS), Ok(usize::MAX >> 1));
    }

    #[test]
    fn test_first_three_folds() {
        let one = generate_turn_sequence(1).unwrap();
        let two = generate_turn_sequence(2).unwrap();
        let three = generate_turn_sequence(3).unwrap();

        assert_eq!(one.as_slice(), &[true]);
        assert_eq!(two.as_slice(), &[true, true, false]);
        assert_eq!(
            three.as_slice(),
            &[true, true, false, true, true, false, false]
        );
    }

    #[test]
    fn test_fourth_fold_flips_middle_of_copied_block() {
        let three = generate_turn_sequence(3).unwrap();
        let four = generate_turn_sequence(4).unwrap();

        assert_eq!(&four.as_slice()[..7], three.as_slice());
        assert!(four.as_slice()[7]);
        // copied block: index 3 of the previous sequence is inverted
        assert_eq!(
            &four.as_slice()[8..],
            &[true, true, false, false, true, false, false]
        );
    }

    #[test]
    fn test_sequence_records_iterations() {
        assert_eq!(generate_turn_sequence(12).unwrap().iterations(), 12);
    }

    proptest! {
        #[test]
        fn length_is_two_to_the_n_minus_one(iterations in 1u32..=16) {
            let sequence = generate_turn_sequence(iterations).unwrap();

            prop_assert_eq!(sequence.len(), (1usize << iterations) - 1);
        }

        #[test]
        fn generation_is_deterministic(iterations in 1u32..=14) {
            prop_assert_eq!(
                generate_turn_sequence(iterations).unwrap(),
                generate_turn_sequence(iterations).unwrap()
            );
        }

        #[test]
        fn each_fold_extends_the_previous_one(iterations in 2u32..=14) {
            let previous = generate_turn_sequence(iterations - 1).unwrap();
            let current = generate_turn_sequence(iterations).unwrap();

            prop_assert_eq!(&current.as_slice()[..previous.len()], previous.as_slice());
            prop_assert!(current.as_slice()[previous.len()]);
        }
    }
}
