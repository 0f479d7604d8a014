//! Target mover: picks where the penguin heads next

use rand::Rng;

use super::state::GameState;
use crate::consts::*;

/// Pick a new uniformly random goal. Only the goal changes; the roaming
/// position is left to the motion interpolator.
pub fn retarget<R: Rng>(state: &mut GameState, rng: &mut R) -> f32 {
    let goal = rng.random_range(POSITION_MIN..=POSITION_MAX);
    state.target_goal_position = goal;
    log::debug!("Penguin retargeted to {:.1}", goal);
    goal
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_retarget_only_moves_goal() {
        let mut state = GameState::new(1);
        state.roaming_position = 20.0;
        let mut rng = Pcg32::seed_from_u64(1);

        for _ in 0..200 {
            let goal = retarget(&mut state, &mut rng);
            assert_eq!(state.target_goal_position, goal);
            assert!((0.0..=100.0).contains(&goal));
            assert_eq!(state.roaming_position, 20.0);
        }
    }

    #[test]
    fn test_retarget_is_seeded() {
        let mut a = GameState::new(5);
        let mut b = GameState::new(5);
        let mut rng_a = Pcg32::seed_from_u64(5);
        let mut rng_b = Pcg32::seed_from_u64(5);
        for _ in 0..10 {
            assert_eq!(retarget(&mut a, &mut rng_a), retarget(&mut b, &mut rng_b));
        }
    }
}
