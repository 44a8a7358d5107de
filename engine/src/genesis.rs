use crate::grid::GridState;
use rand::Rng;

/// Fill `grid.current` with an independent Bernoulli draw per cell.
///
/// `live_probability` must already be in `[0, 1]`; out-of-range values panic
/// inside `rand`.
pub fn seed<R: Rng + ?Sized>(grid: &mut GridState, live_probability: f64, rng: &mut R) {
    for column in grid.current_mut() {
        for cell in column.iter_mut() {
            *cell = rng.random_bool(live_probability);
        }
    }
    log::debug!(
        "seeded {}x{} grid with live probability {:.2}",
        grid.width(),
        grid.height(),
        live_probability
    );
}

/// Seed from the thread-local generator.
pub fn randomize(grid: &mut GridState, live_probability: f64) {
    seed(grid, live_probability, &mut rand::rng());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn certain_life_fills_the_grid() {
        let mut grid = GridState::new(12, 7);
        seed(&mut grid, 1.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(grid.live_count(), 12 * 7);
    }

    #[test]
    fn zero_probability_leaves_the_grid_dead() {
        let mut grid = GridState::from_rows(&["###", "###"]);
        seed(&mut grid, 0.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn same_seed_gives_same_genesis() {
        let mut a = GridState::new(40, 30);
        let mut b = GridState::new(40, 30);
        seed(&mut a, 0.3, &mut StdRng::seed_from_u64(42));
        seed(&mut b, 0.3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn density_tracks_probability() {
        let mut grid = GridState::new(100, 100);
        seed(&mut grid, 0.3, &mut StdRng::seed_from_u64(7));
        let live = grid.live_count();
        assert!((2_500..3_500).contains(&live), "live = {live}");
    }

    #[test]
    fn randomize_touches_only_current() {
        let mut grid = GridState::new(8, 8);
        randomize(&mut grid, 1.0);
        assert_eq!(grid.live_count(), 64);
        grid.swap();
        assert_eq!(grid.live_count(), 0);
    }
}
