use rand::Rng;

use crate::config::Config;
use crate::genesis;
use crate::grid::GridState;
use crate::scheduler::FixedStepScheduler;

/// One independent Game of Life run: the grid, the clock that steps it, and
/// the live count from the most recent step.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: GridState,
    scheduler: FixedStepScheduler,
    live_probability: f64,
    live_count: usize,
    generation: u64,
}

impl Simulation {
    /// Allocate the grid for `config`, seed it from `rng` and start the clock
    /// at zero. The live count reads 0 until the first step completes.
    pub fn initialize<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let (width, height) = config.grid_dimensions();
        let mut grid = GridState::new(width, height);
        genesis::seed(&mut grid, config.live_probability(), rng);
        Self::from_grid(grid, FixedStepScheduler::new(config.updates_per_second), config.live_probability())
    }

    /// Run an already populated grid.
    pub fn from_grid(grid: GridState, scheduler: FixedStepScheduler, live_probability: f64) -> Self {
        Simulation {
            grid,
            scheduler,
            live_probability,
            live_count: 0,
            generation: 0,
        }
    }

    /// Feed one frame's worth of elapsed time through the scheduler.
    ///
    /// Runs zero or more steps; the live count is only refreshed when at least
    /// one step ran.
    pub fn tick(&mut self, delta_time: f64) -> (&GridState, usize) {
        let grid = &mut self.grid;
        let live_count = &mut self.live_count;
        let generation = &mut self.generation;
        self.scheduler.tick(delta_time, || {
            grid.step();
            *live_count = grid.live_count();
            *generation += 1;
        });
        (&self.grid, self.live_count)
    }

    /// Re-run genesis in place and restart the generation counter.
    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        genesis::seed(&mut self.grid, self.live_probability, rng);
        self.scheduler.reset();
        self.live_count = 0;
        self.generation = 0;
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Live cells as of the last completed step.
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    /// Steps completed since genesis.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn scheduler(&self) -> &FixedStepScheduler {
        &self.scheduler
    }

    pub fn live_probability(&self) -> f64 {
        self.live_probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn blinker() -> Simulation {
        let grid = GridState::from_rows(&[".....", ".....", ".###.", ".....", "....."]);
        Simulation::from_grid(grid, FixedStepScheduler::new(10.0), 0.3)
    }

    #[test]
    fn live_count_starts_at_zero_after_genesis() {
        let config = Config::from_args(&["100", "80", "10", "1.0"]).unwrap();
        let sim = Simulation::initialize(&config, &mut StdRng::seed_from_u64(3));
        assert_eq!(sim.grid().live_count(), 80);
        assert_eq!(sim.live_count(), 0);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn tick_runs_whole_steps_and_caches_the_count() {
        let mut sim = blinker();
        let (grid, live) = sim.tick(0.35);
        assert_eq!(grid.to_rows(), [".....", "..#..", "..#..", "..#..", "....."]);
        assert_eq!(live, 3);
        assert_eq!(sim.generation(), 3);
        assert!((sim.scheduler().accumulator() - 0.05).abs() < 1e-9);
    }

    #[test]
    fn count_is_stale_between_steps() {
        let mut grid = GridState::from_rows(&["##..", "##..", "....", "...."]);
        grid.current_mut()[3][3] = true;
        let mut sim = Simulation::from_grid(grid, FixedStepScheduler::new(10.0), 0.3);
        assert_eq!(sim.grid().live_count(), 5);

        let (_, live) = sim.tick(0.05);
        assert_eq!(live, 0);
        assert_eq!(sim.generation(), 0);

        // The lone cell dies, the block survives.
        let (_, live) = sim.tick(0.05);
        assert_eq!(live, 4);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn reseed_restarts_the_run() {
        let config = Config::from_args(&["50", "50", "5", "0.0"]).unwrap();
        let mut sim = Simulation::initialize(&config, &mut StdRng::seed_from_u64(9));
        assert_eq!(sim.grid().live_count(), 0);
        sim.tick(1.0);
        assert!(sim.generation() > 0);

        sim.reseed(&mut StdRng::seed_from_u64(9));
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.live_count(), 0);
        assert_eq!(sim.scheduler().accumulator(), 0.0);
    }
}
