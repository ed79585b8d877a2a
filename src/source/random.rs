use crate::config::RandomConfig;
use crate::source::GardenSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniformly random gardens within the configured value and length ranges.
pub struct RandomGarden {
    cfg: RandomConfig,
    rng: StdRng,
}

impl RandomGarden {
    pub fn new(cfg: RandomConfig) -> Self {
        Self {
            cfg,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of gardens for a given seed.
    pub fn with_seed(cfg: RandomConfig, seed: u64) -> Self {
        Self {
            cfg,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl GardenSource for RandomGarden {
    fn next_garden(&mut self) -> Vec<i32> {
        let len = self.rng.random_range(self.cfg.min_len..=self.cfg.max_len);
        (0..len)
            .map(|_| self.rng.random_range(self.cfg.min_value..=self.cfg.max_value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gardens_stay_in_range() {
        let cfg = RandomConfig::default();
        let mut source = RandomGarden::with_seed(cfg.clone(), 7);
        for _ in 0..200 {
            let garden = source.next_garden();
            assert!((cfg.min_len..=cfg.max_len).contains(&garden.len()));
            assert!(garden
                .iter()
                .all(|v| (cfg.min_value..=cfg.max_value).contains(v)));
        }
    }

    #[test]
    fn same_seed_same_gardens() {
        let mut a = RandomGarden::with_seed(RandomConfig::default(), 42);
        let mut b = RandomGarden::with_seed(RandomConfig::default(), 42);
        assert_eq!(a.next_garden(), b.next_garden());
        assert_eq!(a.next_garden(), b.next_garden());
    }

    #[test]
    fn degenerate_range_is_constant() {
        let cfg = RandomConfig {
            min_value: 3,
            max_value: 3,
            min_len: 4,
            max_len: 4,
        };
        assert_eq!(RandomGarden::with_seed(cfg, 1).next_garden(), vec![3; 4]);
    }
}
