use super::args::Scenario;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn labeled(pairs: &[(&str, i64)]) -> Vec<(String, i64)> {
    pairs
        .iter()
        .map(|&(label, priority)| (label.to_string(), priority))
        .collect()
}

pub fn entries(scenario: Scenario, count: usize, seed: u64) -> Vec<(String, i64)> {
    match scenario {
        Scenario::Basic => labeled(&[("A", 5), ("B", 3), ("C", 8)]),
        Scenario::Growth => labeled(&[("D", 4), ("E", 9), ("F", 1), ("G", 7), ("H", 3)]),
        Scenario::Ties => labeled(&[("X", 10), ("Y", 10), ("Z", 10)]),
        Scenario::Random => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count)
                .map(|i| (format!("item{i}"), rng.gen_range(0..100)))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_scenarios() {
        assert_eq!(entries(Scenario::Basic, 0, 0).len(), 3);
        assert_eq!(entries(Scenario::Growth, 0, 0).len(), 5);
        assert!(entries(Scenario::Ties, 0, 0)
            .iter()
            .all(|(_, priority)| *priority == 10));
    }

    #[test]
    fn random_is_seeded() {
        let first = entries(Scenario::Random, 20, 11);
        assert_eq!(first.len(), 20);
        assert_eq!(first, entries(Scenario::Random, 20, 11));
        assert!(first.iter().all(|(_, priority)| (0..100).contains(priority)));
    }
}
