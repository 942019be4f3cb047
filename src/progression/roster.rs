//! Enemy variants and the active/locked roster.

use bevy::prelude::*;
use rand::Rng;
use std::collections::VecDeque;

use crate::core::ProgressionTuning;

/// Enemy variant identifier.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyVariant {
    Grunt,
    Ghost,
    Red,
    Green,
    Octopus,
    Death,
    Orange,
}

impl EnemyVariant {
    /// Look a variant up by its data-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "grunt" => Some(EnemyVariant::Grunt),
            "ghost" => Some(EnemyVariant::Ghost),
            "red" => Some(EnemyVariant::Red),
            "green" => Some(EnemyVariant::Green),
            "octopus" => Some(EnemyVariant::Octopus),
            "death" => Some(EnemyVariant::Death),
            "orange" => Some(EnemyVariant::Orange),
            _ => None,
        }
    }
}

/// Which enemy variants may spawn now, and which are still queued.
///
/// Variants only ever move from `locked` to `active`.
#[derive(Resource, Debug, Clone, Default)]
pub struct EnemyRoster {
    active: Vec<EnemyVariant>,
    locked: VecDeque<EnemyVariant>,
}

impl EnemyRoster {
    pub fn new(
        active: impl IntoIterator<Item = EnemyVariant>,
        locked: impl IntoIterator<Item = EnemyVariant>,
    ) -> Self {
        Self {
            active: active.into_iter().collect(),
            locked: locked.into_iter().collect(),
        }
    }

    /// Build the roster from data-file names, skipping unknown entries.
    pub fn from_tuning(tuning: &ProgressionTuning) -> Self {
        let resolve = |names: &[String]| {
            names
                .iter()
                .filter_map(|name| {
                    let variant = EnemyVariant::from_name(name);
                    if variant.is_none() {
                        warn!("Unknown enemy variant in roster: {}", name);
                    }
                    variant
                })
                .collect::<Vec<_>>()
        };

        Self::new(
            resolve(&tuning.active_enemies),
            resolve(&tuning.locked_enemies),
        )
    }

    pub fn active(&self) -> &[EnemyVariant] {
        &self.active
    }

    pub fn locked_len(&self) -> usize {
        self.locked.len()
    }

    /// Move the front of the locked queue into the active set.
    pub fn unlock_next(&mut self) -> Option<EnemyVariant> {
        let variant = self.locked.pop_front()?;
        self.active.push(variant);
        Some(variant)
    }

    /// Uniform pick from the active set.
    pub fn pick(&self, rng: &mut impl Rng) -> Option<EnemyVariant> {
        if self.active.is_empty() {
            return None;
        }
        Some(self.active[rng.gen_range(0..self.active.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_tuning_starts_with_one_active() {
        let roster = EnemyRoster::from_tuning(&ProgressionTuning::default());
        assert_eq!(roster.active(), &[EnemyVariant::Grunt]);
        assert_eq!(roster.locked_len(), 6);
    }

    #[test]
    fn unlock_order_is_fifo() {
        let mut roster = EnemyRoster::from_tuning(&ProgressionTuning::default());
        let order: Vec<_> = std::iter::from_fn(|| roster.unlock_next()).collect();
        assert_eq!(
            order,
            vec![
                EnemyVariant::Ghost,
                EnemyVariant::Red,
                EnemyVariant::Green,
                EnemyVariant::Octopus,
                EnemyVariant::Death,
                EnemyVariant::Orange,
            ]
        );
        assert_eq!(roster.active().len(), 7);
        assert_eq!(roster.unlock_next(), None);
        assert_eq!(roster.active().len(), 7);
    }

    #[test]
    fn unknown_names_are_skipped() {
        let tuning = ProgressionTuning {
            active_enemies: vec!["grunt".into(), "dragon".into()],
            locked_enemies: vec!["Ghost".into(), "".into()],
            ..Default::default()
        };
        let roster = EnemyRoster::from_tuning(&tuning);
        assert_eq!(roster.active(), &[EnemyVariant::Grunt]);
        assert_eq!(roster.locked_len(), 1);
    }

    #[test]
    fn pick_only_returns_active_variants() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty = EnemyRoster::default();
        assert_eq!(empty.pick(&mut rng), None);

        let roster = EnemyRoster::new([EnemyVariant::Red, EnemyVariant::Green], []);
        for _ in 0..50 {
            let v = roster.pick(&mut rng).unwrap();
            assert!(roster.active().contains(&v));
        }
    }
}
