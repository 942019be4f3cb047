//! Score accumulation, milestones, and the boss trigger.

use bevy::prelude::*;

use crate::core::ProgressionTuning;

/// What a single `add_points` call set in motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreStep {
    /// A new milestone was reached; release one enemy variant
    pub unlock: bool,
    /// The boss threshold was reached for the first time
    pub start_boss: bool,
}

/// Session score and milestone tracking.
#[derive(Resource, Debug, Clone)]
pub struct Progression {
    score: u32,
    milestone: u32,
    boss_triggered: bool,
    milestone_step: u32,
    boss_threshold: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self::new(30, 180)
    }
}

impl Progression {
    pub fn new(milestone_step: u32, boss_threshold: u32) -> Self {
        Self {
            score: 0,
            milestone: 0,
            boss_triggered: false,
            milestone_step: milestone_step.max(1),
            boss_threshold,
        }
    }

    pub fn from_tuning(tuning: &ProgressionTuning) -> Self {
        Self::new(tuning.milestone_step, tuning.boss_threshold)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn milestone(&self) -> u32 {
        self.milestone
    }

    pub fn boss_triggered(&self) -> bool {
        self.boss_triggered
    }

    /// Add points and report whether an unlock or the boss fight is due.
    ///
    /// At most one unlock per call, and only below the boss threshold. The
    /// boss trigger fires on the first call that reaches the threshold.
    pub fn add_points(&mut self, amount: u32) -> ScoreStep {
        self.score = self.score.saturating_add(amount);
        let mut step = ScoreStep::default();

        if self.score < self.boss_threshold {
            let milestone = self.score / self.milestone_step;
            if milestone > self.milestone {
                self.milestone = milestone;
                step.unlock = true;
            }
        } else if !self.boss_triggered {
            self.boss_triggered = true;
            step.start_boss = true;
        }

        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fives_unlock_once_past_thirty() {
        let mut p = Progression::default();
        for _ in 0..3 {
            assert_eq!(p.add_points(5), ScoreStep::default());
        }
        assert_eq!(p.score(), 15);

        let step = p.add_points(17);
        assert_eq!(p.score(), 32);
        assert!(step.unlock);
        assert!(!step.start_boss);
        assert_eq!(p.milestone(), 1);

        assert!(!p.add_points(2).unlock);
    }

    #[test]
    fn big_jump_unlocks_only_one() {
        let mut p = Progression::default();
        let step = p.add_points(95);
        assert!(step.unlock);
        assert_eq!(p.milestone(), 3);
        // 95 -> 100 stays in milestone 3
        assert!(!p.add_points(5).unlock);
    }

    #[test]
    fn unlocks_happen_only_below_threshold() {
        let mut p = Progression::default();
        let mut unlocks = 0;
        for _ in 0..100 {
            if p.add_points(2).unlock {
                unlocks += 1;
            }
        }
        // Milestones 1..=5 (30, 60, 90, 120, 150); 180 starts the boss instead
        assert_eq!(unlocks, 5);
    }

    #[test]
    fn boss_triggers_exactly_once() {
        let mut p = Progression::default();
        p.add_points(175);
        let first = p.add_points(5);
        assert!(first.start_boss);
        assert!(!first.unlock);
        assert!(p.boss_triggered());

        for _ in 0..10 {
            assert!(!p.add_points(5).start_boss);
        }
    }

    #[test]
    fn score_never_decreases() {
        let mut p = Progression::default();
        let mut last = 0;
        for amount in [2, 3, 5, 4, 0, 2] {
            p.add_points(amount);
            assert!(p.score() >= last);
            last = p.score();
        }
    }
}
