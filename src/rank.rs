//! Rank tiers and progress toward the next one.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankTier {
    pub name: &'static str,
    pub emoji: &'static str,
    /// Cumulative points required to hold this rank.
    pub threshold: f64,
}

pub static STANDARD_TIERS: &[RankTier] = &[
    RankTier { name: "Turtle", emoji: "🐢", threshold: 0.0 },
    RankTier { name: "Lizard", emoji: "🦎", threshold: 400.0 },
    RankTier { name: "Snake", emoji: "🐍", threshold: 800.0 },
    RankTier { name: "Alligator", emoji: "🐊", threshold: 6400.0 },
    RankTier { name: "T-Rex", emoji: "🦖", threshold: 40960.0 },
    RankTier { name: "Dragon", emoji: "🐲", threshold: 167526.0 },
];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TierError {
    #[error("rank table is empty")]
    Empty,
    #[error("first rank threshold must be 0, got {0}")]
    NonZeroBase(f64),
    #[error("rank threshold for {0} is not a finite number")]
    NonFinite(&'static str),
    #[error("rank thresholds must strictly increase: {previous} is followed by {next}")]
    NotIncreasing { previous: f64, next: f64 },
}

/// A tier list checked to be non-empty, based at 0, and strictly increasing.
#[derive(Debug, Clone, Copy)]
pub struct RankTable<'a> {
    tiers: &'a [RankTier],
}

impl<'a> RankTable<'a> {
    pub fn new(tiers: &'a [RankTier]) -> Result<Self, TierError> {
        let first = tiers.first().ok_or(TierError::Empty)?;
        for tier in tiers {
            if !tier.threshold.is_finite() {
                return Err(TierError::NonFinite(tier.name));
            }
        }
        if first.threshold != 0.0 {
            return Err(TierError::NonZeroBase(first.threshold));
        }
        for pair in tiers.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(TierError::NotIncreasing {
                    previous: pair[0].threshold,
                    next: pair[1].threshold,
                });
            }
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &'a [RankTier] {
        self.tiers
    }
}

impl RankTable<'static> {
    pub fn standard() -> Result<Self, TierError> {
        Self::new(STANDARD_TIERS)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankProgress<'a> {
    pub current: &'a RankTier,
    pub next: Option<&'a RankTier>,
    pub progress_percent: f64,
    pub at_max_tier: bool,
}

pub fn resolve_rank<'a>(total_points: f64, table: &RankTable<'a>) -> RankProgress<'a> {
    let tiers = table.tiers;
    // The base tier has threshold 0 and always matches, even for negative totals.
    let mut index = 0;
    for (i, tier) in tiers.iter().enumerate() {
        if total_points >= tier.threshold {
            index = i;
        } else {
            break;
        }
    }

    let current = &tiers[index];
    let next = tiers.get(index + 1);
    let progress_percent = match next {
        None => 100.0,
        Some(next) => {
            let span = next.threshold - current.threshold;
            ((total_points - current.threshold) / span * 100.0).clamp(0.0, 100.0)
        }
    };

    RankProgress {
        current,
        next,
        progress_percent,
        at_max_tier: next.is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> RankTable<'static> {
        RankTable::standard().unwrap()
    }

    #[test]
    fn zero_points_is_the_first_tier() {
        let progress = resolve_rank(0.0, &standard());
        assert_eq!(progress.current.name, "Turtle");
        assert_eq!(progress.next.map(|t| t.name), Some("Lizard"));
        assert_eq!(progress.progress_percent, 0.0);
        assert!(!progress.at_max_tier);
    }

    #[test]
    fn partial_progress_in_first_tier() {
        let progress = resolve_rank(70.0, &standard());
        assert_eq!(progress.current.threshold, 0.0);
        assert_eq!(progress.next.map(|t| t.threshold), Some(400.0));
        assert_eq!(progress.progress_percent, 17.5);
    }

    #[test]
    fn threshold_is_inclusive() {
        let progress = resolve_rank(400.0, &standard());
        assert_eq!(progress.current.name, "Lizard");
        assert_eq!(progress.progress_percent, 0.0);

        let below = resolve_rank(399.5, &standard());
        assert_eq!(below.current.name, "Turtle");
    }

    #[test]
    fn top_tier_reports_max() {
        for total in [167526.0, 1_000_000.0] {
            let progress = resolve_rank(total, &standard());
            assert_eq!(progress.current.name, "Dragon");
            assert!(progress.next.is_none());
            assert!(progress.at_max_tier);
            assert_eq!(progress.progress_percent, 100.0);
        }
    }

    #[test]
    fn negative_totals_stay_at_base_with_zero_progress() {
        let progress = resolve_rank(-250.0, &standard());
        assert_eq!(progress.current.name, "Turtle");
        assert_eq!(progress.progress_percent, 0.0);
    }

    #[test]
    fn resolution_is_monotonic_and_bounded() {
        let table = standard();
        let mut previous = f64::NEG_INFINITY;
        let mut total = -100.0;
        while total < 200_000.0 {
            let progress = resolve_rank(total, &table);
            assert!(progress.current.threshold >= previous);
            assert!((0.0..=100.0).contains(&progress.progress_percent));
            previous = progress.current.threshold;
            total += 137.0;
        }
    }

    #[test]
    fn validation_rejects_malformed_tables() {
        static UNSORTED: &[RankTier] = &[
            RankTier { name: "a", emoji: "", threshold: 0.0 },
            RankTier { name: "b", emoji: "", threshold: 10.0 },
            RankTier { name: "c", emoji: "", threshold: 10.0 },
        ];
        static OFFSET: &[RankTier] = &[RankTier { name: "a", emoji: "", threshold: 5.0 }];
        static NAN: &[RankTier] = &[
            RankTier { name: "a", emoji: "", threshold: 0.0 },
            RankTier { name: "b", emoji: "", threshold: f64::NAN },
        ];

        assert_eq!(RankTable::new(&[]).unwrap_err(), TierError::Empty);
        assert_eq!(
            RankTable::new(UNSORTED).unwrap_err(),
            TierError::NotIncreasing { previous: 10.0, next: 10.0 }
        );
        assert_eq!(RankTable::new(OFFSET).unwrap_err(), TierError::NonZeroBase(5.0));
        assert_eq!(RankTable::new(NAN).unwrap_err(), TierError::NonFinite("b"));
    }

    #[test]
    fn single_tier_table_is_always_max() {
        static ONLY: &[RankTier] = &[RankTier { name: "solo", emoji: "", threshold: 0.0 }];
        let table = RankTable::new(ONLY).unwrap();
        let progress = resolve_rank(12.0, &table);
        assert!(progress.at_max_tier);
        assert_eq!(progress.progress_percent, 100.0);
    }
}
