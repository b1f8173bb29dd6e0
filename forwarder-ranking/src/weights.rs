use std::{fmt, str::FromStr};

use candidate_ranking::{Criterion, Direction, Error};

/// Linear multipliers applied to each normalized criterion column. They need not sum to 1, and a
/// weight of 0 removes that criterion from the ranking.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    pub cost: f64,
    pub time: f64,
    pub reliability: f64,
    pub risk: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            cost: 0.3,
            time: 0.2,
            reliability: 0.35,
            risk: 0.15,
        }
    }
}

impl Weights {
    /// Criteria in column order: cost, time, reliability, risk. Only reliability is a benefit.
    pub fn criteria(&self) -> Result<[Criterion; 4], Error> {
        Ok([
            Criterion::new("cost", Direction::Minimize, self.cost)?,
            Criterion::new("time", Direction::Minimize, self.time)?,
            Criterion::new("reliability", Direction::Maximize, self.reliability)?,
            Criterion::new("risk", Direction::Minimize, self.risk)?,
        ])
    }
}

impl From<Preset> for Weights {
    fn from(preset: Preset) -> Self {
        preset.weights()
    }
}

/// Named weightings for common shipping scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Preset {
    Balanced,
    CostOptimized,
    TimeOptimized,
    /// Favors transit time and reliability over cost.
    Emergency,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Balanced,
        Preset::CostOptimized,
        Preset::TimeOptimized,
        Preset::Emergency,
    ];

    pub fn weights(self) -> Weights {
        let (cost, time, reliability, risk) = match self {
            Preset::Balanced => (0.25, 0.25, 0.25, 0.25),
            Preset::CostOptimized => (0.5, 0.2, 0.2, 0.1),
            Preset::TimeOptimized => (0.2, 0.5, 0.2, 0.1),
            Preset::Emergency => (0.15, 0.4, 0.3, 0.15),
        };
        Weights {
            cost,
            time,
            reliability,
            risk,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Balanced => "balanced",
            Preset::CostOptimized => "cost-optimized",
            Preset::TimeOptimized => "time-optimized",
            Preset::Emergency => "emergency",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset `{0}`, expected one of: balanced, cost-optimized, time-optimized, emergency")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use candidate_ranking::{num::assert_within, Direction, Error};

    use super::{Preset, UnknownPreset, Weights};

    #[test]
    fn presets_round_trip_names() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
        }
        assert_eq!(
            "cheapest".parse::<Preset>(),
            Err(UnknownPreset("cheapest".to_owned()))
        );
    }

    #[test]
    fn presets_sum_to_one() {
        for preset in Preset::ALL {
            let w = preset.weights();
            assert_within(w.cost + w.time + w.reliability + w.risk, 1.0, 1e-12);
        }
    }

    #[test]
    fn criteria_order_and_direction() {
        let criteria = Weights::default().criteria().unwrap();
        let names: Vec<&str> = criteria.iter().map(|c| c.name).collect();
        assert_eq!(names, ["cost", "time", "reliability", "risk"]);
        let maximized: Vec<bool> = criteria
            .iter()
            .map(|c| c.direction == Direction::Maximize)
            .collect();
        assert_eq!(maximized, [false, false, true, false]);
        assert_eq!(criteria[2].weight.as_f64(), 0.35);
    }

    #[test]
    fn invalid_weights() {
        let weights = Weights {
            risk: f64::NAN,
            ..Weights::default()
        };
        assert!(matches!(
            weights.criteria(),
            Err(Error::InvalidWeight { criterion: "risk", .. })
        ));

        let weights = Weights {
            time: -1.0,
            ..Weights::default()
        };
        assert!(matches!(
            weights.criteria(),
            Err(Error::InvalidWeight { criterion: "time", value }) if value == -1.0
        ));
    }
}
