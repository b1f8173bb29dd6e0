//! Ranking of freight forwarders by cost, transit time, reliability and risk.
//!
//! Forwarders are scored with TOPSIS over the four criteria and each score is decomposed into a
//! neutrosophic [`Confidence`] using the raw reliability and risk percentages.

use chrono::{DateTime, Utc};
use tracing::debug;

use candidate_ranking::{criteria::topsis, descending, Alternative};
pub use candidate_ranking::{top, ArrayVec, Confidence, Criterion, Direction, Error, Normalized};

mod digest;
mod weights;

pub use crate::digest::Digest;
pub use crate::weights::{Preset, UnknownPreset, Weights};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forwarder {
    pub name: String,
    /// Lower is better.
    pub cost: f64,
    /// Lower is better.
    pub time: f64,
    /// Percentage, higher is better.
    pub reliability: f64,
    /// Percentage, lower is better.
    pub risk: f64,
}

impl Alternative<4> for Forwarder {
    fn name(&self) -> &str {
        &self.name
    }

    fn values(&self) -> [f64; 4] {
        [self.cost, self.time, self.reliability, self.risk]
    }
}

/// A forwarder as supplied by a form or a file, where any criterion may be absent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForwarderRecord {
    pub name: String,
    pub cost: Option<f64>,
    pub time: Option<f64>,
    pub reliability: Option<f64>,
    pub risk: Option<f64>,
}

impl TryFrom<ForwarderRecord> for Forwarder {
    type Error = Error;

    fn try_from(record: ForwarderRecord) -> Result<Self, Self::Error> {
        let require = |value: Option<f64>, criterion: &'static str| {
            value.ok_or_else(|| Error::MissingValue {
                alternative: record.name.clone(),
                criterion,
            })
        };
        let cost = require(record.cost, "cost")?;
        let time = require(record.time, "time")?;
        let reliability = require(record.reliability, "reliability")?;
        let risk = require(record.risk, "risk")?;
        Ok(Self {
            name: record.name,
            cost,
            time,
            reliability,
            risk,
        })
    }
}

#[derive(Clone, Debug)]
pub struct RankedResult {
    pub name: String,
    /// TOPSIS closeness coefficient.
    pub score: Normalized,
    pub confidence: Confidence,
    /// `confidence.truth - confidence.falsity`. Not used for ordering.
    pub crisp_score: f64,
    pub digest: Digest,
    /// 1-based position. Equal scores keep their input order.
    pub rank: usize,
    pub distance_to_ideal: f64,
    pub distance_to_anti_ideal: f64,
}

/// Rank `forwarders`, best first. Digests are stamped with the current time.
pub fn rank(forwarders: &[Forwarder], weights: &Weights) -> Result<Vec<RankedResult>, Error> {
    rank_at(forwarders, weights, Utc::now())
}

/// Rank `forwarders`, best first, stamping digests with `evaluated_at`.
///
/// An empty slice ranks to an empty result for any weights. Otherwise the whole evaluation fails
/// on the first invalid weight or non-finite criterion value.
pub fn rank_at(
    forwarders: &[Forwarder],
    weights: &Weights,
    evaluated_at: DateTime<Utc>,
) -> Result<Vec<RankedResult>, Error> {
    if forwarders.is_empty() {
        return Ok(Vec::new());
    }
    let criteria = weights.criteria()?;
    let scored = topsis::closeness(forwarders, &criteria)?;

    let mut results: Vec<RankedResult> = forwarders
        .iter()
        .zip(scored)
        .map(|(forwarder, closeness)| {
            let confidence = Confidence::derive(
                closeness.score,
                forwarder.reliability / 100.0,
                forwarder.risk / 100.0,
            );
            RankedResult {
                name: forwarder.name.clone(),
                score: closeness.score,
                confidence,
                crisp_score: confidence.crisp_score(),
                digest: Digest::new(&forwarder.name, closeness.score, evaluated_at),
                rank: 0,
                distance_to_ideal: closeness.distance_to_ideal,
                distance_to_anti_ideal: closeness.distance_to_anti_ideal,
            }
        })
        .collect();

    let scores: Vec<Normalized> = results.iter().map(|r| r.score).collect();
    descending(&scores).apply_slice_in_place(&mut results);
    for (position, result) in results.iter_mut().enumerate() {
        result.rank = position + 1;
    }
    debug!(
        forwarders = results.len(),
        winner = %results[0].name,
        score = %results[0].score,
        "ranked forwarders"
    );
    Ok(results)
}
