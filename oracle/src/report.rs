use std::fmt::{self, Write};

use forwarder_ranking::{top, ArrayVec, Criterion, Direction, RankedResult};
use serde_json::{json, Value};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Headline for the winning forwarder.
pub fn verdict(
    out: &mut impl Write,
    results: &[RankedResult],
    invocation: Option<&str>,
) -> fmt::Result {
    let Some(winner) = results.first() else {
        return writeln!(out, "No forwarders to rank");
    };
    writeln!(out, "CHOSEN FORWARDER: {}", winner.name)?;
    writeln!(out, "TOPSIS Score: {:.3}", winner.score.as_f64())?;
    writeln!(out, "Truth Level: {:.1}%", winner.confidence.truth * 100.0)?;
    writeln!(
        out,
        "Indeterminacy: {:.1}%",
        winner.confidence.indeterminacy * 100.0
    )?;
    writeln!(out, "Falsity Risk: {:.1}%", winner.confidence.falsity * 100.0)?;
    writeln!(out, "Digest: {}", winner.digest)?;
    if let Some(invocation) = invocation {
        writeln!(out)?;
        writeln!(out, "{invocation}")?;
    }
    Ok(())
}

/// One line per forwarder, with medals for the podium.
pub fn ranking(out: &mut impl Write, results: &[RankedResult]) -> fmt::Result {
    let podium: ArrayVec<&RankedResult, 3> = top(results);
    for (medal, result) in MEDALS.iter().zip(&podium) {
        ranking_line(out, medal, result)?;
    }
    for result in &results[podium.len()..] {
        ranking_line(out, "🔹", result)?;
    }
    Ok(())
}

fn ranking_line(out: &mut impl Write, marker: &str, result: &RankedResult) -> fmt::Result {
    writeln!(
        out,
        "{marker} #{} {} - Score: {:.3}",
        result.rank,
        result.name,
        result.score.as_f64()
    )
}

/// Weights and per-forwarder distances behind the ranking.
pub fn analysis(
    out: &mut impl Write,
    criteria: &[Criterion; 4],
    results: &[RankedResult],
) -> fmt::Result {
    writeln!(out, "CRITERIA WEIGHTS:")?;
    for criterion in criteria {
        let direction = match criterion.direction {
            Direction::Minimize => "minimize",
            Direction::Maximize => "maximize",
        };
        writeln!(
            out,
            "  {}: {:.1}% ({direction})",
            criterion.name,
            criterion.weight.as_f64() * 100.0
        )?;
    }
    writeln!(out)?;
    writeln!(out, "FINAL RANKINGS:")?;
    for result in results {
        writeln!(out, "  {}. {}", result.rank, result.name)?;
        writeln!(out, "     Closeness: {:.2}%", result.score.as_f64() * 100.0)?;
        writeln!(out, "     Distance to Ideal: {:.4}", result.distance_to_ideal)?;
        writeln!(
            out,
            "     Distance to Anti-Ideal: {:.4}",
            result.distance_to_anti_ideal
        )?;
        writeln!(
            out,
            "     Truth / Indeterminacy / Falsity: {:.3} / {:.3} / {:.3}",
            result.confidence.truth, result.confidence.indeterminacy, result.confidence.falsity
        )?;
    }
    Ok(())
}

/// Short script announcing the winner, for a speech collaborator to read out.
pub fn narration(
    out: &mut impl Write,
    results: &[RankedResult],
    invocation: Option<&str>,
) -> fmt::Result {
    let Some(winner) = results.first() else {
        return Ok(());
    };
    write!(
        out,
        "Behold, the freight matrix has rendered its judgment. I declare {} the chosen \
         forwarder, with a TOPSIS score of {:.3}. The neutrosophic truth reveals {:.0} percent \
         certainty.",
        winner.name,
        winner.score.as_f64(),
        winner.confidence.truth * 100.0
    )?;
    if let Some(invocation) = invocation {
        write!(out, " {invocation}")?;
    }
    writeln!(out)
}

pub fn json(results: &[RankedResult]) -> Value {
    results
        .iter()
        .map(|result| {
            json!({
                "rank": result.rank,
                "name": result.name,
                "score": result.score.as_f64(),
                "confidence": {
                    "truth": result.confidence.truth,
                    "indeterminacy": result.confidence.indeterminacy,
                    "falsity": result.confidence.falsity,
                },
                "crisp_score": result.crisp_score,
                "digest": result.digest.to_string(),
                "distance_to_ideal": result.distance_to_ideal,
                "distance_to_anti_ideal": result.distance_to_anti_ideal,
            })
        })
        .collect()
}
