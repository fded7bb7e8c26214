use crate::domain::analysis::{RequestedDriver, ScoredDriver};
use crate::scoring::types::{Finish, JoinedResult, ScoreBreakdown};
use std::collections::HashMap;

pub const MAX_SCORE: f64 = 100.0;
pub const POSITION_PENALTY: f64 = 5.0;
pub const DNF_PENALTY: f64 = 5.0;
/// Assumed average when a driver never classified at the circuit.
pub const DNF_ONLY_AVERAGE: f64 = 20.0;

pub fn classify(raw: &str) -> Finish {
    match raw.trim().parse::<i64>() {
        Ok(p) => Finish::Classified(p),
        Err(_) => Finish::DidNotFinish,
    }
}

pub fn clamp_score(v: f64) -> f64 {
    if v < 0.0 {
        0.0
    } else if v > MAX_SCORE {
        MAX_SCORE
    } else {
        v
    }
}

/// Two decimals, exact halves going to the even digit.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

pub fn score_positions<S: AsRef<str>>(positions: &[S]) -> ScoreBreakdown {
    let mut classified = Vec::with_capacity(positions.len());
    let mut dnf_count = 0usize;

    for pos in positions {
        match classify(pos.as_ref()) {
            Finish::Classified(p) => classified.push(p),
            Finish::DidNotFinish => dnf_count += 1,
        }
    }

    if classified.is_empty() && dnf_count == 0 {
        return ScoreBreakdown {
            classified: 0,
            dnf_count: 0,
            average_position: 0.0,
            final_score: 0.0,
        };
    }

    let average_position = if classified.is_empty() {
        DNF_ONLY_AVERAGE
    } else {
        classified.iter().map(|p| *p as f64).sum::<f64>() / classified.len() as f64
    };

    let raw = MAX_SCORE - (average_position * POSITION_PENALTY) - (dnf_count as f64 * DNF_PENALTY);

    ScoreBreakdown {
        classified: classified.len(),
        dnf_count,
        average_position,
        final_score: clamp_score(round2(raw)),
    }
}

/// Scores every requested driver that has at least one row and ranks them.
///
/// Equal scores keep the order in which the drivers were requested, so the
/// result never depends on the order the store returned rows in.
pub fn rank_drivers(requested: &[RequestedDriver], rows: &[JoinedResult]) -> Vec<ScoredDriver> {
    let mut positions_by_driver: HashMap<i64, Vec<&str>> = HashMap::new();
    for row in rows {
        positions_by_driver
            .entry(row.driver_id)
            .or_default()
            .push(row.position.as_str());
    }

    let mut scored: Vec<ScoredDriver> = requested
        .iter()
        .filter_map(|driver| {
            let positions = positions_by_driver.get(&driver.id)?;
            let breakdown = score_positions(positions.as_slice());
            tracing::debug!(
                driver_id = driver.id,
                classified = breakdown.classified,
                dnf_count = breakdown.dnf_count,
                average_position = breakdown.average_position,
                score = breakdown.final_score,
                "scored driver"
            );
            Some(ScoredDriver {
                driver: driver.payload.clone(),
                score: breakdown.final_score,
                rank: 0,
            })
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, driver)| ScoredDriver { rank: i + 1, ..driver })
        .collect()
}
