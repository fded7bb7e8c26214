use crate::domain::error::AnalysisError;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A driver as supplied by the caller. `payload` is echoed back untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestedDriver {
    pub id: i64,
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    /// Unique by id, in order of first appearance.
    pub drivers: Vec<RequestedDriver>,
    pub circuit_id: i64,
}

impl AnalyzeRequest {
    pub fn driver_ids(&self) -> Vec<i64> {
        self.drivers.iter().map(|d| d.id).collect()
    }

    pub fn parse(body: &[u8]) -> Result<Self, AnalysisError> {
        let data: Value = serde_json::from_slice(body).map_err(|_| AnalysisError::InvalidBody)?;
        let fields = match data {
            Value::Object(map) if !map.is_empty() => map,
            _ => return Err(AnalysisError::InvalidBody),
        };

        let drivers = fields.get("drivers").filter(|v| is_truthy(v));
        let circuit = fields.get("circuitId").filter(|v| !v.is_null());
        let (drivers, circuit) = match (drivers, circuit) {
            (Some(d), Some(c)) => (d, c),
            _ => return Err(AnalysisError::MissingFields),
        };

        let entries = drivers.as_array().ok_or(AnalysisError::InvalidDrivers)?;
        let drivers = dedupe_drivers(entries)?;
        let circuit_id = coerce_circuit_id(circuit).ok_or(AnalysisError::InvalidCircuit)?;

        Ok(Self { drivers, circuit_id })
    }
}

/// Repeated ids keep their first slot but take the last payload.
fn dedupe_drivers(entries: &[Value]) -> Result<Vec<RequestedDriver>, AnalysisError> {
    let mut out: Vec<RequestedDriver> = Vec::with_capacity(entries.len());
    let mut slots: HashMap<i64, usize> = HashMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let id = entry
            .as_object()
            .and_then(|obj| obj.get("id"))
            .and_then(coerce_id)
            .ok_or(AnalysisError::InvalidDriver { index })?;

        match slots.get(&id) {
            Some(&slot) => out[slot].payload = entry.clone(),
            None => {
                slots.insert(id, out.len());
                out.push(RequestedDriver {
                    id,
                    payload: entry.clone(),
                });
            }
        }
    }

    Ok(out)
}

/// Integers, the integral part of finite floats, and decimal strings.
pub fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Like [`coerce_id`] but a float must already be whole: `6.9` names no circuit.
pub fn coerce_circuit_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) if n.as_i64().is_none() => n
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .and_then(|_| coerce_id(value)),
        _ => coerce_id(value),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDriver {
    pub driver: Value,
    #[serde(serialize_with = "serialize_score")]
    pub score: f64,
    pub rank: usize,
}

/// Scores pinned to a bound go out as `0` and `100`, everything else as a float.
fn serialize_score<S: serde::Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if *score == 0.0 || *score == 100.0 {
        serializer.serialize_u64(*score as u64)
    } else {
        serializer.serialize_f64(*score)
    }
}
