use serde::Serialize;
use std::collections::BTreeMap;

pub const DRIVER_IDS: &[(&str, i64)] = &[
    ("Lewis Hamilton", 1),
    ("Max Verstappen", 830),
    ("Fernando Alonso", 4),
    ("Charles Leclerc", 844),
    ("Lando Norris", 846),
];

pub const CIRCUIT_IDS: &[(&str, i64)] = &[
    ("Monaco, Monte Carlo", 6),
    ("Silverstone, UK", 9),
    ("Spa-Francorchamps, Belgium", 13),
    ("Monza, Italy", 14),
    ("Suzuka, Japan", 22),
    ("Interlagos, Brazil", 18),
];

#[derive(Debug, Clone, Serialize)]
pub struct InitialData {
    pub drivers: BTreeMap<&'static str, i64>,
    pub circuits: BTreeMap<&'static str, i64>,
}

pub fn initial_data() -> InitialData {
    InitialData {
        drivers: DRIVER_IDS.iter().copied().collect(),
        circuits: CIRCUIT_IDS.iter().copied().collect(),
    }
}
