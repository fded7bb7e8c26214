/// One finishing record at the requested circuit, as returned by the results store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedResult {
    pub driver_id: i64,
    pub position: String,
}

impl JoinedResult {
    pub fn new(driver_id: i64, position: impl Into<String>) -> Self {
        Self {
            driver_id,
            position: position.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    Classified(i64),
    DidNotFinish,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub classified: usize,
    pub dnf_count: usize,
    pub average_position: f64,
    pub final_score: f64,
}
