use circuit_scorer::domain::analysis::RequestedDriver;
use circuit_scorer::scoring::engine::{rank_drivers, score_positions};
use circuit_scorer::scoring::types::JoinedResult;
use serde_json::json;

#[test]
fn scoring_prefers_better_finisher() {
    let requested = vec![driver(846, "Lando Norris"), driver(844, "Charles Leclerc")];
    let rows = vec![
        JoinedResult::new(846, "7"),
        JoinedResult::new(844, "1"),
        JoinedResult::new(846, "\\N"),
        JoinedResult::new(844, "3"),
    ];

    let ranked = rank_drivers(&requested, &rows);
    assert_eq!(ranked.first().unwrap().driver["name"], "Charles Leclerc");
    assert_eq!(ranked.first().unwrap().score, 90.0);
    assert_eq!(ranked.last().unwrap().score, 60.0);
}

#[test]
fn dnf_costs_as_much_as_five_places() {
    let clean = score_positions(&["4"]).final_score;
    let with_dnf = score_positions(&["4", "\\N"]).final_score;
    assert_eq!(clean - with_dnf, 5.0);
}

#[test]
fn ranks_are_sequential_over_many_ties() {
    let requested: Vec<_> = (1..=6).map(|id| driver(id, "same")).collect();
    let rows: Vec<_> = (1..=6).map(|id| JoinedResult::new(id, "10")).collect();

    let ranked = rank_drivers(&requested, &rows);
    let ids: Vec<_> = ranked.iter().map(|r| r.driver["id"].as_i64().unwrap()).collect();
    let ranks: Vec<_> = ranked.iter().map(|r| r.rank).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    assert!(ranked.iter().all(|r| r.score == 50.0));
}

fn driver(id: i64, name: &str) -> RequestedDriver {
    RequestedDriver {
        id,
        payload: json!({"id": id, "name": name, "country": "GB"}),
    }
}
