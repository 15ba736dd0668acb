use referee_cli::run;
use referee_engine::logger::HandRecord;

fn sim(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["referee", "sim"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn sim_writes_one_record_per_hand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands").join("match.jsonl");
    let path_str = path.to_string_lossy().to_string();

    let (code, out, err) = sim(&["--hands", "5", "--seed", "11", "--output", path_str.as_str()]);
    assert_eq!(code, 0, "stderr: {err}");
    assert!(out.contains("Simulated: 5 hands (seed 11)"));
    assert!(out.contains(&format!("Hand history: {path_str}")));

    let contents = std::fs::read_to_string(&path).unwrap();
    let records: Vec<HandRecord> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 5);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec.hand_number, i as u64 + 1);
        assert!(rec.ts.is_some());
        assert!(rec.hand_id.ends_with(&format!("-{:06}", i + 1)));
    }
}

#[test]
fn sim_reports_final_stacks_that_conserve_chips() {
    let (code, out, _) = sim(&["--hands", "20", "--seed", "3"]);
    assert_eq!(code, 0);
    let total: u64 = out
        .lines()
        .filter(|l| l.starts_with('p'))
        .map(|l| l.rsplit(": ").next().unwrap().parse::<u64>().unwrap())
        .sum();
    // three default seats of 1000
    assert_eq!(total, 3000);
    assert!(out.contains("p1 (baseline): "));
    assert!(out.contains("p3 (calling): "));
}

#[test]
fn same_seed_replays_the_same_match() {
    let args = ["--hands", "30", "--seed", "2024", "--player", "baseline", "--player", "calling"];
    let (_, first, _) = sim(&args);
    let (_, second, _) = sim(&args);
    assert_eq!(first, second);
}

#[test]
fn match_stops_when_one_player_has_everything() {
    let (code, out, err) = sim(&[
        "--hands", "100000", "--seed", "5", "--player", "calling", "--player", "calling",
    ]);
    assert_eq!(code, 0);
    assert!(err.contains("WARNING: match ended early"));
    assert!(out.contains(": 2000"));
    assert!(out.contains(": 0"));
}

#[test]
fn unknown_provider_is_an_error() {
    let (code, out, err) = sim(&["--hands", "1", "--player", "oracle", "--player", "calling"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Error:"));
    assert!(err.contains("oracle"));
}

#[test]
fn single_player_is_rejected() {
    let (code, _, err) = sim(&["--player", "calling"]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid configuration"));
}
