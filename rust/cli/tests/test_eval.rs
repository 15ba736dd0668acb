use referee_cli::run;

fn eval(cards: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["referee", "eval"];
    argv.extend_from_slice(cards);
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
fn eval_names_the_best_hand() {
    let (code, out, _) = eval(&["9s", "9d", "9h", "4c", "4d", "Ks", "2h"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Full House: "));

    let (_, out, _) = eval(&["Ah 2d 3c 4s 5h"]);
    assert!(out.starts_with("Straight: "));
}

#[test]
fn eval_rejects_bad_notation() {
    let (code, out, err) = eval(&["Ah", "Kh", "Qh", "Jh", "Xx"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: Invalid input"));
}

#[test]
fn eval_rejects_too_many_cards() {
    let (code, _, err) = eval(&["2c 3c 4c 5c 6c 7c 8c 9c"]);
    assert_eq!(code, 2);
    assert!(err.contains("5 to 7 cards"));
}
