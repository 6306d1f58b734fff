use essay_grader::{RubricScore, essay::SpellCorrector, score_essay};

fn identity(text: &str) -> String {
    text.to_string()
}

fn corrector() -> SpellCorrector {
    SpellCorrector::embedded().expect("embedded dictionary")
}

#[test]
fn empty_essay_scores() {
    let score = score_essay("", &identity);
    assert_eq!(score, RubricScore {
        content:     0.0,
        cohesion:    0.0,
        grammar:     10.0,
        structure:   7,
        final_score: 4.3,
    });
}

#[test]
fn long_clean_essay_without_connectors() {
    let text = "abc ".repeat(150);
    assert_eq!(text.chars().count(), 600);

    let score = score_essay(&text, &identity);
    assert_eq!(score.content, 10.0);
    assert_eq!(score.structure, 10);
    assert_eq!(score.cohesion, 0.0);
    assert_eq!(score.grammar, 10.0);
    assert_eq!(score.final_score, 7.5);
}

#[test]
fn long_essay_of_known_words_with_the_real_corrector() {
    let text = "escola ".repeat(150);
    assert_eq!(score_essay(&text, &corrector()).final_score, 7.5);
}

#[test]
fn content_grows_with_length_until_capped() {
    let short = score_essay(&"a".repeat(125), &identity);
    assert_eq!(short.content, 2.5);

    let capped = score_essay(&"a".repeat(5_000), &identity);
    assert_eq!(capped.content, 10.0);
}

#[test]
fn content_counts_characters_not_bytes() {
    let score = score_essay(&"ç".repeat(250), &identity);
    assert_eq!(score.content, 5.0);
}

#[test]
fn cohesion_is_rescaled_to_ten() {
    let score = score_essay("portanto e assim", &identity);
    assert_eq!(score.cohesion, 4.0);
}

#[test]
fn each_grammar_error_costs_half_a_point() {
    let score = score_essay("Ele foi derepente para casa", &corrector());
    assert_eq!(score.grammar, 9.5);
}

#[test]
fn grammar_is_floored_at_zero() {
    let explode = |text: &str| "x ".repeat(text.len() * 10);
    let score = score_essay("palavra", &explode);
    assert_eq!(score.grammar, 0.0);
}

#[test]
fn structure_is_a_step_at_one_hundred_words() {
    assert_eq!(score_essay(&"casa ".repeat(100), &identity).structure, 7);
    assert_eq!(score_essay(&"casa ".repeat(101), &identity).structure, 10);
}

#[test]
fn final_score_stays_within_ten() {
    let samples = [
        String::new(),
        "portanto entretanto além disso por outro lado assim ".repeat(40),
        "- ".repeat(300),
        "palavra\n".repeat(50),
    ];
    for text in &samples {
        let score = score_essay(text, &corrector());
        assert!((0.0..=10.0).contains(&score.final_score), "{score:?}");
    }
}

#[test]
fn entries_follow_rubric_order_and_format() {
    let score = score_essay("", &identity);
    assert_eq!(score.entries(), vec![
        ("Conteúdo", "0.0".to_string()),
        ("Coesão", "0.0".to_string()),
        ("Gramática", "10.0".to_string()),
        ("Estrutura", "7".to_string()),
        ("Nota final estimada", "4.3".to_string()),
    ]);
    assert_eq!(score.dimension_rows().len(), 4);
}

#[test]
fn serializes_with_rubric_labels() {
    let value = serde_json::to_value(score_essay("", &identity)).expect("serialize");
    assert_eq!(value["Conteúdo"], 0.0);
    assert_eq!(value["Estrutura"], 7);
    assert_eq!(value["Nota final estimada"], 4.3);
}

#[test]
fn scoring_is_idempotent() {
    let text = "Portanto, a escolla é importante.\nAssim, derepente.";
    let c = corrector();
    assert_eq!(score_essay(text, &c), score_essay(text, &c));
}
