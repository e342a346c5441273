use intro_grader::grading::{Dimension, GradeError, Grader};
use intro_grader::nlp::NlpToolkit;

const SAMPLE: &str = "Hello everyone, my name is Asha. I am 16 years old and I study in class 10. \
                      My family includes my mother and father. I enjoy playing cricket. \
                      My dream is to become a scientist. \
                      A unique fact about me is I can solve a Rubik's cube blindfolded.";

fn baseline_grader() -> Grader {
    Grader::new(NlpToolkit::baseline())
}

#[test]
fn full_rubric_scenario_scores_ninety_two() {
    let grader = baseline_grader();
    let report = grader.grade(SAMPLE, 60).expect("grades");

    assert_eq!(report.total, 92);

    let content = report.dimension(Dimension::Content).expect("content entry");
    assert_eq!(content.points, 40);
    assert!(content.feedback.contains(&"Salutation present".to_string()));
    assert!(content
        .feedback
        .contains(&"Content coverage: 7/7 topics".to_string()));
    assert!(content.feedback.contains(&"Flow is logical".to_string()));
    assert_eq!(content.coverage_log.len(), 7);
    assert!(content
        .coverage_log
        .iter()
        .all(|entry| entry.ends_with("Keyword match")));

    let speed = report.dimension(Dimension::Speed).expect("speed entry");
    assert_eq!(speed.points, 2);
    assert_eq!(speed.feedback, vec!["Pace issue: 48 WPM"]);

    let grammar = report.dimension(Dimension::Grammar).expect("grammar entry");
    assert_eq!(grammar.points, 20);
    assert_eq!(
        grammar.feedback,
        vec!["Grammar errors: 0", "Vocab score: 10/10"]
    );

    let clarity = report.dimension(Dimension::Clarity).expect("clarity entry");
    assert_eq!(clarity.points, 15);
    assert_eq!(clarity.feedback, vec!["Fillers: 0 (0%)"]);

    let engagement = report
        .dimension(Dimension::Engagement)
        .expect("engagement entry");
    assert_eq!(engagement.points, 15);
    assert_eq!(engagement.feedback, vec!["Tone: High engagement"]);
}

#[test]
fn wordless_transcript_uses_every_zero_division_fallback() {
    let grader = baseline_grader();
    let report = grader.grade("...", 60).expect("grades");

    let content = report.dimension(Dimension::Content).expect("content entry");
    assert_eq!(content.points, 0);
    assert!(content.feedback.contains(&"No salutation found".to_string()));
    assert!(content
        .feedback
        .contains(&"Content coverage: 0/7 topics".to_string()));

    let speed = report.dimension(Dimension::Speed).expect("speed entry");
    assert_eq!(speed.points, 2);
    assert_eq!(speed.feedback, vec!["Pace issue: 0 WPM"]);

    // Zero words: error rate 0 keeps grammar at 10, TTR 0 drops
    // vocabulary to 6.
    let grammar = report.dimension(Dimension::Grammar).expect("grammar entry");
    assert_eq!(grammar.points, 16);

    let clarity = report.dimension(Dimension::Clarity).expect("clarity entry");
    assert_eq!(clarity.points, 15);

    let engagement = report
        .dimension(Dimension::Engagement)
        .expect("engagement entry");
    assert_eq!(engagement.points, 9);
    assert_eq!(engagement.feedback, vec!["Tone: Neutral"]);

    assert_eq!(report.total, 42);
}

#[test]
fn blank_input_is_rejected() {
    let grader = baseline_grader();
    let error = grader.grade("  \n ", 60).expect_err("blank must fail");
    assert!(matches!(error, GradeError::EmptyTranscript));
}

#[test]
fn zero_duration_defines_wpm_as_zero() {
    let grader = baseline_grader();
    let transcript = grader.transcript(SAMPLE, 0).expect("transcript builds");
    assert_eq!(transcript.wpm(), 0.0);

    let report = grader.run(&transcript).expect("grades");
    let speed = report.dimension(Dimension::Speed).expect("speed entry");
    assert_eq!(speed.feedback, vec!["Pace issue: 0 WPM"]);
}

#[test]
fn evaluation_is_idempotent_for_identical_input() {
    let grader = baseline_grader();
    let first = grader.grade(SAMPLE, 60).expect("grades");
    let second = grader.grade(SAMPLE, 60).expect("grades");
    assert_eq!(first, second);
}

#[test]
fn totals_stay_within_rubric_bounds() {
    let grader = baseline_grader();
    for (text, duration) in [
        (SAMPLE, 60),
        (SAMPLE, 0),
        ("Um, uh, like, basically a short note.", 10),
        ("...", 300),
    ] {
        let report = grader.grade(text, duration).expect("grades");
        assert!(report.total <= 100);
        let sum: u32 = report
            .dimensions
            .iter()
            .map(|entry| u32::from(entry.points))
            .sum();
        assert_eq!(u32::from(report.total), sum);
    }
}
