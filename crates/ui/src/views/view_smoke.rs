use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_smoke_renders_start_button() {
    let mut harness = setup_view_harness(ViewKind::Welcome);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Deutsch-Quiz"), "missing title in {html}");
    assert!(html.contains("Quiz starten"), "missing start button in {html}");
    assert!(html.contains("Exam Information"), "missing info card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Exam);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Frage 1 von 10"), "missing counter in {html}");
    assert!(html.contains("Hallo"), "missing first question option in {html}");
    assert!(
        html.contains("Antwort bestätigen"),
        "missing submit button in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_renders_grade() {
    let mut harness = setup_view_harness(ViewKind::Result { score: 9, total: 10 });
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("A+"), "missing grade letter in {html}");
    assert!(html.contains("90%"), "missing percentage in {html}");
    assert!(
        html.contains("9 out of 10 correct"),
        "missing score line in {html}"
    );
    assert!(html.contains("Schüler"), "missing student name in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_smoke_renders_error_for_zero_total() {
    let mut harness = setup_view_harness(ViewKind::Result { score: 0, total: 0 });
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Something went wrong"),
        "missing error message in {html}"
    );
}
