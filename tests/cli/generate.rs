use crate::harness::TestContext;
use crate::harness::test_context::SCENARIO_OVERVIEW;
use predicates::prelude::*;
use std::fs;

const ELEMENTARY_DOCUMENTS: [&str; 7] = [
    "K-5 CC & OA Progressions.pdf",
    "K-5 NBT Progressions.pdf",
    "K-5 MD (Data) Progression.pdf",
    "K-5 MD (Measurement) Progression.pdf",
    "K-6 Geometry Progression.pdf",
    "3-5 Progression on Operations—Fractions.pdf",
    "3-5 NBT Progressions.pdf",
];

fn success_body(text: &str) -> String {
    serde_json::json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn"
    })
    .to_string()
}

#[test]
fn prompt_preview_renders_grade_three_scenario() {
    let ctx = TestContext::new();

    let mut args = TestContext::scenario_args();
    args.push("--prompt-preview");
    let output = ctx.cli().args(&args).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for needle in ["Grade 3", "3.OA.1", SCENARIO_OVERVIEW, "2.OA.1", "repeated addition"] {
        assert!(stdout.contains(needle), "missing {needle}");
    }
    for document in ELEMENTARY_DOCUMENTS {
        assert!(stdout.lines().any(|line| line == document), "missing line {document}");
    }
    assert!(stdout.contains("- Grandparent Sections:\n\n- Grandparent Section Overview:\n\n"));
}

#[test]
fn prompt_preview_needs_no_credential_or_network() {
    let ctx = TestContext::new();
    ctx.write_config("http://127.0.0.1:9/v1/messages");

    ctx.cli()
        .args(["generate", "--grade", "Geometry", "--current-id", "G-CO.1", "--prompt-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HS Modeling Progression.pdf"));
}

#[test]
fn incomplete_current_section_warns_without_request() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/v1/messages").expect(0).create();
    ctx.write_config(&format!("{}/v1/messages", server.url()));

    ctx.cli_with_key()
        .args(["generate", "--grade", "Grade 3", "--current-id", "3.OA.1"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Please fill in the Current Section ID and Overview."));

    mock.assert();
}

#[test]
fn successful_generation_prints_model_text_and_saves_raw_copy() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let text = "Vertical Skills:\n\n2.OA.1\n- Add equal groups";
    let mock = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "test-key")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "claude-3-5-sonnet-20241022",
            "max_tokens": 4000,
            "system": "You are a curriculum developer and expert in vertical progressions of learning.",
            "stream": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body(text))
        .expect(1)
        .create();
    ctx.write_config(&format!("{}/v1/messages", server.url()));

    let mut args = TestContext::scenario_args();
    args.extend(["--raw", "raw.txt"]);
    ctx.cli_with_key()
        .args(&args)
        .assert()
        .success()
        .stdout(predicate::str::contains(text))
        .stderr(predicate::str::contains("generated successfully"));

    mock.assert();
    let raw = fs::read_to_string(ctx.work_dir().join("raw.txt")).unwrap();
    assert_eq!(raw, text);
}

#[test]
fn completion_failure_reports_error_without_output() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/messages")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"type":"error","error":{"type":"api_error","message":"upstream exploded"}}"#)
        .expect(1)
        .create();
    ctx.write_config(&format!("{}/v1/messages", server.url()));

    ctx.cli_with_key()
        .args(TestContext::scenario_args())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("An error occurred: upstream exploded"))
        .stderr(predicate::str::contains(
            "Error generating vertical progression analysis: upstream exploded",
        ));

    mock.assert();
}

#[test]
fn missing_credential_fails_at_invocation() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/v1/messages").expect(0).create();
    ctx.write_config(&format!("{}/v1/messages", server.url()));

    ctx.cli()
        .args(TestContext::scenario_args())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("An error occurred:"))
        .stderr(predicate::str::contains("ANTHROPIC_API_KEY"));

    mock.assert();
}

#[test]
fn request_file_drives_generation() {
    let ctx = TestContext::new();
    ctx.write_file(
        "request.toml",
        r#"
grade = "Grade 7"

[current]
id = "7.RP.2"
overview = "recognize proportional relationships"

[[grandparents]]
id = "5.OA.3"
overview = "generate numerical patterns"
"#,
    );

    ctx.cli()
        .args(["generate", "--input", "request.toml", "--prompt-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7.RP.2"))
        .stdout(predicate::str::contains("- Grandparent Sections:\n5.OA.3\n"))
        .stdout(predicate::str::contains("6-7 RP Progression.pdf"));
}

#[test]
fn missing_request_file_is_an_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--input", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request file not found"));
}

#[test]
fn input_conflicts_with_field_flags() {
    let ctx = TestContext::new();
    ctx.write_file("request.toml", "grade = \"Grade 1\"\n");

    ctx.cli()
        .args(["generate", "--input", "request.toml", "--grade", "Grade 2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn grade_is_required_without_input() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--current-id", "3.OA.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments were not provided"));
}

#[test]
fn more_than_three_parents_are_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "generate", "--grade", "Grade 4", "--current-id", "4.NF.1", "--current-overview", "x",
            "--parent-id", "a", "--parent-id", "b", "--parent-id", "c", "--parent-id", "d",
            "--prompt-preview",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 3 parent sections"));
}

#[test]
fn invalid_config_is_reported() {
    let ctx = TestContext::new();
    ctx.write_file("vprog.toml", "[completion]\nmax_tokens = 0\n");

    ctx.cli()
        .args(TestContext::scenario_args())
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_tokens must be greater than 0"));
}

#[test]
fn raw_write_failure_warns_but_keeps_success() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body("analysis text"))
        .expect(1)
        .create();
    ctx.write_config(&format!("{}/v1/messages", server.url()));

    let mut args = TestContext::scenario_args();
    args.extend(["--raw", "no-such-dir/raw.txt"]);
    ctx.cli_with_key()
        .args(&args)
        .assert()
        .success()
        .stdout(predicate::str::contains("analysis text"))
        .stderr(predicate::str::contains("Could not save raw text to no-such-dir/raw.txt"))
        .stderr(predicate::str::contains("Error:").not());

    mock.assert();
    assert!(!ctx.work_dir().join("no-such-dir").exists());
}

#[test]
fn interactive_form_without_terminal_keeps_stdout_clean() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--interactive"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read grade level"));
}
