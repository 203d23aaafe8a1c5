mod common;

use common::{git_available, TestProject};

#[test]
fn test_prepare_only_initializes_and_prints_checklist() {
    if !git_available() {
        return;
    }
    let project = TestProject::streamlit_app();

    let result = project.run("3\n");

    assert!(result.success, "{}", result.combined_output());
    assert!(project.path(".git").is_dir());
    assert_eq!(project.commit_count(), 1);
    assert_eq!(
        project.last_commit_subject(),
        "Initial commit: Streamlit admin console"
    );
    assert_eq!(project.remote_url("origin"), None);
    assert!(
        result.stdout.contains("https://share.streamlit.io"),
        "expected checklist in stdout; got:\n{}",
        result.stdout
    );
    assert!(result.stdout.contains("[supabase]"));
}

#[test]
fn test_second_run_adds_no_commit() {
    if !git_available() {
        return;
    }
    let project = TestProject::streamlit_app();

    assert!(project.run("3\n").success);
    let result = project.run("3\n");

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(project.commit_count(), 1);
    assert!(result.stdout.contains("Git repository already initialized"));
    assert!(result.stdout.contains("Working tree clean"));
}

#[test]
fn test_exposed_secrets_warn_but_continue() {
    if !git_available() {
        return;
    }
    let project = TestProject::streamlit_app();
    project.write(".streamlit/secrets.toml", "[openai]\napi_key = \"sk-test\"\n");

    let result = project.run("3\n");

    assert!(result.success, "{}", result.combined_output());
    assert!(result
        .stdout
        .contains(".streamlit/secrets.toml is not in .gitignore"));
}

#[test]
fn test_invalid_choice_exits_with_error() {
    if !git_available() {
        return;
    }
    let project = TestProject::streamlit_app();

    let result = project.run("9\n");

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid choice '9'"));
    assert_eq!(project.remote_url("origin"), None);
    assert!(!result.stdout.contains("share.streamlit.io"));
}

#[test]
fn test_closed_stdin_is_invalid_choice() {
    if !git_available() {
        return;
    }
    let project = TestProject::streamlit_app();

    let result = project.run("");

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid choice"));
}

#[test]
fn test_exit_choice_succeeds() {
    if !git_available() {
        return;
    }
    let project = TestProject::streamlit_app();

    let result = project.run("4\n");

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Exiting without deploying"));
    assert_eq!(project.commit_count(), 1);
}
