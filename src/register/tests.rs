use super::*;
use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::request::mock::MockHttpClient;
use serde_json::json;

// =========================================================
// Helpers
// =========================================================

fn setup_env() -> (AuthApi<MockHttpClient>, String) {
    let config = ApiConfig::default();
    let url = config.register_url.clone();
    (AuthApi::new(MockHttpClient::new(), config), url)
}

fn filled(username: &str, email: &str, password: &str, confirm: &str) -> RegisterFlow {
    let mut flow = RegisterFlow::new();
    flow.set_field(Field::Username, username.to_string());
    flow.set_field(Field::Email, email.to_string());
    flow.set_field(Field::Password, password.to_string());
    flow.set_field(Field::ConfirmPassword, confirm.to_string());
    flow
}

fn valid() -> RegisterFlow {
    filled("neo", "neo@matrix.io", "secret1", "secret1")
}

// =========================================================
// Validation
// =========================================================

#[tokio::test]
async fn mismatched_passwords_never_reach_the_network() {
    let (api, _) = setup_env();

    let mut flow = filled("neo", "neo@matrix.io", "secret1", "secret2");
    let ok = flow.submit(&api).await;

    assert!(!ok);
    assert_eq!(
        flow.errors().get(Field::ConfirmPassword),
        Some("Passwords do not match")
    );
    assert_eq!(flow.phase(), RegisterPhase::Idle);
    assert_eq!(api.client().request_count(), 0);
}

#[tokio::test]
async fn every_validation_rule_blocks_submission() {
    let (api, _) = setup_env();

    let cases = [
        filled("", "neo@matrix.io", "secret1", "secret1"),
        filled("neo", "", "secret1", "secret1"),
        filled("neo", "not-an-email", "secret1", "secret1"),
        filled("neo", "neo@matrix.io", "short", "short"),
        filled("neo", "neo@matrix.io", "secret1", ""),
    ];

    for mut flow in cases {
        assert!(!flow.submit(&api).await);
        assert!(!flow.errors().is_empty());
    }
    assert_eq!(api.client().request_count(), 0);
}

// =========================================================
// Submission
// =========================================================

#[tokio::test]
async fn success_clears_fields_and_flags_success() {
    let (api, url) = setup_env();
    api.client().mock_raw(&url, 201, "");

    let mut flow = valid();
    let ok = flow.submit(&api).await;

    assert!(ok);
    assert!(flow.succeeded());
    assert_eq!(flow.phase(), RegisterPhase::Success);
    assert_eq!(flow.form(), &crate::form::RegisterForm::default());
    assert!(flow.errors().is_empty());
    assert_eq!(
        api.client().last_body(),
        Some(json!({
            "username": "neo",
            "email": "neo@matrix.io",
            "password": "secret1"
        }))
    );
}

#[tokio::test]
async fn conflict_shows_server_message_and_keeps_values() {
    let (api, url) = setup_env();
    api.client()
        .mock_response(&url, 409, json!({ "message": "email taken" }));

    let mut flow = valid();
    let ok = flow.submit(&api).await;

    assert!(!ok);
    assert_eq!(flow.errors().get(Field::Api), Some("email taken"));
    assert_eq!(flow.phase(), RegisterPhase::Failed);
    assert_eq!(flow.form().username, "neo");
    assert_eq!(flow.form().email, "neo@matrix.io");
    assert_eq!(flow.form().password, "secret1");
    assert_eq!(flow.form().confirm_password, "secret1");
}

#[tokio::test]
async fn failure_without_message_uses_fallback() {
    let (api, url) = setup_env();

    for body in ["{}", "oops", r#"{"message":""}"#] {
        api.client().mock_raw(&url, 400, body);
        let mut flow = valid();
        flow.submit(&api).await;
        assert_eq!(flow.errors().get(Field::Api), Some(FALLBACK_FAILURE), "{body}");
    }
}

#[tokio::test]
async fn network_failure_is_reported_as_such() {
    let (api, url) = setup_env();
    api.client().mock_network_failure(&url, "dns lookup failed");

    let mut flow = valid();
    flow.submit(&api).await;

    assert_eq!(flow.errors().get(Field::Api), Some(NETWORK_FAILURE));
    assert_eq!(flow.form().username, "neo");
}

// =========================================================
// Phase transitions
// =========================================================

#[test]
fn new_attempt_hides_previous_success() {
    let mut flow = valid();
    flow.begin_submit();
    flow.finish(RegisterOutcome::Success);
    assert!(flow.succeeded());

    // 空表单再次提交：成功提示消失，校验错误出现
    assert!(flow.begin_submit().is_none());
    assert!(!flow.succeeded());
    assert!(flow.errors().get(Field::Username).is_some());
}

#[test]
fn editing_after_failure_returns_to_idle() {
    let mut flow = valid();
    flow.begin_submit();
    flow.finish(RegisterOutcome::Failure {
        reason: ClientError::Status {
            status: 409,
            message: Some("username taken".into()),
        },
    });
    assert_eq!(flow.phase(), RegisterPhase::Failed);

    flow.set_field(Field::Username, "trinity".into());

    assert_eq!(flow.phase(), RegisterPhase::Idle);
    assert_eq!(flow.form().username, "trinity");
    // 接口错误只在下一次提交时重新计算
    assert_eq!(flow.errors().get(Field::Api), Some("username taken"));
}

#[test]
fn inputs_are_locked_while_submitting() {
    let mut flow = valid();
    assert!(flow.begin_submit().is_some());
    assert!(flow.is_submitting());

    flow.set_field(Field::Email, "changed@matrix.io".into());
    assert_eq!(flow.form().email, "neo@matrix.io");
    assert!(flow.begin_submit().is_none());
}
