use serde_json::json;

use crate::common::{TestApp, routes};

mod accounts {
    use super::*;

    #[tokio::test]
    async fn seeded_admin_can_log_in() {
        let app = TestApp::spawn().await;

        let res = app
            .post_params(routes::USER_LOGIN, json!({"name": "admin", "password": "admin123"}))
            .await;

        assert_eq!(res.assert_ok()["role"], 1);
    }

    #[tokio::test]
    async fn director_account_round_trip() {
        let app = TestApp::spawn().await;

        app.post_params(
            routes::USER_ADD,
            json!({"name": "wang", "password": "pw-wang", "role": 2}),
        )
        .await
        .assert_ok();

        let res = app
            .post_params(routes::USER_LOGIN, json!({"name": "wang", "password": "pw-wang"}))
            .await;
        assert_eq!(res.assert_ok()["role"], 2);
    }

    #[tokio::test]
    async fn duplicate_user_name_is_rejected() {
        let app = TestApp::spawn().await;
        let body = json!({"name": "wang", "password": "pw", "role": 2});

        app.post_params(routes::USER_ADD, body.clone()).await.assert_ok();
        app.post_params(routes::USER_ADD, body).await.assert_code(400);
    }

    #[tokio::test]
    async fn invalid_role_is_rejected() {
        let app = TestApp::spawn().await;

        app.post_params(
            routes::USER_ADD,
            json!({"name": "x", "password": "pw", "role": 7}),
        )
        .await
        .assert_code(400);
    }
}

mod login {
    use super::*;

    #[tokio::test]
    async fn wrong_password_fails_with_401() {
        let app = TestApp::spawn().await;

        app.post_params(routes::USER_LOGIN, json!({"name": "admin", "password": "nope"}))
            .await
            .assert_code(401);
    }

    #[tokio::test]
    async fn unknown_user_fails_with_401() {
        let app = TestApp::spawn().await;

        app.post_params(routes::USER_LOGIN, json!({"name": "ghost", "password": "admin123"}))
            .await
            .assert_code(401);
    }

    #[tokio::test]
    async fn missing_params_object_reports_missing_field() {
        let app = TestApp::spawn().await;

        let res = app.post_json(routes::USER_ADD, &json!({})).await;

        res.assert_code(400);
        assert_eq!(res.body["msg"], "Missing required field: name");
    }

    #[tokio::test]
    async fn login_without_credentials_fails_with_401() {
        let app = TestApp::spawn().await;

        app.post_json(routes::USER_LOGIN, &json!({}))
            .await
            .assert_code(401);
        app.post_params(routes::USER_LOGIN, json!({"name": "admin"}))
            .await
            .assert_code(401);
    }

    #[tokio::test]
    async fn malformed_body_is_a_400_envelope() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::USER_LOGIN, &json!({"params": {"name": 5}}))
            .await;

        res.assert_code(400);
    }
}
