use serde_json::json;

use crate::common::{TestApp, artist_params, routes};

mod add {
    use super::*;

    #[tokio::test]
    async fn returns_full_record_with_wire_names() {
        let app = TestApp::spawn().await;

        let res = app
            .post_params(routes::ARTIST_ADD, artist_params("lilei", 1, 3000))
            .await;
        let data = res.assert_ok();

        assert!(data["artistId"].is_number());
        assert_eq!(data["nickName"], "lilei");
        assert_eq!(data["ID"], "110101199001011234");
        assert_eq!(data["emergencyTelphone"], "13800000000");
        assert_eq!(data["gender"], 0);
        assert_eq!(data["salary"], 3000);
        assert!(data["priorityRating"].is_null());
        assert!(data["recommendWord1"].is_null());
        assert!(data["create_time"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn duplicate_nickname_is_rejected() {
        let app = TestApp::spawn().await;
        app.create_artist("lilei", 1, 3000).await;

        app.post_params(routes::ARTIST_ADD, artist_params("lilei", 2, 100))
            .await
            .assert_code(400);
    }

    #[tokio::test]
    async fn taken_nickname_is_reported_before_missing_fields() {
        let app = TestApp::spawn().await;
        app.create_artist("lilei", 1, 3000).await;

        let mut params = artist_params("lilei", 2, 100);
        params.as_object_mut().unwrap().remove("qq");

        let res = app.post_params(routes::ARTIST_ADD, params).await;

        res.assert_code(400);
        assert_eq!(res.body["msg"], "Nickname already exists");
    }

    #[tokio::test]
    async fn each_missing_required_field_is_named() {
        let app = TestApp::spawn().await;

        for field in ["avatar", "nickName", "job", "ID", "emergencyTelphone", "gender"] {
            let mut params = artist_params("lilei", 1, 3000);
            params.as_object_mut().unwrap().remove(field);

            let res = app.post_params(routes::ARTIST_ADD, params).await;

            res.assert_code(400);
            assert_eq!(
                res.body["msg"],
                format!("Missing required field: {field}"),
                "field {field}"
            );
        }
    }

    #[tokio::test]
    async fn empty_string_counts_as_missing() {
        let app = TestApp::spawn().await;
        let mut params = artist_params("lilei", 1, 3000);
        params["qq"] = json!("");

        let res = app.post_params(routes::ARTIST_ADD, params).await;

        res.assert_code(400);
        assert_eq!(res.body["msg"], "Missing required field: qq");
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn only_provided_fields_change() {
        let app = TestApp::spawn().await;
        let id = app.create_artist("lilei", 1, 3000).await;

        app.post_params(
            routes::ARTIST_UPDATE,
            json!({"artistId": id, "jobId": 4, "salary": 4500, "recommendWord1": "bright"}),
        )
        .await
        .assert_ok();

        let res = app
            .post_params(routes::ARTIST_GET, json!({"nickName": "lilei"}))
            .await;
        let data = res.assert_ok();
        assert_eq!(data["job"], 4);
        assert_eq!(data["salary"], 4500);
        assert_eq!(data["recommendWord1"], "bright");
        assert_eq!(data["qq"], "10001");
    }

    #[tokio::test]
    async fn unknown_artist_is_not_found() {
        let app = TestApp::spawn().await;

        app.post_params(routes::ARTIST_UPDATE, json!({"artistId": 404, "salary": 1}))
            .await
            .assert_code(404);
    }

    #[tokio::test]
    async fn renaming_onto_taken_nickname_is_rejected() {
        let app = TestApp::spawn().await;
        let a = app.create_artist("a", 1, 100).await;
        app.create_artist("b", 1, 100).await;

        app.post_params(routes::ARTIST_UPDATE, json!({"artistId": a, "nickName": "b"}))
            .await
            .assert_code(400);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn removes_artist_demos_and_evaluations() {
        let app = TestApp::spawn().await;
        let id = app.create_artist("lilei", 1, 3000).await;
        app.add_demo(id, 1, "/uploads/1_files.mp4").await;
        app.evaluate(id, 8, 100).await;

        app.post_params(routes::ARTIST_DELETE, json!({"artistId": id}))
            .await
            .assert_ok();

        app.post_params(routes::ARTIST_GET, json!({"nickName": "lilei"}))
            .await
            .assert_code(404);
        let evals = app
            .post_params(routes::EVAL_LIST, json!({"artistId": id}))
            .await;
        assert_eq!(evals.assert_ok(), &json!([]));
        let casting = app
            .post_params(routes::CASTING_SELECT, json!({"tagId": 1}))
            .await;
        assert_eq!(casting.assert_ok()["auditions"], json!([]));
    }

    #[tokio::test]
    async fn unknown_artist_is_not_found() {
        let app = TestApp::spawn().await;

        app.post_params(routes::ARTIST_DELETE, json!({"artistId": 12}))
            .await
            .assert_code(404);
    }
}

mod demo {
    use super::*;

    #[tokio::test]
    async fn demo_for_unknown_artist_is_not_found() {
        let app = TestApp::spawn().await;

        app.post_params(
            routes::DEMO_ADD,
            json!({"demoType": 1, "fileUrl": "/uploads/x.mp4", "artistId": 99}),
        )
        .await
        .assert_code(404);
    }

    #[tokio::test]
    async fn demo_requires_file_url() {
        let app = TestApp::spawn().await;
        let id = app.create_artist("lilei", 1, 3000).await;

        let res = app
            .post_params(routes::DEMO_ADD, json!({"demoType": 1, "artistId": id}))
            .await;

        res.assert_code(400);
        assert_eq!(res.body["msg"], "Missing required field: fileUrl");
    }
}
