use serde_json::{Value, json};

use crate::common::{TestApp, routes};

fn evaluation(artist_id: i32, evaluate: &str, score: i32) -> Value {
    json!({
        "content": "Audition",
        "time": 1_700_000_000,
        "director": "Director Li",
        "artistId": artist_id,
        "evaluate": evaluate,
        "score": score,
    })
}

#[tokio::test]
async fn short_evaluate_text_is_rejected() {
    let app = TestApp::spawn().await;
    let id = app.create_artist("lilei", 1, 3000).await;

    app.post_params(routes::EVAL_ADD, evaluation(id, &"x".repeat(29), 8))
        .await
        .assert_code(400);
    app.post_params(routes::EVAL_ADD, evaluation(id, &"x".repeat(30), 8))
        .await
        .assert_ok();
}

#[tokio::test]
async fn score_outside_range_is_rejected() {
    let app = TestApp::spawn().await;
    let id = app.create_artist("lilei", 1, 3000).await;
    let text = "y".repeat(40);

    app.post_params(routes::EVAL_ADD, evaluation(id, &text, 0))
        .await
        .assert_code(400);
    app.post_params(routes::EVAL_ADD, evaluation(id, &text, 11))
        .await
        .assert_code(400);
}

#[tokio::test]
async fn unknown_artist_is_not_found() {
    let app = TestApp::spawn().await;

    app.post_params(routes::EVAL_ADD, evaluation(77, &"z".repeat(30), 5))
        .await
        .assert_code(404);
}

#[tokio::test]
async fn missing_field_is_named_in_order() {
    let app = TestApp::spawn().await;
    let mut params = evaluation(1, &"z".repeat(30), 5);
    let obj = params.as_object_mut().unwrap();
    obj.remove("director");
    obj.remove("score");

    let res = app.post_params(routes::EVAL_ADD, params).await;

    res.assert_code(400);
    assert_eq!(res.body["msg"], "Missing required field: director");
}

#[tokio::test]
async fn list_is_newest_business_time_first() {
    let app = TestApp::spawn().await;
    let id = app.create_artist("lilei", 1, 3000).await;
    app.evaluate(id, 5, 100).await;
    app.evaluate(id, 6, 300).await;
    app.evaluate(id, 7, 200).await;

    let res = app
        .post_params(routes::EVAL_LIST, json!({"artistId": id}))
        .await;
    let data = res.assert_ok();

    let times: Vec<i64> = data
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["time"].as_i64().unwrap())
        .collect();
    assert_eq!(times, vec![300, 200, 100]);

    let first = &data[0];
    assert!(first["evalId"].is_number());
    assert_eq!(first["artistId"], id);
    assert_eq!(first["score"], 6);
    assert_eq!(first["director"], "Director Wang");
}
