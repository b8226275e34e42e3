use serde_json::{Value, json};

use crate::common::{TestApp, routes};

fn demo_urls(data: &Value) -> Vec<&str> {
    data["auditions"]
        .as_array()
        .expect("auditions should be a list")
        .iter()
        .map(|a| a["fileUrl"].as_str().unwrap())
        .collect()
}

async fn roster(app: &TestApp) {
    let lilei = app.create_artist("LiLei", 1, 500).await;
    let han = app.create_artist("HanMeimei", 1, 5000).await;
    let lily = app.create_artist("Lily", 2, 800).await;

    app.add_demo(lilei, 1, "/uploads/lilei_1.mp4").await;
    app.add_demo(han, 1, "/uploads/han_1.mp4").await;
    app.add_demo(lilei, 2, "/uploads/lilei_2.mp4").await;
    app.add_demo(lily, 1, "/uploads/lily_1.mp4").await;
}

#[tokio::test]
async fn tag_alone_selects_every_demo_of_that_type() {
    let app = TestApp::spawn().await;
    roster(&app).await;

    let res = app
        .post_params(routes::CASTING_SELECT, json!({"tagId": 1}))
        .await;
    let data = res.assert_ok();

    assert_eq!(
        demo_urls(data),
        vec!["/uploads/lilei_1.mp4", "/uploads/han_1.mp4", "/uploads/lily_1.mp4"]
    );
    let first = &data["auditions"][0];
    assert!(first["demoId"].is_number());
    assert_eq!(first["demoType"], 1);
    assert_eq!(first["artistName"], "LiLei");
    assert_eq!(first["artistAvatar"], "/uploads/LiLei.png");
    assert_eq!(first["salary"], 500);
}

#[tokio::test]
async fn optional_bounds_narrow_the_selection() {
    let app = TestApp::spawn().await;
    roster(&app).await;

    let res = app
        .post_params(
            routes::CASTING_SELECT,
            json!({"tagId": 1, "jobId": 1, "avatarName": "Li", "priceLow": 100, "priceHigh": 1000}),
        )
        .await;

    assert_eq!(demo_urls(res.assert_ok()), vec!["/uploads/lilei_1.mp4"]);
}

#[tokio::test]
async fn name_filter_is_case_sensitive() {
    let app = TestApp::spawn().await;
    roster(&app).await;

    let res = app
        .post_params(routes::CASTING_SELECT, json!({"tagId": 1, "avatarName": "li"}))
        .await;

    assert_eq!(demo_urls(res.assert_ok()), Vec::<&str>::new());
}

#[tokio::test]
async fn price_bounds_are_inclusive() {
    let app = TestApp::spawn().await;
    roster(&app).await;

    let res = app
        .post_params(
            routes::CASTING_SELECT,
            json!({"tagId": 1, "priceLow": 800, "priceHigh": 5000}),
        )
        .await;

    assert_eq!(
        demo_urls(res.assert_ok()),
        vec!["/uploads/han_1.mp4", "/uploads/lily_1.mp4"]
    );
}

#[tokio::test]
async fn tag_is_required() {
    let app = TestApp::spawn().await;

    let res = app
        .post_params(routes::CASTING_SELECT, json!({"jobId": 1}))
        .await;

    res.assert_code(400);
    assert_eq!(res.body["msg"], "Missing required field: tagId");
}
