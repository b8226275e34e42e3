use chrono::Utc;
use serde_json::{Value, json};

use crate::common::{TestApp, routes};

const DAY: i64 = 86_400;

fn ids(data: &Value) -> Vec<i64> {
    data.as_array()
        .expect("stats data should be a list")
        .iter()
        .map(|e| e["artistId"].as_i64().unwrap())
        .collect()
}

async fn set_priority(app: &TestApp, artist_id: i32, rating: i32) {
    app.post_params(
        routes::ARTIST_UPDATE,
        json!({"artistId": artist_id, "priorityRating": rating}),
    )
    .await
    .assert_ok();
}

#[tokio::test]
async fn novices_and_veterans_split_the_roster() {
    let app = TestApp::spawn().await;
    let now = Utc::now().timestamp();

    let fresh = app.create_artist("fresh", 1, 100).await;
    let graded = app.create_artist("graded", 1, 100).await;
    let old = app.create_artist("old", 1, 100).await;
    app.create_artist("other-job", 2, 100).await;

    for score in [7, 8, 9] {
        app.evaluate(graded, score, now).await;
    }
    app.backdate_artist(old, now - 61 * DAY).await;

    let latest = app
        .post_params(routes::STATS_LATEST, json!({"job": 1}))
        .await;
    assert_eq!(ids(latest.assert_ok()), vec![fresh as i64]);

    let partnership = app
        .post_params(routes::STATS_PARTNERSHIP, json!({"job": 1}))
        .await;
    let data = partnership.assert_ok();
    assert_eq!(ids(data), vec![graded as i64, old as i64]);
    assert_eq!(data[0]["score"], 8.0);
    assert_eq!(data[1]["score"], 0.0);
    assert_eq!(
        data[0].as_object().unwrap().keys().collect::<Vec<_>>(),
        vec!["artistId", "nickName", "score"]
    );
}

#[tokio::test]
async fn novice_entries_carry_listing_fields() {
    let app = TestApp::spawn().await;
    let id = app.create_artist("fresh", 3, 100).await;

    let res = app
        .post_params(routes::STATS_LATEST, json!({"job": 3}))
        .await;
    let entry = &res.assert_ok()[0];

    assert_eq!(entry["artistId"], id);
    assert_eq!(entry["nickName"], "fresh");
    assert_eq!(entry["avatar"], "/uploads/fresh.png");
    assert_eq!(entry["priorityRating"], 0);
    assert!(entry["recommendWord1"].is_null());
    assert!(entry["create_time"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn novice_order_puts_priority_first() {
    let app = TestApp::spawn().await;
    let now = Utc::now().timestamp();

    let older = app.create_artist("older", 1, 100).await;
    let newer = app.create_artist("newer", 1, 100).await;
    let low = app.create_artist("low", 1, 100).await;
    let high = app.create_artist("high", 1, 100).await;
    app.backdate_artist(older, now - 10 * DAY).await;
    app.backdate_artist(newer, now - DAY).await;
    set_priority(&app, low, 1).await;
    set_priority(&app, high, 5).await;

    let res = app
        .post_params(routes::STATS_LATEST, json!({"job": 1}))
        .await;

    assert_eq!(
        ids(res.assert_ok()),
        vec![high as i64, low as i64, older as i64, newer as i64]
    );
}

#[tokio::test]
async fn veteran_score_uses_latest_three_evaluations() {
    let app = TestApp::spawn().await;
    let id = app.create_artist("steady", 1, 100).await;
    for score in [1, 8, 8, 9] {
        app.evaluate(id, score, 1_700_000_000).await;
    }

    let res = app
        .post_params(routes::STATS_PARTNERSHIP, json!({"job": 1}))
        .await;

    assert_eq!(res.assert_ok()[0]["score"], 8.33);
}

#[tokio::test]
async fn missing_job_lists_nobody() {
    let app = TestApp::spawn().await;
    app.create_artist("someone", 1, 100).await;

    let latest = app.post_params(routes::STATS_LATEST, json!({})).await;
    assert_eq!(latest.assert_ok(), &json!([]));
    let partnership = app.post_params(routes::STATS_PARTNERSHIP, json!({})).await;
    assert_eq!(partnership.assert_ok(), &json!([]));
}
