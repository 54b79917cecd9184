//! HTTP API tests against an in-process service

use actix_web::{http::StatusCode, test, web, App};
use serde_json::Value;

use schedule_viewer::mock::mock_entries;
use schedule_viewer::schedule::MonthCursor;
use schedule_viewer::source::DataSource;
use schedule_viewer::web::{configure, AppState};

fn ready_state() -> web::Data<AppState> {
    web::Data::new(AppState::ready(mock_entries(), DataSource::Mock, MonthCursor::default()))
}

#[actix_web::test]
async fn test_schedule_defaults_to_configured_month() {
    let app = test::init_service(App::new().app_data(ready_state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/api/schedule").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["title"], "2024年 7月");
    assert_eq!(body["days"].as_array().unwrap().len(), 31);
    assert_eq!(body["people"].as_array().unwrap().len(), 5);
    assert_eq!(body["rows"].as_array().unwrap().len(), 5);
    assert_eq!(body["summary"]["visible_people"], 5);
    assert_eq!(body["summary"]["total_entries"], 14);

    let first_row = &body["rows"][0];
    assert_eq!(first_row["person"], "田中太郎");
    assert_eq!(first_row["cells"][0]["booking"]["location"], "プロジェクトA");
    assert_eq!(first_row["cells"][0]["tag"], "project");
    assert!(first_row["cells"][2]["booking"].is_null());
}

#[actix_web::test]
async fn test_schedule_filters() {
    let app = test::init_service(App::new().app_data(ready_state()).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/api/schedule?person=%E9%88%B4%E6%9C%A8%E4%B8%80%E9%83%8E")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["rows"].as_array().unwrap().len(), 1);
    assert_eq!(body["rows"][0]["person"], "鈴木一郎");
    // the selector still lists everyone
    assert_eq!(body["people"].as_array().unwrap().len(), 5);
    assert_eq!(body["summary"]["visible_people"], 1);
}

#[actix_web::test]
async fn test_other_month_is_empty_but_keeps_people() {
    let app = test::init_service(App::new().app_data(ready_state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/api/schedule?year=2024&month=2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["days"].as_array().unwrap().len(), 29);
    assert_eq!(body["rows"].as_array().unwrap().len(), 5);
    assert_eq!(body["summary"]["month_entries"], 0);
}

#[actix_web::test]
async fn test_invalid_month_is_bad_request() {
    let app = test::init_service(App::new().app_data(ready_state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/api/schedule?year=2024&month=13").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_out_of_range_year_is_bad_request() {
    let app = test::init_service(App::new().app_data(ready_state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/api/schedule?year=300000&month=7").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid year: 300000");

    let req = test::TestRequest::get()
        .uri("/api/navigate?year=2147483647&month=12&direction=next")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    // the page shows this message instead of a year/month
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert!(body.get("year").is_none());

    // the last representable month cannot step forward
    let last_year = chrono::Datelike::year(&chrono::NaiveDate::MAX);
    let req = test::TestRequest::get()
        .uri(&format!("/api/navigate?year={}&month=11&direction=next", last_year))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_navigate_rolls_over_year() {
    let app = test::init_service(App::new().app_data(ready_state()).configure(configure)).await;

    let req = test::TestRequest::get()
        .uri("/api/navigate?year=2024&month=12&direction=next")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["year"], 2025);
    assert_eq!(body["month"], 1);

    let req = test::TestRequest::get()
        .uri("/api/navigate?year=2025&month=1&direction=prev")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["year"], 2024);
    assert_eq!(body["month"], 12);

    let req = test::TestRequest::get()
        .uri("/api/navigate?year=2025&month=1&direction=up")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_loading_state() {
    let state = web::Data::new(AppState::loading(DataSource::Mock, MonthCursor::default()));
    let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/api/schedule").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    state.set_entries(mock_entries());
    let req = test::TestRequest::get().uri("/api/schedule").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_index_and_csv_routes() {
    let app = test::init_service(App::new().app_data(ready_state()).configure(configure)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    for chip in [
        r#"<span class="chip project">プロジェクト</span>"#,
        r#"<span class="chip event">イベント</span>"#,
        r#"<span class="chip workshop">ワークショップ</span>"#,
        r#"<span class="chip seminar">セミナー</span>"#,
    ] {
        assert!(page.contains(chip), "legend lacks {}", chip);
    }

    // mock source has no file to hand out
    let req = test::TestRequest::get().uri("/schedule-data.csv").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_csv_route_serves_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, "開催日,施策名\n7/1,棚卸し\n".as_bytes()).unwrap();

    let state = web::Data::new(AppState::ready(
        Vec::new(),
        DataSource::Csv(file.path().to_path_buf()),
        MonthCursor::default(),
    ));
    let app = test::init_service(App::new().app_data(state).configure(configure)).await;

    let req = test::TestRequest::get().uri("/schedule-data.csv").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "開催日,施策名\n7/1,棚卸し\n".as_bytes());
}
