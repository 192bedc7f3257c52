mod common;

use common::{par_values, sample_new_course, sample_new_player};
use actix_web::web::{self, Data};
use actix_web::{test, App, HttpResponse};
use golf_scorecard::controller::{comparison, courses, history, players, scores};
use golf_scorecard::model::{ComparisonResult, Course, Player};
use golf_scorecard::storage::SqliteRepository;

macro_rules! test_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($repo.clone()))
                .route("/courses", web::get().to(courses::list))
                .route("/courses", web::post().to(courses::create))
                .route("/players", web::get().to(players::list))
                .route("/players", web::post().to(players::create))
                .route("/scores", web::post().to(scores::enter_scores))
                .route("/comparison", web::get().to(comparison::compare))
                .route("/history", web::get().to(history::list))
                .route("/health", web::get().to(HttpResponse::Ok)),
        )
        .await
    };
}

#[actix_web::test]
async fn score_entry_flow_over_http() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/courses")
        .set_json(sample_new_course("Pine Hollow"))
        .to_request();
    let course: Course = test::call_and_read_body_json(&app, req).await;

    let mut player1 = sample_new_player("AF", 9);
    player1.tee_color = golf_scorecard::model::TeeColor::Blue;
    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(player1)
        .to_request();
    let player1: Player = test::call_and_read_body_json(&app, req).await;

    let mut player2 = sample_new_player("BG", 0);
    player2.tee_color = golf_scorecard::model::TeeColor::Blue;
    let req = test::TestRequest::post()
        .uri("/players")
        .set_json(player2)
        .to_request();
    let player2: Player = test::call_and_read_body_json(&app, req).await;

    let payload = serde_json::json!({
        "course_id": course.id,
        "date": "2026-08-30",
        "entries": [
            { "player_id": player1.id, "strokes": par_values(), "putts": vec![2; 18] },
            { "player_id": player2.id, "strokes": par_values(), "putts": vec![2; 18] },
        ],
    });
    let req = test::TestRequest::post()
        .uri("/scores?json=true")
        .set_json(payload)
        .to_request();
    let entered: scores::ScoreEntryResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(entered.results.len(), 2);

    let uri = format!(
        "/comparison?session={}&player1={}&player2={}&json=true",
        entered.session_id, player1.id, player2.id
    );
    let req = test::TestRequest::get().uri(&uri).to_request();
    let compared: ComparisonResult = test::call_and_read_body_json(&app, req).await;
    assert_eq!(compared.match_play.final_status, "9UP (Match Won)");

    let req = test::TestRequest::get().uri("/history?json=true").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn comparison_of_session_without_rounds_is_not_found() {
    use chrono::NaiveDate;
    use golf_scorecard::storage::{
        CourseRepository, PlayerRepository, SessionRepository,
    };

    let repo = SqliteRepository::open_in_memory().unwrap();
    let course = repo.create_course(&sample_new_course("Pine Hollow")).unwrap();
    let p1 = repo.create_player(&sample_new_player("AF", 9)).unwrap();
    let p2 = repo.create_player(&sample_new_player("BG", 0)).unwrap();

    // hole rows never saved for this session
    let session_id = repo
        .create_session(
            course.id,
            NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
            &[p1.clone(), p2.clone()],
        )
        .unwrap();

    let app = test_app!(repo);
    let uri = format!(
        "/comparison?session={}&player1={}&player2={}&json=true",
        session_id, p1.id, p2.id
    );
    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn invalid_course_payload_is_a_bad_request() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let app = test_app!(repo);

    let mut bad = sample_new_course("Bad Track");
    bad.handicaps.blue[0] = 42;
    let req = test::TestRequest::post()
        .uri("/courses")
        .set_json(bad)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn score_entry_needs_two_players() {
    let repo = SqliteRepository::open_in_memory().unwrap();
    let app = test_app!(repo);

    let req = test::TestRequest::post()
        .uri("/courses")
        .set_json(sample_new_course("Pine Hollow"))
        .to_request();
    let course: Course = test::call_and_read_body_json(&app, req).await;

    let payload = serde_json::json!({
        "course_id": course.id,
        "date": "2026-08-30",
        "entries": [
            { "player_id": 1, "strokes": par_values(), "putts": vec![2; 18] },
        ],
    });
    let req = test::TestRequest::post()
        .uri("/scores")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}
