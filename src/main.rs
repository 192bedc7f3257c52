use golf_scorecard::args;
use golf_scorecard::controller::{comparison, courses, db_prefill, history, players, scores};
use golf_scorecard::storage::SqliteRepository;
use golf_scorecard::view::index::{render_index_template, DEFAULT_INDEX_TITLE};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks()?;

    let repo = match SqliteRepository::open(&args.db_name) {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!(
                "Error: {}\nBacktrace: {:?}",
                e,
                std::backtrace::Backtrace::capture()
            );
            std::process::exit(1);
        }
    };

    if !args.combined_sql_script.is_empty() {
        repo.execute_batch(&args.combined_sql_script)?;
    }

    if let Some(json) = &args.db_populate_json {
        db_prefill::db_prefill(json, &repo)?;
    }

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(repo.clone()))
            .route("/", web::get().to(index))
            .route("/courses", web::get().to(courses::list))
            .route("/courses", web::post().to(courses::create))
            .route("/courses/{id}", web::put().to(courses::update))
            .route("/courses/{id}", web::delete().to(courses::delete))
            .route("/players", web::get().to(players::list))
            .route("/players", web::post().to(players::create))
            .route("/players/{id}", web::put().to(players::update))
            .route("/players/{id}", web::delete().to(players::delete))
            .route("/scores", web::post().to(scores::enter_scores))
            .route("/comparison", web::get().to(comparison::compare))
            .route("/history", web::get().to(history::list))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static")) // Serve the static files
    })
    .bind("0.0.0.0:8081")?
    .run()
    .await?;
    Ok(())
}

async fn index() -> impl Responder {
    let markup = render_index_template(DEFAULT_INDEX_TITLE);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
