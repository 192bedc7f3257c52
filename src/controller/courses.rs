use crate::controller::{bad_request, blocking};
use crate::model::{Course, NewCourse};
use crate::storage::{CourseRepository, SqliteRepository};
use actix_web::web::{Data, Json, Path};
use actix_web::HttpResponse;

pub async fn list(repo: Data<SqliteRepository>) -> HttpResponse {
    let repo = repo.get_ref().clone();
    match blocking(move || repo.list_courses()).await {
        Ok(courses) => HttpResponse::Ok().json(courses),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn create(repo: Data<SqliteRepository>, body: Json<NewCourse>) -> HttpResponse {
    let new_course = body.into_inner();
    // course invariants are checked here, before anything is stored
    if let Err(e) = new_course.validate() {
        return bad_request(e);
    }
    let repo = repo.get_ref().clone();
    match blocking(move || repo.create_course(&new_course)).await {
        Ok(course) => HttpResponse::Created().json(course),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn update(
    repo: Data<SqliteRepository>,
    path: Path<i64>,
    body: Json<Course>,
) -> HttpResponse {
    let mut course = body.into_inner();
    course.id = path.into_inner();
    if let Err(e) = course.validate() {
        return bad_request(e);
    }
    let repo = repo.get_ref().clone();
    let stored = course.clone();
    match blocking(move || repo.update_course(&stored)).await {
        Ok(()) => HttpResponse::Ok().json(course),
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
    }
}

pub async fn delete(repo: Data<SqliteRepository>, path: Path<i64>) -> HttpResponse {
    let course_id = path.into_inner();
    let repo = repo.get_ref().clone();
    match blocking(move || repo.delete_course(course_id)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
