//! Notes REST API: create, list, read, update and delete.
//!
//! Write handlers take the raw body, decode it into a loose key/value payload
//! and run it through the validator before the store is touched.

use actix_web::{web, HttpResponse, Responder};
use notes_types::ApiResponse;
use uuid::Uuid;

use super::errors::{error_response, route_not_found};
use crate::notes::{payload, validator, NoteError};
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .service(
                web::resource("")
                    .route(web::get().to(list_notes))
                    .route(web::post().to(create_note))
                    .default_service(web::to(route_not_found)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_note))
                    .route(web::put().to(update_note))
                    .route(web::delete().to(delete_note))
                    .default_service(web::to(route_not_found)),
            ),
    );
}

/// A path segment that is not a UUID cannot name any note
fn parse_id(raw: &str) -> Result<Uuid, NoteError> {
    Uuid::parse_str(raw).map_err(|_| NoteError::not_found(raw))
}

/// An unreadable body (over the size limit, broken stream) still answers with the JSON envelope
fn read_body(body: Result<web::Bytes, actix_web::Error>) -> Result<web::Bytes, NoteError> {
    body.map_err(|e| NoteError::Internal(format!("Failed to read request body: {}", e)))
}

async fn create_note(
    data: web::Data<AppState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> impl Responder {
    let req = match read_body(body)
        .and_then(|b| payload::decode(&b))
        .and_then(|p| validator::validate_create(&p))
    {
        Ok(req) => req,
        Err(e) => return error_response(&e, &data.config),
    };

    let note = data.notes.create(req);
    HttpResponse::Created().json(ApiResponse::ok(note, "Note created successfully"))
}

async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    let notes = data.notes.list();
    let count = notes.len();
    HttpResponse::Ok().json(ApiResponse::ok(notes, "Notes retrieved successfully").with_count(count))
}

async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match parse_id(&path).and_then(|id| data.notes.get(id)) {
        Ok(note) => HttpResponse::Ok().json(ApiResponse::ok(note, "Note retrieved successfully")),
        Err(e) => error_response(&e, &data.config),
    }
}

async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: Result<web::Bytes, actix_web::Error>,
) -> impl Responder {
    let result = read_body(body)
        .and_then(|b| payload::decode(&b))
        .and_then(|p| validator::validate_update(&p))
        .and_then(|req| {
            let id = parse_id(&path)?;
            data.notes.update(id, req)
        });

    match result {
        Ok(note) => HttpResponse::Ok().json(ApiResponse::ok(note, "Note updated successfully")),
        Err(e) => error_response(&e, &data.config),
    }
}

async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match parse_id(&path).and_then(|id| data.notes.delete(id)) {
        Ok(note) => HttpResponse::Ok().json(ApiResponse::ok(note, "Note deleted successfully")),
        Err(e) => error_response(&e, &data.config),
    }
}
