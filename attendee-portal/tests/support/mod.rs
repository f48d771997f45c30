//! In process stand in for the attendees backend API

#![allow(dead_code)]

use std::{
    net::TcpListener,
    sync::{
        atomic::{AtomicI64, AtomicUsize, Ordering},
        Mutex,
    },
};

use actix_web::{
    http::header::AUTHORIZATION, web, App, HttpRequest, HttpResponse, HttpServer,
};
use attendee_portal_common::{
    Attendee, AttendeeId, CreateAttendeeRequest, Credentials, RegisterRequest,
};
use serde::Deserialize;
use serde_json::json;

pub const ORGANIZER_EMAIL: &str = "a@b.com";
pub const ORGANIZER_PASSWORD: &str = "secret";
pub const ORGANIZER_ID: &str = "u1";
pub const TOKEN: &str = "T";
/// Email rejected by the backend as already registered
pub const TAKEN_EMAIL: &str = "taken@b.com";
/// Email rejected by the backend as an already existing attendee
pub const DUPLICATE_ATTENDEE_EMAIL: &str = "dup@b.com";
/// Attendee id the backend fails to delete
pub const FAILING_ATTENDEE_ID: &str = "500";

#[derive(Default)]
pub struct BackendState {
    pub attendees: Mutex<Vec<Attendee>>,
    pub next_id: AtomicI64,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    /// Decoded id path segment of every delete request
    pub deleted_ids: Mutex<Vec<String>>,
}

impl BackendState {
    pub fn attendees(&self) -> Vec<Attendee> {
        self.attendees.lock().unwrap().clone()
    }
}

pub struct FakeBackend {
    pub url: String,
    pub state: web::Data<BackendState>,
}

pub fn attendee(id: i64, name: &str) -> Attendee {
    Attendee {
        id: AttendeeId::from(id),
        name: name.to_owned(),
        surname: "Doe".to_owned(),
        email: format!("{}@doe.com", name.to_lowercase()),
        phone: "+37060000000".to_owned(),
    }
}

/// Start the fake backend on an ephemeral port holding `attendees` for the organizer. Must be
/// called from within an actix system.
pub fn spawn_backend(attendees: Vec<Attendee>) -> FakeBackend {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    let next_id = attendees
        .iter()
        .filter_map(|attendee| attendee.id.to_string().parse::<i64>().ok())
        .max()
        .unwrap_or(0)
        + 1;
    let state = web::Data::new(BackendState {
        attendees: Mutex::new(attendees),
        next_id: AtomicI64::new(next_id),
        ..BackendState::default()
    });
    let app_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .route("/login", web::post().to(login))
            .route("/register", web::post().to(register))
            .route("/attendees", web::get().to(list_attendees))
            .route("/attendees", web::post().to(create_attendee))
            .route("/attendees/{id}", web::delete().to(delete_attendee))
    })
    .workers(1)
    .disable_signals()
    .listen(listener)
    .unwrap()
    .run();
    actix_web::rt::spawn(server);
    FakeBackend {
        url: format!("http://{address}"),
        state,
    }
}

fn is_authorized(request: &HttpRequest) -> bool {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value == format!("Bearer {TOKEN}"))
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({"error": "User unauthorized"}))
}

async fn login(credentials: web::Json<Credentials>) -> HttpResponse {
    if credentials.email != ORGANIZER_EMAIL || credentials.password != ORGANIZER_PASSWORD {
        return HttpResponse::Unauthorized().json(json!({"error": "Incorrect credentials"}));
    }
    HttpResponse::Ok().json(json!({
        "id": ORGANIZER_ID,
        "email": credentials.email,
        "token": TOKEN,
    }))
}

async fn register(request: web::Json<RegisterRequest>) -> HttpResponse {
    if request.email == TAKEN_EMAIL {
        return HttpResponse::BadRequest().json(json!({"error": "User already exists"}));
    }
    HttpResponse::Created().json(json!({"message": "User created"}))
}

#[derive(Deserialize)]
struct AttendeesQuery {
    #[serde(rename = "userId")]
    user_id: String,
}

async fn list_attendees(
    request: HttpRequest,
    query: web::Query<AttendeesQuery>,
    state: web::Data<BackendState>,
) -> HttpResponse {
    state.list_calls.fetch_add(1, Ordering::SeqCst);
    if !is_authorized(&request) || query.user_id != ORGANIZER_ID {
        return unauthorized();
    }
    HttpResponse::Ok().json(state.attendees())
}

async fn create_attendee(
    request: HttpRequest,
    body: web::Json<CreateAttendeeRequest>,
    state: web::Data<BackendState>,
) -> HttpResponse {
    state.create_calls.fetch_add(1, Ordering::SeqCst);
    if !is_authorized(&request) {
        return unauthorized();
    }
    if body.email == DUPLICATE_ATTENDEE_EMAIL {
        return HttpResponse::BadRequest().json(json!({"error": "Attendee already exists"}));
    }
    let body = body.into_inner();
    let mut attendees = state.attendees.lock().unwrap();
    attendees.push(Attendee {
        id: AttendeeId::from(state.next_id.fetch_add(1, Ordering::SeqCst)),
        name: body.name,
        surname: body.surname,
        email: body.email,
        phone: body.phone,
    });
    HttpResponse::Ok().json(attendees.clone())
}

async fn delete_attendee(
    request: HttpRequest,
    id: web::Path<String>,
    state: web::Data<BackendState>,
) -> HttpResponse {
    state.delete_calls.fetch_add(1, Ordering::SeqCst);
    state.deleted_ids.lock().unwrap().push(id.clone());
    if !is_authorized(&request) {
        return unauthorized();
    }
    if id.as_str() == FAILING_ATTENDEE_ID {
        return HttpResponse::InternalServerError().json(json!({"error": "Database is down"}));
    }
    let mut attendees = state.attendees.lock().unwrap();
    attendees.retain(|attendee| attendee.id.to_string() != id.as_str());
    HttpResponse::Ok().json(attendees.clone())
}
