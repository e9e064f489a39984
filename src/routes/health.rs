use actix_web::{get, Responder};

#[get("/")]
pub async fn health_check() -> impl Responder {
    "Welcome to the Contact Relay API v0.1.0!"
}
