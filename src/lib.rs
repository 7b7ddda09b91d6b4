use rocket::serde::json::Json;
use rocket::{get, routes, Build, Rocket};
use serde_json::{json, Value};

pub mod errors;
pub mod schema;

pub mod modules;
pub mod routes {
    pub mod car;
    pub mod rate;
}

pub(crate) mod macros {
    pub(crate) mod database_error_handeler;
}

use crate::modules::models::general::DbPool;

#[get("/")]
fn index() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

/// # assemble the webserver
/// the pool moves into rocket managed state so every handler checks a
/// connection out per request
pub fn build_rocket(pool: DbPool) -> Rocket<Build> {
    rocket::build().manage(pool).mount(
        "/",
        routes![
            index,
            // cars
            routes::car::get_all,
            routes::car::save_one,
            routes::car::delete_one,
            routes::car::get_popular,
            // rates
            routes::rate::save_one,
        ],
    )
}
