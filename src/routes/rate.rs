use log::error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{post, State};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::RecordError;
use crate::macros::database_error_handeler::db_handle_get_error_http;
use crate::modules::helpers::validation::validate_rating;
use crate::modules::models::general::DbPool;
use crate::modules::models::rate::Rate;

#[derive(Deserialize)]
pub struct NewRateData {
    pub car_id: i32,
    pub rating: i32,
}

/// # rate a car
/// rejects ratings outside 1-5 before anything touches the database
#[post("/rate", format = "json", data = "<rate>")]
pub fn save_one(rate: Json<NewRateData>, pool: &State<DbPool>) -> (Status, Json<Value>) {
    let rate = rate.into_inner();

    if let Err(error) = validate_rating(rate.rating) {
        return (
            Status::UnprocessableEntity,
            Json(json!({ "error": error.to_string() })),
        );
    }

    let conn = &mut db_handle_get_error_http!(
        pool.get(),
        "routes/rate:save_one",
        "database connection"
    );

    match Rate::create(conn, rate.car_id, rate.rating) {
        Ok(_) => (Status::Ok, Json(json!({ "message": "Rate record created." }))),
        Err(RecordError::NotFound(_)) => (
            Status::BadRequest,
            Json(json!({ "error": "Car record doesn't exists." })),
        ),
        Err(error) => {
            error!(target: "routes/rate:save_one", "Error saving rate. (error: {})", error);
            (
                Status::InternalServerError,
                Json(json!({ "error": error.to_string() })),
            )
        }
    }
}
