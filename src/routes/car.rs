use std::collections::HashMap;

use log::error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, State};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::{LookupError, RecordError};
use crate::macros::database_error_handeler::db_handle_get_error_http;
use crate::modules::helpers::validation::normalize_name;
use crate::modules::models::car::Car;
use crate::modules::models::general::DbPool;
use crate::modules::vehicle_api;

#[derive(Deserialize)]
pub struct NewCarData {
    pub make: String,
    pub model: String,
}

/// # list all cars
/// keyed by database id
#[get("/cars")]
pub fn get_all(pool: &State<DbPool>) -> (Status, Json<Value>) {
    let conn = &mut db_handle_get_error_http!(
        pool.get(),
        "routes/car:get_all",
        "database connection"
    );
    let cars = db_handle_get_error_http!(Car::get_all(conn), "routes/car:get_all", "cars");

    let by_id: HashMap<i32, Car> = cars.into_iter().map(|car| (car.id, car)).collect();
    (Status::Ok, Json(json!(by_id)))
}

/// # register a new car
/// the make/model pair has to exist in the vehicle registry before the
/// record is created. the registry entries themselves are discarded.
#[post("/cars", format = "json", data = "<car>")]
pub async fn save_one(car: Json<NewCarData>, pool: &State<DbPool>) -> (Status, Json<Value>) {
    let car = car.into_inner();
    let make = normalize_name(&car.make);
    let model = normalize_name(&car.model);

    if let Err(error) = vehicle_api::lookup_model(&make, &model).await {
        let status = match &error {
            LookupError::Transport(_) | LookupError::Service(_) => Status::InternalServerError,
            LookupError::Malformed(_) => Status::BadRequest,
            LookupError::NoMatch { .. } => Status::NotFound,
        };
        return (status, Json(json!({ "external_api_error": error.to_string() })));
    }

    let conn = &mut db_handle_get_error_http!(
        pool.get(),
        "routes/car:save_one",
        "database connection"
    );

    match Car::create(conn, &make, &model) {
        Ok(_) => (Status::Ok, Json(json!({ "message": "Car record created." }))),
        Err(RecordError::AlreadyExists(_)) => {
            (Status::BadRequest, Json(json!({ "error": "Record exists." })))
        }
        Err(error) => {
            error!(target: "routes/car:save_one", "Error saving car. (error: {})", error);
            (
                Status::InternalServerError,
                Json(json!({ "error": error.to_string() })),
            )
        }
    }
}

/// # delete a car
/// rates of the car go with it
#[delete("/cars/<id>")]
pub fn delete_one(id: i32, pool: &State<DbPool>) -> (Status, Json<Value>) {
    let conn = &mut db_handle_get_error_http!(
        pool.get(),
        "routes/car:delete_one",
        "database connection"
    );

    match Car::delete_by_id(conn, id) {
        Ok(()) => (Status::Ok, Json(json!("Record Deleted"))),
        Err(RecordError::NotFound(_)) => {
            (Status::NotFound, Json(json!("Record does not exist.")))
        }
        Err(error) => {
            error!(target: "routes/car:delete_one", "Error deleting car. (error: {})", error);
            (
                Status::InternalServerError,
                Json(json!({ "error": error.to_string() })),
            )
        }
    }
}

/// # rate counts per rated car
#[get("/popular")]
pub fn get_popular(pool: &State<DbPool>) -> (Status, Json<Value>) {
    let conn = &mut db_handle_get_error_http!(
        pool.get(),
        "routes/car:get_popular",
        "database connection"
    );
    let rows = db_handle_get_error_http!(
        Car::popular(conn),
        "routes/car:get_popular",
        "rate counts"
    );

    let by_id: HashMap<i32, HashMap<String, i64>> = rows
        .into_iter()
        .map(|row| {
            (
                row.id,
                HashMap::from([(format!("{} {}", row.make, row.model), row.rating_count)]),
            )
        })
        .collect();
    (Status::Ok, Json(json!(by_id)))
}
