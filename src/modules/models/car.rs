use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::select;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Integer, Text};
use diesel::sqlite::SqliteConnection;
use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::RecordError;
use crate::schema::cars;

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = cars)]
pub struct NewCar {
    pub make: String,
    pub model: String,
}

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
pub struct Car {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub avg_rating: f64,
}

/// One row of the popularity listing: a car and how many rates it has.
#[derive(QueryableByName, Serialize, PartialEq, Debug, Clone)]
pub struct PopularCar {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Text)]
    pub make: String,
    #[diesel(sql_type = Text)]
    pub model: String,
    #[diesel(sql_type = BigInt)]
    pub rating_count: i64,
}

impl Car {
    /********** INSERTERS **********/
    /// # create a car record
    /// expects `make_in` and `model_in` already normalized. rejects the
    /// insert when the same make/model pair is present.
    pub fn create(
        conn: &mut SqliteConnection,
        make_in: &str,
        model_in: &str,
    ) -> Result<Car, RecordError> {
        if Car::exists(conn, make_in, model_in)? {
            return Err(RecordError::AlreadyExists(format!(
                "{} {}",
                make_in, model_in
            )));
        }

        let new_car = NewCar {
            make: make_in.to_string(),
            model: model_in.to_string(),
        };

        let car: Car = diesel::insert_into(cars::table)
            .values(&new_car)
            .get_result(conn)?;

        info!(target: "saving_car", "car {} {} saved with id {}", car.make, car.model, car.id);
        Ok(car)
    }

    /********** GETTERS **********/
    pub fn exists(
        conn: &mut SqliteConnection,
        make_in: &str,
        model_in: &str,
    ) -> QueryResult<bool> {
        use crate::schema::cars::dsl::{cars, make, model};

        select(exists(
            cars.filter(make.eq(make_in)).filter(model.eq(model_in)),
        ))
        .get_result(conn)
    }

    pub fn exists_by_id(conn: &mut SqliteConnection, id_in: i32) -> QueryResult<bool> {
        use crate::schema::cars::dsl::{cars, id};

        select(exists(cars.filter(id.eq(id_in)))).get_result(conn)
    }

    pub fn get_by_id(conn: &mut SqliteConnection, id_in: i32) -> QueryResult<Car> {
        use crate::schema::cars::dsl::{cars, id};

        cars.filter(id.eq(id_in)).first::<Car>(conn)
    }

    pub fn get_all(conn: &mut SqliteConnection) -> QueryResult<Vec<Car>> {
        use crate::schema::cars::dsl::cars;

        cars.load::<Car>(conn)
    }

    /// # list every car with at least one rate
    /// returns the rate count per car; the inner join drops unrated cars
    pub fn popular(conn: &mut SqliteConnection) -> QueryResult<Vec<PopularCar>> {
        sql_query(
            "SELECT cars.id, cars.make, cars.model, COUNT(rates.id) AS rating_count \
             FROM cars \
             INNER JOIN rates ON rates.car_id = cars.id \
             GROUP BY cars.id, cars.make, cars.model",
        )
        .load(conn)
    }

    /********** SETTERS **********/
    pub fn update_avg_rating(
        conn: &mut SqliteConnection,
        id_in: i32,
        avg: f64,
    ) -> QueryResult<()> {
        use crate::schema::cars::dsl::{avg_rating, cars, id};

        diesel::update(cars.filter(id.eq(id_in)))
            .set(avg_rating.eq(avg))
            .execute(conn)?;

        Ok(())
    }

    /********** DELETERS **********/
    /// # delete a car record
    /// the schema cascades the delete to the car's rates
    pub fn delete_by_id(conn: &mut SqliteConnection, id_in: i32) -> Result<(), RecordError> {
        use crate::schema::cars::dsl::{cars, id};

        let deleted = diesel::delete(cars.filter(id.eq(id_in))).execute(conn)?;
        if deleted == 0 {
            return Err(RecordError::NotFound(format!("car {}", id_in)));
        }

        info!(target: "deleting_car", "car {} deleted", id_in);
        Ok(())
    }
}
