use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::RecordError;
use crate::modules::helpers::math::Math;
use crate::modules::models::car::Car;
use crate::schema::rates;

#[derive(Insertable, Serialize, Debug, Clone, Deserialize)]
#[diesel(table_name = rates)]
pub struct NewRate {
    pub car_id: i32,
    pub rating: i32,
}

#[derive(Queryable, Serialize, Identifiable, PartialEq, Debug, Clone, Deserialize)]
pub struct Rate {
    pub id: i32,
    pub car_id: i32,
    pub rating: i32,
}

impl Rate {
    /********** INSERTERS **********/
    /// # create a rate record for a car
    /// the insert and the average recompute commit together; a failed
    /// recompute must not leave the rate behind with a stale average.
    /// range checking of `rating_in` belongs to the input layer.
    pub fn create(
        conn: &mut SqliteConnection,
        car_id_in: i32,
        rating_in: i32,
    ) -> Result<Rate, RecordError> {
        if !Car::exists_by_id(conn, car_id_in)? {
            return Err(RecordError::NotFound(format!("car {}", car_id_in)));
        }

        let rate = conn.transaction::<Rate, diesel::result::Error, _>(|conn| {
            let rate: Rate = diesel::insert_into(rates::table)
                .values(&NewRate {
                    car_id: car_id_in,
                    rating: rating_in,
                })
                .get_result(conn)?;

            let ratings: Vec<f64> = Rate::for_car(conn, car_id_in)?
                .iter()
                .map(|rate| rate.rating as f64)
                .collect();
            Car::update_avg_rating(conn, car_id_in, Math::mean(&ratings))?;

            Ok(rate)
        })?;

        info!(target: "saving_rate", "rate {} for car {} saved", rate.rating, rate.car_id);
        Ok(rate)
    }

    /********** GETTERS **********/
    pub fn for_car(conn: &mut SqliteConnection, car_id_in: i32) -> QueryResult<Vec<Rate>> {
        use crate::schema::rates::dsl::{car_id, rates};

        rates.filter(car_id.eq(car_id_in)).load::<Rate>(conn)
    }

    pub fn get_all(conn: &mut SqliteConnection) -> QueryResult<Vec<Rate>> {
        use crate::schema::rates::dsl::rates;

        rates.load::<Rate>(conn)
    }
}
