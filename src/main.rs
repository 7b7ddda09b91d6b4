use rocket::{launch, Build, Rocket};

use car_rating_api::build_rocket;
use car_rating_api::modules::helpers::logging::setup_logging;
use car_rating_api::modules::models::general::{establish_pool, run_migrations};

#[launch]
fn rocket() -> Rocket<Build> {
    setup_logging().expect("Failed to setup logging");

    let pool = establish_pool();
    {
        let mut conn = pool.get().expect("Failed to get a database connection");
        run_migrations(&mut conn);
    }

    // start the webserver
    build_rocket(pool)
}
