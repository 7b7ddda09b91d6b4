pub mod vehicle_api;

pub mod models {
    pub mod car;
    pub mod rate;

    pub mod general;
}

pub mod helpers {
    pub mod logging;
    pub mod math;
    pub mod validation;
}
