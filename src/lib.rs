pub mod api;
pub mod telemetry;

pub mod domain {
    pub mod flatten;
    pub mod models;
}

pub mod infrastructure {
    pub mod config;
    pub mod query;
    pub mod state;
    pub mod upstream;
    pub mod views;
}

pub mod services {
    pub mod errors;
    pub mod reports;
}
