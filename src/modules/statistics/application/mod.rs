pub mod domain;
pub mod ports;
pub mod services;
pub mod statistics_use_cases;
