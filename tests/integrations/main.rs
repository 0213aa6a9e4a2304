//! Scenarios spanning the catalog, resolver and name overlay.

mod door_scenario;
mod session_lifecycle;
