//! API layer - HTTP endpoints and page rendering

pub mod health;
pub mod pages;
pub mod predict;
pub mod router;
pub mod session;
pub mod state;
pub mod types;

pub use router::{create_car_price_router, create_placement_router};
pub use state::AppState;
