pub mod dashboard;
pub mod executive;
pub mod forecast;
pub mod health;
