pub mod booking_repository;
pub mod car_repository;
pub mod memory;
pub mod user_repository;
