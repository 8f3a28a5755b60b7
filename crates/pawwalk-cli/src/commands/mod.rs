pub mod bookings;
pub mod context;
pub mod location;
pub mod remind;
pub mod session;
pub mod walkers;

mod display;
mod input;
