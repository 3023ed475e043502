pub mod sample;
pub mod ticket;
