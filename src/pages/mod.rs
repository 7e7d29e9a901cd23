pub mod board;
pub mod home;
