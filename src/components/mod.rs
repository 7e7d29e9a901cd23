//! Reusable UI components.

pub mod detective_board;
