//! The detective board: index cards that can be dragged around, each with a
//! pin that threads can be pulled from and dropped onto other pins.
//!
//! | Module | Role |
//! |--------|------|
//! | `types` | ids, points, seeds |
//! | `edges` | undirected edge set with toggle semantics |
//! | `state` | the board model: z-ordered cards and their edges |
//! | `drag` | pointer-drag state machine |
//! | `render` | overlay frame description and canvas drawing |
//! | `component` | Leptos components, layout measurement, listeners |

mod component;
mod drag;
mod edges;
mod render;
mod state;
mod types;

pub use component::DetectiveBoard;
pub use types::CardSeed;
