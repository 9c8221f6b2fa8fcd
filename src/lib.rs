//! State cores for small interactive desk widgets.
//!
//! Each widget is a self-contained state machine driven by discrete user
//! events: a four-function calculator, a persisted todo list, a persisted
//! shopping cart, signup-form validation and an image slider. Widgets render
//! by producing plain view-model values; painting them is left to the
//! embedding shell (the `deskpad` binary ships a terminal one).

pub mod calculator;
pub mod cart;
pub mod config;
pub mod events;
pub mod form;
pub mod slider;
pub mod storage;
pub mod todo;

pub use config::Config;
