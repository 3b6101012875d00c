//! Score V1 reproduction for retrospective accuracy display.
//!
//! Nothing here affects gameplay; the simulator replays an already judged
//! event stream against the current windows.

mod simulator;

pub use simulator::*;
