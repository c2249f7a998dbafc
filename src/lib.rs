pub mod config;
pub mod core;
pub mod session;

pub use crate::core::converter::convert;
pub use crate::core::edit::EditInstruction;
pub use crate::core::hangul_fsm::{CompositionState, HangulFsm, KeyEvent};
pub use crate::core::jamo_mapper::JamoIndex;
pub use crate::session::{InputMode, InputSession};
