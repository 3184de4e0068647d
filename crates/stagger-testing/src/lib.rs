//! Testing utilities and harness for stagger

pub mod assertions;
pub mod host;
pub mod scripted_source;

pub use assertions::*;
pub use host::*;
pub use scripted_source::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::host::{settle, MeasureHost};
    pub use crate::scripted_source::{ScriptedSection, ScriptedSource};
}
