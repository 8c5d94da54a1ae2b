//! Tiptally library: calculator logic, preference store, share seam, UI.

pub mod app;
pub mod calc;
pub mod prefs;
pub mod share;
pub mod theme;
pub mod widgets;
pub mod screens;
