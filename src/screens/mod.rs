mod calculator;
mod header;

pub use calculator::CalculatorScreen;
pub use header::HeaderBar;
