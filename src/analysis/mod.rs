//! Pure analysis stages: indicator engine, trend classifier, comparative
//! evaluator. Everything here is a function of its explicit inputs so the
//! command layer and tests can drive it without any I/O.

pub mod comparison;
pub mod indicators;
pub mod trend;

pub use comparison::compare;
pub use indicators::compute_indicators;
pub use trend::build_verdict;
