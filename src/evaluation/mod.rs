//! Route evaluation: arc-by-arc cost re-accumulation and structural checks.

mod evaluator;

pub use evaluator::{RouteEvaluator, Violation, ViolationType};
