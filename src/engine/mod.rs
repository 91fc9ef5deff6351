//! The evaluation core: condition and rule evaluation, visibility
//! resolution, dependency extraction and visibility tracing.
//!
//! Everything in this module is a pure, synchronous function of its inputs.
//! Malformed rule data (unknown operators or operations) evaluates as
//! unsatisfied rather than erroring, so a defective rule hides a field
//! instead of crashing the host's render pass.

pub mod condition;
pub mod deps;
pub mod rule;
pub mod trace;
pub mod visibility;

pub use condition::evaluate_condition;
pub use deps::{dependencies_of, dependency_map};
pub use rule::evaluate_rule;
pub use trace::{ConditionTrace, RuleTrace, VisibilityTrace, explain_visibility, trace_visibility};
pub use visibility::{VisibilityMap, is_visible, resolve_visibility};
