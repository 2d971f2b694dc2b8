//! Solution invocation with failure capture
//!
//! Both an `Err` return and a panic become [`Invocation::Crashed`], so a
//! broken solution never takes the scoring run down with it.

use std::panic::AssertUnwindSafe;

use super::registry::Solution;
use crate::grid::Grid;

/// What calling a solution on one input produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Produced(Grid),
    Crashed(String),
}

impl Invocation {
    pub fn is_crash(&self) -> bool {
        matches!(self, Invocation::Crashed(_))
    }
}

/// Call `solution` on `input`, converting errors and panics into crashes
pub fn invoke(solution: &Solution, input: &Grid) -> Invocation {
    match std::panic::catch_unwind(AssertUnwindSafe(|| (solution.func)(input))) {
        Ok(Ok(grid)) => Invocation::Produced(grid),
        Ok(Err(err)) => {
            let message = format!("{:#}", err);
            tracing::debug!("{} returned an error: {}", solution.task, message);
            Invocation::Crashed(message)
        }
        Err(panic) => {
            let message = if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            tracing::debug!("{} panicked: {}", solution.task, message);
            Invocation::Crashed(message)
        }
    }
}
