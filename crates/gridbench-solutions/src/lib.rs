//! Shipped solutions
//!
//! Each solution lives in its own file under `tasks/`. Its score depends on
//! the length of that file, so the registry records it with `include_str!`.

pub mod tasks;

use gridbench_core::{SolutionFn, SolutionRegistry, TaskId};

/// Register one solution, keyed by its task number
macro_rules! solution {
    ($registry:ident, $id:literal, $module:ident) => {
        register(
            &mut $registry,
            $id,
            tasks::$module::solve,
            include_str!(concat!("tasks/", stringify!($module), ".rs")).len(),
        )
    };
}

fn register(registry: &mut SolutionRegistry, id: u16, func: SolutionFn, source_len: usize) {
    match TaskId::new(id, u16::MAX) {
        Ok(task) => {
            registry.register(task, func, source_len);
        }
        Err(e) => tracing::error!("Skipping solution {}: {}", id, e),
    }
}

/// The default registry with every shipped solution
pub fn registry() -> SolutionRegistry {
    let mut registry = SolutionRegistry::new();
    solution!(registry, 1, task001);
    solution!(registry, 2, task002);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let registry = registry();
        assert_eq!(registry.len(), 2);

        let ids: Vec<u16> = registry.task_ids().map(|id| id.get()).collect();
        assert_eq!(ids, vec![1, 2]);

        let solution = registry.get(TaskId::new(1, 400).unwrap()).unwrap();
        assert_eq!(
            solution.source_len,
            include_str!("tasks/task001.rs").len()
        );
    }
}
