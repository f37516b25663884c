//! Cache key layout

/// Key holding the serialized full task collection.
pub const ALL_TASKS_KEY: &str = "all_tasks";

/// Key holding a single serialized task.
pub fn task_key(id: i64) -> String {
    format!("tasks_{}", id)
}
