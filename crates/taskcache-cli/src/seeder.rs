//! Fake task generation.

use fake::Fake;
use fake::faker::boolean::en::Boolean;
use fake::faker::lorem::en::{Sentence, Words};

use taskcache_models::TaskInput;

/// Generates `count` tasks with lorem titles. Roughly a quarter are completed.
pub fn generate_tasks(count: usize) -> Vec<TaskInput> {
    (0..count).map(|_| generate_task()).collect()
}

fn generate_task() -> TaskInput {
    let words: Vec<String> = Words(2..5).fake();
    let title = capitalize(&words.join(" "));
    let description: String = Sentence(4..12).fake();
    let completed: bool = Boolean(25).fake();

    TaskInput::new(title, description).completed(completed)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_generate_tasks_count() {
        assert_eq!(generate_tasks(0).len(), 0);
        assert_eq!(generate_tasks(25).len(), 25);
    }

    #[test]
    fn test_generated_tasks_are_valid() {
        for task in generate_tasks(50) {
            assert!(task.validate().is_ok(), "invalid task: {task:?}");
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("buy milk"), "Buy milk");
        assert_eq!(capitalize(""), "");
    }
}
