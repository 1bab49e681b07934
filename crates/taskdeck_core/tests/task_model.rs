use chrono::{TimeZone, Utc};
use taskdeck_core::{Priority, Task, TaskFilter, TaskPatch, TaskStats};

fn task(id: u64, priority: Priority, category: &str, completed: bool) -> Task {
    Task {
        id,
        title: format!("task {id}"),
        completed,
        priority,
        category: category.to_string(),
        created_at: Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0).unwrap(),
    }
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = task(7, Priority::High, "work", true);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "task 7");
    assert_eq!(json["completed"], true);
    assert_eq!(json["priority"], "high");
    assert_eq!(json["category"], "work");
    assert_eq!(json["created_at"], "2026-02-13T10:00:00Z");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn custom_priority_is_kept_verbatim_on_the_wire() {
    let task = task(1, Priority::from("Someday"), "home", false);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["priority"], "Someday");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert!(matches!(&decoded.priority, Priority::Custom(custom) if custom.as_str() == "Someday"));
    assert_eq!(decoded.priority.rank(), 0);
}

#[test]
fn priority_ranks_order_high_over_medium_over_low() {
    assert!(Priority::High.rank() > Priority::Medium.rank());
    assert!(Priority::Medium.rank() > Priority::Low.rank());
    assert!(Priority::Low.rank() > Priority::from("x").rank());
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn known_labels_never_become_custom() {
    for text in ["high", " HIGH ", "High"] {
        assert_eq!(Priority::from(text), Priority::High);
    }
    let decoded: Priority = serde_json::from_value(serde_json::json!(" Medium ")).unwrap();
    assert_eq!(decoded, Priority::Medium);
}

#[test]
fn stats_and_filter_agree_on_colliding_labels() {
    let tasks = [
        task(1, Priority::High, "work", false),
        task(2, Priority::from(" High "), "work", false),
        task(3, Priority::from("urgent"), "work", false),
    ];

    let stats = TaskStats::collect(&tasks);
    let high = TaskFilter {
        priority: Some(Priority::High),
        ..TaskFilter::default()
    };
    let matched = tasks.iter().filter(|task| high.matches(task)).count();

    assert_eq!(stats.priority_stats.get("high"), Some(&2));
    assert_eq!(matched, 2);
    assert_eq!(stats.priority_stats.get("urgent"), Some(&1));
}

#[test]
fn empty_patch_leaves_task_unchanged() {
    let original = task(3, Priority::Low, "errands", false);
    let mut patched = original.clone();

    assert!(TaskPatch::default().is_empty());
    patched.apply(TaskPatch::default());
    assert_eq!(patched, original);
}

#[test]
fn patch_applies_only_set_fields() {
    let mut task = task(3, Priority::Low, "errands", false);

    task.apply(TaskPatch {
        category: Some("home".to_string()),
        completed: Some(true),
        ..TaskPatch::default()
    });

    assert_eq!(task.category, "home");
    assert!(task.completed);
    assert_eq!(task.priority, Priority::Low);
    assert_eq!(task.title, "task 3");
}

#[test]
fn filter_combines_criteria_with_and() {
    let work_high = task(1, Priority::High, "work", false);
    let work_done = task(2, Priority::High, "work", true);
    let home_high = task(3, Priority::High, "home", false);

    let filter = TaskFilter {
        category: Some("work".to_string()),
        completed: Some(false),
        priority: Some(Priority::High),
    };

    assert!(filter.matches(&work_high));
    assert!(!filter.matches(&work_done));
    assert!(!filter.matches(&home_high));
    assert!(TaskFilter::default().matches(&work_done));
}

#[test]
fn stats_collect_counts_present_values_only() {
    let tasks = [
        task(1, Priority::High, "work", true),
        task(2, Priority::Low, "work", false),
        task(3, Priority::High, "home", false),
    ];

    let stats = TaskStats::collect(&tasks);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.completion_rate, 33);
    assert_eq!(stats.priority_stats.get("high"), Some(&2));
    assert_eq!(stats.priority_stats.get("low"), Some(&1));
    assert_eq!(stats.priority_stats.get("medium"), None);
    assert_eq!(stats.category_stats.get("work"), Some(&2));
    assert_eq!(stats.category_stats.get("home"), Some(&1));
}

#[test]
fn stats_over_empty_collection_are_zero() {
    let stats = TaskStats::collect(&[]);
    assert_eq!(stats, TaskStats::default());
    assert_eq!(stats.completion_rate, 0);
}
