use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Column order of the routine board: Monday through Sunday.
pub const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningTask {
    pub id: String,
    pub day: Weekday,
    pub task: String,
    pub description: String,
    pub completed: bool,
}

/// Append a routine task. Both a selected day and a non-blank task name are
/// required; a failed draft leaves the collection untouched.
pub fn add_task(
    tasks: &mut Vec<CleaningTask>,
    day: Option<Weekday>,
    task: &str,
    description: &str,
) -> bool {
    let name = task.trim();
    let Some(day) = day else {
        return false;
    };
    if name.is_empty() {
        return false;
    }

    tasks.push(CleaningTask {
        id: (tasks.len() + 1).to_string(),
        day,
        task: name.to_string(),
        description: description.trim().to_string(),
        completed: false,
    });
    true
}

/// Flip the completion flag of exactly the matching task.
pub fn toggle_completed(tasks: &mut [CleaningTask], id: &str) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.completed = !task.completed;
    }
}

/// The day's column, in insertion order.
pub fn tasks_for_day(tasks: &[CleaningTask], day: Weekday) -> Vec<&CleaningTask> {
    tasks.iter().filter(|t| t.day == day).collect()
}

pub fn sample_cleaning_tasks() -> Vec<CleaningTask> {
    vec![
        CleaningTask {
            id: "1".into(),
            day: Weekday::Fri,
            task: "Clean Bedroom".into(),
            description: "Vacuum, dust, and organize bedroom".into(),
            completed: false,
        },
        CleaningTask {
            id: "2".into(),
            day: Weekday::Sat,
            task: "Clean Bathroom".into(),
            description: "Clean shower, toilet, and sink".into(),
            completed: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_one_fresh_pending_task_to_its_day() {
        let mut tasks = sample_cleaning_tasks();
        let before: Vec<Vec<String>> = DAYS
            .iter()
            .map(|d| tasks_for_day(&tasks, *d).iter().map(|t| t.id.clone()).collect())
            .collect();

        assert!(add_task(&mut tasks, Some(Weekday::Fri), "Mop floor", ""));
        assert_eq!(tasks.len(), 3);

        let added = tasks.last().unwrap();
        assert_eq!(added.id, "3");
        assert!(!added.completed);
        assert!(tasks.iter().filter(|t| t.id == added.id).count() == 1);

        // Friday gained the new task; every other day's view is unchanged.
        for (day, before_ids) in DAYS.iter().zip(&before) {
            let after_ids: Vec<String> =
                tasks_for_day(&tasks, *day).iter().map(|t| t.id.clone()).collect();
            if *day == Weekday::Fri {
                assert_eq!(after_ids.len(), before_ids.len() + 1);
                assert_eq!(after_ids.last().unwrap(), "3");
            } else {
                assert_eq!(&after_ids, before_ids);
            }
        }
    }

    #[test]
    fn add_requires_both_day_and_task_name() {
        let mut tasks = sample_cleaning_tasks();
        assert!(!add_task(&mut tasks, None, "Mop floor", ""));
        assert!(!add_task(&mut tasks, Some(Weekday::Mon), "   ", ""));
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn toggle_flips_one_flag_and_is_reversible() {
        let mut tasks = sample_cleaning_tasks();

        toggle_completed(&mut tasks, "2");
        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);

        toggle_completed(&mut tasks, "2");
        assert!(!tasks[1].completed);

        toggle_completed(&mut tasks, "nope");
        assert!(tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn day_partition_preserves_insertion_order() {
        let mut tasks = sample_cleaning_tasks();
        add_task(&mut tasks, Some(Weekday::Fri), "Mop floor", "");
        add_task(&mut tasks, Some(Weekday::Fri), "Wipe mirrors", "");

        let friday: Vec<&str> =
            tasks_for_day(&tasks, Weekday::Fri).iter().map(|t| t.task.as_str()).collect();
        assert_eq!(friday, vec!["Clean Bedroom", "Mop floor", "Wipe mirrors"]);
    }
}
