use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// The opposite state; applying twice returns the original.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recurrence {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    None,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Biweekly => "Bi-weekly",
            Self::Monthly => "Monthly",
            Self::None => "None",
        }
    }

    pub const ALL: &'static [Recurrence] = &[
        Recurrence::Daily,
        Recurrence::Weekly,
        Recurrence::Biweekly,
        Recurrence::Monthly,
        Recurrence::None,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn matches(&self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == TaskStatus::Pending,
            Self::Completed => status == TaskStatus::Completed,
        }
    }
}

pub const CATEGORY_OPTIONS: &[&str] = &["Household", "Kitchen", "Cleaning", "Yard", "Other"];

pub const ROOM_OPTIONS: &[&str] = &[
    "Kitchen",
    "Living Room",
    "Bathroom",
    "Bedroom",
    "Laundry Room",
    "Outdoor",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub assigned_to: String,
    pub due: NaiveDate,
    pub status: TaskStatus,
    pub recurring: Recurrence,
    pub category: String,
    pub room: String,
}

/// Append a chore. The title and a parseable `YYYY-MM-DD` due date are
/// required; a failed draft leaves the collection untouched.
pub fn add_task(
    tasks: &mut Vec<Task>,
    title: &str,
    assigned_to: &str,
    due: &str,
    recurring: Recurrence,
    category: &str,
    room: &str,
) -> bool {
    let title = title.trim();
    if title.is_empty() {
        return false;
    }
    let Ok(due) = NaiveDate::parse_from_str(due.trim(), "%Y-%m-%d") else {
        return false;
    };

    tasks.push(Task {
        id: tasks.len() as u32 + 1,
        title: title.to_string(),
        assigned_to: assigned_to.to_string(),
        due,
        status: TaskStatus::Pending,
        recurring,
        category: category.to_string(),
        room: room.to_string(),
    });
    true
}

/// Flip the completion state of exactly the matching task; every other
/// record is left as-is.
pub fn toggle_status(tasks: &mut [Task], id: u32) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.status = task.status.toggled();
    }
}

/// Whether a task survives the combined status and assignee criteria.
/// `None` is the "everyone" sentinel for the assignee.
pub fn visible(task: &Task, status: StatusFilter, assignee: Option<&str>) -> bool {
    if !status.matches(task.status) {
        return false;
    }
    match assignee {
        Some(name) => task.assigned_to == name,
        None => true,
    }
}

/// Distinct assignees of the *unfiltered* collection, in first-seen order.
/// Drives the assignee selector, so names with zero visible tasks stay listed.
pub fn assignees(tasks: &[Task]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for task in tasks {
        if !names.iter().any(|n| n == &task.assigned_to) {
            names.push(task.assigned_to.clone());
        }
    }
    names
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid sample date")
}

pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            title: "Take out trash".into(),
            assigned_to: "John Smith".into(),
            due: date(2023, 10, 16),
            status: TaskStatus::Pending,
            recurring: Recurrence::Weekly,
            category: "Household".into(),
            room: "Kitchen".into(),
        },
        Task {
            id: 2,
            title: "Wash dishes".into(),
            assigned_to: "Emma Smith".into(),
            due: date(2023, 10, 16),
            status: TaskStatus::Completed,
            recurring: Recurrence::Daily,
            category: "Kitchen".into(),
            room: "Kitchen".into(),
        },
        Task {
            id: 3,
            title: "Vacuum living room".into(),
            assigned_to: "Sarah Smith".into(),
            due: date(2023, 10, 18),
            status: TaskStatus::Pending,
            recurring: Recurrence::Weekly,
            category: "Cleaning".into(),
            room: "Living Room".into(),
        },
        Task {
            id: 4,
            title: "Mow the lawn".into(),
            assigned_to: "Michael Smith".into(),
            due: date(2023, 10, 20),
            status: TaskStatus::Pending,
            recurring: Recurrence::Biweekly,
            category: "Yard".into(),
            room: "Outdoor".into(),
        },
        Task {
            id: 5,
            title: "Clean bathroom".into(),
            assigned_to: "Sarah Smith".into(),
            due: date(2023, 10, 17),
            status: TaskStatus::Pending,
            recurring: Recurrence::Weekly,
            category: "Cleaning".into(),
            room: "Bathroom".into(),
        },
        Task {
            id: 6,
            title: "Do laundry".into(),
            assigned_to: "John Smith".into(),
            due: date(2023, 10, 19),
            status: TaskStatus::Pending,
            recurring: Recurrence::Weekly,
            category: "Household".into(),
            room: "Laundry Room".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut tasks = sample_tasks();
        let before: Vec<TaskStatus> = tasks.iter().map(|t| t.status).collect();

        toggle_status(&mut tasks, 3);
        assert_eq!(tasks[2].status, TaskStatus::Completed);
        toggle_status(&mut tasks, 3);

        let after: Vec<TaskStatus> = tasks.iter().map(|t| t.status).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn toggle_touches_exactly_one_task() {
        let mut tasks = sample_tasks();
        toggle_status(&mut tasks, 1);

        assert_eq!(tasks[0].status, TaskStatus::Completed);
        for task in &tasks[1..] {
            let original = sample_tasks()[(task.id - 1) as usize].status;
            assert_eq!(task.status, original);
        }
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut tasks = sample_tasks();
        toggle_status(&mut tasks, 99);
        assert_eq!(
            tasks.iter().filter(|t| t.status.is_completed()).count(),
            1
        );
    }

    #[test]
    fn filter_combines_status_and_assignee() {
        let tasks = sample_tasks();

        let pending_sarah: Vec<u32> = tasks
            .iter()
            .filter(|t| visible(t, StatusFilter::Pending, Some("Sarah Smith")))
            .map(|t| t.id)
            .collect();
        assert_eq!(pending_sarah, vec![3, 5]);

        let completed: Vec<u32> = tasks
            .iter()
            .filter(|t| visible(t, StatusFilter::Completed, None))
            .map(|t| t.id)
            .collect();
        assert_eq!(completed, vec![2]);

        // The sentinel filter passes everything through.
        assert_eq!(
            tasks.iter().filter(|t| visible(t, StatusFilter::All, None)).count(),
            tasks.len()
        );
    }

    #[test]
    fn assignees_are_unique_in_first_seen_order() {
        let tasks = sample_tasks();
        assert_eq!(
            assignees(&tasks),
            vec!["John Smith", "Emma Smith", "Sarah Smith", "Michael Smith"]
        );
    }

    #[test]
    fn add_task_rejects_blank_title_and_bad_date() {
        let mut tasks = sample_tasks();
        assert!(!add_task(&mut tasks, "  ", "John Smith", "2023-10-22", Recurrence::Weekly, "Household", "Kitchen"));
        assert!(!add_task(&mut tasks, "Water plants", "John Smith", "soon", Recurrence::Weekly, "Household", "Kitchen"));
        assert_eq!(tasks.len(), 6);
    }

    #[test]
    fn add_task_appends_pending_with_next_id() {
        let mut tasks = sample_tasks();
        assert!(add_task(&mut tasks, "Water plants", "Emma Smith", "2023-10-22", Recurrence::Daily, "Household", "Living Room"));
        let added = tasks.last().unwrap();
        assert_eq!(added.id, 7);
        assert_eq!(added.status, TaskStatus::Pending);
        assert_eq!(added.assigned_to, "Emma Smith");
    }
}
