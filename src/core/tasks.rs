//! Date-bucket classification of assigned tasks.

use crate::models::task::Task;
use chrono::NaiveDate;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Today,
    Overdue,
    Upcoming,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 4] = [
        TaskFilter::All,
        TaskFilter::Today,
        TaskFilter::Overdue,
        TaskFilter::Upcoming,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Today => "Today",
            TaskFilter::Overdue => "Overdue",
            TaskFilter::Upcoming => "Upcoming",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TaskFilter::All => "📋",
            TaskFilter::Today => "📅",
            TaskFilter::Overdue => "⚠️",
            TaskFilter::Upcoming => "🔮",
        }
    }

    /// Title and hint shown when the bucket is empty.
    pub fn empty_message(&self) -> (&'static str, &'static str) {
        match self {
            TaskFilter::All => (
                "No Tasks Assigned",
                "You don't have any assigned tasks at the moment.",
            ),
            TaskFilter::Today => ("No Tasks for Today", "You're all caught up for today! 🎉"),
            TaskFilter::Overdue => ("No Overdue Tasks", "Great job staying on track!"),
            TaskFilter::Upcoming => ("No Upcoming Tasks", "No upcoming tasks scheduled."),
        }
    }
}

/// Whether `task` belongs to the `filter` bucket relative to `today`.
pub fn matches_filter(task: &Task, filter: TaskFilter, today: NaiveDate) -> bool {
    let start = task.start_date;
    let end = task.end_date;

    match filter {
        TaskFilter::All => true,
        // Overlapping conditions, each admitting a match on its own:
        // an inverted range (end before start) still matches on either boundary.
        TaskFilter::Today => (start <= today && end >= today) || start == today || end == today,
        TaskFilter::Overdue => end < today && !task.status.is_completed(),
        TaskFilter::Upcoming => start > today,
    }
}

/// Stable, order-preserving subset of `tasks` in the given bucket.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter, today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| matches_filter(t, filter, today))
        .cloned()
        .collect()
}

pub fn count_by_filter(tasks: &[Task], filter: TaskFilter, today: NaiveDate) -> usize {
    tasks
        .iter()
        .filter(|t| matches_filter(t, filter, today))
        .count()
}

/// Screen state of the task list: the fetched snapshot plus the active bucket.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    pub filter: TaskFilter,
    pub today: Option<NaiveDate>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>, filter: TaskFilter, today: NaiveDate) -> Self {
        Self {
            tasks,
            filter,
            today: Some(today),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn reference_day(&self) -> NaiveDate {
        self.today.unwrap_or_else(crate::utils::date::today)
    }

    pub fn visible(&self) -> Vec<Task> {
        filter_tasks(&self.tasks, self.filter, self.reference_day())
    }

    /// Badge counts for every bucket, in display order.
    pub fn counts(&self) -> Vec<(TaskFilter, usize)> {
        let today = self.reference_day();
        TaskFilter::ALL
            .iter()
            .map(|f| (*f, count_by_filter(&self.tasks, *f, today)))
            .collect()
    }

    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task_status::{Priority, TaskStatus};

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn task(id: i64, start: &str, end: &str, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            status,
            priority: Priority::Medium,
            created_by: None,
            start_date: d(start),
            end_date: d(end),
            feedback: None,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<i64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn single_day_task_yesterday_is_overdue_not_today() {
        let tasks = vec![task(1, "2024-01-01", "2024-01-01", TaskStatus::Pending)];
        let today = d("2024-01-02");

        assert_eq!(ids(&filter_tasks(&tasks, TaskFilter::Overdue, today)), vec![1]);
        assert!(filter_tasks(&tasks, TaskFilter::Today, today).is_empty());
    }

    #[test]
    fn completed_tasks_are_never_overdue() {
        let tasks = vec![
            task(1, "2023-12-01", "2023-12-31", TaskStatus::Completed),
            task(2, "2023-12-01", "2023-12-31", TaskStatus::Delayed),
            task(3, "2023-12-01", "2024-01-02", TaskStatus::Pending),
        ];

        let overdue = filter_tasks(&tasks, TaskFilter::Overdue, d("2024-01-02"));
        assert_eq!(ids(&overdue), vec![2]);
    }

    #[test]
    fn today_bucket_includes_spanning_and_boundary_tasks() {
        let today = d("2024-01-10");
        let tasks = vec![
            task(1, "2024-01-01", "2024-01-20", TaskStatus::Pending), // spans
            task(2, "2024-01-10", "2024-01-10", TaskStatus::Pending), // single day
            task(3, "2024-01-10", "2024-01-05", TaskStatus::Pending), // inverted, starts today
            task(4, "2024-01-15", "2024-01-10", TaskStatus::Pending), // inverted, ends today
            task(5, "2024-01-11", "2024-01-12", TaskStatus::Pending), // future
            task(6, "2024-01-01", "2024-01-09", TaskStatus::Pending), // past
        ];

        let hits = filter_tasks(&tasks, TaskFilter::Today, today);
        assert_eq!(ids(&hits), vec![1, 2, 3, 4]);
    }

    #[test]
    fn upcoming_means_starting_after_today() {
        let today = d("2024-01-10");
        let tasks = vec![
            task(1, "2024-01-10", "2024-01-12", TaskStatus::Pending),
            task(2, "2024-01-11", "2024-01-12", TaskStatus::Completed),
        ];
        assert_eq!(ids(&filter_tasks(&tasks, TaskFilter::Upcoming, today)), vec![2]);
    }

    #[test]
    fn all_is_order_preserving_identity() {
        let tasks = vec![
            task(3, "2024-03-01", "2024-03-01", TaskStatus::Pending),
            task(1, "2020-01-01", "2020-01-01", TaskStatus::Completed),
            task(2, "2030-01-01", "2030-01-01", TaskStatus::Delayed),
        ];
        let all = filter_tasks(&tasks, TaskFilter::All, d("2024-01-01"));
        assert_eq!(ids(&all), vec![3, 1, 2]);
    }

    #[test]
    fn board_counts_every_bucket() {
        let today = d("2024-01-10");
        let board = TaskBoard::new(
            vec![
                task(1, "2024-01-10", "2024-01-10", TaskStatus::Pending),
                task(2, "2024-01-01", "2024-01-02", TaskStatus::Pending),
                task(3, "2024-02-01", "2024-02-02", TaskStatus::Pending),
            ],
            TaskFilter::Overdue,
            today,
        );

        assert_eq!(
            board.counts(),
            vec![
                (TaskFilter::All, 3),
                (TaskFilter::Today, 1),
                (TaskFilter::Overdue, 1),
                (TaskFilter::Upcoming, 1),
            ]
        );
        assert_eq!(ids(&board.visible()), vec![2]);
        assert!(board.find(3).is_some());
    }
}
