//! Some utility functions

use crate::dashboard::TaskCalendar;
use crate::{Label, Project, Task};

/// A debug utility that pretty-prints projects
pub fn print_projects(projects: &[Project]) {
    for project in projects {
        println!("PROJECT {} ({})", project.name(), project.id());
    }
}

/// A debug utility that pretty-prints labels
pub fn print_labels(labels: &[Label]) {
    for label in labels {
        println!("LABEL @{} ({})", label.name(), label.id());
    }
}

pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    let due = match task.due() {
        None => String::new(),
        Some(due) => format!(" (due {})", due.string()),
    };
    println!("    {} {}{}\t{}", completion, task.content(), due, task.id());
}

/// A debug utility that pretty-prints a calendar, day by day
pub fn print_task_calendar(calendar: &TaskCalendar) {
    if calendar.is_empty() {
        println!("(no task is due)");
    }
    for (day, tasks) in calendar.days() {
        println!("{} ({} tasks)", day.format("%a %Y-%m-%d"), tasks.len());
        for task in tasks {
            println!("    * {}", task);
        }
    }
}
