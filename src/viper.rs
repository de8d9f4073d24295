//! Contracts between the View, Interactor, Presenter and Router of the dashboard screen
//!
//! Names are presenter-centric: e.g. [`DashboardViewInput`] is what the view gets _from_ the presenter,
//! [`DashboardInteractorOutput`] is what the interactor sends back _to_ the presenter.
//! The GUI toolkit implements the view and the router, this crate provides the presenter and the interactor (see the [`dashboard`](crate::dashboard) module).

use async_trait::async_trait;

use crate::dashboard::TaskCalendar;
use crate::Task;

/// What the view can show (presenter → view)
pub trait DashboardViewInput {
    fn show_tasks(&self, task_list: TaskCalendar);
    fn show_alert(&self, title: &str, message: &str);
}

/// What the view tells the presenter (view → presenter)
#[async_trait]
pub trait DashboardViewOutput {
    async fn view_did_load(&self);
    fn on_filter_button_tapped(&self);
    fn on_logout_button_tapped(&self);
}

/// What the interactor can do for the presenter (presenter → interactor)
#[async_trait]
pub trait DashboardInteractorInput {
    /// Fetch every task, then report to `output`
    async fn fetch_tasks(&self, output: &(dyn DashboardInteractorOutput + Sync));
}

/// What the interactor reports (interactor → presenter)
pub trait DashboardInteractorOutput {
    fn tasks_fetched(&self, tasks: Vec<Task>);
    fn tasks_fetch_failed(&self);
}

/// Where the presenter can send the user (presenter → router)
pub trait DashboardRouterInput {
    fn show_filter_page(&self);
    fn show_login_page(&self);
}
