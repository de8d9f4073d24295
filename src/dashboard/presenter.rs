use async_trait::async_trait;

use crate::dashboard::TaskCalendar;
use crate::viper::{DashboardInteractorInput, DashboardInteractorOutput, DashboardRouterInput, DashboardViewInput, DashboardViewOutput};
use crate::Task;

pub const FETCH_FAILED_TITLE: &str = "Unable to load tasks";
pub const FETCH_FAILED_MESSAGE: &str = "Your tasks could not be downloaded. Please check your connection and try again.";

/// Turns what the view and the interactor report into things to display, and into routes
#[derive(Debug)]
pub struct DashboardPresenter<V, I, R> {
    view: V,
    interactor: I,
    router: R,
}

impl<V, I, R> DashboardPresenter<V, I, R> {
    pub fn new(view: V, interactor: I, router: R) -> Self {
        Self { view, interactor, router }
    }

    pub fn view(&self) -> &V { &self.view }
    pub fn interactor(&self) -> &I { &self.interactor }
    pub fn router(&self) -> &R { &self.router }
}

#[async_trait]
impl<V, I, R> DashboardViewOutput for DashboardPresenter<V, I, R>
where
    V: DashboardViewInput + Send + Sync,
    I: DashboardInteractorInput + Send + Sync,
    R: DashboardRouterInput + Send + Sync,
{
    async fn view_did_load(&self) {
        self.interactor.fetch_tasks(self).await;
    }

    fn on_filter_button_tapped(&self) {
        self.router.show_filter_page();
    }

    fn on_logout_button_tapped(&self) {
        self.router.show_login_page();
    }
}

impl<V, I, R> DashboardInteractorOutput for DashboardPresenter<V, I, R>
where
    V: DashboardViewInput,
{
    fn tasks_fetched(&self, tasks: Vec<Task>) {
        let calendar = TaskCalendar::from_tasks(&tasks);
        self.view.show_tasks(calendar);
    }

    fn tasks_fetch_failed(&self) {
        self.view.show_alert(FETCH_FAILED_TITLE, FETCH_FAILED_MESSAGE);
    }
}
