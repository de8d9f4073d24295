use async_trait::async_trait;

use crate::traits::TodoistService;
use crate::viper::{DashboardInteractorInput, DashboardInteractorOutput};

/// Fetches the dashboard data from a [`TodoistService`] (usually a [`SessionGate`](crate::session::SessionGate))
#[derive(Debug)]
pub struct DashboardInteractor<T> {
    service: T,
}

impl<T> DashboardInteractor<T> {
    pub fn new(service: T) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &T { &self.service }
}

#[async_trait]
impl<T> DashboardInteractorInput for DashboardInteractor<T>
where
    T: TodoistService + Send + Sync,
{
    async fn fetch_tasks(&self, output: &(dyn DashboardInteractorOutput + Sync)) {
        match self.service.get_all_tasks().await {
            Ok(tasks) => {
                log::info!("Fetched {} tasks", tasks.len());
                output.tasks_fetched(tasks);
            },
            Err(err) => {
                log::warn!("Unable to fetch tasks: {}", err);
                output.tasks_fetch_failed();
            },
        }
    }
}
