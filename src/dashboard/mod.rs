//! The dashboard screen: a calendar of the tasks that are due, day by day
//!
//! This module provides the presenter and the interactor of this screen. The view and the router belong to the GUI toolkit,
//! that must implement [`DashboardViewInput`](crate::viper::DashboardViewInput) and [`DashboardRouterInput`](crate::viper::DashboardRouterInput).

mod calendar;
pub use calendar::TaskCalendar;
mod interactor;
pub use interactor::DashboardInteractor;
mod presenter;
pub use presenter::DashboardPresenter;
pub use presenter::{FETCH_FAILED_MESSAGE, FETCH_FAILED_TITLE};

/// Wire the components of a dashboard together.
///
/// The view should then forward its events to the returned presenter, starting with [`view_did_load`](crate::viper::DashboardViewOutput::view_did_load).
pub fn create_module<T, V, R>(service: T, view: V, router: R) -> DashboardPresenter<V, DashboardInteractor<T>, R> {
    DashboardPresenter::new(view, DashboardInteractor::new(service), router)
}
