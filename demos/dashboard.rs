use taskdeck::client::Client;
use taskdeck::config::AuthPolicy;
use taskdeck::dashboard::{create_module, TaskCalendar};
use taskdeck::session::StaticTokenAuthenticator;
use taskdeck::viper::{DashboardRouterInput, DashboardViewInput, DashboardViewOutput};
use taskdeck::{SessionGate, Token};

// TODO: change this value with your own personal API token (Todoist settings > Integrations)
const API_TOKEN: &str = "0123456789abcdef0123456789abcdef01234567";

/// A view that prints to the terminal
struct TerminalView;

impl DashboardViewInput for TerminalView {
    fn show_tasks(&self, task_list: TaskCalendar) {
        println!("---- Tasks by due date -----");
        taskdeck::utils::print_task_calendar(&task_list);
    }

    fn show_alert(&self, title: &str, message: &str) {
        println!("[!] {}: {}", title, message);
    }
}

/// There is nowhere to go in a terminal
struct NoRouter;

impl DashboardRouterInput for NoRouter {
    fn show_filter_page(&self) {
        log::info!("Filters are not available in this demo");
    }

    fn show_login_page(&self) {
        log::info!("Login page is not available in this demo");
    }
}


#[tokio::main]
async fn main() {
    env_logger::init();

    let client = Client::todoist().unwrap();
    let token = Token::new(API_TOKEN).unwrap();
    // Waiting for the authentication, so that the very first load can succeed
    let gate = SessionGate::with_policy(client, StaticTokenAuthenticator::new(token), AuthPolicy::WaitForAuthentication);

    let presenter = create_module(gate, TerminalView, NoRouter);
    presenter.view_did_load().await;
}
