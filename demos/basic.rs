use taskdeck::client::Client;
use taskdeck::session::StaticTokenAuthenticator;
use taskdeck::traits::TodoistService;
use taskdeck::{SessionGate, Token};

// TODO: change this value with your own personal API token (Todoist settings > Integrations)
const API_TOKEN: &str = "0123456789abcdef0123456789abcdef01234567";


#[tokio::main]
async fn main() {
    env_logger::init();

    let client = Client::todoist().unwrap();
    let token = Token::new(API_TOKEN).unwrap();
    let gate = SessionGate::new(client, StaticTokenAuthenticator::new(token));

    // The first call fires the authentication, and does not wait for it. It will probably fail.
    if gate.get_all_projects().await.is_err() {
        log::warn!("First call failed, as expected");
    }
    println!("Session is {}", gate.wait_for_authentication().await);

    match gate.get_all_projects().await {
        Err(err) => log::error!("Unable to list projects: {}", err),
        Ok(projects) => taskdeck::utils::print_projects(&projects),
    }
    match gate.get_all_labels().await {
        Err(err) => log::error!("Unable to list labels: {}", err),
        Ok(labels) => taskdeck::utils::print_labels(&labels),
    }
    match gate.get_all_tasks().await {
        Err(err) => log::error!("Unable to list tasks: {}", err),
        Ok(tasks) => {
            for task in &tasks {
                taskdeck::utils::print_task(task);
            }
        },
    }
}
