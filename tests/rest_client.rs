//! Tests of the REST client, against a mocked HTTP server

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskdeck::api::TodoistApi;
use taskdeck::client::Client;
use taskdeck::filter::TaskFilter;
use taskdeck::traits::TodoSource;
use taskdeck::{NetworkError, NetworkResult, Project, Token};

const PROJECTS_BODY: &str = r#"[
    {"id": 1, "name": "Inbox", "order": 0, "indent": 1, "comment_count": 0},
    {"id": 2, "name": "Work", "order": 1, "indent": 1, "comment_count": 3}
]"#;

const LABELS_BODY: &str = r#"[
    {"id": 7, "name": "errands", "order": 1},
    {"id": 8, "name": "calls", "order": 2},
    {"id": 9, "name": "waiting", "order": 3}
]"#;

const TASKS_BODY: &str = r#"[
    {"id": 11, "project_id": 1, "content": "Buy milk", "completed": false, "label_ids": [7],
     "due": {"string": "today", "date": "2018-03-18", "recurring": false}},
    {"id": 12, "project_id": 2, "content": "Write report", "completed": false, "label_ids": []}
]"#;

fn token() -> Token {
    Token::new("abc123").unwrap()
}

async fn start_server() -> (MockServer, Client) {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    let client = Client::new(format!("{}/API/v8/", server.uri())).unwrap();
    (server, client)
}

async fn mount(server: &MockServer, api: TodoistApi, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/API/v8/{}", api.path())))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Fetch a resource, and only keep the number of items
async fn fetch_count(client: &Client, api: TodoistApi, token: &Token) -> NetworkResult<usize> {
    match api {
        TodoistApi::Projects => client.fetch_projects(Some(token)).await.map(|v| v.len()),
        TodoistApi::Labels => client.fetch_labels(Some(token)).await.map(|v| v.len()),
        TodoistApi::Tasks => client.fetch_tasks(Some(token), None).await.map(|v| v.len()),
    }
}

const ALL_APIS: [TodoistApi; 3] = [TodoistApi::Projects, TodoistApi::Labels, TodoistApi::Tasks];

#[tokio::test]
async fn test_fetch_inbox() {
    let (server, client) = start_server().await;
    Mock::given(method("GET"))
        .and(path("/API/v8/projects"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id":1,"name":"Inbox"}]"#))
        .expect(1)
        .mount(&server)
        .await;

    let projects = client.fetch_projects(Some(&token())).await.unwrap();
    assert_eq!(projects, vec![Project::new(1, "Inbox".to_string())]);
    assert_eq!(projects[0].id(), 1);
    assert_eq!(projects[0].name(), "Inbox");
}

#[tokio::test]
async fn test_well_formed_arrays() {
    let (server, client) = start_server().await;
    mount(&server, TodoistApi::Projects, ResponseTemplate::new(200).set_body_string(PROJECTS_BODY)).await;
    mount(&server, TodoistApi::Labels, ResponseTemplate::new(200).set_body_string(LABELS_BODY)).await;
    mount(&server, TodoistApi::Tasks, ResponseTemplate::new(200).set_body_string(TASKS_BODY)).await;

    assert_eq!(fetch_count(&client, TodoistApi::Projects, &token()).await, Ok(2));
    assert_eq!(fetch_count(&client, TodoistApi::Labels, &token()).await, Ok(3));
    assert_eq!(fetch_count(&client, TodoistApi::Tasks, &token()).await, Ok(2));

    let tasks = client.fetch_tasks(Some(&token()), None).await.unwrap();
    assert_eq!(tasks[0].content(), "Buy milk");
    assert_eq!(tasks[0].label_ids(), &[7]);
    assert!(tasks[1].due().is_none());
}

#[tokio::test]
async fn test_empty_arrays() {
    let (server, client) = start_server().await;
    for api in ALL_APIS.iter() {
        mount(&server, *api, ResponseTemplate::new(200).set_body_string("[]")).await;
    }
    for api in ALL_APIS.iter() {
        assert_eq!(fetch_count(&client, *api, &token()).await, Ok(0));
    }
}

#[tokio::test]
async fn test_unauthorized_tasks() {
    let (server, client) = start_server().await;
    mount(&server, TodoistApi::Tasks, ResponseTemplate::new(401).set_body_string("Unauthorized")).await;

    assert_eq!(client.fetch_tasks(Some(&token()), None).await, Err(NetworkError));
}

#[tokio::test]
async fn test_error_statuses() {
    for status in [400u16, 403, 404, 500, 503].iter() {
        let (server, client) = start_server().await;
        // Even with a valid body, a non-success status is an error
        for api in ALL_APIS.iter() {
            mount(&server, *api, ResponseTemplate::new(*status).set_body_string("[]")).await;
        }
        for api in ALL_APIS.iter() {
            assert_eq!(fetch_count(&client, *api, &token()).await, Err(NetworkError), "{} with status {}", api, status);
        }
    }
}

#[tokio::test]
async fn test_malformed_bodies() {
    let bodies = [
        "",
        "[{\"id\": 1, \"name\": ",
        "<html>Service unavailable</html>",
        // Not an array
        r#"{"id": 1, "name": "Inbox"}"#,
        // An array, but not of the expected items
        r#"[1, 2, 3]"#,
        r#"[{"unrelated": true}]"#,
    ];

    for body in bodies.iter() {
        let (server, client) = start_server().await;
        for api in ALL_APIS.iter() {
            mount(&server, *api, ResponseTemplate::new(200).set_body_string(*body)).await;
        }
        for api in ALL_APIS.iter() {
            assert_eq!(fetch_count(&client, *api, &token()).await, Err(NetworkError), "{} with body {:?}", api, body);
        }
    }
}

#[tokio::test]
async fn test_transport_failure() {
    let _ = env_logger::builder().is_test(true).try_init();
    // Nothing listens on the discard port
    let client = Client::new("http://127.0.0.1:9/API/v8/").unwrap();

    for api in ALL_APIS.iter() {
        assert_eq!(fetch_count(&client, *api, &token()).await, Err(NetworkError));
    }
}

#[tokio::test]
async fn test_authorization_header_is_verbatim() {
    let tokens = [
        "abc123",
        "0123456789abcdef0123456789abcdef01234567",
        "a.b-c_d~e+f/g==",
        "with some spaces",
        "!#$%&'*^`|",
    ];

    for raw_token in tokens.iter() {
        let (server, client) = start_server().await;
        for api in ALL_APIS.iter() {
            mount(&server, *api, ResponseTemplate::new(200).set_body_string("[]")).await;
        }

        let token = Token::new(*raw_token).unwrap();
        for api in ALL_APIS.iter() {
            assert_eq!(fetch_count(&client, *api, &token).await, Ok(0));
        }

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
        for request in requests {
            let auth = request.headers.get("authorization").unwrap();
            assert_eq!(auth.as_bytes(), format!("Bearer {}", raw_token).as_bytes());
        }
    }
}

#[tokio::test]
async fn test_requested_paths() {
    let (server, client) = start_server().await;
    for api in ALL_APIS.iter() {
        mount(&server, *api, ResponseTemplate::new(200).set_body_string("[]")).await;
    }
    for api in ALL_APIS.iter() {
        let _ = fetch_count(&client, *api, &token()).await;
    }

    let paths: Vec<String> = server.received_requests().await.unwrap()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/API/v8/projects", "/API/v8/labels", "/API/v8/tasks"]);
}

#[tokio::test]
async fn test_filter_is_not_sent() {
    let (server, client) = start_server().await;
    mount(&server, TodoistApi::Tasks, ResponseTemplate::new(200).set_body_string(TASKS_BODY)).await;

    let filter = TaskFilter {
        project_id: Some(2),
        label_id: Some(7),
        expression: Some("today | overdue".to_string()),
    };
    let tasks = client.fetch_tasks(Some(&token()), Some(&filter)).await.unwrap();
    // Every task is returned, whatever the filter
    assert_eq!(tasks.len(), 2);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_repeated_fetches_are_consistent() {
    let (server, client) = start_server().await;
    mount(&server, TodoistApi::Labels, ResponseTemplate::new(200).set_body_string(LABELS_BODY)).await;
    mount(&server, TodoistApi::Tasks, ResponseTemplate::new(500)).await;

    let first_labels = client.fetch_labels(Some(&token())).await;
    let second_labels = client.fetch_labels(Some(&token())).await;
    assert!(first_labels.is_ok());
    assert_eq!(first_labels, second_labels);

    let first_tasks = client.fetch_tasks(Some(&token()), None).await;
    let second_tasks = client.fetch_tasks(Some(&token()), None).await;
    assert_eq!(first_tasks, Err(NetworkError));
    assert_eq!(first_tasks, second_tasks);
}

#[tokio::test]
async fn test_concurrent_fetches() {
    let (server, client) = start_server().await;
    mount(&server, TodoistApi::Projects, ResponseTemplate::new(200).set_body_string(PROJECTS_BODY)).await;
    mount(&server, TodoistApi::Labels, ResponseTemplate::new(200).set_body_string(LABELS_BODY)).await;
    mount(&server, TodoistApi::Tasks, ResponseTemplate::new(200).set_body_string(TASKS_BODY)).await;

    let token = token();
    let (projects, labels, tasks) = tokio::join!(
        client.fetch_projects(Some(&token)),
        client.fetch_labels(Some(&token)),
        client.fetch_tasks(Some(&token), None),
    );
    assert_eq!(projects.unwrap().len(), 2);
    assert_eq!(labels.unwrap().len(), 3);
    assert_eq!(tasks.unwrap().len(), 2);
}

#[tokio::test]
async fn test_user_agent() {
    let (server, client) = start_server().await;
    mount(&server, TodoistApi::Labels, ResponseTemplate::new(200).set_body_string("[]")).await;
    let _ = client.fetch_labels(Some(&token())).await;

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0].headers.get("user-agent").unwrap().to_str().unwrap().to_string();
    assert!(user_agent.starts_with("taskdeck/"));
}
