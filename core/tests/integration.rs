//! Full add/edit/delete lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `TodoController`
//! over real HTTP through a small ureq-backed `Transport`. Validates that the
//! core's request building and response parsing agree with the server.

use todo_list_core::{
    ApiError, ClientConfig, HttpMethod, HttpRequest, HttpResponse, ItemId, TodoController,
    TodoError, Transport,
};

/// Executes requests with ureq, returning 4xx/5xx as data rather than `Err`
/// so the core client does the status interpretation.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Ok(HttpResponse::new(status, body))
    }
}

fn start_server() -> String {
    start_server_with_db(mock_server::Db::default())
}

fn start_server_with_db(db: mock_server::Db) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_db(listener, db).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn add_edit_bulk_delete_lifecycle() {
    let base_url = start_server();
    let config = ClientConfig::default()
        .with_base_url(base_url)
        .with_bulk_delete_workers(2);
    let mut c = TodoController::new(&config, UreqTransport::new());

    // Step 1: initial sync, empty.
    c.fetch_all().unwrap();
    assert!(c.snapshot().rows.is_empty());

    // Step 2: add three items.
    for (title, quantity) in [("Milk", 2), ("Eggs", 12), ("Bread", 1)] {
        c.set_draft_title(title);
        c.set_draft_quantity(quantity);
        c.add_item().unwrap();
    }
    let snapshot = c.snapshot();
    let titles: Vec<_> = snapshot.rows.iter().map(|row| row.item.title.as_str()).collect();
    assert_eq!(titles, vec!["Milk", "Eggs", "Bread"]);
    assert_eq!(snapshot.draft.title, "");
    assert_eq!(snapshot.draft.quantity, 1);

    let ids: Vec<ItemId> = snapshot.rows.iter().map(|row| row.item.id.clone()).collect();

    // Step 3: single item lookup.
    let eggs = c.fetch_item(&ids[1]).unwrap();
    assert_eq!(eggs.quantity, 12);

    // Step 4: edit Milk.
    assert!(c.begin_edit(&ids[0]));
    c.set_edit_title("Oat milk");
    c.set_edit_quantity(3);
    c.save_edit().unwrap();
    let snapshot = c.snapshot();
    let row = &snapshot.rows[0];
    assert_eq!(row.item.title, "Oat milk");
    assert_eq!(row.item.quantity, 3);
    assert!(!row.editing);

    // Step 5: bulk delete Eggs and Bread.
    c.toggle_select(&ids[1]);
    c.toggle_select(&ids[2]);
    let report = c.delete_selected().unwrap();
    assert!(report.all_succeeded());
    let snapshot = c.snapshot();
    assert_eq!(snapshot.rows.len(), 1);
    assert_eq!(snapshot.selected_count, 0);

    // Step 6: delete an id the server no longer has.
    let err = c.delete_item(&ids[1]).unwrap_err();
    assert_eq!(err, TodoError::Api(ApiError::NotFound));

    // Step 7: delete the last item.
    c.delete_item(&ids[0]).unwrap();
    assert!(c.snapshot().rows.is_empty());
}

fn seeded(id: &str, title: &str) -> mock_server::TodoItem {
    mock_server::TodoItem {
        id: id.to_string(),
        title: title.to_string(),
        quantity: 1,
        created_at: "2024-01-01T00:00:00+00:00".to_string(),
        updated_at: None,
    }
}

#[test]
fn ids_with_reserved_characters_reach_the_right_item() {
    let db = mock_server::Db::default();
    *db.blocking_write() = vec![
        seeded("a", "Plain"),
        seeded("a?b", "Query"),
        seeded("x/y z", "Slashed"),
    ];
    let base_url = start_server_with_db(db.clone());
    let config = ClientConfig::default().with_base_url(base_url);
    let mut c = TodoController::new(&config, UreqTransport::new());

    assert_eq!(c.fetch_item(&ItemId::from("x/y z")).unwrap().title, "Slashed");

    c.delete_item(&ItemId::from("a?b")).unwrap();
    let remaining: Vec<_> = db.blocking_read().iter().map(|item| item.id.clone()).collect();
    assert_eq!(remaining, vec!["a".to_string(), "x/y z".to_string()]);

    assert!(c.begin_edit(&ItemId::from("x/y z")));
    c.set_edit_title("Renamed");
    c.save_edit().unwrap();
    let titles: Vec<_> = c.snapshot().rows.iter().map(|row| row.item.title.clone()).collect();
    assert_eq!(titles, vec!["Plain".to_string(), "Renamed".to_string()]);
}

#[test]
fn unreachable_backend_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::default().with_base_url(format!("http://{addr}"));
    let mut c = TodoController::new(&config, UreqTransport::new());
    let err = c.fetch_all().unwrap_err();
    assert!(matches!(err, TodoError::Api(ApiError::Network(_))));
    assert!(c.snapshot().error.is_some());
}
