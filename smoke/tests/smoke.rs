//! Full runs over real HTTP against the live mock API.

use todo_client::{TodoApi, UreqTransport};
use todo_smoke::run_checks;

/// Start the mock API on an OS-assigned port and return its base URL.
fn start_server() -> String {
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
            mock_api::serve(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/api")
}

#[test]
fn full_run_against_a_live_server() {
    let base_url = start_server();
    let api = TodoApi::new(&base_url);
    let mut transport = UreqTransport::new();
    let mut out = Vec::new();

    run_checks(&api, &mut transport, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert!(report.starts_with("Testing Todo API endpoints..."));
    assert!(report.contains("✅ Todo created:"));
    assert!(report.contains("✅ Todo updated:"));
    assert!(report.contains("✅ Second todo created:"));
    assert!(report.contains(r#"✅ Todo deleted: {"message":"Todo deleted"}"#));

    // One todo after the first creation, two after the second, one again
    // after the delete.
    assert_eq!(report.matches("✅ Retrieved 1 todos").count(), 2);
    assert_eq!(report.matches("✅ Retrieved 2 todos").count(), 1);
    assert!(report.contains("   - Test todo item (completed: true)"));
    assert!(report.contains("   - Second test todo (completed: false)"));

    assert!(!report.contains("❌"));
    assert!(report.ends_with("🎉 All tests completed!\n"));
}

#[test]
fn unreachable_server_reports_once_and_stops() {
    // Bind and immediately drop a listener so the port is known to be
    // closed when the run starts.
    let base_url = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}/api", listener.local_addr().unwrap())
    };

    let api = TodoApi::new(&base_url);
    let mut transport = UreqTransport::new();
    let mut out = Vec::new();

    run_checks(&api, &mut transport, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    assert_eq!(report.matches("❌").count(), 1);
    assert!(report.contains(&format!("❌ Could not connect to the API at {base_url}.")));
    assert!(!report.contains("✅"));
    assert!(!report.contains("🎉"));
}
