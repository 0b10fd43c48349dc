use std::io;

use todo_client::{TodoApi, UreqTransport};
use todo_smoke::run_checks;

const DEFAULT_BASE_URL: &str = "http://localhost:8001/api";

fn main() -> io::Result<()> {
    let base_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let api = TodoApi::new(&base_url);
    let mut transport = UreqTransport::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_checks(&api, &mut transport, &mut out)
}
