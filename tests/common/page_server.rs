//! Minimal HTTP/1.1 server serving a fixed status and body for end-to-end
//! pipeline tests.
//!
//! Answers every request with the same response, which lets one server
//! back both pipeline fetches (reachability and scan) of an assessment.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Starts a server in a background thread that answers every request with
/// `status` and `body`. Returns the base URL (e.g. "http://127.0.0.1:12345/").
/// The server runs until the process exits.
pub fn start(status: u16, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = Arc::new(format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    ));
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let response = Arc::clone(&response);
            thread::spawn(move || handle(stream, &response));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, response: &str) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let _ = stream.read(&mut buf);
    let _ = stream.write_all(response.as_bytes());
}
