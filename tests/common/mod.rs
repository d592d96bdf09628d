//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with the same status line and body, then closes the
//! connection.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Starts a server in a background thread. Returns the URL of `/llms-full.txt`
/// on it. The server runs until the process exits.
pub fn start(status: &'static str, body: &[u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_vec());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, status, &body));
        }
    });
    format!("http://127.0.0.1:{}/llms-full.txt", port)
}

/// A URL on the reserved tcpmux port, which nothing here listens on and
/// `start` can never be handed.
pub fn refused_url() -> String {
    "http://127.0.0.1:1/llms-full.txt".to_string()
}

fn handle(mut stream: TcpStream, status: &str, body: &[u8]) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}
