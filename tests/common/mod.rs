//! A one-shot HTTP server for exercising the verse API client offline.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

pub const JOHN_3_16: &str = r#"[
  {"translation": "KJV", "text": "For God so loved the world, that he gave his only begotten Son"},
  {"translation": "NIV84", "text": "For God so loved the world that he gave his one and only Son"},
  {"translation": "XYZ", "text": "God loved the world this much"},
  {"translation": "RSV", "text": "For God so loved the world that he gave his only Son"}
]"#;

/// Serves a single response, returning the base URL and a handle that yields
/// the request line the client sent.
pub fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            if header.trim().is_empty() {
                break;
            }
        }

        let reason = if status == 200 { "OK" } else { "Error" };
        let response = format!(
            "HTTP/1.1 {} {}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        let mut stream = reader.into_inner();
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request_line.trim().to_string()
    });

    (url, handle)
}
