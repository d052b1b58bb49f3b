//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Format a number as a JSON-RPC quantity.
pub fn quantity(v: u128) -> Value {
    json!(format!("0x{:x}", v))
}

/// Start a programmable mock JSON-RPC node.
///
/// The handler receives the method name and params and returns the
/// `result` value. Connections are served keep-alive, one request at a
/// time, which is all the faucet's HTTP transport needs.
pub async fn start_mock_rpc<F>(addr: SocketAddr, handler: F)
where
    F: Fn(&str, &Value) -> Value + Send + Sync + 'static,
{
    let listener = TcpListener::bind(addr).await.unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        loop {
                            let body = match read_http_request(&mut socket).await {
                                Some(b) => b,
                                None => break,
                            };
                            let request: Value = match serde_json::from_slice(&body) {
                                Ok(v) => v,
                                Err(_) => break,
                            };
                            let method = request["method"].as_str().unwrap_or("");
                            let result = handler(method, &request["params"]);
                            let response_body = json!({
                                "jsonrpc": "2.0",
                                "id": request["id"],
                                "result": result,
                            })
                            .to_string();
                            let response = format!(
                                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
                                response_body.len(),
                                response_body
                            );
                            if socket.write_all(response.as_bytes()).await.is_err() {
                                break;
                            }
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });
}

/// Read one HTTP request off the socket and return its body.
async fn read_http_request(socket: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = find_subslice(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
        let n = socket.read(&mut tmp).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&tmp[..n]);
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length: usize = headers
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut tmp).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&tmp[..n]);
    }

    Some(buf[header_end..header_end + content_length].to_vec())
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
