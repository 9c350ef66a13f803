//! Minimal HTTP/1.1 server for fetch integration tests.
//!
//! Replies to every GET with a scripted sequence of responses, then repeats the
//! last one. Records the request headers it saw.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

#[derive(Default)]
struct State {
    replies: Vec<Reply>,
    served: usize,
    requests: Vec<String>,
}

#[derive(Clone)]
pub struct JsonServer {
    pub url: String,
    state: Arc<Mutex<State>>,
}

impl JsonServer {
    /// Number of requests handled so far.
    pub fn hits(&self) -> usize {
        self.state.lock().unwrap().served
    }

    /// Raw request heads, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(replies: Vec<Reply>) -> JsonServer {
    assert!(!replies.is_empty());
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let state = Arc::new(Mutex::new(State {
        replies,
        ..State::default()
    }));
    let shared = Arc::clone(&state);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream, &shared);
        }
    });
    JsonServer {
        url: format!("http://127.0.0.1:{}/user", port),
        state,
    }
}

fn handle(mut stream: TcpStream, state: &Mutex<State>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]).to_string();

    let reply = {
        let mut st = state.lock().unwrap();
        let idx = st.served.min(st.replies.len() - 1);
        let reply = st.replies[idx].clone();
        st.served += 1;
        st.requests.push(request);
        reply
    };

    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    );
    let _ = stream.write_all(response.as_bytes());
}
