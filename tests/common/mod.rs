#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub static SCREEN_PNG: &[u8] = &[
    137, 80, 78, 71, 13, 10, 26, 10, 0, 0, 0, 13, 73, 72, 68, 82, 0, 0, 0, 1, 0, 0, 0, 1, 8, 4, 0,
    0, 0, 181, 28, 12, 2, 0, 0, 0, 11, 73, 68, 65, 84, 120, 218, 99, 252, 255, 23, 0, 2, 3, 1, 128,
    110, 220, 25, 0, 0, 0, 0, 73, 69, 78, 68, 174, 66, 96, 130,
];

pub const SCREEN_HTML: &str = "<!doctype html>\n<html><body><h1>Home</h1></body></html>\n";
pub const LOGIN_HTML: &str = "<!doctype html>\n<html><body><h1>Login</h1></body></html>\n";

pub struct AssetServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    shutdown_tx: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl AssetServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for AssetServer {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Serves `/a.png`, `/a.html`, `/login.html`, a redirect at `/moved.png`,
/// and 404 for anything else.
pub fn spawn_asset_server() -> AssetServer {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("start tiny_http server");
    let base_url = format!("http://{}", server.server_addr());
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);

    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            let request = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };
            server_hits.fetch_add(1, Ordering::SeqCst);

            let response = match request.url() {
                "/a.png" => tiny_http::Response::from_data(SCREEN_PNG.to_vec())
                    .with_header(content_type("image/png")),
                "/a.html" => tiny_http::Response::from_data(SCREEN_HTML.as_bytes().to_vec())
                    .with_header(content_type("text/html; charset=utf-8")),
                "/login.html" => tiny_http::Response::from_data(LOGIN_HTML.as_bytes().to_vec())
                    .with_header(content_type("text/html; charset=utf-8")),
                "/moved.png" => tiny_http::Response::from_data(Vec::new())
                    .with_status_code(302)
                    .with_header(
                        tiny_http::Header::from_bytes(&b"Location"[..], &b"/a.png"[..])
                            .expect("build location header"),
                    ),
                _ => tiny_http::Response::from_data(b"not found".to_vec()).with_status_code(404),
            };

            let _ = request.respond(response);
        }
    });

    AssetServer {
        base_url,
        hits,
        shutdown_tx,
        handle: Some(handle),
    }
}

fn content_type(value: &str) -> tiny_http::Header {
    tiny_http::Header::from_bytes(&b"Content-Type"[..], value.as_bytes())
        .expect("build content-type header")
}

pub fn screen_json(
    id: &str,
    title: Option<&str>,
    screenshot: Option<&str>,
    html: Option<&str>,
) -> serde_json::Value {
    let mut screen = serde_json::json!({ "name": format!("projects/1/screens/{id}") });
    let obj = screen.as_object_mut().expect("screen object");
    if let Some(title) = title {
        obj.insert("title".to_owned(), serde_json::json!(title));
    }
    if let Some(url) = screenshot {
        obj.insert(
            "screenshot".to_owned(),
            serde_json::json!({ "downloadUrl": url }),
        );
    }
    if let Some(url) = html {
        obj.insert(
            "htmlCode".to_owned(),
            serde_json::json!({ "downloadUrl": url }),
        );
    }
    screen
}

pub fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names = std::fs::read_dir(dir)
        .expect("read output dir")
        .map(|entry| {
            entry
                .expect("dir entry")
                .file_name()
                .to_string_lossy()
                .to_string()
        })
        .collect::<Vec<_>>();
    names.sort();
    names
}
