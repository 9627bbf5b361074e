use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

/// Local stand-in for the source site. Unknown paths answer 404.
pub struct SiteStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl SiteStub {
    /// `routes` maps a request path to `(status, html body)`.
    pub fn spawn(routes: HashMap<String, (u16, String)>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start site stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
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

                let path = request.url().to_string();
                seen.lock().expect("lock request log").push(path.clone());

                let (status, body) = routes
                    .get(&path)
                    .cloned()
                    .unwrap_or_else(|| (404, "not found".to_owned()));

                let header = tiny_http::Header::from_bytes(
                    &b"Content-Type"[..],
                    &b"text/html; charset=utf-8"[..],
                )
                .expect("build header");
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn requested_paths(&self) -> Vec<String> {
        self.requests.lock().expect("lock request log").clone()
    }
}

impl Drop for SiteStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

pub fn html_page(body: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><title>Al Quran</title></head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

/// Listing page with one row per `(id, href, link text, total verses)`.
pub fn index_page(rows: &[(u32, &str, &str, u32)]) -> String {
    let rows = rows
        .iter()
        .map(|(id, href, name, total)| {
            format!("<tr><td>{id}</td><td><a href=\"{href}\">{name}</a></td><td>{total}</td></tr>")
        })
        .collect::<Vec<_>>()
        .join("\n");
    html_page(&format!(
        "<table class=\"table table-striped\">\n<tr><th>#</th><th>Sura</th><th>Ayat</th></tr>\n{rows}\n</table>"
    ))
}

/// Verse table where every ayah is followed by one translation row.
pub fn verse_table(verses: &[(u32, &str)]) -> String {
    let rows = verses
        .iter()
        .map(|(id, text)| {
            format!(
                "<tr><td>{id}</td><td>{text}</td><td>translit {id}</td></tr>\n\
<tr><td> </td><td>বাংলা অনুবাদ {id}</td><td>English translation {id}</td></tr>"
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("<table class=\"table table-striped\">\n{rows}\n</table>")
}

pub fn pager(hrefs: &[&str]) -> String {
    let links = hrefs
        .iter()
        .map(|href| format!("<a class=\"btn btn-info\" href=\"{href}\">next</a>"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("<div class=\"btn-group\">\n{links}\n</div>")
}
