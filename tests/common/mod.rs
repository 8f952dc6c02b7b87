//! Common test utilities

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;

use swatchbook::palette::{ColorId, ColorRecord, Effect, EffectSink, Hex, PaletteStore};
use swatchbook::service::{ColorNamer, Completion, PaletteRepository};
use swatchbook::{App, Config, Error, Result};

/// Effect sink that records instead of running anything
#[derive(Clone, Default)]
pub struct RecordingSink(Rc<RefCell<Vec<Effect>>>);

impl EffectSink for RecordingSink {
    fn dispatch(&self, effect: Effect) {
        self.0.borrow_mut().push(effect);
    }
}

impl RecordingSink {
    /// Drain everything recorded so far
    pub fn take(&self) -> Vec<Effect> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

/// A store with `n` default swatches and a clean effect log
pub fn palette_of(n: usize) -> (PaletteStore<RecordingSink>, RecordingSink) {
    let sink = RecordingSink::default();
    let mut store = PaletteStore::new(sink.clone());
    for _ in 0..n {
        store.add(ColorRecord::new(ColorId::new()));
    }
    sink.take();
    (store, sink)
}

pub fn ids(store: &PaletteStore<RecordingSink>) -> Vec<ColorId> {
    store.records().iter().map(|r| r.id).collect()
}

pub fn orders(store: &PaletteStore<RecordingSink>) -> Vec<u32> {
    store.records().iter().map(|r| r.order).collect()
}

/// An app over `n` swatches with default bindings
pub struct TestApp {
    pub app: App<RecordingSink>,
    pub sink: RecordingSink,
    pub completions: UnboundedSender<Completion>,
}

impl TestApp {
    pub fn new(n: usize) -> Self {
        let (palette, sink) = palette_of(n);
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(Config::default().with_default_bindings(), palette, rx);
        Self {
            app,
            sink,
            completions: tx,
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    pub fn complete(&mut self, completion: Completion) {
        self.completions.send(completion).expect("receiver alive");
        self.app.drain_completions();
    }
}

pub fn hex(s: &str) -> Hex {
    Hex::parse(s).expect("valid hex")
}

/// Naming service stand-in with a fixed answer
pub enum MockNamer {
    Name(Option<String>),
    Fail(String),
}

impl ColorNamer for MockNamer {
    async fn lookup(&self, _hex: &Hex) -> Result<Option<String>> {
        match self {
            MockNamer::Name(name) => Ok(name.clone()),
            MockNamer::Fail(detail) => Err(Error::NamingLookupFailed(detail.clone())),
        }
    }
}

/// Storage call seen by [`MockRepository`]
#[derive(Debug, Clone, PartialEq)]
pub enum StorageCall {
    Upsert(ColorRecord),
    Delete(ColorId),
}

/// Storage stand-in recording calls, optionally failing all writes
#[derive(Default)]
pub struct MockRepository {
    pub calls: Mutex<Vec<StorageCall>>,
    pub snapshot: Vec<ColorRecord>,
    pub fail: bool,
}

impl MockRepository {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<StorageCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StorageCall) -> Result<()> {
        if self.fail {
            return Err(Error::PersistenceFailed("503 Service Unavailable".to_string()));
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl PaletteRepository for MockRepository {
    async fn load(&self) -> Result<Vec<ColorRecord>> {
        if self.fail {
            return Err(Error::PersistenceFailed("503 Service Unavailable".to_string()));
        }
        Ok(self.snapshot.clone())
    }

    async fn upsert(&self, record: &ColorRecord) -> Result<()> {
        self.record(StorageCall::Upsert(record.clone()))
    }

    async fn delete(&self, id: ColorId) -> Result<()> {
        self.record(StorageCall::Delete(id))
    }
}

/// Local HTTP server answering one canned response per connection
pub struct HttpStub {
    pub url: String,
    handle: JoinHandle<Vec<String>>,
}

impl HttpStub {
    /// Serve `responses` in sequence, one connection each
    pub async fn serve(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                requests.push(read_request(&mut socket).await);

                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
            requests
        });

        Self { url, handle }
    }

    /// Raw requests received, once every response has been served
    pub async fn requests(self) -> Vec<String> {
        self.handle.await.unwrap()
    }
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        401 => "Unauthorized",
        404 => "Not Found",
        _ => "Internal Server Error",
    }
}

/// Body of a raw HTTP request
pub fn request_body(request: &str) -> &str {
    request.split_once("\r\n\r\n").map_or("", |(_, body)| body)
}

/// Value of a request header, matched case-insensitively
pub fn request_header<'a>(request: &'a str, name: &str) -> Option<&'a str> {
    request
        .split("\r\n\r\n")
        .next()?
        .lines()
        .skip(1)
        .find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case(name).then(|| value.trim())
        })
}
