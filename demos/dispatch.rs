//! Builds one route and runs a handful of requests through it, printing the
//! status and JSON body of each response.
//!
//! Run with `RUST_LOG=debug` to see the dispatcher's log lines.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use microdispatch_rs::{
    Dispatcher, DispatcherOptions, HttpRequest, HttpResponse, LogFacade, MethodHandlers, Outcome,
    ResponseWriter, StatusCode,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct NewNote {
    text: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dispatcher = Dispatcher::new(DispatcherOptions::default().with_logger(LogFacade));
    let next_id = Arc::new(AtomicU64::new(1));

    let route = dispatcher.build_route(
        MethodHandlers::new()
            // 1. Plain JSON read
            .get(|req, _res| {
                Box::pin(async move {
                    Ok(Some(Outcome::ok(json!({"url": req.url, "notes": []}))))
                })
            })
            // 2. Typed body, validation failure as a 422
            .post(move |req, _res| {
                let next_id = next_id.clone();
                Box::pin(async move {
                    let note: NewNote = req.json()?;
                    if note.text.trim().is_empty() {
                        return Ok(Some(Outcome::failure(StatusCode::UNPROCESSABLE_ENTITY, "text must not be empty")));
                    }
                    let id = next_id.fetch_add(1, Ordering::SeqCst);
                    Ok(Some(Outcome::created(json!({"id": id, "text": note.text}))))
                })
            })
            // 3. Handler that writes its own response
            .delete(|_req, res| {
                Box::pin(async move {
                    res.status(StatusCode::ACCEPTED);
                    res.json(json!({"scheduled": true}));
                    Ok(None)
                })
            })
            .with_config(json!({"api": {"bodyParser": true}})),
    );

    let requests = vec![
        HttpRequest::new("GET", "/notes"),
        HttpRequest::new("POST", "/notes").with_body(json!({"text": "buy milk"})),
        HttpRequest::new("POST", "/notes").with_body(json!({"text": "  "})),
        HttpRequest::new("POST", "/notes").with_body(json!({"title": "wrong shape"})),
        HttpRequest::new("DELETE", "/notes/1"),
        HttpRequest::new("OPTIONS", "/notes"),
        HttpRequest::without_method("/notes"),
    ];

    println!("Route config: {}", route.config().map_or_else(|| "none".to_string(), ToString::to_string));

    for request in &requests {
        let mut response = HttpResponse::default();
        route.handle(request, &mut response).await;
        println!("--- {} {}", request.method_label(), request.url);
        println!("{} {}\n", response.status, String::from_utf8_lossy(&response.body));
    }

    Ok(())
}
