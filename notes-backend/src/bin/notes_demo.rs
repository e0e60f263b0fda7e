//! Walks a running notes service through a full note lifecycle.
//!
//! Usage: `NOTES_URL=http://127.0.0.1:3000 cargo run --bin notes_demo`

use notes_types::{ApiError, ApiResponse, HealthStatus, Note};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

const DEFAULT_URL: &str = "http://127.0.0.1:3000";

struct NotesClient {
    base_url: String,
    client: reqwest::Client,
}

impl NotesClient {
    fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn health(&self) -> Result<HealthStatus, String> {
        let resp = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| format!("Health check failed: {}", e))?;
        expect(resp, StatusCode::OK).await
    }

    async fn create(&self, title: &str, content: &str) -> Result<Note, String> {
        let resp = self
            .client
            .post(self.url("/notes"))
            .json(&json!({ "title": title, "content": content }))
            .send()
            .await
            .map_err(|e| format!("Create note failed: {}", e))?;
        let body: ApiResponse<Note> = expect(resp, StatusCode::CREATED).await?;
        Ok(body.data)
    }

    async fn list(&self) -> Result<ApiResponse<Vec<Note>>, String> {
        let resp = self
            .client
            .get(self.url("/notes"))
            .send()
            .await
            .map_err(|e| format!("List notes failed: {}", e))?;
        expect(resp, StatusCode::OK).await
    }

    async fn get(&self, id: Uuid) -> Result<reqwest::Response, String> {
        self.client
            .get(self.url(&format!("/notes/{}", id)))
            .send()
            .await
            .map_err(|e| format!("Get note failed: {}", e))
    }

    async fn update(&self, id: Uuid, body: serde_json::Value) -> Result<reqwest::Response, String> {
        self.client
            .put(self.url(&format!("/notes/{}", id)))
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Update note failed: {}", e))
    }

    async fn delete(&self, id: Uuid) -> Result<Note, String> {
        let resp = self
            .client
            .delete(self.url(&format!("/notes/{}", id)))
            .send()
            .await
            .map_err(|e| format!("Delete note failed: {}", e))?;
        let body: ApiResponse<Note> = expect(resp, StatusCode::OK).await?;
        Ok(body.data)
    }
}

/// Decode the body if the status matches, otherwise report what came back
async fn expect<T: DeserializeOwned>(resp: reqwest::Response, status: StatusCode) -> Result<T, String> {
    if resp.status() != status {
        let got = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(format!("Expected HTTP {}, got {}: {}", status, got, body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| format!("Parse response: {}", e))
}

async fn run(client: &NotesClient) -> Result<(), String> {
    let health = client.health().await?;
    println!("health: {} at {}", health.status, notes_types::timestamp::format(&health.timestamp));

    let note = client.create("Meeting Notes", "Discuss project timeline").await?;
    println!("created {} ({})", note.id, note.title);

    let fetched: ApiResponse<Note> = expect(client.get(note.id).await?, StatusCode::OK).await?;
    if fetched.data != note {
        return Err("Fetched note differs from the created one".to_string());
    }
    println!("fetched {}", fetched.data.id);

    let updated: ApiResponse<Note> = expect(
        client.update(note.id, json!({ "title": "Updated" })).await?,
        StatusCode::OK,
    )
    .await?;
    println!(
        "updated title '{}' -> '{}', updatedAt {}",
        note.title,
        updated.data.title,
        notes_types::timestamp::format(&updated.data.updated_at)
    );

    let rejected: ApiError = expect(
        client.update(note.id, json!({})).await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    println!("empty update rejected: {} ({})", rejected.error, rejected.message);

    let listed = client.list().await?;
    println!("listed {} note(s)", listed.count.unwrap_or(listed.data.len()));

    let removed = client.delete(note.id).await?;
    println!("deleted {}", removed.id);

    let gone: ApiError = expect(client.get(note.id).await?, StatusCode::NOT_FOUND).await?;
    println!("lookup after delete: {} ({})", gone.error, gone.message);

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let base_url = std::env::var("NOTES_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
    log::info!("Running notes demo against {}", base_url);

    let client = NotesClient::new(&base_url);
    if let Err(e) = run(&client).await {
        log::error!("Demo failed: {}", e);
        eprintln!("demo failed: {}", e);
        std::process::exit(1);
    }

    println!("demo complete");
}
