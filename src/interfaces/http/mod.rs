use crate::application::ingest::{ingest, UploadedFile};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::AppConfig;
use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use chrono::Local;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

mod page;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub source: String,
    pub message: String,
}

pub struct HttpState {
    pub config: AppConfig,
    pub logs: Arc<Mutex<Vec<LogEntry>>>,
}

pub fn add_log_entry(
    logs: &Mutex<Vec<LogEntry>>,
    level: &str,
    source: &str,
    message: &str,
) -> LogEntry {
    let entry = LogEntry {
        time: Local::now().format("%H:%M:%S").to_string(),
        level: level.to_string(),
        source: source.to_string(),
        message: message.to_string(),
    };
    let mut logs = logs.lock().unwrap();
    logs.push(entry.clone());
    if logs.len() > 100 {
        logs.remove(0);
    }
    entry
}

pub fn add_log(logs: &Mutex<Vec<LogEntry>>, level: &str, source: &str, message: &str) {
    add_log_entry(logs, level, source, message);
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page::INDEX_HTML)
}

#[post("/ingest")]
async fn ingest_upload(data: web::Data<HttpState>, payload: Multipart) -> impl Responder {
    let (main, supplementary) = match collect_uploads(payload, data.config.max_upload_bytes).await
    {
        Ok(parts) => parts,
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "Ingest",
                &format!("Upload rejected: {}", e),
            );
            return error_response(e);
        }
    };

    add_log(
        &data.logs,
        "INFO",
        "Ingest",
        &format!(
            "Ingesting upload (main={} supplementary={})",
            main.is_some(),
            supplementary.len()
        ),
    );

    match ingest(main, supplementary, data.config.max_supplementary_tables) {
        Ok(report) => {
            for warning in &report.warnings {
                add_log(&data.logs, "WARN", "Ingest", warning);
            }
            HttpResponse::Ok().json(report)
        }
        Err(e) => {
            add_log(
                &data.logs,
                "ERROR",
                "Ingest",
                &format!("Ingestion failed: {}", e),
            );
            error_response(e)
        }
    }
}

#[get("/logs")]
async fn get_logs(data: web::Data<HttpState>) -> impl Responder {
    let logs = data.logs.lock().unwrap();
    HttpResponse::Ok().json(&*logs)
}

fn error_response(e: AppError) -> HttpResponse {
    match &e {
        AppError::ParseError(_) | AppError::ValidationError(_) => {
            HttpResponse::BadRequest().body(e.to_string())
        }
        _ => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Drain the multipart stream into the `main` file (first wins) and the
/// `supp` files in arrival order. Parts without a file name and unknown
/// field names are ignored.
async fn collect_uploads(
    mut payload: Multipart,
    max_part_bytes: usize,
) -> Result<(Option<UploadedFile>, Vec<UploadedFile>)> {
    let mut main: Option<UploadedFile> = None;
    let mut supplementary = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::ValidationError(format!("Malformed upload: {}", e)))?;

        let field_name = field.name().to_string();
        let file_name = match field.content_disposition().get_filename() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| AppError::ValidationError(format!("Malformed upload: {}", e)))?;
            if bytes.len() + chunk.len() > max_part_bytes {
                return Err(AppError::ValidationError(format!(
                    "File {} exceeds the {} byte upload limit",
                    file_name, max_part_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        let file = UploadedFile { file_name, bytes };

        match field_name.as_str() {
            "main" => {
                if main.is_none() {
                    main = Some(file);
                }
            }
            "supp" => supplementary.push(file),
            _ => {}
        }
    }

    Ok((main, supplementary))
}

pub fn start_server(config: AppConfig) -> std::io::Result<Server> {
    let bind_addr = (config.host.clone(), config.port);
    let logs = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(HttpState { config, logs });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(index)
            .service(
                web::scope("/api")
                    .service(ingest_upload)
                    .service(get_logs),
            )
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
