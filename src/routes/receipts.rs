use std::fs;

use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use log::{error, warn};

use crate::domain::receipt::Receipt;
use crate::models::config::ServerConfig;

/// GET on the receipts route: one entry per file in the upload directory,
/// carrying the file name and its last-modified time. Entries whose
/// metadata cannot be read are skipped with a warning.
pub async fn list_receipts(server_config: web::Data<ServerConfig>) -> impl Responder {
    let entries = match fs::read_dir(&server_config.receipts_dir) {
        Ok(entries) => entries,
        Err(e) => {
            error!(
                "Failed to read receipts directory {}: {e}",
                server_config.receipts_dir
            );
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut receipts = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Failed to read receipt directory entry: {e}");
                continue;
            }
        };
        let modified = match entry.metadata().and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                warn!("Failed to read metadata for {:?}: {e}", entry.file_name());
                continue;
            }
        };
        receipts.push(Receipt {
            name: entry.file_name().to_string_lossy().into_owned(),
            upload_date: DateTime::<Utc>::from(modified),
        });
    }

    HttpResponse::Ok().json(receipts)
}
