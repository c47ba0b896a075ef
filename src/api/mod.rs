use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::commands::{self, CreateBuildError, SubmitRequest};
use crate::entities::{BuildId, BuildRecord, Tag, UnknownTagError};
use crate::ports::BoxedBuildsRepository;
use crate::queries::{build_gallery_view, GalleryFilter};

/// Shared per-process state. The mutex is the single serialization point for
/// the store's read-modify-write sequence; without it two concurrent
/// submissions could each read the same list and one write would be lost.
pub struct AppState {
    pub store: Mutex<BoxedBuildsRepository>,
    pub seeds: Vec<BuildRecord>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct SubmitResponse {
    success: bool,
    id: BuildId,
}

/// Optional gallery filters: `tags` is a comma-separated tag list, `q` a
/// free-text query. Absent parameters leave the listing unfiltered.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    tags: Option<String>,
    q: Option<String>,
}

fn parse_tags(raw: &str) -> Result<Vec<Tag>, UnknownTagError> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(Tag::try_from)
        .collect()
}

async fn list_submissions(
    state: web::Data<AppState>,
    params: web::Query<ListParams>,
) -> HttpResponse {
    let selected_tags = match params.tags.as_deref() {
        Some(raw) => match parse_tags(raw) {
            Ok(tags) => tags,
            Err(err) => {
                return HttpResponse::BadRequest().json(ErrorBody {
                    error: err.to_string(),
                })
            }
        },
        None => Vec::new(),
    };
    let filter = GalleryFilter {
        selected_tags,
        search_query: params.q.clone().unwrap_or_default(),
    };

    let dynamic = {
        let mut store = state.store.lock().await;
        store.read_all().await
    };
    match dynamic {
        Ok(dynamic) => {
            let view = build_gallery_view(dynamic, &state.seeds, &filter);
            HttpResponse::Ok().json(view)
        }
        Err(err) => {
            log::error!("fetch builds error: {err:?}");
            HttpResponse::InternalServerError().json(ErrorBody {
                error: "Failed to fetch builds".to_string(),
            })
        }
    }
}

async fn create_submission(
    state: web::Data<AppState>,
    body: web::Json<SubmitRequest>,
) -> HttpResponse {
    let now = Utc::now().date_naive();
    let result = {
        let mut store = state.store.lock().await;
        commands::create(&mut **store, now, body.into_inner()).await
    };
    match result {
        Ok(record) => HttpResponse::Created().json(SubmitResponse {
            success: true,
            id: record.id,
        }),
        Err(CreateBuildError::Rejected(reason)) => {
            HttpResponse::BadRequest().json(ErrorBody { error: reason })
        }
        Err(CreateBuildError::Store(err)) => {
            log::error!("submission error: {err:?}");
            HttpResponse::InternalServerError().json(ErrorBody {
                error: "Submission failed".to_string(),
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/submissions")
            .route(web::get().to(list_submissions))
            .route(web::post().to(create_submission)),
    );
}
