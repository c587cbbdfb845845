//! Handlers for `/trials` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/trials` | Optional `disease_area`, `status`, `country`, `limit` (10), `offset` (0) |
//! | `GET`    | `/trials/:id` | 404 if not found |
//! | `POST`   | `/trials` | Body: [`NewTrial`]; returns 200 + stored trial |
//! | `PUT`    | `/trials/:id` | Body: [`NewTrial`]; full replace |
//! | `DELETE` | `/trials/:id` | Returns `{"message":"Trial deleted"}` |
//!
//! Malformed ids, query parameters and bodies are all rejected with 422.

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
};
use serde::{Deserialize, Serialize};
use trialex_core::{
  query::{Page, TrialFilter, TrialPage, TrialQuery},
  service::TrialService,
  store::TrialStore,
  trial::{NewTrial, Trial},
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// Query string accepted by `GET /trials`.
///
/// A parameter that is present but empty (`?status=`) is an empty-string
/// match, not an absent filter.
#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  pub disease_area: Option<String>,
  pub status:       Option<String>,
  pub country:      Option<String>,
  pub limit:        Option<u32>,
  pub offset:       Option<u32>,
}

impl From<ListParams> for TrialQuery {
  fn from(p: ListParams) -> Self {
    TrialQuery {
      filter: TrialFilter {
        disease_area: p.disease_area,
        status:       p.status,
        country:      p.country,
      },
      page:   Page::new(p.limit, p.offset),
    }
  }
}

/// `GET /trials[?disease_area=...][&status=...][&country=...][&limit=...][&offset=...]`
pub async fn list<S>(
  State(service): State<TrialService<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<TrialPage>, ApiError>
where
  S: TrialStore + 'static,
{
  let Query(params) = params?;
  let page = service.list(&TrialQuery::from(params)).await?;
  Ok(Json(page))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /trials/:id`
pub async fn get_one<S>(
  State(service): State<TrialService<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Trial>, ApiError>
where
  S: TrialStore + 'static,
{
  let Path(id) = id?;
  Ok(Json(service.get(id).await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// Parse and check a create/update body.
fn accept(body: Result<Json<NewTrial>, JsonRejection>) -> Result<NewTrial, ApiError> {
  let Json(input) = body?;
  input.validate()?;
  Ok(input)
}

/// `POST /trials` — returns the stored trial with its assigned id.
pub async fn create<S>(
  State(service): State<TrialService<S>>,
  body: Result<Json<NewTrial>, JsonRejection>,
) -> Result<Json<Trial>, ApiError>
where
  S: TrialStore + 'static,
{
  let input = accept(body)?;
  Ok(Json(service.create(input).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /trials/:id` — replaces every field; omitted optional fields become
/// null.
pub async fn update<S>(
  State(service): State<TrialService<S>>,
  id: Result<Path<i64>, PathRejection>,
  body: Result<Json<NewTrial>, JsonRejection>,
) -> Result<Json<Trial>, ApiError>
where
  S: TrialStore + 'static,
{
  let Path(id) = id?;
  let input = accept(body)?;
  Ok(Json(service.update(id, input).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Deleted {
  pub message: &'static str,
}

/// `DELETE /trials/:id`
pub async fn delete_one<S>(
  State(service): State<TrialService<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Deleted>, ApiError>
where
  S: TrialStore + 'static,
{
  let Path(id) = id?;
  service.delete(id).await?;
  Ok(Json(Deleted { message: "Trial deleted" }))
}
