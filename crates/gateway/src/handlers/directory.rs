//! Static directory handlers
//!
//! Serve the embedded partner and event snapshots through the same
//! filter contract as the read endpoints, without a store round-trip.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{extract::Filters, AppState};
use community_hub_common::directory::{Dataset, DirectoryCriteria, DirectoryView};

#[derive(Debug, Serialize)]
pub struct DirectoryResponse {
    pub dataset: Dataset,
    /// Values for the category control
    pub categories: Vec<String>,
    pub results: DirectoryView,
}

fn respond(state: &AppState, dataset: Dataset, criteria: &DirectoryCriteria) -> Json<DirectoryResponse> {
    let categories = state
        .directory
        .categories(dataset)
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(DirectoryResponse {
        dataset,
        categories,
        results: state.directory.render(dataset, criteria),
    })
}

/// `GET /api/directory/partners?category=&community=&q=`
pub async fn partners(
    State(state): State<AppState>,
    Filters(criteria): Filters<DirectoryCriteria>,
) -> Json<DirectoryResponse> {
    respond(&state, Dataset::Partners, &criteria)
}

/// `GET /api/directory/events?category=&community=&q=`
pub async fn events(
    State(state): State<AppState>,
    Filters(criteria): Filters<DirectoryCriteria>,
) -> Json<DirectoryResponse> {
    respond(&state, Dataset::Events, &criteria)
}
