//! Album API routes

use crate::album_store::validation::{parse_album_update, parse_new_album};
use crate::album_store::{Album, AlbumId};

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::error::ApiError;
use super::metrics;
use super::state::{GuardedAlbumStore, ServerState};

#[derive(Serialize)]
struct AlbumsResponse {
    albums: Vec<Album>,
    total: usize,
}

#[derive(Serialize)]
struct CreatedAlbumResponse {
    message: &'static str,
    album: Album,
}

#[derive(Serialize)]
struct UpdatedAlbumResponse {
    message: &'static str,
    album: Album,
    updated_fields: Vec<&'static str>,
}

#[derive(Serialize)]
struct DeletedAlbumResponse {
    message: &'static str,
    deleted_album: Album,
}

#[derive(Deserialize)]
struct SearchParams {
    q: String,
}

#[derive(Serialize)]
struct SearchResponse {
    query: String,
    results: Vec<Album>,
    total: usize,
}

async fn list_albums(State(store): State<GuardedAlbumStore>) -> Json<AlbumsResponse> {
    let albums = store.list();
    let total = albums.len();
    info!(
        operation = "get_albums",
        album_count = total,
        "Retrieving all albums. Total count: {}",
        total
    );
    Json(AlbumsResponse { albums, total })
}

async fn get_album(
    State(store): State<GuardedAlbumStore>,
    path: Result<Path<AlbumId>, PathRejection>,
) -> Result<Json<Album>, ApiError> {
    let Path(album_id) = path?;
    info!(
        operation = "get_album",
        album_id,
        "Retrieving album with ID: {}",
        album_id
    );

    let album = store.get(album_id).map_err(|err| {
        warn!(album_id, "Album with ID {} not found", album_id);
        err
    })?;

    info!(album_id, "Found album: {} by {}", album.title, album.artist);
    Ok(Json(album))
}

async fn create_album(
    State(store): State<GuardedAlbumStore>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedAlbumResponse>, ApiError> {
    let Json(body) = body?;
    let new_album = parse_new_album(&body)?;
    info!(
        operation = "create_album",
        "Creating new album: {} by {}",
        new_album.title,
        new_album.artist
    );

    let album = store.insert(new_album);
    metrics::set_albums_count(store.len());

    info!(
        album_id = album.id,
        album_count = store.len(),
        "Successfully created album with ID: {}",
        album.id
    );
    Ok(Json(CreatedAlbumResponse {
        message: "Album created successfully",
        album,
    }))
}

async fn update_album(
    State(store): State<GuardedAlbumStore>,
    path: Result<Path<AlbumId>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdatedAlbumResponse>, ApiError> {
    let Path(album_id) = path?;
    let Json(body) = body?;
    let update = parse_album_update(&body)?;
    info!(
        operation = "update_album",
        album_id,
        "Updating album with ID: {}",
        album_id
    );

    let updated = store.update(album_id, update).map_err(|err| {
        warn!(album_id, "Album with ID {} not found for update", album_id);
        err
    })?;

    let fields = updated.updated_fields.join(", ");
    info!(
        album_id,
        updated_fields = %fields,
        "Updated album {}. Fields updated: {}",
        album_id,
        fields
    );
    Ok(Json(UpdatedAlbumResponse {
        message: "Album updated successfully",
        album: updated.album,
        updated_fields: updated.updated_fields,
    }))
}

async fn delete_album(
    State(store): State<GuardedAlbumStore>,
    path: Result<Path<AlbumId>, PathRejection>,
) -> Result<Json<DeletedAlbumResponse>, ApiError> {
    let Path(album_id) = path?;
    info!(
        operation = "delete_album",
        album_id,
        "Attempting to delete album with ID: {}",
        album_id
    );

    let deleted_album = store.delete(album_id).map_err(|err| {
        warn!(album_id, "Album with ID {} not found for deletion", album_id);
        err
    })?;
    metrics::set_albums_count(store.len());

    info!(
        album_id,
        album_count = store.len(),
        "Successfully deleted album: {} by {}",
        deleted_album.title,
        deleted_album.artist
    );
    Ok(Json(DeletedAlbumResponse {
        message: "Album deleted successfully",
        deleted_album,
    }))
}

async fn search_albums(
    State(store): State<GuardedAlbumStore>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(SearchParams { q }) = query?;
    info!(
        operation = "search_albums",
        query = %q,
        "Searching albums with query: '{}'",
        q
    );

    let results = store.search(&q).map_err(|err| {
        warn!(query = %q, "Empty search query provided");
        err
    })?;

    let total = results.len();
    info!(
        query = %q,
        results_count = total,
        "Search for '{}' returned {} results",
        q,
        total
    );
    Ok(Json(SearchResponse {
        query: q,
        results,
        total,
    }))
}

pub fn make_album_routes() -> Router<ServerState> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route("/albums/search", get(search_albums))
        .route(
            "/albums/{id}",
            get(get_album).put(update_album).delete(delete_album),
        )
}
