//! Aggregate statistics over the album collection.

use crate::album_store::Album;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlbumSummary {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl From<&Album> for AlbumSummary {
    fn from(album: &Album) -> Self {
        AlbumSummary {
            title: album.title.clone(),
            artist: album.artist.clone(),
            price: album.price,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlbumStats {
    pub total_albums: usize,
    pub unique_artists: usize,
    /// Distinct artist names, in order of first appearance.
    pub artists: Vec<String>,
    pub average_price: f64,
    pub most_expensive_album: Option<AlbumSummary>,
    pub cheapest_album: Option<AlbumSummary>,
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes stats from a snapshot. Ties on price go to the first album in
/// store order.
pub fn compute_stats(albums: &[Album]) -> AlbumStats {
    let mut seen = HashSet::new();
    let artists: Vec<String> = albums
        .iter()
        .filter(|album| seen.insert(album.artist.as_str()))
        .map(|album| album.artist.clone())
        .collect();

    let average_price = if albums.is_empty() {
        0.0
    } else {
        let total: f64 = albums.iter().map(|album| album.price).sum();
        round_to_cents(total / albums.len() as f64)
    };

    let mut most_expensive: Option<&Album> = None;
    let mut cheapest: Option<&Album> = None;
    for album in albums {
        if most_expensive.map_or(true, |max| album.price > max.price) {
            most_expensive = Some(album);
        }
        if cheapest.map_or(true, |min| album.price < min.price) {
            cheapest = Some(album);
        }
    }

    AlbumStats {
        total_albums: albums.len(),
        unique_artists: artists.len(),
        artists,
        average_price,
        most_expensive_album: most_expensive.map(AlbumSummary::from),
        cheapest_album: cheapest.map(AlbumSummary::from),
    }
}
