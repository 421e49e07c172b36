//! Album record types.

use serde::{Deserialize, Serialize};

pub type AlbumId = i64;

/// A single album record as stored and as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
    pub image_url: String,
}

/// Field values for a record that does not have an id yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
    pub image_url: String,
}

impl NewAlbum {
    pub fn into_album(self, id: AlbumId) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

/// Partial update. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlbumUpdate {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

impl AlbumUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
    }

    /// Applies the present fields to `album` and returns their names,
    /// always in `title, artist, price, image_url` order.
    pub fn apply_to(self, album: &mut Album) -> Vec<&'static str> {
        let mut updated_fields = Vec::new();
        if let Some(title) = self.title {
            album.title = title;
            updated_fields.push("title");
        }
        if let Some(artist) = self.artist {
            album.artist = artist;
            updated_fields.push("artist");
        }
        if let Some(price) = self.price {
            album.price = price;
            updated_fields.push("price");
        }
        if let Some(image_url) = self.image_url {
            album.image_url = image_url;
            updated_fields.push("image_url");
        }
        updated_fields
    }
}

/// Result of a successful update.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdatedAlbum {
    pub album: Album,
    pub updated_fields: Vec<&'static str>,
}

fn seed_album(id: AlbumId, title: &str, artist: &str, price: f64, image_url: &str) -> Album {
    Album {
        id,
        title: title.to_owned(),
        artist: artist.to_owned(),
        price,
        image_url: image_url.to_owned(),
    }
}

/// The six records every freshly started server is seeded with.
pub fn default_albums() -> Vec<Album> {
    vec![
        seed_album(
            1,
            "You, Me and an App Id",
            "Daprize",
            10.99,
            "https://aka.ms/albums-daprlogo",
        ),
        seed_album(
            2,
            "Seven Revision Army",
            "The Blue-Green Stripes",
            13.99,
            "https://aka.ms/albums-containerappslogo",
        ),
        seed_album(
            3,
            "Scale It Up",
            "KEDA Club",
            13.99,
            "https://aka.ms/albums-kedalogo",
        ),
        seed_album(
            4,
            "Lost in Translation",
            "MegaDNS",
            12.99,
            "https://aka.ms/albums-envoylogo",
        ),
        seed_album(
            5,
            "Lock Down Your Love",
            "V is for VNET",
            12.99,
            "https://aka.ms/albums-vnetlogo",
        ),
        seed_album(
            6,
            "Sweet Container O' Mine",
            "Guns N Probeses",
            14.99,
            "https://aka.ms/albums-containerappslogo",
        ),
    ]
}
