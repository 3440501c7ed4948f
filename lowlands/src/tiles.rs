//! Requests to the external raster tiling engine.
//!
//! The catalog does not render tiles. It only resolves which Cloud Optimized GeoTIFF a request refers to
//! ([`CogLocator`]) and which tile of the standard Web Mercator grid is requested ([`TileIndex`]). The
//! [`TileService`] passes both to a [`TileSource`].

use std::fmt::{Display, Formatter};

use bytes::Bytes;
use lowlands_types::cartesian::Rect;
use serde::{Deserialize, Serialize};

use crate::error::LowlandsError;
use crate::settings::Settings;

/// Deepest supported zoom level.
pub const MAX_ZOOM: u32 = 30;

/// Half of the width of the Web Mercator world square in meters.
const WEB_MERCATOR_EXTENT: f64 = 20_037_508.342_789_244;

/// Index of a tile in the Web Mercator tile grid. Rows go from top to bottom.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct TileIndex {
    /// Zoom level.
    pub z: u32,
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl TileIndex {
    /// Creates a tile index, checking that the tile exists at the zoom level.
    pub fn new(z: u32, x: u32, y: u32) -> Result<Self, LowlandsError> {
        let index = Self { z, x, y };
        if index.is_valid() {
            Ok(index)
        } else {
            Err(LowlandsError::InvalidTile { z, x, y })
        }
    }

    /// Returns true if the tile exists at its zoom level.
    pub fn is_valid(&self) -> bool {
        self.z <= MAX_ZOOM
            && self.x < Self::tiles_per_side(self.z)
            && self.y < Self::tiles_per_side(self.z)
    }

    /// Area covered by the tile in Web Mercator coordinates.
    pub fn bounds(&self) -> Rect {
        let tile_size = 2.0 * WEB_MERCATOR_EXTENT / Self::tiles_per_side(self.z) as f64;
        let x_min = -WEB_MERCATOR_EXTENT + self.x as f64 * tile_size;
        let y_max = WEB_MERCATOR_EXTENT - self.y as f64 * tile_size;

        Rect::new(x_min, y_max - tile_size, x_min + tile_size, y_max)
    }

    fn tiles_per_side(z: u32) -> u32 {
        1 << z.min(MAX_ZOOM)
    }
}

/// Location of a Cloud Optimized GeoTIFF in object storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CogLocator {
    bucket: String,
    key: String,
}

impl CogLocator {
    /// Creates a locator for a path relative to the bucket root. Leading slashes of the path are ignored.
    pub fn from_relative_path(bucket: &str, path: &str) -> Result<Self, LowlandsError> {
        let key = path.trim_start_matches('/');
        if key.is_empty() || bucket.is_empty() {
            return Err(LowlandsError::InvalidPath(path.to_string()));
        }

        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }

    /// Bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// `s3://` URI of the object.
    pub fn uri(&self) -> String {
        self.to_string()
    }
}

impl Display for CogLocator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

/// Tiling engine that renders tiles of Cloud Optimized GeoTIFFs.
pub trait TileSource {
    /// Returns encoded image of the tile.
    fn tile(&self, locator: &CogLocator, index: TileIndex) -> Result<Bytes, LowlandsError>;
}

/// Resolves tile requests against the configured bucket and forwards them to a [`TileSource`].
pub struct TileService<S> {
    bucket: String,
    source: S,
}

impl<S: TileSource> TileService<S> {
    /// Creates a new service reading from the bucket configured in the settings.
    pub fn new(settings: &Settings, source: S) -> Self {
        Self {
            bucket: settings.s3_bucket_name.clone(),
            source,
        }
    }

    /// Returns the tile `z/x/y` of the COG at `path`, given relative to the bucket root.
    ///
    /// The path and the tile index are checked before the source is called.
    pub fn tile(&self, path: &str, z: u32, x: u32, y: u32) -> Result<Bytes, LowlandsError> {
        let locator = CogLocator::from_relative_path(&self.bucket, path)?;
        let index = TileIndex::new(z, x, y)?;
        log::debug!("Requesting tile {z}/{x}/{y} of {locator}");

        self.source.tile(&locator, index)
    }
}
