use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageReader;
use thiserror::Error;
use tracing::debug;

use crate::grid::PixelGrid;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("image file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported or corrupt image {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image file is empty: {}", .0.display())]
    Empty(PathBuf),
}

/// Decode any format the `image` crate understands into an RGBA8 grid.
pub fn decode(path: impl AsRef<Path>) -> Result<PixelGrid, DecodeError> {
    let path = path.as_ref();
    let meta = std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DecodeError::NotFound(path.to_path_buf()),
        _ => DecodeError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    if meta.len() == 0 {
        return Err(DecodeError::Empty(path.to_path_buf()));
    }

    let img = ImageReader::open(path)
        .map_err(|source| DecodeError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| DecodeError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| DecodeError::Format {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    debug!(path = %path.display(), width = img.width(), height = img.height(), "decoded");
    Ok(PixelGrid::from(&img))
}

/// Decode an in-memory encoded image. Errors name the source as `<memory>`.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    let path = PathBuf::from("<memory>");
    if bytes.is_empty() {
        return Err(DecodeError::Empty(path));
    }
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|source| DecodeError::Io {
            path: path.clone(),
            source,
        })?
        .decode()
        .map_err(|source| DecodeError::Format { path, source })?
        .to_rgba8();
    Ok(PixelGrid::from(&img))
}
