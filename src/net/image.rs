//! Background cover-image fetcher.
//!
//! Project covers are remote URLs. Each request spawns a thread that
//! downloads and decodes the image into an RGBA buffer; the UI polls once
//! per frame. Failed URLs are remembered so the card can paint its
//! fallback instead of retrying every frame.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

/// Covers wider than this are downscaled before upload
pub const MAX_COVER_WIDTH: u32 = 800;

/// Decoded image data (RGBA).
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Load state of one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Unrequested,
    Pending,
    Ready,
    /// Fetch or decode failed; draw the fallback
    Failed,
}

/// Error from one fetch attempt.
#[derive(Debug)]
pub struct ImageError {
    pub url: String,
    pub message: String,
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.url, self.message)
    }
}

impl std::error::Error for ImageError {}

/// Manages background image fetching and decoding.
pub struct ImageLoader {
    pending: HashMap<String, mpsc::Receiver<Result<ImageData, ImageError>>>,
    loaded: HashMap<String, ImageData>,
    failed: HashSet<String>,
    enabled: bool,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
            enabled: true,
        }
    }

    /// A loader that never touches the network; every request fails fast.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Request an image to be fetched in the background.
    pub fn request(&mut self, url: &str) {
        if self.status(url) != ImageStatus::Unrequested {
            log::debug!("cover cache hit: {}", url);
            return;
        }
        if !self.enabled {
            self.failed.insert(url.to_string());
            return;
        }

        log::debug!("cover cache miss: {}", url);
        let (tx, rx) = mpsc::channel();
        let url_owned = url.to_string();

        std::thread::spawn(move || {
            let result = fetch_and_decode(&url_owned);
            let _ = tx.send(result);
        });

        self.pending.insert(url.to_string(), rx);
    }

    /// Poll for completed downloads. Call every frame.
    ///
    /// Returns the URLs that became ready this call.
    pub fn poll(&mut self) -> Vec<String> {
        let mut completed = Vec::new();
        let mut ready = Vec::new();
        for (url, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Ok(data)) => {
                    self.loaded.insert(url.clone(), data);
                    ready.push(url.clone());
                    completed.push(url.clone());
                }
                Ok(Err(e)) => {
                    log::warn!("cover fetch failed: {}", e);
                    self.failed.insert(url.clone());
                    completed.push(url.clone());
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.failed.insert(url.clone());
                    completed.push(url.clone());
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }
        for url in completed {
            self.pending.remove(&url);
        }
        ready
    }

    pub fn status(&self, url: &str) -> ImageStatus {
        if self.loaded.contains_key(url) {
            ImageStatus::Ready
        } else if self.pending.contains_key(url) {
            ImageStatus::Pending
        } else if self.failed.contains(url) {
            ImageStatus::Failed
        } else {
            ImageStatus::Unrequested
        }
    }

    /// Get a loaded image's data.
    pub fn get(&self, url: &str) -> Option<&ImageData> {
        self.loaded.get(url)
    }

    /// Number of images still being fetched.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn fetch_and_decode(url: &str) -> Result<ImageData, ImageError> {
    let err = |message: String| ImageError {
        url: url.to_string(),
        message,
    };

    let parsed = url::Url::parse(url).map_err(|e| err(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(err(format!("unsupported scheme {}", parsed.scheme())));
    }

    let resp = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(|e| err(e.to_string()))?
        .get(parsed.as_str())
        .send()
        .map_err(|e| err(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(err(format!("HTTP {}", resp.status())));
    }

    let bytes = resp.bytes().map_err(|e| err(e.to_string()))?;
    decode(&bytes).map_err(err)
}

/// Decode and cap width at [`MAX_COVER_WIDTH`].
pub fn decode(bytes: &[u8]) -> Result<ImageData, String> {
    let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if w > MAX_COVER_WIDTH {
        let ratio = MAX_COVER_WIDTH as f32 / w as f32;
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized = image::imageops::resize(
            &rgba,
            MAX_COVER_WIDTH,
            new_h,
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Ok(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_loader_fails_fast() {
        let mut loader = ImageLoader::disabled();
        loader.request("https://example.com/cover.png");
        assert_eq!(loader.status("https://example.com/cover.png"), ImageStatus::Failed);
        assert_eq!(loader.pending_count(), 0);
    }

    #[test]
    fn loader_deduplicates() {
        let mut loader = ImageLoader::new();
        loader.request("not a url");
        loader.request("not a url");
        assert!(loader.pending_count() <= 1);
    }

    #[test]
    fn garbage_bytes_do_not_decode() {
        assert!(decode(b"definitely not an image").is_err());
    }

    #[test]
    fn wide_images_are_downscaled() {
        let img = image::RgbaImage::from_pixel(1600, 400, image::Rgba([10, 20, 30, 255]));
        let mut png = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let data = decode(&png).unwrap();
        assert_eq!(data.width, MAX_COVER_WIDTH);
        assert_eq!(data.height, 200);
        assert_eq!(data.rgba.len(), (800 * 200 * 4) as usize);
    }
}
