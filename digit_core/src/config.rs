use std::env;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://localhost:5001/read";

/// Environment variable overriding the classification endpoint.
pub const ENDPOINT_ENV: &str = "DIGIT_READ_URL";

/// Geometry and ink settings for a [`DrawingSurface`](crate::DrawingSurface).
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    /// Logical pixels per row.
    pub width: u32,
    /// Logical pixels per column.
    pub height: u32,
    /// Device pixels per logical pixel. Must be positive.
    pub scale: f64,
    /// Stroke width in logical pixels.
    pub line_width: f64,
    /// Intensity the buffer is filled with on creation and on clear.
    pub background: u8,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 28,
            height: 28,
            scale: 10.0,
            line_width: 1.5,
            background: 0,
        }
    }
}

impl SurfaceConfig {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Resolves the endpoint from the runtime environment, then from the value
    /// baked in at compile time (the only option in the browser), then falls
    /// back to [`DEFAULT_ENDPOINT`].
    pub fn from_env() -> Self {
        Self {
            endpoint: resolve_endpoint(env::var(ENDPOINT_ENV).ok(), option_env!("DIGIT_READ_URL")),
        }
    }
}

/// Picks the first non-blank candidate: runtime value, then compile-time
/// value, then [`DEFAULT_ENDPOINT`].
fn resolve_endpoint(runtime: Option<String>, baked: Option<&str>) -> String {
    runtime
        .filter(|url| !url.trim().is_empty())
        .or_else(|| {
            baked
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}
