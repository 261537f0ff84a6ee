//! Core of Digit Pad: a small freehand drawing surface whose pixels are sent
//! to a remote endpoint that guesses which digit was drawn.
//!
//! The crate has no browser dependencies, so the web front-end and the tests
//! drive exactly the same code.

pub mod classifier;
pub mod config;
pub mod error;
pub mod geometry;
pub mod image;
pub mod pointer;
pub mod raster;
pub mod surface;

pub use classifier::{Classification, ClassificationClient, Classifier, classify};
pub use config::{ClientConfig, SurfaceConfig};
pub use error::{ClassifyError, ImageError};
pub use geometry::Point;
pub use image::GrayScaleImage;
pub use pointer::PointerInput;
pub use surface::{DrawingSurface, Mark};
