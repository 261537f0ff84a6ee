use serde::{Deserialize, Serialize};

use crate::error::ImageError;
use crate::raster::PixelBuffer;

/// Intensities extracted from the drawing surface, one byte per pixel in
/// row-major order, together with the grid dimensions.
///
/// Serializes as `{ "data": [..], "width": w, "height": h }`, the body the
/// classification endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawImage")]
pub struct GrayScaleImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct RawImage {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl TryFrom<RawImage> for GrayScaleImage {
    type Error = ImageError;

    fn try_from(raw: RawImage) -> Result<Self, Self::Error> {
        GrayScaleImage::new(raw.data, raw.width, raw.height)
    }
}

impl GrayScaleImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(ImageError::DimensionMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub(crate) fn from_buffer(buffer: &PixelBuffer) -> Self {
        Self {
            data: buffer.pixels().to_vec(),
            width: buffer.width(),
            height: buffer.height(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_data_that_does_not_fill_the_grid() {
        let err = GrayScaleImage::new(vec![0; 10], 4, 3).unwrap_err();
        assert_eq!(
            err,
            ImageError::DimensionMismatch {
                width: 4,
                height: 3,
                expected: 12,
                actual: 10,
            }
        );
        assert_eq!(err.to_string(), "expected 12 pixels for a 4x3 image, got 10");
    }

    #[test]
    fn serializes_to_the_endpoint_payload_shape() {
        let image = GrayScaleImage::new(vec![0, 255, 17, 3], 2, 2).unwrap();
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "data": [0, 255, 17, 3], "width": 2, "height": 2 })
        );
    }

    #[test]
    fn deserialization_enforces_the_length_invariant() {
        let ok: GrayScaleImage =
            serde_json::from_str(r#"{"data":[1,2,3],"width":3,"height":1}"#).unwrap();
        assert_eq!(ok.len(), 3);

        let bad = serde_json::from_str::<GrayScaleImage>(r#"{"data":[1,2],"width":3,"height":1}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn empty_grid_is_valid() {
        let image = GrayScaleImage::new(Vec::new(), 0, 5).unwrap();
        assert!(image.is_empty());
    }
}
