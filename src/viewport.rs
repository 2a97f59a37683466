//! Shared viewport computed from the font-face bbox.

use crate::config::CropOffsets;
use crate::error::{Error, Result};
use crate::model::{BoundingBox, Viewport};

impl Viewport {
    /// Crop the font-wide bbox. Width and height are taken after cropping.
    ///
    /// Fails when the cropped bounds or the resulting size leave `i32`.
    pub fn from_bbox(bbox: BoundingBox, crop: CropOffsets) -> Result<Self> {
        let overflow = || {
            Error::InvalidBoundingBox(format!(
                "{} {} {} {}",
                bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
            ))
        };

        let min_x = bbox.min_x;
        let min_y = bbox.min_y.checked_add(crop.min_y).ok_or_else(overflow)?;
        let max_x = bbox.max_x.checked_sub(crop.max_x).ok_or_else(overflow)?;
        let max_y = bbox.max_y.checked_add(crop.max_y).ok_or_else(overflow)?;

        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x.checked_sub(min_x).ok_or_else(overflow)?,
            height: max_y.checked_sub(min_y).ok_or_else(overflow)?,
        })
    }

    /// The `viewBox` attribute value: the four bounds, space separated.
    pub fn view_box(&self) -> String {
        format!("{} {} {} {}", self.min_x, self.min_y, self.max_x, self.max_y)
    }
}
