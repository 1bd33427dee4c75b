use serde::{Deserialize, Serialize};

use crate::conditional_paralell::prelude::*;
use crate::image_data::Image;
use crate::mask::{Mask, EXCLUDED, KEEP};
use crate::pixels::{Pixel, PixelOps, SubPixel};
use crate::region::Region;

/// Sets every entry whose pixel matches `predicate` to excluded. Entries that
/// are already excluded stay excluded.
fn mask_where<F>(image: &Image, mask: &mut Mask, predicate: F)
where
    F: Fn(Pixel) -> bool + Sync + Send,
{
    mask.check_dimensions(image);
    mask.data.par_iter_mut().zip(image.data.par_iter()).for_each(|(value, pixel)| {
        if predicate(*pixel) {
            *value = EXCLUDED;
        }
    });
}

/// Excludes pixels with any channel greater than or equal to `threshold`.
pub fn mask_saturated_pixels(image: &Image, mask: &mut Mask, threshold: SubPixel) {
    mask_where(image, mask, |pixel| pixel.max_channel() >= threshold)
}

/// Excludes pixels with any channel below `threshold`.
pub fn mask_min_pixels(image: &Image, mask: &mut Mask, threshold: SubPixel) {
    mask_where(image, mask, |pixel| pixel.min_channel() < threshold)
}

/// Excludes pixels whose channel sum is below `threshold`.
pub fn mask_dark_pixels(image: &Image, mask: &mut Mask, threshold: SubPixel) {
    mask_where(image, mask, |pixel| pixel.channel_sum() < threshold)
}

/// Excludes the outermost `width` rows and columns on every side.
pub fn mask_border_pixels(image: &Image, mask: &mut Mask, width: usize) {
    mask.check_dimensions(image);
    if width == 0 {
        return;
    }
    let (w, h) = (image.width, image.height);
    let on_border = |row: usize, col: usize| {
        row < width || col < width || h - row <= width || w - col <= width
    };
    mask.data.par_iter_mut().enumerate().for_each(|(idx, value)| {
        if on_border(idx / w, idx % w) {
            *value = EXCLUDED;
        }
    });
}

/// Builds an image-sized mask that starts fully excluded. Region points are
/// set to kept, or with `mask_superpixel` explicitly to excluded.
pub fn from_superpixel<R: Region + ?Sized>(image: &Image, region: &R, mask_superpixel: bool) -> Mask {
    let mut mask = Mask::excluded(image.width, image.height);
    let value = if mask_superpixel { EXCLUDED } else { KEEP };
    for point in region.points() {
        mask.set(point, value);
    }
    mask
}

pub trait MaskRule: Sync + Send {
    fn apply(&self, image: &Image, mask: &mut Mask);
    fn get_name(&self) -> String;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Saturated {
    pub threshold: SubPixel,
}

impl MaskRule for Saturated {
    fn apply(&self, image: &Image, mask: &mut Mask) {
        mask_saturated_pixels(image, mask, self.threshold)
    }

    fn get_name(&self) -> String {
        "Saturated".to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Min {
    pub threshold: SubPixel,
}

impl MaskRule for Min {
    fn apply(&self, image: &Image, mask: &mut Mask) {
        mask_min_pixels(image, mask, self.threshold)
    }

    fn get_name(&self) -> String {
        "Min".to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Dark {
    pub threshold: SubPixel,
}

impl MaskRule for Dark {
    fn apply(&self, image: &Image, mask: &mut Mask) {
        mask_dark_pixels(image, mask, self.threshold)
    }

    fn get_name(&self) -> String {
        "Dark".to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Border {
    /// Negative widths exclude nothing.
    pub width: i64,
}

impl MaskRule for Border {
    fn apply(&self, image: &Image, mask: &mut Mask) {
        mask_border_pixels(image, mask, self.width.max(0) as usize)
    }

    fn get_name(&self) -> String {
        "Border".to_string()
    }
}
