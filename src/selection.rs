//! Splitting an image into masked and unmasked pixels, either over the whole
//! frame or over the coordinates of a single region.
//!
//! None of these functions touch the image or the mask. Dimension mismatches
//! and region points outside the image panic.

use crate::conditional_paralell::prelude::*;
use crate::image_data::Image;
use crate::mask::{is_excluded, Mask};
use crate::pixels::Pixel;
use crate::region::Region;

fn select(image: &Image, mask: &Mask, excluded: bool) -> Vec<Pixel> {
    mask.check_dimensions(image);
    image.data.par_iter().zip(mask.data.par_iter())
        .filter(|(_, value)| is_excluded(**value) == excluded)
        .map(|(pixel, _)| *pixel)
        .collect()
}

fn select_in<R>(image: &Image, region: &R, mask: &Mask, excluded: bool) -> Vec<Pixel>
where
    R: Region + ?Sized,
{
    mask.check_dimensions(image);
    region.points()
        .map(|point| image.index(point))
        .filter(|idx| is_excluded(mask.data[*idx]) == excluded)
        .map(|idx| image.data[idx])
        .collect()
}

/// Pixels whose mask entry is nonzero, in row-major order.
pub fn masked_pixels(image: &Image, mask: &Mask) -> Vec<Pixel> {
    select(image, mask, true)
}

/// Pixels whose mask entry is zero, in row-major order.
pub fn unmasked_pixels(image: &Image, mask: &Mask) -> Vec<Pixel> {
    select(image, mask, false)
}

/// Masked pixels of `region`, in the region's iteration order.
pub fn masked_pixels_in<R: Region + ?Sized>(image: &Image, region: &R, mask: &Mask) -> Vec<Pixel> {
    select_in(image, region, mask, true)
}

pub fn unmasked_pixels_in<R: Region + ?Sized>(image: &Image, region: &R, mask: &Mask) -> Vec<Pixel> {
    select_in(image, region, mask, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::{Point, Superpixel};

    fn get_image() -> Image {
        // pixel value encodes its row-major index
        let data = (0..12).map(|i| [i as f64, 0.0, 0.0]).collect();
        Image::new(data, 4, 3)
    }

    #[test]
    fn test_partition(){
        let image = get_image();
        let mask = Mask::from_vec(vec![
            0, 1, 0, 0,
            255, 0, 0, 2,
            0, 0, 0, 9,
        ], 4, 3);

        let masked = masked_pixels(&image, &mask);
        let unmasked = unmasked_pixels(&image, &mask);

        assert_eq!(masked, vec![[1.0, 0.0, 0.0], [4.0, 0.0, 0.0], [7.0, 0.0, 0.0], [11.0, 0.0, 0.0]]);
        assert_eq!(masked.len() + unmasked.len(), 12);
        assert!(unmasked.iter().all(|p| !masked.contains(p)));
        let unmasked_idx: Vec<f64> = unmasked.iter().map(|p| p[0]).collect();
        assert_eq!(unmasked_idx, vec![0.0, 2.0, 3.0, 5.0, 6.0, 8.0, 9.0, 10.0]);
    }

    #[test]
    fn test_empty_selection(){
        let image = get_image();
        let mask = Mask::for_image(&image);

        assert!(masked_pixels(&image, &mask).is_empty());
        assert_eq!(unmasked_pixels(&image, &mask), image.data);
    }

    #[test]
    fn test_region_partition_keeps_region_order(){
        let image = get_image();
        let mut mask = Mask::for_image(&image);
        mask.exclude(Point::new(2, 3));
        mask.exclude(Point::new(0, 0));

        let superpixel = Superpixel::new(vec![
            Point::new(2, 3),
            Point::new(1, 1),
            Point::new(0, 0),
            Point::new(0, 2),
        ]);

        let masked = masked_pixels_in(&image, &superpixel, &mask);
        let unmasked = unmasked_pixels_in(&image, &superpixel, &mask);

        assert_eq!(masked, vec![[11.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        assert_eq!(unmasked, vec![[5.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
        assert_eq!(masked.len() + unmasked.len(), superpixel.len());
    }

    #[test]
    fn test_region_as_slice(){
        let image = get_image();
        let mask = Mask::for_image(&image);
        let points = [Point::new(1, 2)];

        assert_eq!(unmasked_pixels_in(&image, &points[..], &mask), vec![[6.0, 0.0, 0.0]]);
    }

    #[test]
    #[should_panic(expected = "mask is 3x4 but image is 4x3")]
    fn test_dimension_mismatch(){
        let image = get_image();
        let mask = Mask::new(3, 4);
        masked_pixels(&image, &mask);
    }

    #[test]
    #[should_panic(expected = "image buffer holds 3 pixels but 2x2 needs 4")]
    fn test_short_image_buffer_is_not_truncated(){
        let image = Image { data: vec![[1.0, 1.0, 1.0]; 3], width: 2, height: 2 };
        let mask = Mask::new(2, 2);
        unmasked_pixels(&image, &mask);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_region_out_of_bounds(){
        let image = get_image();
        let mask = Mask::for_image(&image);
        let region = vec![Point::new(0, 0), Point::new(3, 0)];
        unmasked_pixels_in(&image, &region, &mask);
    }
}
