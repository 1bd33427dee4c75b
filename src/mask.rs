use crate::conditional_paralell::prelude::*;
use crate::image_data::Image;
use crate::region::Point;

pub const KEEP: u8 = 0;
pub const EXCLUDED: u8 = 255;

/// Row-major exclusion flags. Any value greater than zero marks the pixel as
/// excluded; readers never look at the magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

#[inline]
pub fn is_excluded(value: u8) -> bool {
    value > KEEP
}

impl Mask {
    pub fn new(width: usize, height: usize) -> Mask {
        Mask { data: vec![KEEP; width * height], width, height }
    }

    pub fn excluded(width: usize, height: usize) -> Mask {
        Mask { data: vec![EXCLUDED; width * height], width, height }
    }

    pub fn for_image(image: &Image) -> Mask {
        Mask::new(image.width, image.height)
    }

    pub fn from_vec(data: Vec<u8>, width: usize, height: usize) -> Mask {
        let mask = Mask { data, width, height };
        mask.check_buffer();
        mask
    }

    /// Panics unless the buffer length matches the declared size.
    pub fn check_buffer(&self) {
        assert_eq!(
            self.data.len(),
            self.width * self.height,
            "mask buffer holds {} entries but {}x{} needs {}",
            self.data.len(), self.width, self.height, self.width * self.height
        );
    }

    /// Panics unless the mask and the image have identical dimensions and
    /// both buffers match them.
    pub fn check_dimensions(&self, image: &Image) {
        self.check_buffer();
        image.check_buffer();
        assert!(
            self.width == image.width && self.height == image.height,
            "mask is {}x{} but image is {}x{}",
            self.width, self.height, image.width, image.height
        );
    }

    #[inline]
    fn index(&self, point: Point) -> usize {
        assert!(
            point.row < self.height && point.col < self.width,
            "point (row {}, col {}) outside {}x{} mask",
            point.row, point.col, self.width, self.height
        );
        point.row * self.width + point.col
    }

    pub fn is_excluded(&self, point: Point) -> bool {
        is_excluded(self.data[self.index(point)])
    }

    pub fn set(&mut self, point: Point, value: u8) {
        let idx = self.index(point);
        self.data[idx] = value;
    }

    pub fn exclude(&mut self, point: Point) {
        self.set(point, EXCLUDED)
    }

    pub fn excluded_count(&self) -> usize {
        self.data.par_iter().filter(|v| is_excluded(**v)).count()
    }

    pub fn kept_count(&self) -> usize {
        self.data.len() - self.excluded_count()
    }

    /// ORs the exclusions of `other` into `self`.
    pub fn union(&mut self, other: &Mask) {
        self.check_buffer();
        other.check_buffer();
        assert!(
            self.width == other.width && self.height == other.height,
            "cannot combine {}x{} mask with {}x{} mask",
            self.width, self.height, other.width, other.height
        );
        self.data.par_iter_mut().zip(other.data.par_iter()).for_each(|(value, other_value)| {
            if is_excluded(*other_value) {
                *value = EXCLUDED;
            }
        });
    }

    /// Grayscale view, excluded pixels white.
    pub fn to_luma_image(&self) -> image::GrayImage {
        let data = self.data.iter().map(|v| if is_excluded(*v) { EXCLUDED } else { KEEP }).collect();
        let (width, height) = match (u32::try_from(self.width), u32::try_from(self.height)) {
            (Ok(width), Ok(height)) => (width, height),
            _ => panic!("{}x{} mask is too large for an image buffer", self.width, self.height),
        };
        image::GrayImage::from_raw(width, height, data)
            .unwrap_or_else(|| panic!("mask buffer does not match {}x{}", self.width, self.height))
    }
}
