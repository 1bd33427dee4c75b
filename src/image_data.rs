use itertools::iproduct;

use crate::pixels::{ImageBuffer, Pixel, SubPixel};
use crate::region::Point;

/// Row-major, linear three channel image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub data: ImageBuffer,
    pub width: usize,
    pub height: usize,
}

impl Image {
    pub fn new(data: ImageBuffer, width: usize, height: usize) -> Image {
        let image = Image { data, width, height };
        image.check_buffer();
        image
    }

    /// Panics unless the buffer length matches the declared size.
    pub fn check_buffer(&self) {
        assert_eq!(
            self.data.len(),
            self.width * self.height,
            "image buffer holds {} pixels but {}x{} needs {}",
            self.data.len(), self.width, self.height, self.width * self.height
        );
    }

    pub fn filled(value: Pixel, width: usize, height: usize) -> Image {
        Image::new(vec![value; width * height], width, height)
    }

    /// Panics when `point` lies outside the image.
    #[inline]
    pub fn index(&self, point: Point) -> usize {
        assert!(
            point.row < self.height && point.col < self.width,
            "point (row {}, col {}) outside {}x{} image",
            point.row, point.col, self.width, self.height
        );
        point.row * self.width + point.col
    }

    #[inline]
    pub fn get(&self, point: Point) -> Pixel {
        self.data[self.index(point)]
    }

    /// Every coordinate of the image in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.height, 0..self.width).map(|(row, col)| Point { row, col })
    }

    pub fn from_rgb32f(buffer: &image::Rgb32FImage) -> Image {
        let (width, height) = buffer.dimensions();
        let data = buffer.pixels().map(|p| p.0.map(|v| v as SubPixel)).collect();
        Image::new(data, width as usize, height as usize)
    }
}
