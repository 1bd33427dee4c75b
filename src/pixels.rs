pub type SubPixel = f64;
pub type Pixel = [SubPixel; CHANNELS_PER_PIXEL];
pub type ImageBuffer = Vec<Pixel>;

pub const CHANNELS_PER_PIXEL: usize = 3;

pub trait PixelOps {
    fn channel_sum(self) -> SubPixel;
    fn max_channel(self) -> SubPixel;
    fn min_channel(self) -> SubPixel;
}

impl PixelOps for Pixel {
    fn channel_sum(self) -> SubPixel {
        let [r, g, b] = self;
        r + g + b
    }
    fn max_channel(self) -> SubPixel {
        let [r, g, b] = self;
        r.max(g).max(b)
    }
    fn min_channel(self) -> SubPixel {
        let [r, g, b] = self;
        r.min(g).min(b)
    }
}
