use std::time::Instant;

use log::{debug, info};

use crate::config::MaskConfig;
use crate::image_data::Image;
use crate::mask::Mask;

/// Runs every configured rule over `image`, accumulating into `mask`.
pub fn apply_rules(image: &Image, mask: &mut Mask, config: &MaskConfig) {
    let start = Instant::now();
    for rule in &config.mask_rules {
        let now = Instant::now();
        rule.apply(image, mask);
        debug!(
            "{} execution time: {:.2?}, excluded so far: {}",
            rule.get_name(), now.elapsed(), mask.excluded_count()
        );
    }
    info!(
        "{} mask rules excluded {} of {} pixels in {:.2?}",
        config.mask_rules.len(), mask.excluded_count(), mask.data.len(), start.elapsed()
    );
}

pub fn build_mask(image: &Image, config: &MaskConfig) -> Mask {
    let mut mask = Mask::for_image(image);
    apply_rules(image, &mut mask, config);
    mask
}
