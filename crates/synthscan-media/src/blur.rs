//! Gradient-energy blur scoring for sampled frames.

use image::GrayImage;

/// Variance of the gradient-energy map of a luminance image.
///
/// Gradients use central differences in the interior and one-sided
/// differences at the borders; the energy at each pixel is gx² + gy².
/// Very smooth synthetic frames produce a low variance, which is the
/// sharpness proxy the scorer thresholds against.
pub fn gradient_energy_variance(img: &GrayImage) -> f64 {
    let (w, h) = (img.width() as usize, img.height() as usize);
    if w == 0 || h == 0 {
        return 0.0;
    }

    let lum: Vec<f64> = img.as_raw().iter().map(|&p| p as f64).collect();
    let at = |x: usize, y: usize| lum[y * w + x];

    let mut energy = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            // Vertical gradient (rows)
            let gy = if h == 1 {
                0.0
            } else if y == 0 {
                at(x, 1) - at(x, 0)
            } else if y == h - 1 {
                at(x, h - 1) - at(x, h - 2)
            } else {
                (at(x, y + 1) - at(x, y - 1)) / 2.0
            };

            // Horizontal gradient (columns)
            let gx = if w == 1 {
                0.0
            } else if x == 0 {
                at(1, y) - at(0, y)
            } else if x == w - 1 {
                at(w - 1, y) - at(w - 2, y)
            } else {
                (at(x + 1, y) - at(x - 1, y)) / 2.0
            };

            energy.push(gy * gy + gx * gx);
        }
    }

    variance(&energy)
}

/// Population variance.
fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_uniform_image_has_zero_variance() {
        let img = GrayImage::from_pixel(16, 16, Luma([128u8]));
        assert_eq!(gradient_energy_variance(&img), 0.0);
    }

    #[test]
    fn test_textured_image_has_positive_variance() {
        let img = GrayImage::from_fn(16, 16, |x, y| {
            if (x + y) % 2 == 0 {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        });
        assert!(gradient_energy_variance(&img) > 10.0);
    }

    #[test]
    fn test_smooth_ramp_scores_below_checkerboard() {
        let ramp = GrayImage::from_fn(32, 32, |x, _| Luma([(x * 4) as u8]));
        let checker = GrayImage::from_fn(32, 32, |x, y| {
            if (x + y) % 2 == 0 {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        });
        assert!(gradient_energy_variance(&ramp) < gradient_energy_variance(&checker));
    }

    #[test]
    fn test_degenerate_sizes() {
        let empty = GrayImage::new(0, 0);
        assert_eq!(gradient_energy_variance(&empty), 0.0);
        let single = GrayImage::from_pixel(1, 1, Luma([42u8]));
        assert_eq!(gradient_energy_variance(&single), 0.0);
    }
}
