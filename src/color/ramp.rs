//! Light-to-dark color ramp generation

use crate::color::Rgb;
use crate::io::error::{Result, invalid_argument};

/// Maximum white blend at the lightest ramp extreme
const LIGHT_MIX: f64 = 0.6;
/// Maximum black blend at the darkest ramp extreme
const DARK_MIX: f64 = 0.7;

/// Generate a light-to-dark ramp centered on a base color
///
/// The center index (`steps / 2`) holds `base` exactly. Earlier indices
/// blend toward white, up to 60% at the lightest extreme; later indices
/// blend toward black, up to 70% at the darkest. All channel math truncates,
/// so per-step brightness (channel sum) never increases.
///
/// `steps` should be odd for a symmetric ramp.
///
/// # Errors
///
/// Returns `InvalidArgument` when `steps` is zero
pub fn generate_ramp(base: Rgb, steps: usize) -> Result<Vec<Rgb>> {
    if steps == 0 {
        return Err(invalid_argument("steps", &steps, &"must be positive"));
    }

    let center = steps / 2;
    let mut colors = Vec::with_capacity(steps);

    for i in 0..steps {
        let color = if i < center {
            let factor = (center - i) as f64 / center as f64 * LIGHT_MIX;
            lighten(base, factor)
        } else if i > center {
            let span = (steps - center - 1).max(1) as f64;
            let factor = (i - center) as f64 / span * DARK_MIX;
            darken(base, factor)
        } else {
            base
        };
        colors.push(color);
    }

    Ok(colors)
}

fn lighten(base: Rgb, factor: f64) -> Rgb {
    base.map(|c| (f64::from(c) + f64::from(255 - c) * factor) as u8)
}

fn darken(base: Rgb, factor: f64) -> Rgb {
    base.map(|c| (f64::from(c) * (1.0 - factor)) as u8)
}
