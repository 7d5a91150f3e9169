use std::f64::consts::PI;

use tracing::debug;

use crate::color_pipeline::colorspace::grid::ChannelPlanes;
use crate::color_pipeline::colorspace::types::{ChannelValues, HueArgument};
use crate::color_pipeline::source::PixelSource;

pub trait ChannelConverter {
    fn convert<S: PixelSource + ?Sized>(&self, source: &S) -> ChannelPlanes;
}

// Comparison order is fixed: with a NaN operand the result depends on position.
pub fn min_of_three(x: f64, y: f64, z: f64) -> f64 {
    if x <= y && x <= z {
        x
    } else if y <= x && y <= z {
        y
    } else {
        z
    }
}

impl ChannelValues {
    /// Black pixels give a NaN saturation and gray pixels a NaN hue.
    pub fn from_rgb(r: f64, g: f64, b: f64, hue_argument: HueArgument) -> Self {
        let sum = r + g + b;
        let saturation = 1.0 - 3.0 * min_of_three(r, g, b) / sum;
        let intensity = sum / 3.0;

        let argument = 0.5 * (2.0 * r - g - b) / (r * r + b * b + g * g - r * g - r * b - g * b).sqrt();
        let theta = hue_argument.apply(argument).acos();
        // b == g takes theta, not 2π - theta
        let hue = if b <= g { theta } else { 2.0 * PI - theta };

        Self {
            hue,
            saturation,
            intensity,
            luma: 16.0 + 65.481 * r + 128.553 * g + 24.966 * b,
            cb: 128.0 - 37.797 * r - 74.203 * g + 112.0 * b,
            cr: 128.0 + 112.0 * r - 93.786 * g - 18.214 * b,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ColorspaceConverter {
    hue_argument: HueArgument,
}

impl ColorspaceConverter {
    pub fn new(hue_argument: HueArgument) -> Self {
        Self { hue_argument }
    }

    pub fn hue_argument(&self) -> HueArgument {
        self.hue_argument
    }
}

impl ChannelConverter for ColorspaceConverter {
    fn convert<S: PixelSource + ?Sized>(&self, source: &S) -> ChannelPlanes {
        let (width, height) = source.grid_size();
        debug!("Converting {}x{} pixels, hue argument {:?}", width, height, self.hue_argument);

        let mut planes = ChannelPlanes::zeroed(width, height);
        for y in 0..height {
            for x in 0..width {
                let [r, g, b] = source.rgba_at(x, y).normalized();
                let values = ChannelValues::from_rgb(r, g, b, self.hue_argument);
                planes.store(x, y, &values);
            }
        }
        planes
    }
}
