use std::ops::Index;

use crate::color_pipeline::colorspace::channel::{CHANNEL_COUNT, Channel};
use crate::color_pipeline::colorspace::types::ChannelValues;
use crate::color_pipeline::common::error::{ColorPipelineError, Result};

/// A `width x height` plane of one derived channel, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelGrid {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl ChannelGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn from_vec(width: usize, height: usize, data: Vec<f64>) -> Result<Self> {
        let expected = width * height;
        if data.len() != expected {
            return Err(ColorPipelineError::GridSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside {}x{}", self.width, self.height);
        self.data[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[f64] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().fold(0.0, |acc, &v| acc + v)
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, value: f64) {
        self.data[y * self.width + x] = value;
    }
}

/// Six same-sized planes, indexed by [`Channel`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPlanes {
    width: usize,
    height: usize,
    grids: [ChannelGrid; CHANNEL_COUNT],
}

impl ChannelPlanes {
    pub(crate) fn zeroed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grids: std::array::from_fn(|_| ChannelGrid::new(width, height)),
        }
    }

    pub fn from_grids(grids: [ChannelGrid; CHANNEL_COUNT]) -> Result<Self> {
        let (width, height) = (grids[0].width, grids[0].height);
        for (channel, grid) in Channel::ALL.iter().zip(&grids) {
            if grid.width != width || grid.height != height {
                return Err(ColorPipelineError::PlaneDimensionMismatch {
                    channel: *channel,
                    width: grid.width,
                    height: grid.height,
                    expected_width: width,
                    expected_height: height,
                });
            }
        }
        Ok(Self { width, height, grids })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn grid(&self, channel: Channel) -> &ChannelGrid {
        &self.grids[channel.index()]
    }

    pub fn grids(&self) -> &[ChannelGrid; CHANNEL_COUNT] {
        &self.grids
    }

    pub fn value(&self, channel: Channel, x: usize, y: usize) -> f64 {
        self.grid(channel).get(x, y)
    }

    pub fn pixel(&self, x: usize, y: usize) -> ChannelValues {
        ChannelValues {
            hue: self.value(Channel::Hue, x, y),
            saturation: self.value(Channel::Saturation, x, y),
            intensity: self.value(Channel::Intensity, x, y),
            luma: self.value(Channel::Luma, x, y),
            cb: self.value(Channel::Cb, x, y),
            cr: self.value(Channel::Cr, x, y),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &ChannelGrid)> {
        Channel::ALL.into_iter().zip(self.grids.iter())
    }

    pub(crate) fn store(&mut self, x: usize, y: usize, values: &ChannelValues) {
        for channel in Channel::ALL {
            self.grids[channel.index()].set(x, y, values.get(channel));
        }
    }
}

impl Index<Channel> for ChannelPlanes {
    type Output = ChannelGrid;

    fn index(&self, channel: Channel) -> &ChannelGrid {
        self.grid(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_is_row_major() {
        let grid = ChannelGrid::from_vec(3, 2, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        assert_eq!(grid.get(2, 0), 2.0);
        assert_eq!(grid.get(0, 1), 3.0);
        assert_eq!(grid.row(1), &[3.0, 4.0, 5.0]);
        assert_eq!(grid.sum(), 15.0);
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        let result = ChannelGrid::from_vec(2, 2, vec![1.0; 3]);

        assert!(matches!(
            result.unwrap_err(),
            ColorPipelineError::GridSizeMismatch { expected: 4, actual: 3 }
        ));
    }

    #[test]
    fn test_empty_grid_sums_to_zero() {
        assert_eq!(ChannelGrid::new(0, 7).sum(), 0.0);
        assert!(ChannelGrid::new(5, 0).is_empty());
    }

    #[test]
    fn test_from_grids_rejects_mixed_sizes() {
        let mut grids: [ChannelGrid; CHANNEL_COUNT] = std::array::from_fn(|_| ChannelGrid::new(2, 2));
        grids[Channel::Cb.index()] = ChannelGrid::new(2, 3);

        match ChannelPlanes::from_grids(grids) {
            Err(ColorPipelineError::PlaneDimensionMismatch { channel, height, .. }) => {
                assert_eq!(channel, Channel::Cb);
                assert_eq!(height, 3);
            }
            other => panic!("expected dimension mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_store_and_read_back_pixel() {
        let mut planes = ChannelPlanes::zeroed(2, 1);
        let values = ChannelValues {
            hue: 1.0,
            saturation: 2.0,
            intensity: 3.0,
            luma: 4.0,
            cb: 5.0,
            cr: 6.0,
        };
        planes.store(1, 0, &values);

        assert_eq!(planes.pixel(1, 0), values);
        assert_eq!(planes[Channel::Luma].get(1, 0), 4.0);
        assert_eq!(planes.value(Channel::Cr, 0, 0), 0.0);
    }
}
