use std::fmt;

pub const CHANNEL_COUNT: usize = 6;

/// Declaration order is the order of every per-channel collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Hue,
    Saturation,
    Intensity,
    Luma,
    /// Blue-difference chroma
    Cb,
    /// Red-difference chroma
    Cr,
}

impl Channel {
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::Hue,
        Channel::Saturation,
        Channel::Intensity,
        Channel::Luma,
        Channel::Cb,
        Channel::Cr,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Intensity => "intensity",
            Channel::Luma => "luma",
            Channel::Cb => "cb",
            Channel::Cr => "cr",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_fixed_order() {
        for (i, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
        assert_eq!(Channel::Cr.index(), CHANNEL_COUNT - 1);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Channel::Cb.to_string(), "cb");
        assert_eq!(format!("{}", Channel::Saturation), "saturation");
    }
}
