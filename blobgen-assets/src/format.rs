use std::fmt;

/// Pixel layout of an embedded image, named after the GL upload format the
/// host uses for it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChannelFormat {
    Luminance,
    Bgr,
    Bgra,
}

impl ChannelFormat {
    pub fn from_channels(channels: usize) -> Option<ChannelFormat> {
        match channels {
            2 => Some(ChannelFormat::Luminance),
            3 => Some(ChannelFormat::Bgr),
            4 => Some(ChannelFormat::Bgra),
            _ => None,
        }
    }

    pub fn channels(&self) -> usize {
        match self {
            ChannelFormat::Luminance => 2,
            ChannelFormat::Bgr => 3,
            ChannelFormat::Bgra => 4,
        }
    }

    pub fn gl_name(&self) -> &'static str {
        match self {
            ChannelFormat::Luminance => "GL_LUMINANCE",
            ChannelFormat::Bgr => "GL_BGR",
            ChannelFormat::Bgra => "GL_BGRA",
        }
    }
}

impl fmt::Display for ChannelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gl_name())
    }
}
