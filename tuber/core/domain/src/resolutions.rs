pub const RESOLUTIONS: &[Resolution] = &[
    Resolution::new("nHD", 640, 360),
    Resolution::new("FWVGA", 854, 480),
    Resolution::new("qHD", 960, 540),
    Resolution::new("SD", 1280, 720),
    Resolution::new("WXGA", 1366, 768),
    Resolution::new("HD+", 1600, 900),
    Resolution::new("FHD", 1920, 1080),
    Resolution::new("WQHD", 2560, 1440),
    Resolution::new("QHD+", 3200, 1800),
    Resolution::new("4K UHD", 3840, 2160),
    Resolution::new("5K", 5120, 2880),
    Resolution::new("8K UHD", 7680, 4320),
    Resolution::new("16K UHD", 15360, 8640),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    const fn new(name: &'static str, width: u32, height: u32) -> Self {
        Self { name, width, height }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        RESOLUTIONS.iter().find(|resolution| resolution.name == name).copied()
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        RESOLUTIONS.iter().map(|resolution| resolution.name)
    }
}

impl ::std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
