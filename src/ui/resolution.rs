#[derive(Clone, Debug)]
pub struct Resolution {
    pub width: u16,
    pub height: u16
}

pub const MIN_RESOLUTION: Resolution = Resolution::new(80, 24);

impl Resolution {
    pub const fn new(width: u16, height: u16) -> Resolution {
        Resolution { width, height }
    }
}
