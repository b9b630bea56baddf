/// 8-bit RGB color, the only color representation the scene stores.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self(arr)
    }

    pub const fn to_array(self) -> [u8; 3] {
        self.0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(val: [u8; 3]) -> Self {
        Rgb(val)
    }
}

pub const WHITE: Rgb = Rgb::from_array([255, 255, 255]);
pub const BLACK: Rgb = Rgb::from_array([0, 0, 0]);
pub const RED: Rgb = Rgb::from_array([255, 0, 0]);
pub const GREEN: Rgb = Rgb::from_array([0, 255, 0]);
pub const BLUE: Rgb = Rgb::from_array([0, 0, 255]);
pub const YELLOW: Rgb = Rgb::from_array([255, 255, 0]);
pub const CYAN: Rgb = Rgb::from_array([0, 255, 255]);
pub const MAGENTA: Rgb = Rgb::from_array([255, 0, 255]);
