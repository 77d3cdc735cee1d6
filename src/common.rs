pub type ColorValue = u8; // Channel value (0-255)
pub type ColorIdx = usize; // Index into PALETTE (0-7)
pub type PatternIdx = usize; // Index into the catalog's cycling order

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: ColorValue,
    pub green: ColorValue,
    pub blue: ColorValue,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(red: ColorValue, green: ColorValue, blue: ColorValue) -> Self {
        Color { red, green, blue }
    }

    pub fn is_black(&self) -> bool {
        *self == Color::BLACK
    }
}

pub const PALETTE: [Color; 8] = [
    Color::WHITE,
    // R G B
    Color::new(255, 0, 0),
    Color::new(0, 255, 0),
    Color::new(0, 0, 255),
    // Y M C
    Color::new(255, 255, 0),
    Color::new(255, 0, 255),
    Color::new(0, 255, 255),
    Color::BLACK,
];

pub const PALETTE_NAMES: [&str; 8] = [
    "white", "red", "green", "blue", "yellow", "magenta", "cyan", "black",
];
