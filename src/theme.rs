use crate::wifi::WifiStatus;
use crossterm::style::Color;

pub const RED: Color = Color::Rgb { r: 152, g: 41, b: 15 }; // #98290F
pub const GREEN: Color = Color::Rgb { r: 71, g: 154, b: 67 }; // #479A43
pub const YELLOW: Color = Color::Rgb { r: 127, g: 113, b: 17 }; // #7F7111

/// Foreground for the segment text
pub fn state_color(status: &WifiStatus) -> Color {
    if status.is_connected() {
        GREEN
    } else if status.is_error() {
        RED
    } else {
        YELLOW
    }
}
