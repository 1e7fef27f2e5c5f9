//! Fill colors for spawned balls

use ball_physics::Rgb;

pub const PALETTE: [Rgb; 18] = [
    // Red
    Rgb::from_hex(0xFF4325),
    Rgb::from_hex(0xE72020),
    // Orange
    Rgb::from_hex(0xFF9333),
    // Yellow
    Rgb::from_hex(0xFEFA5F),
    // Green
    Rgb::from_hex(0x89F45E),
    Rgb::from_hex(0x9DFFA7),
    Rgb::from_hex(0x278A2A),
    // Blue
    Rgb::from_hex(0x6A8EFF),
    Rgb::from_hex(0xA8E5F9),
    Rgb::from_hex(0x1FFBF8),
    Rgb::from_hex(0x3253F4),
    Rgb::from_hex(0x2A438B),
    // Purple
    Rgb::from_hex(0x67419E),
    Rgb::from_hex(0xC280FF),
    Rgb::from_hex(0xE12FE1),
    Rgb::from_hex(0xF1BFFC),
    // Pink
    Rgb::from_hex(0xFCBFE9),
    Rgb::from_hex(0xFC22A0),
];
