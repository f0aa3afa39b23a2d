pub const SIGNATURE: [u8; SIGNATURE_SIZE] = [
    0xff, 0xff, 0x01, 0x00, 0x0d, 0x00, 0x43, 0x54, 0x6f, 0x70, 0x6f, 0x57, 0x61, 0x79, 0x70,
    0x6f, 0x69, 0x6e, 0x74,
];
pub const SIGNATURE_SIZE: usize = 19;
pub const COUNT_SIZE: usize = 2;
pub const HEADER_SIZE: usize = COUNT_SIZE + SIGNATURE_SIZE;

pub const MAX_WAYPOINTS: usize = 65535;
pub const MAX_STRING_SIZE: usize = 255;

pub const RESERVED_SIZE: usize = 4;
pub const RESERVED: [u8; RESERVED_SIZE] = [0x78, 0x56, 0x34, 0x12];

pub const TERMINATOR_SIZE: usize = 2;
pub const TERMINATOR: [u8; TERMINATOR_SIZE] = [0x01, 0x80];
pub const LAST_TERMINATOR: [u8; TERMINATOR_SIZE] = [0x00, 0x00];

pub const FEET_TO_METERS: f64 = 0.3048;
pub const METERS_TO_FEET: f64 = 3.2808399;

pub const DEFAULT_DATUM: &str = "N. America 1927 mean";
pub const SHORT_NAME_LENGTH: usize = 32;
