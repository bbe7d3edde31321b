//! Register map and status block layout of the FT62xx family.

/// Fixed 7-bit bus address of every FT62xx part.
pub const I2C_ADDRESS: u8 = 0x38;

// --- Register Addresses ---
pub const REG_STATUS_BLOCK: u8 = 0x00;
pub const REG_NUMTOUCHES: u8 = 0x02;
pub const REG_THRESHHOLD: u8 = 0x80;
pub const REG_POINTRATE: u8 = 0x88;
pub const REG_CHIPID: u8 = 0xA3;
pub const REG_FIRMVERS: u8 = 0xA6;
pub const REG_VENDID: u8 = 0xA8;

// --- Identification ---
pub const VENDOR_ID: u8 = 0x11;
pub const FT6206_CHIPID: u8 = 0x06;
pub const FT6236_CHIPID: u8 = 0x36;
pub const FT6236U_CHIPID: u8 = 0x64;

/// Threshold written by `begin` when the caller has no better value.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Number of touch slots the controller tracks.
pub const MAX_TOUCHES: usize = 2;

// --- Status block layout ---
pub const STATUS_BLOCK_LEN: usize = 16;
const GESTURE_OFFSET: usize = 0x01;
const COUNT_OFFSET: usize = 0x02;
const SLOT_BASE: usize = 0x03;
const SLOT_STRIDE: usize = 6;
const XH_OFFSET: usize = 0;
const XL_OFFSET: usize = 1;
const YH_OFFSET: usize = 2;
const YL_OFFSET: usize = 3;

const COORD_HIGH_MASK: u8 = 0x0F;
const TOUCH_ID_SHIFT: u8 = 4;

/// The accepted chip variants, keyed by the `CHIPID` register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipVariant {
    Ft6206,
    Ft6236,
    Ft6236U,
}

impl ChipVariant {
    /// Maps a raw chip id to a variant, `None` for anything unrecognised.
    pub fn from_chip_id(id: u8) -> Option<Self> {
        match id {
            FT6206_CHIPID => Some(Self::Ft6206),
            FT6236_CHIPID => Some(Self::Ft6236),
            FT6236U_CHIPID => Some(Self::Ft6236U),
            _ => None,
        }
    }

    pub fn chip_id(&self) -> u8 {
        match self {
            Self::Ft6206 => FT6206_CHIPID,
            Self::Ft6236 => FT6236_CHIPID,
            Self::Ft6236U => FT6236U_CHIPID,
        }
    }
}

/// Collapses any count the hardware should never report to zero.
pub fn normalize_touch_count(raw: u8) -> u8 {
    if raw as usize > MAX_TOUCHES {
        0
    } else {
        raw
    }
}

/// Joins the low nibble of `high` and all of `low` into a 12-bit value.
fn coord12(high: u8, low: u8) -> u16 {
    (((high & COORD_HIGH_MASK) as u16) << 8) | low as u16
}

/// Decoded contents of one touch slot.
///
/// Slots past the reported count still hold whatever the chip left in the
/// block, so callers must gate on [`StatusBlock::count`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchSlot {
    /// 12-bit X coordinate.
    pub x: u16,
    /// 12-bit Y coordinate.
    pub y: u16,
    /// 4-bit id the controller uses to follow a finger between samples.
    pub id: u8,
}

/// One decoded read of the 16-byte status block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBlock {
    /// The raw bytes as read from the bus.
    pub raw: [u8; STATUS_BLOCK_LEN],
    /// Active touches, always 0, 1 or 2.
    pub count: u8,
    /// Raw gesture byte. Not interpreted.
    pub gesture: u8,
    /// Both slots, decoded regardless of `count`.
    pub slots: [TouchSlot; MAX_TOUCHES],
}

impl StatusBlock {
    /// Decodes a raw status block.
    pub fn parse(raw: &[u8; STATUS_BLOCK_LEN]) -> Self {
        let mut slots = [TouchSlot::default(); MAX_TOUCHES];
        for (i, slot) in slots.iter_mut().enumerate() {
            let base = SLOT_BASE + i * SLOT_STRIDE;
            let yh = raw[base + YH_OFFSET];
            *slot = TouchSlot {
                x: coord12(raw[base + XH_OFFSET], raw[base + XL_OFFSET]),
                y: coord12(yh, raw[base + YL_OFFSET]),
                id: yh >> TOUCH_ID_SHIFT,
            };
        }

        Self {
            raw: *raw,
            count: normalize_touch_count(raw[COUNT_OFFSET]),
            gesture: raw[GESTURE_OFFSET],
            slots,
        }
    }
}
