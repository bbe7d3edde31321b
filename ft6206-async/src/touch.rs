//! Core implementation of the FT62xx touch controller driver.

use embedded_hal_async::i2c::{I2c, SevenBitAddress};
use heapless::Vec;

use crate::point::TouchPoint;
use crate::registers::{
    normalize_touch_count, ChipVariant, StatusBlock, I2C_ADDRESS, MAX_TOUCHES, REG_CHIPID,
    REG_FIRMVERS, REG_NUMTOUCHES, REG_POINTRATE, REG_STATUS_BLOCK, REG_THRESHHOLD, REG_VENDID,
    STATUS_BLOCK_LEN, VENDOR_ID,
};

/// Identification and tuning registers, as read in one diagnostic pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceInfo {
    pub vendor_id: u8,
    pub chip_id: u8,
    pub firmware_version: u8,
    /// Sampling rate in Hz.
    pub point_rate: u8,
    pub threshold: u8,
}

/// A controller for the FT6206 / FT6236 / FT6236U touch interface.
///
/// Every call performs its own bus transaction. The controller is not meant to
/// be shared; wrap it in a mutex if several tasks need it.
pub struct TouchController<I2cType: I2c<SevenBitAddress>> {
    i2c: I2cType,
    report: StatusBlock,
}

impl<I2cType: I2c<SevenBitAddress>> TouchController<I2cType> {
    /// Creates a new `TouchController`.
    ///
    /// # Arguments
    ///
    /// * `i2c` - An I2C peripheral that implements `embedded-hal-async::i2c::I2c`.
    pub fn new(i2c: I2cType) -> Self {
        Self {
            i2c,
            report: StatusBlock::default(),
        }
    }

    /// Gives the bus back, consuming the controller.
    pub fn release(self) -> I2cType {
        self.i2c
    }

    /// Configures the touch threshold and checks that a supported chip answers.
    ///
    /// The threshold is written before the identity is checked, so it lands even
    /// on a device that is then rejected. Calling this again simply repeats the
    /// sequence on the same bus.
    pub async fn begin(&mut self, threshold: u8) -> Result<ChipVariant, ()> {
        self.write_register(REG_THRESHHOLD, threshold).await?;

        let vendor_id = self.read_register(REG_VENDID).await?;
        if vendor_id != VENDOR_ID {
            log::warn!("Unexpected vendor id 0x{vendor_id:02X}, expected 0x{VENDOR_ID:02X}");
            return Err(());
        }

        let chip_id = self.read_register(REG_CHIPID).await?;
        let variant = ChipVariant::from_chip_id(chip_id).ok_or_else(|| {
            log::warn!("Unsupported chip id 0x{chip_id:02X}");
        })?;

        if log::log_enabled!(log::Level::Debug) {
            if let Ok(info) = self.device_info().await {
                log::debug!("Touch controller found: {variant:?} {info:?}");
            }
        }

        Ok(variant)
    }

    /// Reads the number of active touches straight from the count register.
    ///
    /// Returns 0, 1 or 2. This is a separate transaction from [`Self::get_point`]
    /// and does not touch the cached report, so the two may disagree while
    /// fingers move.
    pub async fn touched(&mut self) -> Result<u8, ()> {
        let n = self.read_register(REG_NUMTOUCHES).await?;
        Ok(normalize_touch_count(n))
    }

    /// Refreshes the report and returns the point in slot `index`.
    ///
    /// The bus is read even when `index` is out of range. Yields
    /// [`TouchPoint::NONE`] when nothing is touched or `index > 1`. With one
    /// active touch, slot 1 still returns whatever the chip left there.
    pub async fn get_point(&mut self, index: u8) -> Result<TouchPoint, ()> {
        self.read_status_block().await?;
        Ok(self.point_at(index))
    }

    /// Reads the status block once and returns every active point from it.
    pub async fn touch_points(&mut self) -> Result<Vec<TouchPoint, MAX_TOUCHES>, ()> {
        self.read_status_block().await?;

        let mut points = Vec::new();
        for index in 0..self.report.count {
            // `count` never exceeds the capacity.
            let _ = points.push(self.point_at(index));
        }
        Ok(points)
    }

    /// Reads and decodes the 16-byte status block, replacing the cached report.
    ///
    /// On a bus error the previous report is kept.
    pub async fn read_status_block(&mut self) -> Result<StatusBlock, ()> {
        let mut data_buf = [0u8; STATUS_BLOCK_LEN];
        self.i2c
            .write_read(I2C_ADDRESS, &[REG_STATUS_BLOCK], &mut data_buf)
            .await
            .map_err(|err| {
                log::warn!("Error reading touch status block: {err:?}");
            })?;

        self.report = StatusBlock::parse(&data_buf);
        log::trace!(
            "Touches: {} slots: {:?} raw: {:02X?}",
            self.report.count,
            self.report.slots,
            self.report.raw
        );
        Ok(self.report)
    }

    /// The report decoded by the most recent successful status read.
    pub fn last_report(&self) -> &StatusBlock {
        &self.report
    }

    pub async fn threshold(&mut self) -> Result<u8, ()> {
        self.read_register(REG_THRESHHOLD).await
    }

    /// Higher values make the panel less sensitive.
    pub async fn set_threshold(&mut self, threshold: u8) -> Result<(), ()> {
        self.write_register(REG_THRESHHOLD, threshold).await
    }

    /// Reads the identification and tuning registers.
    pub async fn device_info(&mut self) -> Result<DeviceInfo, ()> {
        Ok(DeviceInfo {
            vendor_id: self.read_register(REG_VENDID).await?,
            chip_id: self.read_register(REG_CHIPID).await?,
            firmware_version: self.read_register(REG_FIRMVERS).await?,
            point_rate: self.read_register(REG_POINTRATE).await?,
            threshold: self.read_register(REG_THRESHHOLD).await?,
        })
    }

    fn point_at(&self, index: u8) -> TouchPoint {
        if self.report.count == 0 || index as usize >= MAX_TOUCHES {
            return TouchPoint::NONE;
        }
        let slot = self.report.slots[index as usize];
        TouchPoint::new(slot.x as i16, slot.y as i16, 1)
    }

    async fn read_register(&mut self, reg: u8) -> Result<u8, ()> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(I2C_ADDRESS, &[reg], &mut buf)
            .await
            .map_err(|err| {
                log::warn!("Error reading register 0x{reg:02X}: {err:?}");
            })?;
        Ok(buf[0])
    }

    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), ()> {
        self.i2c
            .write(I2C_ADDRESS, &[reg, value])
            .await
            .map_err(|err| {
                log::warn!("Error writing register 0x{reg:02X}: {err:?}");
            })
    }
}
