//! An asynchronous, `no_std` driver for the FT6206 family of capacitive touch controllers.
//!
//! This driver provides a `TouchController` to interact with FT6206, FT6236 and
//! FT6236U chips over I2C. It identifies the chip, sets the touch threshold and
//! polls up to two simultaneous touch points.
//!
//! # Usage
//!
//! To use this driver, you need an I2C peripheral implementation that satisfies the
//! `embedded-hal-async::i2c::I2c` trait.
//!
//! ```ignore
//! # #![no_std]
//! # #![no_main]
//! # use esp_hal::i2c::master::I2c;
//! # use esp_hal::Config;
//! # use esp_hal::clock::CpuClock;
//! # use esp_hal::time::Rate;
//! # use embassy_executor::Spawner;
//! use ft6206_async::{TouchController, DEFAULT_THRESHOLD};
//!
//! #[esp_hal_embassy::main]
//! async fn main(_spawner: Spawner) {
//!     // Initialize peripherals and I2C
//!     let peripherals = esp_hal::init(Config::default().with_cpu_clock(CpuClock::max()));
//!     let config = esp_hal::i2c::master::Config::default().with_frequency(Rate::from_khz(100));
//!     let i2c = I2c::new(peripherals.I2C0, config)
//!         .unwrap()
//!         .with_sda(peripherals.GPIO13)
//!         .with_scl(peripherals.GPIO14)
//!         .into_async();
//!
//!     // Create the touch controller and check that a supported chip answers
//!     let mut touch = TouchController::new(i2c);
//!     touch.begin(DEFAULT_THRESHOLD).await.unwrap();
//!
//!     loop {
//!         if let Ok(point) = touch.get_point(0).await {
//!             if point.is_touched() {
//!                 // log::info!("Touch at ({}, {})", point.x, point.y);
//!             }
//!         }
//!     }
//! }
//! ```

#![no_std]

pub mod point;
pub mod registers;
pub mod touch;

pub use point::TouchPoint;
pub use registers::{ChipVariant, StatusBlock, TouchSlot, DEFAULT_THRESHOLD};
pub use touch::{DeviceInfo, TouchController};
