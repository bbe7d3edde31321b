#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those     holding buffers for the duration of a data transfer."
)]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::i2c::master::I2c;
use esp_hal::Async;
use esp_hal::{clock::CpuClock, time::Rate, timer::systimer::SystemTimer};
use esp_println::println;
use ft6206_async::{TouchController, DEFAULT_THRESHOLD};
use log::{info, warn};

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    println!("{}", info);
    loop {}
}

extern crate alloc;

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

/// Polling interval between two touch reads.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    esp_println::logger::init_logger(log::LevelFilter::Debug);
    info!("Logger initialized");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timer0 = SystemTimer::new(peripherals.SYSTIMER);
    esp_hal_embassy::init(timer0.alarm0);

    let config = esp_hal::i2c::master::Config::default().with_frequency(Rate::from_khz(100));
    let touch_i2c = I2c::new(peripherals.I2C0, config)
        .unwrap()
        .with_sda(peripherals.GPIO13)
        .with_scl(peripherals.GPIO14)
        .into_async();

    let mut touch_controller = TouchController::new(touch_i2c);
    match touch_controller.begin(DEFAULT_THRESHOLD).await {
        Ok(variant) => info!("Touch controller {variant:?} initialized."),
        Err(_) => {
            warn!("No FT62xx touch controller found.");
            loop {
                Timer::after(Duration::from_secs(1)).await;
            }
        }
    };

    spawner.spawn(read_touch(touch_controller)).unwrap();

    loop {
        Timer::after(Duration::from_secs(1)).await;
    }
}

/// Polls the controller and logs every change of the touch set.
#[embassy_executor::task]
async fn read_touch(mut touch_controller: TouchController<I2c<'static, Async>>) {
    let mut last_count = 0;
    loop {
        match touch_controller.touch_points().await {
            Ok(points) => {
                if !points.is_empty() || last_count != 0 {
                    info!("Touches detected {points:?}");
                }
                last_count = points.len();
            }
            Err(_) => warn!("Error reading touch points."),
        }
        Timer::after(POLL_INTERVAL).await;
    }
}
