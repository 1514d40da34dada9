//! bigdigit - Big Number Showcase Firmware
//!
//! Runs on an RP2040 board with an HD44780 character LCD, either on a
//! PCF8574 I2C backpack (I2C0: SDA=GPIO4, SCL=GPIO5) or wired in 4-bit
//! parallel mode (RS=GPIO10, EN=GPIO11, D4-D7=GPIO12-15).
//!
//! Cycles forever through every font that fits the display, followed by
//! an uptime clock in the font chosen in display.toml.

#![no_std]
#![no_main]

use core::fmt::Write as _;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Delay, Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use bigdigit_core::config::{parse_config, BusKind, Config};
use bigdigit_core::showcase::{self, render_screen};
use bigdigit_core::{BigNumberRenderer, CharacterLcd, LcdExt};
use bigdigit_drivers::{Hd44780, I2cBus, ParallelBus};

/// Embedded display configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

/// How long each showcase screen stays up
const SCREEN_TIME: Duration = Duration::from_millis(2500);

/// How long the boot screens stay up
const BOOT_SCREEN_TIME: Duration = Duration::from_secs(3);

/// Seconds the clock runs between showcase rounds
const CLOCK_SECONDS: u32 = 10;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("bigdigit demo starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    let display = config.display;
    info!(
        "Display {}x{}, font {}x{} variant {}",
        display.columns,
        display.rows,
        config.font.descriptor.columns,
        config.font.descriptor.rows,
        config.font.descriptor.variant
    );

    match display.bus {
        BusKind::I2c => {
            let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
            let bus = I2cBus::new(i2c, display.i2c_address);
            let mut lcd = Hd44780::new(bus, Delay, display.columns, display.rows);
            if let Err(e) = lcd.set_backlight(display.backlight) {
                warn!("Backlight switch failed: {:?}", Debug2Format(&e));
            }
            info!("LCD on I2C address {=u8:#x}", display.i2c_address);
            run(lcd, &config).await
        }
        BusKind::Parallel => {
            let bus = ParallelBus::new(
                Output::new(p.PIN_10, Level::Low),
                Output::new(p.PIN_11, Level::Low),
                [
                    Output::new(p.PIN_12, Level::Low),
                    Output::new(p.PIN_13, Level::Low),
                    Output::new(p.PIN_14, Level::Low),
                    Output::new(p.PIN_15, Level::Low),
                ],
            );
            let lcd = Hd44780::new(bus, Delay, display.columns, display.rows);
            info!("LCD on parallel GPIO");
            run(lcd, &config).await
        }
    }
}

/// Parse the embedded display.toml, falling back to a 20x4 I2C display
fn load_config() -> Config {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            Config::default()
        }
    }
}

/// Initialize the LCD and loop through the showcase and clock forever
async fn run<L>(mut lcd: L, config: &Config) -> !
where
    L: CharacterLcd,
    L::Error: core::fmt::Debug,
{
    if let Err(e) = lcd.init() {
        error!("LCD init failed: {:?}", Debug2Format(&e));
    }

    boot_screens(&mut lcd, config).await;

    let mut renderer = match BigNumberRenderer::new(lcd, config.font.descriptor) {
        Ok(renderer) => renderer,
        Err(e) => {
            // parse_config validated the font, this only happens with a bad default
            error!("Font does not fit the display: {:?}", e);
            loop {
                Timer::after_secs(60).await;
            }
        }
    };
    if let Err(e) = renderer.begin() {
        warn!("Glyph upload failed: {:?}", Debug2Format(&e));
    }

    let (_, rows) = renderer.lcd().dimensions();
    let script = showcase::script(rows);
    info!("Showcase with {} screens", script.len());

    loop {
        for screen in script {
            match render_screen(&mut renderer, screen) {
                Ok(cells) => trace!("Screen drawn, {} cells", cells),
                Err(e) => warn!("Screen failed: {:?}", Debug2Format(&e)),
            }
            Timer::after(SCREEN_TIME).await;
        }

        clock(&mut renderer, config).await;
    }
}

/// Plain text screens shown once after power-on
async fn boot_screens<L>(lcd: &mut L, config: &Config)
where
    L: CharacterLcd,
    L::Error: core::fmt::Debug,
{
    if let Err(e) = banner(lcd, config) {
        warn!("Boot screen failed: {:?}", Debug2Format(&e));
    }
    Timer::after(BOOT_SCREEN_TIME).await;

    if let Err(e) = lcd.clear().and_then(|_| lcd.show_special_characters()) {
        warn!("Character screen failed: {:?}", Debug2Format(&e));
    }
    Timer::after(BOOT_SCREEN_TIME).await;
}

/// Project name and bus details
fn banner<L: CharacterLcd>(lcd: &mut L, config: &Config) -> Result<(), L::Error> {
    lcd.clear()?;
    lcd.print_str("bigdigit")?;
    lcd.set_cursor(0, 1)?;
    match config.display.bus {
        BusKind::I2c => {
            lcd.print_str("I2C ")?;
            lcd.print_hex(u16::from(config.display.i2c_address))?;
        }
        BusKind::Parallel => {
            lcd.print_str("parallel")?;
        }
    }
    Ok(())
}

/// Show the uptime as mm:ss in the configured font
async fn clock<L>(renderer: &mut BigNumberRenderer<L>, config: &Config)
where
    L: CharacterLcd,
    L::Error: core::fmt::Debug,
{
    if let Err(e) = renderer.lcd_mut().clear() {
        warn!("Clear failed: {:?}", Debug2Format(&e));
    }
    if let Err(e) = renderer.initialize(config.font.descriptor) {
        warn!("Clock font rejected: {:?}", e);
        return;
    }
    config.font.apply(renderer);
    if let Err(e) = renderer.begin() {
        warn!("Glyph upload failed: {:?}", Debug2Format(&e));
    }

    let (_, rows) = renderer.lcd().dimensions();
    let row = rows.saturating_sub(renderer.font().height()) / 2;

    for _ in 0..CLOCK_SECONDS {
        let seconds = Instant::now().as_secs();
        renderer.set_cursor(0, row);
        if write!(renderer, "{:02}:{:02}", (seconds / 60) % 100, seconds % 60).is_err() {
            warn!("Clock update failed");
        }
        Timer::after_secs(1).await;
    }

    // Showcase screens expect the font's own gap setting
    let gap = renderer.font().gap_by_default();
    renderer.set_gap_between_numbers(gap);
}
