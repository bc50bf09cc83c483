//! Taking GPIOs by number
//!
//! Pin numbers for the cube lines come from `cube.toml`, so the firmware's
//! generated tables name GPIOs by number rather than by peripheral field.
//! GPIO 23-25 and 29 are board functions on the Pico and cannot be taken.

/// Take a GPIO by number from peripherals as a released `Flex` pin
///
/// Usage:
/// ```ignore
/// let line = flex_pin!(p, 10); // Flex over p.PIN_10
/// ```
#[macro_export]
macro_rules! flex_pin {
    ($p:expr, 0) => { embassy_rp::gpio::Flex::new($p.PIN_0) };
    ($p:expr, 1) => { embassy_rp::gpio::Flex::new($p.PIN_1) };
    ($p:expr, 2) => { embassy_rp::gpio::Flex::new($p.PIN_2) };
    ($p:expr, 3) => { embassy_rp::gpio::Flex::new($p.PIN_3) };
    ($p:expr, 4) => { embassy_rp::gpio::Flex::new($p.PIN_4) };
    ($p:expr, 5) => { embassy_rp::gpio::Flex::new($p.PIN_5) };
    ($p:expr, 6) => { embassy_rp::gpio::Flex::new($p.PIN_6) };
    ($p:expr, 7) => { embassy_rp::gpio::Flex::new($p.PIN_7) };
    ($p:expr, 8) => { embassy_rp::gpio::Flex::new($p.PIN_8) };
    ($p:expr, 9) => { embassy_rp::gpio::Flex::new($p.PIN_9) };
    ($p:expr, 10) => { embassy_rp::gpio::Flex::new($p.PIN_10) };
    ($p:expr, 11) => { embassy_rp::gpio::Flex::new($p.PIN_11) };
    ($p:expr, 12) => { embassy_rp::gpio::Flex::new($p.PIN_12) };
    ($p:expr, 13) => { embassy_rp::gpio::Flex::new($p.PIN_13) };
    ($p:expr, 14) => { embassy_rp::gpio::Flex::new($p.PIN_14) };
    ($p:expr, 15) => { embassy_rp::gpio::Flex::new($p.PIN_15) };
    ($p:expr, 16) => { embassy_rp::gpio::Flex::new($p.PIN_16) };
    ($p:expr, 17) => { embassy_rp::gpio::Flex::new($p.PIN_17) };
    ($p:expr, 18) => { embassy_rp::gpio::Flex::new($p.PIN_18) };
    ($p:expr, 19) => { embassy_rp::gpio::Flex::new($p.PIN_19) };
    ($p:expr, 20) => { embassy_rp::gpio::Flex::new($p.PIN_20) };
    ($p:expr, 21) => { embassy_rp::gpio::Flex::new($p.PIN_21) };
    ($p:expr, 22) => { embassy_rp::gpio::Flex::new($p.PIN_22) };
    ($p:expr, 26) => { embassy_rp::gpio::Flex::new($p.PIN_26) };
    ($p:expr, 27) => { embassy_rp::gpio::Flex::new($p.PIN_27) };
    ($p:expr, 28) => { embassy_rp::gpio::Flex::new($p.PIN_28) };
}

