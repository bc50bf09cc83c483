//! Build script for charliecube-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates cube.toml at compile time
//! - Generates the timing constants and pin tables the firmware includes

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Logical pins of the reference cube
const CUBE_PINS: usize = 16;

/// Voxels of the reference cube
const VOXEL_COUNT: u64 = 192;

/// Slowest acceptable lap rate with every voxel lit
const MIN_LAP_RATE_HZ: u64 = 60;

/// Longest PWM cycle in which a full-brightness node is lit on every lap
const MAX_PWM_PERIOD: i64 = 15;

/// GPIOs that are board functions on the Pico
const RESERVED_GPIOS: [i64; 4] = [23, 24, 25, 29];

fn main() {
    setup_linker();
    let config = load_config();
    let timing = validate_timing(&config);
    let lines = validate_lines(&config);
    generate(&timing, &lines);

    println!("cargo:warning=cube.toml validated successfully");
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var("CARGO_FEATURE_DEFMT").is_ok() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse cube.toml
fn load_config() -> toml::Value {
    println!("cargo:rerun-if-changed=cube.toml");

    let config_path = Path::new("cube.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: cube.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a cube.toml configuration file.           ║\n\
            ║  Please create one in the charliecube-firmware directory.        ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read cube.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in cube.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Abort the build with a list of problems in one section
fn fail(section: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid {:<49}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        section,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

struct Timing {
    render_hz: u64,
    frame_hz: u64,
    pwm_period: u64,
    frame_ms: u64,
    lamp_test_ms: u64,
}

/// Validate [timing] against the flicker budget
fn validate_timing(config: &toml::Value) -> Timing {
    let Some(timing) = config.get("timing").and_then(|t| t.as_table()) else {
        fail("timing", &["Missing [timing] section".to_string()]);
    };

    let mut errors = Vec::new();
    let mut field = |name: &str, min: i64, max: i64| -> u64 {
        match timing.get(name) {
            Some(toml::Value::Integer(v)) if (min..=max).contains(v) => *v as u64,
            Some(toml::Value::Integer(_)) => {
                errors.push(format!("[timing] {} must be {}-{}", name, min, max));
                0
            }
            Some(_) => {
                errors.push(format!("[timing] {} must be an integer", name));
                0
            }
            None => {
                errors.push(format!("[timing] missing '{}'", name));
                0
            }
        }
    };

    let render_hz = field("render_hz", 1, 1_000_000);
    let frame_hz = field("frame_hz", 1, 1_000_000);
    let pwm_period = field("pwm_period", 1, MAX_PWM_PERIOD);
    let frame_ms = field("frame_ms", 1, 60_000);
    let lamp_test_ms = field("lamp_test_ms", 1, 10_000);

    if render_hz > 0 && frame_hz > 0 {
        if frame_hz >= render_hz {
            errors.push("[timing] frame_hz must be below render_hz".to_string());
        }
        let lap_rate_hz = render_hz / VOXEL_COUNT;
        if lap_rate_hz < MIN_LAP_RATE_HZ {
            errors.push(format!(
                "[timing] {} Hz lap rate flickers (need {} Hz)",
                lap_rate_hz, MIN_LAP_RATE_HZ
            ));
        }
    }

    if !errors.is_empty() {
        fail("timing configuration", &errors);
    }

    Timing {
        render_hz,
        frame_hz,
        pwm_period,
        frame_ms,
        lamp_test_ms,
    }
}

struct Line {
    gpio: u64,
    group: char,
    bit: u64,
}

/// Validate the [[line]] pin assignment
fn validate_lines(config: &toml::Value) -> Vec<Line> {
    let lines = match config.get("line") {
        Some(toml::Value::Array(lines)) => lines,
        Some(_) => fail("line configuration", &["[[line]] must be an array of tables".to_string()]),
        None => fail("line configuration", &["Missing [[line]] entries".to_string()]),
    };

    let mut errors = Vec::new();
    if lines.len() != CUBE_PINS {
        errors.push(format!(
            "expected {} [[line]] entries, found {}",
            CUBE_PINS,
            lines.len()
        ));
    }

    let mut parsed: Vec<Line> = Vec::new();
    for (pin, line) in lines.iter().enumerate() {
        let Some(line) = line.as_table() else {
            errors.push(format!("line {} must be a table", pin));
            continue;
        };

        let gpio = match line.get("gpio") {
            Some(toml::Value::Integer(g)) if (0..=29).contains(g) && !RESERVED_GPIOS.contains(g) => {
                *g as u64
            }
            Some(toml::Value::Integer(g)) => {
                errors.push(format!("line {} gpio {} is not usable", pin, g));
                continue;
            }
            _ => {
                errors.push(format!("line {} missing 'gpio'", pin));
                continue;
            }
        };

        let group = match line.get("group").and_then(|g| g.as_str()) {
            Some(g) if ["b", "c", "d", "B", "C", "D"].contains(&g) => {
                g.to_ascii_lowercase().chars().next().unwrap()
            }
            Some(g) => {
                errors.push(format!("line {} group '{}' must be b, c or d", pin, g));
                continue;
            }
            None => {
                errors.push(format!("line {} missing 'group'", pin));
                continue;
            }
        };

        let bit = match line.get("bit") {
            Some(toml::Value::Integer(b)) if (0..=7).contains(b) => *b as u64,
            _ => {
                errors.push(format!("line {} bit must be 0-7", pin));
                continue;
            }
        };

        if let Some(other) = parsed.iter().position(|l| l.gpio == gpio) {
            errors.push(format!("lines {} and {} share gpio {}", other, pin, gpio));
        }
        if let Some(other) = parsed
            .iter()
            .position(|l| l.group == group && l.bit == bit)
        {
            errors.push(format!(
                "lines {} and {} share {}{}",
                other,
                pin,
                group.to_ascii_uppercase(),
                bit
            ));
        }

        parsed.push(Line { gpio, group, bit });
    }

    if !errors.is_empty() {
        fail("line configuration", &errors);
    }

    parsed
}

/// Write cube_config.rs into OUT_DIR
fn generate(timing: &Timing, lines: &[Line]) {
    let mut out = String::new();
    out.push_str("// Generated from cube.toml by build.rs\n\n");

    writeln!(out, "pub const RENDER_HZ: u32 = {};", timing.render_hz).unwrap();
    writeln!(out, "pub const FRAME_HZ: u32 = {};", timing.frame_hz).unwrap();
    writeln!(out, "pub const PWM_PERIOD: u8 = {};", timing.pwm_period).unwrap();
    writeln!(out, "pub const FRAME_MS: u32 = {};", timing.frame_ms).unwrap();
    writeln!(out, "pub const LAMP_TEST_MS: u32 = {};", timing.lamp_test_ms).unwrap();
    out.push('\n');

    writeln!(out, "pub const CUBE_PINS: usize = {};", lines.len()).unwrap();
    out.push_str("pub const CUBE_LINES: [(PortGroup, u8); CUBE_PINS] = [\n");
    for line in lines {
        writeln!(
            out,
            "    (PortGroup::{}, {}),",
            line.group.to_ascii_uppercase(),
            line.bit
        )
        .unwrap();
    }
    out.push_str("];\n\n");

    out.push_str("/// Take the GPIO of every cube line, in logical pin order\n");
    out.push_str("macro_rules! take_cube_lines {\n    ($p:expr) => {\n        [\n");
    for line in lines {
        writeln!(
            out,
            "            charliecube_hal_rp2040::flex_pin!($p, {}),",
            line.gpio
        )
        .unwrap();
    }
    out.push_str("        ]\n    };\n}\n");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("cube_config.rs"), out).unwrap();
}
