//! Build script for bigdigit-demo
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// (columns, rows, variant) of every font the renderer knows
const FONTS: [(i64, i64, i64); 10] = [
    (1, 2, 1),
    (2, 2, 1),
    (3, 2, 1),
    (3, 2, 2),
    (3, 2, 3),
    (2, 3, 1),
    (2, 3, 2),
    (3, 3, 1),
    (3, 4, 1),
    (3, 4, 2),
];

fn main() {
    setup_linker();
    validate_config();
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

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds display.toml from the bigdigit-demo         ║\n\
            ║  directory. Create one with [display] and [font] sections.       ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let display_rows = validate_display(&config, &mut errors);
    validate_font(&config, display_rows, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display.toml                                     ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=display.toml validated successfully");
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

/// Look up an optional section table
fn section<'a>(
    config: &'a toml::Value,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a toml::value::Table> {
    match config.get(name) {
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push(format!("[{}] must be a table", name));
            None
        }
        None => None,
    }
}

/// Read an optional integer key and check its range
fn integer(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match table.get(key) {
        Some(toml::Value::Integer(v)) if range.contains(v) => Some(*v),
        Some(toml::Value::Integer(_)) => {
            errors.push(format!(
                "[{}] {} must be {}-{}",
                section,
                key,
                range.start(),
                range.end()
            ));
            None
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
        None => None,
    }
}

fn check_keys(table: &toml::value::Table, section: &str, known: &[&str], errors: &mut Vec<String>) {
    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            errors.push(format!("[{}] unknown key '{}'", section, key));
        }
    }
}

/// Validate [display], returns the configured row count
fn validate_display(config: &toml::Value, errors: &mut Vec<String>) -> i64 {
    if let Some(root) = config.as_table() {
        for key in root.keys() {
            if key != "display" && key != "font" {
                errors.push(format!("unknown section [{}]", key));
            }
        }
    }

    let Some(display) = section(config, "display", errors) else {
        return 4;
    };

    check_keys(
        display,
        "display",
        &["columns", "rows", "bus", "i2c_address", "backlight"],
        errors,
    );

    integer(display, "display", "columns", 1..=40, errors);
    integer(display, "display", "i2c_address", 0x08..=0x77, errors);

    match display.get("bus") {
        Some(toml::Value::String(bus)) if bus == "i2c" || bus == "parallel" => {}
        Some(_) => errors.push("[display] bus must be 'i2c' or 'parallel'".to_string()),
        None => {}
    }

    if let Some(value) = display.get("backlight") {
        if !value.is_bool() {
            errors.push("[display] backlight must be true or false".to_string());
        }
    }

    integer(display, "display", "rows", 1..=4, errors).unwrap_or(4)
}

/// Validate [font] against the known fonts and the display height
fn validate_font(config: &toml::Value, display_rows: i64, errors: &mut Vec<String>) {
    let Some(font) = section(config, "font", errors) else {
        return;
    };

    check_keys(font, "font", &["columns", "rows", "variant", "id", "gap"], errors);

    if let Some(value) = font.get("gap") {
        if !value.is_bool() {
            errors.push("[font] gap must be true or false".to_string());
        }
    }

    let descriptor = if let Some(id) = integer(font, "font", "id", 0..=0xFF, errors) {
        if id & !0x3F != 0 {
            errors.push(format!("[font] id {:#04x} has bits outside 0x3F", id));
        }
        (((id >> 2) & 0x03) + 1, (id & 0x03) + 1, ((id >> 4) & 0x03) + 1)
    } else {
        (
            integer(font, "font", "columns", 1..=3, errors).unwrap_or(3),
            integer(font, "font", "rows", 2..=4, errors).unwrap_or(4),
            integer(font, "font", "variant", 1..=3, errors).unwrap_or(1),
        )
    };

    let (columns, rows, variant) = descriptor;
    if !FONTS.contains(&descriptor) {
        errors.push(format!(
            "[font] no {}x{} font with variant {}",
            columns, rows, variant
        ));
    } else if rows > display_rows {
        errors.push(format!(
            "[font] {} rows tall, display has {}",
            rows, display_rows
        ));
    }
}
