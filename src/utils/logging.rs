use once_cell::sync::Lazy;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(false);
static LOG_TO_FILE: AtomicBool = AtomicBool::new(false);
static LOG_FILE: Lazy<Mutex<Option<std::fs::File>>> = Lazy::new(|| Mutex::new(None));

/// Initializes logging based on environment variables:
/// - VARSIM_LOGGING: enables/disables logging (true/false, unset means disabled)
/// - VARSIM_LOG_TO_FILE: when true, lines go to VARSIM_LOG_FILE (default `varsim.log`) instead of stdout
///
/// To enable logging in tests, run: VARSIM_LOGGING=true cargo test -- --nocapture
pub fn init_logging() {
    let enabled = match env::var("VARSIM_LOGGING").as_deref() {
        Ok("true") => true,
        Ok("false") | Err(_) => false,
        Ok(other) => {
            eprintln!(
                "VARSIM_LOGGING must be 'true' or 'false', got '{}'; logging stays disabled",
                other
            );
            false
        }
    };
    ENABLE_LOGGING.store(enabled, Ordering::SeqCst);
    if !enabled {
        return;
    }

    if env::var("VARSIM_LOG_TO_FILE").as_deref() == Ok("true") {
        let path = env::var("VARSIM_LOG_FILE").unwrap_or_else(|_| "varsim.log".to_string());
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                if let Ok(mut slot) = LOG_FILE.lock() {
                    *slot = Some(file);
                    LOG_TO_FILE.store(true, Ordering::SeqCst);
                }
            }
            Err(e) => eprintln!("Failed to open log file {}: {}; logging to stdout", path, e),
        }
    }
}

pub fn is_enabled() -> bool {
    ENABLE_LOGGING.load(Ordering::SeqCst)
}

pub fn log(prefix: &str, message: &str) {
    if !is_enabled() {
        return;
    }
    let line = format!("  [{}]   {}\n", prefix, message);

    if LOG_TO_FILE.load(Ordering::SeqCst) {
        if let Ok(mut slot) = LOG_FILE.lock() {
            if let Some(file) = slot.as_mut() {
                if let Err(e) = file.write_all(line.as_bytes()).and_then(|_| file.flush()) {
                    eprintln!("Failed to write to log file: {}", e);
                }
            }
        }
    } else {
        print!("{}", line);
    }
}
