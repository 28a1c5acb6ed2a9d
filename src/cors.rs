use actix_cors::Cors;
use actix_web::http::uri::Uri;
use log::{info, warn};
use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IOError, ErrorKind},
    path::Path,
};

pub const ANY_ORIGIN: &str = "*";

pub fn check_env_cors(path: &str) -> bool {
    let exists = Path::new(path).exists();
    if exists {
        info!("CORS origins file found at: {}", path);
    } else {
        warn!("CORS origins file not found at: {}, allowing any origin", path);
    }
    exists
}

/// Reads one origin per line. Invalid lines are skipped with a warning; a file
/// in which no line is valid is an error.
pub fn load_and_validate_cors_origins(path: &str) -> Result<Vec<String>, IOError> {
    let file = File::open(path)?;
    let buf_reader = BufReader::new(file);
    let mut origins = Vec::new();
    let mut all_lines_failed = true;

    for line in buf_reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<Uri>() {
            Ok(_) => {
                if line == ANY_ORIGIN {
                    info!("CORS configuration allows any origin");
                }
                origins.push(line.to_string());
                all_lines_failed = false;
            }
            Err(e) => {
                warn!("Invalid URI in CORS configuration: {}", e);
            }
        }
    }

    if all_lines_failed {
        return Err(IOError::new(
            ErrorKind::InvalidData,
            "All CORS lines failed validation.",
        ));
    }

    Ok(origins)
}

/// Permissive when `origins` is empty or lists `*`, otherwise only the listed
/// origins are allowed, with any method and header.
pub fn build_cors(origins: &[String]) -> Cors {
    if origins.is_empty() || origins.iter().any(|o| o == ANY_ORIGIN) {
        return Cors::permissive();
    }
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
