use std::env;
use std::fs;
use std::path::Path;

// Claves que la app lee con option_env! (ver src/config.rs)
const CONFIG_KEYS: &[&str] = &[
    "MAPBOX_ACCESS_TOKEN",
    "MAP_STYLE",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_ZOOM",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
];

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. MAPBOX_ACCESS_TOKEN must come from the environment, otherwise the map shows an error banner.");
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }

    println!("cargo:rerun-if-changed=.env");

    match fs::read_to_string(env_file) {
        Ok(contents) => {
            for (key, value) in parse_env_lines(&contents) {
                // El entorno del proceso tiene prioridad sobre .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
        Err(e) => println!("cargo:warning=Could not read .env: {}", e),
    }

    println!("cargo:rerun-if-changed=build.rs");
}

/// Parsear líneas KEY=VALUE, ignorando comentarios, líneas vacías y comillas
fn parse_env_lines(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim(), value)
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
