use std::collections::BTreeMap;
use std::env;
use std::fs;

// Variables que lee src/config.rs con option_env!
const KEYS: [&str; 4] = ["API_URL", "ENVIRONMENT", "ENABLE_LOGGING", "LOG_LEVEL"];

/// Pares KEY=VALUE del .env; las comillas alrededor del valor se quitan
fn parse_env_file(contents: &str) -> BTreeMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().trim_matches('"').to_string()))
        .collect()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(".env") else {
        println!("cargo:warning=Sin .env: el backend RRHH se busca en http://localhost:4000 (ver .env.example)");
        return;
    };
    println!("cargo:rerun-if-changed=.env");

    for (key, value) in parse_env_file(&contents) {
        if !KEYS.contains(&key.as_str()) {
            println!("cargo:warning=.env: {} no lo usa la interfaz RRHH, se ignora", key);
            continue;
        }
        if key == "API_URL" && !(value.starts_with("http://") || value.starts_with("https://")) {
            println!("cargo:warning=.env: API_URL={} no empieza por http:// o https://", value);
        }
        // El entorno real tiene prioridad sobre .env
        if env::var(&key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
