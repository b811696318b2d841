//! Server configuration loaded from the environment.

/// Runtime configuration for the server process.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Path of the SQLite database file.
    pub db_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr = std::env::var("AGRIPORT_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let db_path = std::env::var("AGRIPORT_DB_PATH")
            .unwrap_or_else(|_| "data/agriport.db".to_string());
        Config {
            listen_addr,
            db_path,
        }
    }
}
