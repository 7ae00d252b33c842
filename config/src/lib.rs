use std::fs::File;

use serde::Deserialize;

use self::{api::ApiConfig, app::AppConfig, log::LogConfig, pagination::PaginationConfig};

pub mod api;
pub mod app;
pub mod log;
pub mod pagination;

#[derive(Deserialize)]
pub struct Config {
    app: AppConfig,
    log: LogConfig,
    pagination: PaginationConfig,
    api: ApiConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

pub fn from_path(path: &str) -> Config {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => ks_log::panic(None, format!("[Config] Opening {path} failed: {err}")),
    };

    let config = match serde_yaml::from_reader::<_, Config>(file) {
        Ok(config) => config,
        Err(err) => ks_log::panic(None, format!("[Config] Parsing {path} failed: {err}")),
    };

    if let Err(err) = config.pagination().check() {
        ks_log::panic(None, format!("[Config] {err}"));
    }

    config
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"
app:
  mode: production
log:
  display_level: true
  level_filter: debug
pagination:
  min_limit: 1
  max_limit: 50
  default_limit: 20
api:
  rest:
    host: 127.0.0.1
    port: 9000
"#;

    #[test]
    fn parses_full_config() {
        let config = serde_yaml::from_str::<Config>(SAMPLE).unwrap();

        assert!(matches!(config.app().mode(), app::AppConfigMode::Production));
        assert!(*config.log().display_level());
        assert_eq!(config.log().level_filter(), "debug");
        assert_eq!(*config.pagination().min_limit(), 1);
        assert_eq!(*config.pagination().max_limit(), 50);
        assert_eq!(*config.pagination().default_limit(), 20);
        assert_eq!(config.api().rest().host(), "127.0.0.1");
        assert_eq!(*config.api().rest().port(), 9000);
        assert!(config.pagination().check().is_ok());
    }

    #[test]
    fn missing_section_is_rejected() {
        let sample = SAMPLE.replace("pagination:", "paging:");
        assert!(serde_yaml::from_str::<Config>(&sample).is_err());
    }
}
