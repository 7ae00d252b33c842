use std::fs;

pub fn get() -> String {
    let config_path = match std::env::var("KS_CONFIG_PATH") {
        Ok(path) => path,
        Err(_) => "config.yml".to_owned(),
    };

    if fs::metadata(&config_path).is_err() {
        ks_log::panic(
            None,
            format!("[Keyset] Config file {config_path} does not exist. Set KS_CONFIG_PATH or place config.yml in the working directory"),
        );
    }

    config_path
}
