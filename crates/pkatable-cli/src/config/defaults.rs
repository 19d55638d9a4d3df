/// Values used when neither the command line nor the config file provide one.
pub struct DefaultsConfig {
    pub protein: String,
    pub pool_dir: String,
    pub samples: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            protein: "1b57".to_string(),
            pool_dir: "~/Downloads/POOL".to_string(),
            samples: "sample.xlsx".to_string(),
        }
    }
}
