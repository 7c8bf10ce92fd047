use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = Config::builder()
        .add_source(File::new("configuration.yaml", FileFormat::Yaml))
        .add_source(environment())
        .build()?;

    settings.try_deserialize::<Settings>()
}

// APP_APPLICATION_PORT=9000 overrides application.port
fn environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("_")
}
