use serde::Deserialize;

use crate::services::pricing::{BASE_PRICE, PRICE_3D};

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub pricing: PricingConfig,
    pub log: LogConfig,
}

// Цены билетов
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    pub base_price: f64,
    pub surcharge_3d: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

// Настройки логирования
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pricing: PricingConfig {
                base_price: BASE_PRICE,
                surcharge_3d: PRICE_3D,
            },
            log: LogConfig {
                filter: "cinema_system=warn".to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}

impl Config {
    /// Значения по умолчанию, поверх них - переменные `CINEMA_*`
    /// (вложенность через `__`, например `CINEMA_PRICING__BASE_PRICE`).
    pub fn from_env() -> Result<Self, ::config::ConfigError> {
        Self::from_source(
            ::config::Environment::with_prefix("CINEMA")
                .prefix_separator("_")
                .separator("__"),
        )
    }

    pub fn from_source<S>(source: S) -> Result<Self, ::config::ConfigError>
    where
        S: ::config::Source + Send + Sync + 'static,
    {
        let defaults = Config::default();
        let cfg = ::config::Config::builder()
            .set_default("pricing.base_price", defaults.pricing.base_price)?
            .set_default("pricing.surcharge_3d", defaults.pricing.surcharge_3d)?
            .set_default("log.filter", defaults.log.filter)?
            .set_default("log.format", "pretty")?
            .add_source(source)
            .build()?;

        let config: Config = cfg.try_deserialize()?;
        let valid_price = |price: f64| price.is_finite() && price >= 0.0;
        if !valid_price(config.pricing.base_price) || !valid_price(config.pricing.surcharge_3d) {
            return Err(::config::ConfigError::Message(
                "ticket prices must be finite and not negative".to_string(),
            ));
        }
        Ok(config)
    }
}
