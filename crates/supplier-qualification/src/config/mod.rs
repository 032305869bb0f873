use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::workflows::qualification::catalog::{
    CategoryTable, QUALIFIER_CATEGORIES, SINGLE_CHOICE_CATEGORIES,
};

/// Distinguishes runtime behavior for different stages of the tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub qualification: QualificationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let catalog_path = env::var("SUPPLIER_CATALOG_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let single_choice_categories = category_list(
            "SUPPLIER_SINGLE_CHOICE_CATEGORIES",
            &SINGLE_CHOICE_CATEGORIES,
        )?;
        let qualifier_categories =
            category_list("SUPPLIER_QUALIFIER_CATEGORIES", &QUALIFIER_CATEGORIES)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            qualification: QualificationConfig {
                catalog_path,
                single_choice_categories,
                qualifier_categories,
            },
        })
    }
}

fn category_list(variable: &'static str, defaults: &[&str]) -> Result<Vec<String>, ConfigError> {
    let Ok(raw) = env::var(variable) else {
        return Ok(defaults.iter().map(|name| name.to_string()).collect());
    };

    let categories: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_ascii_uppercase)
        .collect();

    if categories.is_empty() {
        return Err(ConfigError::EmptyCategoryList { variable });
    }
    Ok(categories)
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Catalog source and category rules for the scoring engine.
#[derive(Debug, Clone)]
pub struct QualificationConfig {
    pub catalog_path: Option<PathBuf>,
    pub single_choice_categories: Vec<String>,
    pub qualifier_categories: Vec<String>,
}

impl QualificationConfig {
    pub fn category_table(&self) -> CategoryTable {
        CategoryTable::new(&self.single_choice_categories, &self.qualifier_categories)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyCategoryList { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyCategoryList { variable } => {
                write!(f, "{variable} must name at least one category when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
