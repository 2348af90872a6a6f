use tempfile::TempDir;

use super::{generate_config_template, run_init_impl};
use crate::cli::InitArgs;
use crate::config::{Config, validate_config_semantics};

#[test]
fn generated_template_is_valid_config() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert!(validate_config_semantics(&config).is_ok());
    assert_eq!(config.scanner.extensions, vec!["c", "h"]);
    assert_eq!(config.template.width, 80);
    assert!(config.scanner.exclude.contains(&"**/third_party/**".to_string()));
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".cdoc-guard.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[template]"));
}

#[test]
fn run_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".cdoc-guard.toml");
    std::fs::write(&config_path, "# mine\n").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "# mine\n");
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".cdoc-guard.toml");
    std::fs::write(&config_path, "# mine\n").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    run_init_impl(&args).unwrap();
    assert!(std::fs::read_to_string(&config_path).unwrap().contains("[scanner]"));
}
