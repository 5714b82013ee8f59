//! Tests for provider definitions and activation policy defaults

use plugrack_domain::{
    Provider, ProviderDefinition, ProviderKind, ProviderSettings, UNSAVED_ID, ValidationFailure,
    ValidationResult,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct EchoSettings {
    prefix: String,
}

impl ProviderSettings for EchoSettings {
    fn validate(&self) -> ValidationResult {
        if self.prefix.is_empty() {
            ValidationResult::with_failures(vec![ValidationFailure::new(
                "prefix",
                "Prefix is required",
            )])
        } else {
            ValidationResult::valid()
        }
    }

    fn contract(&self) -> &'static str {
        "EchoSettings"
    }
}

trait Echo: Provider<EchoSettings> {}

struct EchoKind;

impl ProviderKind for EchoKind {
    const NAME: &'static str = "echo";
    type Settings = EchoSettings;
    type Provider = dyn Echo;
}

fn echo(prefix: &str) -> ProviderDefinition<EchoSettings> {
    ProviderDefinition::new(
        "Echo",
        "EchoProvider",
        "EchoSettings",
        EchoSettings {
            prefix: prefix.to_string(),
        },
    )
}

#[test]
fn test_new_definition_is_unsaved_and_enabled() {
    let definition = echo(">");
    assert_eq!(definition.id, UNSAVED_ID);
    assert!(definition.is_new());
    assert!(definition.enable);
    assert!(!definition.clone().with_id(4).is_new());
}

#[test]
fn test_validate_delegates_to_settings() {
    assert!(echo(">").validate().is_valid());

    let result = echo("").validate();
    assert!(!result.is_valid());
    assert_eq!(result.failures()[0].property, "prefix");
}

#[test]
fn test_default_activation_policy_is_validity() {
    assert!(EchoKind::is_active(&echo(">")));
    assert!(!EchoKind::is_active(&echo("")));
    // The default policy ignores the enable flag
    assert!(EchoKind::is_active(&echo(">").with_enable(false)));
}

#[test]
fn test_implementation_match_is_case_insensitive() {
    let definition = echo(">");
    assert!(definition.uses_implementation("echoprovider"));
    assert!(definition.uses_implementation("ECHOPROVIDER"));
    assert!(!definition.uses_implementation("EchoProviderV2"));
}

#[test]
fn test_definition_serializes_settings_payload() {
    let definition = echo(">").with_id(3).with_name("Loud");
    let json = serde_json::to_value(&definition).expect("serialize");
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Loud");
    assert_eq!(json["settings"]["prefix"], ">");

    let back: ProviderDefinition<EchoSettings> = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, definition);
}

#[test]
fn test_missing_enable_defaults_to_true() {
    let json = serde_json::json!({
        "name": "Echo",
        "implementation": "EchoProvider",
        "config_contract": "EchoSettings",
        "settings": { "prefix": ">" }
    });
    let definition: ProviderDefinition<EchoSettings> =
        serde_json::from_value(json).expect("deserialize");
    assert!(definition.enable);
    assert!(definition.is_new());
}
