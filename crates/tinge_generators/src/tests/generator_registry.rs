use async_trait::async_trait;
use tinge_core::Theme;

use crate::error::GeneratorError;
use crate::generator::{GeneratorRegistry, ThemeGenerator};

/// Minimal generator for registry tests.
struct StubGenerator {
    id: &'static str,
}

#[async_trait]
impl ThemeGenerator for StubGenerator {
    fn generator_id(&self) -> &str {
        self.id
    }

    async fn generate(&self, _prompt: &str) -> crate::error::Result<Vec<Theme>> {
        Ok(vec![Theme::dark_fintech()])
    }
}

#[test]
fn register_and_get_generator() {
    let registry = GeneratorRegistry::new().register("stub", StubGenerator { id: "stub" });

    let generator = registry.get_generator("stub");
    assert!(generator.is_ok());
    assert_eq!(generator.unwrap().generator_id(), "stub");
}

#[test]
fn generator_not_found() {
    let registry = GeneratorRegistry::new();
    let result = registry.get_generator("nonexistent");
    assert!(matches!(result, Err(GeneratorError::GeneratorNotFound(_))));
}

#[test]
fn list_generators() {
    let registry = GeneratorRegistry::new()
        .register("alpha", StubGenerator { id: "alpha" })
        .register("beta", StubGenerator { id: "beta" });

    let mut ids = registry.list_generators();
    ids.sort();
    assert_eq!(ids, vec!["alpha", "beta"]);
}

#[tokio::test]
async fn registered_generator_is_callable_through_the_registry() {
    let registry = GeneratorRegistry::new().register("stub", StubGenerator { id: "stub" });
    let generator = registry.get_generator("stub").unwrap();
    let themes = generator.generate("prompt").await.unwrap();
    assert_eq!(themes.len(), 1);
}
