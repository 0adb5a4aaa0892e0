mod buttons;
mod modals;
mod selects;

use twilight_model::application::interaction::Interaction;

use switchboard_framework::{handler_func, ModuleCatalog};

/// Every component module compiled into the handler, keyed by its path
/// under `src/components`.
pub(crate) fn catalog() -> ModuleCatalog<Interaction> {
    ModuleCatalog::new()
        .component("buttons/ping.rs", handler_func!(buttons::ping::handle))
        .component("selects/colour.rs", handler_func!(selects::colour::handle))
        .module("modals/feedback.rs", modals::feedback::module)
}

#[cfg(test)]
mod tests {
    use switchboard_framework::{Category, Loader};

    use super::*;

    #[test]
    fn catalog_covers_components_dir() {
        let handlers = Loader::new(catalog())
            .root(concat!(env!("CARGO_MANIFEST_DIR"), "/src/components"))
            .scan()
            .unwrap();

        let found: Vec<_> = handlers
            .iter()
            .map(|h| (h.category, h.name.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                (Category::Buttons, "ping"),
                (Category::Modals, "feedback"),
                (Category::Selects, "colour"),
            ]
        );
    }
}
