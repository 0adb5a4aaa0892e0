use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{
    catalog::ModuleCatalog, category::Category, dispatcher::Dispatcher, error::LoadError,
    handler::ComponentHandler, registry::Registry,
};

pub const DEFAULT_ROOT: &str = "src/components";
pub const DEFAULT_EXTENSIONS: &[&str] = &["rs"];

/// Discovers component sources under a root directory and loads them through
/// a [`ModuleCatalog`].
///
/// The first directory below the root names the category (`buttons`,
/// `modals` or `selects`), anything nested deeper is just organisation. The
/// file stem is the component name and has to match the interaction's
/// `custom_id`.
pub struct Loader<E> {
    root: PathBuf,
    extensions: Vec<String>,
    catalog: ModuleCatalog<E>,
}

impl<E> Loader<E> {
    pub fn new(catalog: ModuleCatalog<E>) -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            catalog,
        }
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    pub fn scan(&self) -> Result<Vec<ComponentHandler<E>>, LoadError> {
        if !self.root.is_dir() {
            tracing::warn!(
                "components directory {} not found, no components loaded",
                self.root.display()
            );
            return Ok(Vec::new());
        }

        // informational only, the walk below picks up everything regardless
        for category in Category::ALL {
            if self.root.join(category.as_str()).is_dir() {
                tracing::debug!("found {} directory", category);
            } else {
                tracing::debug!("no {} directory in {}", category, self.root.display());
            }
        }

        let mut handlers = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_dir() || !self.is_component_source(entry.path()) {
                continue;
            }

            if let Some(handler) = self.load_file(entry.path())? {
                handlers.push(handler);
            }
        }

        Ok(handlers)
    }

    fn is_component_source(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        if !self.extensions.iter().any(|allowed| allowed == ext) {
            return false;
        }

        // module glue (`mod.rs`, or `buttons.rs` next to `buttons/`) isn't a component
        if path.file_stem().is_some_and(|stem| stem == "mod")
            || path.with_extension("").is_dir()
        {
            tracing::trace!("skipping module file {}", path.display());
            return false;
        }

        true
    }

    fn load_file(&self, path: &Path) -> Result<Option<ComponentHandler<E>>, LoadError> {
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| LoadError::OutsideRoot(path.to_path_buf()))?;
        let key = relative
            .components()
            .map(|segment| segment.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        let mut segments = relative.components();
        let category = match (segments.next(), segments.next()) {
            (Some(dir), Some(_)) => dir.as_os_str().to_str().and_then(Category::from_dir_name),
            _ => None,
        };

        let Some(category) = category else {
            // registered modules are still loaded so their failures surface,
            // unregistered helpers outside the categories are just skipped
            if self.catalog.contains(&key) {
                self.catalog.load(&key)?;
            }
            tracing::warn!("component {} has no valid category directory, skipping", key);
            return Ok(None);
        };

        let module = self.catalog.load(&key)?;

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Some(ComponentHandler {
            name,
            category,
            func: module.default,
            config: module.config,
        }))
    }
}

impl<E: 'static> Loader<E> {
    /// Scan, build the registry and hand back a ready dispatcher.
    ///
    /// Fails without building anything if any component module fails to load.
    pub async fn load(self) -> Result<Dispatcher<E>, LoadError> {
        let handlers = tokio::task::spawn_blocking(move || self.scan()).await??;

        let registry = Registry::from_handlers(handlers);
        registry.log_listing();

        Ok(Dispatcher::new(registry))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{
        catalog::ComponentModule, handler::ModuleConfig, handler_func, testing::TestEvent, Error,
    };

    fn noop(_event: TestEvent) -> Result<(), Error> {
        Ok(())
    }

    fn broken() -> Result<ComponentModule<TestEvent>, Error> {
        Err("syntax error".into())
    }

    fn configured() -> Result<ComponentModule<TestEvent>, Error> {
        Ok(ComponentModule::new(handler_func!(sync noop)).config(ModuleConfig::new()))
    }

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loader = Loader::<TestEvent>::new(ModuleCatalog::new()).root(dir.path().join("nope"));

        assert!(loader.scan().unwrap().is_empty());
    }

    #[test]
    fn derives_name_and_category() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "buttons/confirm.rs");
        touch(dir.path(), "selects/nested/deeper/colour.rs");
        touch(dir.path(), "modals/feedback.rs");

        let catalog = ModuleCatalog::new()
            .component("buttons/confirm.rs", handler_func!(sync noop))
            .component("selects/nested/deeper/colour.rs", handler_func!(sync noop))
            .module("modals/feedback.rs", configured);
        let handlers = Loader::new(catalog).root(dir.path()).scan().unwrap();

        let found: Vec<_> = handlers
            .iter()
            .map(|h| (h.category, h.name.as_str(), h.config.is_some()))
            .collect();
        assert_eq!(
            found,
            vec![
                (Category::Buttons, "confirm", false),
                (Category::Modals, "feedback", true),
                (Category::Selects, "colour", false),
            ]
        );
    }

    #[test]
    fn skips_files_outside_categories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "stray.rs");
        touch(dir.path(), "commands/ping.rs");
        touch(dir.path(), "buttons/ok.rs");

        let catalog = ModuleCatalog::new()
            .component("stray.rs", handler_func!(sync noop))
            .component("commands/ping.rs", handler_func!(sync noop))
            .component("buttons/ok.rs", handler_func!(sync noop));
        let handlers = Loader::new(catalog).root(dir.path()).scan().unwrap();

        assert_eq!(handlers.len(), 1);
        assert_eq!(handlers[0].name, "ok");
    }

    #[test]
    fn unregistered_helpers_outside_categories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "util.rs");
        touch(dir.path(), "commands/shared.rs");
        touch(dir.path(), "buttons/ok.rs");

        let catalog = ModuleCatalog::new().component("buttons/ok.rs", handler_func!(sync noop));
        let handlers = Loader::new(catalog).root(dir.path()).scan().unwrap();

        assert_eq!(handlers.len(), 1);
        assert_eq!(handlers[0].name, "ok");
    }

    #[test]
    fn registered_module_outside_categories_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "buttons/ok.rs");
        touch(dir.path(), "stray.rs");

        let catalog = ModuleCatalog::new()
            .component("buttons/ok.rs", handler_func!(sync noop))
            .module("stray.rs", broken);
        let result = Loader::new(catalog).root(dir.path()).scan();

        assert!(matches!(result, Err(LoadError::Module { path, .. }) if path == "stray.rs"));
    }

    #[test]
    fn ignores_other_extensions_and_module_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "buttons/README.md");
        touch(dir.path(), "buttons/mod.rs");
        touch(dir.path(), "buttons/group.rs");
        touch(dir.path(), "buttons/group/inner.rs");
        touch(dir.path(), "buttons.rs");

        let catalog =
            ModuleCatalog::new().component("buttons/group/inner.rs", handler_func!(sync noop));
        let handlers = Loader::new(catalog).root(dir.path()).scan().unwrap();

        assert_eq!(handlers.len(), 1);
        assert_eq!(handlers[0].name, "inner");
    }

    #[test]
    fn custom_extensions() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "buttons/ok.rs");
        touch(dir.path(), "buttons/other.cmp");

        let catalog = ModuleCatalog::new().component("buttons/other.cmp", handler_func!(sync noop));
        let handlers = Loader::new(catalog)
            .root(dir.path())
            .extensions([".cmp"])
            .scan()
            .unwrap();

        assert_eq!(handlers.len(), 1);
        assert_eq!(handlers[0].name, "other");
    }

    #[test]
    fn load_failures_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "buttons/ok.rs");
        touch(dir.path(), "modals/broken.rs");

        let catalog = ModuleCatalog::new()
            .component("buttons/ok.rs", handler_func!(sync noop))
            .module("modals/broken.rs", broken);
        let result = Loader::new(catalog).root(dir.path()).scan();
        assert!(matches!(result, Err(LoadError::Module { .. })));

        touch(dir.path(), "selects/unregistered.rs");
        let catalog = ModuleCatalog::new().component("buttons/ok.rs", handler_func!(sync noop));
        let result = Loader::new(catalog).root(dir.path()).scan();
        assert!(matches!(result, Err(LoadError::NotRegistered(_))));
    }
}
