//! ModuleRegistry - ネイティブモジュールの登録と呼び出し
//!
//! JS 側の `NativeModules` に相当します。
//! モジュールが登録されていない（ネイティブ側をビルドしていない）場合は
//! `ModuleError::Unavailable` で呼び出し側に知らせます。

use std::collections::HashMap;
use std::sync::Arc;

use super::module::NativeModule;
use super::response::BridgeResponse;

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("Native module '{0}' is already registered")]
    AlreadyRegistered(String),

    #[error("Native module '{0}' is not available")]
    Unavailable(String),
}

#[derive(Default)]
pub struct ModuleRegistry {
    modules: HashMap<&'static str, Arc<dyn NativeModule>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    pub fn register(&mut self, module: Arc<dyn NativeModule>) -> Result<(), ModuleError> {
        let name = module.name();
        if self.modules.contains_key(name) {
            return Err(ModuleError::AlreadyRegistered(name.to_string()));
        }
        self.modules.insert(name, module);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn NativeModule>> {
        self.modules.get(name).cloned()
    }

    pub fn registered_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.modules.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// `NativeModules.<module>.<method>(args)` の呼び出し
    pub async fn call(
        &self,
        module: &str,
        method: &str,
        args: serde_json::Value,
    ) -> Result<BridgeResponse, ModuleError> {
        let handler = self
            .get(module)
            .ok_or_else(|| ModuleError::Unavailable(module.to_string()))?;
        Ok(handler.invoke(method, args).await)
    }
}
