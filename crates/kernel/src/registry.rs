use std::io::Write;

use anyhow::Context;

use crate::module::{InitCtx, Module};

/// Module registry driving the init/run/stop lifecycle
pub struct ModuleRegistry {
    modules: Vec<Box<dyn Module>>,
}

impl ModuleRegistry {
    /// Create a new module registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module; modules run in registration order
    pub fn register(&mut self, module: Box<dyn Module>) {
        self.modules.push(module);
    }

    /// Initialize all modules
    pub fn init_all(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("initializing {} modules", self.modules.len());

        for module in &self.modules {
            tracing::debug!(module = module.name(), "initializing module");

            module
                .init(ctx)
                .with_context(|| format!("failed to initialize module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Run all modules in registration order
    pub fn run_all(&self, ctx: &InitCtx<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        for module in &self.modules {
            tracing::debug!(module = module.name(), "running module");

            module
                .run(ctx, out)
                .with_context(|| format!("failed to run module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Stop all modules in reverse order
    pub fn stop_all(&self) -> anyhow::Result<()> {
        tracing::info!("stopping {} modules", self.modules.len());

        for module in self.modules.iter().rev() {
            tracing::debug!(module = module.name(), "stopping module");

            module
                .stop()
                .with_context(|| format!("failed to stop module '{}'", module.name()))?;
        }

        Ok(())
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
