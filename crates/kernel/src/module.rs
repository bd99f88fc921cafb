use std::io::Write;

/// Context provided to modules during initialization and run
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// Core module trait that all book-report modules must implement
pub trait Module {
    /// Unique name for this module
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context
    /// Called once before any module runs
    fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Do the module's work, writing any user-facing output to `out`
    fn run(&self, ctx: &InitCtx<'_>, out: &mut dyn Write) -> anyhow::Result<()>;

    /// Stop the module and clean up resources
    /// Called during shutdown
    fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
