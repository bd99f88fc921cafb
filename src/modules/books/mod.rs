pub mod error;
pub mod models;
pub mod report;

use std::io::Write;

use anyhow::Context;
use book_report_kernel::{InitCtx, Module};

use models::{BookRecord, LEGACY_FIELD_CAPACITY};

/// Prints the discounted price report for the legacy book record
pub struct BooksModule;

impl BooksModule {
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BooksModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn run(&self, _ctx: &InitCtx<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        let record = BookRecord::legacy_sample(LEGACY_FIELD_CAPACITY)
            .with_context(|| "failed to build book record")?;

        tracing::info!(
            module = self.name(),
            book_id = record.book_id,
            "printing book report"
        );

        report::run(record, out).with_context(|| "failed to print book report")?;
        Ok(())
    }

    fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module() -> Box<dyn Module> {
    Box::new(BooksModule::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use book_report_kernel::settings::Settings;

    #[test]
    fn module_prints_legacy_report() {
        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };
        let module = create_module();
        let mut out = Vec::new();

        module.init(&ctx).unwrap();
        module.run(&ctx, &mut out).unwrap();
        module.stop().unwrap();

        assert_eq!(module.name(), "books");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Price of book Compilers: Principles, Techniques, and Tools 2nd is: 80.00\n"
        );
    }

    #[test]
    fn module_output_ignores_telemetry_settings() {
        let mut settings = Settings::default();
        settings.telemetry.log_level = "trace".to_string();
        settings.unrecognized_environment = Some("qa".to_string());
        let ctx = InitCtx {
            settings: &settings,
        };
        let mut out = Vec::new();

        BooksModule::new().run(&ctx, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Price of book Compilers: Principles, Techniques, and Tools 2nd is: 80.00\n"
        );
    }
}
