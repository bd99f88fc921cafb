use std::io::Write;

use anyhow::Context;
use book_report::register_all;
use book_report_kernel::settings::Settings;
use book_report_kernel::{InitCtx, ModuleRegistry};

fn main() -> anyhow::Result<()> {
    // Settings only shape logging; the report prints regardless.
    let (settings, load_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    book_report_telemetry::init(&settings.telemetry)
        .with_context(|| "failed to initialize telemetry")?;

    if let Some(err) = load_error {
        tracing::warn!(error = ?err, "failed to load book-report settings; using defaults");
    }
    if let Some(name) = &settings.unrecognized_environment {
        tracing::warn!(
            requested = %name,
            "unsupported environment; expected local/staging/production, using local"
        );
    }

    tracing::info!(env = ?settings.environment, "book-report starting");

    let mut registry = ModuleRegistry::new();
    register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    registry.init_all(&ctx)?;
    registry.run_all(&ctx, &mut out)?;
    out.flush().with_context(|| "failed to flush stdout")?;
    registry.stop_all()?;

    tracing::info!("book-report finished");
    Ok(())
}
