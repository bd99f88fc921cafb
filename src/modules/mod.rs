pub mod books;

use book_report_kernel::ModuleRegistry;

/// Register all report modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(books::create_module());
}
