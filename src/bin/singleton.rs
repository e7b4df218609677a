// Pattern 4: Singleton - one process-wide instance behind OnceLock

use colored::Colorize;
use pattern_demos::singleton::SchoolRegistry;
use pattern_demos::{telemetry, DemoConfig};

fn singleton_example() {
    let instance = SchoolRegistry::instance();

    // Every later call hands back the same reference.
    println!("{}", std::ptr::eq(SchoolRegistry::instance(), instance));
    println!("Created at: {}", instance.created_at().to_rfc3339());
    println!("Constructions: {}", SchoolRegistry::creation_count());
}

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let config = DemoConfig::load()?;
    config.apply_color();

    println!("{}", "Pattern 4: Singleton".bold());
    println!("====================\n");

    println!("{}", "=== Singleton Pattern ===".cyan());
    singleton_example();

    Ok(())
}
