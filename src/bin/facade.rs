// Pattern 2: Facade - one entry point over a group of collaborators
// Welcomes three students through the facade.

use colored::Colorize;
use pattern_demos::facade::{StudentApi, StudentTable};
use pattern_demos::{telemetry, Console, DemoConfig};

fn facade_example(config: &DemoConfig) {
    let student_db = StudentTable::new();
    let mut student_api = StudentApi::with_config(student_db.clone(), Console::stdout(), config);

    student_api.welcome_new_student("Dolapo Ola");
    student_api.welcome_new_student("Tobiloba Ajibade");
    student_api.welcome_new_student("Temiloluwa Omoyele");

    tracing::info!(students = student_db.len(), "facade example finished");
}

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let config = DemoConfig::load()?;
    config.apply_color();

    println!("{}", "Pattern 2: Facade".bold());
    println!("=================\n");

    println!("{}", "=== Welcome New Students ===".cyan());
    facade_example(&config);

    Ok(())
}
