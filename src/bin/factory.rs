// Pattern 3: Factory - tag-keyed creation of related variants
// The last step inspects an empty object on purpose, so this binary exits
// with an error after the teachers have introduced themselves.

use colored::Colorize;
use pattern_demos::factory::{
    describe, log_teacher_info, TeacherFactory, TeacherProperties, TeacherType,
};
use pattern_demos::{telemetry, DemoConfig};
use serde_json::json;

fn factory_example() -> anyhow::Result<()> {
    let teacher1 = TeacherFactory::get_teacher(
        TeacherType::Coding,
        TeacherProperties::new("John Doe").programming_language("TypeScript"),
    )?;
    let teacher2 = TeacherFactory::get_teacher_by_tag(
        "MUSIC",
        TeacherProperties::new("Jane Doe").instrument("Guitar"),
    )?;

    println!("{}", describe(&teacher1));
    println!("{}", describe(&teacher2));

    if let Err(err) = TeacherFactory::get_teacher_by_tag("ART", TeacherProperties::new("Bob")) {
        println!("Unsupported tag: {}", err);
    }
    Ok(())
}

fn inspection_example() -> anyhow::Result<()> {
    let untyped = json!({ "name": "Jane Doe", "instrument": "Guitar" });
    println!("{}", log_teacher_info(&untyped)?);

    // should fail: an empty object is not a teacher
    println!("{}", log_teacher_info(&json!({}))?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let config = DemoConfig::load()?;
    config.apply_color();

    println!("{}", "Pattern 3: Factory".bold());
    println!("==================\n");

    println!("{}", "=== Teacher Factory ===".cyan());
    factory_example()?;
    println!();

    println!("{}", "=== Teacher Inspection ===".cyan());
    inspection_example()
}
