// Pattern 1: Decoration - constructor, method and property wrapping
// Runs the decoration examples top to bottom.

use colored::Colorize;
use pattern_demos::decorators::{
    declare_properties, exclude_properties, log_construction, Fruit, UserService, Yogurt,
};
use pattern_demos::{telemetry, Console, DemoConfig};

fn class_decorator_example(console: &Console) {
    let new_fruit = log_construction(console.clone(), Fruit::new);
    new_fruit("Apple");
    new_fruit("Orange");
}

async fn method_decorator_example(console: &Console) -> anyhow::Result<()> {
    let service = UserService::default();

    let get_user_info = exclude_properties(&["username"], |id| service.get_user_info(id));
    let user = get_user_info.call(1).await?;
    console.line(format!("getUserInfo(1) without username: {}", user));

    let get_public_info =
        exclude_properties(&["username", "password"], |id| service.get_user_info(id));
    let user = get_public_info.call(2).await?;
    console.line(format!("getUserInfo(2) without credentials: {}", user));
    Ok(())
}

fn property_decorator_example(console: &Console) {
    declare_properties::<Yogurt>(console);
    let yogurt = Yogurt::new("vanila");
    console.line(format!("Yogurt flavour: {}", yogurt.flavour));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    let config = DemoConfig::load()?;
    config.apply_color();
    let console = Console::stdout();

    println!("{}", "Pattern 1: Decoration".bold());
    println!("=====================\n");

    println!("{}", "=== Class Decorator ===".cyan());
    class_decorator_example(&console);
    println!();

    println!("{}", "=== Method Decorator ===".cyan());
    method_decorator_example(&console).await?;
    println!();

    println!("{}", "=== Property Decorator ===".cyan());
    property_decorator_example(&console);

    Ok(())
}
