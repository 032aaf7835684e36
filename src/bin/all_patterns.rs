use design_patterns::narrate::{self, Console};
use design_patterns::{adapter, decorator, strategy, template_method, PatternError};

fn main() -> Result<(), PatternError> {
    narrate::init_logging();
    let out = Console;

    println!("{}\n", narrate::banner("1. Template Method"));
    template_method::demo::run(&out)?;

    println!("\n{}\n", narrate::banner("2. Adapter"));
    adapter::demo::run(&out);

    println!("\n{}\n", narrate::banner("3. Decorator"));
    decorator::demo::run(&out);

    println!("\n{}\n", narrate::banner("4. Strategy"));
    strategy::demo::run(&out);

    Ok(())
}
