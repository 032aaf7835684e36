use design_patterns::narrate::{self, Console};
use design_patterns::template_method::demo;
use design_patterns::PatternError;

fn main() -> Result<(), PatternError> {
    narrate::init_logging();

    println!("{}\n", narrate::banner("Template Method"));
    demo::run(&Console)
}
