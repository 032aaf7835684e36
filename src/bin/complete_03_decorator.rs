use design_patterns::decorator::demo;
use design_patterns::narrate::{self, Console};

fn main() {
    narrate::init_logging();

    println!("{}\n", narrate::banner("Decorator"));
    demo::run(&Console);
}
