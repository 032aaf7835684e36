use design_patterns::adapter::demo;
use design_patterns::narrate::{self, Console};

fn main() {
    narrate::init_logging();

    println!("{}\n", narrate::banner("Adapter"));
    demo::run(&Console);
}
