use design_patterns::narrate::{self, Console};
use design_patterns::strategy::demo;

fn main() {
    narrate::init_logging();

    println!("{}\n", narrate::banner("Strategy"));
    demo::run(&Console);
}
