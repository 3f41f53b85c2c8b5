use std::process::exit;

use random_multiplier::multiplier::Multiplier;
use random_multiplier::random::ThreadRandom;

fn main() {
    let mut multiplier = Multiplier::new(ThreadRandom);
    match multiplier.report() {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("Couldn't obtain random numbers: {:?}", e);
            exit(1);
        },
    }
}
