use std::io;
use std::{env, process};

use loxrs::Loxrs;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut loxrs = Loxrs::new(&mut stdout, &mut stderr);

    match args.len() {
        n if n > 2 => {
            println!("Usage: loxrs [script]");
            process::exit(64);
        },
        2 => loxrs.run_file(&args[1]),
        _ => loxrs.run_prompt(),
    };
}
