use emailjs_send::run_send;
use std::env;
use std::io::{stderr, stdout};

fn main() {
    let args: Vec<String> = env::args().collect();
    let envs: Vec<(String, String)> = env::vars().collect();

    let exit_code = run_send(&mut stdout(), &mut stderr(), &args, &envs);

    std::process::exit(exit_code);
}
