use cli::Command;
use log::*;
use projectile::{Outcome, Simulation};
use rayray::*;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("rayray");

    let scenario = match cli::parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(Command::Run(scenario)) => scenario,
        Ok(Command::Help) => {
            print!("{}", cli::usage(program));
            return;
        }
        Err(e) => {
            eprintln!("{}: {}", program, e);
            eprint!("{}", cli::usage(program));
            process::exit(2);
        }
    };
    info!("{:?}", scenario);

    let mut sim = Simulation::from_scenario(&scenario);
    let outcome = sim.run(scenario.max_ticks, |t, p| {
        debug!("tick {} velocity {:?}", t, p.velocity);
        println!("{}", p.position);
    });

    match outcome {
        Outcome::Landed { .. } => (),
        Outcome::TickLimit { .. } | Outcome::Diverged { .. } => process::exit(1),
    }
}
