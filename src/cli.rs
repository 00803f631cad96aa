//! Command line handling for the projectile demo.

use crate::projectile::Scenario;
use crate::*;
use getopts::Options;

#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error(transparent)]
    Getopts(#[from] getopts::Fail),

    #[error("--{flag} expects X,Y,Z but got {value:?}")]
    Triple { flag: &'static str, value: String },

    #[error("--max-ticks expects a non-negative integer but got {0:?}")]
    MaxTicks(String),

    #[error("cannot normalize a zero launch velocity")]
    ZeroVelocity,

    #[error("unexpected argument {0:?}")]
    Unexpected(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Run(Scenario),
    Help,
}

pub fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("p", "position", "launch point (default 0,1,0)", "X,Y,Z");
    opts.optopt("v", "velocity", "launch velocity (default 1,1,0)", "X,Y,Z");
    opts.optopt("g", "gravity", "gravity vector (default 0,-0.1,0)", "X,Y,Z");
    opts.optopt("w", "wind", "wind vector (default -0.01,0,0)", "X,Y,Z");
    opts.optflag("n", "normalize", "scale the launch velocity to unit length");
    opts.optopt("m", "max-ticks", "give up after N ticks (default 10000)", "N");
    opts.optflag("h", "help", "print this help");
    opts
}

pub fn usage(program: &str) -> String {
    options().usage(&format!("Usage: {} [options]", program))
}

pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, ArgsError> {
    let matches = options().parse(args.iter().map(|a| a.as_ref()))?;
    if matches.opt_present("h") {
        return Ok(Command::Help);
    }
    if let Some(extra) = matches.free.first() {
        return Err(ArgsError::Unexpected(extra.clone()));
    }

    let mut scenario = Scenario::default();
    if let Some(s) = matches.opt_str("p") {
        let (x, y, z) = parse_triple("position", &s)?;
        scenario.projectile.position = Tuple::point(x, y, z);
    }
    if let Some(s) = matches.opt_str("v") {
        let (x, y, z) = parse_triple("velocity", &s)?;
        scenario.projectile.velocity = Tuple::vector(x, y, z);
    }
    if let Some(s) = matches.opt_str("g") {
        let (x, y, z) = parse_triple("gravity", &s)?;
        scenario.environment.gravity = Tuple::vector(x, y, z);
    }
    if let Some(s) = matches.opt_str("w") {
        let (x, y, z) = parse_triple("wind", &s)?;
        scenario.environment.wind = Tuple::vector(x, y, z);
    }
    if matches.opt_present("n") {
        scenario.projectile.velocity = scenario
            .projectile
            .velocity
            .try_normalize()
            .ok_or(ArgsError::ZeroVelocity)?;
    }
    if let Some(s) = matches.opt_str("m") {
        let n = s.trim().parse().map_err(|_| ArgsError::MaxTicks(s.clone()))?;
        scenario.max_ticks = Some(n);
    }
    Ok(Command::Run(scenario))
}

fn parse_triple(flag: &'static str, value: &str) -> Result<(f64, f64, f64), ArgsError> {
    let err = || ArgsError::Triple {
        flag,
        value: value.to_owned(),
    };
    let xs = value
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| err())?;
    match xs[..] {
        [x, y, z] if xs.iter().all(|v| v.is_finite()) => Ok((x, y, z)),
        _ => Err(err()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Scenario {
        match parse_args(args) {
            Ok(Command::Run(s)) => s,
            other => panic!("expected a scenario, got {:?}", other),
        }
    }

    #[test]
    fn no_arguments_is_default() {
        let empty: [&str; 0] = [];
        assert_eq!(run(&empty), Scenario::default());
    }

    #[test]
    fn overrides() {
        let s = run(&[
            "-p", "1,2,3", "--velocity", "0, 2 ,0", "-g", "0,-9.8,0", "--wind=0.5,0,0", "-m", "7",
        ]);
        assert_eq!(s.projectile.position, Tuple::point(1.0, 2.0, 3.0));
        assert_eq!(s.projectile.velocity, Tuple::vector(0.0, 2.0, 0.0));
        assert_eq!(s.environment.gravity, Tuple::vector(0.0, -9.8, 0.0));
        assert_eq!(s.environment.wind, Tuple::vector(0.5, 0.0, 0.0));
        assert_eq!(s.max_ticks, Some(7));
    }

    #[test]
    fn normalize_velocity() {
        let s = run(&["-n", "-v", "3,4,0"]);
        assert!(s.projectile.velocity.approx_eq(&Tuple::vector(0.6, 0.8, 0.0)));
        assert!(s.projectile.velocity.is_vector());

        match parse_args(&["--normalize", "-v", "0,0,0"]) {
            Err(ArgsError::ZeroVelocity) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn help() {
        assert_eq!(parse_args(&["-h"]).ok(), Some(Command::Help));
        assert!(usage("rayray").contains("--max-ticks"));
    }

    #[test]
    fn malformed() {
        for bad in &[
            &["-p", "1,2"][..],
            &["-p", "1,2,3,4"],
            &["-v", "a,b,c"],
            &["-g", "nan,0,0"],
            &["-m", "-1"],
            &["--bogus"],
            &["-p"],
            &["stray"],
        ] {
            assert!(parse_args(*bad).is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn error_messages() {
        let err = parse_args(&["-w", "1,2"]).err().map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("--wind expects X,Y,Z but got \"1,2\"")
        );
    }
}
