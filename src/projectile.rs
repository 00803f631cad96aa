use crate::*;
use log::*;

pub const DEFAULT_MAX_TICKS: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub position: Tuple,
    pub velocity: Tuple,
}

impl Projectile {
    pub fn new(position: Tuple, velocity: Tuple) -> Self {
        Projectile { position, velocity }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub gravity: Tuple,
    pub wind: Tuple,
}

impl Environment {
    pub fn new(gravity: Tuple, wind: Tuple) -> Self {
        Environment { gravity, wind }
    }

    pub fn acceleration(&self) -> Tuple {
        self.gravity + self.wind
    }
}

/// Advances one step: position by velocity, then velocity by the
/// environment's constant forces.
pub fn tick(env: &Environment, p: &Projectile) -> Projectile {
    Projectile {
        position: p.position + p.velocity,
        velocity: p.velocity + env.acceleration(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Landed { ticks: usize },
    TickLimit { ticks: usize },
    Diverged { ticks: usize },
}

impl Outcome {
    pub fn ticks(&self) -> usize {
        match *self {
            Outcome::Landed { ticks } | Outcome::TickLimit { ticks } | Outcome::Diverged { ticks } => {
                ticks
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub projectile: Projectile,
    pub environment: Environment,
    pub max_ticks: Option<usize>,
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            projectile: Projectile::new(
                Tuple::point(0.0, 1.0, 0.0),
                Tuple::vector(1.0, 1.0, 0.0),
            ),
            environment: Environment::new(
                Tuple::vector(0.0, -0.1, 0.0),
                Tuple::vector(-0.01, 0.0, 0.0),
            ),
            max_ticks: Some(DEFAULT_MAX_TICKS),
        }
    }
}

pub struct Simulation {
    env: Environment,
    projectile: Projectile,
    ticks: usize,
}

impl Simulation {
    pub fn new(env: Environment, projectile: Projectile) -> Self {
        Simulation {
            env,
            projectile,
            ticks: 0,
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::new(scenario.environment, scenario.projectile)
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn has_landed(&self) -> bool {
        self.projectile.position.y <= 0.0
    }

    pub fn step(&mut self) -> &Projectile {
        self.projectile = tick(&self.env, &self.projectile);
        self.ticks += 1;
        &self.projectile
    }

    /// Ticks until the projectile reaches the ground, calling `on_tick`
    /// after every step. A projectile that starts on the ground never moves.
    pub fn run<F>(&mut self, max_ticks: Option<usize>, mut on_tick: F) -> Outcome
    where
        F: FnMut(usize, &Projectile),
    {
        debug!(
            "launch from {:?} with {:?}, acceleration {:?}",
            self.projectile.position,
            self.projectile.velocity,
            self.env.acceleration()
        );
        while !self.has_landed() {
            if max_ticks.map_or(false, |m| self.ticks >= m) {
                warn!("tick limit reached before landing ({} ticks)", self.ticks);
                return Outcome::TickLimit { ticks: self.ticks };
            }
            self.step();
            on_tick(self.ticks, &self.projectile);
            if !self.projectile.position.is_finite() {
                warn!("position is not finite {:?}", self.projectile.position);
                warn!("> velocity {:?}", self.projectile.velocity);
                return Outcome::Diverged { ticks: self.ticks };
            }
        }
        info!(
            "landed after {} ticks at {:?}",
            self.ticks, self.projectile.position
        );
        Outcome::Landed { ticks: self.ticks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_formula() {
        let env = Environment::new(Tuple::vector(0.0, -0.1, 0.0), Tuple::vector(-0.01, 0.0, 0.0));
        let p = Projectile::new(Tuple::point(0.0, 1.0, 0.0), Tuple::vector(1.0, 1.0, 0.0));
        let next = tick(&env, &p);
        assert!(next.position.approx_eq(&Tuple::point(1.0, 2.0, 0.0)));
        assert!(next.velocity.approx_eq(&Tuple::vector(0.99, 0.9, 0.0)));
        assert!(next.position.is_point());
        assert!(next.velocity.is_vector());
    }

    #[test]
    fn only_total_acceleration_matters() {
        let g = Tuple::vector(0.0, -0.1, 0.0);
        let w = Tuple::vector(-0.01, 0.0, 0.0);
        let p = Scenario::default().projectile;
        assert_eq!(
            tick(&Environment::new(g, w), &p),
            tick(&Environment::new(w, g), &p)
        );
    }

    #[test]
    fn default_scenario_lands() {
        let scenario = Scenario::default();
        let mut sim = Simulation::from_scenario(&scenario);
        let mut seen = vec![];
        let outcome = sim.run(scenario.max_ticks, |t, p| seen.push((t, p.position)));

        assert_eq!(outcome, Outcome::Landed { ticks: 22 });
        assert_eq!(outcome.ticks(), sim.ticks());
        assert_eq!(seen.len(), 22);
        assert_eq!(seen[0].0, 1);
        assert!(seen[..21].iter().all(|(_, p)| p.y > 0.0));

        let end = sim.projectile().position;
        assert!(end.is_point());
        assert!(end.approx_eq(&Tuple::point(19.69, -0.1, 0.0)));
        assert_eq!(seen[21].1, end);
    }

    #[test]
    fn grounded_projectile_does_not_move() {
        let p = Projectile::new(Tuple::point(0.0, 0.0, 0.0), Tuple::vector(1.0, 1.0, 0.0));
        let mut sim = Simulation::new(Scenario::default().environment, p);
        let mut calls = 0;
        assert_eq!(sim.run(None, |_, _| calls += 1), Outcome::Landed { ticks: 0 });
        assert_eq!(calls, 0);
        assert_eq!(*sim.projectile(), p);
    }

    #[test]
    fn tick_limit() {
        let env = Environment::new(Tuple::vector(0.0, 0.0, 0.0), Tuple::vector(0.0, 0.0, 0.0));
        let p = Projectile::new(Tuple::point(0.0, 1.0, 0.0), Tuple::vector(1.0, 0.0, 0.0));
        let mut sim = Simulation::new(env, p);
        assert_eq!(sim.run(Some(5), |_, _| ()), Outcome::TickLimit { ticks: 5 });
        assert!(sim.projectile().position.approx_eq(&Tuple::point(5.0, 1.0, 0.0)));
    }

    #[test]
    fn non_finite_position_diverges() {
        let env = Scenario::default().environment;
        let p = Projectile::new(
            Tuple::point(0.0, 1.0, 0.0),
            Tuple::vector(0.0, 0.0, 0.0).normalize(),
        );
        let mut sim = Simulation::new(env, p);
        assert_eq!(sim.run(None, |_, _| ()), Outcome::Diverged { ticks: 1 });
    }
}
