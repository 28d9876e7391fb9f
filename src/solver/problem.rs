// src/solver/problem.rs

use argmin::core::{CostFunction, Error};

use crate::config::ScenarioConfig;
use crate::solver::scoring::{score, Candidate};

/// argmin に渡す迎撃最適化問題
pub struct InterceptProblem<'a> {
    config: &'a ScenarioConfig,
}

impl<'a> InterceptProblem<'a> {
    pub fn new(config: &'a ScenarioConfig) -> Self {
        Self { config }
    }
}

impl CostFunction for InterceptProblem<'_> {
    type Param = Vec<f64>;

    type Output = f64;

    fn cost(&self, param: &Self::Param) -> Result<Self::Output, Error> {
        let candidate = Candidate::from_slice(param)
            .ok_or_else(|| Error::msg(format!("探索変数は3要素が必要です: {:?}", param)))?;
        Ok(score(&candidate, self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_matches_score() {
        let config = ScenarioConfig::default();
        let problem = InterceptProblem::new(&config);
        let candidate = Candidate {
            angle: 45.0,
            speed: 1.55,
            intercept_time: 10.0,
        };
        assert_eq!(problem.cost(&candidate.to_vec()).unwrap(), score(&candidate, &config));
    }

    #[test]
    fn test_infeasible_cost_is_infinite() {
        let config = ScenarioConfig::default();
        let problem = InterceptProblem::new(&config);
        assert_eq!(problem.cost(&vec![45.0, 5.0, 10.0]).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_wrong_dimension_is_error() {
        let config = ScenarioConfig::default();
        let problem = InterceptProblem::new(&config);
        assert!(problem.cost(&vec![45.0, 1.0]).is_err());
    }
}
