//! GA generation stepping.
//!
//! One [`train`](crate::trainer::Trainer::train) call runs one generation:
//! survivors → crossover → mutation → evaluation.

use super::config::{GaConfig, Survivors};
use super::selection::Selection;
use crate::candidate::{best_index, Candidate, Objective, Scored};
use crate::error::Result;
use crate::problem::EvolutionaryProblem;
use crate::random::{rng_from, OptRng};
use crate::trainer::{Phase, Trainer};
use rand::seq::index;

/// A slot in the generation under construction.
enum Member {
    Scored(Scored),
    Pending(Candidate),
}

impl Member {
    fn candidate(&self) -> &Candidate {
        match self {
            Member::Scored(s) => &s.candidate,
            Member::Pending(c) => c,
        }
    }
}

/// The standard genetic algorithm over an [`EvolutionaryProblem`].
///
/// Each generation holds exactly `population_size` members. Survivors are
/// placed first, children after them; under [`Survivors::Elite`] slot 0
/// holds the previous champion and is exempt from mutation.
pub struct StandardGeneticAlgorithm<P> {
    problem: P,
    rng: OptRng,
    to_mate: usize,
    to_mutate: usize,
    selection: Selection,
    survivors: Survivors,
    population: Vec<Scored>,
    best: Scored,
    generation: usize,
}

impl<P: EvolutionaryProblem> StandardGeneticAlgorithm<P> {
    /// Draws and evaluates the initial population.
    pub fn new(problem: P, config: &GaConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        let population = (0..config.population_size)
            .map(|_| {
                let candidate = problem.random(&mut rng);
                problem.score(candidate)
            })
            .collect::<Result<Vec<_>>>()?;
        let best = population[best_index(&population, problem.objective())].clone();

        Ok(Self {
            problem,
            rng,
            to_mate: config.to_mate,
            to_mutate: config.to_mutate,
            selection: config.selection,
            survivors: config.survivors,
            population,
            best,
            generation: 0,
        })
    }

    /// The current generation.
    pub fn population(&self) -> &[Scored] {
        &self.population
    }

    /// Best member of the current generation (not necessarily the
    /// best-so-far under sampled survivors).
    pub fn generation_best(&self) -> &Scored {
        &self.population[best_index(&self.population, self.problem.objective())]
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    fn carry_over(&mut self, count: usize) -> Vec<Member> {
        let objective = self.problem.objective();
        match self.survivors {
            Survivors::Elite => {
                let mut order: Vec<usize> = (0..self.population.len()).collect();
                order.sort_by(|&a, &b| {
                    objective
                        .cmp_best_first(self.population[a].fitness, self.population[b].fitness)
                });
                order
                    .into_iter()
                    .take(count)
                    .map(|i| Member::Scored(self.population[i].clone()))
                    .collect()
            }
            Survivors::Sampled => (0..count)
                .map(|_| {
                    let i = self.selection.select(&self.population, objective, &mut self.rng);
                    Member::Scored(self.population[i].clone())
                })
                .collect(),
        }
    }
}

impl<P: EvolutionaryProblem> Trainer for StandardGeneticAlgorithm<P> {
    fn train(&mut self) -> Result<f64> {
        let objective = self.problem.objective();
        let n = self.population.len();

        let mut next = self.carry_over(n - self.to_mate);
        for _ in 0..self.to_mate {
            let a = self.selection.select(&self.population, objective, &mut self.rng);
            let b = self.selection.select(&self.population, objective, &mut self.rng);
            let child = self.problem.mate(
                &self.population[a].candidate,
                &self.population[b].candidate,
                &mut self.rng,
            );
            next.push(Member::Pending(child));
        }

        // Elite slot 0 is the champion; mutation picks among the others.
        let offset = usize::from(self.survivors == Survivors::Elite);
        for slot in index::sample(&mut self.rng, n - offset, self.to_mutate) {
            let slot = slot + offset;
            let mutant = self.problem.mutate(next[slot].candidate(), &mut self.rng);
            next[slot] = Member::Pending(mutant);
        }

        let mut population = Vec::with_capacity(n);
        for member in next {
            population.push(match member {
                Member::Scored(s) => s,
                Member::Pending(c) => self.problem.score(c)?,
            });
        }
        self.population = population;
        self.generation += 1;

        let gen_best = &self.population[best_index(&self.population, objective)];
        if objective.is_better(gen_best.fitness, self.best.fitness) {
            self.best = gen_best.clone();
        }
        tracing::trace!(
            generation = self.generation,
            generation_best = gen_best.fitness,
            best = self.best.fitness,
            "ga generation"
        );
        Ok(self.best.fitness)
    }

    fn optimal(&self) -> &Scored {
        &self.best
    }

    fn objective(&self) -> Objective {
        self.problem.objective()
    }

    fn steps(&self) -> usize {
        self.generation
    }

    fn phase(&self) -> Phase {
        if self.generation == 0 {
            Phase::Initialized
        } else {
            Phase::Generation
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::{DiscretePermutation, DiscreteUniform};
    use crate::operators::{
        DiscreteChangeOneMutation, OrderCrossover, SingleCrossover, SwapMutation,
    };
    use crate::problem::{Counted, Problem};
    use crate::problems::{CountOnes, TravelingSalesmanRoute};

    fn count_ones(
        n: usize,
    ) -> Problem<CountOnes, DiscreteUniform, (), DiscreteChangeOneMutation, SingleCrossover> {
        Problem::new(CountOnes, DiscreteUniform::binary(n))
            .with_mutation(DiscreteChangeOneMutation::binary(n))
            .with_crossover(SingleCrossover)
    }

    #[test]
    fn test_population_size_constant() {
        let config = GaConfig::new(30, 15, 5).with_seed(42);
        let mut ga = StandardGeneticAlgorithm::new(count_ones(20), &config).unwrap();
        assert_eq!(ga.population().len(), 30);
        for _ in 0..20 {
            ga.train().unwrap();
            assert_eq!(ga.population().len(), 30);
        }
        assert_eq!(ga.steps(), 20);
        assert_eq!(ga.phase(), Phase::Generation);
    }

    #[test]
    fn test_elitist_generation_best_never_worse() {
        let config = GaConfig::new(20, 12, 7)
            .with_selection(Selection::Tournament(2))
            .with_seed(7);
        let mut ga = StandardGeneticAlgorithm::new(count_ones(30), &config).unwrap();
        let mut last = ga.generation_best().fitness;
        for _ in 0..50 {
            ga.train().unwrap();
            let f = ga.generation_best().fitness;
            assert!(f >= last, "generation best dropped from {last} to {f}");
            last = f;
        }
    }

    #[test]
    fn test_evaluations_per_generation() {
        // Elite survivors keep their fitness; children and mutants are new.
        let eval = Counted::new(CountOnes);
        let problem = Problem::new(&eval, DiscreteUniform::binary(10))
            .with_mutation(DiscreteChangeOneMutation::binary(10))
            .with_crossover(SingleCrossover);
        let mut ga =
            StandardGeneticAlgorithm::new(problem, &GaConfig::new(10, 4, 0).with_seed(1)).unwrap();
        assert_eq!(eval.evaluations(), 10);
        ga.train().unwrap();
        assert_eq!(eval.evaluations(), 14);
    }

    #[test]
    fn test_sampled_survivors_keep_size() {
        let config = GaConfig::new(12, 9, 3)
            .with_survivors(Survivors::Sampled)
            .with_seed(3);
        let mut ga = StandardGeneticAlgorithm::new(count_ones(8), &config).unwrap();
        let start = ga.optimal().fitness;
        for _ in 0..10 {
            let best = ga.train().unwrap();
            assert!(best >= start);
            assert_eq!(ga.population().len(), 12);
        }
    }

    #[test]
    fn test_permutation_operators_keep_routes_valid() {
        let points = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 2.0)];
        let problem = Problem::new(TravelingSalesmanRoute::new(points), DiscretePermutation::new(5))
            .with_mutation(SwapMutation)
            .with_crossover(OrderCrossover);
        let mut ga =
            StandardGeneticAlgorithm::new(problem, &GaConfig::new(16, 8, 4).with_seed(9)).unwrap();
        for _ in 0..10 {
            ga.train().unwrap();
        }
        for member in ga.population() {
            let mut route: Vec<usize> = member.candidate.discrete_iter().collect();
            route.sort_unstable();
            assert_eq!(route, vec![0, 1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let ga =
            StandardGeneticAlgorithm::new(count_ones(8), &GaConfig::new(5, 2, 1).with_seed(4))
                .unwrap();
        assert_eq!(ga.phase(), Phase::Initialized);
        assert_eq!(ga.optimal(), ga.generation_best());
    }
}
