//! Declarative formula descriptors and the single clamp-and-apply evaluator.
//!
//! Every score and parameter is a static descriptor: what it produces, which
//! inputs it reads, how it is computed and how it is bounded. Tables are
//! evaluated strictly in order, so a formula may read any score or parameter
//! that appears earlier in its table.

use crate::config::HeuristicProfile;
use crate::input::CompleteBiomarkerVector;
use crate::math::Bounds;
use crate::registry::Biomarker;
use crate::scores::names::{PARAMETER_COUNT, Parameter, SCORE_COUNT, Score};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormulaInput {
    Biomarker(Biomarker),
    Score(Score),
    Parameter(Parameter),
}

/// Read-only view handed to a formula.
pub struct Env<'a> {
    biomarkers: &'a CompleteBiomarkerVector,
    scores: &'a [f64],
    parameters: &'a [f64],
    pub h: &'a HeuristicProfile,
}

impl<'a> Env<'a> {
    pub fn new(
        biomarkers: &'a CompleteBiomarkerVector,
        scores: &'a [f64],
        parameters: &'a [f64],
        h: &'a HeuristicProfile,
    ) -> Self {
        Self {
            biomarkers,
            scores,
            parameters,
            h,
        }
    }

    pub fn b(&self, biomarker: Biomarker) -> f64 {
        self.biomarkers[biomarker]
    }

    pub fn s(&self, score: Score) -> f64 {
        self.scores.get(score.index()).copied().unwrap_or(0.0)
    }

    pub fn p(&self, parameter: Parameter) -> f64 {
        self.parameters.get(parameter.index()).copied().unwrap_or(0.0)
    }
}

pub type FormulaFn = fn(&Env<'_>) -> f64;

pub struct ScoreFormula {
    pub score: Score,
    pub inputs: &'static [FormulaInput],
    pub eval: FormulaFn,
    pub bounds: Option<Bounds>,
}

pub struct ParameterFormula {
    pub parameter: Parameter,
    pub inputs: &'static [FormulaInput],
    pub eval: FormulaFn,
}

fn apply(eval: FormulaFn, env: &Env<'_>, bounds: Option<Bounds>) -> f64 {
    let raw = eval(env);
    match bounds {
        Some(b) => b.clamp(raw),
        None => raw,
    }
}

pub fn evaluate_scores(
    table: &[ScoreFormula],
    biomarkers: &CompleteBiomarkerVector,
    heuristics: &HeuristicProfile,
) -> [f64; SCORE_COUNT] {
    let mut values = [0.0; SCORE_COUNT];
    for formula in table {
        let v = {
            let env = Env::new(biomarkers, &values, &[], heuristics);
            apply(formula.eval, &env, formula.bounds)
        };
        values[formula.score.index()] = v;
    }
    values
}

pub fn evaluate_parameters(
    table: &[ParameterFormula],
    biomarkers: &CompleteBiomarkerVector,
    scores: &[f64; SCORE_COUNT],
    heuristics: &HeuristicProfile,
) -> [f64; PARAMETER_COUNT] {
    let mut values = [0.0; PARAMETER_COUNT];
    for formula in table {
        let v = {
            let env = Env::new(biomarkers, scores, &values, heuristics);
            apply(formula.eval, &env, Some(formula.parameter.bounds()))
        };
        values[formula.parameter.index()] = v;
    }
    values
}

/// Inputs of the same kind as the table's output must be produced earlier in
/// that table.
pub fn check_table_order<T>(
    table: &[T],
    output: impl Fn(&T) -> FormulaInput,
    inputs: impl Fn(&T) -> &'static [FormulaInput],
) -> Result<(), String> {
    let mut produced: Vec<FormulaInput> = Vec::with_capacity(table.len());
    for entry in table {
        let out = output(entry);
        for input in inputs(entry) {
            let same_table = std::mem::discriminant(input) == std::mem::discriminant(&out);
            if same_table && !produced.contains(input) {
                return Err(format!(
                    "{:?} reads {:?} before it is computed",
                    out,
                    input
                ));
            }
        }
        produced.push(out);
    }
    Ok(())
}
