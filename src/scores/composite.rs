use crate::math::{Bounds, clamp, guarded_ratio};
use crate::registry::Biomarker as Bm;
use crate::scores::formula::FormulaInput::{Biomarker as B, Score as S};
use crate::scores::formula::ScoreFormula;
use crate::scores::names::Score;

/// Composite scores in evaluation order.
pub static SCORE_FORMULAS: &[ScoreFormula] = &[
    ScoreFormula {
        score: Score::Tumor,
        inputs: &[B(Bm::Ca153), B(Bm::Ca2729), B(Bm::Cea), B(Bm::Ctc), B(Bm::Ctdna)],
        eval: |e| {
            (e.b(Bm::Ca153) / 31.3
                + e.b(Bm::Ca2729) / 38.0
                + e.b(Bm::Cea) / 3.0
                + e.b(Bm::Ctc) / 5.0
                + e.b(Bm::Ctdna) / 1.0)
                / 5.0
        },
        bounds: None,
    },
    ScoreFormula {
        score: Score::Prolif,
        inputs: &[B(Bm::Tk1), B(Bm::Glucose), B(Bm::Lactate), B(Bm::Survivin)],
        eval: |e| {
            (e.b(Bm::Tk1) / 2.0
                + e.b(Bm::Glucose) / 95.0
                + e.b(Bm::Lactate) / 2.2
                + e.b(Bm::Survivin) / 0.5)
                / 4.0
        },
        bounds: None,
    },
    ScoreFormula {
        score: Score::Immune,
        inputs: &[B(Bm::Cd8), B(Bm::Cd4), B(Bm::Nk), B(Bm::IfnGamma)],
        eval: |e| {
            0.4 * (e.b(Bm::Cd8) / 700.0)
                + 0.3 * (e.b(Bm::Cd4) / 1050.0)
                + 0.2 * (e.b(Bm::Nk) / 345.0)
                + 0.1 * (e.b(Bm::IfnGamma) / 2.0)
        },
        bounds: None,
    },
    ScoreFormula {
        score: Score::Suppress,
        inputs: &[B(Bm::Il10), B(Bm::TgfBeta), B(Bm::Pdl1Ctc)],
        eval: |e| (e.b(Bm::Il10) / 5.0 + e.b(Bm::TgfBeta) / 2.5 + e.b(Bm::Pdl1Ctc) / 1.0) / 3.0,
        bounds: None,
    },
    ScoreFormula {
        score: Score::GenomicStability,
        inputs: &[B(Bm::Ctdna), B(Bm::Pik3ca), B(Bm::Tp53)],
        eval: |e| {
            1.0 - 0.3 * (e.b(Bm::Ctdna) / 1.0)
                - 0.2 * (e.b(Bm::Pik3ca) / 10.0)
                - 0.2 * (e.b(Bm::Tp53) / 10.0)
        },
        bounds: Some(Bounds::new(0.1, 1.0)),
    },
    ScoreFormula {
        score: Score::Genetic,
        inputs: &[B(Bm::Ctdna), B(Bm::Pik3ca), B(Bm::Tp53)],
        eval: |e| (e.b(Bm::Ctdna) / 1.0 + e.b(Bm::Pik3ca) / 10.0 + e.b(Bm::Tp53) / 10.0) / 3.0,
        bounds: None,
    },
    ScoreFormula {
        score: Score::Metabolic,
        inputs: &[B(Bm::Glucose), B(Bm::Lactate), B(Bm::Ldh)],
        eval: |e| (e.b(Bm::Glucose) / 95.0 + e.b(Bm::Lactate) / 2.2 + e.b(Bm::Ldh) / 250.0) / 3.0,
        bounds: None,
    },
    ScoreFormula {
        score: Score::Stress,
        inputs: &[S(Score::Metabolic)],
        eval: |e| e.s(Score::Metabolic),
        bounds: None,
    },
    ScoreFormula {
        score: Score::Quiescence,
        inputs: &[B(Bm::Glucose), B(Bm::Lactate)],
        eval: |e| {
            let low_glucose = ((100.0 - e.b(Bm::Glucose)) / 100.0).max(0.0);
            let lactate = (e.b(Bm::Lactate) / 4.0).min(1.0);
            (low_glucose + lactate) / 2.0
        },
        bounds: None,
    },
    ScoreFormula {
        score: Score::Activation,
        inputs: &[B(Bm::IfnGamma), B(Bm::Cd4)],
        eval: |e| (e.b(Bm::IfnGamma) / 5.0 + e.b(Bm::Cd4) / 1200.0) / 2.0,
        bounds: None,
    },
    ScoreFormula {
        score: Score::Resist1,
        inputs: &[B(Bm::Esr1Mutations), B(Bm::Pgr), B(Bm::Pik3ca), B(Bm::Survivin)],
        eval: |e| {
            (e.b(Bm::Esr1Mutations) / 8.0
                + e.b(Bm::Pgr) / 20.0
                + e.b(Bm::Pik3ca) / 5.0
                + e.b(Bm::Survivin) / 6.0)
                / 4.0
        },
        bounds: Some(Bounds::new(0.1, 2.0)),
    },
    ScoreFormula {
        score: Score::Resist2,
        inputs: &[B(Bm::Her2Mutations), B(Bm::Mdr1), B(Bm::Survivin), B(Bm::Hsp)],
        eval: |e| {
            (e.b(Bm::Her2Mutations) / 10.0
                + e.b(Bm::Mdr1) / 150.0
                + e.b(Bm::Survivin) / 6.0
                + e.b(Bm::Hsp) / 10.0)
                / 4.0
        },
        bounds: Some(Bounds::new(0.1, 2.0)),
    },
    ScoreFormula {
        score: Score::Metastatic,
        inputs: &[B(Bm::Ctc), B(Bm::Mir200), B(Bm::Exosomes)],
        eval: |e| {
            let f_emt = ((5.0 - e.b(Bm::Mir200)) / 5.0).max(0.0);
            (e.b(Bm::Ctc) / 20.0 + f_emt + e.b(Bm::Exosomes) / 100.0) / 3.0
        },
        bounds: None,
    },
    ScoreFormula {
        score: Score::Liver,
        inputs: &[B(Bm::Alt), B(Bm::Ast), B(Bm::Bilirubin)],
        eval: |e| {
            let alt = clamp(guarded_ratio(40.0, e.b(Bm::Alt), 5.0), 0.2, 1.2);
            let ast = clamp(guarded_ratio(45.0, e.b(Bm::Ast), 8.0), 0.2, 1.2);
            let bili = clamp(guarded_ratio(1.2, e.b(Bm::Bilirubin), 0.1), 0.5, 1.5);
            (alt + ast + bili) / 3.0
        },
        bounds: None,
    },
    ScoreFormula {
        score: Score::Kidney,
        inputs: &[B(Bm::Creatinine), B(Bm::Bun)],
        eval: |e| {
            let creat = clamp(guarded_ratio(1.2, e.b(Bm::Creatinine), 0.5), 0.3, 1.3);
            let bun = clamp(guarded_ratio(20.0, e.b(Bm::Bun), 5.0), 0.3, 1.3);
            (creat + bun) / 2.0
        },
        bounds: None,
    },
    ScoreFormula {
        score: Score::Clearance,
        inputs: &[S(Score::Liver), S(Score::Kidney)],
        eval: |e| e.s(Score::Liver) * e.s(Score::Kidney),
        bounds: None,
    },
    ScoreFormula {
        score: Score::Organs,
        inputs: &[S(Score::Liver), S(Score::Kidney)],
        eval: |e| (e.s(Score::Liver) + e.s(Score::Kidney)) / 2.0,
        bounds: None,
    },
    ScoreFormula {
        score: Score::Cyp2d6,
        inputs: &[B(Bm::Cyp2d6)],
        eval: |e| (e.b(Bm::Cyp2d6) / 2.0).min(1.0),
        bounds: None,
    },
    ScoreFormula {
        score: Score::General,
        inputs: &[B(Bm::Albumin), B(Bm::Glucose)],
        eval: |e| {
            let glucose_penalty = (1.0 - 0.3 * (95.0 - e.b(Bm::Glucose)).abs() / 95.0).max(0.5);
            (e.b(Bm::Albumin) / 4.0 + glucose_penalty) / 2.0
        },
        bounds: None,
    },
    ScoreFormula {
        score: Score::ImmuneContext,
        inputs: &[B(Bm::Cd8), B(Bm::Cd4), B(Bm::IfnGamma), B(Bm::Il10)],
        eval: |e| {
            (e.b(Bm::Cd8) / 700.0
                + e.b(Bm::Cd4) / 1050.0
                + e.b(Bm::IfnGamma) / 2.0
                + (1.0 - e.b(Bm::Il10) / 15.0).max(0.0))
                / 4.0
        },
        bounds: None,
    },
    ScoreFormula {
        score: Score::AlphaAcid,
        inputs: &[B(Bm::BloodPh)],
        eval: |e| 2.0 * (7.4 - e.b(Bm::BloodPh)).max(0.0),
        bounds: Some(Bounds::new(0.01, 0.5)),
    },
];
