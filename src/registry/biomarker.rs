pub const BIOMARKER_COUNT: usize = 47;

/// Identity of every biomarker the model knows about.
///
/// Declared in registry order (tumor, immune, resistance, metabolic, organ),
/// so `Biomarker as usize` doubles as a dense index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Biomarker {
    Ca153,
    Ca2729,
    Cea,
    Tk1,
    Ctdna,
    Esr1Protein,
    Cd8,
    Cd4,
    Nk,
    IfnGamma,
    Il10,
    TnfAlpha,
    TgfBeta,
    Pdl1Ctc,
    HlaDr,
    Ctc,
    Ang2,
    Lymphocytes,
    Esr1Mutations,
    Pgr,
    Brca,
    Pik3ca,
    Tp53,
    Her2Mutations,
    Her2Circ,
    Mdr1,
    Cyp2d6,
    Survivin,
    Hsp,
    Mir200,
    Exosomes,
    Vegf,
    Mrp1,
    Ki67,
    Glucose,
    Lactate,
    Ldh,
    Albumin,
    BetaHydroxybutyrate,
    BloodPh,
    Folate,
    VitaminD,
    Creatinine,
    Bun,
    Alt,
    Ast,
    Bilirubin,
}

impl Biomarker {
    pub const ALL: [Biomarker; BIOMARKER_COUNT] = [
        Self::Ca153,
        Self::Ca2729,
        Self::Cea,
        Self::Tk1,
        Self::Ctdna,
        Self::Esr1Protein,
        Self::Cd8,
        Self::Cd4,
        Self::Nk,
        Self::IfnGamma,
        Self::Il10,
        Self::TnfAlpha,
        Self::TgfBeta,
        Self::Pdl1Ctc,
        Self::HlaDr,
        Self::Ctc,
        Self::Ang2,
        Self::Lymphocytes,
        Self::Esr1Mutations,
        Self::Pgr,
        Self::Brca,
        Self::Pik3ca,
        Self::Tp53,
        Self::Her2Mutations,
        Self::Her2Circ,
        Self::Mdr1,
        Self::Cyp2d6,
        Self::Survivin,
        Self::Hsp,
        Self::Mir200,
        Self::Exosomes,
        Self::Vegf,
        Self::Mrp1,
        Self::Ki67,
        Self::Glucose,
        Self::Lactate,
        Self::Ldh,
        Self::Albumin,
        Self::BetaHydroxybutyrate,
        Self::BloodPh,
        Self::Folate,
        Self::VitaminD,
        Self::Creatinine,
        Self::Bun,
        Self::Alt,
        Self::Ast,
        Self::Bilirubin,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Ca153 => "ca153",
            Self::Ca2729 => "ca2729",
            Self::Cea => "cea",
            Self::Tk1 => "tk1",
            Self::Ctdna => "ctdna",
            Self::Esr1Protein => "esr1_protein",
            Self::Cd8 => "cd8",
            Self::Cd4 => "cd4",
            Self::Nk => "nk",
            Self::IfnGamma => "ifn_gamma",
            Self::Il10 => "il10",
            Self::TnfAlpha => "tnf_alpha",
            Self::TgfBeta => "tgf_beta",
            Self::Pdl1Ctc => "pdl1_ctc",
            Self::HlaDr => "hla_dr",
            Self::Ctc => "ctc",
            Self::Ang2 => "ang2",
            Self::Lymphocytes => "lymphocytes",
            Self::Esr1Mutations => "esr1_mutations",
            Self::Pgr => "pgr",
            Self::Brca => "brca",
            Self::Pik3ca => "pik3ca",
            Self::Tp53 => "tp53",
            Self::Her2Mutations => "her2_mutations",
            Self::Her2Circ => "her2_circ",
            Self::Mdr1 => "mdr1",
            Self::Cyp2d6 => "cyp2d6",
            Self::Survivin => "survivin",
            Self::Hsp => "hsp",
            Self::Mir200 => "mir200",
            Self::Exosomes => "exosomes",
            Self::Vegf => "vegf",
            Self::Mrp1 => "mrp1",
            Self::Ki67 => "ki67",
            Self::Glucose => "glucose",
            Self::Lactate => "lactate",
            Self::Ldh => "ldh",
            Self::Albumin => "albumin",
            Self::BetaHydroxybutyrate => "beta_hydroxybutyrate",
            Self::BloodPh => "blood_ph",
            Self::Folate => "folate",
            Self::VitaminD => "vitamin_d",
            Self::Creatinine => "creatinine",
            Self::Bun => "bun",
            Self::Alt => "alt",
            Self::Ast => "ast",
            Self::Bilirubin => "bilirubin",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.key() == key)
    }
}
