/// A permanent bonus granted by an artifact or tech node.
///
/// Percentages are fractions: `IncomeBoost(0.25)` is +25% income,
/// `CostReduction(0.1)` is 10% off (stacked reductions floor at 50%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Perk {
    IncomeBoost(f64),
    TapBoost(f64),
    CostReduction(f64),
    EssenceGain(f64),
    OfflineRate(f64),
}

/// What an artifact costs. Each artifact is priced in exactly one currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArtifactCost {
    Essence(u64),
    Gems(u64),
}

/// Static definition of an artifact.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: ArtifactCost,
    pub perk: Perk,
}
