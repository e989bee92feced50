/// Static definition of a manager. Each runs exactly one extractor.
#[derive(Debug, Clone, Copy)]
pub struct ManagerDef {
    pub id: &'static str,
    pub name: &'static str,
    /// Extractor this manager runs.
    pub element: &'static str,
    pub hire_cost: f64,
    /// Multiplier applied to the element's income while hired.
    pub income_mult: f64,
}
