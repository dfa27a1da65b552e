/// Trims the module path and any generic arguments from a type name, so
/// `crate::strategies::SkillOnlyStrategy` becomes `SkillOnlyStrategy`.
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
