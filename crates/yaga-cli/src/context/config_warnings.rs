const ENV_PREFIX: &str = "YAGAMAP_";
const SECTIONS: &[&str] = &["SHEETS", "MAP"];

/// Emit warnings for `YAGAMAP_*` env vars that figment silently ignores.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars().map(|(key, _)| key)) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut warnings = keys
        .into_iter()
        .filter_map(|key| {
            let rest = key.strip_prefix(ENV_PREFIX)?;
            if rest == "LOG" {
                return None;
            }
            match rest.split_once("__") {
                Some((section, field))
                    if !field.is_empty()
                        && SECTIONS.iter().any(|s| s.eq_ignore_ascii_case(section)) =>
                {
                    None
                }
                _ => Some(format!(
                    "{key} is not a recognized setting and is ignored. Use a section and double underscores (example: YAGAMAP_SHEETS__TIMEOUT_SECS)."
                )),
            }
        })
        .collect::<Vec<_>>();
    warnings.sort();
    warnings
}
