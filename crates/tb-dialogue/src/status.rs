//! Operating-status aggregation and the "which turbines are running" phrase.

use tb_protocol::OperatingStatusMap;

/// Whether every turbine in `map` is generating. An empty map is `false`.
pub fn all_operating(map: &OperatingStatusMap) -> bool {
    if map.is_empty() {
        return false;
    }
    map.values().all(|on| *on)
}

/// Join names Spanish-style: "A", "A y B", "A, B y C".
pub fn join_names(names: &[&str]) -> String {
    let joined = names.join(", ");
    match joined.rfind(',') {
        Some(last_comma) => format!("{} y{}", &joined[..last_comma], &joined[last_comma + 1..]),
        None => joined,
    }
}

/// Phrase naming the turbines currently generating.
///
/// `intro` prefixes "la turbina"/"las turbinas"; `outro` appends
/// "está generando."/"están generando.". Returns `None` when nothing is
/// running so the caller can pick its own fallback.
pub fn operating_fragment(map: &OperatingStatusMap, intro: bool, outro: bool) -> Option<String> {
    let running: Vec<&str> = map
        .iter()
        .filter(|(_, on)| **on)
        .map(|(name, _)| name.as_str())
        .collect();

    let (intro_text, outro_text) = match running.len() {
        0 => return None,
        1 => ("la turbina ", " está generando."),
        _ => ("las turbinas ", " están generando."),
    };

    Some(format!(
        "{}{}{}",
        if intro { intro_text } else { "" },
        join_names(&running),
        if outro { outro_text } else { "" },
    ))
}
