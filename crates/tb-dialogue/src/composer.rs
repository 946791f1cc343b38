//! Response composer.
//!
//! Renders the reply for a resolved turbine selection and measurement set.
//! Wind is answered independently of the turbine branch and appended last.
//! Telemetry failures become fallback sentences; they never abort a turn.

use tb_protocol::{Measurement, MeasurementSet, Turbine, TurbineSelection, TurbineSnapshot};
use tb_telemetry::{TelemetryProvider, WindSensor};

use crate::messages;
use crate::status;

/// From this many turbine measurements on, answer one line per measurement.
pub const LINE_PER_OPTION_THRESHOLD: usize = 3;

/// Compose the full reply text.
pub async fn compose(
    selection: TurbineSelection,
    measurements: &MeasurementSet,
    telemetry: &dyn TelemetryProvider,
    wind: &dyn WindSensor,
) -> String {
    let mut turbine_options = measurements.clone();
    let wants_wind = turbine_options.remove(Measurement::Wind);

    let wind_part = async {
        if wants_wind {
            Some(wind_clause(wind).await)
        } else {
            None
        }
    };
    let turbine_part = turbine_section(selection, &turbine_options, telemetry);

    let (body, wind_text) = tokio::join!(turbine_part, wind_part);

    let mut parts = Vec::with_capacity(2);
    if !body.is_empty() {
        parts.push(body);
    }
    if let Some(text) = wind_text {
        parts.push(text);
    }
    parts.join("\n").trim().to_string()
}

async fn wind_clause(wind: &dyn WindSensor) -> String {
    match wind.wind().await {
        Ok(Some(reading)) => messages::wind(reading.speed),
        Ok(None) => messages::ANEMOMETER_UNAVAILABLE.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "anemometer read failed");
            messages::ANEMOMETER_UNAVAILABLE.to_string()
        }
    }
}

/// Everything except the wind clause.
async fn turbine_section(
    selection: TurbineSelection,
    options: &MeasurementSet,
    telemetry: &dyn TelemetryProvider,
) -> String {
    if options.is_empty() {
        return String::new();
    }
    if selection.is_unselected() {
        return messages::TURBINE_NOT_SPECIFIED.to_string();
    }

    if options.len() == 1 && options.contains(Measurement::Status) {
        return status_only(selection, telemetry).await;
    }

    let mut detail = options.clone();
    detail.remove(Measurement::Status);

    let mut blocks = Vec::new();
    for turbine in selection.turbines() {
        let block = match telemetry.snapshot(turbine).await {
            Ok(snapshot) => render_snapshot(&snapshot, &detail),
            Err(e) => {
                tracing::warn!(turbine = %turbine, error = %e, "snapshot unavailable");
                messages::snapshot_unavailable(turbine.display_name())
            }
        };
        blocks.push(block);
    }
    blocks.join("\n")
}

async fn status_only(selection: TurbineSelection, telemetry: &dyn TelemetryProvider) -> String {
    match selection {
        TurbineSelection::One(turbine) => single_status(turbine, telemetry).await,
        TurbineSelection::All => {
            let map = match telemetry.all_operating_status().await {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(error = %e, "operating status map unavailable");
                    Default::default()
                }
            };
            status::operating_fragment(&map, true, true)
                .unwrap_or_else(|| messages::NO_TURBINE_AVAILABLE.to_string())
        }
        TurbineSelection::Unselected => messages::TURBINE_NOT_SPECIFIED.to_string(),
    }
}

async fn single_status(turbine: Turbine, telemetry: &dyn TelemetryProvider) -> String {
    match telemetry.operating_status(turbine).await {
        Ok(operating) => messages::turbine_status(turbine.display_name(), operating),
        Err(e) => {
            tracing::warn!(turbine = %turbine, error = %e, "operating status unavailable");
            messages::status_unavailable(turbine.display_name())
        }
    }
}

/// Clause for one measurement, or `None` for measurements without one.
fn clause(m: Measurement, s: &TurbineSnapshot) -> Option<String> {
    match m {
        Measurement::Load => Some(format!("cargada al %{}", s.load_percent)),
        Measurement::Generation => Some(format!("generando {} A a {} V", s.amperage, s.voltage)),
        Measurement::Rotation => Some(format!("girando a {} rpm", s.rpm)),
        Measurement::Status | Measurement::Wind => None,
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render one turbine's snapshot for the requested measurements.
pub fn render_snapshot(snapshot: &TurbineSnapshot, options: &MeasurementSet) -> String {
    let clauses: Vec<String> = options.iter().filter_map(|m| clause(m, snapshot)).collect();

    if clauses.len() >= LINE_PER_OPTION_THRESHOLD {
        let mut lines = vec![format!("La turbina {} está:", snapshot.name)];
        lines.extend(clauses.iter().map(|c| format!("{}.", capitalize(c))));
        lines.join("\n")
    } else {
        format!("La turbina {} está {}.", snapshot.name, clauses.join(" y "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tb_telemetry::{MockTelemetry, MockWindSensor};

    fn set(items: &[Measurement]) -> MeasurementSet {
        items.iter().copied().collect()
    }

    async fn run(selection: TurbineSelection, items: &[Measurement]) -> String {
        compose(
            selection,
            &set(items),
            &MockTelemetry::with_sample_readings(),
            &MockWindSensor::with_speed(7.5),
        )
        .await
    }

    const ARTHAS: TurbineSelection = TurbineSelection::One(Turbine::Arthas);

    #[tokio::test]
    async fn single_generation() {
        assert_eq!(
            run(ARTHAS, &[Measurement::Generation]).await,
            "La turbina Arthas está generando 3 A a 12 V."
        );
    }

    #[tokio::test]
    async fn two_options_inline() {
        assert_eq!(
            run(ARTHAS, &[Measurement::Generation, Measurement::Load]).await,
            "La turbina Arthas está generando 3 A a 12 V y cargada al %80."
        );
    }

    #[tokio::test]
    async fn three_options_one_line_each() {
        assert_eq!(
            run(
                ARTHAS,
                &[Measurement::Generation, Measurement::Load, Measurement::Rotation]
            )
            .await,
            "La turbina Arthas está:\nGenerando 3 A a 12 V.\nCargada al %80.\nGirando a 120 rpm."
        );
    }

    #[tokio::test]
    async fn status_does_not_count_toward_threshold() {
        assert_eq!(
            run(
                ARTHAS,
                &[Measurement::Status, Measurement::Generation, Measurement::Rotation]
            )
            .await,
            "La turbina Arthas está generando 3 A a 12 V y girando a 120 rpm."
        );
    }

    #[tokio::test]
    async fn all_turbines_one_block_each() {
        let text = run(TurbineSelection::All, &[Measurement::Rotation]).await;
        assert_eq!(
            text,
            "La turbina Arthas está girando a 120 rpm.\n\
             La turbina Berta está girando a 95 rpm.\n\
             La turbina Carlamagna está girando a 150 rpm."
        );
    }

    #[tokio::test]
    async fn all_turbines_status_with_three_measurements() {
        let text = run(
            TurbineSelection::All,
            &[
                Measurement::Status,
                Measurement::Generation,
                Measurement::Load,
                Measurement::Rotation,
            ],
        )
        .await;
        assert_eq!(
            text,
            "La turbina Arthas está:\nGenerando 3 A a 12 V.\nCargada al %80.\nGirando a 120 rpm.\n\
             La turbina Berta está:\nGenerando 2 A a 11 V.\nCargada al %55.\nGirando a 95 rpm.\n\
             La turbina Carlamagna está:\nGenerando 4 A a 10 V.\nCargada al %30.\nGirando a 150 rpm."
        );
    }

    #[tokio::test]
    async fn status_only_specific() {
        let telemetry = MockTelemetry::with_sample_readings().with_operating(Turbine::Berta, false);
        let text = compose(
            TurbineSelection::One(Turbine::Berta),
            &set(&[Measurement::Status]),
            &telemetry,
            &MockWindSensor::silent(),
        )
        .await;
        assert_eq!(text, "La turbina Berta no está generando.");
        assert!(telemetry.requested().is_empty());
    }

    #[tokio::test]
    async fn status_only_all() {
        assert_eq!(
            run(TurbineSelection::All, &[Measurement::Status]).await,
            "las turbinas Arthas, Berta y Carlamagna están generando."
        );
    }

    #[tokio::test]
    async fn status_only_all_none_running() {
        let mut telemetry = MockTelemetry::with_sample_readings();
        for t in Turbine::ALL {
            telemetry = telemetry.with_operating(t, false);
        }
        let text = compose(
            TurbineSelection::All,
            &set(&[Measurement::Status]),
            &telemetry,
            &MockWindSensor::silent(),
        )
        .await;
        assert_eq!(text, messages::NO_TURBINE_AVAILABLE);
    }

    #[tokio::test]
    async fn wind_only_needs_no_turbine() {
        assert_eq!(
            run(TurbineSelection::Unselected, &[Measurement::Wind]).await,
            "Hay 7.5 m/s de viento"
        );
    }

    #[tokio::test]
    async fn missing_turbine_keeps_wind_clause() {
        assert_eq!(
            run(
                TurbineSelection::Unselected,
                &[Measurement::Generation, Measurement::Wind]
            )
            .await,
            format!("{}\nHay 7.5 m/s de viento", messages::TURBINE_NOT_SPECIFIED)
        );
    }

    #[tokio::test]
    async fn missing_turbine_guidance() {
        assert_eq!(
            run(TurbineSelection::Unselected, &[Measurement::Load]).await,
            messages::TURBINE_NOT_SPECIFIED
        );
    }

    #[tokio::test]
    async fn wind_appended_after_turbine_answer() {
        assert_eq!(
            run(ARTHAS, &[Measurement::Rotation, Measurement::Wind]).await,
            "La turbina Arthas está girando a 120 rpm.\nHay 7.5 m/s de viento"
        );
    }

    #[tokio::test]
    async fn anemometer_unavailable() {
        for sensor in [MockWindSensor::silent(), MockWindSensor::failing()] {
            let text = compose(
                TurbineSelection::Unselected,
                &set(&[Measurement::Wind]),
                &MockTelemetry::new(),
                &sensor,
            )
            .await;
            assert_eq!(text, messages::ANEMOMETER_UNAVAILABLE);
        }
    }

    #[tokio::test]
    async fn failed_snapshot_does_not_hide_others() {
        let telemetry = MockTelemetry::with_sample_readings().with_unavailable(Turbine::Berta);
        let text = compose(
            TurbineSelection::All,
            &set(&[Measurement::Load]),
            &telemetry,
            &MockWindSensor::silent(),
        )
        .await;
        assert_eq!(
            text,
            "La turbina Arthas está cargada al %80.\n\
             La turbina Berta: datos no disponibles.\n\
             La turbina Carlamagna está cargada al %30."
        );
    }

    #[test]
    fn capitalize_handles_accents_and_empty() {
        assert_eq!(capitalize("álamo"), "Álamo");
        assert_eq!(capitalize(""), "");
    }
}
