//! Fixed reply texts.

pub const SHOUT_NOTICE: &str = "No me grite";

pub const PAIRED_TURBINES: &str = "Solo puedo decir de una turbina o todas, no de a pares :)";

pub const ASK_MEASUREMENT: &str =
    "¿Qué desea saber? ¿Viento, generacion, nivel de batería o revoluciones?";

pub const ASK_TURBINE: &str = "¿Y de qué turbina?¿Arthas, Berta, Carla o todas?";

pub const TURBINE_NOT_SPECIFIED: &str = "No indicó la turbina, están Arthas, Berta y Carlamagna.";

pub const NO_TURBINE_AVAILABLE: &str = "No hay turbina disponible.";

pub const ANEMOMETER_UNAVAILABLE: &str = "Anemómetro no disponible";

pub const NONE_RUNNING: &str = "Ahora mismo no hay ninguna turbina funcionando";

const CAPABILITIES: &str = "Te puedo decir:\
\n● Cuanto generan (V/A)\
\n● Cuanto giran (RPM)\
\n● Velocidad del viento (Km/h)\
\n● Porcentaje de carga de batería (%)";

/// Help reply given the "which turbines are running" fragment.
pub fn help(running: Option<&str>) -> String {
    match running {
        Some(fragment) => format!(
            "Me podés preguntar por {fragment} acerca de cuanto giran, generan o su nivel de batería además de la velocidad del viento"
        ),
        None => NONE_RUNNING.to_string(),
    }
}

/// One-time welcome for a member who joined the conversation.
pub fn welcome(member_name: &str, running: Option<&str>) -> String {
    match running {
        Some(fragment) => format!("Hola {member_name}, {fragment} {CAPABILITIES}"),
        None => format!(
            "Hola {member_name}, no hay ninguna turbina funcionando. Eventualmente te podré decir cuanto generan, giran, su carga y la velocidad del viento"
        ),
    }
}

pub fn wind(speed: f64) -> String {
    format!("Hay {speed} m/s de viento")
}

pub fn turbine_status(name: &str, operating: bool) -> String {
    let negation = if operating { "" } else { "no " };
    format!("La turbina {name} {negation}está generando.")
}

pub fn status_unavailable(name: &str) -> String {
    format!("No se pudo consultar el estado de la turbina {name}.")
}

pub fn snapshot_unavailable(name: &str) -> String {
    format!("La turbina {name}: datos no disponibles.")
}
