use weight_compare::charts::{ChartDefaults, ChartState, ChartType};
use weight_compare::data::decode_payload;

/// Escape a JSON document the way the host page embeds it.
pub fn escape(json: &str) -> String {
    json.replace('"', "&quot;")
}

pub const TWO_USERS: &str = r#"{"dates":["2021-01-01","2021-01-02"],"user_weights":{"alice":[70,71],"bob":[80,null]}}"#;

pub fn chart_from(json: &str, chart_type: ChartType) -> ChartState {
    let dataset = decode_payload(&escape(json)).expect("valid payload");
    ChartState::from_dataset(&dataset, chart_type, ChartDefaults::default()).expect("chart")
}
