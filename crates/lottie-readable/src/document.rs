use crate::{RemapError, Remapper, DURATION_KEY};
use lottie_schema::SchemaId;
use serde_json::{Map, Value};
use tracing::debug;

impl Remapper<'_> {
    /// Remaps a whole document in the configured direction.
    ///
    /// The composition record is transcribed with the `COMP` schema; its
    /// `assets` and `layers` lists go through the same record walk, and the
    /// forward direction adds a `duration` derived from `op` and `fr`.
    pub fn convert(&self, document: &Value) -> Result<Value, RemapError> {
        let Value::Object(record) = document else {
            return Err(RemapError::UnexpectedShape {
                context: "composition".into(),
                expected: "a record",
            });
        };

        let comp = self.schema(SchemaId::Comp)?;
        let mut out = self.remap_record(record, comp)?;
        if self.is_forward() {
            match composition_duration(record) {
                Some(duration) => {
                    out.insert(DURATION_KEY.to_string(), Value::String(duration));
                }
                None => debug!("composition has no usable `op`/`fr`, skipping duration"),
            }
        }
        Ok(Value::Object(out))
    }

    pub(crate) fn remap_layers(&self, raw: &Value) -> Result<Value, RemapError> {
        self.remap_list(raw, SchemaId::Layer, "layers")
    }

    pub(crate) fn remap_assets(&self, raw: &Value) -> Result<Value, RemapError> {
        self.remap_list(raw, SchemaId::Asset, "assets")
    }

    fn remap_list(&self, raw: &Value, id: SchemaId, context: &str) -> Result<Value, RemapError> {
        let Value::Array(items) = raw else {
            return Err(RemapError::UnexpectedShape {
                context: context.to_string(),
                expected: "a list",
            });
        };
        let schema = self.schema(id)?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => self.remap_record(record, schema).map(Value::Object),
                _ => Err(RemapError::UnexpectedShape {
                    context: format!("{context}[{index}]"),
                    expected: "a record",
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

fn composition_duration(record: &Map<String, Value>) -> Option<String> {
    let last_frame = record.get("op")?.as_f64()?;
    let frame_rate = record.get("fr")?.as_f64()?;
    format_duration(last_frame, frame_rate)
}

/// Formats the length of a composition ending at `last_frame` as
/// `"<seconds>:<frames>"`.
///
/// Seconds are `(last_frame - 1) / frame_rate` printed with two decimals and
/// cut at the point, so `29.999` seconds reads as `30`. Frames are the
/// remainder of `last_frame - 1` by `frame_rate`. Returns `None` for a zero or
/// non-finite rate.
pub fn format_duration(last_frame: f64, frame_rate: f64) -> Option<String> {
    if frame_rate == 0.0 || !frame_rate.is_finite() || !last_frame.is_finite() {
        return None;
    }
    let elapsed = last_frame - 1.0;
    let fixed = format!("{:.2}", elapsed / frame_rate);
    let seconds = fixed.split('.').next().unwrap_or_default();
    let frames = elapsed % frame_rate;
    // -0 prints as "-0"
    let frames = if frames == 0.0 { 0.0 } else { frames };
    Some(format!("{seconds}:{frames}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(30.0, 24.0).as_deref(), Some("1:5"));
        assert_eq!(format_duration(2000.0, 1000.0).as_deref(), Some("2:999"));
        assert_eq!(format_duration(61.0, 30.0).as_deref(), Some("2:0"));
        assert_eq!(format_duration(1.0, 24.0).as_deref(), Some("0:0"));
        assert_eq!(format_duration(45.5, 30.0).as_deref(), Some("1:14.5"));
    }

    #[test]
    fn test_format_duration_rejects_zero_rate() {
        assert_eq!(format_duration(30.0, 0.0), None);
        assert_eq!(format_duration(f64::NAN, 24.0), None);
    }

    #[test]
    fn test_duration_needs_numeric_fields() {
        let record = json!({"op": "30", "fr": 24});
        assert_eq!(composition_duration(record.as_object().unwrap()), None);

        let record = json!({"fr": 24});
        assert_eq!(composition_duration(record.as_object().unwrap()), None);

        let record = json!({"op": 90, "fr": 30});
        assert_eq!(
            composition_duration(record.as_object().unwrap()).as_deref(),
            Some("2:29")
        );
    }
}
