//! Wire-format JSON rendering.
//!
//! Downstream consumers of the relay output were built against payloads
//! with a space after `:` and `,` (`{"Name": "Deer", "Confidence": 98.2}`),
//! so the compact serializer is not a drop-in. This formatter keeps
//! everything on one line but preserves that spacing.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

#[derive(Debug, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `value` as single-line JSON with spaced separators.
pub fn to_spaced_string<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_get_spaced_separators() {
        let rendered = to_spaced_string(&json!({"foo": "bar"})).unwrap();
        assert_eq!(rendered, r#"{"foo": "bar"}"#);
    }

    #[test]
    fn arrays_of_objects_stay_on_one_line() {
        let rendered =
            to_spaced_string(&json!([{"a": 1, "b": 2.5}, {"a": 3, "b": 4.0}])).unwrap();
        assert_eq!(rendered, r#"[{"a": 1, "b": 2.5}, {"a": 3, "b": 4.0}]"#);
    }

    #[test]
    fn nested_json_strings_are_escaped() {
        let inner = to_spaced_string(&json!({"foo": "bar"})).unwrap();
        let rendered = to_spaced_string(&json!({"default": inner, "email": "hello"})).unwrap();
        assert_eq!(
            rendered,
            r#"{"default": "{\"foo\": \"bar\"}", "email": "hello"}"#
        );
    }
}
