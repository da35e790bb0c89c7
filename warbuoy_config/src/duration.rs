use std::ops::Deref;

use serde::Deserialize;

/// A duration written like `"10s"`, `"250ms"` or `"1m 30s"`. A number without
/// a unit is read as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s)
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid duration: {s:?}")))
    }
}

fn parse(s: &str) -> Option<std::time::Duration> {
    let mut out = std::time::Duration::default();
    for part in s.split_whitespace() {
        let digits = part.bytes().take_while(u8::is_ascii_digit).count();
        let (value, unit) = part.split_at(digits);
        let value = value.parse::<u64>().ok()?;
        let millis = match unit {
            "ms" => 1,
            "" | "s" => 1000,
            "m" => 60 * 1000,
            "h" => 60 * 60 * 1000,
            "d" => 24 * 60 * 60 * 1000,
            _ => return None,
        };
        out += std::time::Duration::from_millis(value.checked_mul(millis)?);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13_000)),
            ("250ms", Some(250)),
            ("42m", Some(42 * 60 * 1000)),
            ("7h", Some(7 * 60 * 60 * 1000)),
            ("20d", Some(20 * 24 * 60 * 60 * 1000)),
            ("5", Some(5000)),
            ("", Some(0)),
            ("1m 30s", Some(90_000)),
            ("1d 2h 3m 4s 5ms", Some((((24 + 2) * 60 + 3) * 60 + 4) * 1000 + 5)),
            ("xyz", None),
            ("s", None),
            ("7dd", None),
            ("10 s", None),
        ] {
            let value = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(value)
                .ok()
                .map(|x| x.0.as_millis());
            assert_eq!(output, expected, "{input}");
        }
    }
}
