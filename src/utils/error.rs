use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Iso8601Error {
    #[error("parsing time {value:?} as {layout:?}: {reason}", layout = crate::core::layout::LAYOUT)]
    Parse { value: String, reason: String },

    #[error("iso8601: year {year} outside of range [0,9999]")]
    Range { year: i32 },

    #[error("invalid {field} {value}: {reason}")]
    Invalid {
        field: String,
        value: String,
        reason: String,
    },
}

impl Iso8601Error {
    pub(crate) fn parse(value: &str, reason: impl Into<String>) -> Self {
        Iso8601Error::Parse {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Iso8601Error::Parse { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Iso8601Error::Range { .. })
    }
}

pub type Result<T> = std::result::Result<T, Iso8601Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_names_layout() {
        let err = Iso8601Error::parse("2017-08-23", "missing time part");
        let msg = err.to_string();
        assert!(msg.contains("\"2017-08-23\""));
        assert!(msg.contains(crate::core::layout::LAYOUT));
        assert!(msg.ends_with("missing time part"));
        assert!(err.is_parse());
        assert!(!err.is_range());
    }

    #[test]
    fn test_range_error_message() {
        let err = Iso8601Error::Range { year: 10000 };
        assert_eq!(
            err.to_string(),
            "iso8601: year 10000 outside of range [0,9999]"
        );
        assert!(err.is_range());
    }
}
