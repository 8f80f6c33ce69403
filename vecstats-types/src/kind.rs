use std::fmt;

use arrow::datatypes::DataType;

/// Tag for the numeric element kinds a statistics vector may carry.
///
/// The set is closed: [`ElementKind::from_data_type`] maps a host data type
/// onto a variant, or returns `None` when no fold/finalize arm exists for it.
/// Supporting a new kind means adding a variant here and the matching arms in
/// the accumulator; the fold algorithm itself does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit signed integer (`INTEGER`).
    Int32,
}

impl ElementKind {
    /// Every kind the accumulator has arms for.
    pub const SUPPORTED: &'static [ElementKind] = &[ElementKind::Int32];

    /// Resolve a host data type to a supported kind.
    pub fn from_data_type(data_type: &DataType) -> Option<Self> {
        match data_type {
            DataType::Int32 => Some(ElementKind::Int32),
            _ => None,
        }
    }

    /// The Arrow data type used to materialize values of this kind.
    pub fn data_type(self) -> DataType {
        match self {
            ElementKind::Int32 => DataType::Int32,
        }
    }

    /// SQL-facing name used in error messages.
    pub fn sql_name(self) -> &'static str {
        match self {
            ElementKind::Int32 => "INTEGER",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_int32_resolves() {
        assert_eq!(
            ElementKind::from_data_type(&DataType::Int32),
            Some(ElementKind::Int32)
        );
        for other in [
            DataType::Int16,
            DataType::Int64,
            DataType::UInt32,
            DataType::Float64,
            DataType::Utf8,
        ] {
            assert_eq!(ElementKind::from_data_type(&other), None, "{other:?}");
        }
    }

    #[test]
    fn supported_kinds_round_trip_through_data_type() {
        for kind in ElementKind::SUPPORTED {
            assert_eq!(ElementKind::from_data_type(&kind.data_type()), Some(*kind));
        }
    }
}
