//! Option value-type classification.
//!
//! Option records carry a free-text `value_type` tag. [`OptionValueType`]
//! closes that vocabulary at the boundary, and [`OptionValueType::mapping`]
//! is the single lookup table turning a tag into a property type. The table
//! is lossy on purpose: mounts, ports, durations, filters and every unknown
//! tag become plain strings.

use wrapgen_core::PropertyType;

/// Item format used for map-valued options (`--label key:value`).
pub const MAP_ITEM_FORMAT: &str = "{key}:{value}";

/// Closed classification of an option's value-type tag.
///
/// # Examples
///
/// ```
/// use wrapgen_generator::value_type::OptionValueType;
///
/// assert_eq!(OptionValueType::from_tag("stringSlice"), OptionValueType::StringSlice);
/// assert_eq!(OptionValueType::from_tag("ulimit"), OptionValueType::Other("ulimit".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValueType {
    String,
    Bool,
    Int,
    Float,
    Decimal,
    Int64,
    Bytes,
    List,
    StringSlice,
    Map,
    Uint16,
    Uint64,
    Uint,
    /// Any other tag, including the empty tag.
    Other(String),
}

/// Result of mapping a value-type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapping {
    pub ty: PropertyType,
    pub nullable: bool,
    pub item_format: Option<String>,
}

impl TypeMapping {
    fn plain(ty: PropertyType) -> Self {
        Self {
            ty,
            nullable: false,
            item_format: None,
        }
    }

    fn nullable(ty: PropertyType) -> Self {
        Self {
            ty,
            nullable: true,
            item_format: None,
        }
    }
}

impl OptionValueType {
    /// Classifies a free-text tag. Matching is exact (tags are case-sensitive).
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "string" => Self::String,
            "bool" => Self::Bool,
            "int" => Self::Int,
            "float" => Self::Float,
            "decimal" => Self::Decimal,
            "int64" => Self::Int64,
            "bytes" => Self::Bytes,
            "list" => Self::List,
            "stringSlice" => Self::StringSlice,
            "map" => Self::Map,
            "uint16" => Self::Uint16,
            "uint64" => Self::Uint64,
            "uint" => Self::Uint,
            other => Self::Other(other.to_string()),
        }
    }

    /// Maps the classification to a property type.
    ///
    /// # Examples
    ///
    /// ```
    /// use wrapgen_core::PropertyType;
    /// use wrapgen_generator::value_type::OptionValueType;
    ///
    /// let mapping = OptionValueType::from_tag("int64").mapping();
    /// assert_eq!(mapping.ty, PropertyType::Long);
    /// assert!(mapping.nullable);
    ///
    /// let mapping = OptionValueType::from_tag("map").mapping();
    /// assert_eq!(mapping.ty, PropertyType::StringMap);
    /// assert_eq!(mapping.item_format.as_deref(), Some("{key}:{value}"));
    /// ```
    pub fn mapping(&self) -> TypeMapping {
        match self {
            Self::String => TypeMapping::plain(PropertyType::String),
            Self::Bool => TypeMapping::nullable(PropertyType::Bool),
            Self::Int => TypeMapping::nullable(PropertyType::Int),
            Self::Float => TypeMapping::nullable(PropertyType::Float),
            Self::Decimal => TypeMapping::nullable(PropertyType::Decimal),
            Self::Int64 | Self::Bytes => TypeMapping::nullable(PropertyType::Long),
            Self::List | Self::StringSlice => TypeMapping::plain(PropertyType::StringList),
            Self::Map => TypeMapping {
                ty: PropertyType::StringMap,
                nullable: false,
                item_format: Some(MAP_ITEM_FORMAT.to_string()),
            },
            Self::Uint16 | Self::Uint64 | Self::Uint => TypeMapping::plain(PropertyType::Int),
            Self::Other(_) => TypeMapping::plain(PropertyType::String),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRING_LIKE_TAGS: &[&str] = &[
        "mount",
        "credential-spec",
        "command",
        "network",
        "pref",
        "port",
        "secret",
        "pem-file",
        "external-ca",
        "node-addr",
        "ulimit",
        "filter",
        "duration",
        "config",
    ];

    const TYPED_TAGS: &[&str] = &[
        "string",
        "bool",
        "int",
        "float",
        "decimal",
        "int64",
        "bytes",
        "list",
        "stringSlice",
        "map",
        "uint16",
        "uint64",
        "uint",
    ];

    #[test]
    fn test_every_known_tag_maps_to_a_target_type() {
        for tag in TYPED_TAGS {
            let value_type = OptionValueType::from_tag(tag);
            assert!(
                !matches!(value_type, OptionValueType::Other(_)),
                "{tag} should be typed"
            );
            let mapping = value_type.mapping();
            assert!(!mapping.ty.to_string().is_empty(), "{tag}");
            assert!(mapping.ty.enumeration().is_none(), "{tag}");
        }
    }

    #[test]
    fn test_string_like_and_unknown_tags_map_to_string() {
        for tag in STRING_LIKE_TAGS.iter().chain(["", "weird", "String", "uint32"].iter()) {
            let mapping = OptionValueType::from_tag(tag).mapping();
            assert_eq!(mapping.ty, PropertyType::String, "{tag}");
            assert!(!mapping.nullable, "{tag}");
            assert!(mapping.item_format.is_none(), "{tag}");
        }
    }

    #[test]
    fn test_nullable_scalars() {
        let cases = [
            ("bool", PropertyType::Bool),
            ("int", PropertyType::Int),
            ("float", PropertyType::Float),
            ("decimal", PropertyType::Decimal),
            ("bytes", PropertyType::Long),
        ];
        for (tag, expected) in cases {
            let mapping = OptionValueType::from_tag(tag).mapping();
            assert_eq!(mapping.ty, expected, "{tag}");
            assert!(mapping.nullable, "{tag}");
        }
    }

    #[test]
    fn test_unsigned_collapse_to_plain_int() {
        for tag in ["uint16", "uint64", "uint"] {
            let mapping = OptionValueType::from_tag(tag).mapping();
            assert_eq!(mapping.ty, PropertyType::Int);
            assert!(!mapping.nullable);
        }
    }

    #[test]
    fn test_list_tags() {
        for tag in ["list", "stringSlice"] {
            assert_eq!(
                OptionValueType::from_tag(tag).mapping().ty,
                PropertyType::StringList
            );
        }
    }
}
