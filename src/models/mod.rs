/// Serializes a code enum as its canonical short string and deserializes it
/// through `FromStr`. An empty string maps back to the `None` sentinel.
macro_rules! impl_string_serde {
    ($ty:ident) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                if raw.is_empty() {
                    return Ok($ty::None);
                }
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod address;
pub mod codes;
pub mod country;
pub mod currency;
