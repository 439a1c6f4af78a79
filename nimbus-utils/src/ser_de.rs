// Copyright (c) Microsoft. All rights reserved.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer, MapAccess, Visitor};
use serde::Serialize;

use crate::error::Error;

// This implementation has been adapted from: https://serde.rs/string-or-struct.html

/// Deserializes either an inline map or a JSON string holding the same shape.
///
/// The request models implement `FromStr` over their JSON rendering, so a
/// document embedding a request may carry it pre-serialized.
pub fn string_or_struct<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + FromStr<Err = serde_json::Error>,
    D: Deserializer<'de>,
{
    // Forwards string input to T's `FromStr` impl and map input to T's
    // `Deserialize` impl. The `PhantomData` pins down the Value type for the
    // Visitor impl.
    struct StringOrStruct<T>(PhantomData<fn() -> T>);

    impl<'de, T> Visitor<'de> for StringOrStruct<T>
    where
        T: Deserialize<'de> + FromStr<Err = serde_json::Error>,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("string or map")
        }

        fn visit_str<E>(self, value: &str) -> Result<T, E>
        where
            E: de::Error,
        {
            FromStr::from_str(value).map_err(de::Error::custom)
        }

        fn visit_map<M>(self, visitor: M) -> Result<T, M::Error>
        where
            M: MapAccess<'de>,
        {
            Deserialize::deserialize(de::value::MapAccessDeserializer::new(visitor))
        }
    }

    deserializer.deserialize_any(StringOrStruct(PhantomData))
}

/// Deep-copies a value by round-tripping it through its serde representation.
pub fn serde_clone<T>(inp: &T) -> Result<T, Error>
where
    T: Serialize + DeserializeOwned,
{
    serde_json::to_string(inp)
        .and_then(|s| serde_json::from_str(&s))
        .map_err(Error::SerdeClone)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::{serde_clone, string_or_struct};

    #[derive(Debug, Deserialize)]
    struct Profile {
        name: String,
        zone: Option<String>,
    }

    impl FromStr for Profile {
        type Err = serde_json::Error;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            serde_json::from_str(s)
        }
    }

    #[derive(Debug, Deserialize)]
    struct Launch {
        #[serde(deserialize_with = "string_or_struct")]
        profile: Profile,
    }

    #[test]
    fn deser_from_map() {
        let launch_json = json!({
            "profile": {
                "name": "web",
                "zone": "us-west-2a"
            }
        })
        .to_string();

        let launch: Launch = serde_json::from_str(&launch_json).unwrap();
        assert_eq!("web", launch.profile.name);
        assert_eq!("us-west-2a", launch.profile.zone.unwrap());
    }

    #[test]
    fn deser_from_str() {
        let launch_json = json!({
            "profile": json!({
                "name": "web",
                "zone": "us-west-2a"
            }).to_string()
        })
        .to_string();

        let launch: Launch = serde_json::from_str(&launch_json).unwrap();
        assert_eq!("web", launch.profile.name);
        assert_eq!("us-west-2a", launch.profile.zone.unwrap());
    }

    #[test]
    fn deser_from_bad_str_fails() {
        let launch_json = json!({
            "profile": "not really json you know"
        })
        .to_string();

        let launch: Result<Launch, _> = serde_json::from_str(&launch_json);
        assert!(launch.is_err());
    }

    #[test]
    fn serde_clone_copies_all_fields() {
        #[derive(Serialize, Deserialize)]
        struct CloneMe {
            name: String,
            count: u8,
        }

        let c1 = CloneMe {
            name: "p1".to_string(),
            count: 10,
        };
        let c2 = serde_clone(&c1).unwrap();
        assert_eq!(c1.name, c2.name);
        assert_eq!(c1.count, c2.count);
    }
}
