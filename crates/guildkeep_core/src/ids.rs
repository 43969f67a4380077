//! Platform identifiers.
//!
//! All ids are opaque snowflakes. They serialize as bare integers, which
//! `serde_json` writes as string keys when used as map keys.

use serde::{Deserialize, Serialize};

macro_rules! snowflake {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            derive_more::Display,
            derive_more::From,
            derive_more::FromStr,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw snowflake value.
            pub fn get(self) -> u64 {
                self.0
            }
        }
    };
}

snowflake!(
    /// A community the bot serves; the top-level partition for all state.
    GuildId
);
snowflake!(
    /// A guild-scoped participant.
    MemberId
);
snowflake!(
    /// A role that can be configured as admin, moderator, or autorole.
    RoleId
);
snowflake!(
    /// A text channel used for welcome and goodbye messages.
    ChannelId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_ids_parse_and_display() {
        let guild: GuildId = "123456789012345678".parse().unwrap();
        assert_eq!(guild.get(), 123456789012345678);
        assert_eq!(guild.to_string(), "123456789012345678");
    }

    #[test]
    fn test_ids_as_json_map_keys() {
        let mut map = BTreeMap::new();
        map.insert(MemberId(42), 7u64);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"42":7}"#);

        let back: BTreeMap<MemberId, u64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
