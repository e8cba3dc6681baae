use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// World object IDs, assigned by the game server
define_id!(ContactId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_id_serializes_as_bare_integer() {
        let id = ContactId::new(1042);
        assert_eq!(serde_json::to_string(&id).unwrap(), "1042");
        assert_eq!(serde_json::from_str::<ContactId>("7").unwrap(), ContactId::from(7));
    }

    #[test]
    fn contact_id_display() {
        assert_eq!(ContactId::new(12).to_string(), "#12");
        assert_eq!(i32::from(ContactId::new(-3)), -3);
    }
}
